// ==========================================
// 时刻维度表生成器 - 引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 列配置 / 时间格式 / 时间范围 / 时间窗口 / 步长
// ==========================================

use thiserror::Error;

/// 配置校验错误
///
/// 所有错误均在生成任何行之前检出（快速失败，不产生部分输出）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    // ===== 列配置错误 =====
    #[error("SKIP_TIME_COLUMNS 与 INCLUDE_TIME_COLUMNS 互斥，不能同时设置")]
    ExclusiveColumnFilters,

    #[error("SKIP_TIME_COLUMNS 不能包含主键列 time_int")]
    PrimaryKeyExcluded,

    #[error("INCLUDE_TIME_COLUMNS 必须包含主键列 time_int")]
    PrimaryKeyNotIncluded,

    // ===== 时间格式错误 =====
    #[error("{setting} 格式错误: 必须为 HH:MM:SS（冒号可省略），实际为 '{value}'")]
    MalformedTime {
        setting: &'static str,
        value: String,
    },

    // ===== 时间范围错误 =====
    #[error("{setting} 超出范围: {hour:02}:{minute:02}:{second:02}")]
    TimeOutOfRange {
        setting: &'static str,
        hour: u32,
        minute: u32,
        second: u32,
    },

    #[error("{setting}: 60 秒仅允许用于闰秒 23:59:60，实际为 {hour:02}:{minute:02}:60")]
    LeapSecondNotAllowed {
        setting: &'static str,
        hour: u32,
        minute: u32,
    },

    // ===== 时间窗口错误 =====
    #[error("START_TIME 必须早于 END_TIME (start={start_seconds}s, end={end_seconds}s)")]
    InvertedWindow {
        start_seconds: u32,
        end_seconds: u32,
    },

    // ===== 步长错误 =====
    #[error("TIME_STEP 必须以 's'（秒）、'm'（分）或 'h'（时）结尾，实际为 '{0}'")]
    InvalidStepUnit(String),

    #[error("TIME_STEP 单位前必须为整数，实际为 '{0}'")]
    InvalidStepValue(String),

    #[error("TIME_STEP 必须为正数，实际为 '{0}'")]
    NonPositiveStep(String),
}

/// 生成流程错误
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("输出文件写入失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV 写出失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("输出文件落盘失败 ({path}): {source}")]
    Persist {
        path: String,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Result 类型别名
pub type GenerateResult<T> = Result<T, GenerateError>;
