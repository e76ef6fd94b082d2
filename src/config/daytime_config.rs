// ==========================================
// 时刻维度表生成器 - 生成配置
// ==========================================
// 职责: 读取原始文本配置，未设置项取默认值
// 红线: 只读不校验；解析与校验由 engine::validator 负责
// ==========================================

use serde::Serialize;
use std::path::PathBuf;

use crate::config::config_source::{ConfigSource, EnvSource};

/// 输出文件名
pub const OUTPUT_FILE_NAME: &str = "daytime.csv";

// ==========================================
// DaytimeConfig - 原始生成配置
// ==========================================
// 启动时构建一次，显式传入 pipeline::run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaytimeConfig {
    pub exclude_columns: Option<String>, // 逗号分隔，与 include_columns 互斥
    pub include_columns: Option<String>, // 逗号分隔，必须包含 time_int
    pub start_time: String,              // HH:MM:SS 或 HHMMSS
    pub end_time: String,                // HH:MM:SS 或 HHMMSS，允许 23:59:60
    pub time_step: String,               // <正整数><s|m|h>
    pub output_dir: PathBuf,
}

impl Default for DaytimeConfig {
    fn default() -> Self {
        Self {
            exclude_columns: None,
            include_columns: None,
            start_time: defaults::START_TIME.to_string(),
            end_time: defaults::END_TIME.to_string(),
            time_step: defaults::TIME_STEP.to_string(),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
        }
    }
}

impl DaytimeConfig {
    /// 从进程环境变量读取
    pub fn from_env() -> Self {
        Self::from_source(&EnvSource)
    }

    /// 从任意配置来源读取，从不失败
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        let or_default = |key: &str, default: &str| -> String {
            source.get(key).unwrap_or_else(|| default.to_string())
        };

        Self {
            exclude_columns: source.get(config_keys::SKIP_TIME_COLUMNS),
            include_columns: source.get(config_keys::INCLUDE_TIME_COLUMNS),
            start_time: or_default(config_keys::START_TIME, defaults::START_TIME),
            end_time: or_default(config_keys::END_TIME, defaults::END_TIME),
            time_step: or_default(config_keys::TIME_STEP, defaults::TIME_STEP),
            output_dir: PathBuf::from(or_default(config_keys::OUTPUT_DIR, defaults::OUTPUT_DIR)),
        }
    }

    /// 输出文件完整路径
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }

    /// 获取配置快照（JSON格式），用于日志记录
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 列过滤
    pub const SKIP_TIME_COLUMNS: &str = "SKIP_TIME_COLUMNS";
    pub const INCLUDE_TIME_COLUMNS: &str = "INCLUDE_TIME_COLUMNS";

    // 时间窗口
    pub const START_TIME: &str = "START_TIME";
    pub const END_TIME: &str = "END_TIME";
    pub const TIME_STEP: &str = "TIME_STEP";

    // 输出
    pub const OUTPUT_DIR: &str = "OUTPUT_DIR";
}

// ==========================================
// 默认值
// ==========================================
pub mod defaults {
    pub const START_TIME: &str = "00:00:00";
    pub const END_TIME: &str = "23:59:59";
    pub const TIME_STEP: &str = "1m";
    pub const OUTPUT_DIR: &str = "./output";
}
