// ==========================================
// 时刻维度表生成器 - 核心库
// ==========================================
// 定位: 种子数据流水线中的时刻维度表（daytime）生成器
// 流程: 配置 → 校验 → 枚举 → 投影 → CSV 写出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 时间窗口、生成行、列定义
pub mod domain;

// 配置层 - 原始文本配置
pub mod config;

// 引擎层 - 校验、枚举、投影
pub mod engine;

// 输出层 - CSV 落盘
pub mod output;

// 流水线入口
pub mod pipeline;

// 种子数据编排
pub mod runner;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{ConfigSource, DaytimeConfig, EnvSource, MapSource};
pub use domain::{ColumnPolicy, TimeColumn, TimeRow, TimeSpec};
pub use engine::{ConfigError, GenerateError, GenerateResult, ProjectedTable, TimeEnumerator};
pub use pipeline::{run, GenerationReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "时刻维度表生成器";
