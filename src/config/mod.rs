// ==========================================
// 时刻维度表生成器 - 配置层
// ==========================================
// 职责: 原始文本配置读取,未设置项取默认值
// 来源: 进程环境变量 / 内存键值表
// ==========================================

pub mod config_source;
pub mod daytime_config;

// 重导出核心配置类型
pub use config_source::{ConfigSource, EnvSource, MapSource};
pub use daytime_config::{config_keys, defaults, DaytimeConfig, OUTPUT_FILE_NAME};
