// ==========================================
// 时刻维度表生成器 - 领域模型层
// ==========================================
// 职责: 定义时间窗口、生成行、输出列与列过滤策略
// 红线: 不含解析逻辑,不含文件输出逻辑
// ==========================================

pub mod time;
pub mod types;

// 重导出核心类型
pub use time::{TimeRow, TimeSpec, LEAP_SECOND_SENTINEL, SECONDS_PER_DAY};
pub use types::{ColumnPolicy, TimeColumn};
