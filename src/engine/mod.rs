// ==========================================
// 时刻维度表生成器 - 引擎层
// ==========================================
// 职责: 校验 → 枚举 → 投影
// 红线: 引擎纯计算,不做文件 IO
// ==========================================

pub mod enumerator;
pub mod error;
pub mod projector;
pub mod validator;

// 重导出核心引擎
pub use enumerator::{derive_row, enumerate, TimeEnumerator};
pub use error::{ConfigError, GenerateError, GenerateResult};
pub use projector::{project, ProjectedTable};
pub use validator::{
    check_time_range, parse_clock_time, parse_column_policy, parse_hms, parse_step,
    parse_time_digits, validate, TimeBound,
};
