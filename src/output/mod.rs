// ==========================================
// 时刻维度表生成器 - 输出层
// ==========================================
// 职责: 输出表落盘（整个流水线唯一的副作用）
// ==========================================

pub mod csv_writer;

pub use csv_writer::CsvTableWriter;
