// ==========================================
// 时刻维度表生成器 - 列投影
// ==========================================
// 职责: 按 ColumnPolicy 过滤列，物化完整输出表
// 红线: 只过滤不重排；列序始终为自然列序
// ==========================================

use serde::Serialize;

use crate::domain::{ColumnPolicy, TimeColumn, TimeRow};

// ==========================================
// ProjectedTable - 投影后的输出表
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedTable {
    pub columns: Vec<TimeColumn>,
    pub rows: Vec<Vec<String>>,
}

impl ProjectedTable {
    /// 表头
    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(TimeColumn::as_str).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 投影全部行
pub fn project<I>(rows: I, policy: &ColumnPolicy) -> ProjectedTable
where
    I: IntoIterator<Item = TimeRow>,
{
    let columns = policy.columns();
    let rows = rows
        .into_iter()
        .map(|row| columns.iter().map(|c| row.value(*c)).collect())
        .collect();

    ProjectedTable { columns, rows }
}
