// ==========================================
// 时刻维度表生成器 - 领域类型定义
// ==========================================
// 职责: 输出列定义 + 列过滤策略
// 红线: time_int 为主键列，任何过滤策略都不得移除
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ==========================================
// 输出列 (Time Column)
// ==========================================
// 声明顺序即输出顺序（自然列序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeColumn {
    TimeInt,      // HHMMSS 整数，主键
    TimeString12, // 12 小时制 "09:30:05 AM"
    TimeString24, // 24 小时制 "09:30:05"
    Hour,
    Minute,
    Second,
}

impl TimeColumn {
    /// 全部列（自然列序）
    pub const ALL: [TimeColumn; 6] = [
        TimeColumn::TimeInt,
        TimeColumn::TimeString12,
        TimeColumn::TimeString24,
        TimeColumn::Hour,
        TimeColumn::Minute,
        TimeColumn::Second,
    ];

    /// 主键列
    pub const PRIMARY_KEY: TimeColumn = TimeColumn::TimeInt;

    /// 列名（CSV 表头）
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeColumn::TimeInt => "time_int",
            TimeColumn::TimeString12 => "time_string12",
            TimeColumn::TimeString24 => "time_string24",
            TimeColumn::Hour => "hour",
            TimeColumn::Minute => "minute",
            TimeColumn::Second => "second",
        }
    }

    /// 按列名查找，未知列名返回 None
    pub fn from_name(name: &str) -> Option<Self> {
        TimeColumn::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for TimeColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// 列过滤策略 (Column Policy)
// ==========================================
// Exclude 与 Include 互斥，由校验器保证主键约束
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "mode", content = "columns", rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// 输出全部列
    #[default]
    All,
    /// 排除指定列
    Exclude(BTreeSet<TimeColumn>),
    /// 仅保留指定列（不改变自然列序）
    Include(Vec<TimeColumn>),
}

impl ColumnPolicy {
    /// 策略作用后的输出列（自然列序，无重复）
    pub fn columns(&self) -> Vec<TimeColumn> {
        TimeColumn::ALL
            .into_iter()
            .filter(|c| self.keeps(*c))
            .collect()
    }

    /// 判断某列是否保留
    pub fn keeps(&self, column: TimeColumn) -> bool {
        match self {
            ColumnPolicy::All => true,
            ColumnPolicy::Exclude(excluded) => !excluded.contains(&column),
            ColumnPolicy::Include(included) => included.contains(&column),
        }
    }
}
