// ==========================================
// 时刻维度表生成器 - 时间领域模型
// ==========================================
// 职责: 标准化时间窗口 (TimeSpec) + 生成行 (TimeRow)
// 红线: 86400 秒仅表示闰秒哨兵 23:59:60，不滚动到次日
// ==========================================

use chrono::NaiveTime;
use serde::Serialize;

use crate::domain::types::TimeColumn;

/// 一天的秒数
pub const SECONDS_PER_DAY: u32 = 86_400;

/// 闰秒哨兵（23:59:60），仅允许作为结束边界
pub const LEAP_SECOND_SENTINEL: u32 = SECONDS_PER_DAY;

// ==========================================
// TimeSpec - 标准化时间窗口
// ==========================================
// 不变量: start_seconds < end_seconds, step_seconds > 0
// 仅由校验器创建，创建后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpec {
    start_seconds: u32, // [0, 86399]
    end_seconds: u32,   // [0, 86400]
    step_seconds: u32,  // > 0
}

impl TimeSpec {
    pub(crate) fn from_validated(start_seconds: u32, end_seconds: u32, step_seconds: u32) -> Self {
        debug_assert!(start_seconds < end_seconds);
        debug_assert!(end_seconds <= LEAP_SECOND_SENTINEL);
        debug_assert!(step_seconds > 0);
        Self {
            start_seconds,
            end_seconds,
            step_seconds,
        }
    }

    pub fn start_seconds(&self) -> u32 {
        self.start_seconds
    }

    pub fn end_seconds(&self) -> u32 {
        self.end_seconds
    }

    pub fn step_seconds(&self) -> u32 {
        self.step_seconds
    }

    /// 生成行数 = floor((end - start) / step) + 1
    pub fn row_count(&self) -> usize {
        ((self.end_seconds - self.start_seconds) / self.step_seconds) as usize + 1
    }
}

// ==========================================
// TimeRow - 单个时刻的生成记录
// ==========================================
// 字段名即 CSV 列名
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRow {
    pub time_int: u32,         // HHMMSS，如 93005
    pub time_string12: String, // "09:30:05 AM"
    pub time_string24: String, // "09:30:05"
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeRow {
    /// 渲染单元格
    pub fn value(&self, column: TimeColumn) -> String {
        match column {
            TimeColumn::TimeInt => self.time_int.to_string(),
            TimeColumn::TimeString12 => self.time_string12.clone(),
            TimeColumn::TimeString24 => self.time_string24.clone(),
            TimeColumn::Hour => self.hour.to_string(),
            TimeColumn::Minute => self.minute.to_string(),
            TimeColumn::Second => self.second.to_string(),
        }
    }

    /// 是否为闰秒哨兵行
    pub fn is_leap_second(&self) -> bool {
        self.second == 60
    }

    /// 转换为 chrono 时刻
    ///
    /// 闰秒哨兵使用 chrono 的闰秒表示（23:59:59 + 1_000_000_000 纳秒）
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if self.is_leap_second() {
            NaiveTime::from_hms_nano_opt(self.hour, self.minute, 59, 1_000_000_000)
        } else {
            NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
        }
    }
}
