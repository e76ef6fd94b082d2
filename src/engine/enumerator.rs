// ==========================================
// 时刻维度表生成器 - 时刻枚举器
// ==========================================
// 职责: TimeSpec → 有序 TimeRow 序列（闭区间，按步长递增）
// 红线: 闰秒哨兵 86400 渲染为 23:59:60，不滚动到次日
// ==========================================

use std::iter::FusedIterator;

use crate::domain::{TimeRow, TimeSpec, LEAP_SECOND_SENTINEL};

// ==========================================
// TimeEnumerator - 惰性有限迭代器
// ==========================================
// 可重启: 对同一 TimeSpec 重新调用 new 即可
#[derive(Debug, Clone)]
pub struct TimeEnumerator {
    next_seconds: Option<u32>,
    end_seconds: u32,
    step_seconds: u32,
}

impl TimeEnumerator {
    pub fn new(spec: &TimeSpec) -> Self {
        Self {
            next_seconds: Some(spec.start_seconds()),
            end_seconds: spec.end_seconds(),
            step_seconds: spec.step_seconds(),
        }
    }

    fn remaining(&self) -> usize {
        match self.next_seconds {
            Some(t) if t <= self.end_seconds => {
                ((self.end_seconds - t) / self.step_seconds) as usize + 1
            }
            _ => 0,
        }
    }
}

impl Iterator for TimeEnumerator {
    type Item = TimeRow;

    fn next(&mut self) -> Option<TimeRow> {
        let t = self.next_seconds.filter(|t| *t <= self.end_seconds)?;
        self.next_seconds = t.checked_add(self.step_seconds);
        Some(derive_row(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimeEnumerator {}

impl FusedIterator for TimeEnumerator {}

/// 枚举 TimeSpec 的全部时刻
pub fn enumerate(spec: &TimeSpec) -> TimeEnumerator {
    TimeEnumerator::new(spec)
}

/// 由零点起秒数派生一行
pub fn derive_row(t: u32) -> TimeRow {
    let (hour, minute, second) = if t == LEAP_SECOND_SENTINEL {
        (23, 59, 60)
    } else {
        (t / 3600, (t % 3600) / 60, t % 60)
    };

    let time_int = hour * 10_000 + minute * 100 + second;

    let hour_12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let am_pm = if hour < 12 { "AM" } else { "PM" };

    TimeRow {
        time_int,
        time_string12: format!("{hour_12:02}:{minute:02}:{second:02} {am_pm}"),
        time_string24: format!("{hour:02}:{minute:02}:{second:02}"),
        hour,
        minute,
        second,
    }
}
