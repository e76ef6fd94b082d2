// ==========================================
// 时刻维度表生成器 - 配置校验器
// ==========================================
// 职责: 原始文本配置 → TimeSpec + ColumnPolicy
// 规则: 顺序执行，首个违规即返回 ConfigError（快速失败）
// 红线: 纯函数，无副作用；相同输入必得相同结果
// ==========================================

use std::collections::BTreeSet;
use std::num::IntErrorKind;

use crate::config::DaytimeConfig;
use crate::domain::{ColumnPolicy, TimeColumn, TimeSpec, LEAP_SECOND_SENTINEL};
use crate::engine::error::ConfigError;

/// 时间边界（决定闰秒是否允许）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound {
    Start,
    End,
}

impl TimeBound {
    /// 对应的配置键（用于错误信息）
    pub fn setting(&self) -> &'static str {
        match self {
            TimeBound::Start => "START_TIME",
            TimeBound::End => "END_TIME",
        }
    }
}

/// 校验完整配置
///
/// # 规则顺序
/// 1. 列过滤互斥 + 主键约束
/// 2. 开始 / 结束时间格式（均为 6 位数字）
/// 3. 开始时间范围
/// 4. 结束时间范围（允许 23:59:60）
/// 5. 开始 < 结束
/// 6. 步长格式
pub fn validate(config: &DaytimeConfig) -> Result<(TimeSpec, ColumnPolicy), ConfigError> {
    let policy = parse_column_policy(
        config.exclude_columns.as_deref(),
        config.include_columns.as_deref(),
    )?;

    // 两端格式均通过后才检查范围
    let start_hms = parse_time_digits(&config.start_time, TimeBound::Start)?;
    let end_hms = parse_time_digits(&config.end_time, TimeBound::End)?;

    let start_seconds = to_seconds(check_time_range(start_hms, TimeBound::Start)?);
    let end_seconds = to_seconds(check_time_range(end_hms, TimeBound::End)?);
    if start_seconds >= end_seconds {
        return Err(ConfigError::InvertedWindow {
            start_seconds,
            end_seconds,
        });
    }

    let step_seconds = parse_step(&config.time_step)?;

    Ok((
        TimeSpec::from_validated(start_seconds, end_seconds, step_seconds),
        policy,
    ))
}

// ==========================================
// 列过滤策略
// ==========================================

/// 解析列过滤配置
///
/// 互斥判断按"是否设置"进行，空字符串也算已设置；
/// 拆分后为空的列表视为不过滤。未知列名忽略。
pub fn parse_column_policy(
    exclude: Option<&str>,
    include: Option<&str>,
) -> Result<ColumnPolicy, ConfigError> {
    match (exclude, include) {
        (Some(_), Some(_)) => Err(ConfigError::ExclusiveColumnFilters),
        (Some(raw), None) => {
            let names = split_columns(raw);
            if names.is_empty() {
                return Ok(ColumnPolicy::All);
            }
            if names.contains(&TimeColumn::PRIMARY_KEY.as_str()) {
                return Err(ConfigError::PrimaryKeyExcluded);
            }
            let excluded: BTreeSet<TimeColumn> = resolve_columns(&names).collect();
            Ok(ColumnPolicy::Exclude(excluded))
        }
        (None, Some(raw)) => {
            let names = split_columns(raw);
            if names.is_empty() {
                return Ok(ColumnPolicy::All);
            }
            if !names.contains(&TimeColumn::PRIMARY_KEY.as_str()) {
                return Err(ConfigError::PrimaryKeyNotIncluded);
            }
            let mut included: Vec<TimeColumn> = Vec::with_capacity(names.len());
            for column in resolve_columns(&names) {
                if !included.contains(&column) {
                    included.push(column);
                }
            }
            Ok(ColumnPolicy::Include(included))
        }
        (None, None) => Ok(ColumnPolicy::All),
    }
}

fn split_columns(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

fn resolve_columns<'a>(names: &'a [&'a str]) -> impl Iterator<Item = TimeColumn> + 'a {
    names.iter().filter_map(|name| {
        let column = TimeColumn::from_name(name);
        if column.is_none() {
            tracing::warn!(column = %name, "未知列名，已忽略");
        }
        column
    })
}

// ==========================================
// 时间解析
// ==========================================

/// 解析时刻文本为零点起的秒数
///
/// 接受 HH:MM:SS 或 HHMMSS；结束边界允许 23:59:60（返回 86400）
pub fn parse_clock_time(text: &str, bound: TimeBound) -> Result<u32, ConfigError> {
    parse_hms(text, bound).map(to_seconds)
}

/// 解析并校验 (时, 分, 秒)
pub fn parse_hms(text: &str, bound: TimeBound) -> Result<(u32, u32, u32), ConfigError> {
    check_time_range(parse_time_digits(text, bound)?, bound)
}

/// 仅校验格式: 去除冒号后必须为 6 位 ASCII 数字
pub fn parse_time_digits(text: &str, bound: TimeBound) -> Result<(u32, u32, u32), ConfigError> {
    let setting = bound.setting();
    let digits: Vec<u8> = text.bytes().filter(|b| *b != b':').collect();

    if digits.len() != 6 || !digits.iter().all(u8::is_ascii_digit) {
        return Err(ConfigError::MalformedTime {
            setting,
            value: text.to_string(),
        });
    }

    Ok((
        two_digits(digits[0], digits[1]),
        two_digits(digits[2], digits[3]),
        two_digits(digits[4], digits[5]),
    ))
}

/// 仅校验范围；结束边界允许闰秒哨兵 23:59:60
pub fn check_time_range(
    (hour, minute, second): (u32, u32, u32),
    bound: TimeBound,
) -> Result<(u32, u32, u32), ConfigError> {
    let setting = bound.setting();

    if bound == TimeBound::End && second == 60 {
        // 闰秒哨兵仅允许 23:59:60
        if hour == 23 && minute == 59 {
            debug_assert_eq!(hour * 3600 + minute * 60 + second, LEAP_SECOND_SENTINEL);
            return Ok((hour, minute, second));
        }
        return Err(ConfigError::LeapSecondNotAllowed {
            setting,
            hour,
            minute,
        });
    }

    if hour > 23 || minute > 59 || second > 59 {
        return Err(ConfigError::TimeOutOfRange {
            setting,
            hour,
            minute,
            second,
        });
    }

    Ok((hour, minute, second))
}

fn to_seconds((hour, minute, second): (u32, u32, u32)) -> u32 {
    hour * 3600 + minute * 60 + second
}

fn two_digits(tens: u8, ones: u8) -> u32 {
    u32::from(tens - b'0') * 10 + u32::from(ones - b'0')
}

// ==========================================
// 步长解析
// ==========================================

/// 解析步长文本为秒数
///
/// 格式: <正整数><s|m|h>，大小写与首尾空白不敏感
///
/// 数值与单位之间允许空白，数字之间允许单个下划线（如 "1_000s"）；
/// 超出表示范围的正整数饱和为 u32::MAX 秒（只生成起点一行）
pub fn parse_step(text: &str) -> Result<u32, ConfigError> {
    let normalized = text.trim().to_lowercase();

    let multiplier: u32 = match normalized.chars().last() {
        Some('s') => 1,
        Some('m') => 60,
        Some('h') => 3600,
        _ => return Err(ConfigError::InvalidStepUnit(text.to_string())),
    };

    // 单位均为单字节 ASCII
    let magnitude = &normalized[..normalized.len() - 1];
    let magnitude = normalize_magnitude(magnitude)
        .ok_or_else(|| ConfigError::InvalidStepValue(text.to_string()))?;

    let value: i64 = match magnitude.parse::<i64>() {
        Ok(v) => v,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(ConfigError::InvalidStepValue(text.to_string())),
        },
    };

    if value <= 0 {
        return Err(ConfigError::NonPositiveStep(text.to_string()));
    }

    Ok(u32::try_from(value)
        .unwrap_or(u32::MAX)
        .saturating_mul(multiplier))
}

// 去除首尾空白与数字间的下划线；下划线位置非法返回 None
fn normalize_magnitude(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();

    for (i, b) in bytes.iter().enumerate() {
        if *b == b'_' {
            let between_digits = i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            if !between_digits {
                return None;
            }
        }
    }

    Some(trimmed.replace('_', ""))
}
