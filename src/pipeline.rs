// ==========================================
// 时刻维度表生成器 - 生成流水线
// ==========================================
// 流程: 配置 → 校验 → 枚举 → 投影 → 写出
// 红线: 校验失败时不创建任何输出文件
// ==========================================

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;
use tracing::instrument;

use crate::config::DaytimeConfig;
use crate::domain::{TimeColumn, TimeSpec};
use crate::engine::{enumerate, project, validate, GenerateResult};
use crate::output::CsvTableWriter;

// ==========================================
// GenerationReport - 生成结果摘要
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub row_count: usize,
    pub columns: Vec<TimeColumn>,
    pub spec: TimeSpec,
    pub generated_at: DateTime<Local>,
}

/// 执行一次完整生成
///
/// # 参数
/// - config: 启动时构建的生成配置
///
/// # 返回
/// - Ok(GenerationReport): 生成成功
/// - Err(GenerateError): 配置校验失败或写出失败
#[instrument(skip(config), fields(output = %config.output_path().display()))]
pub fn run(config: &DaytimeConfig) -> GenerateResult<GenerationReport> {
    if let Ok(snapshot) = config.snapshot_json() {
        tracing::debug!(config = %snapshot, "生成配置快照");
    }

    let (spec, policy) = validate(config)?;
    let window = describe_window(&spec, &config.time_step);

    tracing::info!("daytime table process started for {}", window);

    let table = project(enumerate(&spec), &policy);
    let output_path = config.output_path();
    CsvTableWriter::new().write(&table, &output_path)?;

    tracing::info!(
        rows = table.row_count(),
        columns = table.columns.len(),
        "daytime table process completed for {}",
        window
    );

    Ok(GenerationReport {
        output_path,
        row_count: table.row_count(),
        columns: table.columns,
        spec,
        generated_at: Local::now(),
    })
}

fn describe_window(spec: &TimeSpec, step: &str) -> String {
    format!(
        "{} through {} with step {}",
        format_clock(spec.start_seconds()),
        format_clock(spec.end_seconds()),
        step.trim().to_lowercase()
    )
}

// 闰秒哨兵 86400 → "23:59:60"
fn format_clock(t: u32) -> String {
    crate::engine::derive_row(t).time_string24
}
