// ==========================================
// 时刻维度表生成器 - gen-daytime 主入口
// ==========================================
// 配置: SKIP_TIME_COLUMNS / INCLUDE_TIME_COLUMNS / START_TIME / END_TIME / TIME_STEP / OUTPUT_DIR
// 输出: <OUTPUT_DIR>/daytime.csv
// 退出码: 0 成功；非 0 配置校验或写出失败
// ==========================================

use anyhow::Context;
use daytime_seed::{logging, pipeline, DaytimeConfig};

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::debug!("{} v{}", daytime_seed::APP_NAME, daytime_seed::VERSION);

    // 启动时构建一次配置
    let config = DaytimeConfig::from_env();

    let report = pipeline::run(&config)
        .inspect_err(|e| tracing::error!(error = %e, "时刻表生成失败"))
        .context("daytime table generation failed")?;

    tracing::info!(report = %serde_json::to_string(&report)?, "生成结果");
    Ok(())
}
