// ==========================================
// 种子数据编排器 - seed-runner
// ==========================================
// 依次运行 gen-daytime / gen-calendar，可通过 SKIP_* 环境变量跳过
// 可作为 Docker entrypoint 使用
// ==========================================

use daytime_seed::config::EnvSource;
use daytime_seed::logging;
use daytime_seed::runner::{default_steps, run_steps};

fn main() {
    logging::init();

    if let Err(e) = run_steps(&default_steps(), &EnvSource) {
        tracing::error!(error = %e, "种子数据生成中止");
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
