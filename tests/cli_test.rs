// ==========================================
// 可执行文件集成测试
// ==========================================
// 测试目标: gen-daytime 退出码约定 + seed-runner 编排
// ==========================================


use std::path::Path;
use std::process::{Command, Output};
use test_helpers::{create_output_dir, read_csv};

const GEN_DAYTIME: &str = env!("CARGO_BIN_EXE_gen-daytime");
const SEED_RUNNER: &str = env!("CARGO_BIN_EXE_seed-runner");

const CONFIG_KEYS: &[&str] = &[
    "SKIP_TIME_COLUMNS",
    "INCLUDE_TIME_COLUMNS",
    "START_TIME",
    "END_TIME",
    "TIME_STEP",
    "OUTPUT_DIR",
    "SKIP_DAYTIME",
    "SKIP_CALENDAR",
    "DAYTIME_CMD",
    "CALENDAR_CMD",
];

/// 构建隔离了宿主配置的命令
fn command(program: &str, output_dir: &Path) -> Command {
    let mut cmd = Command::new(program);
    for key in CONFIG_KEYS {
        cmd.env_remove(key);
    }
    cmd.env("OUTPUT_DIR", output_dir).env("RUST_LOG", "warn");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("Failed to launch binary")
}

#[test]
fn test_gen_daytime_success_writes_csv() {
    let dir = create_output_dir();
    let output = run(command(GEN_DAYTIME, dir.path())
        .env("START_TIME", "060000")
        .env("END_TIME", "07:00:00")
        .env("TIME_STEP", "15m"));

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let (header, rows) = read_csv(&dir.path().join("daytime.csv")).unwrap();
    assert_eq!(header.len(), 6);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4][0], "70000");
}

#[test]
fn test_gen_daytime_validation_failure_exits_non_zero() {
    let dir = create_output_dir();
    let output = run(command(GEN_DAYTIME, dir.path()).env("END_TIME", "22:59:60"));

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("END_TIME"), "stderr: {stderr}");
    assert!(!dir.path().join("daytime.csv").exists());
}

#[test]
fn test_seed_runner_runs_daytime_and_skips_calendar() {
    let dir = create_output_dir();
    let output = run(command(SEED_RUNNER, dir.path())
        .env("DAYTIME_CMD", GEN_DAYTIME)
        .env("SKIP_CALENDAR", "")
        .env("TIME_STEP", "1h"));

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let (_, rows) = read_csv(&dir.path().join("daytime.csv")).unwrap();
    assert_eq!(rows.len(), 24);
}

#[test]
fn test_seed_runner_propagates_failure() {
    let dir = create_output_dir();
    let output = run(command(SEED_RUNNER, dir.path())
        .env("DAYTIME_CMD", GEN_DAYTIME)
        .env("SKIP_CALENDAR", "")
        .env("TIME_STEP", "0m"));

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("daytime.csv").exists());
}

#[test]
fn test_seed_runner_with_everything_skipped() {
    let dir = create_output_dir();
    let output = run(command(SEED_RUNNER, dir.path())
        .env("SKIP_DAYTIME", "1")
        .env("SKIP_CALENDAR", "1"));

    assert!(output.status.success());
}
