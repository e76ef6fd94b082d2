// ==========================================
// 时刻维度表生成器 - 种子数据编排
// ==========================================
// 职责: 依次运行各生成步骤（时刻表 / 日历表），可按开关跳过
// 开关: SKIP_DAYTIME / SKIP_CALENDAR（存在即跳过，值不限）
// 红线: 任一步骤非零退出即停止，退出码原样传递
// ==========================================

use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

use crate::config::ConfigSource;

/// 编排错误
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("步骤 {step} 启动失败 ({program}): {source}")]
    Spawn {
        step: &'static str,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("步骤 {step} 命令为空 ({key})")]
    EmptyCommand { step: &'static str, key: &'static str },

    #[error("步骤 {step} 失败，退出码 {code}")]
    StepFailed { step: &'static str, code: i32 },

    #[error("步骤 {step} 被信号终止")]
    Terminated { step: &'static str },
}

impl RunnerError {
    /// 进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::StepFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

// ==========================================
// SeedStep - 单个生成步骤
// ==========================================
#[derive(Debug, Clone)]
pub struct SeedStep {
    pub name: &'static str,        // 日志用名称
    pub skip_flag: &'static str,   // 跳过开关
    pub command_key: &'static str, // 命令覆写配置键
    pub default_program: PathBuf,  // 默认可执行文件
}

impl SeedStep {
    /// 解析最终命令（覆写值按空白拆分为程序 + 参数）
    fn command(&self, source: &dyn ConfigSource) -> Result<Command, RunnerError> {
        match source.get(self.command_key) {
            Some(raw) => {
                let mut parts = raw.split_whitespace();
                let program = parts.next().ok_or(RunnerError::EmptyCommand {
                    step: self.name,
                    key: self.command_key,
                })?;
                let mut cmd = Command::new(program);
                cmd.args(parts);
                Ok(cmd)
            }
            None => Ok(Command::new(&self.default_program)),
        }
    }
}

/// 步骤结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Skipped,
    Succeeded,
}

/// 编排结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub steps: Vec<(&'static str, StepStatus)>,
}

impl RunOutcome {
    /// 所有步骤均被跳过
    pub fn did_nothing(&self) -> bool {
        self.steps.iter().all(|(_, s)| *s == StepStatus::Skipped)
    }
}

pub mod step_keys {
    pub const SKIP_DAYTIME: &str = "SKIP_DAYTIME";
    pub const SKIP_CALENDAR: &str = "SKIP_CALENDAR";
    pub const DAYTIME_CMD: &str = "DAYTIME_CMD";
    pub const CALENDAR_CMD: &str = "CALENDAR_CMD";
}

/// 默认步骤: 时刻表 → 日历表
///
/// 默认可执行文件与编排器位于同一目录
pub fn default_steps() -> Vec<SeedStep> {
    vec![
        SeedStep {
            name: "times",
            skip_flag: step_keys::SKIP_DAYTIME,
            command_key: step_keys::DAYTIME_CMD,
            default_program: sibling_executable("gen-daytime"),
        },
        SeedStep {
            name: "calendar",
            skip_flag: step_keys::SKIP_CALENDAR,
            command_key: step_keys::CALENDAR_CMD,
            default_program: sibling_executable("gen-calendar"),
        },
    ]
}

fn sibling_executable(name: &str) -> PathBuf {
    let file_name = format!("{}{}", name, std::env::consts::EXE_SUFFIX);
    match std::env::current_exe() {
        Ok(exe) => exe.with_file_name(file_name),
        Err(_) => PathBuf::from(file_name),
    }
}

/// 依次执行步骤
pub fn run_steps(steps: &[SeedStep], source: &dyn ConfigSource) -> Result<RunOutcome, RunnerError> {
    let mut outcome = RunOutcome::default();

    for step in steps {
        if source.contains(step.skip_flag) {
            tracing::info!(flag = step.skip_flag, "Skipping {} generation", step.name);
            outcome.steps.push((step.name, StepStatus::Skipped));
            continue;
        }

        tracing::info!("Generating {}", step.name);
        let mut cmd = step.command(source)?;
        let status = cmd.status().map_err(|source| RunnerError::Spawn {
            step: step.name,
            program: format!("{:?}", cmd.get_program()),
            source,
        })?;

        match status.code() {
            Some(0) => {
                tracing::info!("OK");
                outcome.steps.push((step.name, StepStatus::Succeeded));
            }
            Some(code) => return Err(RunnerError::StepFailed { step: step.name, code }),
            None => return Err(RunnerError::Terminated { step: step.name }),
        }
    }

    if outcome.did_nothing() {
        tracing::info!("I did nothing, as you asked. It was an easy task!");
    }

    Ok(outcome)
}
