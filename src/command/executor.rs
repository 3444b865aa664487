//! Subprocess boundary.
//!
//! The builder never spawns processes itself: it hands the assembled command
//! line to a [`CommandExecutor`]. [`ShellExecutor`] is the real one; tests
//! inject their own.

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

use crate::config::ShellConfig;

/// Failure of an executed command. Reported through the completion channel,
/// never returned from build calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The shell could not be started.
    #[error("Failed to spawn '{command}': {message}")]
    Spawn { command: String, message: String },

    /// The command ran and exited unsuccessfully.
    #[error("Command failed ({}): {stderr}", exit_label(.code))]
    Failed { code: Option<i32>, stderr: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Result of one execution: `(error, stdout, stderr)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    pub error: Option<ExecError>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            error: None,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(error: ExecError, stderr: impl Into<String>) -> Self {
        Self {
            error: Some(error),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Executes a full command line and reports its outcome.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `command_line` to completion. Never panics on process failure;
    /// failures go into [`ExecOutput::error`].
    async fn execute(&self, command_line: &str) -> ExecOutput;
}

/// Runs command lines through a shell (`sh -c` by default), so the quoting
/// produced by the builder is interpreted the way the tool expects.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
    flag: String,
}

impl ShellExecutor {
    pub fn new(shell: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            flag: flag.into(),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(config.program.clone(), config.flag.clone())
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::from_config(&ShellConfig::default())
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command_line: &str) -> ExecOutput {
        tracing::debug!(shell = %self.shell, command_line, "spawning command");

        let output = match Command::new(&self.shell)
            .arg(&self.flag)
            .arg(command_line)
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                return ExecOutput::failure(
                    ExecError::Spawn {
                        command: self.shell.clone(),
                        message: e.to_string(),
                    },
                    String::new(),
                );
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        let error = if output.status.success() {
            None
        } else {
            Some(ExecError::Failed {
                code: output.status.code(),
                stderr: stderr.trim_end().to_string(),
            })
        };

        ExecOutput {
            error,
            stdout,
            stderr,
        }
    }
}
