//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use async_trait::async_trait;
use magick_cmd::command::CommandExecutor;
use magick_cmd::{ExecError, ExecOutput};
use parking_lot::Mutex;

/// Executor that records every command line and replies with a fixed outcome.
pub struct RecordingExecutor {
    reply: ExecOutput,
    calls: Mutex<Vec<String>>,
}

impl RecordingExecutor {
    pub fn succeeding(stdout: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: ExecOutput::success(stdout),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(code: i32, stderr: &str) -> Arc<Self> {
        let error = ExecError::Failed {
            code: Some(code),
            stderr: stderr.to_string(),
        };
        Arc::new(Self {
            reply: ExecOutput::failure(error, stderr),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CommandExecutor for RecordingExecutor {
    async fn execute(&self, command_line: &str) -> ExecOutput {
        self.calls.lock().push(command_line.to_string());
        self.reply.clone()
    }
}

/// Captured `(error, stdout, stderr)` callback invocations.
pub type CallbackLog = Arc<Mutex<Vec<(Option<ExecError>, String, String)>>>;

pub fn callback_log() -> CallbackLog {
    Arc::new(Mutex::new(Vec::new()))
}
