//! Completion reporting — caller-supplied callback or broadcast events.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::command::executor::{ExecError, ExecOutput};

const EVENT_BUFFER: usize = 16;

/// Callback invoked once per execution with `(error, stdout, stderr)`.
pub type CompletionCallback = Arc<dyn Fn(Option<&ExecError>, &str, &str) + Send + Sync>;

/// Event published when no callback was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Always first: the full outcome.
    Done {
        error: Option<ExecError>,
        stdout: String,
        stderr: String,
    },
    /// Follows `Done` when the command failed.
    RunError(ExecError),
    /// Follows `Done` when the command succeeded.
    RunSuccess(String),
}

impl CommandEvent {
    /// Event name, matching the `done` / `run_error` / `run_success` channel names.
    pub fn name(&self) -> &'static str {
        match self {
            CommandEvent::Done { .. } => "done",
            CommandEvent::RunError(_) => "run_error",
            CommandEvent::RunSuccess(_) => "run_success",
        }
    }
}

/// How a command reports completion. Fixed when the command is constructed.
#[derive(Clone)]
pub enum Completion {
    Callback(CompletionCallback),
    Events(broadcast::Sender<CommandEvent>),
}

impl Completion {
    pub fn events() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUFFER);
        Completion::Events(sender)
    }

    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(Option<&ExecError>, &str, &str) + Send + Sync + 'static,
    {
        Completion::Callback(Arc::new(f))
    }

    /// Receiver for events; `None` in callback mode.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<CommandEvent>> {
        match self {
            Completion::Events(sender) => Some(sender.subscribe()),
            Completion::Callback(_) => None,
        }
    }

    /// Deliver an outcome: exactly one callback call, or `Done` followed by
    /// exactly one of `RunError` / `RunSuccess`.
    pub fn deliver(&self, output: ExecOutput) {
        match self {
            Completion::Callback(callback) => {
                callback(output.error.as_ref(), &output.stdout, &output.stderr);
            }
            Completion::Events(sender) => {
                let follow_up = match &output.error {
                    Some(error) => CommandEvent::RunError(error.clone()),
                    None => CommandEvent::RunSuccess(output.stdout.clone()),
                };
                // No subscribers is not an error
                let _ = sender.send(CommandEvent::Done {
                    error: output.error,
                    stdout: output.stdout,
                    stderr: output.stderr,
                });
                let _ = sender.send(follow_up);
            }
        }
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Completion::Callback(_) => f.write_str("Completion::Callback"),
            Completion::Events(sender) => f
                .debug_struct("Completion::Events")
                .field("subscribers", &sender.receiver_count())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn failure_emits_done_then_run_error() {
        let completion = Completion::events();
        let mut rx = completion.subscribe().unwrap();
        let err = ExecError::Failed {
            code: Some(1),
            stderr: "bad".into(),
        };
        completion.deliver(ExecOutput::failure(err.clone(), "bad"));

        assert_eq!(rx.try_recv().unwrap().name(), "done");
        assert_eq!(rx.try_recv().unwrap(), CommandEvent::RunError(err));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn callback_mode_has_no_receiver() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let completion = Completion::callback(move |err, out, _| {
            assert!(err.is_none());
            assert_eq!(out, "ok");
            seen.fetch_add(1, Ordering::SeqCst);
        });
        assert!(completion.subscribe().is_none());
        completion.deliver(ExecOutput::success("ok"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
