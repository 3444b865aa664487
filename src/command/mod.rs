//! Command builder — accumulates argument tokens and executes the command.
//!
//! ```text
//! Idle ──option──▶ Accumulating ──run──▶ Executed
//!   └──────────────────run──────────────────┘
//! ```
//!
//! Fluent option methods (`auto_orient()`, `thumbnail(..)`, ...) are generated
//! from the option registry in [`crate::args::registry`].

mod events;
mod executor;

pub use events::{CommandEvent, Completion, CompletionCallback};
pub use executor::{CommandExecutor, ExecError, ExecOutput, ShellExecutor};

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::args::value::{json_type_name, value_to_string};
use crate::args::{BuildError, OptionArg, OptionId};
use crate::config::{CommandConfig, Config};

/// Lifecycle of a [`MagickCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState {
    /// Constructed, no tokens yet.
    Idle,
    /// One or more options appended.
    Accumulating,
    /// Handed to the executor at least once.
    Executed,
}

/// Chainable ImageMagick command.
pub struct MagickCommand {
    program: String,
    tokens: Vec<String>,
    state: CommandState,
    completion: Completion,
    executor: Arc<dyn CommandExecutor>,
}

impl MagickCommand {
    /// Empty command reporting completion through events.
    pub fn new() -> Self {
        Self::with_completion(Completion::events())
    }

    /// Empty command reporting completion through `callback`.
    pub fn with_callback<F>(callback: F) -> Self
    where
        F: Fn(Option<&ExecError>, &str, &str) + Send + Sync + 'static,
    {
        Self::with_completion(Completion::callback(callback))
    }

    pub fn with_completion(completion: Completion) -> Self {
        Self {
            program: CommandConfig::default().program,
            tokens: Vec::new(),
            state: CommandState::Idle,
            completion,
            executor: Arc::new(ShellExecutor::default()),
        }
    }

    /// Program name and shell taken from configuration.
    pub fn from_config(config: &Config, completion: Completion) -> Self {
        Self::with_completion(completion)
            .with_program(config.command.program.clone())
            .with_executor(Arc::new(ShellExecutor::from_config(&config.shell)))
    }

    /// Replace the program name prepended to the argument line.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replace the subprocess executor.
    pub fn with_executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.executor = executor;
        self
    }

    /// Build an events-mode command from a declarative argument list.
    pub fn from_args(items: &[Value]) -> Result<Self, BuildError> {
        let mut command = Self::new();
        command.apply_args(items)?;
        Ok(command)
    }

    /// Seed from a declarative list and, in callback mode, execute right away.
    ///
    /// Returns the execution handle when a run was started.
    pub fn launch(mut self, items: &[Value]) -> Result<(Self, Option<JoinHandle<()>>), BuildError> {
        self.apply_args(items)?;
        let callback_mode = matches!(self.completion, Completion::Callback(_));
        let handle = if callback_mode { Some(self.run()) } else { None };
        Ok((self, handle))
    }

    /// Append options from a declarative list, in order.
    ///
    /// Items are `{"optionName": value}` objects (every key applied in
    /// order), bare option names, or booleans (no-op). A boolean option
    /// value selects the reset form. Tokens from items before a failing one
    /// are kept.
    pub fn apply_args(&mut self, items: &[Value]) -> Result<&mut Self, BuildError> {
        for item in items {
            match item {
                Value::Object(map) => {
                    for (name, value) in map {
                        self.option(name, Some(value))?;
                    }
                }
                Value::String(name) => {
                    self.option(name, None)?;
                }
                Value::Bool(_) => debug!("ignoring bare boolean argument item"),
                other => {
                    return Err(BuildError::UnsupportedArgumentType {
                        kind: json_type_name(other).to_string(),
                        value: value_to_string(other),
                    });
                }
            }
        }
        Ok(self)
    }

    /// Apply an option by its declarative name.
    ///
    /// A boolean value selects the reset form (`+flag`).
    pub fn option(&mut self, name: &str, value: Option<&Value>) -> Result<&mut Self, BuildError> {
        let id = OptionId::resolve(name)?;
        if let Some(Value::Bool(_)) = value {
            return Ok(self.reset(id));
        }
        let tokens = id.render(OptionArg::from_json(id.kind(), value))?;
        Ok(self.push_tokens(id, tokens))
    }

    /// Apply an already-typed option value.
    pub fn push(&mut self, id: OptionId, arg: OptionArg) -> Result<&mut Self, BuildError> {
        let tokens = id.render(arg)?;
        Ok(self.push_tokens(id, tokens))
    }

    /// Append the reset form of an option: `+flag`, no value.
    pub fn reset(&mut self, id: OptionId) -> &mut Self {
        self.push_tokens(id, id.reset_tokens())
    }

    /// [`MagickCommand::reset`] by declarative name.
    pub fn reset_option(&mut self, name: &str) -> Result<&mut Self, BuildError> {
        let id = OptionId::resolve(name)?;
        Ok(self.reset(id))
    }

    /// Append several literal tokens.
    pub fn add_all<I, S>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens.into_iter().map(Into::into).collect();
        self.push_tokens(OptionId::Add, tokens)
    }

    pub(crate) fn push_tokens(&mut self, id: OptionId, tokens: Vec<String>) -> &mut Self {
        debug!(option = id.name(), ?tokens, "appending option");
        self.tokens.extend(tokens);
        if self.state == CommandState::Idle {
            self.state = CommandState::Accumulating;
        }
        self
    }

    pub fn state(&self) -> CommandState {
        self.state
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Accumulated tokens.
    pub fn args(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens joined with single spaces.
    pub fn arg_string(&self) -> String {
        self.tokens.join(" ")
    }

    /// Program name followed by the argument string.
    pub fn command_line(&self) -> String {
        if self.tokens.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.arg_string())
        }
    }

    /// Event receiver; `None` for callback-mode commands.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<CommandEvent>> {
        self.completion.subscribe()
    }

    /// Execute the current command line in the background.
    ///
    /// Returns immediately; the outcome goes to the callback or the event
    /// channel once the process exits. Must be called within a tokio runtime.
    /// Calling again re-runs the tokens accumulated so far.
    pub fn run(&mut self) -> JoinHandle<()> {
        let command_line = self.command_line();
        self.state = CommandState::Executed;
        info!(%command_line, "running command");

        let executor = Arc::clone(&self.executor);
        let completion = self.completion.clone();
        tokio::spawn(async move {
            let output = executor.execute(&command_line).await;
            if let Some(error) = &output.error {
                warn!(%error, %command_line, "command failed");
            }
            completion.deliver(output);
        })
    }

    /// Execute and await the outcome directly, bypassing callback and events.
    pub async fn output(&mut self) -> ExecOutput {
        let command_line = self.command_line();
        self.state = CommandState::Executed;
        info!(%command_line, "running command");

        let output = self.executor.execute(&command_line).await;
        if let Some(error) = &output.error {
            warn!(%error, %command_line, "command failed");
        }
        output
    }
}

impl Default for MagickCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MagickCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagickCommand")
            .field("program", &self.program)
            .field("tokens", &self.tokens)
            .field("state", &self.state)
            .field("completion", &self.completion)
            .finish_non_exhaustive()
    }
}
