mod loader;
mod types;

pub use loader::{ConfigError, PROGRAM_ENV_VAR};
pub use types::{CommandConfig, Config, ShellConfig};
