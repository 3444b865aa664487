use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub command: CommandConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

/// The image tool being driven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Program name prepended to the argument line (e.g. "convert", "magick").
    #[serde(default = "default_program")]
    pub program: String,
}

/// Shell used to interpret the assembled command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Shell binary (default: "sh").
    #[serde(default = "default_shell")]
    pub program: String,
    /// Flag introducing the command string (default: "-c").
    #[serde(default = "default_shell_flag")]
    pub flag: String,
}

fn default_program() -> String {
    "convert".to_string()
}

fn default_shell() -> String {
    "sh".to_string()
}

fn default_shell_flag() -> String {
    "-c".to_string()
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: default_shell(),
            flag: default_shell_flag(),
        }
    }
}
