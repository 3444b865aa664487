//! Chainable ImageMagick command-line builder.
//!
//! Structured options are translated into the tool's argument grammar and the
//! assembled command is run through a pluggable executor:
//!
//! ```no_run
//! use magick_cmd::args::{Definitions, GeometrySpec};
//! use magick_cmd::MagickCommand;
//!
//! # fn main() -> Result<(), magick_cmd::args::BuildError> {
//! let mut cmd = MagickCommand::new();
//! cmd.define(Definitions::new().set_sub("jpeg", "size", "256x256"))?
//!     .add("image.png")
//!     .auto_orient()
//!     .thumbnail(GeometrySpec::size(128, 128).only_shrink())?
//!     .unsharp(0.5)
//!     .add("out.png");
//! assert_eq!(
//!     cmd.command_line(),
//!     "convert -define 'jpeg:size=256x256' image.png -auto-orient -thumbnail '128x128>' -unsharp '0x0.5+1+0.05' out.png"
//! );
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod command;
pub mod config;
pub mod logging;

pub use command::{CommandEvent, CommandState, ExecError, ExecOutput, MagickCommand};
