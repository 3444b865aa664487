//! Errors raised while turning options into argument tokens.

use thiserror::Error;

/// Build-time errors. These are returned synchronously from construction and
/// chaining calls; a failed call appends no tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A geometry object carried none of the recognized size keys.
    #[error("`{keys}` is not an accepted option")]
    UnrecognizedGeometry { keys: String },

    /// Option name not present in the registry.
    #[error("No such option `{name}`")]
    UnknownOption { name: String },

    /// Declarative list item of a type that cannot name an option.
    #[error("Unsupported argument type `{kind}` of argument `{value}`")]
    UnsupportedArgumentType { kind: String, value: String },
}

impl BuildError {
    /// Short machine-readable tag, used in log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            BuildError::UnrecognizedGeometry { .. } => "unrecognized_geometry",
            BuildError::UnknownOption { .. } => "unknown_option",
            BuildError::UnsupportedArgumentType { .. } => "unsupported_argument_type",
        }
    }
}
