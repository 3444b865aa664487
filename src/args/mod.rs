//! Option-to-argument translation for ImageMagick.
//!
//! ```text
//! Option value → Format (geometry / define / unsharp) → Registry → Tokens
//! ```
//!
//! Each formatter is a pure function that can be unit-tested independently.

mod definition;
mod error;
mod geometry;
pub mod registry;
mod unsharp;
pub(crate) mod value;

pub use definition::{define, Definitions};
pub use error::BuildError;
pub use geometry::{geometry, Geometry, GeometrySpec};
pub use registry::{option_registry, ArgKind, OptionArg, OptionDef, OptionId};
pub use unsharp::{unsharp, Unsharp, UnsharpSpec};
