//! Convenience re-exports for crates consuming the model.

pub use crate::color::CanonicalColor;
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::resolution::{MAX_EXPORT_DIMENSION, Resolution};
