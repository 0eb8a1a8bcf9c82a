//! Compiled-in relationship taxonomy for tech/development knowledge graphs.

mod builtin;

pub use builtin::{builtin, BUILTIN_VERSION};
