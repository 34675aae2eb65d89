//! Generation domain module - turns a parameter report into construct source
//!
//! The [`Emitter`] walks the report in order, dispatches every parameter to
//! the template for its kind and appends the rendered statement to the
//! matching scaffold method.

pub mod counters;
pub mod emitter;
pub mod errors;
pub mod types;

pub use counters::*;
pub use emitter::*;
pub use errors::*;
pub use types::*;
