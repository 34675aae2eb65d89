//! Parameter report domain - the trusted inventory consumed by the emitter

pub mod types;

pub use types::*;
