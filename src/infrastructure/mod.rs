//! Infrastructure layer - concrete implementations of the application ports

pub mod output;
pub mod report;
pub mod templates;

pub use output::*;
pub use report::*;
pub use templates::*;
