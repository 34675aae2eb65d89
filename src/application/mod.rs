//! Application layer - orchestrates use cases over the infrastructure ports

pub mod commands;
pub mod errors;
pub mod generate_construct;
pub mod template_management;
pub mod traits;

pub use commands::*;
pub use errors::*;
pub use generate_construct::*;
pub use template_management::*;
pub use traits::*;
