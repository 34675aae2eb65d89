//! Error types for scaffold handling

use thiserror::Error;

/// Structural problems with a scaffold. Generation cannot continue past these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// No declaration of the method exists in the scaffold
    #[error("Method '{0}' not found in scaffold")]
    MethodNotFound(String),

    /// The method body never closes
    #[error("Body of method '{0}' has unbalanced braces")]
    UnbalancedBody(String),
}
