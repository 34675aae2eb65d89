//! Scaffold handling - the skeleton class the generated statements go into
//!
//! The generator only needs a narrow view of the scaffold source: find a
//! method, append statements to its body in call order and turn the result
//! back into text. [`SourceScaffold`] is that view and [`MarkerScaffold`]
//! implements it on plain text.

pub mod errors;
pub mod marker;

pub use errors::*;
pub use marker::*;

/// Handle to a method body inside a scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodHandle(pub(crate) usize);

/// Minimal interface over a scaffolded source file
pub trait SourceScaffold {
    /// Locate the body of the method called `name`
    fn method(&mut self, name: &str) -> Result<MethodHandle, ScaffoldError>;

    /// Append statements to the end of a method body. Statements keep the
    /// order they were added in.
    fn add_statements(&mut self, method: MethodHandle, statements: Vec<String>);

    /// Serialize the scaffold with every appended statement
    fn to_source(&self) -> String;
}
