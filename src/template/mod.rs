//! Template rendering engine
//!
//! Records are flattened into a [`FlatView`] of dotted paths and then
//! substituted into `{placeholder}` templates. [`Template`] adds the
//! parameter specific handling: the per kind index and the shape the tags
//! are handed over in.

pub mod flatten;
pub mod renderer;
pub mod substitute;
pub mod value;

pub use flatten::{PATH_SEPARATOR, flatten, flatten_value};
pub use renderer::{INDEX_KEY, QUOTED_SUFFIX, TAGS_KEY, TagShape, Template, indexed_view};
pub use substitute::{placeholders, substitute};
pub use value::{ComputeFn, FlatValue, FlatView};
