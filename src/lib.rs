//! ssmgen - generate CDK constructs from SSM parameter reports
//!
//! A report lists Parameter Store parameters and Secrets Manager secrets.
//! Each entry is rendered through a text template and the statements are
//! appended to the `SetupParameters` or `SetupSecrets` method of a scaffold
//! class, which is then written out as TypeScript.
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;
pub mod report;
pub mod scaffold;
pub mod template;
