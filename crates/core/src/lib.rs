//! Pure domain logic for the todo list generator.
//!
//! Schema types and validation, the repair pass for common model
//! malformations, local fallback generators, prompt templates and HTML
//! rendering. Nothing in this crate touches the network.

pub mod error;
pub mod fallback;
pub mod mock;
pub mod prompt;
pub mod render;
pub mod repair;
pub mod schema;
