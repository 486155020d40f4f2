//! Builder API for ergonomic definition construction.
//!
//! Fluent builders assemble transition tables row by row; the
//! `state_enum!` macro removes the `State` boilerplate for plain enums.

pub mod definition;
pub mod error;
pub mod macros;
pub mod transition;

pub use definition::DefinitionBuilder;
pub use error::BuildError;
pub use transition::TransitionBuilder;
