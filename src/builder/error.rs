//! Build errors for definition and transition builders.

use thiserror::Error;

/// Errors that can occur when building definitions and transitions.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition trigger not specified. Call .on(kind)")]
    MissingTrigger,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,
}
