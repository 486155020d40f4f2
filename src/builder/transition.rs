//! Builder for constructing transition rows.

use crate::builder::error::BuildError;
use crate::core::{Event, Guard, State};
use crate::machine::{Action, Transition};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, C, E: Event> {
    from: Option<S>,
    on: Option<E::Kind>,
    to: Option<S>,
    guard: Option<Guard<C, E>>,
    action: Option<Action<C, E>>,
}

impl<S: State, C, E: Event> TransitionBuilder<S, C, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the event kind that triggers this row (required).
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.on = Some(kind);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<C, E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the context update (optional; defaults to leaving the context as is).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(C, &E) -> C + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, C, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingTrigger)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            on,
            to,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: State, C, E: Event> Default for TransitionBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
