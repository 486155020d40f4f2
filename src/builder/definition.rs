//! Builder for constructing machine definitions.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::machine::{Definition, Hook, Transition};
use std::sync::Arc;

/// Builder for constructing definitions with a fluent API.
pub struct DefinitionBuilder<S: State, C, E: Event> {
    initial: Option<S>,
    transitions: Vec<Transition<S, C, E>>,
    entry_hooks: Vec<(S, Hook<C>)>,
    exit_hooks: Vec<(S, Hook<C>)>,
}

impl<S: State, C, E: Event> DefinitionBuilder<S, C, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            entry_hooks: Vec::new(),
            exit_hooks: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, C, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, C, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Run `hook` whenever the machine enters `state` from a different state.
    pub fn on_entry<F>(mut self, state: S, hook: F) -> Self
    where
        F: Fn(C) -> C + Send + Sync + 'static,
    {
        let hook: Hook<C> = Arc::new(hook);
        self.entry_hooks.push((state, hook));
        self
    }

    /// Run `hook` whenever the machine leaves `state` for a different state.
    pub fn on_exit<F>(mut self, state: S, hook: F) -> Self
    where
        F: Fn(C) -> C + Send + Sync + 'static,
    {
        let hook: Hook<C> = Arc::new(hook);
        self.exit_hooks.push((state, hook));
        self
    }

    /// Build the definition.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Definition<S, C, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut definition = Definition::new(initial);
        for transition in self.transitions {
            definition.add_transition(transition);
        }
        for (state, hook) in self.entry_hooks {
            definition.add_entry_hook(state, hook);
        }
        for (state, hook) in self.exit_hooks {
            definition.add_exit_hook(state, hook);
        }

        Ok(definition)
    }
}

impl<S: State, C, E: Event> Default for DefinitionBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
