//! Running machine that owns its state, context and history.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::machine::definition::Definition;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, trace};

/// Number of fired transitions a machine keeps unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// A definition paired with the state it is currently in.
///
/// Events are processed one at a time to completion. Callers only ever
/// read the context; it changes exclusively through [`StateMachine::send`].
/// Only the most recent `history_limit` transitions are kept.
pub struct StateMachine<S: State, C, E: Event> {
    definition: Arc<Definition<S, C, E>>,
    current: S,
    context: C,
    history: StateHistory<S>,
    history_limit: usize,
}

impl<S: State, C: Clone, E: Event> StateMachine<S, C, E> {
    /// Start a machine in the definition's initial state.
    pub fn new(definition: Arc<Definition<S, C, E>>, context: C) -> Self {
        let current = definition.initial().clone();
        Self {
            definition,
            current,
            context,
            history: StateHistory::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Keep at most `limit` transitions in the history. Zero disables it.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Deliver one event.
    ///
    /// Returns `true` if a transition fired. Events that match no row are
    /// dropped without touching state, context or history.
    pub fn send(&mut self, event: &E) -> bool {
        let Some((next, context)) = self.definition.step(&self.current, &self.context, event)
        else {
            trace!(state = self.current.name(), trigger = %event, "event ignored");
            return false;
        };

        debug!(
            from = self.current.name(),
            to = next.name(),
            trigger = %event,
            "transition fired"
        );

        if self.history_limit > 0 {
            let transition = StateTransition {
                from: self.current.clone(),
                to: next.clone(),
                trigger: event.to_string(),
                timestamp: Utc::now(),
            };
            self.history.push_bounded(transition, self.history_limit);
        }
        self.current = next;
        self.context = context;
        true
    }

    /// Return to the initial state with a fresh context and empty history.
    pub fn reset(&mut self, context: C) {
        self.current = self.definition.initial().clone();
        self.context = context;
        self.history = StateHistory::new();
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn definition(&self) -> &Arc<Definition<S, C, E>> {
        &self.definition
    }
}
