//! Immutable machine definitions and the pure step function.

use crate::core::{Event, State};
use crate::machine::transition::{Hook, Transition};

/// A complete machine description: initial state, ordered transition
/// table, and per-state entry/exit hooks.
///
/// A definition holds no runtime state. [`Definition::step`] is a pure
/// function of `(state, context, event)`, so the same definition can be
/// shared by any number of running machines.
pub struct Definition<S: State, C, E: Event> {
    initial: S,
    transitions: Vec<Transition<S, C, E>>,
    entry_hooks: Vec<(S, Hook<C>)>,
    exit_hooks: Vec<(S, Hook<C>)>,
}

impl<S: State, C, E: Event> Definition<S, C, E> {
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            transitions: Vec::new(),
            entry_hooks: Vec::new(),
            exit_hooks: Vec::new(),
        }
    }

    /// Append a row. Rows are tried in insertion order.
    pub fn add_transition(&mut self, transition: Transition<S, C, E>) {
        self.transitions.push(transition);
    }

    pub fn add_entry_hook(&mut self, state: S, hook: Hook<C>) {
        self.entry_hooks.push((state, hook));
    }

    pub fn add_exit_hook(&mut self, state: S, hook: Hook<C>) {
        self.exit_hooks.push((state, hook));
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn transitions(&self) -> &[Transition<S, C, E>] {
        &self.transitions
    }

    /// Find the first row that fires for this state, context and event.
    pub fn select(&self, state: &S, context: &C, event: &E) -> Option<&Transition<S, C, E>> {
        self.transitions
            .iter()
            .find(|t| t.can_fire(state, context, event))
    }
}

impl<S: State, C: Clone, E: Event> Definition<S, C, E> {
    /// Compute the next state and context for an event.
    ///
    /// Returns `None` when no row fires; the caller keeps its current
    /// state and context untouched. When the target differs from the
    /// source, exit hooks of the source run first, then the row's
    /// action, then entry hooks of the target. Self-transitions run the
    /// action only.
    pub fn step(&self, state: &S, context: &C, event: &E) -> Option<(S, C)> {
        let transition = self.select(state, context, event)?;
        let changes_state = transition.to != *state;

        let mut next = context.clone();
        if changes_state {
            next = run_hooks(&self.exit_hooks, state, next);
        }
        next = transition.apply(next, event);
        if changes_state {
            next = run_hooks(&self.entry_hooks, &transition.to, next);
        }

        Some((transition.to.clone(), next))
    }
}

fn run_hooks<S: State, C>(hooks: &[(S, Hook<C>)], state: &S, context: C) -> C {
    hooks
        .iter()
        .filter(|(s, _)| s == state)
        .fold(context, |ctx, (_, hook)| hook(ctx))
}
