//! Transition rows of a guarded state machine.

use crate::core::{Event, Guard, State};
use std::sync::Arc;

/// Context update performed when a transition fires.
///
/// Actions are pure: they take the current context by value and return
/// the next one.
pub type Action<C, E> = Arc<dyn Fn(C, &E) -> C + Send + Sync>;

/// Context update attached to entering or leaving a state.
pub type Hook<C> = Arc<dyn Fn(C) -> C + Send + Sync>;

/// One row of a transition table.
///
/// A row fires when the machine is in `from`, the event's kind equals
/// `on`, and the guard (if any) accepts the context and event.
pub struct Transition<S: State, C, E: Event> {
    pub from: S,
    pub on: E::Kind,
    pub to: S,
    pub guard: Option<Guard<C, E>>,
    pub action: Option<Action<C, E>>,
}

impl<S: State, C, E: Event> Transition<S, C, E> {
    /// Check if this row fires for the given state, context and event (pure)
    pub fn can_fire(&self, state: &S, context: &C, event: &E) -> bool {
        if *state != self.from || event.kind() != self.on {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(context, event))
    }

    /// Run the row's action, or hand the context back unchanged if it has none.
    pub fn apply(&self, context: C, event: &E) -> C {
        match &self.action {
            Some(action) => action(context, event),
            None => context,
        }
    }
}

impl<S: State, C, E: Event> Clone for Transition<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            on: self.on,
            to: self.to.clone(),
            guard: self.guard.clone(),
            action: self.action.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::test_support::{Counter, Tick, TickKind};

    fn increment() -> Transition<Counter, u32, Tick> {
        Transition {
            from: Counter::Counting,
            on: TickKind::Add,
            to: Counter::Counting,
            guard: Some(Guard::new(|n: &u32, _: &Tick| *n < 3)),
            action: Some(Arc::new(|n: u32, tick: &Tick| match tick {
                Tick::Add(by) => n + by,
                Tick::Reset => n,
            })),
        }
    }

    #[test]
    fn can_fire_matches_from_state() {
        let transition = increment();

        assert!(transition.can_fire(&Counter::Counting, &0, &Tick::Add(1)));
        assert!(!transition.can_fire(&Counter::Idle, &0, &Tick::Add(1)));
    }

    #[test]
    fn can_fire_matches_event_kind() {
        let transition = increment();

        assert!(!transition.can_fire(&Counter::Counting, &0, &Tick::Reset));
    }

    #[test]
    fn can_fire_respects_guard() {
        let transition = increment();

        assert!(transition.can_fire(&Counter::Counting, &2, &Tick::Add(1)));
        assert!(!transition.can_fire(&Counter::Counting, &3, &Tick::Add(1)));
    }

    #[test]
    fn apply_runs_action_with_event() {
        let transition = increment();

        assert_eq!(transition.apply(1, &Tick::Add(2)), 3);
    }

    #[test]
    fn apply_without_action_keeps_context() {
        let transition: Transition<Counter, u32, Tick> = Transition {
            from: Counter::Counting,
            on: TickKind::Reset,
            to: Counter::Idle,
            guard: None,
            action: None,
        };

        assert_eq!(transition.apply(7, &Tick::Reset), 7);
    }
}
