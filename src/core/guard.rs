//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions of the machine's context and the
//! incoming event. They decide whether a transition may fire without
//! touching either.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition can fire.
///
/// Guards are evaluated before a transition's action runs. A guard that
/// rejects leaves the machine exactly where it was.
///
/// # Example
///
/// ```rust
/// use timepicker::core::Guard;
///
/// // Accept a character only while the buffer has room for it.
/// let has_room = Guard::new(|buffer: &String, _c: &char| buffer.len() < 4);
///
/// assert!(has_room.check(&"12".to_string(), &'3'));
/// assert!(!has_room.check(&"1234".to_string(), &'5'));
/// ```
pub struct Guard<C, E> {
    predicate: Arc<dyn Fn(&C, &E) -> bool + Send + Sync>,
}

impl<C, E> Guard<C, E> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this context and event.
    pub fn check(&self, context: &C, event: &E) -> bool {
        (self.predicate)(context, event)
    }
}

impl<C, E> Clone for Guard<C, E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C, E> fmt::Debug for Guard<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
