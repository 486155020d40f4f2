//! Core State trait for state machine states.
//!
//! States are the discrete positions of a machine. Everything a state
//! carries beyond its identity lives in the machine's context instead.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values; the data that changes
/// while a machine sits in one state belongs to the context.
///
/// # Example
///
/// ```rust
/// use timepicker::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum FieldState {
///     Empty,
///     Editing,
///     Accepted,
/// }
///
/// impl State for FieldState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Empty => "Empty",
///             Self::Editing => "Editing",
///             Self::Accepted => "Accepted",
///         }
///     }
///
///     fn is_accepting(&self) -> bool {
///         matches!(self, Self::Accepted)
///     }
/// }
///
/// assert!(FieldState::Accepted.is_accepting());
/// assert_eq!(FieldState::Editing.name(), "Editing");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state represents accepted (complete and valid) input.
    ///
    /// Accepting states are not terminal: a machine may leave them again.
    ///
    /// Default implementation returns `false`.
    fn is_accepting(&self) -> bool {
        false
    }
}
