//! Events that drive a state machine.

use std::fmt::{Debug, Display};

/// An input delivered to a state machine.
///
/// Transitions are keyed on an event's [`Event::Kind`] rather than on the
/// event value itself, so one row can cover a whole class of inputs (for
/// example every digit key) while guards and actions still see the
/// concrete event.
///
/// # Example
///
/// ```rust
/// use timepicker::core::Event;
/// use std::fmt;
///
/// #[derive(Clone, Debug)]
/// enum Input {
///     Char(char),
///     Submit,
/// }
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum InputKind {
///     Char,
///     Submit,
/// }
///
/// impl fmt::Display for Input {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             Self::Char(c) => write!(f, "{c}"),
///             Self::Submit => f.write_str("Submit"),
///         }
///     }
/// }
///
/// impl Event for Input {
///     type Kind = InputKind;
///
///     fn kind(&self) -> InputKind {
///         match self {
///             Self::Char(_) => InputKind::Char,
///             Self::Submit => InputKind::Submit,
///         }
///     }
/// }
///
/// assert_eq!(Input::Char('x').kind(), InputKind::Char);
/// ```
pub trait Event: Clone + Debug + Display + Send + Sync {
    /// Classification used to select candidate transitions.
    type Kind: Copy + PartialEq + Debug + Send + Sync;

    fn kind(&self) -> Self::Kind;
}
