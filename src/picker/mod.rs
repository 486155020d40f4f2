//! Keyboard-driven 12-hour time input.
//!
//! [`TimeInputMachine`] accepts single keystrokes and moves between three
//! states while building up a [`TimeContext`]:
//!
//! - `EnteringHours`: digits collect in a buffer; the last two are read as
//!   minutes and the rest as hours.
//! - `EnteringMinutes`: a colon confirmed the hours; digits go to minutes.
//! - `Valid`: an AM/PM key completed a valid time.
//!
//! Keys that would make the input impossible to complete are dropped
//! without any error.
//!
//! # Example
//!
//! ```rust
//! use timepicker::picker::{InputState, TimeInputMachine};
//!
//! let mut machine = TimeInputMachine::new();
//! for key in ["1", "1", ":", "4", "3", "p"] {
//!     machine.send(key);
//! }
//!
//! assert_eq!(machine.state(), InputState::Valid);
//! assert_eq!(machine.context().hours(), Some("11"));
//! assert_eq!(machine.context().minutes(), Some("43"));
//! assert!(machine.is_valid());
//! ```

mod context;
mod error;
mod key;
mod table;
mod validate;

pub use context::{Entry, Half, TimeContext};
pub use error::{ContextError, UnknownKey};
pub use key::{Key, KeyKind};
pub use validate::{hours_valid, minutes_valid, time_valid};

use crate::core::StateHistory;
use crate::machine::{Definition, StateMachine};
use std::sync::Arc;
use tracing::trace;

crate::state_enum! {
    /// Discrete states of the time input.
    #[derive(Copy, Eq, Hash)]
    pub enum InputState {
        /// Typing digits with no colon yet. Initial state.
        EnteringHours,
        /// Colon typed; typing minutes.
        EnteringMinutes,
        /// A complete time with an AM/PM marker.
        Valid,
    }
    accepting: [Valid]
}

/// The time input state machine.
pub struct TimeInputMachine {
    machine: StateMachine<InputState, TimeContext, Key>,
}

impl TimeInputMachine {
    /// A fresh machine in `EnteringHours` with an empty context.
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new(Arc::new(table::definition()), TimeContext::default()),
        }
    }

    /// Keep at most `limit` fired transitions in [`history`](Self::history).
    pub fn with_history_limit(self, limit: usize) -> Self {
        Self {
            machine: self.machine.with_history_limit(limit),
        }
    }

    /// Pure transition function.
    ///
    /// Returns the state and context that follow `key`. Unknown keys and
    /// keys rejected by every guard hand back the inputs unchanged. The
    /// machine's own state is not consulted or modified.
    pub fn handle_key(
        &self,
        state: InputState,
        context: TimeContext,
        key: &str,
    ) -> (InputState, TimeContext) {
        let Ok(key) = key.parse::<Key>() else {
            return (state, context);
        };
        self.definition()
            .step(&state, &context, &key)
            .unwrap_or((state, context))
    }

    /// Feed one key string to the machine.
    ///
    /// Returns `true` if the key caused a transition.
    pub fn send(&mut self, key: &str) -> bool {
        match key.parse::<Key>() {
            Ok(key) => self.send_key(&key),
            Err(err) => {
                trace!(%err, state = ?self.state(), "key ignored");
                false
            }
        }
    }

    /// Feed an already parsed key.
    pub fn send_key(&mut self, key: &Key) -> bool {
        self.machine.send(key)
    }

    /// Clear all input and return to `EnteringHours`.
    pub fn reset(&mut self) {
        self.machine.reset(TimeContext::default());
    }

    pub fn state(&self) -> InputState {
        *self.machine.current_state()
    }

    pub fn context(&self) -> &TimeContext {
        self.machine.context()
    }

    pub fn is_valid(&self) -> bool {
        self.context().valid
    }

    pub fn history(&self) -> &StateHistory<InputState> {
        self.machine.history()
    }

    pub fn definition(&self) -> &Definition<InputState, TimeContext, Key> {
        self.machine.definition()
    }
}

impl Default for TimeInputMachine {
    fn default() -> Self {
        Self::new()
    }
}
