//! Timepicker: a keyboard-driven 12-hour time input
//!
//! The input is an explicit finite-state machine. Each keystroke is
//! checked by a guard and either fires a transition (updating the
//! machine's context) or is dropped. Rendering is left to a presenter
//! that reads the context back after every key.
//!
//! The crate is layered the same way:
//!
//! - [`core`]: `State`, `Event`, `Guard` and transition history
//! - [`machine`]: transition rows, pure definitions, and a running machine
//! - [`builder`]: fluent builders and the `state_enum!` macro
//! - [`picker`]: the 12-hour table, key parsing and field validation
//! - [`presenter`]: display projection, labels, prefill and snapshots
//!
//! # Example
//!
//! ```rust
//! use timepicker::picker::{InputState, TimeInputMachine};
//! use timepicker::presenter::derive_display;
//!
//! let mut machine = TimeInputMachine::new();
//! for key in ["1", "2", ":", "3", "0"] {
//!     machine.send(key);
//! }
//! assert_eq!(machine.state(), InputState::EnteringMinutes);
//! assert_eq!(derive_display(machine.context()), "12:30");
//!
//! machine.send("a");
//! assert!(machine.is_valid());
//! assert_eq!(derive_display(machine.context()), "12:30 AM");
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod picker;
pub mod presenter;

// Re-export commonly used types
pub use crate::core::{Event, Guard, State, StateHistory, StateTransition};
pub use picker::{InputState, Key, TimeContext, TimeInputMachine};
pub use presenter::{derive_display, Presenter, PresenterConfig};
