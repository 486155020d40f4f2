//! Guarded transition tables and the machine that runs them.
//!
//! # Key Concepts
//!
//! - **Transition**: one table row, `from` + trigger kind + guard + action + `to`
//! - **Definition**: the whole table plus entry/exit hooks; its `step` is a
//!   pure `(state, context, event) -> (state, context)` function
//! - **StateMachine**: owns the current state, context and history, and
//!   applies `step` to each event it receives

mod definition;
mod runtime;
mod transition;

pub use definition::Definition;
pub use runtime::{StateMachine, DEFAULT_HISTORY_LIMIT};
pub use transition::{Action, Hook, Transition};
