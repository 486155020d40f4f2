//! Core state machine types and logic.
//!
//! This module contains the pure building blocks shared by every machine:
//! - State definitions via the `State` trait
//! - Events and their trigger kinds via the `Event` trait
//! - Guard predicates over context and event
//! - Immutable history tracking
//!
//! Nothing in here performs I/O or holds mutable state.

mod event;
mod guard;
mod history;
mod state;

pub use event::Event;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
