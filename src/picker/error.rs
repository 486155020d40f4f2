//! Errors at the edges of the time input machine.
//!
//! The machine itself never fails: keys that match no transition are
//! dropped. These errors only surface when turning outside data (raw key
//! strings, serialized contexts) into machine types.

use thiserror::Error;

/// A key string outside the machine's alphabet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized key {0:?}")]
pub struct UnknownKey(pub String);

/// A serialized context that breaks the context invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("Context must hold either digits_before_colon or both hours and minutes")]
    AmbiguousEntry,

    #[error("Field {field} contains non-digit characters: {value:?}")]
    NonDigit { field: &'static str, value: String },

    #[error("Digit buffer {0:?} is longer than four digits")]
    BufferTooLong(String),

    #[error("Hours {0:?} are not in 1..=12")]
    HoursOutOfRange(String),

    #[error("Minutes {0:?} are longer than two digits")]
    MinutesTooLong(String),

    #[error("Context has valid = {valid} but its half marker does not match")]
    HalfMismatch { valid: bool },
}
