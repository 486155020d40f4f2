//! Presenter error types.

use thiserror::Error;

/// A keystroke that the machine dropped while a literal was being typed in.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Key {key:?} at position {position} rejected in state {state}")]
pub struct RejectedKey {
    pub key: String,
    /// Zero-based character index within the literal
    pub position: usize,
    /// Name of the state the machine was in when the key arrived
    pub state: String,
}

/// A snapshot whose context could not have been produced in its state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("State {state} does not match valid = {valid}")]
    ValidFlagMismatch { state: String, valid: bool },

    #[error("State {state} cannot hold a {entry} entry")]
    EntryMismatch { state: String, entry: &'static str },

    #[error("State {state} requires a complete time")]
    IncompleteTime { state: String },
}

/// Errors that can occur while loading presenter configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid presenter config: {0}")]
    Parse(#[from] serde_json::Error),
}
