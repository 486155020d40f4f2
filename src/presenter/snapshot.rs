//! Read-only snapshots of the machine for presenters and debugging.

use crate::core::State;
use crate::picker::{minutes_valid, time_valid, Entry, InputState, TimeContext, TimeInputMachine};
use crate::presenter::error::SnapshotError;
use serde::{Deserialize, Serialize};

/// The machine's state and context at one point in time.
///
/// Serializes as `{"value": <state>, "context": {...}}`. Deserializing
/// goes through [`Snapshot::new`], so a loaded snapshot always pairs a
/// state with a context that state can hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotFields")]
pub struct Snapshot {
    pub value: InputState,
    pub context: TimeContext,
}

#[derive(Deserialize)]
struct SnapshotFields {
    value: InputState,
    context: TimeContext,
}

impl TryFrom<SnapshotFields> for Snapshot {
    type Error = SnapshotError;

    fn try_from(fields: SnapshotFields) -> Result<Self, Self::Error> {
        Self::new(fields.value, fields.context)
    }
}

impl Snapshot {
    /// Pair a state with a context, checking that the machine could be
    /// in that state with that context.
    pub fn new(value: InputState, context: TimeContext) -> Result<Self, SnapshotError> {
        let state = value.name().to_string();

        if context.valid != value.is_accepting() {
            return Err(SnapshotError::ValidFlagMismatch {
                state,
                valid: context.valid,
            });
        }

        match (value, &context.entry) {
            (InputState::EnteringHours, Entry::HoursMinutes { .. }) => {
                return Err(SnapshotError::EntryMismatch {
                    state,
                    entry: "hours and minutes",
                });
            }
            (InputState::EnteringMinutes, Entry::Digits(_)) => {
                return Err(SnapshotError::EntryMismatch {
                    state,
                    entry: "digit buffer",
                });
            }
            (InputState::Valid, Entry::Digits(digits)) if !time_valid(digits) => {
                return Err(SnapshotError::IncompleteTime { state });
            }
            (InputState::Valid, Entry::HoursMinutes { minutes, .. }) if !minutes_valid(minutes) => {
                return Err(SnapshotError::IncompleteTime { state });
            }
            _ => {}
        }

        Ok(Self { value, context })
    }

    pub fn of(machine: &TimeInputMachine) -> Self {
        Self {
            value: machine.state(),
            context: machine.context().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a snapshot, rejecting any state and context the machine
    /// could not have produced.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
