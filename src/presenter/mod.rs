//! View-side collaborator of the time input machine.
//!
//! The presenter owns a [`TimeInputMachine`], forwards keystrokes to it
//! and keeps the display string in sync with the machine's context. It
//! never edits the context itself.
//!
//! Typing a literal (the mount-time prefill, or a pasted value) reports
//! every rejected keystroke at once through a [`Validation`] instead of
//! stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use timepicker::presenter::{Presenter, PresenterConfig};
//!
//! let mut presenter = Presenter::new(PresenterConfig::empty());
//! presenter.mount();
//!
//! for key in ["1", "1", ":", "4", "3"] {
//!     presenter.on_key(key);
//! }
//! assert_eq!(presenter.display(), "11:43");
//! assert_eq!(presenter.validity_label(), "Invalid");
//!
//! assert_eq!(presenter.on_key("p"), "11:43 PM");
//! assert_eq!(presenter.validity_label(), "True");
//! ```

mod config;
mod display;
mod error;
mod snapshot;

pub use config::{PresenterConfig, DEFAULT_PREFILL};
pub use display::derive_display;
pub use error::{ConfigError, RejectedKey, SnapshotError};
pub use snapshot::Snapshot;

use crate::core::State;
use crate::picker::{InputState, TimeInputMachine};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};

/// Outcome of typing a literal: success, or every key that was dropped.
pub type TypingResult = Validation<(), NonEmptyVec<RejectedKey>>;

pub struct Presenter {
    machine: TimeInputMachine,
    config: PresenterConfig,
    display: String,
}

impl Presenter {
    /// Create an unmounted presenter with an empty input.
    pub fn new(config: PresenterConfig) -> Self {
        Self {
            machine: TimeInputMachine::new(),
            config,
            display: String::new(),
        }
    }

    /// Type the configured prefill literal, if any.
    pub fn mount(&mut self) -> TypingResult {
        let Some(literal) = self.config.prefill.clone() else {
            debug!("mounted without prefill");
            return Validation::success(());
        };
        debug!(literal = %literal, "mounting with prefill");
        self.type_literal(&literal)
    }

    /// Feed `literal` one character at a time.
    ///
    /// Characters the machine drops are collected rather than aborting
    /// the rest of the literal.
    pub fn type_literal(&mut self, literal: &str) -> TypingResult {
        let checks: Vec<TypingResult> = literal
            .chars()
            .enumerate()
            .map(|(position, c)| {
                let key = c.to_string();
                let state = self.machine.state();
                if self.machine.send(&key) {
                    Validation::success(())
                } else {
                    Validation::fail(RejectedKey {
                        key,
                        position,
                        state: state.name().to_string(),
                    })
                }
            })
            .collect();
        self.refresh();

        let result = Validation::all_vec(checks).map(|_| ());
        if let Validation::Failure(rejected) = &result {
            warn!(
                literal = %literal,
                rejected = rejected.len(),
                display = %self.display,
                "literal only partially accepted"
            );
        }
        result
    }

    /// Forward one key and return the refreshed display.
    pub fn on_key(&mut self, key: &str) -> &str {
        if self.machine.send(key) {
            self.refresh();
        }
        &self.display
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_valid(&self) -> bool {
        self.machine.is_valid()
    }

    /// The configured label for the current validity.
    pub fn validity_label(&self) -> &str {
        if self.is_valid() {
            &self.config.valid_label
        } else {
            &self.config.invalid_label
        }
    }

    pub fn state(&self) -> InputState {
        self.machine.state()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.machine)
    }

    /// `{"value": ..., "context": ...}` for a debug readout.
    pub fn debug_json(&self) -> Result<String, serde_json::Error> {
        self.snapshot().to_json()
    }

    pub fn machine(&self) -> &TimeInputMachine {
        &self.machine
    }

    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    fn refresh(&mut self) {
        self.display = derive_display(self.machine.context());
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(PresenterConfig::default())
    }
}
