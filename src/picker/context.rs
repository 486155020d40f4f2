//! Mutable data carried by the time input machine.

use crate::picker::error::ContextError;
use crate::picker::validate::{hours_valid, is_digits};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The AM/PM designator.
///
/// Serialized as the lowercased key that set it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Half {
    #[serde(rename = "a")]
    Am,
    #[serde(rename = "p")]
    Pm,
}

impl Half {
    /// Map a keystroke to a half marker, ignoring case.
    pub fn from_key(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Self::Am),
            'p' => Some(Self::Pm),
            _ => None,
        }
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Am => f.write_str("AM"),
            Self::Pm => f.write_str("PM"),
        }
    }
}

/// The digits typed so far, before or after the colon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// Raw digits typed without a colon; hours and minutes are inferred
    /// from the last four of them.
    Digits(String),
    /// Hours confirmed by a colon, minutes being typed.
    HoursMinutes { hours: String, minutes: String },
}

impl Default for Entry {
    fn default() -> Self {
        Self::Digits(String::new())
    }
}

/// Context of the time input machine.
///
/// `valid` mirrors whether the machine sits in its accepting state; it is
/// only ever changed by the entry and exit hooks of that state.
///
/// Serializes to a flat record with `null` for absent fields:
///
/// ```rust
/// use timepicker::picker::TimeContext;
///
/// let json = serde_json::to_string(&TimeContext::default()).unwrap();
/// assert_eq!(
///     json,
///     r#"{"digits_before_colon":"","hours":null,"minutes":null,"half":null,"valid":false}"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ContextFields", try_from = "ContextFields")]
pub struct TimeContext {
    pub entry: Entry,
    pub half: Option<Half>,
    pub valid: bool,
}

impl TimeContext {
    pub fn digits_before_colon(&self) -> Option<&str> {
        match &self.entry {
            Entry::Digits(digits) => Some(digits),
            Entry::HoursMinutes { .. } => None,
        }
    }

    pub fn hours(&self) -> Option<&str> {
        match &self.entry {
            Entry::HoursMinutes { hours, .. } => Some(hours),
            Entry::Digits(_) => None,
        }
    }

    pub fn minutes(&self) -> Option<&str> {
        match &self.entry {
            Entry::HoursMinutes { minutes, .. } => Some(minutes),
            Entry::Digits(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ContextFields {
    digits_before_colon: Option<String>,
    hours: Option<String>,
    minutes: Option<String>,
    half: Option<Half>,
    valid: bool,
}

impl From<TimeContext> for ContextFields {
    fn from(context: TimeContext) -> Self {
        let (digits_before_colon, hours, minutes) = match context.entry {
            Entry::Digits(digits) => (Some(digits), None, None),
            Entry::HoursMinutes { hours, minutes } => (None, Some(hours), Some(minutes)),
        };
        Self {
            digits_before_colon,
            hours,
            minutes,
            half: context.half,
            valid: context.valid,
        }
    }
}

impl TryFrom<ContextFields> for TimeContext {
    type Error = ContextError;

    fn try_from(fields: ContextFields) -> Result<Self, Self::Error> {
        let entry = match (fields.digits_before_colon, fields.hours, fields.minutes) {
            (Some(digits), None, None) => {
                let digits = digit_field("digits_before_colon", digits)?;
                if digits.len() > 4 {
                    return Err(ContextError::BufferTooLong(digits));
                }
                Entry::Digits(digits)
            }
            (None, Some(hours), Some(minutes)) => {
                let hours = digit_field("hours", hours)?;
                let minutes = digit_field("minutes", minutes)?;
                if !hours_valid(&hours) {
                    return Err(ContextError::HoursOutOfRange(hours));
                }
                if minutes.len() > 2 {
                    return Err(ContextError::MinutesTooLong(minutes));
                }
                Entry::HoursMinutes { hours, minutes }
            }
            _ => return Err(ContextError::AmbiguousEntry),
        };

        // The half marker is set by the same transition that completes the time.
        if fields.half.is_some() != fields.valid {
            return Err(ContextError::HalfMismatch {
                valid: fields.valid,
            });
        }

        Ok(Self {
            entry,
            half: fields.half,
            valid: fields.valid,
        })
    }
}

fn digit_field(field: &'static str, value: String) -> Result<String, ContextError> {
    if is_digits(&value) {
        Ok(value)
    } else {
        Err(ContextError::NonDigit { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_empty_digit_buffer() {
        let context = TimeContext::default();

        assert_eq!(context.digits_before_colon(), Some(""));
        assert_eq!(context.hours(), None);
        assert_eq!(context.minutes(), None);
        assert_eq!(context.half, None);
        assert!(!context.valid);
    }

    #[test]
    fn accessors_follow_entry_variant() {
        let context = TimeContext {
            entry: Entry::HoursMinutes {
                hours: "12".to_string(),
                minutes: "4".to_string(),
            },
            half: Some(Half::Am),
            valid: false,
        };

        assert_eq!(context.digits_before_colon(), None);
        assert_eq!(context.hours(), Some("12"));
        assert_eq!(context.minutes(), Some("4"));
    }

    #[test]
    fn half_from_key_lowercases() {
        assert_eq!(Half::from_key('A'), Some(Half::Am));
        assert_eq!(Half::from_key('p'), Some(Half::Pm));
        assert_eq!(Half::from_key('m'), None);
    }

    #[test]
    fn serializes_split_entry_with_half() {
        let context = TimeContext {
            entry: Entry::HoursMinutes {
                hours: "11".to_string(),
                minutes: "43".to_string(),
            },
            half: Some(Half::Pm),
            valid: true,
        };

        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "digits_before_colon": null,
                "hours": "11",
                "minutes": "43",
                "half": "p",
                "valid": true
            })
        );
    }

    #[test]
    fn deserialize_rejects_both_representations() {
        let json = r#"{"digits_before_colon":"1","hours":"1","minutes":"","half":null,"valid":false}"#;

        let err = serde_json::from_str::<TimeContext>(json).unwrap_err();
        assert!(err.to_string().contains("either digits_before_colon"));
    }

    #[test]
    fn deserialize_rejects_hours_without_minutes() {
        let json = r#"{"digits_before_colon":null,"hours":"1","minutes":null,"half":null,"valid":false}"#;

        assert!(serde_json::from_str::<TimeContext>(json).is_err());
    }

    #[test]
    fn deserialize_rejects_non_digits() {
        let json = r#"{"digits_before_colon":"1x","hours":null,"minutes":null,"half":null,"valid":false}"#;

        let err = serde_json::from_str::<TimeContext>(json).unwrap_err();
        assert!(err.to_string().contains("digits_before_colon"));
    }

    #[test]
    fn deserialize_accepts_split_entry() {
        let json = r#"{"digits_before_colon":null,"hours":"9","minutes":"05","half":"a","valid":true}"#;

        let context: TimeContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.hours(), Some("9"));
        assert_eq!(context.minutes(), Some("05"));
        assert_eq!(context.half, Some(Half::Am));
    }

    #[test]
    fn deserialize_rejects_long_digit_buffer() {
        let json = r#"{"digits_before_colon":"99999999","hours":null,"minutes":null,"half":null,"valid":false}"#;

        let err = serde_json::from_str::<TimeContext>(json).unwrap_err();
        assert!(err.to_string().contains("longer than four digits"));
    }

    #[test]
    fn deserialize_rejects_hours_out_of_range() {
        for hours in ["13", "0", "", "007"] {
            let json = format!(
                r#"{{"digits_before_colon":null,"hours":"{hours}","minutes":"","half":null,"valid":false}}"#
            );

            assert!(
                serde_json::from_str::<TimeContext>(&json).is_err(),
                "hours {hours:?} should be rejected"
            );
        }
    }

    #[test]
    fn deserialize_rejects_long_minutes() {
        let json = r#"{"digits_before_colon":null,"hours":"12","minutes":"777","half":null,"valid":false}"#;

        let err = serde_json::from_str::<TimeContext>(json).unwrap_err();
        assert!(err.to_string().contains("Minutes \"777\""));
    }

    #[test]
    fn deserialize_rejects_valid_flag_without_half() {
        let json = r#"{"digits_before_colon":"930","hours":null,"minutes":null,"half":null,"valid":true}"#;

        let err = serde_json::from_str::<TimeContext>(json).unwrap_err();
        assert!(err.to_string().contains("half marker"));
    }

    #[test]
    fn deserialize_rejects_half_on_invalid_context() {
        let json = r#"{"digits_before_colon":"930","hours":null,"minutes":null,"half":"p","valid":false}"#;

        assert!(serde_json::from_str::<TimeContext>(json).is_err());
    }
}
