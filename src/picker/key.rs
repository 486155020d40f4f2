//! Key events accepted by the time input.

use crate::core::Event;
use crate::picker::context::Half;
use crate::picker::error::UnknownKey;
use std::fmt;
use std::str::FromStr;

/// A single keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// `0`-`9`; the payload is the digit value.
    Digit(u8),
    Backspace,
    Colon,
    /// `a`/`A` or `p`/`P`.
    Half(Half),
}

/// Trigger classification used by the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Digit,
    Backspace,
    Colon,
    Half,
}

impl Key {
    /// The digit as a character, for appending to a field.
    pub fn digit_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            _ => None,
        }
    }
}

impl FromStr for Key {
    type Err = UnknownKey;

    /// Parse a key name as delivered by a keyboard event (`"7"`,
    /// `"Backspace"`, `":"`, `"a"`, `"P"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Backspace" => return Ok(Self::Backspace),
            ":" => return Ok(Self::Colon),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                if let Some(d) = c.to_digit(10) {
                    // to_digit(10) is at most 9
                    Ok(Self::Digit(d as u8))
                } else if let Some(half) = Half::from_key(c) {
                    Ok(Self::Half(half))
                } else {
                    Err(UnknownKey(s.to_string()))
                }
            }
            _ => Err(UnknownKey(s.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Backspace => f.write_str("Backspace"),
            Self::Colon => f.write_str(":"),
            Self::Half(Half::Am) => f.write_str("a"),
            Self::Half(Half::Pm) => f.write_str("p"),
        }
    }
}

impl Event for Key {
    type Kind = KeyKind;

    fn kind(&self) -> KeyKind {
        match self {
            Self::Digit(_) => KeyKind::Digit,
            Self::Backspace => KeyKind::Backspace,
            Self::Colon => KeyKind::Colon,
            Self::Half(_) => KeyKind::Half,
        }
    }
}
