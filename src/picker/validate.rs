//! Validation predicates for 12-hour clock fields.
//!
//! All three are pure functions of a string. Anything that is not made of
//! ASCII digits is invalid.

/// Two digits with a value in `0..=59`.
///
/// ```rust
/// use timepicker::picker::minutes_valid;
///
/// assert!(minutes_valid("07"));
/// assert!(!minutes_valid("7"));
/// assert!(!minutes_valid("60"));
/// ```
pub fn minutes_valid(s: &str) -> bool {
    s.len() == 2 && numeric(s).is_some_and(|m| m <= 59)
}

/// One or two digits with a value in `1..=12`.
///
/// ```rust
/// use timepicker::picker::hours_valid;
///
/// assert!(hours_valid("9"));
/// assert!(hours_valid("09"));
/// assert!(!hours_valid("0"));
/// assert!(!hours_valid("13"));
/// ```
pub fn hours_valid(s: &str) -> bool {
    (1..=2).contains(&s.len()) && numeric(s).is_some_and(|h| (1..=12).contains(&h))
}

/// Three or four digits: an hours prefix followed by a two-digit minutes suffix.
///
/// ```rust
/// use timepicker::picker::time_valid;
///
/// assert!(time_valid("930"));
/// assert!(time_valid("1159"));
/// assert!(!time_valid("1360"));
/// assert!(!time_valid("12"));
/// ```
pub fn time_valid(s: &str) -> bool {
    if !(3..=4).contains(&s.len()) || !is_digits(s) {
        return false;
    }
    let (hours, minutes) = s.split_at(s.len() - 2);
    hours_valid(hours) && minutes_valid(minutes)
}

/// Right-pad with `'0'` up to `len`. Longer input is returned as is.
pub(crate) fn padded(s: &str, len: usize) -> String {
    let mut out = s.to_string();
    while out.len() < len {
        out.push('0');
    }
    out
}

pub(crate) fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn numeric(s: &str) -> Option<u32> {
    if s.is_empty() || !is_digits(s) {
        return None;
    }
    s.parse().ok()
}
