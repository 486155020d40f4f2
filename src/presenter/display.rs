//! Projection of a context onto the text shown in the input box.

use crate::picker::{Entry, TimeContext};

/// Render a context as `H:MM`, `HH:MM` or `HH:MM AM`/`PM`.
///
/// While no colon has been typed, the last two buffered digits are shown
/// as minutes and up to two digits before them as hours; a buffer of one
/// or two digits therefore shows no colon yet. Absent fields render as
/// empty strings.
///
/// ```rust
/// use timepicker::picker::TimeInputMachine;
/// use timepicker::presenter::derive_display;
///
/// let mut machine = TimeInputMachine::new();
/// for key in ["9", "3", "0", "p"] {
///     machine.send(key);
/// }
/// assert_eq!(derive_display(machine.context()), "9:30 PM");
/// ```
pub fn derive_display(context: &TimeContext) -> String {
    let (hours, minutes) = match &context.entry {
        Entry::Digits(digits) => split_buffer(digits),
        Entry::HoursMinutes { hours, minutes } => (hours.as_str(), minutes.as_str()),
    };

    let mut display = String::with_capacity(hours.len() + minutes.len() + 4);
    display.push_str(hours);
    if !hours.is_empty() {
        display.push(':');
    }
    display.push_str(minutes);
    if let Some(half) = context.half {
        display.push(' ');
        display.push_str(&half.to_string());
    }
    display
}

/// Characters `[len-4, len-2)` as hours and the last two as minutes,
/// with both bounds clamped at zero.
fn split_buffer(digits: &str) -> (&str, &str) {
    let len = digits.len();
    let hours_start = len.saturating_sub(4);
    let minutes_start = len.saturating_sub(2);
    match (
        digits.get(hours_start..minutes_start),
        digits.get(minutes_start..),
    ) {
        (Some(hours), Some(minutes)) => (hours, minutes),
        _ => ("", ""),
    }
}
