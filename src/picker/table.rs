//! Transition table of the 12-hour time input.
//!
//! Digits are accepted speculatively: a digit is taken as soon as padding
//! the field with zeros would make it valid, so `1` is accepted before it
//! is known whether the user means 1, 10, 11 or 12.

use crate::builder::{BuildError, DefinitionBuilder, TransitionBuilder};
use crate::machine::Definition;
use crate::picker::context::{Entry, TimeContext};
use crate::picker::key::{Key, KeyKind};
use crate::picker::validate::{hours_valid, minutes_valid, padded, time_valid};
use crate::picker::InputState;

/// Pad target when probing the digit buffer: one hour digit plus minutes.
const TIME_PROBE_LEN: usize = 3;
const MINUTES_LEN: usize = 2;

type Row = TransitionBuilder<InputState, TimeContext, Key>;

/// The complete time input definition.
pub fn definition() -> Definition<InputState, TimeContext, Key> {
    build().expect("time input table should always build")
}

fn row(from: InputState, on: KeyKind, to: InputState) -> Row {
    TransitionBuilder::new().from(from).on(on).to(to)
}

fn build() -> Result<Definition<InputState, TimeContext, Key>, BuildError> {
    use InputState::{EnteringHours, EnteringMinutes, Valid};

    DefinitionBuilder::new()
        .initial(EnteringHours)
        // EnteringHours
        .transition(
            row(EnteringHours, KeyKind::Backspace, EnteringHours)
                .when(digits_not_empty)
                .action(pop_digit),
        )?
        .transition(
            row(EnteringHours, KeyKind::Digit, EnteringHours)
                .when(digit_keeps_time_valid)
                .action(push_digit),
        )?
        .transition(
            row(EnteringHours, KeyKind::Half, Valid)
                .when(digits_form_time)
                .action(set_half),
        )?
        .transition(
            row(EnteringHours, KeyKind::Colon, EnteringMinutes)
                .when(digits_form_hours)
                .action(confirm_hours),
        )?
        // EnteringMinutes
        .transition(
            row(EnteringMinutes, KeyKind::Backspace, EnteringMinutes)
                .when(minutes_not_empty)
                .action(pop_minute),
        )?
        .transition(
            row(EnteringMinutes, KeyKind::Backspace, EnteringHours)
                .when(minutes_empty)
                .action(reopen_hours),
        )?
        .transition(
            row(EnteringMinutes, KeyKind::Digit, EnteringMinutes)
                .when(digit_keeps_minutes_valid)
                .action(push_minute),
        )?
        .transition(
            row(EnteringMinutes, KeyKind::Half, Valid)
                .when(minutes_complete)
                .action(set_half),
        )?
        // Valid
        .transition(
            row(Valid, KeyKind::Backspace, EnteringHours)
                .when(|ctx, _| ctx.digits_before_colon().is_some())
                .action(clear_half),
        )?
        .transition(
            row(Valid, KeyKind::Backspace, EnteringMinutes)
                .when(|ctx, _| ctx.minutes().is_some())
                .action(clear_half),
        )?
        .on_entry(Valid, |ctx| TimeContext { valid: true, ..ctx })
        .on_exit(Valid, |ctx| TimeContext { valid: false, ..ctx })
        .build()
}

// Guards

fn digits_not_empty(ctx: &TimeContext, _: &Key) -> bool {
    ctx.digits_before_colon().is_some_and(|d| !d.is_empty())
}

fn digit_keeps_time_valid(ctx: &TimeContext, key: &Key) -> bool {
    match (ctx.digits_before_colon(), key.digit_char()) {
        (Some(digits), Some(c)) => time_valid(&padded(&format!("{digits}{c}"), TIME_PROBE_LEN)),
        _ => false,
    }
}

fn digits_form_time(ctx: &TimeContext, _: &Key) -> bool {
    ctx.digits_before_colon().is_some_and(time_valid)
}

fn digits_form_hours(ctx: &TimeContext, _: &Key) -> bool {
    ctx.digits_before_colon().is_some_and(hours_valid)
}

fn minutes_not_empty(ctx: &TimeContext, _: &Key) -> bool {
    ctx.minutes().is_some_and(|m| !m.is_empty())
}

fn minutes_empty(ctx: &TimeContext, _: &Key) -> bool {
    ctx.minutes().is_some_and(str::is_empty)
}

fn digit_keeps_minutes_valid(ctx: &TimeContext, key: &Key) -> bool {
    match (ctx.minutes(), key.digit_char()) {
        (Some(minutes), Some(c)) => minutes_valid(&padded(&format!("{minutes}{c}"), MINUTES_LEN)),
        _ => false,
    }
}

fn minutes_complete(ctx: &TimeContext, _: &Key) -> bool {
    ctx.minutes().is_some_and(minutes_valid)
}

// Actions

fn push_digit(mut ctx: TimeContext, key: &Key) -> TimeContext {
    if let (Entry::Digits(digits), Some(c)) = (&mut ctx.entry, key.digit_char()) {
        digits.push(c);
    }
    ctx
}

fn pop_digit(mut ctx: TimeContext, _: &Key) -> TimeContext {
    if let Entry::Digits(digits) = &mut ctx.entry {
        digits.pop();
    }
    ctx
}

fn confirm_hours(ctx: TimeContext, _: &Key) -> TimeContext {
    let entry = match ctx.entry {
        Entry::Digits(hours) => Entry::HoursMinutes {
            hours,
            minutes: String::new(),
        },
        other => other,
    };
    TimeContext { entry, ..ctx }
}

fn reopen_hours(ctx: TimeContext, _: &Key) -> TimeContext {
    let entry = match ctx.entry {
        Entry::HoursMinutes { hours, .. } => Entry::Digits(hours),
        other => other,
    };
    TimeContext { entry, ..ctx }
}

fn push_minute(mut ctx: TimeContext, key: &Key) -> TimeContext {
    if let (Entry::HoursMinutes { minutes, .. }, Some(c)) = (&mut ctx.entry, key.digit_char()) {
        minutes.push(c);
    }
    ctx
}

fn pop_minute(mut ctx: TimeContext, _: &Key) -> TimeContext {
    if let Entry::HoursMinutes { minutes, .. } = &mut ctx.entry {
        minutes.pop();
    }
    ctx
}

fn set_half(ctx: TimeContext, key: &Key) -> TimeContext {
    match key {
        Key::Half(half) => TimeContext {
            half: Some(*half),
            ..ctx
        },
        _ => ctx,
    }
}

fn clear_half(ctx: TimeContext, _: &Key) -> TimeContext {
    TimeContext { half: None, ..ctx }
}
