//! Property-based tests for the time input machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated keystroke sequences.

use proptest::prelude::*;
use timepicker::core::State;
use timepicker::picker::{hours_valid, minutes_valid, time_valid, Entry, InputState};
use timepicker::presenter::derive_display;
use timepicker::{TimeContext, TimeInputMachine};

prop_compose! {
    fn arbitrary_key()(variant in 0..16u8, digit in 0..10u8) -> String {
        match variant {
            0..=7 => digit.to_string(),
            8 | 9 => "Backspace".to_string(),
            10 | 11 => ":".to_string(),
            12 => "a".to_string(),
            13 => "P".to_string(),
            14 => "x".to_string(),
            _ => "Enter".to_string(),
        }
    }
}

prop_compose! {
    fn arbitrary_digit()(digit in 0..10u8) -> String {
        digit.to_string()
    }
}

fn run(keys: &[String]) -> TimeInputMachine {
    let mut machine = TimeInputMachine::new();
    for key in keys {
        machine.send(key);
    }
    machine
}

proptest! {
    #[test]
    fn valid_flag_tracks_accepting_state(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let mut machine = TimeInputMachine::new();
        for key in &keys {
            machine.send(key);
            prop_assert_eq!(machine.is_valid(), machine.state().is_accepting());
        }
    }

    #[test]
    fn context_invariants_hold(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let machine = run(&keys);
        let context = machine.context();

        match &context.entry {
            Entry::Digits(digits) => {
                prop_assert!(digits.len() <= 4);
                prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
                prop_assert!(machine.state() != InputState::EnteringMinutes);
            }
            Entry::HoursMinutes { hours, minutes } => {
                prop_assert!(hours_valid(hours));
                prop_assert!(minutes.len() <= 2);
                prop_assert!(machine.state() != InputState::EnteringHours);
            }
        }

        if machine.state() == InputState::Valid {
            prop_assert!(context.half.is_some());
            match &context.entry {
                Entry::Digits(digits) => prop_assert!(time_valid(digits)),
                Entry::HoursMinutes { minutes, .. } => prop_assert!(minutes_valid(minutes)),
            }
        } else {
            prop_assert!(context.half.is_none());
        }
    }

    #[test]
    fn digits_alone_never_complete(keys in prop::collection::vec(arbitrary_digit(), 0..20)) {
        let machine = run(&keys);

        prop_assert_eq!(machine.state(), InputState::EnteringHours);
        prop_assert!(!machine.is_valid());
    }

    #[test]
    fn rejected_key_changes_nothing(
        prefix in prop::collection::vec(arbitrary_key(), 0..20),
        key in arbitrary_key()
    ) {
        let mut machine = run(&prefix);
        let state = machine.state();
        let context = machine.context().clone();
        let history_len = machine.history().len();

        if !machine.send(&key) {
            prop_assert_eq!(machine.state(), state);
            prop_assert_eq!(machine.context(), &context);
            prop_assert_eq!(machine.history().len(), history_len);
        }
    }

    #[test]
    fn valid_state_ignores_everything_but_backspace(
        split in any::<bool>(),
        key in arbitrary_key().prop_filter("not backspace", |k| k != "Backspace")
    ) {
        let literal: &[&str] = if split {
            &["1", "2", ":", "4", "5", "p"]
        } else {
            &["1", "2", "4", "5", "a"]
        };
        let keys: Vec<String> = literal.iter().map(|k| k.to_string()).collect();
        let mut machine = run(&keys);
        prop_assert_eq!(machine.state(), InputState::Valid);
        let context = machine.context().clone();

        prop_assert!(!machine.send(&key));
        prop_assert_eq!(machine.state(), InputState::Valid);
        prop_assert_eq!(machine.context(), &context);
    }

    #[test]
    fn handle_key_agrees_with_send(
        prefix in prop::collection::vec(arbitrary_key(), 0..20),
        key in arbitrary_key()
    ) {
        let mut machine = run(&prefix);
        let (state, context) =
            machine.handle_key(machine.state(), machine.context().clone(), &key);

        machine.send(&key);

        prop_assert_eq!(machine.state(), state);
        prop_assert_eq!(machine.context(), &context);
    }

    #[test]
    fn display_never_exceeds_full_time(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let machine = run(&keys);
        let display = derive_display(machine.context());

        // "HH:MM PM"
        prop_assert!(display.len() <= 8);
        prop_assert_eq!(display.ends_with('M'), machine.is_valid());
    }

    #[test]
    fn context_roundtrip_serialization(keys in prop::collection::vec(arbitrary_key(), 0..20)) {
        let machine = run(&keys);

        let json = serde_json::to_string(machine.context()).unwrap();
        let deserialized: TimeContext = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(&deserialized, machine.context());
    }
}
