//! End-to-end keystroke sequences through the machine and presenter.

use timepicker::picker::{Half, InputState, TimeContext, TimeInputMachine};
use timepicker::presenter::{Presenter, PresenterConfig};

fn presenter() -> Presenter {
    Presenter::new(PresenterConfig::empty())
}

#[test]
fn typing_hours_then_colon_confirms_hours() {
    let mut machine = TimeInputMachine::new();

    assert!(machine.send("1"));
    assert!(machine.send("2"));
    assert!(machine.send(":"));

    assert_eq!(machine.state(), InputState::EnteringMinutes);
    assert_eq!(machine.context().hours(), Some("12"));
}

#[test]
fn full_time_with_colon_then_pm() {
    let mut presenter = presenter();
    for key in ["1", "1", ":", "4", "3"] {
        presenter.on_key(key);
    }

    let context = &presenter.snapshot().context;
    assert_eq!(context.hours(), Some("11"));
    assert_eq!(context.minutes(), Some("43"));
    assert_eq!(context.half, None);
    assert!(!context.valid);
    assert_eq!(presenter.display(), "11:43");

    presenter.on_key("p");

    let snapshot = presenter.snapshot();
    assert_eq!(snapshot.value, InputState::Valid);
    assert_eq!(snapshot.context.half, Some(Half::Pm));
    assert!(snapshot.context.valid);
    assert_eq!(presenter.display(), "11:43 PM");
}

#[test]
fn fourteen_is_not_accepted_as_hours() {
    let mut presenter = presenter();
    for key in ["1", "4", ":", "4", "3"] {
        presenter.on_key(key);
    }

    // The colon and the final 3 are dropped; the buffer reads 1:44
    assert_eq!(presenter.state(), InputState::EnteringHours);
    assert_eq!(
        presenter.machine().context().digits_before_colon(),
        Some("144")
    );
    assert_eq!(presenter.display(), "1:44");

    presenter.on_key("p");
    assert_eq!(presenter.display(), "1:44 PM");
    assert!(presenter.is_valid());
}

#[test]
fn backspace_from_valid_goes_back_where_it_came_from() {
    let mut from_buffer = presenter();
    from_buffer.type_literal("1015a");
    assert_eq!(from_buffer.state(), InputState::Valid);
    from_buffer.on_key("Backspace");
    assert_eq!(from_buffer.state(), InputState::EnteringHours);
    assert_eq!(from_buffer.display(), "10:15");
    assert_eq!(from_buffer.validity_label(), "Invalid");

    let mut from_minutes = presenter();
    from_minutes.type_literal("10:15a");
    assert_eq!(from_minutes.state(), InputState::Valid);
    from_minutes.on_key("Backspace");
    assert_eq!(from_minutes.state(), InputState::EnteringMinutes);
    assert_eq!(from_minutes.display(), "10:15");
}

#[test]
fn deleting_everything_returns_to_blank() {
    let mut presenter = presenter();
    presenter.type_literal("12:45P");

    for _ in 0..10 {
        presenter.on_key("Backspace");
    }

    assert_eq!(presenter.state(), InputState::EnteringHours);
    assert_eq!(presenter.display(), "");
    assert_eq!(presenter.snapshot().context, TimeContext::default());
}

#[test]
fn history_records_the_path_through_states() {
    let mut machine = TimeInputMachine::new();
    for key in ["9", ":", "0", "5", "a", "Backspace"] {
        machine.send(key);
    }

    let path = machine.history().get_path();
    assert_eq!(
        path,
        vec![
            &InputState::EnteringHours,
            &InputState::EnteringHours,
            &InputState::EnteringMinutes,
            &InputState::EnteringMinutes,
            &InputState::EnteringMinutes,
            &InputState::Valid,
            &InputState::EnteringMinutes,
        ]
    );
    let triggers: Vec<&str> = machine
        .history()
        .transitions()
        .iter()
        .map(|t| t.trigger.as_str())
        .collect();
    assert_eq!(triggers, vec!["9", ":", "0", "5", "a", "Backspace"]);
}
