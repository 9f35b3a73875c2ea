//! End-to-end key-flow tests: keystrokes through NumericField into the
//! controller, observing the text, the value, and the emitted events.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::NumericValueController;
use crate::events::CommitReason;
use crate::tui::NumericField;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn type_text(field: &mut NumericField, text: &str) {
    for c in text.chars() {
        field.handle_key(key(KeyCode::Char(c)));
    }
}

fn clear(field: &mut NumericField) {
    while !field.text().is_empty() {
        field.handle_key(key(KeyCode::Backspace));
    }
}

#[test]
fn test_full_edit_session_with_events() {
    let mut controller = NumericValueController::new();
    controller.set_min_value(10);
    controller.set_max_value(50);

    let changes = Rc::new(RefCell::new(Vec::new()));
    let commits = Rc::new(RefCell::new(Vec::new()));
    let changes_sink = Rc::clone(&changes);
    controller.on_value_changed(move |v| changes_sink.borrow_mut().push(v));
    let commits_sink = Rc::clone(&commits);
    controller.on_value_committed(move |v, reason| commits_sink.borrow_mut().push((v, reason)));

    let mut field = NumericField::new("Limit", controller);
    field.controller_mut().set_value(20);

    field.handle_key(key(KeyCode::Enter));
    clear(&mut field);
    type_text(&mut field, "40");
    field.handle_key(key(KeyCode::Enter));

    // Backspace x2 ("2", ""), then "4", then "40"
    assert_eq!(*changes.borrow(), vec![10, 10, 10, 40]);
    assert_eq!(*commits.borrow(), vec![(40, CommitReason::Enter)]);
    assert_eq!(field.value(), 40);
    assert_eq!(field.text(), "40");
}

#[test]
fn test_tab_away_commits_focus_lost() {
    let mut first = NumericField::new("First", {
        let mut c = NumericValueController::new();
        c.set_min_value(10);
        c.set_max_value(50);
        c
    });
    let commits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&commits);
    first
        .controller_mut()
        .on_value_committed(move |v, reason| sink.borrow_mut().push((v, reason)));

    first.handle_key(key(KeyCode::Enter));
    clear(&mut first);
    type_text(&mut first, "5");

    // Tab is not consumed by the field; the host moves focus and blurs.
    assert!(!first.handle_key(key(KeyCode::Tab)));
    first.blur();

    assert_eq!(*commits.borrow(), vec![(10, CommitReason::FocusLost)]);
    assert_eq!(first.text(), "10");
}

#[test]
fn test_clearing_the_box_and_committing_yields_clamped_zero() {
    let mut field = NumericField::new("Count", {
        let mut c = NumericValueController::new();
        c.set_min_value(10);
        c.set_max_value(50);
        c
    });
    field.controller_mut().set_value(30);

    field.handle_key(key(KeyCode::Enter));
    clear(&mut field);
    assert_eq!(field.text(), "");
    assert_eq!(field.value(), 10); // empty parses to 0, hard-clamped

    field.handle_key(key(KeyCode::Enter));
    assert_eq!(field.value(), 10);
    assert_eq!(field.text(), "10");
}

#[test]
fn test_negative_entry_with_negative_lower_bound() {
    let mut controller = NumericValueController::new();
    controller.set_min_value(-100);
    controller.set_max_value(100);
    let mut field = NumericField::new("Offset", controller);

    field.handle_key(key(KeyCode::Enter));
    clear(&mut field);
    type_text(&mut field, "-250");

    // min < 0 is not relaxed, so the display clamps at the bound.
    assert_eq!(field.text(), "-100");
    assert_eq!(field.value(), -100);

    field.handle_key(key(KeyCode::Enter));
    assert_eq!(field.value(), -100);
}

#[test]
fn test_smart_clamp_disabled_reformats_while_typing() {
    let mut controller = NumericValueController::new();
    controller.set_min_value(10);
    controller.set_max_value(50);
    controller.use_smart_typing_clamp = false;
    let mut field = NumericField::new("Strict", controller);
    field.controller_mut().set_value(20);

    field.handle_key(key(KeyCode::Enter));

    // Backspace leaves "2"; the hard clamp snaps the display to the bound.
    field.handle_key(key(KeyCode::Backspace));
    assert_eq!(field.text(), "10");
    assert_eq!(field.value(), 10);

    // Appending a digit overshoots ("104") and snaps to the other bound.
    type_text(&mut field, "4");
    assert_eq!(field.text(), "50");
    assert_eq!(field.value(), 50);
}
