//! Tests for button-role resolution and action callback indexing.

mod common;

use alertkit::{create_alert_actions, ButtonRole};
use common::*;
use crossterm::event::KeyCode;

#[test]
fn produces_one_entry_per_title_in_input_order() {
    let actions = create_alert_actions(&titles(&["Save", "Discard", "Cancel"]), Some(2), &[1]);
    assert_eq!(actions.len(), 3);
    for (index, title) in ["Save", "Discard", "Cancel"].iter().enumerate() {
        assert_eq!(actions[index].title, *title);
    }
}

#[test]
fn cancel_wins_when_index_is_both_cancel_and_destructive() {
    let actions = create_alert_actions(&titles(&["Delete", "Keep"]), Some(0), &[0, 1]);
    assert_eq!(actions[0].role, ButtonRole::Cancel);
    assert_eq!(actions[1].role, ButtonRole::Destructive);
}

#[test]
fn destructive_only_where_listed_and_not_cancel() {
    let actions = create_alert_actions(&titles(&["A", "B", "C", "D"]), Some(3), &[0, 3]);
    assert_eq!(actions[0].role, ButtonRole::Destructive);
    assert_eq!(actions[1].role, ButtonRole::Default);
    assert_eq!(actions[2].role, ButtonRole::Default);
    assert_eq!(actions[3].role, ButtonRole::Cancel);
}

#[test]
fn activation_reports_original_index_regardless_of_role() {
    let (mut session, _surface) = hosted_session();
    let tapped = captured::<usize>();
    let tapped_in = tapped.clone();
    session.present_alert(
        Some("Remove item".into()),
        None,
        titles(&["Remove", "Keep", "Cancel"]),
        Some(2),
        vec![0],
        move |index| {
            *tapped_in.lock() = Some(index);
        },
    );

    // Selection starts on the destructive first entry; activate it.
    session.handle_key(press(KeyCode::Enter));
    assert_eq!(*tapped.lock(), Some(0));
}

#[test]
fn escape_activates_the_cancel_action() {
    let (mut session, _surface) = hosted_session();
    let tapped = captured::<usize>();
    let tapped_in = tapped.clone();
    session.present_alert(
        None,
        None,
        titles(&["OK", "Cancel"]),
        Some(1),
        vec![],
        move |index| {
            *tapped_in.lock() = Some(index);
        },
    );

    session.handle_key(press(KeyCode::Esc));
    assert_eq!(*tapped.lock(), Some(1));
    assert!(session.lifecycle().is_closed());
}

#[test]
fn escape_ignored_without_a_cancel_action() {
    let (mut session, _surface) = hosted_session();
    let tapped = captured::<usize>();
    let tapped_in = tapped.clone();
    session.present_alert(
        None,
        None,
        titles(&["OK", "More"]),
        None,
        vec![],
        move |index| {
            *tapped_in.lock() = Some(index);
        },
    );

    assert!(!session.handle_key(press(KeyCode::Esc)));
    assert!(tapped.lock().is_none());
    assert!(session.lifecycle().is_visible());
}

#[test]
fn arrow_keys_move_selection_with_wraparound() {
    let (mut session, _surface) = hosted_session();
    session.present_alert(
        None,
        None,
        titles(&["A", "B", "C"]),
        None,
        vec![],
        |_| {},
    );

    assert_eq!(session.selected_action(), Some(0));
    session.handle_key(press(KeyCode::Left));
    assert_eq!(session.selected_action(), Some(2));
    session.handle_key(press(KeyCode::Right));
    session.handle_key(press(KeyCode::Right));
    assert_eq!(session.selected_action(), Some(1));
}
