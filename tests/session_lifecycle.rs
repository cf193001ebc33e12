//! Tests for the single-active-dialog lifecycle discipline.

mod common;

use common::*;
use crossterm::event::KeyCode;

#[test]
fn opening_a_second_dialog_clears_the_first_dialogs_controls() {
    let (mut session, surface) = hosted_session();
    session.present_activity_alert(None, Some("Working...".into()), None, false, |_| {});
    assert!(session.activity_indicator().is_some());

    session.present_progress_bar_alert(
        None,
        None,
        None,
        None,
        true,
        false,
        |_| {},
        |_| {},
    );

    // The first variant's controls are gone, the second's exist.
    assert!(session.activity_indicator().is_none());
    assert!(session.progress_bar().is_some());
    assert_eq!(
        surface.events(),
        vec![
            SurfaceEvent::Attached(alertkit::DialogKind::Activity),
            SurfaceEvent::Detached,
            SurfaceEvent::Attached(alertkit::DialogKind::Progress),
        ]
    );
}

#[test]
fn replacement_does_not_fire_the_replaced_dialogs_callback() {
    let (mut session, _surface) = hosted_session();
    let tapped = captured::<usize>();
    let tapped_in = tapped.clone();
    session.present_alert(None, None, titles(&["OK"]), None, vec![], move |index| {
        *tapped_in.lock() = Some(index);
    });

    session.present_buttonless_alert(None, Some("replaced".into()), |_| {});
    assert!(tapped.lock().is_none());
}

#[test]
fn dismiss_on_closed_session_is_a_noop() {
    let (mut session, surface) = hosted_session();
    let closed = captured::<bool>();
    let closed_in = closed.clone();
    session.dismiss_alert_then(move || {
        *closed_in.lock() = Some(true);
    });

    assert!(closed.lock().is_none());
    assert!(session.lifecycle().is_closed());
    assert!(surface.events().is_empty());
}

#[test]
fn dismiss_fires_closed_callback_and_detaches() {
    let (mut session, surface) = hosted_session();
    session.present_buttonless_alert(Some("Hold on".into()), None, |_| {});
    assert!(session.lifecycle().is_visible());

    let closed = captured::<bool>();
    let closed_in = closed.clone();
    session.dismiss_alert_then(move || {
        *closed_in.lock() = Some(true);
    });

    assert_eq!(*closed.lock(), Some(true));
    assert!(session.lifecycle().is_closed());
    assert_eq!(surface.events().last(), Some(&SurfaceEvent::Detached));
}

#[test]
fn button_dialog_closes_before_the_action_handler_runs() {
    let (mut session, surface) = hosted_session();
    let detached_at_tap = captured::<bool>();
    let detached_in = detached_at_tap.clone();
    let surface_in = surface.clone();
    session.present_single_button_alert(None, None, "OK", move || {
        let detached = surface_in.events().last() == Some(&SurfaceEvent::Detached);
        *detached_in.lock() = Some(detached);
    });

    session.handle_key(press(KeyCode::Enter));
    assert_eq!(*detached_at_tap.lock(), Some(true));
    assert!(session.lifecycle().is_closed());
}

#[test]
fn action_handler_can_schedule_a_replacement_dialog() {
    let (mut session, surface) = hosted_session();
    let handle = session.handle();
    session.present_single_button_alert(None, None, "Next", move || {
        handle.present_buttonless_alert(Some("Step 2".into()), None, |_| {});
    });

    session.handle_key(press(KeyCode::Enter));
    assert!(session.lifecycle().is_closed());

    session.pump();
    assert!(session.lifecycle().is_visible());
    assert_eq!(
        surface.events().last(),
        Some(&SurfaceEvent::Attached(alertkit::DialogKind::Buttonless))
    );
}

#[test]
fn buttonless_activity_and_progress_never_close_on_keys() {
    let (mut session, _surface) = hosted_session();
    session.present_activity_alert(None, None, None, false, |_| {});

    for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char('q')] {
        assert!(!session.handle_key(press(code)));
    }
    assert!(session.lifecycle().is_visible());
    assert!(session.activity_indicator().is_some());
}

#[test]
fn spinner_advances_on_tick() {
    let (mut session, _surface) = hosted_session();
    session.present_activity_alert(None, None, None, false, |_| {});
    let first = session.activity_indicator().unwrap().frame();
    session.on_tick();
    assert_ne!(session.activity_indicator().unwrap().frame(), first);
}
