//! Tests for the progress-bar variant and its escaping updater.

mod common;

use alertkit::ProgressUpdater;
use common::*;

/// Present a progress alert and capture the updater it hands out.
fn progress_session(
    show_percentage: bool,
    show_steps: bool,
) -> (alertkit::DialogSession, ProgressUpdater) {
    let (mut session, _surface) = hosted_session();
    let updater = captured::<ProgressUpdater>();
    let updater_in = updater.clone();
    session.present_progress_bar_alert(
        Some("Exporting".into()),
        None,
        None,
        None,
        show_percentage,
        show_steps,
        move |handle| {
            *updater_in.lock() = Some(handle);
        },
        |_| {},
    );
    let updater = updater.lock().take().expect("updater not delivered");
    (session, updater)
}

#[test]
fn percentage_mode_shows_floored_percent() {
    let (mut session, updater) = progress_session(true, false);
    updater.update(25, 50);
    session.pump();
    assert_eq!(session.progress_label().unwrap().text(), "50%");

    updater.update(1, 3);
    session.pump();
    assert_eq!(session.progress_label().unwrap().text(), "33%");
}

#[test]
fn steps_mode_shows_current_over_total() {
    let (mut session, updater) = progress_session(false, true);
    updater.update(25, 50);
    session.pump();
    assert_eq!(session.progress_label().unwrap().text(), "25 / 50");
}

#[test]
fn no_status_text_when_neither_mode_requested() {
    let (mut session, updater) = progress_session(false, false);
    updater.update(25, 50);
    session.pump();
    assert!(session.progress_label().is_none());
    assert!((session.progress_bar().unwrap().ratio() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn updates_after_dismissal_are_dropped_without_crashing() {
    let (mut session, updater) = progress_session(true, false);
    session.dismiss_alert();
    assert!(session.progress_bar().is_none());

    updater.update(40, 50);
    session.pump();
    assert!(session.progress_bar().is_none());
    assert!(session.lifecycle().is_closed());
}

#[test]
fn stale_updater_cannot_touch_a_newer_dialog() {
    let (mut session, stale_updater) = progress_session(true, false);

    // Replace the dialog; the old updater's generation no longer matches.
    let fresh = captured::<ProgressUpdater>();
    let fresh_in = fresh.clone();
    session.present_progress_bar_alert(
        None,
        None,
        None,
        None,
        true,
        false,
        move |handle| {
            *fresh_in.lock() = Some(handle);
        },
        |_| {},
    );

    stale_updater.update(99, 100);
    session.pump();
    assert_eq!(session.progress_bar().unwrap().ratio(), 0.0);

    fresh.lock().take().unwrap().update(10, 100);
    session.pump();
    assert!((session.progress_bar().unwrap().ratio() - 0.1).abs() < f64::EPSILON);
}

#[test]
fn updater_works_from_another_thread() {
    let (mut session, updater) = progress_session(false, true);
    let worker = std::thread::spawn(move || {
        updater.update(3, 4);
    });
    worker.join().unwrap();
    session.pump();
    assert_eq!(session.progress_label().unwrap().text(), "3 / 4");
}
