//! Reducer for the dialog lifecycle.

use crate::mvi::Reducer;

use super::intent::DialogIntent;
use super::state::DialogLifecycle;

/// Reducer for dialog lifecycle state transitions.
pub struct LifecycleReducer;

impl Reducer for LifecycleReducer {
    type State = DialogLifecycle;
    type Intent = DialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DialogIntent::OpenRequested { kind } => DialogLifecycle::Opening { kind },

            DialogIntent::Attached => match state {
                DialogLifecycle::Opening { kind } => DialogLifecycle::Open { kind },
                other => other,
            },

            DialogIntent::Abandoned => DialogLifecycle::Closed,

            DialogIntent::CloseRequested => match state {
                DialogLifecycle::Opening { .. } | DialogLifecycle::Open { .. } => {
                    DialogLifecycle::Closing
                }
                other => other,
            },

            DialogIntent::Cleared => DialogLifecycle::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::state::DialogKind;

    #[test]
    fn open_requested_transitions_to_opening() {
        let state = LifecycleReducer::reduce(
            DialogLifecycle::Closed,
            DialogIntent::OpenRequested {
                kind: DialogKind::Activity,
            },
        );
        assert_eq!(
            state,
            DialogLifecycle::Opening {
                kind: DialogKind::Activity
            }
        );
    }

    #[test]
    fn attach_moves_opening_to_open() {
        let state = LifecycleReducer::reduce(
            DialogLifecycle::Opening {
                kind: DialogKind::Buttons,
            },
            DialogIntent::Attached,
        );
        assert_eq!(
            state,
            DialogLifecycle::Open {
                kind: DialogKind::Buttons
            }
        );
    }

    #[test]
    fn attach_is_noop_when_not_opening() {
        let state = LifecycleReducer::reduce(DialogLifecycle::Closed, DialogIntent::Attached);
        assert_eq!(state, DialogLifecycle::Closed);
    }

    #[test]
    fn abandoned_open_falls_back_to_closed() {
        let state = LifecycleReducer::reduce(
            DialogLifecycle::Opening {
                kind: DialogKind::Progress,
            },
            DialogIntent::Abandoned,
        );
        assert_eq!(state, DialogLifecycle::Closed);
    }

    #[test]
    fn close_requested_from_open_and_opening() {
        for state in [
            DialogLifecycle::Open {
                kind: DialogKind::Image,
            },
            DialogLifecycle::Opening {
                kind: DialogKind::TextFields,
            },
        ] {
            assert_eq!(
                LifecycleReducer::reduce(state, DialogIntent::CloseRequested),
                DialogLifecycle::Closing
            );
        }
    }

    #[test]
    fn close_requested_on_closed_stays_closed() {
        let state =
            LifecycleReducer::reduce(DialogLifecycle::Closed, DialogIntent::CloseRequested);
        assert_eq!(state, DialogLifecycle::Closed);
    }

    #[test]
    fn cleared_completes_teardown() {
        let state = LifecycleReducer::reduce(DialogLifecycle::Closing, DialogIntent::Cleared);
        assert_eq!(state, DialogLifecycle::Closed);
    }
}
