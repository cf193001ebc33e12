//! Button-alert dialog state.

use crate::actions::{ActionSpec, ButtonRole};
use crate::dispatch::ActionCallback;

/// Dialog content for the button variants (single- and multi-button).
pub(crate) struct ButtonsDialog {
    pub(crate) title: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) actions: Vec<ActionSpec>,
    pub(crate) selected: usize,
    pub(crate) on_action: Option<ActionCallback>,
}

impl ButtonsDialog {
    pub(crate) fn new(
        title: Option<String>,
        message: Option<String>,
        actions: Vec<ActionSpec>,
        on_action: ActionCallback,
    ) -> Self {
        Self {
            title,
            message,
            actions,
            selected: 0,
            on_action: Some(on_action),
        }
    }

    pub(crate) fn select_next(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + 1) % self.actions.len();
        }
    }

    pub(crate) fn select_prev(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + self.actions.len() - 1) % self.actions.len();
        }
    }

    /// Position of the cancel-role action, if one exists.
    pub(crate) fn cancel_position(&self) -> Option<usize> {
        self.actions
            .iter()
            .position(|action| action.role == ButtonRole::Cancel)
    }
}
