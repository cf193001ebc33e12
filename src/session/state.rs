//! Lifecycle state for the dialog session.

use crate::mvi::UiState;

/// Which dialog variant the session is showing (or preparing to show).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// One or more action buttons (covers the single-button convenience).
    Buttons,
    /// Title/message only, no interactive controls.
    Buttonless,
    /// Indeterminate activity spinner.
    Activity,
    /// Determinate progress bar with optional status label.
    Progress,
    /// One or more text-input fields with Done/Cancel.
    TextFields,
    /// Image view plus action buttons.
    Image,
}

/// State of the dialog session.
///
/// At most one dialog exists at a time; these states track it from
/// construction through visibility to teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogLifecycle {
    /// No dialog exists.
    #[default]
    Closed,

    /// Dialog object is built but not yet attached to the host surface.
    /// Text-field variants park here until the caller proceeds.
    Opening {
        /// Variant being opened.
        kind: DialogKind,
    },

    /// Dialog is visible on the host surface.
    Open {
        /// Variant on display.
        kind: DialogKind,
    },

    /// Teardown in progress; control state is about to be dropped.
    Closing,
}

impl UiState for DialogLifecycle {}

impl DialogLifecycle {
    /// Check if no dialog exists.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Check if a dialog is visible on the host surface.
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Check if a dialog is built but waiting to be attached.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Opening { .. })
    }

    /// The variant currently held by the session, if any.
    pub fn kind(&self) -> Option<DialogKind> {
        match self {
            Self::Opening { kind } | Self::Open { kind } => Some(*kind),
            _ => None,
        }
    }
}
