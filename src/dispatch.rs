//! Cross-thread scheduling for the dialog session.
//!
//! The session owns the receiving end of a command channel and drains it
//! cooperatively on its owning thread ([`crate::DialogSession::pump`]).
//! Everything that can escape that thread ([`AlertHandle`],
//! [`ProgressUpdater`], [`Proceed`]) holds a sender and enqueues instead of
//! mutating. Escaping handles are stamped with the generation of the dialog
//! they belong to so commands from a dialog that has since been dismissed are
//! ignored rather than applied to a newer one.

use std::sync::mpsc::Sender;

use image::DynamicImage;
use ratatui::style::Color;

use crate::session::DialogKind;
use crate::variants::TextFieldHandle;

/// Callback fired once presentation succeeds or fails.
pub type PresentedCallback = Box<dyn FnOnce(bool) + Send>;
/// Callback fired with the original index of the activated button.
pub type ActionCallback = Box<dyn FnOnce(usize) + Send>;
/// Callback fired once an explicit dismissal completes.
pub type ClosedCallback = Box<dyn FnOnce() + Send>;
/// Callback fired with the entered field values, or `None` on cancel.
pub type DoneCallback = Box<dyn FnOnce(Option<Vec<String>>) + Send>;
/// Callback handed the progress updater once the dialog is visible.
pub type UpdateReadyCallback = Box<dyn FnOnce(ProgressUpdater) + Send>;
/// Pre-presentation configuration hook for the single-field variant.
pub type ConfigureFieldCallback = Box<dyn FnOnce(TextFieldHandle, Proceed) + Send>;
/// Pre-presentation configuration hook for the multi-field variant.
pub type ConfigureFieldsCallback = Box<dyn FnOnce(Vec<TextFieldHandle>, Proceed) + Send>;

/// A fully described presentation, ready to execute on the session thread.
pub(crate) enum PresentRequest {
    SingleButton {
        title: Option<String>,
        message: Option<String>,
        button_title: String,
        on_tap: Box<dyn FnOnce() + Send>,
    },
    Buttons {
        title: Option<String>,
        message: Option<String>,
        button_titles: Vec<String>,
        cancel_index: Option<usize>,
        destructive_indices: Vec<usize>,
        on_action: ActionCallback,
    },
    Buttonless {
        title: Option<String>,
        message: Option<String>,
        on_presented: PresentedCallback,
    },
    Activity {
        title: Option<String>,
        message: Option<String>,
        color: Option<Color>,
        large: bool,
        on_presented: PresentedCallback,
    },
    Progress {
        title: Option<String>,
        message: Option<String>,
        progress_color: Option<Color>,
        track_color: Option<Color>,
        show_percentage: bool,
        show_steps: bool,
        on_update_ready: UpdateReadyCallback,
        on_presented: PresentedCallback,
    },
    SingleTextField {
        title: Option<String>,
        message: Option<String>,
        done_title: Option<String>,
        cancel_title: Option<String>,
        configure: ConfigureFieldCallback,
        on_done: DoneCallback,
    },
    MultiTextFields {
        title: Option<String>,
        message: Option<String>,
        done_title: Option<String>,
        cancel_title: Option<String>,
        count: usize,
        configure: ConfigureFieldsCallback,
        on_done: DoneCallback,
    },
    Image {
        title: Option<String>,
        message: Option<String>,
        button_titles: Vec<String>,
        cancel_index: Option<usize>,
        destructive_indices: Vec<usize>,
        image: DynamicImage,
        on_action: ActionCallback,
    },
}

impl PresentRequest {
    /// The variant this request opens.
    pub(crate) fn kind(&self) -> DialogKind {
        match self {
            Self::SingleButton { .. } | Self::Buttons { .. } => DialogKind::Buttons,
            Self::Buttonless { .. } => DialogKind::Buttonless,
            Self::Activity { .. } => DialogKind::Activity,
            Self::Progress { .. } => DialogKind::Progress,
            Self::SingleTextField { .. } | Self::MultiTextFields { .. } => DialogKind::TextFields,
            Self::Image { .. } => DialogKind::Image,
        }
    }

    /// Report a presentation failure through the variant's own feedback
    /// channel: success-flag variants get `false`, text-field variants get an
    /// absent result, pure button variants have no channel to signal.
    pub(crate) fn report_failure(self) {
        match self {
            Self::SingleButton { .. } | Self::Buttons { .. } | Self::Image { .. } => {}
            Self::Buttonless { on_presented, .. }
            | Self::Activity { on_presented, .. }
            | Self::Progress { on_presented, .. } => on_presented(false),
            Self::SingleTextField { on_done, .. } | Self::MultiTextFields { on_done, .. } => {
                on_done(None)
            }
        }
    }
}

/// Commands applied by the session at the next pump.
pub(crate) enum AlertCommand {
    Present(Box<PresentRequest>),
    Dismiss {
        on_closed: Option<ClosedCallback>,
    },
    UpdateProgress {
        generation: u64,
        current: u64,
        total: u64,
    },
    Proceed {
        generation: u64,
    },
}

/// Cheap, clonable scheduler for presenting alerts from any thread.
///
/// Every method enqueues a command and returns immediately; the operation
/// runs, and its callbacks fire, on the session's owning thread at the next
/// [`crate::DialogSession::pump`]. Sends after the session is gone are
/// silently dropped.
#[derive(Clone)]
pub struct AlertHandle {
    tx: Sender<AlertCommand>,
}

impl AlertHandle {
    pub(crate) fn new(tx: Sender<AlertCommand>) -> Self {
        Self { tx }
    }

    fn submit(&self, request: PresentRequest) {
        if self
            .tx
            .send(AlertCommand::Present(Box::new(request)))
            .is_err()
        {
            tracing::debug!("alert command dropped (session gone)");
        }
    }

    pub fn present_single_button_alert(
        &self,
        title: Option<String>,
        message: Option<String>,
        button_title: impl Into<String>,
        on_tap: impl FnOnce() + Send + 'static,
    ) {
        self.submit(PresentRequest::SingleButton {
            title,
            message,
            button_title: button_title.into(),
            on_tap: Box::new(on_tap),
        });
    }

    pub fn present_alert(
        &self,
        title: Option<String>,
        message: Option<String>,
        button_titles: Vec<String>,
        cancel_index: Option<usize>,
        destructive_indices: Vec<usize>,
        on_action: impl FnOnce(usize) + Send + 'static,
    ) {
        self.submit(PresentRequest::Buttons {
            title,
            message,
            button_titles,
            cancel_index,
            destructive_indices,
            on_action: Box::new(on_action),
        });
    }

    pub fn present_buttonless_alert(
        &self,
        title: Option<String>,
        message: Option<String>,
        on_presented: impl FnOnce(bool) + Send + 'static,
    ) {
        self.submit(PresentRequest::Buttonless {
            title,
            message,
            on_presented: Box::new(on_presented),
        });
    }

    pub fn present_activity_alert(
        &self,
        title: Option<String>,
        message: Option<String>,
        color: Option<Color>,
        large: bool,
        on_presented: impl FnOnce(bool) + Send + 'static,
    ) {
        self.submit(PresentRequest::Activity {
            title,
            message,
            color,
            large,
            on_presented: Box::new(on_presented),
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn present_progress_bar_alert(
        &self,
        title: Option<String>,
        message: Option<String>,
        progress_color: Option<Color>,
        track_color: Option<Color>,
        show_percentage: bool,
        show_steps: bool,
        on_update_ready: impl FnOnce(ProgressUpdater) + Send + 'static,
        on_presented: impl FnOnce(bool) + Send + 'static,
    ) {
        self.submit(PresentRequest::Progress {
            title,
            message,
            progress_color,
            track_color,
            show_percentage,
            show_steps,
            on_update_ready: Box::new(on_update_ready),
            on_presented: Box::new(on_presented),
        });
    }

    pub fn present_single_text_field_alert(
        &self,
        title: Option<String>,
        message: Option<String>,
        done_title: Option<String>,
        cancel_title: Option<String>,
        configure: impl FnOnce(TextFieldHandle, Proceed) + Send + 'static,
        on_done: impl FnOnce(Option<String>) + Send + 'static,
    ) {
        self.submit(PresentRequest::SingleTextField {
            title,
            message,
            done_title,
            cancel_title,
            configure: Box::new(configure),
            on_done: single_field_adapter(on_done),
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn present_multiple_text_fields_alert(
        &self,
        title: Option<String>,
        message: Option<String>,
        done_title: Option<String>,
        cancel_title: Option<String>,
        count: usize,
        configure: impl FnOnce(Vec<TextFieldHandle>, Proceed) + Send + 'static,
        on_done: impl FnOnce(Option<Vec<String>>) + Send + 'static,
    ) {
        self.submit(PresentRequest::MultiTextFields {
            title,
            message,
            done_title,
            cancel_title,
            count,
            configure: Box::new(configure),
            on_done: Box::new(on_done),
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn present_image_view_alert(
        &self,
        title: Option<String>,
        message: Option<String>,
        button_titles: Vec<String>,
        cancel_index: Option<usize>,
        destructive_indices: Vec<usize>,
        image: DynamicImage,
        on_action: impl FnOnce(usize) + Send + 'static,
    ) {
        self.submit(PresentRequest::Image {
            title,
            message,
            button_titles,
            cancel_index,
            destructive_indices,
            image,
            on_action: Box::new(on_action),
        });
    }

    pub fn dismiss_alert(&self) {
        let _ = self.tx.send(AlertCommand::Dismiss { on_closed: None });
    }

    pub fn dismiss_alert_then(&self, on_closed: impl FnOnce() + Send + 'static) {
        let _ = self.tx.send(AlertCommand::Dismiss {
            on_closed: Some(Box::new(on_closed)),
        });
    }
}

/// Adapt a single-field completion callback to the shared `Vec` shape. An
/// unexpectedly empty collection feeds an absent value onward.
pub(crate) fn single_field_adapter(
    on_done: impl FnOnce(Option<String>) + Send + 'static,
) -> DoneCallback {
    Box::new(move |values: Option<Vec<String>>| {
        on_done(values.and_then(|fields| fields.into_iter().next()))
    })
}

/// Escaping update function for the progress variant.
///
/// Handed to the caller once presentation begins. Safe to call from any
/// thread and after the dialog has closed: stale updates are dropped at the
/// session, never applied to a newer dialog.
#[derive(Clone)]
pub struct ProgressUpdater {
    tx: Sender<AlertCommand>,
    generation: u64,
}

impl ProgressUpdater {
    pub(crate) fn new(tx: Sender<AlertCommand>, generation: u64) -> Self {
        Self { tx, generation }
    }

    /// Schedule a progress update. `total == 0` is a caller contract
    /// violation; the session clamps rather than crashes.
    pub fn update(&self, current: u64, total: u64) {
        let _ = self.tx.send(AlertCommand::UpdateProgress {
            generation: self.generation,
            current,
            total,
        });
    }
}

/// Continuation completing the text-field presentation hand-shake.
///
/// The dialog is built and configurable but stays invisible until this is
/// invoked; if it is dropped without being invoked, the dialog never appears.
pub struct Proceed {
    tx: Sender<AlertCommand>,
    generation: u64,
}

impl Proceed {
    pub(crate) fn new(tx: Sender<AlertCommand>, generation: u64) -> Self {
        Self { tx, generation }
    }

    /// Attach the configured dialog to the host surface.
    pub fn proceed(self) {
        let _ = self.tx.send(AlertCommand::Proceed {
            generation: self.generation,
        });
    }
}
