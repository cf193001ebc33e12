//! The dialog session: one active dialog, tracked from open to close.
//!
//! # Architecture
//!
//! The lifecycle state machine follows the MVI pattern:
//! - `state.rs` - Lifecycle state enum
//! - `intent.rs` - Lifecycle transitions
//! - `reducer.rs` - Pure state transitions
//!
//! Dialog content (the variant state and its sub-controls) is a resource
//! handle managed outside MVI, owned exclusively by the session and dropped
//! on close. The session API takes `&mut self`: all mutation is serialized on
//! the thread that owns the session. Other threads schedule work through
//! [`AlertHandle`], applied at the next [`DialogSession::pump`].

mod intent;
mod reducer;
mod state;

pub use intent::DialogIntent;
pub use reducer::LifecycleReducer;
pub use state::{DialogKind, DialogLifecycle};

use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use image::DynamicImage;
use ratatui::style::Color;

use crate::actions::{create_alert_actions, ActionSpec};
use crate::dispatch::{
    single_field_adapter, AlertCommand, AlertHandle, ClosedCallback, PresentRequest, Proceed,
    ProgressUpdater,
};
use crate::error::AlertError;
use crate::mvi::Reducer;
use crate::surface::HostSurface;
use crate::variants::{
    ActivityDialog, ActivityIndicator, ButtonsDialog, DialogContent, ImageDialog, ImageView,
    MessageDialog, ProgressBar, ProgressDialog, ProgressLabel, TextFieldHandle, TextFieldsDialog,
};

/// The one dialog the session currently owns.
struct ActiveDialog {
    generation: u64,
    content: DialogContent,
}

/// What a key press asks the session to do once the content borrow ends.
enum KeyOutcome {
    Ignored,
    Consumed,
    Activate(usize),
    Done,
    Cancel,
}

/// Tracks at most one active alert dialog and its sub-controls.
///
/// Construct one per hosting screen and bind the screen with
/// [`attach_host`](Self::attach_host) before presenting. Presentation never
/// returns a `Result`: failures are reported through the variant's own
/// callback, matching the report-status-don't-throw policy.
pub struct DialogSession {
    host: Option<Box<dyn HostSurface>>,
    lifecycle: DialogLifecycle,
    active: Option<ActiveDialog>,
    generation: u64,
    commands: Receiver<AlertCommand>,
    command_tx: Sender<AlertCommand>,
}

impl Default for DialogSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogSession {
    pub fn new() -> Self {
        let (command_tx, commands) = mpsc::channel();
        Self {
            host: None,
            lifecycle: DialogLifecycle::default(),
            active: None,
            generation: 0,
            commands,
            command_tx,
        }
    }

    /// Bind the hosting surface. Must precede any presentation call.
    pub fn attach_host(&mut self, surface: impl HostSurface + 'static) {
        self.host = Some(Box::new(surface));
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    /// A `Send` handle for scheduling presentations from other threads.
    pub fn handle(&self) -> AlertHandle {
        AlertHandle::new(self.command_tx.clone())
    }

    pub fn lifecycle(&self) -> DialogLifecycle {
        self.lifecycle
    }

    // -- Sub-control accessors -----------------------------------------------
    //
    // Each returns `Some` only while the corresponding variant is active;
    // closing the dialog (or opening a different variant) drops the state
    // behind all of them.

    pub fn activity_indicator(&self) -> Option<&ActivityIndicator> {
        match &self.active.as_ref()?.content {
            DialogContent::Activity(dialog) => Some(&dialog.indicator),
            _ => None,
        }
    }

    pub fn progress_bar(&self) -> Option<&ProgressBar> {
        match &self.active.as_ref()?.content {
            DialogContent::Progress(dialog) => Some(&dialog.bar),
            _ => None,
        }
    }

    pub fn progress_label(&self) -> Option<&ProgressLabel> {
        match &self.active.as_ref()?.content {
            DialogContent::Progress(dialog) => dialog.label.as_ref(),
            _ => None,
        }
    }

    pub fn image_view(&self) -> Option<&ImageView> {
        match &self.active.as_ref()?.content {
            DialogContent::Image(dialog) => Some(&dialog.view),
            _ => None,
        }
    }

    pub fn text_fields(&self) -> Option<&[TextFieldHandle]> {
        match &self.active.as_ref()?.content {
            DialogContent::TextFields(dialog) => Some(&dialog.fields),
            _ => None,
        }
    }

    /// Action row of the active button-bearing dialog.
    pub fn actions(&self) -> Option<&[ActionSpec]> {
        match &self.active.as_ref()?.content {
            DialogContent::Buttons(dialog) => Some(&dialog.actions),
            DialogContent::Image(dialog) => Some(&dialog.buttons.actions),
            _ => None,
        }
    }

    /// Index of the highlighted action, for button-bearing dialogs.
    pub fn selected_action(&self) -> Option<usize> {
        match &self.active.as_ref()?.content {
            DialogContent::Buttons(dialog) => Some(dialog.selected),
            DialogContent::Image(dialog) => Some(dialog.buttons.selected),
            _ => None,
        }
    }

    pub(crate) fn active_content(&self) -> Option<&DialogContent> {
        self.active.as_ref().map(|active| &active.content)
    }

    // -- Presentation --------------------------------------------------------

    pub fn present_single_button_alert(
        &mut self,
        title: Option<String>,
        message: Option<String>,
        button_title: impl Into<String>,
        on_tap: impl FnOnce() + Send + 'static,
    ) {
        self.execute_present(PresentRequest::SingleButton {
            title,
            message,
            button_title: button_title.into(),
            on_tap: Box::new(on_tap),
        });
    }

    pub fn present_alert(
        &mut self,
        title: Option<String>,
        message: Option<String>,
        button_titles: Vec<String>,
        cancel_index: Option<usize>,
        destructive_indices: Vec<usize>,
        on_action: impl FnOnce(usize) + Send + 'static,
    ) {
        self.execute_present(PresentRequest::Buttons {
            title,
            message,
            button_titles,
            cancel_index,
            destructive_indices,
            on_action: Box::new(on_action),
        });
    }

    pub fn present_buttonless_alert(
        &mut self,
        title: Option<String>,
        message: Option<String>,
        on_presented: impl FnOnce(bool) + Send + 'static,
    ) {
        self.execute_present(PresentRequest::Buttonless {
            title,
            message,
            on_presented: Box::new(on_presented),
        });
    }

    pub fn present_activity_alert(
        &mut self,
        title: Option<String>,
        message: Option<String>,
        color: Option<Color>,
        large: bool,
        on_presented: impl FnOnce(bool) + Send + 'static,
    ) {
        self.execute_present(PresentRequest::Activity {
            title,
            message,
            color,
            large,
            on_presented: Box::new(on_presented),
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn present_progress_bar_alert(
        &mut self,
        title: Option<String>,
        message: Option<String>,
        progress_color: Option<Color>,
        track_color: Option<Color>,
        show_percentage: bool,
        show_steps: bool,
        on_update_ready: impl FnOnce(ProgressUpdater) + Send + 'static,
        on_presented: impl FnOnce(bool) + Send + 'static,
    ) {
        self.execute_present(PresentRequest::Progress {
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
        &mut self,
        title: Option<String>,
        message: Option<String>,
        done_title: Option<String>,
        cancel_title: Option<String>,
        configure: impl FnOnce(TextFieldHandle, Proceed) + Send + 'static,
        on_done: impl FnOnce(Option<String>) + Send + 'static,
    ) {
        self.execute_present(PresentRequest::SingleTextField {
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
        &mut self,
        title: Option<String>,
        message: Option<String>,
        done_title: Option<String>,
        cancel_title: Option<String>,
        count: usize,
        configure: impl FnOnce(Vec<TextFieldHandle>, Proceed) + Send + 'static,
        on_done: impl FnOnce(Option<Vec<String>>) + Send + 'static,
    ) {
        self.execute_present(PresentRequest::MultiTextFields {
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
        &mut self,
        title: Option<String>,
        message: Option<String>,
        button_titles: Vec<String>,
        cancel_index: Option<usize>,
        destructive_indices: Vec<usize>,
        image: DynamicImage,
        on_action: impl FnOnce(usize) + Send + 'static,
    ) {
        self.execute_present(PresentRequest::Image {
            title,
            message,
            button_titles,
            cancel_index,
            destructive_indices,
            image,
            on_action: Box::new(on_action),
        });
    }

    /// Close the current dialog, dropping all sub-control state.
    ///
    /// No-op when nothing is open.
    pub fn dismiss_alert(&mut self) {
        self.dismiss_internal(None);
    }

    /// Like [`dismiss_alert`](Self::dismiss_alert), invoking `on_closed` once
    /// teardown completes. The callback does not fire when nothing was open.
    pub fn dismiss_alert_then(&mut self, on_closed: impl FnOnce() + Send + 'static) {
        self.dismiss_internal(Some(Box::new(on_closed)));
    }

    // -- Event plumbing ------------------------------------------------------

    /// Route a key event to the active dialog. Returns whether the key was
    /// consumed.
    ///
    /// Button-bearing dialogs self-close on activation; buttonless, activity
    /// and progress dialogs never consume keys and never auto-close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press || !self.lifecycle.is_visible() {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let outcome = match &mut active.content {
            DialogContent::Buttons(dialog) => Self::button_row_outcome(dialog, key.code),
            DialogContent::Image(dialog) => Self::button_row_outcome(&mut dialog.buttons, key.code),
            DialogContent::Message(_)
            | DialogContent::Activity(_)
            | DialogContent::Progress(_) => KeyOutcome::Ignored,
            DialogContent::TextFields(dialog) => match key.code {
                KeyCode::Enter => KeyOutcome::Done,
                KeyCode::Esc => KeyOutcome::Cancel,
                KeyCode::Tab | KeyCode::Down => {
                    dialog.focus_next();
                    KeyOutcome::Consumed
                }
                KeyCode::BackTab | KeyCode::Up => {
                    dialog.focus_prev();
                    KeyOutcome::Consumed
                }
                _ => {
                    if dialog.handle_edit_key(key) {
                        KeyOutcome::Consumed
                    } else {
                        KeyOutcome::Ignored
                    }
                }
            },
        };
        match outcome {
            KeyOutcome::Ignored => false,
            KeyOutcome::Consumed => true,
            KeyOutcome::Activate(index) => {
                self.activate_action(index);
                true
            }
            KeyOutcome::Done => {
                self.finish_text_fields(true);
                true
            }
            KeyOutcome::Cancel => {
                self.finish_text_fields(false);
                true
            }
        }
    }

    fn button_row_outcome(dialog: &mut ButtonsDialog, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => {
                dialog.select_prev();
                KeyOutcome::Consumed
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
                dialog.select_next();
                KeyOutcome::Consumed
            }
            KeyCode::Enter => KeyOutcome::Activate(dialog.selected),
            KeyCode::Esc => match dialog.cancel_position() {
                Some(index) => KeyOutcome::Activate(index),
                None => KeyOutcome::Ignored,
            },
            _ => KeyOutcome::Ignored,
        }
    }

    /// Advance animations and apply scheduled commands. Call once per UI
    /// tick.
    pub fn on_tick(&mut self) {
        if let Some(active) = self.active.as_mut() {
            if let DialogContent::Activity(dialog) = &mut active.content {
                dialog.indicator.advance();
            }
        }
        self.pump();
    }

    /// Apply every command scheduled through [`AlertHandle`],
    /// [`ProgressUpdater`] or [`Proceed`] since the last pump.
    pub fn pump(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            self.execute(command);
        }
    }

    // -- Internals -----------------------------------------------------------

    fn dispatch(&mut self, intent: DialogIntent) {
        self.lifecycle = LifecycleReducer::reduce(self.lifecycle, intent);
    }

    fn execute(&mut self, command: AlertCommand) {
        match command {
            AlertCommand::Present(request) => self.execute_present(*request),
            AlertCommand::Dismiss { on_closed } => self.dismiss_internal(on_closed),
            AlertCommand::UpdateProgress {
                generation,
                current,
                total,
            } => self.update_progress(generation, current, total),
            AlertCommand::Proceed { generation } => self.proceed_text_fields(generation),
        }
    }

    fn execute_present(&mut self, request: PresentRequest) {
        // Replacing a dialog discards the previous one's state without
        // firing its dismissal callback.
        self.clear_active();
        self.dispatch(DialogIntent::OpenRequested {
            kind: request.kind(),
        });
        if self.host.is_none() {
            self.dispatch(DialogIntent::Abandoned);
            tracing::warn!(error = %AlertError::NoHost, "alert presentation dropped");
            request.report_failure();
            return;
        }
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        match request {
            PresentRequest::SingleButton {
                title,
                message,
                button_title,
                on_tap,
            } => {
                let actions = create_alert_actions(&[button_title], None, &[]);
                let dialog =
                    ButtonsDialog::new(title, message, actions, Box::new(move |_| on_tap()));
                self.install(generation, DialogContent::Buttons(dialog));
            }

            PresentRequest::Buttons {
                title,
                message,
                button_titles,
                cancel_index,
                destructive_indices,
                on_action,
            } => {
                let actions =
                    create_alert_actions(&button_titles, cancel_index, &destructive_indices);
                let dialog = ButtonsDialog::new(title, message, actions, on_action);
                self.install(generation, DialogContent::Buttons(dialog));
            }

            PresentRequest::Buttonless {
                title,
                message,
                on_presented,
            } => {
                self.install(
                    generation,
                    DialogContent::Message(MessageDialog { title, message }),
                );
                on_presented(true);
            }

            PresentRequest::Activity {
                title,
                message,
                color,
                large,
                on_presented,
            } => {
                let dialog = ActivityDialog {
                    title,
                    message,
                    indicator: ActivityIndicator::new(color, large),
                };
                self.install(generation, DialogContent::Activity(dialog));
                on_presented(true);
            }

            PresentRequest::Progress {
                title,
                message,
                progress_color,
                track_color,
                show_percentage,
                show_steps,
                on_update_ready,
                on_presented,
            } => {
                let dialog = ProgressDialog::new(
                    title,
                    message,
                    progress_color,
                    track_color,
                    show_percentage,
                    show_steps,
                );
                self.install(generation, DialogContent::Progress(dialog));
                on_update_ready(ProgressUpdater::new(self.command_tx.clone(), generation));
                on_presented(true);
            }

            PresentRequest::SingleTextField {
                title,
                message,
                done_title,
                cancel_title,
                configure,
                on_done,
            } => {
                let dialog =
                    TextFieldsDialog::new(title, message, done_title, cancel_title, 1, on_done);
                let field = dialog.fields[0].clone();
                self.stage(generation, DialogContent::TextFields(dialog));
                configure(field, Proceed::new(self.command_tx.clone(), generation));
            }

            PresentRequest::MultiTextFields {
                title,
                message,
                done_title,
                cancel_title,
                count,
                configure,
                on_done,
            } => {
                let dialog = TextFieldsDialog::new(
                    title,
                    message,
                    done_title,
                    cancel_title,
                    count,
                    on_done,
                );
                let fields = dialog.fields.clone();
                self.stage(generation, DialogContent::TextFields(dialog));
                configure(fields, Proceed::new(self.command_tx.clone(), generation));
            }

            PresentRequest::Image {
                title,
                message,
                button_titles,
                cancel_index,
                destructive_indices,
                image,
                on_action,
            } => {
                let actions =
                    create_alert_actions(&button_titles, cancel_index, &destructive_indices);
                let buttons = ButtonsDialog::new(title, message, actions, on_action);
                let view = ImageView::from_image(image);
                self.install(generation, DialogContent::Image(ImageDialog { buttons, view }));
            }
        }
    }

    /// Store the built dialog and attach it to the host surface.
    fn install(&mut self, generation: u64, content: DialogContent) {
        let kind = content.kind();
        self.active = Some(ActiveDialog {
            generation,
            content,
        });
        if let Some(host) = self.host.as_mut() {
            host.dialog_attached(kind);
        }
        self.dispatch(DialogIntent::Attached);
        tracing::debug!(?kind, "alert attached");
    }

    /// Store the built dialog without attaching; completes on proceed.
    fn stage(&mut self, generation: u64, content: DialogContent) {
        self.active = Some(ActiveDialog {
            generation,
            content,
        });
    }

    fn proceed_text_fields(&mut self, generation: u64) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        // A proceed from an already-replaced dialog must not attach the new
        // one; the generation stamp catches it.
        if active.generation != generation || !self.lifecycle.is_pending() {
            return;
        }
        let kind = active.content.kind();
        if let Some(host) = self.host.as_mut() {
            host.dialog_attached(kind);
        }
        self.dispatch(DialogIntent::Attached);
        tracing::debug!(?kind, "alert attached");
    }

    fn update_progress(&mut self, generation: u64, current: u64, total: u64) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.generation != generation {
            return;
        }
        if let DialogContent::Progress(dialog) = &mut active.content {
            dialog.update(current, total);
        }
    }

    fn dismiss_internal(&mut self, on_closed: Option<ClosedCallback>) {
        if self.active.is_none() {
            tracing::debug!("dismiss requested with no active dialog");
            return;
        }
        self.clear_active();
        if let Some(on_closed) = on_closed {
            on_closed();
        }
    }

    /// Tear down the active dialog, dropping every sub-control reference.
    fn clear_active(&mut self) {
        if self.active.take().is_some() {
            let was_visible = self.lifecycle.is_visible();
            self.dispatch(DialogIntent::CloseRequested);
            if was_visible {
                if let Some(host) = self.host.as_mut() {
                    host.dialog_detached();
                }
            }
            self.dispatch(DialogIntent::Cleared);
        }
    }

    fn activate_action(&mut self, index: usize) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let callback = match &mut active.content {
            DialogContent::Buttons(dialog) => dialog.on_action.take(),
            DialogContent::Image(dialog) => dialog.buttons.on_action.take(),
            _ => return,
        };
        // The dialog is fully closed before the caller's handler runs, so
        // the handler may schedule a replacement immediately.
        self.clear_active();
        if let Some(callback) = callback {
            callback(index);
        }
    }

    fn finish_text_fields(&mut self, done: bool) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let DialogContent::TextFields(dialog) = &mut active.content else {
            return;
        };
        let values = if done {
            // An unexpectedly empty field collection feeds an absent result
            // onward instead of raising.
            Some(dialog.values()).filter(|fields| !fields.is_empty())
        } else {
            None
        };
        let callback = dialog.on_done.take();
        self.clear_active();
        if let Some(callback) = callback {
            callback(values);
        }
    }
}
