//! Per-variant dialog content.
//!
//! Each variant owns the sub-control state the session exposes while that
//! variant is active. Dropping the content drops every sub-control reference
//! with it, which is how the "no leaked references after close" invariant is
//! enforced.

mod activity;
mod buttons;
mod image;
mod message;
mod progress;
mod text_fields;

pub use activity::ActivityIndicator;
pub use image::ImageView;
pub use progress::{ProgressBar, ProgressLabel, ProgressTextMode};
pub use text_fields::{TextFieldHandle, TextFieldState};

pub(crate) use activity::ActivityDialog;
pub(crate) use buttons::ButtonsDialog;
pub(crate) use image::ImageDialog;
pub(crate) use message::MessageDialog;
pub(crate) use progress::ProgressDialog;
pub(crate) use text_fields::TextFieldsDialog;

use crate::session::DialogKind;

/// Content of the one active dialog.
pub(crate) enum DialogContent {
    Buttons(ButtonsDialog),
    Message(MessageDialog),
    Activity(ActivityDialog),
    Progress(ProgressDialog),
    TextFields(TextFieldsDialog),
    Image(ImageDialog),
}

impl DialogContent {
    pub(crate) fn kind(&self) -> DialogKind {
        match self {
            Self::Buttons(_) => DialogKind::Buttons,
            Self::Message(_) => DialogKind::Buttonless,
            Self::Activity(_) => DialogKind::Activity,
            Self::Progress(_) => DialogKind::Progress,
            Self::TextFields(_) => DialogKind::TextFields,
            Self::Image(_) => DialogKind::Image,
        }
    }
}
