//! One-call modal alert dialogs for ratatui applications.
//!
//! `alertkit` wraps the common alert shapes (single button, multi-button,
//! buttonless, activity spinner, progress bar, single/multi text field,
//! image view) behind a [`DialogSession`] that tracks at most one active
//! dialog at a time and reports every outcome through callbacks.
//!
//! # Usage
//!
//! Construct a session, bind the hosting screen, and present:
//!
//! ```no_run
//! use alertkit::{DialogSession, PassiveSurface};
//!
//! let mut session = DialogSession::new();
//! session.attach_host(PassiveSurface);
//! session.present_single_button_alert(
//!     Some("Saved".into()),
//!     Some("Your changes were written to disk.".into()),
//!     "OK",
//!     || {},
//! );
//! ```
//!
//! The embedding application forwards key events to
//! [`DialogSession::handle_key`], calls [`DialogSession::on_tick`] from its
//! tick handler, and draws with [`render_alert`] at the end of its render
//! closure. Other threads present through [`AlertHandle`], whose commands
//! apply at the next tick.

pub mod actions;
pub mod dispatch;
pub mod error;
pub mod mvi;
pub mod render;
pub mod session;
pub mod surface;
pub mod theme;
pub mod variants;

pub use actions::{create_alert_actions, ActionSpec, ButtonRole};
pub use dispatch::{AlertHandle, Proceed, ProgressUpdater};
pub use error::AlertError;
pub use render::render_alert;
pub use session::{DialogKind, DialogLifecycle, DialogSession};
pub use surface::{HostSurface, PassiveSurface};
pub use variants::{
    ActivityIndicator, ImageView, ProgressBar, ProgressLabel, ProgressTextMode, TextFieldHandle,
    TextFieldState,
};
