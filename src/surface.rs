//! The host-surface seam.
//!
//! The session never draws or owns a terminal; the enclosing screen does.
//! It implements [`HostSurface`] to hear about attach/detach, forwards key
//! events to [`crate::DialogSession::handle_key`], and calls
//! [`crate::render_alert`] from its draw closure.

use crate::session::DialogKind;

/// Attachment point for dialogs: the screen or window that displays them.
pub trait HostSurface: Send {
    /// A dialog became visible on this surface.
    fn dialog_attached(&mut self, kind: DialogKind);

    /// The visible dialog was torn down.
    fn dialog_detached(&mut self);
}

/// A host surface with no attach/detach bookkeeping.
///
/// The convenience default for applications that only need
/// [`crate::render_alert`] in their draw loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveSurface;

impl HostSurface for PassiveSurface {
    fn dialog_attached(&mut self, _kind: DialogKind) {}

    fn dialog_detached(&mut self) {}
}
