//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

use alertkit::{DialogKind, DialogSession, HostSurface};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use std::sync::Arc;

/// What the host surface observed, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Attached(DialogKind),
    Detached,
}

/// Host surface spy recording attach/detach notifications.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().clone()
    }

    pub fn attach_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::Attached(_)))
            .count()
    }
}

impl HostSurface for RecordingSurface {
    fn dialog_attached(&mut self, kind: DialogKind) {
        self.events.lock().push(SurfaceEvent::Attached(kind));
    }

    fn dialog_detached(&mut self) {
        self.events.lock().push(SurfaceEvent::Detached);
    }
}

/// A session bound to a recording surface, plus the spy to assert on.
pub fn hosted_session() -> (DialogSession, RecordingSurface) {
    let surface = RecordingSurface::new();
    let mut session = DialogSession::new();
    session.attach_host(surface.clone());
    (session, surface)
}

/// Shared cell for capturing callback arguments.
pub type Captured<T> = Arc<Mutex<Option<T>>>;

pub fn captured<T>() -> Captured<T> {
    Arc::new(Mutex::new(None))
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn titles(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
