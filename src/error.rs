//! Error types for alert presentation.
//!
//! Presentation failures are never propagated as `Result` values to the
//! caller; they are reported through the variant's own callback with a
//! failure signal, plus a diagnostic log line.

use thiserror::Error;

/// Errors that can occur when presenting an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlertError {
    /// No host surface was attached when a presentation was requested.
    #[error("no host surface attached to the dialog session")]
    NoHost,
}
