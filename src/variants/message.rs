//! Buttonless message dialog state.

/// Dialog content for the buttonless variant: title and message only.
///
/// Carries no interactive controls and never self-closes; only an explicit
/// dismissal (or a replacement presentation) removes it.
pub(crate) struct MessageDialog {
    pub(crate) title: Option<String>,
    pub(crate) message: Option<String>,
}
