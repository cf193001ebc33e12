//! Button actions and role resolution.
//!
//! Every button-bearing variant goes through [`create_alert_actions`] to turn
//! an ordered title list plus optional cancel/destructive positions into the
//! action row it displays.

/// Presentation role of an alert button.
///
/// Roles affect styling only; the index delivered to the action callback is
/// always the button's original position in the title list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonRole {
    /// Plain action button.
    #[default]
    Default,
    /// The button that backs out of the dialog.
    Cancel,
    /// A button for an irreversible action.
    Destructive,
}

/// One resolved button: title plus presentation role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    pub title: String,
    pub role: ButtonRole,
}

/// Resolve button roles for an ordered title list.
///
/// For each index, the cancel check runs before the destructive check, so a
/// position named by both `cancel_index` and `destructive_indices` comes out
/// as [`ButtonRole::Cancel`]. Out-of-range positions are silently ignored:
/// they match no index and therefore assign no role.
pub fn create_alert_actions(
    titles: &[String],
    cancel_index: Option<usize>,
    destructive_indices: &[usize],
) -> Vec<ActionSpec> {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| {
            let role = if cancel_index == Some(index) {
                ButtonRole::Cancel
            } else if destructive_indices.iter().any(|&d| d == index) {
                ButtonRole::Destructive
            } else {
                ButtonRole::Default
            };
            ActionSpec {
                title: title.clone(),
                role,
            }
        })
        .collect()
}
