//! Activity-spinner dialog state.

use ratatui::style::Color;

use crate::theme::SPINNER_DEFAULT;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Wide frames used when the caller asked for a large indicator.
const SPINNER_FRAMES_LARGE: &[&str] = &["⣾⣿", "⣽⣿", "⣻⣿", "⢿⣿", "⡿⣿", "⣟⣿", "⣯⣿", "⣷⣿"];

/// Live state of the activity indicator attached to the active dialog.
///
/// Exists only while an activity dialog is active; dropped on close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityIndicator {
    color: Color,
    large: bool,
    tick: u8,
}

impl ActivityIndicator {
    pub(crate) fn new(color: Option<Color>, large: bool) -> Self {
        Self {
            color: color.unwrap_or(SPINNER_DEFAULT),
            large,
            tick: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_large(&self) -> bool {
        self.large
    }

    /// Advance the spinner by one animation tick.
    pub(crate) fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// The frame to draw for the current tick.
    pub fn frame(&self) -> &'static str {
        let frames = if self.large {
            SPINNER_FRAMES_LARGE
        } else {
            SPINNER_FRAMES
        };
        frames[(self.tick as usize) % frames.len()]
    }
}

/// Dialog content for the activity variant.
pub(crate) struct ActivityDialog {
    pub(crate) title: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) indicator: ActivityIndicator,
}
