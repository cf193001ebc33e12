//! Progress-bar dialog state.

use ratatui::style::Color;

use crate::theme::{PROGRESS_DEFAULT, TRACK_DEFAULT};

/// How the status label below the bar renders progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTextMode {
    /// `"{floor(fraction * 100)}%"`
    Percentage,
    /// `"{current} / {total}"`
    Steps,
}

/// Live state of the progress bar attached to the active dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    progress_color: Color,
    track_color: Color,
    ratio: f64,
}

impl ProgressBar {
    pub(crate) fn new(progress_color: Option<Color>, track_color: Option<Color>) -> Self {
        Self {
            progress_color: progress_color.unwrap_or(PROGRESS_DEFAULT),
            track_color: track_color.unwrap_or(TRACK_DEFAULT),
            ratio: 0.0,
        }
    }

    pub fn progress_color(&self) -> Color {
        self.progress_color
    }

    pub fn track_color(&self) -> Color {
        self.track_color
    }

    /// Displayed fraction, clamped to `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

/// Live state of the optional status label below the bar.
///
/// Created only when the caller requested percentage or step text; with
/// neither mode requested no label state exists at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressLabel {
    mode: ProgressTextMode,
    text: String,
}

impl ProgressLabel {
    fn new(mode: ProgressTextMode) -> Self {
        Self {
            mode,
            text: String::new(),
        }
    }

    pub fn mode(&self) -> ProgressTextMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Dialog content for the progress variant.
pub(crate) struct ProgressDialog {
    pub(crate) title: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) bar: ProgressBar,
    pub(crate) label: Option<ProgressLabel>,
}

impl ProgressDialog {
    pub(crate) fn new(
        title: Option<String>,
        message: Option<String>,
        progress_color: Option<Color>,
        track_color: Option<Color>,
        show_percentage: bool,
        show_steps: bool,
    ) -> Self {
        // Percentage wins when both modes are requested.
        let label = if show_percentage {
            Some(ProgressLabel::new(ProgressTextMode::Percentage))
        } else if show_steps {
            Some(ProgressLabel::new(ProgressTextMode::Steps))
        } else {
            None
        };
        Self {
            title,
            message,
            bar: ProgressBar::new(progress_color, track_color),
            label,
        }
    }

    /// Recompute the displayed fraction and status text.
    ///
    /// `total == 0` is a caller contract violation; the bar stays at zero
    /// rather than propagating a NaN into the render layer.
    pub(crate) fn update(&mut self, current: u64, total: u64) {
        let fraction = if total == 0 {
            0.0
        } else {
            current as f64 / total as f64
        };
        self.bar.ratio = fraction.clamp(0.0, 1.0);
        if let Some(label) = &mut self.label {
            label.text = match label.mode {
                ProgressTextMode::Percentage => {
                    format!("{}%", (fraction * 100.0).floor() as u64)
                }
                ProgressTextMode::Steps => format!("{} / {}", current, total),
            };
        }
    }
}
