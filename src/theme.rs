//! Default palette for alert dialogs.
//!
//! Variants that accept colors (activity spinner, progress bar) fall back to
//! these values when the caller does not override them.

use ratatui::style::Color;

pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIALOG_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MESSAGE_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const DESTRUCTIVE_TEXT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SPINNER_DEFAULT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const PROGRESS_DEFAULT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const TRACK_DEFAULT: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FIELD_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FIELD_BORDER_FOCUSED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
