//! Text-field dialog state.
//!
//! Field state lives behind a shared handle so the caller's `configure`
//! callback can set up placeholders, initial text, and masking on the same
//! live objects the session later reads values from and the render layer
//! draws.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use parking_lot::Mutex;

use crate::dispatch::DoneCallback;

/// Editable state of one text-input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFieldState {
    text: String,
    cursor: usize,
    placeholder: Option<String>,
    masked: bool,
}

impl TextFieldState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Text as it should be drawn: bullet characters when masked.
    pub fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.text.chars().count())
        } else {
            self.text.clone()
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the cursor's character position.
    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(index, _)| index)
            .unwrap_or(self.text.len())
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.text = text;
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        let index = self.byte_index();
        self.text.insert(index, ch);
        self.cursor += 1;
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index();
            self.text.remove(index);
        }
    }

    pub(crate) fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index();
            self.text.remove(index);
        }
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

/// Shared handle to one live text-input field.
///
/// Handed to the caller's `configure` callback before presentation and valid
/// for the lifetime of the dialog. Cloning is cheap; all clones observe the
/// same field.
#[derive(Clone, Default)]
pub struct TextFieldHandle {
    inner: Arc<Mutex<TextFieldState>>,
}

impl TextFieldHandle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.inner.lock().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.inner.lock().set_text(text.into());
    }

    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        self.inner.lock().placeholder = Some(placeholder.into());
    }

    pub fn set_masked(&self, masked: bool) {
        self.inner.lock().masked = masked;
    }

    /// Snapshot of the field state for reading or drawing.
    pub fn state(&self) -> TextFieldState {
        self.inner.lock().clone()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut TextFieldState) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

/// Dialog content for the text-field variants.
pub(crate) struct TextFieldsDialog {
    pub(crate) title: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) done_title: String,
    pub(crate) cancel_title: String,
    pub(crate) fields: Vec<TextFieldHandle>,
    pub(crate) focused: usize,
    pub(crate) on_done: Option<DoneCallback>,
}

impl TextFieldsDialog {
    pub(crate) fn new(
        title: Option<String>,
        message: Option<String>,
        done_title: Option<String>,
        cancel_title: Option<String>,
        count: usize,
        on_done: DoneCallback,
    ) -> Self {
        Self {
            title,
            message,
            done_title: done_title.unwrap_or_else(|| "Done".to_string()),
            cancel_title: cancel_title.unwrap_or_else(|| "Cancel".to_string()),
            fields: (0..count).map(|_| TextFieldHandle::new()).collect(),
            focused: 0,
            on_done: Some(on_done),
        }
    }

    pub(crate) fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub(crate) fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Current text of every field, in field order.
    pub(crate) fn values(&self) -> Vec<String> {
        self.fields.iter().map(|field| field.text()).collect()
    }

    /// Route an editing key to the focused field. Returns false for keys the
    /// dialog does not consume.
    pub(crate) fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        let Some(field) = self.fields.get(self.focused) else {
            return false;
        };
        field.with_state(|state| match key.code {
            KeyCode::Char(ch) => {
                state.insert_char(ch);
                true
            }
            KeyCode::Backspace => {
                state.backspace();
                true
            }
            KeyCode::Delete => {
                state.delete();
                true
            }
            KeyCode::Left => {
                state.move_left();
                true
            }
            KeyCode::Right => {
                state.move_right();
                true
            }
            KeyCode::Home => {
                state.move_home();
                true
            }
            KeyCode::End => {
                state.move_end();
                true
            }
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn insert_and_delete_at_cursor() {
        let mut state = TextFieldState::default();
        for ch in "abc".chars() {
            state.insert_char(ch);
        }
        state.move_left();
        state.insert_char('x');
        assert_eq!(state.text(), "abxc");
        state.backspace();
        assert_eq!(state.text(), "abc");
        state.move_home();
        state.delete();
        assert_eq!(state.text(), "bc");
    }

    #[test]
    fn cursor_respects_multibyte_chars() {
        let mut state = TextFieldState::default();
        state.set_text("héllo".to_string());
        assert_eq!(state.cursor(), 5);
        state.move_left();
        state.backspace();
        assert_eq!(state.text(), "hélo");
        state.move_home();
        state.move_right();
        state.delete();
        assert_eq!(state.text(), "hlo");
    }

    #[test]
    fn masked_display_hides_text() {
        let handle = TextFieldHandle::new();
        handle.set_text("secret");
        handle.set_masked(true);
        assert_eq!(handle.state().display_text(), "••••••");
        assert_eq!(handle.text(), "secret");
    }

    #[test]
    fn handle_clones_share_state() {
        let handle = TextFieldHandle::new();
        let clone = handle.clone();
        clone.set_text("shared");
        assert_eq!(handle.text(), "shared");
    }

    #[test]
    fn focus_wraps_across_fields() {
        let mut dialog =
            TextFieldsDialog::new(None, None, None, None, 3, Box::new(|_| {}));
        dialog.focus_prev();
        assert_eq!(dialog.focused, 2);
        dialog.focus_next();
        assert_eq!(dialog.focused, 0);
    }

    #[test]
    fn edit_keys_route_to_focused_field() {
        let mut dialog =
            TextFieldsDialog::new(None, None, None, None, 2, Box::new(|_| {}));
        assert!(dialog.handle_edit_key(press(KeyCode::Char('a'))));
        dialog.focus_next();
        assert!(dialog.handle_edit_key(press(KeyCode::Char('b'))));
        assert_eq!(dialog.values(), vec!["a".to_string(), "b".to_string()]);
        assert!(!dialog.handle_edit_key(press(KeyCode::F(1))));
    }
}
