//! Single-line text field for the seconds entry

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Text buffer with a character-offset cursor
#[derive(Debug, Default, Clone)]
pub struct InputField {
    content: String,
    /// Cursor position as a character offset (0 = before first char)
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `text` with the cursor at its end
    pub fn with_text(text: &str) -> Self {
        let mut field = Self::new();
        field.insert_str(text);
        field
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor. Control characters are dropped.
    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let at = self.byte_offset();
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        text.chars().for_each(|ch| self.insert_char(ch));
    }

    /// Backspace
    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    /// Delete
    pub fn delete_forward(&mut self) {
        self.remove_at_cursor();
    }

    /// Ctrl+U
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char(_) if ctrl => return false,
            KeyCode::Char(ch) => self.insert_char(ch),
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => return false,
        }
        true
    }

    fn remove_at_cursor(&mut self) {
        let at = self.byte_offset();
        if let Some(ch) = self.content[at..].chars().next() {
            self.content.replace_range(at..at + ch.len_utf8(), "");
        }
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn edits_at_the_cursor() {
        let mut field = InputField::with_text("15");
        assert_eq!(field.cursor(), 2);

        field.handle_key(key(KeyCode::Left));
        field.handle_key(key(KeyCode::Char('2')));
        assert_eq!(field.content(), "125");

        field.handle_key(key(KeyCode::Home));
        field.handle_key(key(KeyCode::Delete));
        assert_eq!(field.content(), "25");

        field.handle_key(key(KeyCode::End));
        field.handle_key(key(KeyCode::Backspace));
        assert_eq!(field.content(), "2");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut field = InputField::new();
        field.handle_key(key(KeyCode::Backspace));
        field.handle_key(key(KeyCode::Left));
        field.handle_key(key(KeyCode::Right));
        assert_eq!(field.cursor(), 0);
        assert_eq!(field.content(), "");
    }

    #[test]
    fn ctrl_u_clears_and_other_ctrl_keys_pass_through() {
        let mut field = InputField::with_text("42");
        assert!(!field.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert_eq!(field.content(), "42");

        assert!(field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert_eq!(field.content(), "");
    }
}
