//! The single-line search input embedded in the dropdown.

use super::keys::DropdownKeyMap;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// What a key press did to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InputOutcome {
    /// The text changed.
    Edited,
    /// Only the caret moved.
    Moved,
    /// A clipboard read was requested.
    Paste,
    /// The key is not an editing key.
    Ignored,
}

/// Text plus caret position, stored as characters.
#[derive(Debug, Clone, Default)]
pub(super) struct SearchInput {
    value: Vec<char>,
    pos: usize,
}

impl SearchInput {
    pub(super) fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub(super) fn chars(&self) -> &[char] {
        &self.value
    }

    pub(super) fn position(&self) -> usize {
        self.pos
    }

    pub(super) fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the text verbatim and puts the caret at the end. Only typed
    /// and pasted text goes through [`sanitize`].
    pub(super) fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    pub(super) fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Inserts text at the caret. Returns whether anything was inserted.
    pub(super) fn insert(&mut self, s: &str) -> bool {
        let chars = sanitize(s);
        if chars.is_empty() {
            return false;
        }
        let n = chars.len();
        self.value.splice(self.pos..self.pos, chars);
        self.pos += n;
        true
    }

    pub(super) fn handle_key(&mut self, msg: &KeyMsg, keymap: &DropdownKeyMap) -> InputOutcome {
        if keymap.paste.matches(msg) {
            return InputOutcome::Paste;
        }
        if keymap.delete_before_cursor.matches(msg) {
            if self.pos == 0 {
                return InputOutcome::Ignored;
            }
            self.value.drain(..self.pos);
            self.pos = 0;
            return InputOutcome::Edited;
        }
        if keymap.delete_character_backward.matches(msg) {
            if self.pos == 0 {
                return InputOutcome::Ignored;
            }
            self.pos -= 1;
            self.value.remove(self.pos);
            return InputOutcome::Edited;
        }
        if keymap.delete_character_forward.matches(msg) {
            if self.pos >= self.value.len() {
                return InputOutcome::Ignored;
            }
            self.value.remove(self.pos);
            return InputOutcome::Edited;
        }
        if keymap.character_backward.matches(msg) {
            self.set_cursor(self.pos.saturating_sub(1));
            return InputOutcome::Moved;
        }
        if keymap.character_forward.matches(msg) {
            self.set_cursor(self.pos + 1);
            return InputOutcome::Moved;
        }
        if keymap.line_start.matches(msg) {
            self.pos = 0;
            return InputOutcome::Moved;
        }
        if keymap.line_end.matches(msg) {
            self.pos = self.value.len();
            return InputOutcome::Moved;
        }

        if let KeyCode::Char(c) = msg.key {
            let plain = msg.modifiers.is_empty() || msg.modifiers == KeyModifiers::SHIFT;
            if plain && self.insert(&c.to_string()) {
                return InputOutcome::Edited;
            }
        }
        InputOutcome::Ignored
    }
}

/// Drops control characters; newlines and tabs become spaces.
fn sanitize(s: &str) -> Vec<char> {
    s.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
