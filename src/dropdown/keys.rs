//! Key bindings for the dropdown.
//!
//! ## Navigation
//!
//! - `↓/ctrl+n`: highlight the next option
//! - `↑/ctrl+p`: highlight the previous option
//! - `enter`: select the highlighted option
//! - `esc`: close the list
//!
//! ## Editing
//!
//! - `←/ctrl+b`, `→/ctrl+f`: move the caret
//! - `home/ctrl+a`, `end/ctrl+e`: jump to start or end
//! - `backspace/ctrl+h`, `delete/ctrl+d`: delete a character
//! - `ctrl+u`: delete everything before the caret
//! - `ctrl+v`: paste

use crate::key::{self, new_binding, with_keys_str, Binding};

/// Key bindings for navigating and editing the dropdown.
#[derive(Debug, Clone)]
pub struct DropdownKeyMap {
    /// Highlight the next option.
    pub highlight_next: Binding,
    /// Highlight the previous option.
    pub highlight_prev: Binding,
    /// Select the highlighted option.
    pub select: Binding,
    /// Close the list.
    pub close: Binding,
    /// Move the caret one character left.
    pub character_backward: Binding,
    /// Move the caret one character right.
    pub character_forward: Binding,
    /// Move the caret to the start.
    pub line_start: Binding,
    /// Move the caret to the end.
    pub line_end: Binding,
    /// Delete the character before the caret.
    pub delete_character_backward: Binding,
    /// Delete the character under the caret.
    pub delete_character_forward: Binding,
    /// Delete everything before the caret.
    pub delete_before_cursor: Binding,
    /// Paste from the clipboard.
    pub paste: Binding,
}

impl Default for DropdownKeyMap {
    fn default() -> Self {
        Self {
            highlight_next: new_binding(with_keys_str(&["down", "ctrl+n"]))
                .with_help("↓/ctrl+n", "down"),
            highlight_prev: new_binding(with_keys_str(&["up", "ctrl+p"]))
                .with_help("↑/ctrl+p", "up"),
            select: new_binding(with_keys_str(&["enter"])).with_help("enter", "select"),
            close: new_binding(with_keys_str(&["esc"])).with_help("esc", "close"),
            character_backward: new_binding(with_keys_str(&["left", "ctrl+b"])),
            character_forward: new_binding(with_keys_str(&["right", "ctrl+f"])),
            line_start: new_binding(with_keys_str(&["home", "ctrl+a"])),
            line_end: new_binding(with_keys_str(&["end", "ctrl+e"])),
            delete_character_backward: new_binding(with_keys_str(&["backspace", "ctrl+h"])),
            delete_character_forward: new_binding(with_keys_str(&["delete", "ctrl+d"])),
            delete_before_cursor: new_binding(with_keys_str(&["ctrl+u"]))
                .with_help("ctrl+u", "clear"),
            paste: new_binding(with_keys_str(&["ctrl+v"])).with_help("ctrl+v", "paste"),
        }
    }
}

impl key::KeyMap for DropdownKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.highlight_prev,
            &self.highlight_next,
            &self.select,
            &self.close,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.highlight_prev,
                &self.highlight_next,
                &self.select,
                &self.close,
            ],
            vec![&self.delete_before_cursor, &self.paste],
        ]
    }
}
