//! Searchable single-select dropdown.
//!
//! The dropdown pairs a one-line search input with a list of options that
//! is filtered as the user types. The list opens on focus or typing, and
//! closes on escape, on selection, or shortly after a blur.
//!
//! ## Interaction
//!
//! - **Typing** updates the search text, opens the list and clears the
//!   highlight. Options are matched case-insensitively by substring (or
//!   fuzzily, see [`FilterMode`]).
//! - **↓ / ↑** move the highlight without wrapping. From no highlight, ↓
//!   goes to the first option; ↑ on the first option stays put.
//! - **Enter** selects the highlighted option: its text becomes the search
//!   text, the list closes, and a [`SelectedMsg`] is emitted.
//! - **Esc** closes the list and keeps everything else.
//! - **Pointer** hover highlights, click selects ([`PointerMsg`]).
//! - **Blur** closes the list after [`DEFAULT_BLUR_DELAY`] unless the input
//!   is focused again, an option is selected, or the pointer is still over
//!   the list in the meantime.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_dropdown::dropdown;
//! use bubbletea_dropdown::Component;
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut dd = dropdown::new();
//! dd.set_options(vec!["Canada".into(), "France".into(), "Germany".into()]);
//! dd.focus();
//!
//! for c in "ger".chars() {
//!     dd.update(Box::new(KeyMsg { key: KeyCode::Char(c), modifiers: KeyModifiers::NONE }) as Msg);
//! }
//! assert_eq!(dd.filtered().len(), 1);
//!
//! dd.update(Box::new(KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE }) as Msg);
//! let cmd = dd.update(Box::new(KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE }) as Msg);
//! assert!(cmd.is_some());
//! assert_eq!(dd.value(), "Germany");
//! assert!(!dd.is_open());
//! ```

pub mod keys;
pub mod style;

mod a11y;
mod filtering;
mod input;
mod model;
mod rendering;
mod types;

#[cfg(test)]
mod tests;

pub use a11y::{
    AccessibilityTree, InputNode, ListboxNode, OptionNode, ROLE_LISTBOX, ROLE_OPTION,
};
pub use filtering::filter_options;
pub use keys::DropdownKeyMap;
pub use model::{new, paste, Model, DEFAULT_BLUR_DELAY, DEFAULT_MAX_VISIBLE};
pub use style::DropdownStyles;
pub use types::{
    CloseMsg, FilterMode, FilteredOption, PasteErrMsg, PasteMsg, PointerEvent, PointerMsg,
    SelectedMsg,
};
