//! Accessibility snapshot of the dropdown.
//!
//! Terminal UIs have no DOM, so the dropdown exposes the same information a
//! screen-reader-facing combobox would carry in ARIA attributes: an input
//! with `aria-expanded`, `aria-controls` and `aria-activedescendant`, and a
//! `listbox` whose `option` children report `aria-selected`.

use super::Model;

/// ARIA role of the list container.
pub const ROLE_LISTBOX: &str = "listbox";
/// ARIA role of each list item.
pub const ROLE_OPTION: &str = "option";

/// The search input's combobox attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputNode {
    /// `aria-expanded`.
    pub expanded: bool,
    /// `aria-controls`: the listbox id.
    pub controls: String,
    /// `aria-activedescendant`: id of the highlighted option, if any.
    pub active_descendant: Option<String>,
}

/// One option in the listbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionNode {
    /// Element id, derived from the filtered position.
    pub id: String,
    /// Stable identity: the position in the full option list.
    pub key: usize,
    /// Display text.
    pub label: String,
    /// Always [`ROLE_OPTION`].
    pub role: &'static str,
    /// `aria-selected`: whether this option is highlighted.
    pub selected: bool,
}

/// The rendered listbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxNode {
    /// Element id, referenced by [`InputNode::controls`].
    pub id: String,
    /// Always [`ROLE_LISTBOX`].
    pub role: &'static str,
    /// Every filtered option, including ones scrolled out of view.
    pub options: Vec<OptionNode>,
}

/// Everything the dropdown currently exposes to assistive technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityTree {
    /// The search input.
    pub input: InputNode,
    /// Present while the list is open and has matches.
    pub listbox: Option<ListboxNode>,
    /// True while the list is open with no matches.
    pub no_results: bool,
}

impl Model {
    /// Id of the listbox element.
    pub fn listbox_id(&self) -> String {
        format!("dropdown-{}-listbox", self.id)
    }

    /// Id of the option element at filtered position `position`.
    pub fn option_id(&self, position: usize) -> String {
        format!("dropdown-{}-option-{}", self.id, position)
    }

    /// Builds the accessibility snapshot for the current state.
    ///
    /// The input is expanded while the list is open, and points at the
    /// highlighted option through its active descendant. The listbox is
    /// present only while the list is open with matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_dropdown::prelude::*;
    ///
    /// let mut dd = dropdown_new().with_options(vec!["Canada".into(), "France".into()]);
    /// dd.focus();
    /// dd.highlight_next();
    ///
    /// let tree = dd.accessibility();
    /// assert!(tree.input.expanded);
    /// assert_eq!(tree.input.controls, dd.listbox_id());
    /// assert_eq!(tree.input.active_descendant, Some(dd.option_id(0)));
    ///
    /// let listbox = tree.listbox.unwrap();
    /// assert!(listbox.options[0].selected);
    /// assert!(!listbox.options[1].selected);
    /// ```
    pub fn accessibility(&self) -> AccessibilityTree {
        let listbox = (self.open && !self.filtered.is_empty()).then(|| ListboxNode {
            id: self.listbox_id(),
            role: ROLE_LISTBOX,
            options: self
                .filtered
                .iter()
                .enumerate()
                .map(|(i, option)| OptionNode {
                    id: self.option_id(i),
                    key: option.index,
                    label: option.text.clone(),
                    role: ROLE_OPTION,
                    selected: self.highlighted == Some(i),
                })
                .collect(),
        });

        AccessibilityTree {
            input: InputNode {
                expanded: self.open,
                controls: self.listbox_id(),
                active_descendant: self.highlighted.map(|i| self.option_id(i)),
            },
            listbox,
            no_results: self.open && self.filtered.is_empty(),
        }
    }
}
