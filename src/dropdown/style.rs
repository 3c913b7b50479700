//! Styles for the dropdown.
//!
//! All defaults use `AdaptiveColor` so they read well on both light and
//! dark terminals.
//!
//! ```rust
//! use bubbletea_dropdown::dropdown::DropdownStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = DropdownStyles::default();
//! styles.highlighted_option = Style::new().foreground(Color::from("212")).bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Glyph drawn in front of the highlighted option.
pub const CURSOR_GLYPH: &str = "│ ";

/// Styles for every part of the dropdown.
#[derive(Debug, Clone)]
pub struct DropdownStyles {
    /// Prompt in front of the search input.
    pub prompt: Style,
    /// Typed text.
    pub text: Style,
    /// Placeholder shown while the input is empty.
    pub placeholder: Style,
    /// Caret, shown while focused.
    pub caret: Style,
    /// Options that are not highlighted.
    pub option: Style,
    /// The highlighted option, including its cursor glyph.
    pub highlighted_option: Style,
    /// Characters of an option that matched the search term.
    pub option_match: Style,
    /// The "no results" line.
    pub no_results: Style,
    /// The help line.
    pub help: Style,
}

impl Default for DropdownStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        };

        Self {
            prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            text: Style::new(),
            placeholder: Style::new().foreground(Color::from("240")),
            caret: Style::new().reverse(true),
            option: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            highlighted_option: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            option_match: Style::new().underline(true),
            no_results: Style::new().foreground(subdued.clone()),
            help: Style::new().foreground(subdued),
        }
    }
}
