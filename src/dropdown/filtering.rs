//! Option filtering.

use super::types::{FilterMode, FilteredOption};
use super::Model;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Returns the options that match `term`, in their original order.
///
/// An empty term matches everything. In [`FilterMode::Substring`] an option
/// matches when its lower-cased text contains the lower-cased term.
///
/// ```rust
/// use bubbletea_dropdown::dropdown::{filter_options, FilterMode};
///
/// let options = vec!["Canada".to_string(), "France".to_string(), "Germany".to_string()];
/// let found: Vec<_> = filter_options(&options, "AN", FilterMode::Substring)
///     .into_iter()
///     .map(|o| o.text)
///     .collect();
/// assert_eq!(found, vec!["Canada", "France", "Germany"]);
/// ```
pub fn filter_options(options: &[String], term: &str, mode: FilterMode) -> Vec<FilteredOption> {
    if term.is_empty() {
        return options
            .iter()
            .enumerate()
            .map(|(index, text)| FilteredOption {
                index,
                text: text.clone(),
                matches: Vec::new(),
            })
            .collect();
    }

    match mode {
        FilterMode::Substring => {
            let needle = term.to_lowercase();
            options
                .iter()
                .enumerate()
                .filter(|(_, text)| text.to_lowercase().contains(&needle))
                .map(|(index, text)| FilteredOption {
                    index,
                    text: text.clone(),
                    matches: substring_match_positions(text, &needle),
                })
                .collect()
        }
        FilterMode::Fuzzy => {
            let matcher = SkimMatcherV2::default();
            options
                .iter()
                .enumerate()
                .filter_map(|(index, text)| {
                    matcher
                        .fuzzy_indices(text, term)
                        .map(|(_, matches)| FilteredOption {
                            index,
                            text: text.clone(),
                            matches,
                        })
                })
                .collect()
        }
    }
}

/// Character positions of the first case-insensitive occurrence of `needle`
/// (already lower-cased) in `text`.
///
/// Lower-casing can change the character count (e.g. `İ`); such texts still
/// match but get no highlight positions.
fn substring_match_positions(text: &str, needle: &str) -> Vec<usize> {
    let lowered: Vec<char> = text.to_lowercase().chars().collect();
    if lowered.len() != text.chars().count() {
        return Vec::new();
    }
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() || needle.len() > lowered.len() {
        return Vec::new();
    }
    lowered
        .windows(needle.len())
        .position(|w| w == needle.as_slice())
        .map(|start| (start..start + needle.len()).collect())
        .unwrap_or_default()
}

impl Model {
    /// Recomputes the filtered view from the options and the current term.
    ///
    /// A highlight that no longer points into the filtered list is cleared.
    pub(super) fn apply_filter(&mut self) {
        self.filtered = filter_options(&self.options, &self.input.value(), self.filter_mode);
        if self.highlighted.is_some_and(|i| i >= self.filtered.len()) {
            self.highlighted = None;
        }
        self.sync_viewport_with_highlight();
    }

    /// Keeps the highlighted option inside the visible window.
    pub(super) fn sync_viewport_with_highlight(&mut self) {
        let visible = self.max_visible.max(1);
        let len = self.filtered.len();

        match self.highlighted {
            None => {}
            Some(i) if i < self.viewport_start => self.viewport_start = i,
            Some(i) if i >= self.viewport_start + visible => {
                self.viewport_start = i + 1 - visible;
            }
            Some(_) => {}
        }

        let max_start = len.saturating_sub(visible);
        if self.viewport_start > max_start {
            self.viewport_start = max_start;
        }
    }
}
