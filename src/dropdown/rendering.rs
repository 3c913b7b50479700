//! View rendering for the dropdown.

use super::style::CURSOR_GLYPH;
use super::types::FilteredOption;
use super::Model;
use crate::key::KeyMap;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

const ELLIPSIS: char = '…';

/// Renders `text`, styling the characters at `matches` with `highlight_style`
/// and the rest with `normal_style`.
fn apply_character_highlighting(
    text: &str,
    matches: &[usize],
    highlight_style: &Style,
    normal_style: &Style,
) -> String {
    if matches.is_empty() {
        return normal_style.render(text);
    }

    let mut result = String::new();
    let mut run = String::new();
    let mut run_matched = false;

    for (i, c) in text.chars().enumerate() {
        let matched = matches.contains(&i);
        if matched != run_matched && !run.is_empty() {
            let style = if run_matched { highlight_style } else { normal_style };
            result.push_str(&style.render(&run));
            run.clear();
        }
        run_matched = matched;
        run.push(c);
    }
    if !run.is_empty() {
        let style = if run_matched { highlight_style } else { normal_style };
        result.push_str(&style.render(&run));
    }
    result
}

/// Cuts `text` to at most `width` columns, ending in an ellipsis when cut.
/// Also returns how many of the original characters were kept. A width of 0
/// leaves the text alone.
fn truncate(text: &str, width: usize) -> (String, usize) {
    let count = text.chars().count();
    if width == 0 {
        return (text.to_string(), count);
    }
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return (text.to_string(), count);
    }

    let mut out = String::new();
    let mut used = 0;
    let mut kept = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
        kept += 1;
    }
    out.push(ELLIPSIS);
    (out, kept)
}

/// Fits an option into `width` columns. Match positions past the cut are
/// dropped so the ellipsis is never styled as a match.
fn fit_option(option: &FilteredOption, width: usize) -> (String, Vec<usize>) {
    let (text, kept) = truncate(&option.text, width);
    let matches = option.matches.iter().copied().filter(|&i| i < kept).collect();
    (text, matches)
}

impl Model {
    /// Renders the input line and, while open, the options or the "no
    /// results" line.
    pub fn view(&self) -> String {
        let mut lines = vec![self.view_input()];
        if self.open {
            if self.filtered.is_empty() {
                lines.push(
                    self.styles
                        .no_results
                        .clone()
                        .render(&format!("  {}", self.no_results_text)),
                );
            } else {
                lines.extend(self.view_options());
            }
        }
        lines.join("\n")
    }

    /// A one-line summary of the navigation keys.
    pub fn help_view(&self) -> String {
        let parts: Vec<String> = self
            .keymap
            .short_help()
            .into_iter()
            .filter(|b| b.enabled())
            .map(|b| format!("{} {}", b.help().key, b.help().desc))
            .collect();
        self.styles.help.clone().render(&parts.join(" • "))
    }

    fn view_input(&self) -> String {
        let prompt = self.styles.prompt.clone().render(&self.prompt);

        if self.input.is_empty() {
            let placeholder = self.styles.placeholder.clone().render(&self.placeholder);
            if self.focus {
                let caret = self.styles.caret.clone().inline(true).render(" ");
                return format!("{prompt}{caret}{placeholder}");
            }
            return format!("{prompt}{placeholder}");
        }

        let chars = self.input.chars();
        if !self.focus {
            let text: String = chars.iter().collect();
            return format!("{prompt}{}", self.styles.text.clone().render(&text));
        }

        let pos = self.input.position().min(chars.len());
        let before: String = chars[..pos].iter().collect();
        let under = chars.get(pos).map_or(" ".to_string(), |c| c.to_string());
        let after: String = chars.get(pos + 1..).map_or(String::new(), |s| s.iter().collect());

        let mut out = prompt;
        if !before.is_empty() {
            out.push_str(&self.styles.text.clone().render(&before));
        }
        out.push_str(&self.styles.caret.clone().inline(true).render(&under));
        if !after.is_empty() {
            out.push_str(&self.styles.text.clone().render(&after));
        }
        out
    }

    fn view_options(&self) -> Vec<String> {
        self.filtered
            .iter()
            .enumerate()
            .skip(self.viewport_start)
            .take(self.max_visible)
            .map(|(i, option)| self.view_option(i, option))
            .collect()
    }

    fn view_option(&self, position: usize, option: &FilteredOption) -> String {
        let (text, matches) = fit_option(option, self.width.saturating_sub(2));
        let highlighted = self.highlighted == Some(position);

        let base = if highlighted {
            &self.styles.highlighted_option
        } else {
            &self.styles.option
        };
        let match_style = base.clone().inherit(self.styles.option_match.clone());
        let body = apply_character_highlighting(&text, &matches, &match_style, base);

        if highlighted {
            format!("{}{}", base.render(CURSOR_GLYPH), body)
        } else {
            format!("  {body}")
        }
    }
}
