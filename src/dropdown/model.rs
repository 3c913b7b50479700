//! Dropdown state and event handling.

use super::input::{InputOutcome, SearchInput};
use super::keys::DropdownKeyMap;
use super::style::DropdownStyles;
use super::types::{
    CloseMsg, FilterMode, FilteredOption, PasteErrMsg, PasteMsg, PointerEvent, PointerMsg,
    SelectedMsg,
};
use crate::Component;
use bubbletea_rs::{tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Used to ensure that close and pointer messages only reach the dropdown they target.
static LAST_ID: AtomicUsize = AtomicUsize::new(1);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Delay between a blur and the list closing, so a click on an option that
/// caused the blur still lands on an open list.
pub const DEFAULT_BLUR_DELAY: Duration = Duration::from_millis(150);

/// Number of option rows shown at once.
pub const DEFAULT_MAX_VISIBLE: usize = 8;

/// A searchable single-select dropdown.
///
/// The dropdown owns its interaction state: the search text, whether the
/// list is open, which filtered option is highlighted, and the filtered view
/// itself. Options are supplied by the host through
/// [`set_options`](Self::set_options).
///
/// # Examples
///
/// ```rust
/// use bubbletea_dropdown::dropdown;
/// use bubbletea_dropdown::Component;
///
/// let mut dd = dropdown::new();
/// dd.set_options(vec!["Canada".into(), "France".into()]);
/// dd.focus();
/// assert!(dd.is_open());
/// assert_eq!(dd.filtered().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Styles for each part of the widget.
    pub styles: DropdownStyles,
    /// Key bindings.
    pub keymap: DropdownKeyMap,
    /// Text in front of the search input.
    pub prompt: String,
    /// Shown while the search input is empty.
    pub placeholder: String,
    /// Shown instead of the list when nothing matches.
    pub no_results_text: String,
    /// How long after a blur the list closes.
    pub blur_delay: Duration,
    /// Maximum display width of an option row; 0 disables truncation.
    pub width: usize,

    pub(super) input: SearchInput,
    pub(super) options: Vec<String>,
    pub(super) filtered: Vec<FilteredOption>,
    pub(super) filter_mode: FilterMode,
    pub(super) open: bool,
    pub(super) highlighted: Option<usize>,
    pub(super) focus: bool,
    pub(super) pointer_inside: bool,
    pub(super) viewport_start: usize,
    pub(super) max_visible: usize,
    pub(super) id: usize,
    close_tag: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            styles: DropdownStyles::default(),
            keymap: DropdownKeyMap::default(),
            prompt: "> ".to_string(),
            placeholder: "Search options...".to_string(),
            no_results_text: "No results found".to_string(),
            blur_delay: DEFAULT_BLUR_DELAY,
            width: 0,
            input: SearchInput::default(),
            options: Vec::new(),
            filtered: Vec::new(),
            filter_mode: FilterMode::default(),
            open: false,
            highlighted: None,
            focus: false,
            pointer_inside: false,
            viewport_start: 0,
            max_visible: DEFAULT_MAX_VISIBLE,
            id: next_id(),
            close_tag: 0,
        }
    }
}

impl Model {
    /// Creates an empty, closed, unfocused dropdown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dropdown over `options`.
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.set_options(options);
        self
    }

    /// Sets the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the blur-to-close delay.
    pub fn with_blur_delay(mut self, delay: Duration) -> Self {
        self.blur_delay = delay;
        self
    }

    /// Sets the filter mode.
    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.set_filter_mode(mode);
        self
    }

    /// Identifier used to address [`PointerMsg`]s and recognise own messages.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The full option list.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Replaces the option list and refilters against the current search
    /// text. Interaction state is otherwise untouched.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.apply_filter();
    }

    /// The options matching the current search text.
    pub fn filtered(&self) -> &[FilteredOption] {
        &self.filtered
    }

    /// The current search text.
    pub fn value(&self) -> String {
        self.input.value()
    }

    /// Sets the search text programmatically and refilters. Unlike typing,
    /// this neither opens the list nor clears the highlight unless the
    /// highlight falls out of range.
    pub fn set_value(&mut self, value: &str) {
        self.input.set_value(value);
        self.apply_filter();
    }

    /// Caret position within the search text, in characters.
    pub fn position(&self) -> usize {
        self.input.position()
    }

    /// Whether the list is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Filtered position of the highlighted option.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// The highlighted option.
    pub fn highlighted_option(&self) -> Option<&FilteredOption> {
        self.highlighted.and_then(|i| self.filtered.get(i))
    }

    /// Whether the pointer is over the list.
    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// The active filter mode.
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// Changes the filter mode and refilters.
    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
        self.apply_filter();
    }

    /// Maximum number of option rows shown at once.
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Sets the number of option rows shown at once (at least one).
    pub fn set_max_visible(&mut self, rows: usize) {
        self.max_visible = rows.max(1);
        self.sync_viewport_with_highlight();
    }

    /// Filtered index of the first visible option row.
    pub fn viewport_start(&self) -> usize {
        self.viewport_start
    }

    /// Maps a row, counted from the input line at row 0, to the filtered
    /// position of the option drawn there.
    pub fn item_at(&self, row: usize) -> Option<usize> {
        if !self.open || row == 0 {
            return None;
        }
        let offset = row - 1;
        let shown = self.filtered.len().saturating_sub(self.viewport_start);
        if offset >= self.max_visible.min(shown) {
            return None;
        }
        Some(self.viewport_start + offset)
    }

    /// Moves the highlight down one option; stops at the last option.
    pub fn highlight_next(&mut self) {
        let next = self.highlighted.map_or(0, |i| i + 1);
        if next < self.filtered.len() {
            self.highlighted = Some(next);
            self.sync_viewport_with_highlight();
        }
    }

    /// Moves the highlight up one option; stops at the first option.
    pub fn highlight_prev(&mut self) {
        if let Some(i) = self.highlighted {
            if i > 0 {
                self.highlighted = Some(i - 1);
                self.sync_viewport_with_highlight();
            }
        }
    }

    /// Closes the list without touching the search text or highlight.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Selects the filtered option at `index`: its text becomes the search
    /// text and the list closes. Returns a command delivering a
    /// [`SelectedMsg`], or `None` if `index` is out of range.
    ///
    /// # Arguments
    ///
    /// * `index` - Position in [`filtered`](Self::filtered), not in the full
    ///   option list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_dropdown::prelude::*;
    ///
    /// let mut dd = dropdown_new().with_options(vec!["Canada".into(), "France".into()]);
    /// dd.focus();
    ///
    /// assert!(dd.select(1).is_some());
    /// assert_eq!(dd.value(), "France");
    /// assert!(!dd.is_open());
    ///
    /// // "France" now filters the list down to one option.
    /// assert!(dd.select(1).is_none());
    /// ```
    pub fn select(&mut self, index: usize) -> Option<Cmd> {
        let chosen = self.filtered.get(index)?.clone();

        self.input.set_value(&chosen.text);
        self.open = false;
        self.highlighted = None;
        self.pointer_inside = false;
        // Supersede any pending blur close.
        self.close_tag += 1;
        self.viewport_start = 0;
        self.apply_filter();

        tracing::debug!(id = self.id, value = %chosen.text, "option selected");
        let msg = SelectedMsg {
            id: self.id,
            index: chosen.index,
            value: chosen.text,
        };
        Some(Box::pin(async move { Some(Box::new(msg) as Msg) }))
    }

    /// Selects the highlighted option, if any.
    pub fn select_highlighted(&mut self) -> Option<Cmd> {
        self.highlighted.and_then(|i| self.select(i))
    }

    /// Applies pointer activity over the list.
    ///
    /// Hover highlights an option and marks the pointer as inside the list,
    /// which keeps a pending blur close from firing. Click selects. Leave
    /// clears the inside mark and closes the list if the input is not
    /// focused. Hosts map screen rows to positions with
    /// [`item_at`](Self::item_at).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_dropdown::prelude::*;
    ///
    /// let mut dd = dropdown_new().with_options(vec!["Canada".into(), "France".into()]);
    /// dd.focus();
    ///
    /// // Row 0 is the input line, so row 2 is the second option.
    /// let position = dd.item_at(2).unwrap();
    /// dd.handle_pointer(PointerEvent::Hover(position));
    /// assert_eq!(dd.highlighted(), Some(1));
    /// assert!(dd.pointer_inside());
    ///
    /// dd.handle_pointer(PointerEvent::Click(position));
    /// assert_eq!(dd.value(), "France");
    /// ```
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<Cmd> {
        match event {
            PointerEvent::Hover(i) => {
                if self.open && i < self.filtered.len() {
                    self.pointer_inside = true;
                    self.highlighted = Some(i);
                    self.sync_viewport_with_highlight();
                }
                None
            }
            PointerEvent::Click(i) => {
                if !self.open {
                    return None;
                }
                self.select(i)
            }
            PointerEvent::Leave => {
                self.pointer_inside = false;
                if !self.focus {
                    self.open = false;
                }
                None
            }
        }
    }

    fn input_changed(&mut self) {
        self.open = true;
        self.highlighted = None;
        self.viewport_start = 0;
        self.apply_filter();
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.highlight_next.matches(key_msg) {
            self.highlight_next();
            return None;
        }
        if self.keymap.highlight_prev.matches(key_msg) {
            self.highlight_prev();
            return None;
        }
        if self.keymap.select.matches(key_msg) {
            return self.select_highlighted();
        }
        if self.keymap.close.matches(key_msg) {
            self.close();
            return None;
        }

        match self.input.handle_key(key_msg, &self.keymap) {
            InputOutcome::Edited => self.input_changed(),
            InputOutcome::Paste => return Some(paste()),
            InputOutcome::Moved | InputOutcome::Ignored => {}
        }
        None
    }

    /// Handles key, pointer, paste and deferred-close messages.
    ///
    /// Keys are only handled while focused. Pointer messages are handled
    /// regardless of focus so a click that blurred the input still selects.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(close) = msg.downcast_ref::<CloseMsg>() {
            if close.id == self.id
                && close.tag == self.close_tag
                && !self.focus
                && !self.pointer_inside
            {
                self.open = false;
            }
            return None;
        }

        if let Some(pointer) = msg.downcast_ref::<PointerMsg>() {
            if pointer.id != self.id {
                return None;
            }
            return self.handle_pointer(pointer.event);
        }

        if let Some(PasteMsg(text)) = msg.downcast_ref::<PasteMsg>() {
            if self.focus && self.input.insert(text) {
                self.input_changed();
            }
            return None;
        }

        if let Some(PasteErrMsg(err)) = msg.downcast_ref::<PasteErrMsg>() {
            tracing::warn!(id = self.id, error = %err, "paste failed");
            return None;
        }

        if !self.focus {
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        None
    }
}

impl Component for Model {
    /// Focuses the input and opens the list.
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.open = true;
        self.close_tag += 1;
        None
    }

    /// Blurs the input and schedules the list to close after `blur_delay`.
    fn blur(&mut self) -> Option<Cmd> {
        self.focus = false;
        self.close_tag += 1;

        let id = self.id;
        let tag = self.close_tag;
        Some(tick(self.blur_delay, move |_| {
            Box::new(CloseMsg { id, tag }) as Msg
        }))
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

/// A command that reads the system clipboard and delivers a [`PasteMsg`] or
/// [`PasteErrMsg`].
pub fn paste() -> Cmd {
    tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

/// Creates a dropdown with default settings. Equivalent to `Model::new()`.
pub fn new() -> Model {
    Model::new()
}
