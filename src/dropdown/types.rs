//! Messages and value types for the dropdown.

use bubbletea_rs::Msg;

/// How the search term is matched against options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Skim-style fuzzy match. Matching options keep their original order.
    Fuzzy,
}

/// An option that passed the current filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredOption {
    /// Position of the option in the full option list. Together with the
    /// text this is the option's identity, so duplicate texts stay distinct.
    pub index: usize,
    /// Display text.
    pub text: String,
    /// Character positions in `text` that matched the search term.
    pub matches: Vec<usize>,
}

/// Pointer activity over the list, in filtered-list positions.
///
/// Hosts translate mouse events into these, typically with
/// [`Model::item_at`](super::Model::item_at).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer is over item `i`.
    Hover(usize),
    /// Item `i` was clicked.
    Click(usize),
    /// The pointer left the list.
    Leave,
}

/// Pointer activity addressed to one dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerMsg {
    /// Identifier of the target dropdown.
    pub id: usize,
    /// What the pointer did.
    pub event: PointerEvent,
}

/// Emitted when an option is chosen with enter or a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedMsg {
    /// Identifier of the dropdown that made the selection.
    pub id: usize,
    /// Position of the chosen option in the full option list.
    pub index: usize,
    /// Text of the chosen option.
    pub value: String,
}

/// Deferred close scheduled by a blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseMsg {
    /// Identifier of the dropdown that blurred.
    pub id: usize,
    /// Sequence tag; the close is dropped if the dropdown moved on since.
    pub tag: usize,
}

/// Clipboard contents to insert into the search input.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<PointerMsg> for Msg {
    fn from(msg: PointerMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}
