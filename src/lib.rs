#![warn(missing_docs)]

//! # bubbletea-dropdown
//!
//! A searchable, keyboard-navigable dropdown selector for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) terminal
//! applications, plus a remote option source that loads the dropdown's
//! options over HTTP.
//!
//! ## Overview
//!
//! The crate has two components that follow the Elm Architecture
//! (`init()`, `update()`, `view()`):
//!
//! - [`options::Model`] fetches an ordered list of option strings once
//!   (country names from the REST Countries API by default) and exposes a
//!   loading flag. Failures are logged through `tracing` and leave the list
//!   as it was.
//! - [`dropdown::Model`] renders a search input above a filtered list,
//!   with arrow-key, enter, escape and pointer handling.
//!
//! Data flows one way: the host hands the source's options to the
//! dropdown whenever the source publishes a new revision.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_dropdown::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     source: OptionSource,
//!     dropdown: Dropdown,
//!     revision: usize,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut source = options_new();
//!         let load = source.load();
//!         let mut dropdown = dropdown_new();
//!         dropdown.focus();
//!         (Self { source, dropdown, revision: 0 }, Some(load))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if msg.is::<OptionsLoadedMsg>() {
//!             self.source.update(msg);
//!             if self.source.revision() != self.revision {
//!                 self.revision = self.source.revision();
//!                 self.dropdown.set_options(self.source.options().to_vec());
//!             }
//!             return None;
//!         }
//!         self.dropdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{}\n{}", self.source.view(), self.dropdown.view())
//!     }
//! }
//! ```

pub mod dropdown;
pub mod key;
pub mod options;

use bubbletea_rs::Cmd;

/// Core trait for components that take keyboard focus.
///
/// - `focus()` marks the component focused and may return a command.
/// - `blur()` marks it unfocused and may return a command, e.g. a deferred
///   close.
/// - `focused()` reports the current state.
///
/// # Examples
///
/// ```rust
/// use bubbletea_dropdown::prelude::*;
///
/// let mut dd = dropdown_new();
/// assert!(!dd.focused());
///
/// dd.focus();
/// assert!(dd.focused());
///
/// let _close = dd.blur();
/// assert!(!dd.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self) -> Option<Cmd>;

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use dropdown::Model as Dropdown;
pub use dropdown::{
    DropdownKeyMap, DropdownStyles, FilterMode, PointerEvent, PointerMsg, SelectedMsg,
};
pub use key::{new_binding, with_keys_str, Binding, KeyMap, KeyPress};
pub use options::Model as OptionSource;
pub use options::{FetchError, OptionsLoadedMsg};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_dropdown::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dropdown::{
        new as dropdown_new, DropdownKeyMap, DropdownStyles, FilterMode, Model as Dropdown,
        PointerEvent, PointerMsg, SelectedMsg,
    };
    pub use crate::key::{new_binding, with_keys_str, Binding, KeyMap, KeyPress};
    pub use crate::options::{
        new as options_new, FetchError, Model as OptionSource, OptionsLoadedMsg,
    };
    pub use crate::Component;
}
