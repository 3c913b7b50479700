//! Country picker: loads country names from the REST Countries API and lets
//! you search and pick one.
//!
//! Keys: type to search, ↑/↓ to move, enter to pick, esc to close the list,
//! tab to toggle focus, ctrl+c to quit. The mouse highlights and picks
//! options; clicking the input focuses it and clicking elsewhere blurs it.
//!
//! Logs go to stderr; run with `RUST_LOG=debug cargo run 2>countries.log`
//! to keep them out of the way.

use bubbletea_dropdown::prelude::*;
use bubbletea_rs::{batch, quit, Cmd, KeyMsg, Model, MouseMotion, MouseMsg, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use lipgloss_extras::prelude::*;
use tracing_subscriber::EnvFilter;

struct App {
    source: OptionSource,
    dropdown: Dropdown,
    revision: usize,
    chosen: Option<String>,
}

impl App {
    /// Screen row of the dropdown's input line: title, blank line, then the
    /// loading line while it is shown.
    fn dropdown_top(&self) -> u16 {
        if self.source.loading() {
            3
        } else {
            2
        }
    }

    fn pointer(&mut self, event: PointerEvent) -> Option<Cmd> {
        let id = self.dropdown.id();
        self.dropdown.update(PointerMsg { id, event }.into())
    }

    fn handle_mouse(&mut self, mouse: &MouseMsg) -> Option<Cmd> {
        let row = mouse.y.checked_sub(self.dropdown_top()).map(usize::from);
        let item = row.and_then(|r| self.dropdown.item_at(r));

        match mouse.button {
            MouseEventKind::Moved => match item {
                Some(i) => self.pointer(PointerEvent::Hover(i)),
                None if self.dropdown.pointer_inside() => self.pointer(PointerEvent::Leave),
                None => None,
            },
            MouseEventKind::Down(MouseButton::Left) => match (item, row) {
                (Some(i), _) => self.pointer(PointerEvent::Click(i)),
                (None, Some(0)) if !self.dropdown.focused() => self.dropdown.focus(),
                (None, Some(0)) => None,
                (None, _) if self.dropdown.focused() => self.dropdown.blur(),
                (None, _) => None,
            },
            _ => None,
        }
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut source = options_new();
        let load = source.load();

        let mut dropdown = dropdown_new().with_placeholder("Search countries...");
        dropdown.width = 40;
        let mut cmds = vec![load];
        if let Some(cmd) = dropdown.focus() {
            cmds.push(cmd);
        }

        let app = Self {
            source,
            dropdown,
            revision: 0,
            chosen: None,
        };
        (app, Some(batch(cmds)))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.is::<OptionsLoadedMsg>() {
            self.source.update(msg);
            if self.source.revision() != self.revision {
                self.revision = self.source.revision();
                self.dropdown.set_options(self.source.options().to_vec());
            }
            return None;
        }

        if let Some(selected) = msg.downcast_ref::<SelectedMsg>() {
            self.chosen = Some(selected.value.clone());
            return None;
        }

        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            return self.handle_mouse(mouse);
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if key.key == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(quit());
            }
            if key.key == KeyCode::Tab {
                return if self.dropdown.focused() {
                    self.dropdown.blur()
                } else {
                    self.dropdown.focus()
                };
            }
        }

        self.dropdown.update(msg)
    }

    fn view(&self) -> String {
        let title = Style::new()
            .background(Color::from("62"))
            .foreground(Color::from("230"))
            .padding(0, 1, 0, 1)
            .render("Searchable Dropdown");

        let mut sections = vec![title, String::new()];
        let loading = self.source.view();
        if !loading.is_empty() {
            sections.push(loading);
        }
        sections.push(self.dropdown.view());
        sections.push(String::new());
        if let Some(chosen) = &self.chosen {
            sections.push(format!("Selected: {chosen}"));
        }
        sections.push(self.dropdown.help_view());
        sections.join("\n")
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let program = Program::<App>::builder()
        .alt_screen(true)
        .mouse_motion(MouseMotion::Cell)
        .build()?;
    program.run().await?;
    Ok(())
}
