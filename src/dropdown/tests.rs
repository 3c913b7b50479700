//! Tests for the dropdown component.

use super::*;
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn type_text(dd: &mut Model, text: &str) {
    for c in text.chars() {
        dd.update(key(KeyCode::Char(c)));
    }
}

fn countries(items: &[&str]) -> Model {
    new().with_options(items.iter().map(|s| s.to_string()).collect())
}

fn texts(dd: &Model) -> Vec<&str> {
    dd.filtered().iter().map(|o| o.text.as_str()).collect()
}

fn plain(view: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(view)).unwrap()
}

async fn selected(cmd: Option<bubbletea_rs::Cmd>) -> SelectedMsg {
    let msg = cmd.expect("selection command").await.expect("selection message");
    *msg.downcast::<SelectedMsg>().expect("SelectedMsg")
}

#[test]
fn test_initial_state() {
    let dd = countries(&["Canada", "France"]);
    assert_eq!(dd.value(), "");
    assert!(!dd.is_open());
    assert!(!dd.focused());
    assert_eq!(dd.highlighted(), None);
    assert_eq!(texts(&dd), vec!["Canada", "France"]);
}

#[test]
fn test_focus_opens_list() {
    let mut dd = countries(&["Canada"]);
    assert!(dd.focus().is_none());
    assert!(dd.is_open());
    assert!(dd.focused());
}

#[test]
fn test_keys_ignored_while_unfocused() {
    let mut dd = countries(&["Canada"]);
    type_text(&mut dd, "ca");
    assert_eq!(dd.value(), "");
    assert!(!dd.is_open());
}

#[test]
fn test_typing_filters_opens_and_resets_highlight() {
    let mut dd = countries(&["Canada", "France", "Germany"]);
    dd.focus();
    dd.update(key(KeyCode::Down));
    dd.update(key(KeyCode::Down));
    assert_eq!(dd.highlighted(), Some(1));

    dd.update(key(KeyCode::Esc));
    assert!(!dd.is_open());

    type_text(&mut dd, "an");
    assert!(dd.is_open());
    assert_eq!(dd.highlighted(), None);
    assert_eq!(texts(&dd), vec!["Canada", "France", "Germany"]);

    type_text(&mut dd, "a");
    assert_eq!(texts(&dd), vec!["Canada"]);
}

#[test]
fn test_filter_is_case_insensitive() {
    let mut dd = countries(&["Canada", "France", "Germany"]);
    dd.focus();
    type_text(&mut dd, "FRA");
    assert_eq!(texts(&dd), vec!["France"]);
}

#[test]
fn test_backspace_refilters() {
    let mut dd = countries(&["Canada", "Chad", "Chile"]);
    dd.focus();
    type_text(&mut dd, "chi");
    assert_eq!(texts(&dd), vec!["Chile"]);
    dd.update(key(KeyCode::Backspace));
    assert_eq!(texts(&dd), vec!["Chad", "Chile"]);
}

#[test]
fn test_arrow_down_stops_at_last() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    dd.update(key(KeyCode::Down));
    assert_eq!(dd.highlighted(), Some(0));
    dd.update(key(KeyCode::Down));
    assert_eq!(dd.highlighted(), Some(1));
    dd.update(key(KeyCode::Down));
    assert_eq!(dd.highlighted(), Some(1));
}

#[test]
fn test_arrow_down_on_empty_list_is_noop() {
    let mut dd = countries(&["Canada"]);
    dd.focus();
    type_text(&mut dd, "zz");
    dd.update(key(KeyCode::Down));
    assert_eq!(dd.highlighted(), None);
}

#[test]
fn test_arrow_up_stops_at_first() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    dd.update(key(KeyCode::Up));
    assert_eq!(dd.highlighted(), None);

    dd.update(key(KeyCode::Down));
    dd.update(key(KeyCode::Down));
    dd.update(key(KeyCode::Up));
    assert_eq!(dd.highlighted(), Some(0));
    dd.update(key(KeyCode::Up));
    assert_eq!(dd.highlighted(), Some(0));
}

#[test]
fn test_highlight_stays_in_bounds() {
    let mut dd = countries(&["a1", "a2", "a3", "b1"]);
    dd.focus();
    let moves = [
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Up,
        KeyCode::Down,
    ];
    for code in moves {
        dd.update(key(code));
        let len = dd.filtered().len();
        assert!(dd.highlighted().map_or(true, |i| i < len));
    }
    assert_eq!(dd.highlighted(), Some(3));
}

#[tokio::test]
async fn test_enter_selects_highlighted() {
    let mut dd = countries(&["Canada", "France", "Germany"]);
    dd.focus();
    type_text(&mut dd, "an");
    dd.update(key(KeyCode::Down));
    let msg = selected(dd.update(key(KeyCode::Enter))).await;

    assert_eq!(msg.value, "Canada");
    assert_eq!(msg.index, 0);
    assert_eq!(msg.id, dd.id());
    assert_eq!(dd.value(), "Canada");
    assert!(!dd.is_open());
    assert_eq!(dd.highlighted(), None);
    assert_eq!(texts(&dd), vec!["Canada"]);
}

#[tokio::test]
async fn test_selection_keeps_exact_option_text() {
    let mut dd = countries(&["Côte\td'Ivoire", "Cuba"]);
    dd.focus();
    dd.update(key(KeyCode::Down));
    let msg = selected(dd.update(key(KeyCode::Enter))).await;

    assert_eq!(msg.value, "Côte\td'Ivoire");
    assert_eq!(dd.value(), msg.value);
    assert_eq!(texts(&dd), vec!["Côte\td'Ivoire"]);
}

#[test]
fn test_enter_without_highlight_is_noop() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    type_text(&mut dd, "an");
    assert!(dd.update(key(KeyCode::Enter)).is_none());
    assert_eq!(dd.value(), "an");
    assert!(dd.is_open());
}

#[test]
fn test_escape_only_closes() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    type_text(&mut dd, "a");
    dd.update(key(KeyCode::Down));
    dd.update(key(KeyCode::Esc));
    assert!(!dd.is_open());
    assert_eq!(dd.value(), "a");
    assert_eq!(dd.highlighted(), Some(0));
}

#[test]
fn test_caret_keys_do_not_reset_highlight() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    type_text(&mut dd, "a");
    dd.update(key(KeyCode::Down));
    dd.update(key(KeyCode::Left));
    dd.update(key(KeyCode::Home));
    assert_eq!(dd.highlighted(), Some(0));
    assert_eq!(dd.position(), 0);
}

#[test]
fn test_hover_highlights() {
    let mut dd = countries(&["Canada", "France", "Germany"]);
    dd.focus();
    dd.update(PointerMsg {
        id: dd.id(),
        event: PointerEvent::Hover(2),
    }
    .into());
    assert_eq!(dd.highlighted(), Some(2));
    assert!(dd.pointer_inside());
}

#[test]
fn test_hover_out_of_range_is_ignored() {
    let mut dd = countries(&["Canada"]);
    dd.focus();
    dd.handle_pointer(PointerEvent::Hover(5));
    assert_eq!(dd.highlighted(), None);
}

#[test]
fn test_leave_while_focused_keeps_list_open() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    dd.handle_pointer(PointerEvent::Hover(1));
    dd.handle_pointer(PointerEvent::Leave);
    assert!(!dd.pointer_inside());
    assert!(dd.is_open());
    assert_eq!(dd.highlighted(), Some(1));
}

#[test]
fn test_leave_while_blurred_closes_list() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    dd.handle_pointer(PointerEvent::Hover(0));
    let _close = dd.blur();
    dd.handle_pointer(PointerEvent::Leave);
    assert!(!dd.is_open());
}

#[test]
fn test_pointer_for_other_dropdown_is_ignored() {
    let mut dd = countries(&["Canada"]);
    dd.focus();
    dd.update(PointerMsg {
        id: dd.id() + 1000,
        event: PointerEvent::Hover(0),
    }
    .into());
    assert_eq!(dd.highlighted(), None);
}

#[tokio::test]
async fn test_click_selects_regardless_of_highlight() {
    let mut dd = countries(&["Canada", "France", "Germany"]);
    dd.focus();
    dd.update(key(KeyCode::Down));
    let msg = selected(dd.handle_pointer(PointerEvent::Click(2))).await;
    assert_eq!(msg.value, "Germany");
    assert_eq!(dd.value(), "Germany");
    assert!(!dd.is_open());
    assert_eq!(dd.highlighted(), None);
}

#[test]
fn test_click_on_closed_list_is_ignored() {
    let mut dd = countries(&["Canada"]);
    assert!(dd.handle_pointer(PointerEvent::Click(0)).is_none());
    assert_eq!(dd.value(), "");
}

#[tokio::test]
async fn test_blur_closes_after_delay() {
    let mut dd = countries(&["Canada"]);
    dd.focus();
    let start = std::time::Instant::now();
    let cmd = dd.blur().expect("close command");
    assert!(dd.is_open());

    let msg = cmd.await.expect("close message");
    assert!(start.elapsed() >= DEFAULT_BLUR_DELAY);
    dd.update(msg);
    assert!(!dd.is_open());
}

#[tokio::test]
async fn test_refocus_supersedes_pending_close() {
    let mut dd = countries(&["Canada"]).with_blur_delay(Duration::from_millis(5));
    dd.focus();
    let cmd = dd.blur().expect("close command");
    dd.focus();

    dd.update(cmd.await.expect("close message"));
    assert!(dd.is_open());
}

#[tokio::test]
async fn test_click_during_blur_delay_registers() {
    let mut dd = countries(&["Canada", "France"]).with_blur_delay(Duration::from_millis(5));
    dd.focus();
    dd.handle_pointer(PointerEvent::Hover(1));
    let close = dd.blur().expect("close command");

    let msg = selected(dd.handle_pointer(PointerEvent::Click(1))).await;
    assert_eq!(msg.value, "France");

    dd.update(close.await.expect("close message"));
    assert!(!dd.is_open());
    assert_eq!(dd.value(), "France");
}

#[tokio::test]
async fn test_pointer_inside_keeps_list_open_after_blur() {
    let mut dd = countries(&["Canada", "France"]).with_blur_delay(Duration::from_millis(5));
    dd.focus();
    dd.handle_pointer(PointerEvent::Hover(0));
    let close = dd.blur().expect("close command");

    dd.update(close.await.expect("close message"));
    assert!(dd.is_open());

    dd.handle_pointer(PointerEvent::Leave);
    assert!(!dd.is_open());
}

#[test]
fn test_close_message_for_other_dropdown_is_ignored() {
    let mut dd = countries(&["Canada"]);
    dd.focus();
    dd.blur();
    dd.update(Box::new(CloseMsg {
        id: dd.id() + 1000,
        tag: 1,
    }) as Msg);
    assert!(dd.is_open());
}

#[test]
fn test_set_options_refilters_with_current_term() {
    let mut dd = new();
    dd.focus();
    type_text(&mut dd, "an");
    assert!(dd.filtered().is_empty());

    dd.set_options(vec!["Canada".into(), "Peru".into(), "Japan".into()]);
    assert_eq!(texts(&dd), vec!["Canada", "Japan"]);
    assert_eq!(dd.value(), "an");
    assert!(dd.is_open());
}

#[test]
fn test_set_options_clears_out_of_range_highlight() {
    let mut dd = countries(&["Canada", "France", "Germany"]);
    dd.focus();
    dd.update(key(KeyCode::Down));
    dd.update(key(KeyCode::Down));
    dd.update(key(KeyCode::Down));
    assert_eq!(dd.highlighted(), Some(2));

    dd.set_options(vec!["Canada".into()]);
    assert_eq!(dd.highlighted(), None);
}

#[test]
fn test_paste_inserts_text() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    dd.update(PasteMsg("fra\n".into()).into());
    assert_eq!(dd.value(), "fra ");
    assert!(dd.is_open());
    assert!(dd.filtered().is_empty());
}

#[test]
fn test_ctrl_v_requests_paste() {
    let mut dd = countries(&["Canada"]);
    dd.focus();
    let cmd = dd.update(Box::new(KeyMsg {
        key: KeyCode::Char('v'),
        modifiers: KeyModifiers::CONTROL,
    }) as Msg);
    assert!(cmd.is_some());
    assert_eq!(dd.value(), "");
}

#[test]
fn test_fuzzy_mode() {
    let mut dd = countries(&["United States", "Canada", "United Kingdom"])
        .with_filter_mode(FilterMode::Fuzzy);
    dd.focus();
    type_text(&mut dd, "ukd");
    assert_eq!(texts(&dd), vec!["United Kingdom"]);
}

#[test]
fn test_view_closed_shows_only_input() {
    let dd = countries(&["Canada"]);
    let view = plain(&dd.view());
    assert_eq!(view.lines().count(), 1);
    assert!(view.contains("Search options..."));
    assert!(!view.contains("Canada"));
    assert!(!view.contains("No results found"));
}

#[test]
fn test_view_open_lists_options() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    dd.update(key(KeyCode::Down));
    let view = plain(&dd.view());
    let lines: Vec<&str> = view.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with('│'));
    assert!(lines[1].contains("Canada"));
    assert!(lines[2].starts_with("  France"));
}

#[test]
fn test_view_no_results() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    type_text(&mut dd, "zz");
    let view = plain(&dd.view());
    assert!(view.contains("No results found"));
    assert!(view.contains("zz"));

    dd.update(key(KeyCode::Esc));
    assert!(!plain(&dd.view()).contains("No results found"));
}

#[test]
fn test_view_scrolls_with_highlight() {
    let names: Vec<String> = (0..20).map(|i| format!("Country {i:02}")).collect();
    let mut dd = new().with_options(names);
    dd.set_max_visible(5);
    dd.focus();
    for _ in 0..7 {
        dd.update(key(KeyCode::Down));
    }
    assert_eq!(dd.highlighted(), Some(6));
    assert_eq!(dd.viewport_start(), 2);

    let view = plain(&dd.view());
    assert_eq!(view.lines().count(), 6);
    assert!(view.contains("Country 02"));
    let highlighted = view.lines().find(|l| l.starts_with('│')).expect("highlighted row");
    assert!(highlighted.contains("Country 06"));
    assert!(!view.contains("Country 07"));
}

#[test]
fn test_item_at_maps_rows() {
    let names: Vec<String> = (0..20).map(|i| format!("Country {i:02}")).collect();
    let mut dd = new().with_options(names);
    dd.set_max_visible(5);
    assert_eq!(dd.item_at(1), None);

    dd.focus();
    assert_eq!(dd.item_at(0), None);
    assert_eq!(dd.item_at(1), Some(0));
    assert_eq!(dd.item_at(5), Some(4));
    assert_eq!(dd.item_at(6), None);

    for _ in 0..7 {
        dd.update(key(KeyCode::Down));
    }
    assert_eq!(dd.item_at(1), Some(2));
}

#[test]
fn test_item_at_no_results_row_is_not_an_option() {
    let mut dd = countries(&["Canada", "France"]);
    dd.focus();
    type_text(&mut dd, "zz");
    assert!(dd.filtered().is_empty());
    assert_eq!(dd.item_at(1), None);
    assert_eq!(dd.item_at(2), None);
}

#[test]
fn test_accessibility_tracks_state() {
    let mut dd = countries(&["Canada", "France"]);
    let tree = dd.accessibility();
    assert!(!tree.input.expanded);
    assert_eq!(tree.input.controls, dd.listbox_id());
    assert!(tree.listbox.is_none());
    assert!(!tree.no_results);

    dd.focus();
    dd.update(key(KeyCode::Down));
    dd.update(key(KeyCode::Down));
    let tree = dd.accessibility();
    assert!(tree.input.expanded);
    assert_eq!(tree.input.active_descendant, Some(dd.option_id(1)));

    let listbox = tree.listbox.expect("listbox");
    assert_eq!(listbox.role, ROLE_LISTBOX);
    assert_eq!(listbox.options.len(), 2);
    assert!(listbox.options.iter().all(|o| o.role == ROLE_OPTION));
    assert!(!listbox.options[0].selected);
    assert!(listbox.options[1].selected);
    assert_eq!(listbox.options[1].label, "France");
}

#[test]
fn test_accessibility_no_results() {
    let mut dd = countries(&["Canada"]);
    dd.focus();
    type_text(&mut dd, "zz");
    let tree = dd.accessibility();
    assert!(tree.listbox.is_none());
    assert!(tree.no_results);
    assert_eq!(tree.input.active_descendant, None);
}

#[test]
fn test_duplicate_options_keep_distinct_keys() {
    let mut dd = countries(&["Congo", "Congo"]);
    dd.focus();
    let listbox = dd.accessibility().listbox.expect("listbox");
    assert_eq!(listbox.options[0].key, 0);
    assert_eq!(listbox.options[1].key, 1);
    assert_ne!(listbox.options[0].id, listbox.options[1].id);
}

#[test]
fn test_help_view_lists_navigation_keys() {
    let dd = new();
    let help = plain(&dd.help_view());
    assert!(help.contains("enter select"));
    assert!(help.contains("esc close"));
}

#[test]
fn test_instances_do_not_share_state() {
    let mut a = countries(&["Canada"]);
    let b = countries(&["Canada"]);
    a.focus();
    type_text(&mut a, "c");
    assert_ne!(a.id(), b.id());
    assert!(!b.is_open());
    assert_eq!(b.value(), "");
}
