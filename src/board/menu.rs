//! Task Context Menu
//!
//! One `#context-menu` per page, bound to the task it was opened on.
//! Entries carry their action in `data-action`.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};

use crate::dom;

pub const MENU_ID: &str = "context-menu";

/// Action tag of a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Delete,
    Rename,
    Move,
}

impl MenuAction {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "delete" => Some(MenuAction::Delete),
            "rename" => Some(MenuAction::Rename),
            "move" => Some(MenuAction::Move),
            _ => None,
        }
    }
}

/// Task the menu is bound to, and the transient move popup
#[derive(Debug, Default)]
pub struct MenuState {
    task_id: Option<String>,
    position: (i32, i32),
    popup: Option<Element>,
}

impl MenuState {
    pub fn open(&mut self, task_id: &str, x: i32, y: i32) {
        self.task_id = Some(task_id.to_string());
        self.position = (x, y);
    }

    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn popup(&self) -> Option<&Element> {
        self.popup.as_ref()
    }

    /// Track a new popup; returns the one it replaces
    pub fn set_popup(&mut self, popup: Element) -> Option<Element> {
        self.popup.replace(popup)
    }

    pub fn take_popup(&mut self) -> Option<Element> {
        self.popup.take()
    }
}

pub fn show(menu: &Element, x: i32, y: i32) {
    dom::set_style(menu, "top", &format!("{y}px"));
    dom::set_style(menu, "left", &format!("{x}px"));
    dom::set_style(menu, "display", "block");
}

pub fn hide(menu: &Element) {
    dom::set_style(menu, "display", "none");
}

/// Lists a task can move to: every known list except its own
pub fn move_choices(lists: &[String], current: Option<&str>) -> Vec<String> {
    lists
        .iter()
        .filter(|name| Some(name.as_str()) != current)
        .cloned()
        .collect()
}

/// Dropdown of target lists plus a confirm button
pub struct MovePopup {
    pub root: Element,
    pub select: HtmlSelectElement,
    pub confirm: Element,
}

impl MovePopup {
    pub fn build(choices: &[String], x: i32, y: i32) -> Option<Self> {
        let root = dom::create_element("div")?;
        root.set_class_name("move-popup");
        dom::set_style(&root, "position", "fixed");
        dom::set_style(&root, "top", &format!("{y}px"));
        dom::set_style(&root, "left", &format!("{x}px"));

        let select = dom::create_element("select")?.dyn_into::<HtmlSelectElement>().ok()?;
        for name in choices {
            let option = dom::create_element("option")?;
            option.set_attribute("value", name).ok()?;
            option.set_text_content(Some(name));
            select.append_child(&option).ok()?;
        }

        let confirm = dom::create_element("button")?;
        confirm.set_attribute("type", "button").ok()?;
        confirm.set_class_name("move-confirm");
        confirm.set_text_content(Some("Move"));

        root.append_child(&select).ok()?;
        root.append_child(&confirm).ok()?;
        Some(Self { root, select, confirm })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!(MenuAction::parse("delete"), Some(MenuAction::Delete));
        assert_eq!(MenuAction::parse(" rename "), Some(MenuAction::Rename));
        assert_eq!(MenuAction::parse("move"), Some(MenuAction::Move));
        assert_eq!(MenuAction::parse("archive"), None);
    }

    #[test]
    fn test_move_choices_exclude_current() {
        let lists = vec!["Today".to_string(), "Inbox".to_string(), "Someday".to_string()];
        assert_eq!(move_choices(&lists, Some("Inbox")), vec!["Today", "Someday"]);
        assert_eq!(move_choices(&lists, None).len(), 3);
    }

    #[test]
    fn test_menu_state_tracks_task_and_popup_slot() {
        let mut state = MenuState::default();
        assert_eq!(state.task_id(), None);
        state.open("12", 40, 80);
        assert_eq!(state.task_id(), Some("12"));
        assert_eq!(state.position(), (40, 80));
        assert!(state.take_popup().is_none());
    }
}
