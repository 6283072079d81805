//! List Board Controller
//!
//! Task interactions on a page of list cards: completion checkboxes, the
//! context menu (delete / rename / move), fullscreen cards and drag-and-drop
//! reordering. All page-scoped state lives in one controller instance.

mod fullscreen;
mod menu;
pub mod reorder;
pub mod toggle;

pub use fullscreen::ExpandedCard;
pub use menu::{MenuAction, MenuState};

use std::cell::RefCell;
use std::rc::Rc;

use dragdrop::{bind_draggable, bind_drop_target, DropTarget, SharedSession};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, KeyboardEvent, MouseEvent, Node};

use crate::api::{self, FailureNotice, InFlight, OrderArgs};
use crate::dom::{self, NodePosition};

pub(crate) const TASK_SELECTOR: &str = "li[data-task-id]";
pub const CARD_SELECTOR: &str = ".card";
const CONTAINER_SELECTOR: &str =
    ".task-list, [id^=\"incomplete-tasks-\"], [id^=\"completed-tasks-\"]";
const FULLSCREEN_SELECTOR: &str = ".fullscreen-btn";

/// List name of a card: `data-list-name`, else its heading
pub fn card_list_name(card: &Element) -> Option<String> {
    dom::data(card, "list-name")
        .filter(|name| !name.is_empty())
        .or_else(|| {
            card.query_selector("h2")
                .ok()
                .flatten()
                .and_then(|heading| heading.text_content())
                .map(|text| text.trim().to_string())
        })
}

/// List owning `el`
pub fn list_name_of(el: &Element) -> Option<String> {
    card_list_name(&dom::closest(el, CARD_SELECTOR)?)
}

/// Names of all lists on the page, in page order
pub fn known_lists() -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in dom::query_all(CARD_SELECTOR).iter().filter_map(card_list_name) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

pub fn task_element(id: &str) -> Option<Element> {
    dom::query(&format!("li[data-task-id=\"{id}\"]"))
}

/// Node holding a task's title: `.task-title`, else its first non-blank text
fn title_node(item: &Element) -> Option<Node> {
    if let Some(title) = item.query_selector(".task-title").ok().flatten() {
        return Some(title.into());
    }
    let children = item.child_nodes();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .find(|node| {
            node.node_type() == Node::TEXT_NODE
                && node.text_content().is_some_and(|text| !text.trim().is_empty())
        })
}

pub fn task_title(item: &Element) -> String {
    title_node(item)
        .and_then(|node| node.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

fn set_task_title(item: &Element, title: &str) {
    match title_node(item) {
        Some(node) => node.set_text_content(Some(title)),
        None => tracing::warn!("task has no title node"),
    }
}

#[derive(Default)]
struct BoardState {
    drag: SharedSession,
    menu: RefCell<MenuState>,
    expanded: RefCell<ExpandedCard>,
    in_flight: InFlight,
}

/// Controller for one page of lists
#[derive(Clone, Default)]
pub struct BoardController {
    state: Rc<BoardState>,
}

impl BoardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self) {
        let has_menu = dom::element_by_id(menu::MENU_ID).is_some();
        if !has_menu {
            tracing::warn!("context menu not found; menu actions disabled on this page");
        }

        let tasks = dom::query_all(TASK_SELECTOR);
        for item in &tasks {
            let Some(id) = dom::data(item, "task-id") else { continue };
            bind_draggable(item, &self.state.drag, &id);
            self.bind_checkbox(item, &id);
            if has_menu {
                self.bind_context_menu(item, &id);
            }
        }

        let containers = dom::query_all(CONTAINER_SELECTOR);
        for container in &containers {
            self.bind_container(container);
        }

        if has_menu {
            self.bind_menu();
        }
        self.bind_fullscreen();
        self.bind_dismissal();
        tracing::debug!(tasks = tasks.len(), containers = containers.len(), "board bound");
    }

    // ========================
    // Completion
    // ========================

    fn bind_checkbox(&self, item: &Element, id: &str) {
        let Some(checkbox) = item.query_selector("input[type=\"checkbox\"]").ok().flatten() else {
            return;
        };
        // A nested sub-task's checkbox belongs to the sub-task
        if dom::closest(&checkbox, TASK_SELECTOR).as_ref() != Some(item) {
            return;
        }
        let this = self.clone();
        let item = item.clone();
        let id = id.to_string();
        dom::listen(&checkbox, "change", move |ev: Event| {
            if let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                this.toggle(&item, &id, input);
            }
        });
    }

    fn toggle(&self, item: &Element, id: &str, input: HtmlInputElement) {
        let completed = input.checked();
        let Some(list) = list_name_of(item) else {
            tracing::warn!(task_id = %id, "task is not inside a list card");
            return;
        };
        tracing::debug!(task_id = %id, completed, "checkbox changed");

        let guard = self.state.in_flight.try_begin("toggle", id);
        let task_id = id.to_string();
        let item = item.clone();
        api::submit_or_revert(
            "toggle_task",
            async move {
                let _guard = guard?;
                api::toggle_task(&task_id, completed).await
            },
            FailureNotice::Alert("Error: Could not update task status."),
            move |_| {
                toggle::place_task(&item, &list, completed);
            },
            move || input.set_checked(!completed),
        );
    }

    // ========================
    // Context Menu
    // ========================

    fn bind_context_menu(&self, item: &Element, id: &str) {
        let this = self.clone();
        let id = id.to_string();
        dom::listen(item, "contextmenu", move |ev: MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            this.open_menu(&id, ev.client_x(), ev.client_y());
        });
    }

    fn open_menu(&self, id: &str, x: i32, y: i32) {
        let Some(menu_el) = dom::element_by_id(menu::MENU_ID) else { return };
        self.close_popup();
        self.state.menu.borrow_mut().open(id, x, y);
        menu::show(&menu_el, x, y);
        tracing::debug!(task_id = %id, "context menu opened");
    }

    fn hide_menu(&self) {
        if let Some(menu_el) = dom::element_by_id(menu::MENU_ID) {
            menu::hide(&menu_el);
        }
    }

    fn close_popup(&self) {
        let popup = self.state.menu.borrow_mut().take_popup();
        if let Some(popup) = popup {
            popup.remove();
        }
    }

    fn bind_menu(&self) {
        let Some(menu_el) = dom::element_by_id(menu::MENU_ID) else { return };
        let this = self.clone();
        dom::listen(&menu_el, "click", move |ev: MouseEvent| {
            // Keep the document handler from dismissing what this click opens
            ev.stop_propagation();
            let action = dom::event_element(&ev)
                .and_then(|el| dom::closest(&el, "[data-action]"))
                .and_then(|entry| dom::data(&entry, "action"))
                .and_then(|tag| MenuAction::parse(&tag));
            if let Some(action) = action {
                this.run_action(action);
            }
        });
    }

    fn run_action(&self, action: MenuAction) {
        let task_id = self.state.menu.borrow().task_id().map(str::to_string);
        self.hide_menu();
        let Some(id) = task_id else { return };
        tracing::debug!(task_id = %id, ?action, "menu action");
        match action {
            MenuAction::Delete => self.delete(id),
            MenuAction::Rename => self.rename(id),
            MenuAction::Move => self.open_move_popup(id),
        }
    }

    fn delete(&self, id: String) {
        let guard = self.state.in_flight.try_begin("delete", &id);
        let task_id = id.clone();
        api::submit_or_revert(
            "delete_task",
            async move {
                let _guard = guard?;
                api::delete_task(&task_id).await
            },
            FailureNotice::Alert("Error: Could not delete task."),
            move |_| {
                if let Some(item) = task_element(&id) {
                    item.remove();
                }
            },
            || {},
        );
    }

    fn rename(&self, id: String) {
        let Some(item) = task_element(&id) else { return };
        let current = task_title(&item);
        let Some(input) = dom::prompt("New task name:", &current) else { return };
        let new_name = input.trim().to_string();
        if new_name.is_empty() {
            return;
        }

        let guard = self.state.in_flight.try_begin("rename", &id);
        let name = new_name.clone();
        api::submit_or_revert(
            "rename_task",
            async move {
                let _guard = guard?;
                api::rename_task(&id, &name).await
            },
            FailureNotice::Alert("Error: Could not rename task."),
            move |_| set_task_title(&item, &new_name),
            || {},
        );
    }

    fn open_move_popup(&self, id: String) {
        self.close_popup();
        let current = task_element(&id).and_then(|item| list_name_of(&item));
        let choices = menu::move_choices(&known_lists(), current.as_deref());
        if choices.is_empty() {
            tracing::warn!(task_id = %id, "no other list to move to");
            return;
        }

        let (x, y) = self.state.menu.borrow().position();
        let Some(popup) = menu::MovePopup::build(&choices, x, y) else { return };
        let Some(body) = dom::document().and_then(|doc| doc.body()) else { return };
        if body.append_child(&popup.root).is_err() {
            return;
        }

        let this = self.clone();
        let select = popup.select.clone();
        dom::listen(&popup.confirm, "click", move |ev: MouseEvent| {
            ev.stop_propagation();
            this.move_task(id.clone(), select.value());
        });
        if let Some(replaced) = self.state.menu.borrow_mut().set_popup(popup.root) {
            replaced.remove();
        }
    }

    fn move_task(&self, id: String, new_list: String) {
        if new_list.is_empty() {
            self.close_popup();
            return;
        }
        let guard = self.state.in_flight.try_begin("move", &id);
        let task_id = id.clone();
        let on_success = self.clone();
        let on_failure = self.clone();
        api::submit_or_revert(
            "move_task",
            async move {
                let _guard = guard?;
                api::move_task(&task_id, &new_list).await
            },
            FailureNotice::Alert("Error: Could not move task."),
            move |_| {
                if let Some(item) = task_element(&id) {
                    item.remove();
                }
                on_success.close_popup();
            },
            move || on_failure.close_popup(),
        );
    }

    // ========================
    // Fullscreen
    // ========================

    fn bind_fullscreen(&self) {
        for button in dom::query_all(FULLSCREEN_SELECTOR) {
            let this = self.clone();
            let source = button.clone();
            dom::listen(&button, "click", move |_ev: MouseEvent| {
                let Some(card) = dom::closest(&source, CARD_SELECTOR) else { return };
                let Some(list) = card_list_name(&card).or_else(|| dom::data(&source, "list-name")) else {
                    return;
                };
                let collapsed = this.state.expanded.borrow_mut().expand(&list);
                fullscreen::apply(&dom::query_all(CARD_SELECTOR), Some(&list));
                tracing::debug!(list = %list, ?collapsed, "card expanded");
            });
        }
    }

    fn collapse_if_outside(&self, target: Option<&Element>) {
        let inside = target.is_some_and(|el| {
            dom::closest(el, ".card.expanded").is_some() || dom::closest(el, FULLSCREEN_SELECTOR).is_some()
        });
        if inside {
            return;
        }
        let collapsed = self.state.expanded.borrow_mut().collapse();
        if let Some(list) = collapsed {
            fullscreen::apply(&dom::query_all(CARD_SELECTOR), None);
            tracing::debug!(list = %list, "card collapsed");
        }
    }

    // ========================
    // Drag and Drop
    // ========================

    fn bind_container(&self, container: &Element) {
        let this = self.clone();
        let resolve_in = container.clone();
        let drop_in = container.clone();
        bind_drop_target(
            container,
            &self.state.drag,
            move |ev| reorder::drop_target_for(ev, &resolve_in),
            move |task_id, target| this.drop_task(&drop_in, task_id, target),
        );
    }

    /// Rearrange optimistically, then report the container's order; a
    /// rejected order puts the item back where it was
    fn drop_task(&self, container: &Element, task_id: String, target: DropTarget) {
        let Some(dragged) = task_element(&task_id) else { return };
        let Some(list_name) = list_name_of(container) else {
            tracing::warn!(task_id = %task_id, "drop container is not inside a list card");
            return;
        };
        let Some(previous) = NodePosition::of(&dragged) else { return };
        let Some(order) = reorder::apply_drop(container, &dragged, &task_id, &target) else { return };

        let args = OrderArgs {
            order,
            parent_id: reorder::parent_task_id(container),
            list_name,
        };
        tracing::debug!(task_id = %task_id, list = %args.list_name, order = ?args.order, "task dropped");

        let guard = self.state.in_flight.try_begin("order", &args.pending_key());
        api::submit_or_revert(
            "update_task_order",
            async move {
                let _guard = guard?;
                api::update_task_order(&args).await
            },
            FailureNotice::Log,
            |_| {},
            move || previous.restore(&dragged),
        );
    }

    // ========================
    // Dismissal
    // ========================

    /// Outside clicks close the menu, the move popup and any expanded card;
    /// Escape closes the menu and popup
    fn bind_dismissal(&self) {
        let Some(doc) = dom::document() else { return };

        let this = self.clone();
        dom::listen(&doc, "click", move |ev: MouseEvent| {
            let target = dom::event_element(&ev);
            let contains = |el: &Element| target.as_ref().is_some_and(|t| el.contains(Some(t)));

            if let Some(menu_el) = dom::element_by_id(menu::MENU_ID) {
                if !contains(&menu_el) {
                    menu::hide(&menu_el);
                }
            }
            let popup = this.state.menu.borrow().popup().cloned();
            if popup.is_some_and(|popup| !contains(&popup)) {
                this.close_popup();
            }
            this.collapse_if_outside(target.as_ref());
        });

        let this = self.clone();
        dom::listen(&doc, "keydown", move |ev: KeyboardEvent| {
            if ev.key() == "Escape" {
                this.hide_menu();
                this.close_popup();
            }
        });
    }
}
