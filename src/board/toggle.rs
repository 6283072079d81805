//! Completion Toggle
//!
//! Each list keeps incomplete and completed tasks in two containers,
//! `#incomplete-tasks-{list}` and `#completed-tasks-{list}`.

use web_sys::Element;

use crate::dom;

pub fn container_id(list_name: &str, completed: bool) -> String {
    if completed {
        format!("completed-tasks-{list_name}")
    } else {
        format!("incomplete-tasks-{list_name}")
    }
}

/// Inline style of a task row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStyle {
    pub text_decoration: &'static str,
    pub color: &'static str,
}

pub fn task_style(completed: bool) -> TaskStyle {
    if completed {
        TaskStyle { text_decoration: "line-through", color: "gray" }
    } else {
        TaskStyle { text_decoration: "none", color: "black" }
    }
}

/// Move `item` into its list's container for `completed` and restyle it
pub fn place_task(item: &Element, list_name: &str, completed: bool) -> bool {
    let Some(container) = dom::element_by_id(&container_id(list_name, completed)) else {
        tracing::warn!(list = %list_name, completed, "task container missing");
        return false;
    };
    if container.append_child(item).is_err() {
        return false;
    }
    let style = task_style(completed);
    dom::set_style(item, "text-decoration", style.text_decoration);
    dom::set_style(item, "color", style.color);
    true
}
