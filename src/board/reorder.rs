//! Drag-and-drop Reordering
//!
//! Rearranges task items inside list containers and reports the resulting
//! child order. Containers may be nested under a task (sub-tasks).

use dragdrop::{placement_for, reorder, DropTarget, Placement};
use web_sys::{DragEvent, Element, Node};

use super::TASK_SELECTOR;
use crate::dom;

/// Ids of the task items directly inside `container`, in DOM order
pub fn child_task_ids(container: &Element) -> Vec<String> {
    let children = container.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| dom::data(&child, "task-id"))
        .collect()
}

fn child_by_id(container: &Element, id: &str) -> Option<Element> {
    let children = container.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .find(|child| dom::data(child, "task-id").as_deref() == Some(id))
}

/// Resolve the drop: next to the item under the pointer when it belongs to
/// `container`, otherwise append to the container
pub fn drop_target_for(ev: &DragEvent, container: &Element) -> Option<DropTarget> {
    let target = dom::event_element(ev)?;
    match dom::closest(&target, TASK_SELECTOR) {
        Some(item) if item.parent_element().as_ref() == Some(container) => {
            let id = dom::data(&item, "task-id")?;
            Some(DropTarget::Item { id, placement: placement_for(ev, &item) })
        }
        _ => Some(DropTarget::Container),
    }
}

/// Move `dragged` into `container` at `target` and return the container's new
/// order. `None` when the move is impossible (into its own subtree, or the
/// target vanished).
pub fn apply_drop(container: &Element, dragged: &Element, dragged_id: &str, target: &DropTarget) -> Option<Vec<String>> {
    if dragged.contains(Some(container)) {
        tracing::debug!(task_id = %dragged_id, "refusing drop into own subtree");
        return None;
    }

    let order = reorder(&child_task_ids(container), dragged_id, target);
    let anchor: Option<Node> = match target {
        DropTarget::Container => None,
        DropTarget::Item { id, placement } => {
            let item = child_by_id(container, id)?;
            match placement {
                Placement::Before => Some(item.into()),
                Placement::After => item.next_sibling(),
            }
        }
    };

    container.insert_before(dragged, anchor.as_ref()).ok()?;
    Some(order)
}

/// Parent task of a nested container
pub fn parent_task_id(container: &Element) -> Option<String> {
    let parent = container.parent_element()?;
    let task = dom::closest(&parent, TASK_SELECTOR)?;
    dom::data(&task, "task-id")
}
