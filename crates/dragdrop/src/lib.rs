//! Planner DragDrop Utilities
//!
//! HTML5 drag-and-drop for server-rendered task lists.
//! A session holds at most one dragged item; the drop position relative to
//! a sibling is decided by the pointer's vertical midpoint.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element};

/// Where the dragged item lands relative to the item under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

impl Placement {
    /// `offset_y` is measured from the target's top edge
    pub fn from_offset(offset_y: f64, height: f64) -> Self {
        if offset_y > height / 2.0 {
            Placement::After
        } else {
            Placement::Before
        }
    }
}

/// Drop target types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop next to a sibling item
    Item { id: String, placement: Placement },
    /// Drop on the container itself (append)
    Container,
}

/// Drag gesture phase
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging { source: String },
}

/// How a gesture ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    Dropped { source: String, target: DropTarget },
    Cancelled,
}

/// Single-slot drag session: `idle -> dragging -> dropped | cancelled -> idle`
#[derive(Debug, Default)]
pub struct DragSession {
    phase: DragPhase,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the drag source. Refused while another gesture is active.
    pub fn begin(&mut self, id: impl Into<String>) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.phase = DragPhase::Dragging { source: id.into() };
        true
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn source(&self) -> Option<&str> {
        match &self.phase {
            DragPhase::Dragging { source } => Some(source),
            DragPhase::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Finish the gesture on a drop. Dropping an item onto itself cancels.
    /// Returns `None` when no gesture was active.
    pub fn drop_on(&mut self, target: DropTarget) -> Option<DragOutcome> {
        let DragPhase::Dragging { source } = std::mem::take(&mut self.phase) else {
            return None;
        };
        if matches!(&target, DropTarget::Item { id, .. } if *id == source) {
            return Some(DragOutcome::Cancelled);
        }
        Some(DragOutcome::Dropped { source, target })
    }

    /// Finish the gesture without a drop (dragend)
    pub fn cancel(&mut self) -> Option<DragOutcome> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { .. } => Some(DragOutcome::Cancelled),
            DragPhase::Idle => None,
        }
    }
}

/// Compute the sibling order after dropping `dragged` on `target`.
/// `order` is the container's order before the drop; `dragged` may or may not
/// already be part of it.
pub fn reorder(order: &[String], dragged: &str, target: &DropTarget) -> Vec<String> {
    let mut next: Vec<String> = order
        .iter()
        .filter(|id| id.as_str() != dragged)
        .cloned()
        .collect();

    let index = match target {
        DropTarget::Container => next.len(),
        DropTarget::Item { id, placement } => match next.iter().position(|other| other == id) {
            Some(pos) if *placement == Placement::After => pos + 1,
            Some(pos) => pos,
            None => next.len(),
        },
    };

    next.insert(index, dragged.to_string());
    next
}

/// Shared session handle owned by one page controller
pub type SharedSession = Rc<RefCell<DragSession>>;

pub fn create_session() -> SharedSession {
    Rc::new(RefCell::new(DragSession::new()))
}

/// Placement of a drop relative to `target`'s bounding box
pub fn placement_for(ev: &web_sys::MouseEvent, target: &Element) -> Placement {
    let rect = target.get_bounding_client_rect();
    Placement::from_offset(f64::from(ev.client_y()) - rect.top(), rect.height())
}

fn listen<F>(el: &Element, event: &str, handler: F)
where
    F: FnMut(DragEvent) + 'static,
{
    let cb = Closure::<dyn FnMut(DragEvent)>::new(handler);
    if let Err(err) = el.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        tracing::warn!(event, ?err, "could not bind drag listener");
    }
    cb.forget();
}

/// Make `el` a drag source carrying `id`
pub fn bind_draggable(el: &Element, session: &SharedSession, id: &str) {
    let _ = el.set_attribute("draggable", "true");

    let start_session = session.clone();
    let item_id = id.to_string();
    listen(el, "dragstart", move |ev: DragEvent| {
        ev.stop_propagation();
        if !start_session.borrow_mut().begin(item_id.clone()) {
            return;
        }
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            let _ = transfer.set_data("text", &item_id);
        }
        tracing::debug!(id = %item_id, "drag started");
    });

    let end_session = session.clone();
    listen(el, "dragend", move |_ev: DragEvent| {
        if end_session.borrow_mut().cancel().is_some() {
            tracing::debug!("drag cancelled");
        }
    });
}

/// Make `el` a drop target. `resolve` maps the drop event to a target;
/// `on_drop` receives the dragged id once the session has been closed.
pub fn bind_drop_target<R, F>(el: &Element, session: &SharedSession, resolve: R, on_drop: F)
where
    R: Fn(&DragEvent) -> Option<DropTarget> + 'static,
    F: Fn(String, DropTarget) + 'static,
{
    listen(el, "dragover", |ev: DragEvent| {
        ev.prevent_default();
    });

    let session = session.clone();
    listen(el, "drop", move |ev: DragEvent| {
        ev.prevent_default();
        if !session.borrow().is_dragging() {
            return;
        }
        ev.stop_propagation();
        let Some(target) = resolve(&ev) else {
            return;
        };
        // Release the borrow before handing control to the page
        let outcome = session.borrow_mut().drop_on(target);
        match outcome {
            Some(DragOutcome::Dropped { source, target }) => on_drop(source, target),
            Some(DragOutcome::Cancelled) => tracing::debug!("dropped onto itself"),
            None => {}
        }
    });
}
