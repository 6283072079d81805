//! DOM Helpers
//!
//! Thin wrappers over `web-sys` for the server-rendered pages.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, Node, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// Element the event was dispatched on
pub fn event_element(ev: &Event) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

/// `data-*` attribute value
pub fn data(el: &Element, key: &str) -> Option<String> {
    el.get_attribute(&format!("data-{key}"))
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn create_element(tag: &str) -> Option<Element> {
    document()?.create_element(tag).ok()
}

/// Bind an event listener for the lifetime of the page
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        tracing::warn!(event, ?err, "could not bind listener");
    }
    cb.forget();
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// `None` when the user cancels
pub fn prompt(message: &str, default: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message_and_default(message, default)
        .ok()
        .flatten()
}

pub fn navigate(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(url) {
            tracing::error!(url, ?err, "navigation failed");
        }
    }
}

pub fn reload() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().reload();
    }
}

/// Anti-forgery token from `<meta name="csrf-token">` or a hidden form field
pub fn csrf_token() -> Option<String> {
    query("meta[name=\"csrf-token\"]")
        .and_then(|meta| meta.get_attribute("content"))
        .or_else(|| {
            query("input[name=\"csrf_token\"]")
                .and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
        })
        .filter(|token| !token.is_empty())
}

/// Where a node sits in the tree, so an optimistic move can be undone
pub struct NodePosition {
    parent: Node,
    next: Option<Node>,
}

impl NodePosition {
    pub fn of(node: &Node) -> Option<Self> {
        Some(Self {
            parent: node.parent_node()?,
            next: node.next_sibling(),
        })
    }

    pub fn restore(&self, node: &Node) {
        if let Err(err) = self.parent.insert_before(node, self.next.as_ref()) {
            tracing::error!(?err, "could not restore node position");
        }
    }
}
