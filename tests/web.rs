//! Browser tests on a synthetic board
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use chrono::NaiveDate;
use dragdrop::{DropTarget, Placement};
use leptos::prelude::*;
use planner_ui::board::{reorder, toggle};
use planner_ui::components::MilestoneModal;
use planner_ui::context::TimelineContext;
use planner_ui::dom::{self, NodePosition};
use planner_ui::models::{Goal, Milestone};
use planner_ui::store::{store_open_detail, Detail, TimelineState};
use reactive_stores::Store;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mount a one-list board with tasks 1..=3 incomplete and replace any
/// previous fixture
fn board_fixture() -> Element {
    let doc = dom::document().unwrap();
    if let Some(old) = doc.get_element_by_id("fixture") {
        old.remove();
    }
    let root = doc.create_element("div").unwrap();
    root.set_id("fixture");
    root.set_inner_html(
        r#"<div class="card" data-list-name="Inbox">
             <h2>Inbox</h2>
             <ul id="incomplete-tasks-Inbox" class="task-list">
               <li data-task-id="1"><span class="task-title">One</span></li>
               <li data-task-id="2"><span class="task-title">Two</span>
                 <ul class="task-list"><li data-task-id="21">Child</li></ul>
               </li>
               <li data-task-id="3"><span class="task-title">Three</span></li>
             </ul>
             <ul id="completed-tasks-Inbox" class="task-list"></ul>
           </div>"#,
    );
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn by_id(id: &str) -> Element {
    dom::element_by_id(id).unwrap()
}

fn task(id: &str) -> Element {
    planner_ui::board::task_element(id).unwrap()
}

#[wasm_bindgen_test]
fn toggle_moves_task_between_containers() {
    board_fixture();
    let item = task("1");

    assert!(toggle::place_task(&item, "Inbox", true));
    assert_eq!(reorder::child_task_ids(&by_id("completed-tasks-Inbox")), vec!["1"]);
    assert_eq!(reorder::child_task_ids(&by_id("incomplete-tasks-Inbox")), vec!["2", "3"]);
    let style = item.dyn_ref::<HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("text-decoration").unwrap(), "line-through");

    // Toggling back restores container and styling
    assert!(toggle::place_task(&item, "Inbox", false));
    assert!(reorder::child_task_ids(&by_id("completed-tasks-Inbox")).is_empty());
    assert!(reorder::child_task_ids(&by_id("incomplete-tasks-Inbox")).contains(&"1".to_string()));
    let style = item.dyn_ref::<HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("text-decoration").unwrap(), "none");
}

#[wasm_bindgen_test]
fn toggle_without_container_leaves_task_in_place() {
    board_fixture();
    let item = task("3");
    assert!(!toggle::place_task(&item, "Elsewhere", true));
    assert_eq!(reorder::child_task_ids(&by_id("incomplete-tasks-Inbox")), vec!["1", "2", "3"]);
}

#[wasm_bindgen_test]
fn drop_reports_the_visible_order() {
    board_fixture();
    let container = by_id("incomplete-tasks-Inbox");
    let dragged = task("3");

    let target = DropTarget::Item { id: "1".into(), placement: Placement::Before };
    let order = reorder::apply_drop(&container, &dragged, "3", &target).unwrap();
    assert_eq!(order, vec!["3", "1", "2"]);
    assert_eq!(order, reorder::child_task_ids(&container));
    assert_eq!(order[0], "3");
}

#[wasm_bindgen_test]
fn drop_after_and_on_container() {
    board_fixture();
    let container = by_id("incomplete-tasks-Inbox");

    let target = DropTarget::Item { id: "2".into(), placement: Placement::After };
    let order = reorder::apply_drop(&container, &task("1"), "1", &target).unwrap();
    assert_eq!(order, vec!["2", "1", "3"]);
    assert_eq!(order, reorder::child_task_ids(&container));

    let order = reorder::apply_drop(&container, &task("2"), "2", &DropTarget::Container).unwrap();
    assert_eq!(order, vec!["1", "3", "2"]);
    assert_eq!(order, reorder::child_task_ids(&container));
}

#[wasm_bindgen_test]
fn drop_into_nested_list_reports_parent() {
    board_fixture();
    let nested = task("2").query_selector(".task-list").unwrap().unwrap();

    let order = reorder::apply_drop(&nested, &task("3"), "3", &DropTarget::Container).unwrap();
    assert_eq!(order, vec!["21", "3"]);
    assert_eq!(reorder::parent_task_id(&nested).as_deref(), Some("2"));
    assert_eq!(reorder::parent_task_id(&by_id("incomplete-tasks-Inbox")), None);
}

#[wasm_bindgen_test]
fn drop_into_own_subtree_is_refused() {
    board_fixture();
    let nested = task("2").query_selector(".task-list").unwrap().unwrap();
    assert!(reorder::apply_drop(&nested, &task("2"), "2", &DropTarget::Container).is_none());
    assert_eq!(reorder::child_task_ids(&by_id("incomplete-tasks-Inbox")), vec!["1", "2", "3"]);
}

#[wasm_bindgen_test]
fn rejected_reorder_puts_task_back() {
    board_fixture();
    let container = by_id("incomplete-tasks-Inbox");
    let dragged = task("1");
    let before = reorder::child_task_ids(&container);

    let previous = NodePosition::of(&dragged).unwrap();
    let target = DropTarget::Item { id: "3".into(), placement: Placement::After };
    reorder::apply_drop(&container, &dragged, "1", &target).unwrap();
    assert_eq!(reorder::child_task_ids(&container), vec!["2", "3", "1"]);

    previous.restore(&dragged);
    assert_eq!(reorder::child_task_ids(&container), before);
}

#[wasm_bindgen_test]
fn rejected_move_out_of_nested_list_puts_task_back() {
    board_fixture();
    let nested = task("2").query_selector(".task-list").unwrap().unwrap();
    let top = by_id("incomplete-tasks-Inbox");
    let child = task("21");

    let previous = NodePosition::of(&child).unwrap();
    reorder::apply_drop(&top, &child, "21", &DropTarget::Container).unwrap();
    assert!(reorder::child_task_ids(&nested).is_empty());
    assert_eq!(reorder::child_task_ids(&top), vec!["1", "2", "3", "21"]);

    previous.restore(&child);
    assert_eq!(reorder::child_task_ids(&nested), vec!["21"]);
    assert_eq!(reorder::child_task_ids(&top), vec!["1", "2", "3"]);
}

#[wasm_bindgen_test]
fn delete_removes_exactly_one_task() {
    let root = board_fixture();
    let count = || dom::query_all("#fixture li[data-task-id]").len();
    assert_eq!(count(), 4);

    planner_ui::board::task_element("3").unwrap().remove();
    assert_eq!(count(), 3);
    assert!(planner_ui::board::task_element("3").is_none());
    assert_eq!(reorder::child_task_ids(&by_id("incomplete-tasks-Inbox")), vec!["1", "2"]);
    assert!(root.query_selector("li[data-task-id=\"21\"]").unwrap().is_some());
}

#[wasm_bindgen_test]
fn goal_modal_does_not_reuse_page_ids() {
    let doc = dom::document().unwrap();
    if let Some(old) = doc.get_element_by_id("modal-fixture") {
        old.remove();
    }
    let host = doc.create_element("div").unwrap();
    host.set_id("modal-fixture");
    // The server template's own modal
    host.set_inner_html(r#"<h2 id="modal-title"></h2><div id="modal-detail"></div><div id="modal-host"></div>"#);
    doc.body().unwrap().append_child(&host).unwrap();
    let mount_point = by_id("modal-host").dyn_into::<HtmlElement>().unwrap();

    let goal = Goal {
        id: Some(1),
        title: "Launch".into(),
        description: Some("Ship it".into()),
        start_date: None,
        due_date: NaiveDate::from_ymd_opt(2027, 3, 31),
        color: None,
        milestones: vec![Milestone {
            id: 10,
            title: "Plan".into(),
            due_date: None,
            progress: Some(80.0),
        }],
    };
    leptos::mount::mount_to(mount_point, move || {
        let store = Store::new(TimelineState::default());
        store_open_detail(&store, Detail::Goal(goal));
        provide_context(TimelineContext::new(store));
        view! { <MilestoneModal /> }
    })
    .forget();

    assert_eq!(doc.query_selector_all("#modal-title").unwrap().length(), 1);
    assert_eq!(doc.query_selector_all("#modal-detail").unwrap().length(), 1);
    let title = doc.query_selector("#modal-host .modal-title").unwrap().unwrap();
    assert_eq!(title.text_content().as_deref(), Some("Launch"));
    let detail = doc.query_selector("#modal-host .modal-detail").unwrap().unwrap();
    assert!(detail.text_content().unwrap_or_default().contains("Plan: 80%"));
}
