//! Calendar Navigator
//!
//! Month navigation, the recurring-tasks toggle and dropping tasks onto days.

mod cursor;

pub use cursor::MonthCursor;

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::Local;
use dragdrop::{bind_draggable, bind_drop_target, create_session, DropTarget, SharedSession};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, MouseEvent};

use crate::api::{self, FailureNotice, InFlight};
use crate::config::CalendarConfig;
use crate::dom::{self, NodePosition};
use crate::models::CalendarTask;

const TASK_SELECTOR: &str = ".day-task";
const DAY_SELECTOR: &str = ".day[data-date]";

/// Group tasks by their exact date string
pub fn tasks_by_date(tasks: &[CalendarTask]) -> BTreeMap<&str, Vec<&CalendarTask>> {
    let mut by_date: BTreeMap<&str, Vec<&CalendarTask>> = BTreeMap::new();
    for task in tasks {
        by_date.entry(task.date.as_str()).or_default().push(task);
    }
    by_date
}

/// Calendar page controller
#[derive(Clone)]
pub struct CalendarNavigator {
    cursor: Rc<Cell<MonthCursor>>,
    session: SharedSession,
    in_flight: InFlight,
    config: CalendarConfig,
}

impl CalendarNavigator {
    pub fn new(config: CalendarConfig) -> Self {
        let cursor = dom::query(".calendar-grid")
            .and_then(|grid| MonthCursor::parse(&dom::data(&grid, "year")?, &dom::data(&grid, "month")?))
            .unwrap_or_else(|| MonthCursor::containing(Local::now().date_naive()));
        Self {
            cursor: Rc::new(Cell::new(cursor)),
            session: create_session(),
            in_flight: InFlight::new(),
            config,
        }
    }

    pub fn bind(&self) {
        self.bind_navigation();
        self.bind_recurring_toggle();
        for task in dom::query_all(TASK_SELECTOR) {
            self.bind_task(&task);
        }
        for day in dom::query_all(DAY_SELECTOR) {
            self.bind_day(&day);
        }
        tracing::debug!(year = self.cursor.get().year(), month = self.cursor.get().month(), "calendar bound");
    }

    fn bind_navigation(&self) {
        if let Some(header) = dom::element_by_id("current-month") {
            header.set_text_content(Some(&self.cursor.get().title()));
        }

        let steps: [(&str, fn(MonthCursor) -> MonthCursor); 2] =
            [("prev-month", MonthCursor::previous), ("next-month", MonthCursor::next)];
        for (id, step) in steps {
            let Some(button) = dom::element_by_id(id) else {
                tracing::warn!(id, "calendar navigation button missing");
                continue;
            };
            let cursor = self.cursor.clone();
            dom::listen(&button, "click", move |_ev: MouseEvent| {
                let next = step(cursor.get());
                cursor.set(next);
                dom::navigate(&next.url());
            });
        }
    }

    fn bind_recurring_toggle(&self) {
        let Some(toggle) = dom::element_by_id("show-recurring-tasks") else {
            return;
        };
        let this = self.clone();
        dom::listen(&toggle, "change", move |ev: Event| {
            let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            let include = input.checked();
            let this = this.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let param = this.config.include_recurring_param.clone();
                match api::calendar_tasks(this.cursor.get(), &param, include).await {
                    Ok(tasks) => {
                        tracing::info!(count = tasks.len(), include, "calendar tasks reloaded");
                        this.render_tasks(&tasks);
                    }
                    Err(error) => tracing::error!(%error, "failed loading calendar tasks"),
                }
            });
        });
    }

    /// Replace every day's task listing with `tasks`
    fn render_tasks(&self, tasks: &[CalendarTask]) {
        let by_date = tasks_by_date(tasks);
        for day in dom::query_all(DAY_SELECTOR) {
            let Some(date) = dom::data(&day, "date") else { continue };
            let container = task_container(&day);
            container.set_inner_html("");
            for task in by_date.get(date.as_str()).into_iter().flatten() {
                let Some(el) = dom::create_element("div") else { continue };
                el.set_class_name("day-task");
                el.set_text_content(Some(&task.title));
                if let Some(category) = &task.category {
                    let _ = el.set_attribute("data-category", category);
                }
                if let Some(id) = task.id {
                    let _ = el.set_attribute("data-task-id", &id.to_string());
                    self.bind_task(&el);
                }
                let _ = container.append_child(&el);
            }
        }
    }

    fn bind_task(&self, task: &Element) {
        if let Some(id) = dom::data(task, "task-id") {
            bind_draggable(task, &self.session, &id);
        }
    }

    fn bind_day(&self, day: &Element) {
        let Some(date) = dom::data(day, "date") else { return };
        let this = self.clone();
        let target_day = day.clone();
        bind_drop_target(
            day,
            &self.session,
            |_ev| Some(DropTarget::Container),
            move |task_id, _target| this.drop_task(&target_day, &date, task_id),
        );
    }

    /// Move the task into the day optimistically; reload once the server agrees
    fn drop_task(&self, day: &Element, date: &str, task_id: String) {
        let selector = format!("{TASK_SELECTOR}[data-task-id=\"{task_id}\"]");
        let Some(task) = dom::query(&selector) else {
            tracing::warn!(task_id = %task_id, "dropped task is no longer on the page");
            return;
        };
        let Some(previous) = NodePosition::of(&task) else { return };
        let _ = task_container(day).append_child(&task);
        tracing::debug!(task_id = %task_id, date, "task dropped on day");

        let guard = self.in_flight.try_begin("date", &task_id);
        let date = date.to_string();
        let request = async move {
            let _guard = guard?;
            api::update_task_date(&task_id, &date).await
        };
        api::submit_or_revert(
            "update_task_date",
            request,
            FailureNotice::Log,
            |_| dom::reload(),
            move || previous.restore(&task),
        );
    }
}

/// Day cells hold their tasks in `.task-container`; older templates don't
fn task_container(day: &Element) -> Element {
    day.query_selector(".task-container")
        .ok()
        .flatten()
        .unwrap_or_else(|| day.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, date: &str) -> CalendarTask {
        CalendarTask {
            id: None,
            title: title.to_string(),
            date: date.to_string(),
            category: None,
        }
    }

    #[test]
    fn test_tasks_by_date_exact_match() {
        let tasks = vec![
            task("Dentist", "2026-10-02"),
            task("Gym", "2026-10-15"),
            task("Call mom", "2026-10-02"),
            task("Late", "2026-10-2"),
        ];
        let grouped = tasks_by_date(&tasks);
        let titles: Vec<&str> = grouped["2026-10-02"].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Dentist", "Call mom"]);
        assert_eq!(grouped["2026-10-15"].len(), 1);
        assert_eq!(grouped["2026-10-2"].len(), 1);
        assert!(!grouped.contains_key("2026-10-03"));
    }
}
