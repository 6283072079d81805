//! Timeline Renderer
//!
//! Goals and milestones placed on a date axis by linear interpolation into
//! the window's 0..100% range.

use chrono::{Duration, Local, Months, NaiveDate};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::TimelineView;
use crate::config::{TimelineConfig, TimelineWindow};
use crate::dom;
use crate::models::Goal;

pub const DIAGRAM_ID: &str = "timeline-diagram";

/// Horizontal extent in percent of the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

/// Month marker on the x-axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub date: NaiveDate,
    pub left: f64,
    pub label: String,
}

/// Dates covered by the axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimeWindow {
    /// `today` until the same day next year
    pub fn fixed_year(today: NaiveDate) -> Self {
        let end = today
            .checked_add_months(Months::new(12))
            .unwrap_or(today + Duration::days(365));
        Self { start: today, end }
    }

    /// Earliest goal start to latest goal due date; the fixed year when the
    /// goals don't span at least one day. Undated goals are ignored.
    pub fn spanning(goals: &[Goal], today: NaiveDate) -> Self {
        let dated = || goals.iter().filter(|goal| goal.due_date.is_some());
        let start = dated().map(Goal::start).min();
        let end = dated().filter_map(|goal| goal.due_date).max();
        match (start, end) {
            (Some(start), Some(end)) if end > start => Self { start, end },
            _ => Self::fixed_year(today),
        }
    }

    pub fn for_mode(mode: TimelineWindow, goals: &[Goal], today: NaiveDate) -> Self {
        match mode {
            TimelineWindow::FixedYear => Self::fixed_year(today),
            TimelineWindow::DataSpan => Self::spanning(goals, today),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    fn span_days(&self) -> f64 {
        (self.end - self.start).num_days().max(1) as f64
    }

    /// Position of `date` in percent; outside the window yields <0 or >100
    pub fn percent(&self, date: NaiveDate) -> f64 {
        (date - self.start).num_days() as f64 / self.span_days() * 100.0
    }

    pub fn bar(&self, start: NaiveDate, due: NaiveDate) -> Span {
        let left = self.percent(start);
        Span {
            left,
            width: self.percent(due) - left,
        }
    }

    /// One tick per month from the window start, labelled "Oct 2026"
    pub fn month_ticks(&self) -> Vec<Tick> {
        let mut ticks = Vec::new();
        let mut step = 0;
        while let Some(date) = self.start.checked_add_months(Months::new(step)) {
            if date > self.end {
                break;
            }
            ticks.push(Tick {
                date,
                left: self.percent(date),
                label: date.format("%b %Y").to_string(),
            });
            step += 1;
        }
        ticks
    }
}

/// Goals that get a row, paired with their due date; undated goals are skipped
pub fn placed_goals(goals: Vec<Goal>) -> Vec<(Goal, NaiveDate)> {
    goals
        .into_iter()
        .filter_map(|goal| {
            let due = goal.due_date?;
            Some((goal, due))
        })
        .collect()
}

/// Mount the timeline into `#timeline-diagram` if the page has one
pub fn mount(config: &TimelineConfig) -> bool {
    let Some(diagram) = dom::element_by_id(DIAGRAM_ID).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        return false;
    };
    diagram.set_inner_html("");
    let config = config.clone();
    let today = Local::now().date_naive();
    leptos::mount::mount_to(diagram, move || view! { <TimelineView config=config today=today /> }).forget();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(start: Option<NaiveDate>, due: NaiveDate) -> Goal {
        Goal {
            id: None,
            title: "Goal".into(),
            description: None,
            start_date: start,
            due_date: Some(due),
            color: None,
            milestones: Vec::new(),
        }
    }

    #[test]
    fn test_half_year_goal_spans_half_the_axis() {
        let today = date(2026, 10, 15);
        let window = TimeWindow::fixed_year(today);
        assert_eq!(window.end(), date(2027, 10, 15));

        let bar = window.bar(today, date(2027, 4, 15));
        assert_eq!(bar.left, 0.0);
        assert!((bar.width - 50.0).abs() < 0.5, "width was {}", bar.width);
    }

    #[test]
    fn test_percent_outside_window() {
        let window = TimeWindow::fixed_year(date(2026, 10, 15));
        assert!(window.percent(date(2026, 1, 1)) < 0.0);
        assert!(window.percent(date(2028, 1, 1)) > 100.0);
        assert_eq!(window.percent(date(2027, 10, 15)), 100.0);
    }

    #[test]
    fn test_month_ticks_cover_window() {
        let window = TimeWindow::fixed_year(date(2026, 10, 15));
        let ticks = window.month_ticks();
        assert_eq!(ticks.len(), 13);
        assert_eq!(ticks[0].left, 0.0);
        assert_eq!(ticks[0].label, "Oct 2026");
        assert_eq!(ticks[12].date, date(2027, 10, 15));
        assert!(ticks.windows(2).all(|pair| pair[0].left < pair[1].left));
    }

    #[test]
    fn test_data_span_window() {
        let today = date(2026, 10, 15);
        let goals = vec![
            goal(Some(date(2026, 1, 1)), date(2026, 6, 30)),
            goal(Some(date(2026, 3, 1)), date(2027, 1, 1)),
        ];
        let window = TimeWindow::for_mode(TimelineWindow::DataSpan, &goals, today);
        assert_eq!(window.start(), date(2026, 1, 1));
        assert_eq!(window.end(), date(2027, 1, 1));

        // Without goals the fixed year is used
        assert_eq!(
            TimeWindow::for_mode(TimelineWindow::DataSpan, &[], today),
            TimeWindow::fixed_year(today)
        );
        assert_eq!(
            TimeWindow::for_mode(TimelineWindow::FixedYear, &goals, today),
            TimeWindow::fixed_year(today)
        );
    }

    #[test]
    fn test_missing_start_uses_legacy_default() {
        let goals = vec![goal(None, date(2026, 12, 31))];
        let window = TimeWindow::spanning(&goals, date(2026, 10, 15));
        assert_eq!(window.start(), date(2023, 1, 1));
    }

    #[test]
    fn test_undated_goals_get_no_row() {
        let today = date(2026, 10, 15);
        let mut undated = goal(Some(date(2020, 1, 1)), today);
        undated.due_date = None;
        undated.title = "Undated".into();
        let goals = vec![undated, goal(Some(date(2026, 3, 1)), date(2027, 1, 1))];

        let placed = placed_goals(goals.clone());
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].1, date(2027, 1, 1));

        // The undated goal's early start does not widen the window
        let window = TimeWindow::spanning(&goals, today);
        assert_eq!(window.start(), date(2026, 3, 1));
        assert_eq!(window.end(), date(2027, 1, 1));
    }
}
