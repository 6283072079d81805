//! Habit Grid Renderer
//!
//! One month grid per tracked habit for the current month. Weeks start on
//! Sunday; a day is marked when the log has an entry for that exact date with
//! the habit's flag set.

use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::api;
use crate::components::HabitGrid;
use crate::config::HabitPalette;
use crate::dom;
use crate::models::HabitEntry;

pub const WEEKDAY_LABELS: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub marked: bool,
}

pub type Week = [Option<DayCell>; 7];

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Weeks of the month with blanks before the 1st and after the last day
pub fn month_weeks(year: i32, month: u32, entries: &[HabitEntry], habit: &str) -> Vec<Week> {
    let mut weeks = Vec::new();
    let mut week: Week = Default::default();
    let mut has_days = false;

    for day in 1..=days_in_month(year, month) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else { continue };
        let key = date.format("%Y-%m-%d").to_string();
        let marked = entries
            .iter()
            .find(|entry| entry.habit_date == key)
            .is_some_and(|entry| entry.flag(habit));

        let column = date.weekday().num_days_from_sunday() as usize;
        week[column] = Some(DayCell { day, date, marked });
        has_days = true;
        if column == 6 {
            weeks.push(std::mem::take(&mut week));
            has_days = false;
        }
    }
    if has_days {
        weeks.push(week);
    }
    weeks
}

/// Fetch the log once and mount a grid into every configured container
/// present on the page. Returns whether any grid was mounted.
pub fn mount(palettes: &[HabitPalette]) -> bool {
    let today = Local::now().date_naive();
    let (entries, set_entries) = signal(Vec::<HabitEntry>::new());

    let mut mounted = 0;
    for palette in palettes {
        let container_id = palette.container_id();
        let Some(container) = dom::element_by_id(&container_id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        container.set_inner_html("");
        let palette = palette.clone();
        leptos::mount::mount_to(container, move || {
            view! {
                <HabitGrid
                    palette=palette.clone()
                    entries=entries
                    year=today.year()
                    month=today.month()
                />
            }
        })
        .forget();
        mounted += 1;
    }

    if mounted == 0 {
        return false;
    }
    spawn_local(async move {
        match api::habit_log().await {
            Ok(loaded) => {
                tracing::info!(entries = loaded.len(), "habit log loaded");
                set_entries.set(loaded);
            }
            Err(error) => tracing::error!(%error, "failed loading habit log"),
        }
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn entry(date: &str, flags: &[(&str, serde_json::Value)]) -> HabitEntry {
        HabitEntry {
            habit_date: date.to_string(),
            flags: flags.iter().map(|(k, v)| (k.to_string(), v.clone())).collect::<HashMap<_, _>>(),
        }
    }

    fn marked_days(weeks: &[Week]) -> Vec<u32> {
        weeks
            .iter()
            .flatten()
            .flatten()
            .filter(|cell| cell.marked)
            .map(|cell| cell.day)
            .collect()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn test_layout_starts_on_sunday() {
        // October 2026 starts on a Thursday and has 31 days
        let weeks = month_weeks(2026, 10, &[], "sport");
        assert_eq!(weeks.len(), 5);
        assert!(weeks[0][..4].iter().all(Option::is_none));
        assert_eq!(weeks[0][4].as_ref().map(|c| c.day), Some(1));
        assert_eq!(weeks[4][6].as_ref().map(|c| c.day), Some(31));

        let cells: Vec<u32> = weeks.iter().flatten().flatten().map(|c| c.day).collect();
        assert_eq!(cells, (1..=31).collect::<Vec<_>>());
    }

    #[test]
    fn test_marked_iff_exact_date_and_flag() {
        let entries = vec![
            entry("2026-10-01", &[("alcohol", 1.into()), ("sport", 0.into())]),
            entry("2026-10-05", &[("sport", true.into())]),
            entry("2026-10-5", &[("sport", 1.into())]),
            entry("2026-09-07", &[("sport", 1.into())]),
        ];
        assert_eq!(marked_days(&month_weeks(2026, 10, &entries, "alcohol")), vec![1]);
        assert_eq!(marked_days(&month_weeks(2026, 10, &entries, "sport")), vec![5]);
        assert!(marked_days(&month_weeks(2026, 10, &entries, "smoke")).is_empty());
    }
}
