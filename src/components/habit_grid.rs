//! Habit Grid Component
//!
//! Month table for one habit.

use leptos::prelude::*;

use crate::config::HabitPalette;
use crate::habits::{month_weeks, WEEKDAY_LABELS};
use crate::models::HabitEntry;

#[component]
pub fn HabitGrid(
    palette: HabitPalette,
    entries: ReadSignal<Vec<HabitEntry>>,
    year: i32,
    month: u32,
) -> impl IntoView {
    let yes_class = format!("{}-yes", palette.key);
    let yes_style = format!("background-color: {};", palette.color);
    let key = palette.key;

    let rows = move || {
        month_weeks(year, month, &entries.get(), &key)
            .into_iter()
            .map(|week| {
                let cells = week
                    .into_iter()
                    .map(|cell| match cell {
                        Some(cell) if cell.marked => view! {
                            <td class=yes_class.clone() style=yes_style.clone()>{cell.day}</td>
                        }
                        .into_any(),
                        Some(cell) => view! { <td>{cell.day}</td> }.into_any(),
                        None => view! { <td></td> }.into_any(),
                    })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view()
    };

    view! {
        <table class="calendar-table">
            <tr>
                {WEEKDAY_LABELS.iter().map(|label| view! { <th>{*label}</th> }).collect_view()}
            </tr>
            {rows}
        </table>
    }
}
