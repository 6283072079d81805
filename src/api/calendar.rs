//! Calendar Endpoints

use serde::Deserialize;

use super::{encode_component, get_json};
use crate::calendar::MonthCursor;
use crate::error::ApiError;
use crate::models::CalendarTask;

#[derive(Deserialize)]
struct CalendarListing {
    #[serde(default)]
    tasks: Vec<CalendarTask>,
}

/// Calendar URL for a month, with or without recurring tasks
pub fn calendar_url(cursor: MonthCursor, recurring_param: &str, include_recurring: bool) -> String {
    format!(
        "/calendar?year={}&month={}&{}={}",
        cursor.year(),
        cursor.month(),
        encode_component(recurring_param),
        if include_recurring { 1 } else { 0 },
    )
}

pub async fn calendar_tasks(
    cursor: MonthCursor,
    recurring_param: &str,
    include_recurring: bool,
) -> Result<Vec<CalendarTask>, ApiError> {
    let listing: CalendarListing = get_json(&calendar_url(cursor, recurring_param, include_recurring)).await?;
    Ok(listing.tasks)
}
