//! Habit Endpoints

use super::get_json;
use crate::error::ApiError;
use crate::models::HabitEntry;

pub async fn habit_log() -> Result<Vec<HabitEntry>, ApiError> {
    get_json("/habits/api/habits").await
}
