//! Timeline Endpoints

use super::get_json;
use crate::error::ApiError;
use crate::models::{Goal, MilestoneTask};

pub async fn timeline_data() -> Result<Vec<Goal>, ApiError> {
    get_json("/timeline/api/timeline_data").await
}

pub async fn milestone_tasks(milestone_id: i64) -> Result<Vec<MilestoneTask>, ApiError> {
    get_json(&format!("/timeline/api/milestone_tasks/{milestone_id}")).await
}
