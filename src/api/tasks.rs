//! Task Endpoints
//!
//! Mutations issued by the list board and the calendar.

use serde::Serialize;

use super::{encode_component, post_empty, post_json};
use crate::error::ApiError;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ToggleArgs {
    completed: bool,
}

#[derive(Serialize)]
struct RenameArgs<'a> {
    #[serde(rename = "newName")]
    new_name: &'a str,
}

#[derive(Serialize)]
struct MoveArgs<'a> {
    #[serde(rename = "newList")]
    new_list: &'a str,
}

#[derive(Serialize)]
struct DateArgs<'a> {
    #[serde(rename = "newDate")]
    new_date: &'a str,
}

/// Child order of one container after a drop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderArgs {
    pub order: Vec<String>,
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
    #[serde(rename = "listName")]
    pub list_name: String,
}

impl OrderArgs {
    /// In-flight key: only a byte-identical order for the same container is
    /// a duplicate, so distinct drops in one list are all sent
    pub fn pending_key(&self) -> String {
        format!(
            "{}/{}/{}",
            self.list_name,
            self.parent_id.as_deref().unwrap_or(""),
            self.order.join(",")
        )
    }
}

// ========================
// Commands
// ========================

pub async fn toggle_task(id: &str, completed: bool) -> Result<(), ApiError> {
    let url = format!("/toggle_task/{}", encode_component(id));
    post_json(&url, &ToggleArgs { completed }).await?;
    Ok(())
}

pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    post_empty(&format!("/delete_task/{}", encode_component(id))).await?;
    Ok(())
}

pub async fn rename_task(id: &str, new_name: &str) -> Result<(), ApiError> {
    let url = format!("/rename_task/{}", encode_component(id));
    post_json(&url, &RenameArgs { new_name }).await?;
    Ok(())
}

pub async fn move_task(id: &str, new_list: &str) -> Result<(), ApiError> {
    let url = format!("/move_task/{}", encode_component(id));
    post_json(&url, &MoveArgs { new_list }).await?;
    Ok(())
}

pub async fn update_task_order(args: &OrderArgs) -> Result<(), ApiError> {
    post_json("/update_task_order", args).await?;
    Ok(())
}

/// `date` is `YYYY-MM-DD`
pub async fn update_task_date(id: &str, date: &str) -> Result<(), ApiError> {
    let url = format!("/update_task_date/{}", encode_component(id));
    post_json(&url, &DateArgs { new_date: date }).await?;
    Ok(())
}
