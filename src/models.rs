//! Frontend Models
//!
//! JSON shapes returned by the planner server.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Truthiness of a JSON flag; SQLite rows send `0`/`1`
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => s == "1" || s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

/// `YYYY-MM-DD`, with blank, null or malformed values decoded as `None`
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok(),
        _ => None,
    })
}

/// Task entry of the calendar's JSON listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalendarTask {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// One day of the habit log
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HabitEntry {
    pub habit_date: String,
    #[serde(flatten)]
    pub flags: HashMap<String, Value>,
}

impl HabitEntry {
    pub fn flag(&self, key: &str) -> bool {
        self.flags.get(key).is_some_and(is_truthy)
    }
}

/// Goal with its milestones
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    /// Goals without a usable due date are not placed on the timeline
    #[serde(default, deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Goal {
    /// Goals created before start dates existed begin on 2023-01-01
    pub fn start(&self) -> NaiveDate {
        self.start_date
            .or_else(|| NaiveDate::from_ymd_opt(2023, 1, 1))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub progress: Option<f64>,
}

/// Task attached to a milestone
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MilestoneTask {
    pub title: String,
    #[serde(default, deserialize_with = "truthy")]
    pub completed: bool,
}
