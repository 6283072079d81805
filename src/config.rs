//! Page Configuration
//!
//! Optional `<script type="application/json" id="page-config">` block rendered
//! by the server. Every field has a default, so a missing or partial block
//! still yields a usable configuration.

use serde::Deserialize;

use crate::dom;

const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub habits: Vec<HabitPalette>,
    pub timeline: TimelineConfig,
    pub calendar: CalendarConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            habits: default_habits(),
            timeline: TimelineConfig::default(),
            calendar: CalendarConfig::default(),
        }
    }
}

/// One tracked habit and the grid it renders into
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HabitPalette {
    /// Flag name in the habit log entries
    pub key: String,
    /// Container element id; defaults to `calendar-grid-{key}`
    #[serde(default)]
    pub container: Option<String>,
    pub color: String,
}

impl HabitPalette {
    fn new(key: &str, color: &str) -> Self {
        Self {
            key: key.to_string(),
            container: None,
            color: color.to_string(),
        }
    }

    pub fn container_id(&self) -> String {
        self.container
            .clone()
            .unwrap_or_else(|| format!("calendar-grid-{}", self.key))
    }
}

fn default_habits() -> Vec<HabitPalette> {
    vec![
        HabitPalette::new("alcohol", "#ff9999"),
        HabitPalette::new("smoke", "#cccccc"),
        HabitPalette::new("sport", "#99ff99"),
    ]
}

/// Which dates the timeline axis covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineWindow {
    /// Today until today + 1 year
    #[default]
    FixedYear,
    /// Earliest goal start until latest goal due date
    DataSpan,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub window: TimelineWindow,
    #[serde(default = "timeline_default_row_height")]
    pub row_height: f64,
    #[serde(default = "timeline_default_top_offset")]
    pub top_offset: f64,
    #[serde(default = "timeline_default_color")]
    pub default_color: String,
}

fn timeline_default_row_height() -> f64 {
    60.0
}

fn timeline_default_top_offset() -> f64 {
    50.0
}

fn timeline_default_color() -> String {
    "#007bff".to_string()
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            window: TimelineWindow::default(),
            row_height: timeline_default_row_height(),
            top_offset: timeline_default_top_offset(),
            default_color: timeline_default_color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "calendar_default_recurring_param")]
    pub include_recurring_param: String,
}

fn calendar_default_recurring_param() -> String {
    "include_recurring".to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            include_recurring_param: calendar_default_recurring_param(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: PageConfig = serde_json::from_str(raw)?;
        config.sanitize();
        Ok(config)
    }

    /// Read the page's config block, falling back to defaults
    pub fn load() -> Self {
        let Some(raw) = dom::element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
            return Self::default();
        };
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&raw) {
            Ok(config) => {
                tracing::debug!(habits = config.habits.len(), window = ?config.timeline.window, "loaded page config");
                config
            }
            Err(error) => {
                tracing::error!(%error, "failed parsing page config; using defaults");
                Self::default()
            }
        }
    }

    fn sanitize(&mut self) {
        if self.timeline.row_height <= 0.0 {
            self.timeline.row_height = timeline_default_row_height();
        }
        if self.timeline.default_color.trim().is_empty() {
            self.timeline.default_color = timeline_default_color();
        }
        if self.calendar.include_recurring_param.trim().is_empty() {
            self.calendar.include_recurring_param = calendar_default_recurring_param();
        }
        self.habits.retain(|habit| !habit.key.trim().is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.habits.len(), 3);
        assert_eq!(config.habits[0].container_id(), "calendar-grid-alcohol");
        assert_eq!(config.timeline.window, TimelineWindow::FixedYear);
        assert_eq!(config.timeline.row_height, 60.0);
    }

    #[test]
    fn test_partial_timeline_block() {
        let config = PageConfig::from_json(
            r#"{"timeline": {"window": "data_span", "row_height": 0}}"#,
        )
        .unwrap();
        assert_eq!(config.timeline.window, TimelineWindow::DataSpan);
        assert_eq!(config.timeline.row_height, 60.0);
        assert_eq!(config.timeline.top_offset, 50.0);
        assert_eq!(config.timeline.default_color, "#007bff");
    }

    #[test]
    fn test_custom_habits() {
        let config = PageConfig::from_json(
            r##"{"habits": [{"key": "read", "container": "grid-read", "color": "#abcdef"}, {"key": " ", "color": "#000"}]}"##,
        )
        .unwrap();
        assert_eq!(config.habits.len(), 1);
        assert_eq!(config.habits[0].container_id(), "grid-read");
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(PageConfig::from_json("{habits: }").is_err());
    }
}
