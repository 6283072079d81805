//! Month Cursor

use chrono::{Datelike, NaiveDate};

/// Month shown by the calendar page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    /// 1-based
    month: u32,
}

impl MonthCursor {
    /// `month` outside 1..=12 is clamped
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Parse the server-rendered `data-year` / `data-month` attributes
    pub fn parse(year: &str, month: &str) -> Option<Self> {
        let year = year.trim().parse().ok()?;
        let month: u32 = month.trim().parse().ok()?;
        (1..=12).contains(&month).then(|| Self::new(year, month))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Page route for this month
    pub fn url(&self) -> String {
        format!("/calendar?year={}&month={}", self.year, self.month)
    }

    /// Header text, e.g. "October 2026"
    pub fn title(&self) -> String {
        self.first_day()
            .map(|day| day.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps_years() {
        let jan = MonthCursor::new(2026, 1);
        assert_eq!(jan.previous(), MonthCursor::new(2025, 12));
        assert_eq!(MonthCursor::new(2026, 12).next(), MonthCursor::new(2027, 1));
        assert_eq!(jan.next().previous(), jan);
    }

    #[test]
    fn test_url_and_title() {
        let cursor = MonthCursor::new(2026, 10);
        assert_eq!(cursor.url(), "/calendar?year=2026&month=10");
        assert_eq!(cursor.title(), "October 2026");
        assert_eq!(cursor.previous().url(), "/calendar?year=2026&month=9");
    }

    #[test]
    fn test_parse() {
        assert_eq!(MonthCursor::parse("2026", " 3 "), Some(MonthCursor::new(2026, 3)));
        assert_eq!(MonthCursor::parse("2026", "13"), None);
        assert_eq!(MonthCursor::parse("soon", "3"), None);
        assert_eq!(MonthCursor::new(2026, 0).month(), 1);
    }
}
