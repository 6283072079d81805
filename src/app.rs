//! Planner Frontend Bootstrap
//!
//! Starts every component whose root element is on the current page.

use crate::board::{self, BoardController};
use crate::calendar::CalendarNavigator;
use crate::config::PageConfig;
use crate::{dom, habits, secret, timeline};

fn present(selector: &str) -> bool {
    dom::query(selector).is_some()
}

pub fn boot() {
    let config = PageConfig::load();
    let mut started = Vec::new();

    if present(board::CARD_SELECTOR) || present("#context-menu") {
        BoardController::new().bind();
        started.push("board");
    }

    if present("#prev-month") || present(".calendar-grid") {
        CalendarNavigator::new(config.calendar.clone()).bind();
        started.push("calendar");
    }

    if habits::mount(&config.habits) {
        started.push("habits");
    }

    if timeline::mount(&config.timeline) {
        started.push("timeline");
    }

    if present(secret::UNLOCK_SELECTOR) && secret::bind() > 0 {
        started.push("secret");
    }

    tracing::info!(components = ?started, "planner frontend started");
}
