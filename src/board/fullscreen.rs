//! Fullscreen Cards
//!
//! At most one card is expanded at a time.

use web_sys::Element;

use crate::dom;

pub const EXPANDED_CLASS: &str = "expanded";

/// Which card, by list name, is expanded
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExpandedCard {
    current: Option<String>,
}

impl ExpandedCard {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Expand `list`; returns the card that had to collapse, if any
    pub fn expand(&mut self, list: &str) -> Option<String> {
        self.current
            .replace(list.to_string())
            .filter(|previous| previous != list)
    }

    pub fn collapse(&mut self) -> Option<String> {
        self.current.take()
    }
}

/// Apply the state to the page: only the named card keeps the class
pub fn apply(cards: &[Element], expanded: Option<&str>) {
    for card in cards {
        let is_expanded = expanded.is_some() && super::card_list_name(card).as_deref() == expanded;
        let classes = card.class_list();
        let _ = if is_expanded {
            classes.add_1(EXPANDED_CLASS)
        } else {
            classes.remove_1(EXPANDED_CLASS)
        };
        dom::set_style(card, "pointer-events", "auto");
    }
}
