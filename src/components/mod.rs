//! UI Components
//!
//! Leptos components mounted into server-rendered containers.

mod habit_grid;
mod milestone_modal;
mod timeline_view;

pub use habit_grid::HabitGrid;
pub use milestone_modal::MilestoneModal;
pub use timeline_view::TimelineView;
