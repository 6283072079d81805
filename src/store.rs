//! Timeline State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Goal, MilestoneTask};

/// Tasks of the milestone shown in the modal
#[derive(Clone, Debug, PartialEq)]
pub enum MilestoneTasks {
    Loading,
    Loaded(Vec<MilestoneTask>),
    Failed,
}

/// What the detail modal shows
#[derive(Clone, Debug, PartialEq)]
pub enum Detail {
    Milestone {
        id: i64,
        title: String,
        tasks: MilestoneTasks,
    },
    Goal(Goal),
}

/// Timeline page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TimelineState {
    /// Goals in server order
    pub goals: Vec<Goal>,
    /// Open modal content, if any
    pub detail: Option<Detail>,
}

/// Type alias for the store
pub type TimelineStore = Store<TimelineState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_goals(store: &TimelineStore) -> Vec<Goal> {
    store.goals().get()
}

pub fn store_set_goals(store: &TimelineStore, goals: Vec<Goal>) {
    *store.goals().write() = goals;
}

pub fn store_detail(store: &TimelineStore) -> Option<Detail> {
    store.detail().get()
}

pub fn store_open_detail(store: &TimelineStore, detail: Detail) {
    *store.detail().write() = Some(detail);
}

pub fn store_close_detail(store: &TimelineStore) {
    *store.detail().write() = None;
}

/// Fill in a milestone's tasks, unless the modal moved on to something else
pub fn store_set_milestone_tasks(store: &TimelineStore, milestone_id: i64, loaded: MilestoneTasks) {
    let field = store.detail();
    let mut detail = field.write();
    if let Some(Detail::Milestone { id, tasks, .. }) = &mut *detail {
        if *id == milestone_id {
            *tasks = loaded;
        }
    }
}
