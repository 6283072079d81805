//! Timeline Context
//!
//! Shared state provided via Leptos Context API to the timeline components.

use leptos::task::spawn_local;

use crate::api;
use crate::models::Goal;
use crate::store::{
    store_close_detail, store_open_detail, store_set_milestone_tasks, Detail, MilestoneTasks, TimelineStore,
};

#[derive(Clone, Copy)]
pub struct TimelineContext {
    pub store: TimelineStore,
}

impl TimelineContext {
    pub fn new(store: TimelineStore) -> Self {
        Self { store }
    }

    /// Open the modal for a milestone and load its tasks
    pub fn open_milestone(&self, milestone_id: i64, title: String) {
        store_open_detail(
            &self.store,
            Detail::Milestone {
                id: milestone_id,
                title,
                tasks: MilestoneTasks::Loading,
            },
        );
        let store = self.store;
        spawn_local(async move {
            let tasks = match api::milestone_tasks(milestone_id).await {
                Ok(tasks) => {
                    tracing::debug!(milestone_id, count = tasks.len(), "milestone tasks loaded");
                    MilestoneTasks::Loaded(tasks)
                }
                Err(error) => {
                    tracing::error!(milestone_id, %error, "failed loading milestone tasks");
                    MilestoneTasks::Failed
                }
            };
            store_set_milestone_tasks(&store, milestone_id, tasks);
        });
    }

    pub fn open_goal(&self, goal: Goal) {
        tracing::debug!(goal = %goal.title, "goal clicked");
        store_open_detail(&self.store, Detail::Goal(goal));
    }

    pub fn close(&self) {
        store_close_detail(&self.store);
    }
}
