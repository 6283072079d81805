//! Timeline View Component
//!
//! X-axis, one bar and label per goal, one point per milestone.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::MilestoneModal;
use crate::config::TimelineConfig;
use crate::context::TimelineContext;
use crate::models::{Goal, Milestone};
use crate::store::{store_goals, store_set_goals, TimelineState};
use crate::timeline::{placed_goals, TimeWindow};

#[component]
pub fn TimelineView(config: TimelineConfig, today: NaiveDate) -> impl IntoView {
    let store = Store::new(TimelineState::default());
    provide_context(TimelineContext::new(store));

    spawn_local(async move {
        match api::timeline_data().await {
            Ok(goals) => {
                tracing::info!(goals = goals.len(), "timeline data loaded");
                store_set_goals(&store, goals);
            }
            Err(error) => tracing::error!(%error, "failed loading timeline data"),
        }
    });

    let mode = config.window;
    let window = Memo::new(move |_| TimeWindow::for_mode(mode, &store_goals(&store), today));

    let axis = move || {
        window
            .get()
            .month_ticks()
            .into_iter()
            .map(|tick| {
                view! {
                    <div class="marker" style=format!("left: {}%;", tick.left)>
                        <span>{tick.label}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let rows = move || {
        let window = window.get();
        placed_goals(store_goals(&store))
            .into_iter()
            .enumerate()
            .map(|(index, (goal, due))| {
                view! { <GoalRow goal=goal due=due index=index window=window config=config.clone() /> }
            })
            .collect_view()
    };

    view! {
        <div class="x-axis">{axis}</div>
        {rows}
        <MilestoneModal />
    }
}

/// Bar, label and milestone points of one goal
#[component]
fn GoalRow(goal: Goal, due: NaiveDate, index: usize, window: TimeWindow, config: TimelineConfig) -> impl IntoView {
    let ctx = use_context::<TimelineContext>().expect("TimelineContext should be provided");

    let top = config.top_offset + index as f64 * config.row_height;
    let bar = window.bar(goal.start(), due);
    let color = goal.color.clone().filter(|c| !c.is_empty()).unwrap_or(config.default_color);
    let title = goal.title.clone();
    let milestones = goal.milestones.clone();

    view! {
        <div
            class="goal-line"
            style=format!(
                "top: {top}px; left: {}%; width: {}%; background-color: {color};",
                bar.left,
                bar.width,
            )
            on:click=move |_| ctx.open_goal(goal.clone())
        ></div>
        <div class="goal-label" style=format!("top: {}px; left: {}%;", top - 20.0, bar.left)>
            {title}
        </div>
        {milestones
            .into_iter()
            .filter_map(|milestone| milestone_point(ctx, milestone, window, top))
            .collect_view()}
    }
}

fn milestone_point(ctx: TimelineContext, milestone: Milestone, window: TimeWindow, top: f64) -> Option<impl IntoView> {
    let left = window.percent(milestone.due_date?);
    let id = milestone.id;
    let title = milestone.title;
    Some(view! {
        <div
            class="milestone-point"
            style=format!("top: {top}px; left: {left}%;")
            data-milestone-id=id.to_string()
            data-title=title.clone()
            on:click=move |ev| {
                ev.stop_propagation();
                ctx.open_milestone(id, title.clone());
            }
        ></div>
    })
}
