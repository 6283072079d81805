//! Milestone Modal Component
//!
//! Detail overlay of the timeline: a milestone's tasks or a goal's
//! description and milestones. Closes on the close control or a backdrop click.

use leptos::prelude::*;

use crate::context::TimelineContext;
use crate::models::{Goal, MilestoneTask};
use crate::store::{store_detail, Detail, MilestoneTasks};

const EMPTY_TASKS: &str = "Keine Aufgaben für diesen Milestone.";
const TASKS_FAILED: &str = "Fehler beim Laden der Aufgaben.";

/// Line shown for a milestone task
pub fn task_label(task: &MilestoneTask) -> String {
    if task.completed {
        format!("{} (Erledigt)", task.title)
    } else {
        task.title.clone()
    }
}

#[component]
pub fn MilestoneModal() -> impl IntoView {
    let ctx = use_context::<TimelineContext>().expect("TimelineContext should be provided");
    let store = ctx.store;

    move || {
        store_detail(&store).map(|detail| {
            let (title, body) = match detail {
                Detail::Milestone { title, tasks, .. } => (title, milestone_body(tasks).into_any()),
                Detail::Goal(goal) => (goal.title.clone(), goal_body(goal).into_any()),
            };
            view! {
                <div class="modal" style="display: block;" on:click=move |_| ctx.close()>
                    <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                        <span class="close" on:click=move |_| ctx.close()>"×"</span>
                        <h2 class="modal-title">{title}</h2>
                        <div class="modal-detail">{body}</div>
                    </div>
                </div>
            }
        })
    }
}

fn milestone_body(tasks: MilestoneTasks) -> impl IntoView {
    match tasks {
        MilestoneTasks::Loading => view! { <p class="loading">"…"</p> }.into_any(),
        MilestoneTasks::Failed => view! { <p class="error">{TASKS_FAILED}</p> }.into_any(),
        MilestoneTasks::Loaded(tasks) if tasks.is_empty() => view! { <p>{EMPTY_TASKS}</p> }.into_any(),
        MilestoneTasks::Loaded(tasks) => view! {
            <ul>
                {tasks
                    .iter()
                    .map(|task| {
                        view! { <li class:completed=task.completed>{task_label(task)}</li> }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    }
}

fn goal_body(goal: Goal) -> impl IntoView {
    let description = goal.description.filter(|text| !text.trim().is_empty());
    view! {
        {description.map(|text| view! { <p class="goal-description">{text}</p> })}
        <ul class="goal-milestones">
            {goal
                .milestones
                .into_iter()
                .map(|milestone| {
                    let progress = milestone.progress.unwrap_or(0.0).round();
                    view! { <li>{format!("{}: {progress}%", milestone.title)}</li> }
                })
                .collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_tasks_are_suffixed() {
        let done = MilestoneTask {
            title: "Draft".into(),
            completed: true,
        };
        let open = MilestoneTask {
            title: "Review".into(),
            completed: false,
        };
        assert_eq!(task_label(&done), "Draft (Erledigt)");
        assert_eq!(task_label(&open), "Review");
    }
}
