//! Task list for the signed-in home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by `HomePage` without props. The component owns its own fetch of
//! `/api/tasks`; the page does no filtering on its behalf.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;

use crate::app::ADD_TASK_PATH;
use crate::net::types::TaskSummary;
use crate::state::tasks::TasksState;

pub fn tasks_heading(count: usize) -> String {
    match count {
        1 => "1 task".to_owned(),
        n => format!("{n} tasks"),
    }
}

pub fn task_meta(task: &TaskSummary) -> Option<String> {
    task.created_at.as_ref().map(|ts| format!("Created {ts}"))
}

fn load_tasks(tasks: RwSignal<TasksState>) {
    tasks.update(TasksState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_tasks().await;
        if let Err(e) = &result {
            log::warn!("task fetch failed: {e}");
        }
        // The page may have navigated away while the request was in flight.
        let _ = tasks.try_update(|s| s.finish_load(result));
    });
}

/// Current user's tasks with loading, error, and empty states.
#[component]
pub fn Tasks() -> impl IntoView {
    let tasks = RwSignal::new(TasksState::default());
    load_tasks(tasks);

    view! {
        <section class="mx-8 my-6">
            <Show when=move || tasks.with(|s| s.error.is_some())>
                <p class="text-red-600 mb-4">
                    {move || tasks.with(|s| s.error.clone().unwrap_or_default())}
                    <button class="ml-4 underline" on:click=move |_| load_tasks(tasks)>
                        "Retry"
                    </button>
                </p>
            </Show>
            <Show
                when=move || !tasks.with(|s| s.loading)
                fallback=|| view! { <p class="text-gray-500">"Loading tasks..."</p> }
            >
                <Show
                    when=move || !tasks.with(TasksState::is_empty)
                    fallback=|| {
                        view! {
                            <p class="text-gray-600">
                                "No tasks yet. "
                                <a href=ADD_TASK_PATH class="text-blue-700 underline">"Add your first task"</a>
                            </p>
                        }
                    }
                >
                    <h3 class="text-lg font-semibold text-gray-700 mb-4">
                        {move || tasks.with(|s| tasks_heading(s.items.len()))}
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {move || {
                            tasks
                                .get()
                                .items
                                .into_iter()
                                .map(|task| view! { <TaskCard task=task/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn TaskCard(task: TaskSummary) -> impl IntoView {
    let meta = task_meta(&task);

    view! {
        <div class="bg-white p-4 rounded-lg shadow-md border-l-4 border-blue-400">
            <p class="text-gray-800 whitespace-pre-wrap">{task.description}</p>
            {meta.map(|meta| view! { <p class="text-sm text-gray-500 mt-2">{meta}</p> })}
        </div>
    }
}
