//! Add-task page. Signed-in only; redirects to login otherwise.

#[cfg(test)]
#[path = "add_task_test.rs"]
mod add_task_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::main_layout::MainLayout;
use crate::state::auth::AuthStore;
use crate::util::auth::install_unauth_redirect;

pub const MAX_DESCRIPTION_LEN: usize = 500;

pub fn validate_task_input(description: &str) -> Result<String, &'static str> {
    let description = description.trim();
    if description.is_empty() {
        return Err("Task description can't be empty.");
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err("Task description is too long (500 characters max).");
    }
    Ok(description.to_owned())
}

#[component]
pub fn AddTaskPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let description = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = match validate_task_input(&description.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving task...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_task(&value).await {
                    Ok(task) => {
                        log::debug!("task created: {}", task.id);
                        navigate(crate::app::HOME_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Could not save task: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (value, &navigate);
        }
    };

    view! {
        <Title text="Add Task - CC Group 4"/>
        <MainLayout>
            <div class="flex justify-center py-16 px-4">
                <form class="bg-white w-full max-w-lg p-8 rounded-lg shadow-md" on:submit=on_submit>
                    <h2 class="text-2xl font-bold text-center text-blue-800 mb-6">"Add New Task"</h2>
                    <textarea
                        class="w-full mb-4 py-2 px-3 border-2 border-gray-200 rounded-md focus:border-blue-500 outline-none resize-none"
                        rows="5"
                        placeholder="Describe the task..."
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        class="w-full bg-blue-600 text-white py-2 rounded-md hover:bg-blue-700 transition"
                        type="submit"
                        disabled=move || busy.get()
                    >
                        "Add task"
                    </button>
                    <Show when=move || !info.get().is_empty()>
                        <p class="mt-4 text-center text-gray-700">{move || info.get()}</p>
                    </Show>
                </form>
            </div>
        </MainLayout>
    }
}
