//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::SIGNUP_PATH;
use crate::components::main_layout::MainLayout;

/// Trim and require both credentials.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<crate::state::auth::AuthStore>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        auth.dispatch(crate::state::auth::AuthAction::LoggedIn(user));
                        navigate(crate::app::HOME_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Login failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <Title text="Login - CC Group 4"/>
        <MainLayout>
            <div class="flex justify-center py-16 px-4">
                <form class="bg-white w-full max-w-md p-8 rounded-lg shadow-md" on:submit=on_submit>
                    <h2 class="text-2xl font-bold text-center text-blue-800 mb-6">"Welcome user, please login here"</h2>
                    <input
                        class="w-full mb-4 py-2 px-3 border-2 border-gray-200 rounded-md focus:border-blue-500 outline-none"
                        type="email"
                        placeholder="youremail@domain.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="w-full mb-4 py-2 px-3 border-2 border-gray-200 rounded-md focus:border-blue-500 outline-none"
                        type="password"
                        placeholder="Your password.."
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="w-full bg-blue-600 text-white py-2 rounded-md hover:bg-blue-700 transition"
                        type="submit"
                        disabled=move || busy.get()
                    >
                        "Submit"
                    </button>
                    <Show when=move || !info.get().is_empty()>
                        <p class="mt-4 text-center text-gray-700">{move || info.get()}</p>
                    </Show>
                    <p class="mt-4 text-center">
                        "Don't have an account? "
                        <a href=SIGNUP_PATH class="text-blue-600">"Signup here"</a>
                    </p>
                </form>
            </div>
        </MainLayout>
    }
}
