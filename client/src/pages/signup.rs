//! Signup page: create an account, then land on the home dashboard.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::LOGIN_PATH;
use crate::components::main_layout::MainLayout;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Validated signup form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn validate_signup_input(name: &str, email: &str, password: &str) -> Result<SignupInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(SignupInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
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
        let input = match validate_signup_input(&name.get(), &email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&input.name, &input.email, &input.password).await {
                    Ok(user) => {
                        auth.dispatch(crate::state::auth::AuthAction::LoggedIn(user));
                        navigate(crate::app::HOME_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Signup failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    };

    let field = "w-full mb-4 py-2 px-3 border-2 border-gray-200 rounded-md focus:border-blue-500 outline-none";

    view! {
        <Title text="Signup - CC Group 4"/>
        <MainLayout>
            <div class="flex justify-center py-16 px-4">
                <form class="bg-white w-full max-w-md p-8 rounded-lg shadow-md" on:submit=on_submit>
                    <h2 class="text-2xl font-bold text-center text-blue-800 mb-6">"Welcome user, please signup here"</h2>
                    <input
                        class=field
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class=field
                        type="email"
                        placeholder="youremail@domain.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class=field
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
                        "Already have an account? "
                        <a href=LOGIN_PATH class="text-blue-600">"Login here"</a>
                    </p>
                </form>
            </div>
        </MainLayout>
    }
}
