//! Home page: marketing hero and team roster when signed out, personal task
//! hub when signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/`. The whole body branches on `AuthState`; there is no
//! intermediate loading view here. The tab title follows the same state.
//!
//! DESIGN
//! ======
//! `home_body` is the pure branch. The title is a `Memo` over the auth
//! signal, so it only re-fires when the computed title actually changes.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::SIGNUP_PATH;
use crate::components::main_layout::MainLayout;
use crate::components::tasks::Tasks;
use crate::state::auth::{AuthState, AuthStore};
use crate::state::roster::{TEAM_MEMBERS, TeamMember};
use crate::util::title::document_title;

/// Which body the home page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HomeBody {
    /// Hero with signup call-to-action plus the team roster.
    Marketing,
    /// Personal greeting followed by the task list.
    Dashboard { user_name: String },
}

pub fn home_body(state: &AuthState) -> HomeBody {
    match state.user() {
        Some(user) => HomeBody::Dashboard { user_name: user.name.clone() },
        None => HomeBody::Marketing,
    }
}

pub fn welcome_heading(user_name: &str) -> String {
    format!("Welcome back, {user_name}! 👋")
}

/// Document title derived from auth. Equal recomputed titles do not notify.
pub fn title_memo(auth: Signal<AuthState>) -> Memo<String> {
    Memo::new(move |_| document_title(&auth.get()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthStore>().state();
    let title = title_memo(auth);
    let body = Memo::new(move |_| home_body(&auth.get()));

    view! {
        <Title text=move || title.get()/>
        <MainLayout>
            {move || match body.get() {
                HomeBody::Marketing => view! { <Hero/> <Roster/> }.into_any(),
                HomeBody::Dashboard { user_name } => view! { <Dashboard user_name=user_name/> }.into_any(),
            }}
        </MainLayout>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-r from-blue-600 to-blue-800 text-white h-[50vh] py-16 text-center flex flex-col justify-center items-center">
            <h1 class="text-4xl font-bold mb-4">"☁️ Cloud Computing Group 4"</h1>
            <h2 class="text-2xl font-semibold mb-2">"Collaborative Task Manager"</h2>
            <p class="text-lg mb-8 max-w-2xl">
                "Streamline your group projects with our intelligent task management system. Collaborate seamlessly with your team members."
            </p>
            <a
                href=SIGNUP_PATH
                class="mt-6 bg-yellow-400 text-gray-800 font-bold py-3 px-8 rounded-lg hover:bg-yellow-500 transition transform hover:scale-105 inline-flex items-center gap-2"
            >
                <span>"Get Started Now"</span>
                <span>
                    <i class="fa-solid fa-arrow-right"></i>
                </span>
            </a>
        </div>
    }
}

#[component]
fn Roster() -> impl IntoView {
    view! {
        <div class="bg-white py-12 px-8">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center text-blue-800 mb-2">"👥 Our Team"</h2>
                <p class="text-center text-gray-600 mb-8">"Cloud Computing Group 4 Members"</p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    {TEAM_MEMBERS.iter().map(|member| view! { <RosterCard member=*member/> }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn RosterCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class=member.role.card_class()>
            <p class=member.role.text_class()>{member.role.badge()}{member.display}</p>
        </div>
    }
}

#[component]
fn Dashboard(user_name: String) -> impl IntoView {
    view! {
        <h1 class="text-2xl font-bold mt-8 mx-8 pb-4 border-b-2 border-blue-600">{welcome_heading(&user_name)}</h1>
        <p class="text-gray-600 mx-8 mt-2">"Cloud Computing Group 4 - Task Management Hub"</p>
        <Tasks/>
    }
}
