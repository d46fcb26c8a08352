//! Page chrome shared by every route: navbar plus content area.

#[cfg(test)]
#[path = "main_layout_test.rs"]
mod main_layout_test;

use leptos::prelude::*;

use crate::components::navbar::NavBar;
use crate::state::auth::{AuthAction, AuthStore};

/// Callback handed to the navbar; each run dispatches one `Logout`.
pub fn logout_handler(auth: AuthStore) -> Callback<()> {
    Callback::new(move |()| auth.dispatch(AuthAction::Logout))
}

/// Layout wrapper. Pulls the auth store from context and injects it into
/// the navbar.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<AuthStore>();

    view! {
        <NavBar auth=auth.state() on_logout=logout_handler(auth)/>
        <main class="min-h-screen bg-gray-50">{children()}</main>
    }
}
