//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components that need a session apply identical unauthenticated
//! redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::LOGIN_PATH;
use crate::state::auth::{AuthState, AuthStore};

/// Whether a guarded page should bounce to the login route.
pub fn should_redirect_unauth(state: &AuthState, loading: bool) -> bool {
    !loading && !state.is_logged_in()
}

/// Redirect to the login route whenever the session has loaded and no user
/// is present.
pub fn install_unauth_redirect<F>(auth: AuthStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.state().get();
        if should_redirect_unauth(&state, auth.loading()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
