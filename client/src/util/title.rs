//! Document title derived from auth state.

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

use crate::state::auth::AuthState;

/// Title used whenever no user is signed in.
pub const APP_TITLE: &str = "Cloud Computing Group 4 Project";

/// Tab title for `state`.
pub fn document_title(state: &AuthState) -> String {
    match state.user() {
        Some(user) => format!("{}'s Tasks - CC Group 4", user.name),
        None => APP_TITLE.to_owned(),
    }
}
