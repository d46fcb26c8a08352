use super::*;
use crate::net::types::User;

#[test]
fn should_redirect_unauth_when_loaded_and_logged_out() {
    assert!(should_redirect_unauth(&AuthState::LoggedOut, false));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::LoggedOut, true));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState::LoggedIn {
        user: User { id: "u1".to_owned(), name: "Alice".to_owned(), email: None },
    };
    assert!(!should_redirect_unauth(&state, false));
}
