use super::*;
use crate::net::types::User;

#[test]
fn logged_out_title_is_app_title() {
    assert_eq!(document_title(&AuthState::LoggedOut), APP_TITLE);
}

#[test]
fn logged_in_title_names_user() {
    let state = AuthState::LoggedIn { user: User { id: "u1".to_owned(), name: "Ada".to_owned(), email: None } };
    let title = document_title(&state);
    assert!(title.contains("Ada"));
    assert_eq!(title, "Ada's Tasks - CC Group 4");
}

#[test]
fn equal_states_give_equal_titles() {
    let a = document_title(&AuthState::default());
    let b = document_title(&AuthState::default());
    assert_eq!(a, b);
}
