use super::*;
use crate::net::types::User;
use crate::state::auth::AuthState;

#[test]
fn logout_handler_logs_the_user_out() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = AuthStore::new();
        auth.dispatch(AuthAction::LoggedIn(User { id: "u1".to_owned(), name: "Ada".to_owned(), email: None }));

        logout_handler(auth).run(());

        assert_eq!(auth.state().get_untracked(), AuthState::LoggedOut);
    });
}

#[test]
fn logout_handler_is_harmless_when_logged_out() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = AuthStore::new();
        logout_handler(auth).run(());
        assert_eq!(auth.state().get_untracked(), AuthState::LoggedOut);
    });
}
