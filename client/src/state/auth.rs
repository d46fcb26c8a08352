//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` is the app-wide container provided through Leptos context.
//! Components read it, and the only mutation path is `dispatch` with an
//! `AuthAction`. The navbar and the home page branch on `AuthState`.
//!
//! DESIGN
//! ======
//! `/api/auth/me` answers with a `User` or fails. The optional user is
//! narrowed into a tagged `AuthState` at the boundary so a logged-in state
//! always carries a user, and a missing one is `LoggedOut`.
//!
//! Bootstrap only applies while no explicit action has landed yet; a login
//! that completes before the mount-time `/me` reply must not be undone by it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use crate::net::types::User;

/// Authentication state as seen by rendering code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    LoggedOut,
    LoggedIn { user: User },
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedIn { user } => Some(user),
            Self::LoggedOut => None,
        }
    }
}

impl From<Option<User>> for AuthState {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => Self::LoggedIn { user },
            None => Self::LoggedOut,
        }
    }
}

/// Intents accepted by [`AuthStore::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    LoggedIn(User),
    Logout,
}

/// Next state after `action`.
pub fn reduce(_state: &AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::LoggedIn(user) => AuthState::LoggedIn { user },
        AuthAction::Logout => AuthState::LoggedOut,
    }
}

/// Global auth container shared through context.
#[derive(Clone, Copy, Debug)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
    loading: RwSignal<bool>,
}

impl AuthStore {
    /// New store in the logged-out shape, pending session bootstrap.
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::LoggedOut), loading: RwSignal::new(true) }
    }

    /// Read-only view for components that take auth as a prop.
    pub fn state(&self) -> Signal<AuthState> {
        self.state.into()
    }

    /// Whether the session bootstrap request is still in flight.
    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    /// Apply the session reported by `/api/auth/me`. Ignored once the
    /// bootstrap has landed or any action has been dispatched.
    pub fn bootstrap(&self, user: Option<User>) {
        if !self.loading.get_untracked() {
            log::debug!("auth bootstrap ignored: state already settled");
            return;
        }
        let next = AuthState::from(user);
        log::debug!("auth bootstrap: logged_in={}", next.is_logged_in());
        self.state.set(next);
        self.loading.set(false);
    }

    /// Apply an action. `Logout` also fires the backend logout call in the
    /// browser; the local flip does not wait for it.
    pub fn dispatch(&self, action: AuthAction) {
        #[cfg(feature = "hydrate")]
        {
            if action == AuthAction::Logout {
                leptos::task::spawn_local(crate::net::api::logout());
            }
        }
        log::debug!("auth dispatch: {action:?}");
        self.state.update(|state| *state = reduce(state, action));
        self.loading.set(false);
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}
