use super::*;
use crate::net::types::User;
use crate::state::roster::Role;

fn ada() -> AuthState {
    AuthState::LoggedIn { user: User { id: "u1".to_owned(), name: "Ada".to_owned(), email: None } }
}

// =============================================================
// home_body
// =============================================================

#[test]
fn logged_out_shows_marketing() {
    assert_eq!(home_body(&AuthState::LoggedOut), HomeBody::Marketing);
}

#[test]
fn logged_in_shows_dashboard_for_user() {
    assert_eq!(home_body(&ada()), HomeBody::Dashboard { user_name: "Ada".to_owned() });
}

#[test]
fn welcome_heading_interpolates_name() {
    let heading = welcome_heading("Ada");
    assert!(heading.contains("Ada"));
    assert_eq!(heading, "Welcome back, Ada! 👋");
}

// =============================================================
// Marketing scenario
// =============================================================

#[test]
fn hero_cta_targets_signup() {
    assert_eq!(SIGNUP_PATH, "/signup");
}

#[test]
fn roster_renders_all_members_with_one_lead() {
    let rendered: Vec<String> =
        TEAM_MEMBERS.iter().map(|m| format!("{}{}", m.role.badge(), m.display)).collect();
    assert_eq!(rendered.len(), 18);
    assert_eq!(rendered.iter().filter(|line| line.starts_with("⭐ ")).count(), 1);
    assert_eq!(rendered[3], "⭐ Esther-Isreal-Olawepo (GROUP HEAD)");
    assert_eq!(rendered[0], "✓ Ayotomiwa-Odunayo");
}

#[test]
fn lead_display_keeps_marker_text() {
    let lead = TEAM_MEMBERS.iter().find(|m| m.role == Role::Lead).unwrap();
    assert!(lead.display.contains("(GROUP HEAD)"));
}

// =============================================================
// Title
// =============================================================

#[test]
fn title_tracks_auth_state() {
    assert_eq!(document_title(&AuthState::LoggedOut), "Cloud Computing Group 4 Project");
    assert!(document_title(&ada()).contains("Ada"));
}

#[test]
fn title_memo_only_propagates_distinct_titles() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::util::title::APP_TITLE;

    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::LoggedOut);
        let title = title_memo(auth.into());
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in = Arc::clone(&fired);
        let observed = Memo::new(move |_| {
            fired_in.fetch_add(1, Ordering::SeqCst);
            title.get()
        });

        assert_eq!(observed.get_untracked(), APP_TITLE);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        auth.set(AuthState::LoggedOut);
        assert_eq!(observed.get_untracked(), APP_TITLE);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        auth.set(ada());
        assert!(observed.get_untracked().contains("Ada"));
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    });
}

// =============================================================
// Server render
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use leptos::tachys::view::RenderHtml;
    use leptos_meta::{ServerMetaContext, provide_meta_context};

    use super::*;
    use crate::state::auth::AuthAction;

    fn render_home(signed_in: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_meta_context();
            let (meta, _output) = ServerMetaContext::new();
            provide_context(meta);

            let store = AuthStore::new();
            if signed_in {
                store.dispatch(AuthAction::LoggedIn(User {
                    id: "u1".to_owned(),
                    name: "Ada".to_owned(),
                    email: None,
                }));
            }
            provide_context(store);

            view! { <HomePage/> }.to_html()
        })
    }

    const CARD_MARK: &str = "border-l-4 transition transform hover:scale-105";

    #[test]
    fn logged_out_renders_hero_roster_and_login() {
        let html = render_home(false);
        assert_eq!(html.matches(CARD_MARK).count(), 18);
        assert_eq!(html.matches("⭐").count(), 1);
        assert!(html.contains(r#"href="/signup""#));
        assert_eq!(html.matches("Login").count(), 2);
        assert_eq!(html.matches("Logout").count(), 0);
        assert_eq!(html.matches("Add Task").count(), 0);
        assert!(!html.contains("Welcome back"));
    }

    #[test]
    fn logged_in_renders_dashboard_and_session_links() {
        let html = render_home(true);
        assert_eq!(html.matches("Logout").count(), 2);
        assert_eq!(html.matches("Add Task").count(), 2);
        assert_eq!(html.matches("Login").count(), 0);
        assert!(html.contains("Welcome back, Ada"));
        assert_eq!(html.matches(CARD_MARK).count(), 0);
        assert!(!html.contains(r#"href="/signup""#));
    }
}
