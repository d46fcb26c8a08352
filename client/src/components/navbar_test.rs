use super::*;
use crate::net::types::User;

fn logged_in() -> AuthState {
    AuthState::LoggedIn { user: User { id: "u1".to_owned(), name: "Ada".to_owned(), email: None } }
}

fn count(items: &[NavItem], wanted: NavItem) -> usize {
    items.iter().filter(|item| **item == wanted).count()
}

// =============================================================
// nav_items
// =============================================================

#[test]
fn logged_out_shows_only_login() {
    let items = nav_items(&AuthState::LoggedOut);
    assert_eq!(count(&items, NavItem::Login), 1);
    assert_eq!(count(&items, NavItem::Logout), 0);
    assert_eq!(count(&items, NavItem::AddTask), 0);
}

#[test]
fn logged_in_shows_add_task_and_logout() {
    let items = nav_items(&logged_in());
    assert_eq!(items, vec![NavItem::AddTask, NavItem::Logout]);
    assert_eq!(count(&items, NavItem::Login), 0);
}

#[test]
fn both_panels_style_every_item() {
    for state in [AuthState::LoggedOut, logged_in()] {
        for panel in [NavPanel::Bar, NavPanel::Drawer] {
            for item in nav_items(&state) {
                assert!(!panel.item_class(item).is_empty(), "{panel:?} {item:?}");
            }
        }
    }
}

// =============================================================
// NavItem
// =============================================================

#[test]
fn nav_item_routes() {
    assert_eq!(NavItem::AddTask.href(), Some("/tasks/add"));
    assert_eq!(NavItem::Login.href(), Some("/login"));
    assert_eq!(NavItem::Logout.href(), None);
}

#[test]
fn nav_item_labels() {
    assert_eq!(NavItem::AddTask.label(), "Add Task");
    assert_eq!(NavItem::Logout.label(), "Logout");
    assert_eq!(NavItem::Login.label(), "Login");
}

#[test]
fn only_add_task_has_icon() {
    assert!(NavItem::AddTask.icon().is_some());
    assert!(NavItem::Login.icon().is_none());
    assert!(NavItem::Logout.icon().is_none());
}

// =============================================================
// NavPanel
// =============================================================

#[test]
fn bar_list_hidden_below_md_breakpoint() {
    assert!(NavPanel::Bar.list_class().starts_with("hidden md:flex"));
    assert!(NavPanel::Drawer.list_class().contains("flex-col"));
}

#[test]
fn drawer_class_tracks_menu_state() {
    assert!(drawer_class(NavbarUiState { is_open: true }).contains("translate-x-0"));
    assert!(drawer_class(NavbarUiState { is_open: false }).contains("translate-x-full"));
}

#[test]
fn drawer_class_round_trips_after_two_toggles() {
    let mut menu = NavbarUiState::default();
    let before = drawer_class(menu);
    menu.toggle();
    assert_ne!(drawer_class(menu), before);
    menu.toggle();
    assert_eq!(drawer_class(menu), before);
}

// =============================================================
// Logout click
// =============================================================

#[test]
fn logout_click_runs_callback_once() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let owner = Owner::new();
    owner.with(|| {
        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_in = Arc::clone(&clicks);
        let on_logout = Callback::new(move |()| {
            clicks_in.fetch_add(1, Ordering::SeqCst);
        });

        on_logout_click(on_logout);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        on_logout_click(on_logout);
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    });
}
