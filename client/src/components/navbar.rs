//! Top navigation bar with auth-aware links and a slide-in mobile drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `MainLayout` on every page. Auth arrives as a prop and logout
//! is reported through a callback, so the bar never touches the store.
//!
//! DESIGN
//! ======
//! `nav_items` is the single auth branch. The always-visible bar and the
//! drawer each evaluate it against the same signal, so both panels agree.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::app::{ADD_TASK_PATH, HOME_PATH, LOGIN_PATH};
use crate::state::auth::AuthState;
use crate::state::navbar::NavbarUiState;

/// Brand label linking to the home route.
pub const BRAND_LABEL: &str = "☁️ CC Group 4";

/// One navigation affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    AddTask,
    Logout,
    Login,
}

impl NavItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::AddTask => "Add Task",
            Self::Logout => "Logout",
            Self::Login => "Login",
        }
    }

    /// Route for link items; `None` for the logout action.
    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::AddTask => Some(ADD_TASK_PATH),
            Self::Login => Some(LOGIN_PATH),
            Self::Logout => None,
        }
    }

    fn icon(self) -> Option<&'static str> {
        match self {
            Self::AddTask => Some("fa-solid fa-plus"),
            Self::Logout | Self::Login => None,
        }
    }
}

/// Affordances for `state`, in display order.
pub fn nav_items(state: &AuthState) -> Vec<NavItem> {
    if state.is_logged_in() {
        vec![NavItem::AddTask, NavItem::Logout]
    } else {
        vec![NavItem::Login]
    }
}

/// Where a nav list is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPanel {
    /// Inline list, shown from the `md` breakpoint up.
    Bar,
    /// Slide-in drawer for narrow viewports.
    Drawer,
}

impl NavPanel {
    fn list_class(self) -> &'static str {
        match self {
            Self::Bar => "hidden md:flex gap-4 uppercase font-medium text-white",
            Self::Drawer => "flex flex-col gap-4 uppercase font-medium text-center text-white",
        }
    }

    fn item_class(self, item: NavItem) -> &'static str {
        match (self, item) {
            (Self::Bar, NavItem::AddTask) => {
                "bg-yellow-400 text-gray-800 hover:bg-yellow-500 font-medium rounded-md transition transform hover:scale-105"
            }
            (Self::Drawer, NavItem::AddTask) => {
                "bg-yellow-400 text-gray-800 hover:bg-yellow-500 font-medium transition py-2 px-3 rounded-md"
            }
            (Self::Bar, NavItem::Logout) => "py-2 px-3 cursor-pointer hover:bg-blue-700 transition rounded-md",
            (Self::Drawer, NavItem::Logout) => "py-2 px-3 cursor-pointer hover:bg-blue-600 transition rounded-md",
            (Self::Bar, NavItem::Login) => {
                "py-2 px-3 cursor-pointer bg-yellow-400 text-gray-800 hover:bg-yellow-500 transition rounded-md font-medium"
            }
            (Self::Drawer, NavItem::Login) => {
                "py-2 px-3 cursor-pointer bg-yellow-400 text-gray-800 hover:bg-yellow-500 transition rounded-md"
            }
        }
    }

    fn link_class(self, item: NavItem) -> Option<&'static str> {
        match (self, item) {
            (Self::Bar, NavItem::AddTask) => Some("block w-full h-full px-4 py-2"),
            (Self::Drawer, NavItem::AddTask) => Some("block w-full h-full"),
            _ => None,
        }
    }
}

fn drawer_class(menu: NavbarUiState) -> String {
    format!(
        "absolute md:hidden right-0 top-0 bottom-0 transition {} bg-blue-700 shadow-md w-screen sm:w-9/12 h-screen",
        menu.drawer_translate_class()
    )
}

/// Navigation bar. `auth` drives which links appear; `on_logout` fires once
/// per logout click.
#[component]
pub fn NavBar(#[prop(into)] auth: Signal<AuthState>, on_logout: Callback<()>) -> impl IntoView {
    let menu = RwSignal::new(NavbarUiState::default());
    let toggle = move |_| menu.update(NavbarUiState::toggle);

    view! {
        <header class="flex justify-between sticky top-0 p-4 bg-gradient-to-r from-blue-600 to-blue-800 shadow-lg items-center">
            <h2 class="cursor-pointer font-bold text-white text-xl">
                <a href=HOME_PATH>{BRAND_LABEL}</a>
            </h2>
            <NavList auth=auth on_logout=on_logout panel=NavPanel::Bar/>
            <span class="md:hidden cursor-pointer text-white text-2xl" on:click=toggle title="Open menu">
                <i class="fa-solid fa-bars"></i>
            </span>
            <div class=move || drawer_class(menu.get())>
                <div class="flex">
                    <span class="m-4 ml-auto cursor-pointer text-white text-2xl" on:click=toggle title="Close menu">
                        <i class="fa-solid fa-xmark"></i>
                    </span>
                </div>
                <NavList auth=auth on_logout=on_logout panel=NavPanel::Drawer/>
            </div>
        </header>
    }
}

#[component]
fn NavList(auth: Signal<AuthState>, on_logout: Callback<()>, panel: NavPanel) -> impl IntoView {
    view! {
        <ul class=panel.list_class()>
            {move || {
                nav_items(&auth.get())
                    .into_iter()
                    .map(|item| nav_entry(item, panel, on_logout))
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}

/// Click handler for the logout entry: one click, one callback run.
fn on_logout_click(on_logout: Callback<()>) {
    on_logout.run(());
}

fn nav_entry(item: NavItem, panel: NavPanel, on_logout: Callback<()>) -> AnyView {
    match item.href() {
        Some(href) => view! {
            <li class=panel.item_class(item)>
                <a href=href class=panel.link_class(item)>
                    {item.icon().map(|icon| view! { <i class=icon></i> " " })}
                    {item.label()}
                </a>
            </li>
        }
        .into_any(),
        None => view! {
            <li class=panel.item_class(item) on:click=move |_| on_logout_click(on_logout)>
                {item.label()}
            </li>
        }
        .into_any(),
    }
}
