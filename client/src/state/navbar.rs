//! Local disclosure state for the navbar's mobile drawer.
//!
//! Lives only as long as the navbar instance; a route change remounts the
//! layout and starts closed again.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarUiState {
    pub is_open: bool,
}

impl NavbarUiState {
    /// Invert the drawer's open flag.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Slide class for the drawer panel.
    pub fn drawer_translate_class(self) -> &'static str {
        if self.is_open { "translate-x-0" } else { "translate-x-full" }
    }
}
