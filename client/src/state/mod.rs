//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `navbar`, `tasks`) so components depend
//! on small focused models; `roster` is static page data.

pub mod auth;
pub mod navbar;
pub mod roster;
pub mod tasks;
