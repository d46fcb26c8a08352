//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate cross-page concerns (route guards, tab titles)
//! from page and component logic.

pub mod auth;
pub mod title;
