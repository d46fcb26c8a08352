//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the task list while reading shared
//! state from Leptos context providers or props.

pub mod main_layout;
pub mod navbar;
pub mod tasks;
