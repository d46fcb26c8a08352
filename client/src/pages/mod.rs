//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates chrome and list
//! rendering to `components`.

pub mod add_task;
pub mod home;
pub mod login;
pub mod signup;
