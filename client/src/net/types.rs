//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON returned by the task backend so serde
//! round-trips stay lossless. Fields the backend may omit carry
//! `#[serde(default)]` rather than failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(default)]
    pub id: String,
    /// Display name shown in greetings and the tab title.
    pub name: String,
    /// Account email, when the backend exposes it.
    #[serde(default)]
    pub email: Option<String>,
}

/// A task as listed on the home dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Unique task identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Free-form task text.
    pub description: String,
    /// Creation timestamp as formatted by the backend.
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}
