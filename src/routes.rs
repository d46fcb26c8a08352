//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health check, the Leptos SSR routes, and the hydrate bundle
//! under `/pkg` into a single Axum router. The task and auth APIs the
//! browser calls are served by a separate backend.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Read Leptos options from `[package.metadata.leptos]` and the
/// `LEPTOS_*` environment overrides.
///
/// # Errors
///
/// Returns an error if the configuration is missing or malformed.
pub fn load_options() -> Result<LeptosOptions, ServerError> {
    get_configuration(None)
        .map(|conf| conf.leptos_options)
        .map_err(|e| ServerError::LeptosConfig(e.to_string()))
}

/// Routes that do not depend on Leptos.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full router: health check + Leptos SSR + static `/pkg` assets.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(options.clone());

    let site_root_path = PathBuf::from(options.site_root.as_ref());
    let pkg_path = site_root_path.join(options.site_pkg_dir.as_ref());

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
