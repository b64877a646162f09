//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the health endpoint and static Leptos assets together with the
//! server-rendered application shell under a single Axum router.

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

/// Error returned by [`app`].
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Missing or malformed `[package.metadata.leptos]` / `LEPTOS_*` settings.
    #[error("leptos configuration: {0}")]
    Config(String),
}

/// Non-rendered routes served next to the shell.
pub fn service_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full router: service routes, Leptos SSR for every shell route, and the
/// compiled WASM/CSS bundle under `/pkg`.
///
/// # Errors
///
/// Returns [`RouterError::Config`] if the Leptos configuration cannot be
/// loaded.
pub fn app() -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(shell::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::info!(site_root = %site_root_path.display(), "serving shell assets");

    Ok(service_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
