//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the catalog API and the health check, then stitches them with Leptos
//! SSR rendering under a single Axum router. Compiled WASM/JS/CSS is served
//! from `<site_root>/pkg`.

pub mod catalog;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::StartupError;

/// JSON API and health check.
pub fn api_routes() -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/projects", get(catalog::list_projects))
        .route("/api/projects/{id}", get(catalog::get_project))
        .route("/api/templates", get(catalog::list_templates))
        .layer(cors)
        .route("/healthz", get(healthz))
}

/// API routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` and no `LEPTOS_*` environment).
pub fn app(config: &ServerConfig) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = root.clone().into();
    }
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), "serving static assets");

    Ok(api_routes()
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
