use axum::{Router, middleware::from_fn, routing::get};
use tower_http::cors::CorsLayer;

use crate::{DeploymentImpl, middleware as app_middleware};

pub mod admin;
pub mod auth;
pub mod content;
pub mod health;
pub mod pages;

pub fn router(deployment: DeploymentImpl) -> Router {
    // Gated routers use full paths and are merged, not nested, so the gate
    // middleware sees the original request path.
    let gated_pages = pages::admin_router().layer(from_fn(app_middleware::access_gate));
    let gated_api = admin::router().layer(from_fn(app_middleware::access_gate));

    Router::new()
        .route("/api/health", get(health::health_check))
        .merge(pages::router())
        .merge(content::router())
        .merge(auth::router())
        .merge(gated_pages)
        .merge(gated_api)
        .layer(from_fn(app_middleware::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(deployment)
}
