use axum::{Router, response::Html, routing::get};

use crate::DeploymentImpl;

/// Public page shells. Rendering proper happens client-side; these routes
/// exist so the site and the login page are reachable.
pub fn router() -> Router<DeploymentImpl> {
    Router::new().route("/", get(home_page))
}

/// Admin page shells. The access gate is layered over this router in
/// `routes`: `/admin` stays reachable, the dashboard paths redirect there
/// when no `auth-token` cookie is present.
pub fn admin_router() -> Router<DeploymentImpl> {
    Router::new()
        .route("/admin", get(login_page))
        .route("/admin/dashboard", get(dashboard_page))
        .route("/admin/dashboard/{*path}", get(dashboard_page))
}

pub async fn home_page() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>Meridian Labs</title></head>\
         <body><div id=\"app\" data-page=\"home\"></div></body></html>",
    )
}

pub async fn login_page() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>Admin Login</title></head>\
         <body><div id=\"app\" data-page=\"admin-login\"></div></body></html>",
    )
}

pub async fn dashboard_page() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>Dashboard</title></head>\
         <body><div id=\"app\" data-page=\"admin-dashboard\"></div></body></html>",
    )
}
