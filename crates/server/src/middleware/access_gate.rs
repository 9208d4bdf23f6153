use axum::{
    Json,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::{Value, json};

/// Cookie that marks an authenticated admin session. The gate checks only
/// that a cookie with this name is present; the value is never inspected
/// here. Validating it would change observable behavior, so it stays the
/// login flow's problem.
pub const AUTH_TOKEN_COOKIE: &str = "auth-token";

/// Dashboard pages. Unauthenticated navigation is redirected to the login
/// page instead of erroring.
const DASHBOARD_PREFIX: &str = "/admin/dashboard";

/// Admin API surface. Unauthenticated requests get a JSON 401.
const ADMIN_API_PREFIX: &str = "/api/admin/";

/// The login page itself. Starts with neither protected prefix, so it stays
/// reachable for establishing the cookie in the first place.
const LOGIN_PATH: &str = "/admin";

/// Outcome of a single gate decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Let the request through unchanged.
    Continue,
    /// Send the client elsewhere; the requested handler never runs.
    RedirectTo(&'static str),
    /// Terminate with this exact status and JSON body.
    Deny { status: StatusCode, body: Value },
}

/// Decide whether a request may reach protected resources.
///
/// Pure and total over its inputs; first matching rule governs. Both
/// protected prefixes are matched as prefixes, not path segments, so
/// `/admin/dashboard` itself and everything under it are covered.
pub fn evaluate(path: &str, has_auth_token: bool) -> Disposition {
    if path.starts_with(DASHBOARD_PREFIX) && !has_auth_token {
        Disposition::RedirectTo(LOGIN_PATH)
    } else if path.starts_with(ADMIN_API_PREFIX) && !has_auth_token {
        Disposition::Deny {
            status: StatusCode::UNAUTHORIZED,
            body: json!({ "message": "Unauthorized" }),
        }
    } else {
        Disposition::Continue
    }
}

/// True iff a cookie named `auth-token` appears in the Cookie header.
pub fn has_auth_token(cookie_header: Option<&str>) -> bool {
    let Some(cookies) = cookie_header else {
        return false;
    };
    cookies.split(';').any(|cookie| {
        cookie
            .trim()
            .split_once('=')
            .is_some_and(|(name, _)| name == AUTH_TOKEN_COOKIE)
    })
}

/// Axum adapter: layer this over the `/admin` and `/api/admin` routers.
pub async fn access_gate(req: Request, next: Next) -> Response {
    let token_present = has_auth_token(
        req.headers()
            .get(header::COOKIE)
            .and_then(|h| h.to_str().ok()),
    );

    match evaluate(req.uri().path(), token_present) {
        Disposition::Continue => next.run(req).await,
        Disposition::RedirectTo(target) => Redirect::temporary(target).into_response(),
        Disposition::Deny { status, body } => (status, Json(body)).into_response(),
    }
}
