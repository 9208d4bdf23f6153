use axum::{Router, extract::State, response::Json as ResponseJson, routing::get};
use db::models::{inquiry::Inquiry, post::Post, service_offering::ServiceOffering, testimonial::Testimonial};
use serde::Serialize;
use utils::response::ApiResponse;

use crate::{DeploymentImpl, error::ApiError};
use deployment::Deployment;

/// Admin API. The access gate is layered over this router in `routes`; by
/// the time a handler runs, the request carried an `auth-token` cookie.
pub fn router() -> Router<DeploymentImpl> {
    Router::new()
        .route("/api/admin/posts", get(list_posts))
        .route("/api/admin/inquiries", get(list_inquiries))
        .route("/api/admin/stats", get(stats))
}

pub async fn list_posts(
    State(deployment): State<DeploymentImpl>,
) -> Result<ResponseJson<ApiResponse<Vec<Post>>>, ApiError> {
    let posts = Post::find_all(&deployment.db().pool).await?;
    Ok(ResponseJson(ApiResponse::success(posts)))
}

pub async fn list_inquiries(
    State(deployment): State<DeploymentImpl>,
) -> Result<ResponseJson<ApiResponse<Vec<Inquiry>>>, ApiError> {
    let inquiries = Inquiry::find_all(&deployment.db().pool).await?;
    Ok(ResponseJson(ApiResponse::success(inquiries)))
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub posts: i64,
    pub services: i64,
    pub testimonials: i64,
    pub inquiries: i64,
}

pub async fn stats(
    State(deployment): State<DeploymentImpl>,
) -> Result<ResponseJson<ApiResponse<DashboardStats>>, ApiError> {
    let pool = &deployment.db().pool;
    let stats = DashboardStats {
        posts: Post::count(pool).await?,
        services: ServiceOffering::count(pool).await?,
        testimonials: Testimonial::count(pool).await?,
        inquiries: Inquiry::count(pool).await?,
    };
    Ok(ResponseJson(ApiResponse::success(stats)))
}
