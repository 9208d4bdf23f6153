use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use db::models::{
    inquiry::{CreateInquiry, Inquiry},
    post::Post,
    service_offering::ServiceOffering,
    testimonial::Testimonial,
};
use utils::response::ApiResponse;

use crate::{DeploymentImpl, error::ApiError};
use deployment::Deployment;

/// Public content API: one thin select per endpoint. Store failures are
/// caught here, logged, and surfaced as a generic envelope error.
pub fn router() -> Router<DeploymentImpl> {
    Router::new()
        .route("/api/services", get(list_services))
        .route("/api/testimonials", get(list_testimonials))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{slug}", get(get_post))
        .route("/api/contact", post(submit_contact))
}

pub async fn list_services(
    State(deployment): State<DeploymentImpl>,
) -> Result<ResponseJson<ApiResponse<Vec<ServiceOffering>>>, ApiError> {
    let services = ServiceOffering::find_active(&deployment.db().pool)
        .await
        .map_err(|e| {
            tracing::error!("failed to load services: {}", e);
            ApiError::InternalError("Failed to load services".to_string())
        })?;
    Ok(ResponseJson(ApiResponse::success(services)))
}

pub async fn list_testimonials(
    State(deployment): State<DeploymentImpl>,
) -> Result<ResponseJson<ApiResponse<Vec<Testimonial>>>, ApiError> {
    let testimonials = Testimonial::find_active(&deployment.db().pool)
        .await
        .map_err(|e| {
            tracing::error!("failed to load testimonials: {}", e);
            ApiError::InternalError("Failed to load testimonials".to_string())
        })?;
    Ok(ResponseJson(ApiResponse::success(testimonials)))
}

pub async fn list_posts(
    State(deployment): State<DeploymentImpl>,
) -> Result<ResponseJson<ApiResponse<Vec<Post>>>, ApiError> {
    let posts = Post::find_published(&deployment.db().pool)
        .await
        .map_err(|e| {
            tracing::error!("failed to load posts: {}", e);
            ApiError::InternalError("Failed to load posts".to_string())
        })?;
    Ok(ResponseJson(ApiResponse::success(posts)))
}

pub async fn get_post(
    Path(slug): Path<String>,
    State(deployment): State<DeploymentImpl>,
) -> Result<ResponseJson<ApiResponse<Post>>, ApiError> {
    let post = Post::find_published_by_slug(&deployment.db().pool, &slug)
        .await?
        .ok_or(ApiError::NotFound("Post not found".to_string()))?;
    Ok(ResponseJson(ApiResponse::success(post)))
}

pub async fn submit_contact(
    State(deployment): State<DeploymentImpl>,
    ResponseJson(req): ResponseJson<CreateInquiry>,
) -> Result<ResponseJson<ApiResponse<Inquiry>>, ApiError> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.message.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Name, email and message are required".to_string(),
        ));
    }

    let inquiry = Inquiry::create(&deployment.db().pool, &req)
        .await
        .map_err(|e| {
            tracing::error!("failed to store inquiry: {}", e);
            ApiError::InternalError("Failed to submit inquiry".to_string())
        })?;
    Ok(ResponseJson(ApiResponse::success(inquiry)))
}
