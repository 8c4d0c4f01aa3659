use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::reviews::CreateReviewRequest,
    error::AppResult,
    models::Review,
    services::review_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_review))
        .route("/{product_id}", get(list_reviews))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 200, description = "Created review", body = Review)
    ),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<Json<Review>> {
    let review = review_service::create_review(&state, payload).await?;
    Ok(Json(review))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Reviews for the product, newest first", body = Vec<Review>)
    ),
    tag = "Reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = review_service::list_reviews(&state, &product_id).await?;
    Ok(Json(reviews))
}
