use axum::{
    Json, Router,
    routing::{get, post},
};

use crate::{dto::Message, state::AppState};

pub mod cart;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;
pub mod reviews;
pub mod seed;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/categories", get(products::list_categories))
        .route("/init-data", post(seed::init_data))
        .nest("/products", products::router())
        .nest("/reviews", reviews::router())
        .nest("/cart", cart::router())
        .nest("/orders", orders::router())
}

#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Service info", body = Message)
    ),
    tag = "Info"
)]
pub async fn root() -> Json<Message> {
    Json(Message::new("E-Commerce API"))
}
