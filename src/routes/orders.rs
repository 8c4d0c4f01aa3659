use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::orders::CreateOrderRequest,
    error::AppResult,
    models::Order,
    routes::params::UserQuery,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    params(UserQuery),
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Created order; the user's cart is emptied as a side effect", body = Order)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Query(user): Query<UserQuery>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<Order>> {
    let order = order_service::create_order(&state, user.user_id(), payload).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(UserQuery),
    responses(
        (status = 200, description = "The user's orders, newest first", body = Vec<Order>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(user): Query<UserQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order_service::list_orders(&state, user.user_id()).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        UserQuery,
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get order", body = Order),
        (status = 404, description = "No such order for this user"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Query(user): Query<UserQuery>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = order_service::get_order(&state, user.user_id(), &id).await?;
    Ok(Json(order))
}
