use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post},
};

use crate::{
    dto::{
        Message,
        cart::{CartItemRequest, CartMutation},
    },
    error::AppResult,
    models::Cart,
    routes::params::UserQuery,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart))
        .route("/add", post(add_to_cart))
        .route("/update", post(update_cart_item))
        .route("/remove/{product_id}", delete(remove_from_cart))
        .route("/clear", delete(clear_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    params(UserQuery),
    responses(
        (status = 200, description = "The user's cart, created empty on first access", body = Cart)
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Query(user): Query<UserQuery>,
) -> AppResult<Json<Cart>> {
    let cart = cart_service::get_cart(&state, user.user_id()).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    post,
    path = "/api/cart/add",
    params(UserQuery),
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Item added, quantities merged per product", body = CartMutation)
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Query(user): Query<UserQuery>,
    Json(payload): Json<CartItemRequest>,
) -> AppResult<Json<CartMutation>> {
    let items = cart_service::add_item(&state, user.user_id(), payload).await?;
    Ok(Json(CartMutation {
        message: "Added to cart".to_string(),
        items,
    }))
}

#[utoipa::path(
    post,
    path = "/api/cart/update",
    params(UserQuery),
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Quantity replaced; zero or below removes the item", body = CartMutation),
        (status = 404, description = "No cart exists for the user"),
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    Query(user): Query<UserQuery>,
    Json(payload): Json<CartItemRequest>,
) -> AppResult<Json<CartMutation>> {
    let items = cart_service::update_item(&state, user.user_id(), payload).await?;
    Ok(Json(CartMutation {
        message: "Cart updated".to_string(),
        items,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/cart/remove/{product_id}",
    params(
        UserQuery,
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Removed from cart", body = Message)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Query(user): Query<UserQuery>,
    Path(product_id): Path<String>,
) -> AppResult<Json<Message>> {
    cart_service::remove_item(&state, user.user_id(), &product_id).await?;
    Ok(Json(Message::new("Removed from cart")))
}

#[utoipa::path(
    delete,
    path = "/api/cart/clear",
    params(UserQuery),
    responses(
        (status = 200, description = "Cart emptied", body = Message)
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    Query(user): Query<UserQuery>,
) -> AppResult<Json<Message>> {
    cart_service::clear_cart(&state, user.user_id()).await?;
    Ok(Json(Message::new("Cart cleared")))
}
