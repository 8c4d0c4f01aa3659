use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::doc;
use uuid::Uuid;

use crate::{
    dto::orders::CreateOrderRequest,
    error::{AppError, AppResult},
    models::Order,
    services::{LIST_CAP, cart_service},
    state::AppState,
};

pub const ORDER_STATUS_CONFIRMED: &str = "confirmed";

/// Snapshot the submitted items, total, and address into an immutable order,
/// then empty the user's cart.
///
/// Items and total are stored as submitted. The cart clear is a separate
/// write with no transactional link to the insert; if it fails the order
/// still stands and the caller sees success, so the failure is only logged.
pub async fn create_order(
    state: &AppState,
    user_id: &str,
    payload: CreateOrderRequest,
) -> AppResult<Order> {
    let order = Order {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        items: payload.items,
        total: payload.total,
        status: ORDER_STATUS_CONFIRMED.to_string(),
        shipping_address: payload.shipping_address,
        created_at: Utc::now(),
    };
    state.store.orders.insert_one(&order).await?;

    if let Err(err) = cart_service::clear_cart(state, user_id).await {
        tracing::warn!(error = %err, user_id, order_id = %order.id, "cart clear after order failed");
    }

    Ok(order)
}

/// Orders for the user, newest first.
pub async fn list_orders(state: &AppState, user_id: &str) -> AppResult<Vec<Order>> {
    let orders = state
        .store
        .orders
        .find(doc! { "userId": user_id })
        .sort(doc! { "createdAt": -1 })
        .limit(LIST_CAP)
        .await?
        .try_collect()
        .await?;
    Ok(orders)
}

/// Fetch one order scoped to the user; the userId filter keeps one user's
/// orders invisible to another by construction.
pub async fn get_order(state: &AppState, user_id: &str, order_id: &str) -> AppResult<Order> {
    let order = state
        .store
        .orders
        .find_one(doc! { "id": order_id, "userId": user_id })
        .await?;
    order.ok_or(AppError::NotFound)
}
