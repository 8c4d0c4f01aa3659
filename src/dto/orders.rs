use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{OrderItem, ShippingAddress};

/// Checkout payload. Items and total are stored verbatim; the server does
/// not recompute against current product prices.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub shipping_address: ShippingAddress,
}
