use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CartItem;

/// Body for both `/cart/add` and `/cart/update`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartMutation {
    pub message: String,
    pub items: Vec<CartItem>,
}
