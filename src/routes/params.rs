use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::GUEST_USER_ID;

/// Filters for the product listing. All optional and AND-composed.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortBy {
    Price,
    Rating,
    CreatedAt,
}

impl ProductSortBy {
    /// Resolve the requested sort field; anything unrecognized (or absent)
    /// falls back to creation time.
    pub fn resolve(sort: Option<&str>) -> Self {
        match sort {
            Some("price") => ProductSortBy::Price,
            Some("rating") => ProductSortBy::Rating,
            _ => ProductSortBy::CreatedAt,
        }
    }

    pub fn as_field(&self) -> &'static str {
        match self {
            ProductSortBy::Price => "price",
            ProductSortBy::Rating => "rating",
            ProductSortBy::CreatedAt => "createdAt",
        }
    }
}

/// Cart and order endpoints identify the acting user by query parameter,
/// defaulting to the guest placeholder.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<String>,
}

impl UserQuery {
    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(GUEST_USER_ID)
    }
}
