use serde::Serialize;
use utoipa::ToSchema;

pub mod cart;
pub mod orders;
pub mod products;
pub mod reviews;

/// Bare `{"message": ...}` body shared by the info and cart endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
