pub mod cart_service;
pub mod catalog_service;
pub mod order_service;
pub mod review_service;
pub mod seed_service;

/// Listing queries return at most this many documents; the API exposes no
/// pagination.
pub const LIST_CAP: i64 = 1000;
