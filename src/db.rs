use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

use crate::models::{Cart, Order, Product, Review};

pub const PRODUCTS_COLLECTION: &str = "products";
pub const REVIEWS_COLLECTION: &str = "reviews";
pub const CARTS_COLLECTION: &str = "carts";
pub const ORDERS_COLLECTION: &str = "orders";

/// Connect to MongoDB. The client is acquired once at startup and handed
/// down through `AppState`; dropping it at process exit releases the pool.
pub async fn create_client(mongo_url: &str) -> Result<Client> {
    let client = Client::with_uri_str(mongo_url).await?;
    Ok(client)
}

/// Typed handles over the four storefront collections.
#[derive(Clone)]
pub struct Store {
    pub products: Collection<Product>,
    pub reviews: Collection<Review>,
    pub carts: Collection<Cart>,
    pub orders: Collection<Order>,
}

impl Store {
    pub fn new(db: &Database) -> Self {
        Self {
            products: db.collection(PRODUCTS_COLLECTION),
            reviews: db.collection(REVIEWS_COLLECTION),
            carts: db.collection(CARTS_COLLECTION),
            orders: db.collection(ORDERS_COLLECTION),
        }
    }

    /// Create the indexes the services rely on. The unique index on
    /// `carts.userId` backstops the one-cart-per-user invariant.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let cart_index = IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.carts.create_index(cart_index).await?;

        let review_index = IndexModel::builder()
            .keys(doc! { "productId": 1, "createdAt": -1 })
            .build();
        self.reviews.create_index(review_index).await?;

        let order_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "createdAt": -1 })
            .build();
        self.orders.create_index(order_index).await?;

        Ok(())
    }
}
