use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        Message,
        cart::{CartItemRequest, CartMutation},
        orders::CreateOrderRequest,
        products::CategoryList,
        reviews::CreateReviewRequest,
    },
    models::{Cart, CartItem, Order, OrderItem, Product, Review, ShippingAddress},
    routes::{self, cart, health, orders, products, reviews, seed},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        routes::root,
        products::list_products,
        products::get_product,
        products::list_categories,
        reviews::create_review,
        reviews::list_reviews,
        cart::get_cart,
        cart::add_to_cart,
        cart::update_cart_item,
        cart::remove_from_cart,
        cart::clear_cart,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        seed::init_data
    ),
    components(
        schemas(
            Product,
            Review,
            Cart,
            CartItem,
            Order,
            OrderItem,
            ShippingAddress,
            CategoryList,
            CreateReviewRequest,
            CartItemRequest,
            CartMutation,
            CreateOrderRequest,
            Message,
            health::HealthData,
            seed::SeedResponse
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Info", description = "Service info"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Reviews", description = "Review endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Seed", description = "Catalog seeding"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
