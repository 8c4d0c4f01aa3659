use chrono::Utc;
use mongodb::bson::doc;
use uuid::Uuid;

use crate::{error::AppResult, models::Product, state::AppState};

pub enum SeedOutcome {
    AlreadyInitialized,
    Seeded(usize),
}

/// Bulk-insert the fixed catalog unless products already exist.
///
/// Idempotent once the first seed lands; the count check is not atomic with
/// the insert, so two racing first calls could both seed (accepted gap).
pub async fn seed(state: &AppState) -> AppResult<SeedOutcome> {
    let existing = state.store.products.count_documents(doc! {}).await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadyInitialized);
    }

    let products = catalog();
    let count = products.len();
    state.store.products.insert_many(&products).await?;
    tracing::info!(count, "seeded product catalog");

    Ok(SeedOutcome::Seeded(count))
}

fn entry(
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    image: &str,
    rating: f64,
    stock: i64,
) -> Product {
    Product {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: image.to_string(),
        rating,
        review_count: 0,
        stock,
        created_at: Utc::now(),
    }
}

fn catalog() -> Vec<Product> {
    vec![
        entry(
            "Premium Laptop",
            "High-performance laptop with latest processor and stunning display. Perfect for work and entertainment.",
            1299.99,
            "Electronics",
            "https://images.unsplash.com/photo-1691073121676-1ab3a6d3d743",
            4.5,
            50,
        ),
        entry(
            "Wireless Earbuds",
            "Crystal clear sound with active noise cancellation. Long battery life and comfortable fit.",
            149.99,
            "Electronics",
            "https://images.unsplash.com/photo-1717996563514-e3519f9ef9f7",
            4.3,
            100,
        ),
        entry(
            "Smart Watch",
            "Track your fitness, receive notifications, and stay connected on the go.",
            299.99,
            "Electronics",
            "https://images.pexels.com/photos/10185544/pexels-photo-10185544.jpeg",
            4.6,
            75,
        ),
        entry(
            "Designer T-Shirt",
            "Premium quality cotton t-shirt with modern design. Comfortable and stylish.",
            39.99,
            "Fashion",
            "https://images.unsplash.com/photo-1532453288672-3a27e9be9efd",
            4.4,
            200,
        ),
        entry(
            "Running Shoes",
            "Lightweight and comfortable running shoes with excellent cushioning and support.",
            89.99,
            "Fashion",
            "https://images.unsplash.com/photo-1567401893414-76b7b1e5a7a5",
            4.7,
            150,
        ),
        entry(
            "Casual Jacket",
            "Stylish casual jacket perfect for any season. Durable and comfortable.",
            129.99,
            "Fashion",
            "https://images.unsplash.com/photo-1441984904996-e0b6ba687e04",
            4.5,
            80,
        ),
        entry(
            "Modern Sofa",
            "Comfortable and stylish sofa perfect for any living room. Premium upholstery.",
            899.99,
            "Home",
            "https://images.unsplash.com/photo-1616046229478-9901c5536a45",
            4.8,
            25,
        ),
        entry(
            "Table Lamp",
            "Elegant table lamp with adjustable brightness. Perfect for reading and ambiance.",
            49.99,
            "Home",
            "https://images.unsplash.com/photo-1618220179428-22790b461013",
            4.2,
            100,
        ),
        entry(
            "Wall Art Set",
            "Beautiful set of wall art to decorate your home. Modern and elegant design.",
            79.99,
            "Home",
            "https://images.unsplash.com/photo-1572048572872-2394404cf1f3",
            4.4,
            60,
        ),
        entry(
            "Coffee Maker",
            "Programmable coffee maker with thermal carafe. Brew perfect coffee every time.",
            79.99,
            "Kitchen",
            "https://images.pexels.com/photos/35348456/pexels-photo-35348456.jpeg",
            4.5,
            90,
        ),
        entry(
            "Blender Pro",
            "Powerful blender for smoothies, soups, and more. Multiple speed settings.",
            129.99,
            "Kitchen",
            "https://images.unsplash.com/photo-1586898633445-fc34716255b2",
            4.6,
            70,
        ),
        entry(
            "Yoga Mat",
            "Non-slip yoga mat with extra cushioning. Perfect for all types of workouts.",
            29.99,
            "Sports",
            "https://images.pexels.com/photos/3393705/pexels-photo-3393705.jpeg",
            4.3,
            120,
        ),
        entry(
            "Dumbbell Set",
            "Adjustable dumbbell set for home workouts. Multiple weight options.",
            199.99,
            "Sports",
            "https://images.unsplash.com/photo-1768987439370-bd60d3d0b28b",
            4.7,
            45,
        ),
        entry(
            "Backpack",
            "Spacious and durable backpack with laptop compartment. Perfect for travel and work.",
            59.99,
            "Accessories",
            "https://images.pexels.com/photos/7289716/pexels-photo-7289716.jpeg",
            4.4,
            110,
        ),
        entry(
            "Sunglasses",
            "Stylish sunglasses with UV protection. Classic design that never goes out of style.",
            89.99,
            "Accessories",
            "https://images.pexels.com/photos/7289741/pexels-photo-7289741.jpeg",
            4.5,
            95,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::catalog;

    #[test]
    fn catalog_has_fifteen_products_with_fresh_ids() {
        let products = catalog();
        assert_eq!(products.len(), 15);

        let mut ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 15);

        for product in &products {
            assert!(product.price > 0.0);
            assert_eq!(product.review_count, 0);
            assert!(product.stock > 0);
        }
    }
}
