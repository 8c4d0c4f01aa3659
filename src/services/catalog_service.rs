use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};

use crate::{
    error::{AppError, AppResult},
    models::Product,
    routes::params::{ProductQuery, ProductSortBy},
    services::LIST_CAP,
    state::AppState,
};

/// List products matching every supplied filter, ordered descending by the
/// resolved sort field.
pub async fn list_products(state: &AppState, query: ProductQuery) -> AppResult<Vec<Product>> {
    let filter = build_filter(&query);
    let sort_field = ProductSortBy::resolve(query.sort.as_deref()).as_field();

    let cursor = state
        .store
        .products
        .find(filter)
        .sort(doc! { sort_field: -1 })
        .limit(LIST_CAP)
        .await?;

    let products = cursor.try_collect().await?;
    Ok(products)
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<Product> {
    let product = state.store.products.find_one(doc! { "id": id }).await?;
    product.ok_or(AppError::NotFound)
}

/// Distinct category labels across the whole catalog, order store-defined.
pub async fn list_categories(state: &AppState) -> AppResult<Vec<String>> {
    let values = state
        .store
        .products
        .distinct("category", doc! {})
        .await?;

    let categories = values
        .into_iter()
        .filter_map(|value| match value {
            Bson::String(s) => Some(s),
            _ => None,
        })
        .collect();
    Ok(categories)
}

fn build_filter(query: &ProductQuery) -> Document {
    let mut filter = Document::new();

    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        filter.insert("category", category);
    }
    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        // Case-insensitive substring match on the product name.
        filter.insert("name", doc! { "$regex": search, "$options": "i" });
    }

    let mut price = Document::new();
    if let Some(min) = query.min_price {
        price.insert("$gte", min);
    }
    if let Some(max) = query.max_price {
        price.insert("$lte", max);
    }
    if !price.is_empty() {
        filter.insert("price", price);
    }

    filter
}
