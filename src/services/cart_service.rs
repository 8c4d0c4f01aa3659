use chrono::Utc;
use mongodb::bson::{doc, to_bson};
use mongodb::options::UpdateOptions;
use uuid::Uuid;

use crate::{
    dto::cart::CartItemRequest,
    error::{AppError, AppResult},
    models::{Cart, CartItem},
    state::AppState,
};

/// Fetch the user's cart, creating an empty one on first access.
///
/// Creation is an atomic `$setOnInsert` upsert keyed on userId, so two
/// concurrent first touches cannot produce two cart documents.
pub async fn get_cart(state: &AppState, user_id: &str) -> AppResult<Cart> {
    ensure_cart(state, user_id).await
}

/// Add `quantity` of a product, merging into an existing line item if one
/// is already present.
pub async fn add_item(
    state: &AppState,
    user_id: &str,
    payload: CartItemRequest,
) -> AppResult<Vec<CartItem>> {
    let _guard = state.cart_locks.acquire(user_id).await;

    let cart = ensure_cart(state, user_id).await?;
    let mut items = cart.items;
    merge_add(&mut items, &payload.product_id, payload.quantity);

    write_items(state, user_id, &items).await?;
    Ok(items)
}

/// Replace a line item's quantity; zero or below deletes the line item.
/// Fails with NotFound when the user has no cart yet; an unknown productId
/// is a no-op.
pub async fn update_item(
    state: &AppState,
    user_id: &str,
    payload: CartItemRequest,
) -> AppResult<Vec<CartItem>> {
    let _guard = state.cart_locks.acquire(user_id).await;

    let cart = state
        .store
        .carts
        .find_one(doc! { "userId": user_id })
        .await?
        .ok_or(AppError::NotFound)?;

    let mut items = cart.items;
    apply_update(&mut items, &payload.product_id, payload.quantity);

    write_items(state, user_id, &items).await?;
    Ok(items)
}

/// Drop any line item matching the product; no-op when the cart is absent
/// or the item is not in it.
pub async fn remove_item(state: &AppState, user_id: &str, product_id: &str) -> AppResult<()> {
    let _guard = state.cart_locks.acquire(user_id).await;

    let cart = state
        .store
        .carts
        .find_one(doc! { "userId": user_id })
        .await?;

    if let Some(cart) = cart {
        let mut items = cart.items;
        items.retain(|item| item.product_id != product_id);
        write_items(state, user_id, &items).await?;
    }
    Ok(())
}

/// Empty the cart. Writes against a possibly-absent document; the update
/// simply matches nothing in that case.
pub async fn clear_cart(state: &AppState, user_id: &str) -> AppResult<()> {
    let _guard = state.cart_locks.acquire(user_id).await;
    write_items(state, user_id, &[]).await?;
    Ok(())
}

async fn ensure_cart(state: &AppState, user_id: &str) -> AppResult<Cart> {
    let update = doc! {
        "$setOnInsert": {
            "id": Uuid::new_v4().to_string(),
            "userId": user_id,
            "items": [],
            "updatedAt": to_bson(&Utc::now())?,
        }
    };
    let options = UpdateOptions::builder().upsert(true).build();
    state
        .store
        .carts
        .update_one(doc! { "userId": user_id }, update)
        .with_options(options)
        .await?;

    let cart = state
        .store
        .carts
        .find_one(doc! { "userId": user_id })
        .await?
        .ok_or_else(|| anyhow::anyhow!("cart vanished after upsert"))?;
    Ok(cart)
}

async fn write_items(state: &AppState, user_id: &str, items: &[CartItem]) -> AppResult<()> {
    state
        .store
        .carts
        .update_one(
            doc! { "userId": user_id },
            doc! { "$set": { "items": to_bson(items)?, "updatedAt": to_bson(&Utc::now())? } },
        )
        .await?;
    Ok(())
}

/// Merge semantics for add: increment an existing line item, else append.
/// Quantity is passed through unchecked; the caller owns validation.
fn merge_add(items: &mut Vec<CartItem>, product_id: &str, quantity: i64) {
    match items.iter_mut().find(|item| item.product_id == product_id) {
        Some(item) => item.quantity += quantity,
        None => items.push(CartItem {
            product_id: product_id.to_string(),
            quantity,
        }),
    }
}

/// Update semantics: replace the quantity, delete the line item at zero or
/// below, ignore unknown products.
fn apply_update(items: &mut Vec<CartItem>, product_id: &str, quantity: i64) {
    if items.iter().any(|item| item.product_id == product_id) {
        if quantity <= 0 {
            items.retain(|item| item.product_id != product_id);
        } else if let Some(item) = items.iter_mut().find(|item| item.product_id == product_id) {
            item.quantity = quantity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, quantity: i64) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn add_merges_quantities_into_one_line_item() {
        let mut items = Vec::new();
        merge_add(&mut items, "p1", 2);
        merge_add(&mut items, "p1", 3);
        assert_eq!(items, vec![item("p1", 5)]);
    }

    #[test]
    fn add_appends_new_products_in_order() {
        let mut items = vec![item("p1", 1)];
        merge_add(&mut items, "p2", 4);
        assert_eq!(items, vec![item("p1", 1), item("p2", 4)]);
    }

    #[test]
    fn update_replaces_rather_than_increments() {
        let mut items = vec![item("p1", 5)];
        apply_update(&mut items, "p1", 2);
        assert_eq!(items, vec![item("p1", 2)]);
    }

    #[test]
    fn update_to_zero_removes_the_line_item() {
        let mut items = vec![item("p1", 5), item("p2", 1)];
        apply_update(&mut items, "p1", 0);
        assert_eq!(items, vec![item("p2", 1)]);
    }

    #[test]
    fn update_below_zero_also_removes() {
        let mut items = vec![item("p1", 5)];
        apply_update(&mut items, "p1", -3);
        assert!(items.is_empty());
    }

    #[test]
    fn update_of_unknown_product_is_a_no_op() {
        let mut items = vec![item("p1", 5)];
        apply_update(&mut items, "p2", 9);
        assert_eq!(items, vec![item("p1", 5)]);
    }
}
