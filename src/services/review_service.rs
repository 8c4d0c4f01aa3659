use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::doc;
use uuid::Uuid;

use crate::{
    dto::reviews::CreateReviewRequest,
    error::AppResult,
    models::{GUEST_USER_ID, GUEST_USER_NAME, Review},
    services::LIST_CAP,
    state::AppState,
};

/// Store a review, then recompute the owning product's aggregate rating.
///
/// The recompute is serialized per productId so two concurrent reviews
/// cannot overwrite each other's aggregate. An unknown productId is not an
/// error: the review is stored and the product update matches nothing.
pub async fn create_review(state: &AppState, payload: CreateReviewRequest) -> AppResult<Review> {
    let review = Review {
        id: Uuid::new_v4().to_string(),
        product_id: payload.product_id,
        user_id: GUEST_USER_ID.to_string(),
        user_name: GUEST_USER_NAME.to_string(),
        rating: payload.rating,
        comment: payload.comment,
        created_at: Utc::now(),
    };
    state.store.reviews.insert_one(&review).await?;

    let _guard = state.product_locks.acquire(&review.product_id).await;

    let reviews: Vec<Review> = state
        .store
        .reviews
        .find(doc! { "productId": &review.product_id })
        .limit(LIST_CAP)
        .await?
        .try_collect()
        .await?;

    // The insert above guarantees at least one review here.
    let ratings: Vec<i64> = reviews.iter().map(|r| r.rating).collect();
    let rating = aggregate_rating(&ratings);

    state
        .store
        .products
        .update_one(
            doc! { "id": &review.product_id },
            doc! { "$set": { "rating": rating, "reviewCount": ratings.len() as i64 } },
        )
        .await?;

    Ok(review)
}

/// Reviews for a product, newest first.
pub async fn list_reviews(state: &AppState, product_id: &str) -> AppResult<Vec<Review>> {
    let reviews = state
        .store
        .reviews
        .find(doc! { "productId": product_id })
        .sort(doc! { "createdAt": -1 })
        .limit(LIST_CAP)
        .await?
        .try_collect()
        .await?;
    Ok(reviews)
}

/// Mean rating rounded to one decimal place.
fn aggregate_rating(ratings: &[i64]) -> f64 {
    let sum: i64 = ratings.iter().sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::aggregate_rating;

    #[test]
    fn single_review_is_its_own_mean() {
        assert_eq!(aggregate_rating(&[4]), 4.0);
    }

    #[test]
    fn mean_rounds_to_one_decimal() {
        assert_eq!(aggregate_rating(&[5, 4]), 4.5);
        assert_eq!(aggregate_rating(&[5, 4, 4]), 4.3);
        assert_eq!(aggregate_rating(&[1, 2]), 1.5);
        assert_eq!(aggregate_rating(&[2, 2, 3]), 2.3);
    }
}
