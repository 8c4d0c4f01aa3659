use crate::db::Store;
use crate::locks::KeyedLocks;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    /// Serializes cart mutations per userId.
    pub cart_locks: KeyedLocks,
    /// Serializes the rating aggregate recompute per productId.
    pub product_locks: KeyedLocks,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            cart_locks: KeyedLocks::new(),
            product_locks: KeyedLocks::new(),
        }
    }
}
