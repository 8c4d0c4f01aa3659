use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-key serialization points for read-modify-write sequences.
///
/// The cart item rewrite and the review aggregate recompute each span
/// several document operations; holding the key's mutex across the sequence
/// prevents two in-process requests for the same userId or productId from
/// interleaving and losing updates. Locks are allocated lazily on first use
/// and never reclaimed; the key space (user ids, product ids) is small.
#[derive(Clone, Default)]
pub struct KeyedLocks {
    inner: Arc<StdMutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the mutex for `key`, waiting if another task holds it.
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().expect("lock map poisoned");
            map.entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_key_serializes() {
        let locks = KeyedLocks::new();
        let guard = locks.acquire("u1").await;

        let locks2 = locks.clone();
        let handle = tokio::spawn(async move {
            let _guard = locks2.acquire("u1").await;
        });

        // The spawned task cannot finish until the guard drops.
        tokio::task::yield_now().await;
        assert!(!handle.is_finished());

        drop(guard);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn distinct_keys_do_not_block() {
        let locks = KeyedLocks::new();
        let _a = locks.acquire("a").await;
        let _b = locks.acquire("b").await;
    }
}
