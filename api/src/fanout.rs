//! Bounded-concurrency fan-out for per-record join fetches.
//!
//! Directory and dashboard screens need one join-set request per record. The
//! requests are independent, so they run concurrently, but through a fixed
//! window rather than all at once: a directory of N records stays at
//! [`FANOUT_LIMIT`] in-flight requests instead of opening N connections.
//!
//! A failed fetch yields the default (empty) value for that record and is
//! logged; it never blocks the rows that did succeed.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use futures::stream::{self, StreamExt};

use crate::error::ApiError;

/// In-flight request window for per-record fetches.
pub const FANOUT_LIMIT: usize = 8;

/// Fetch one value per key, keyed back to its record. Completion order is
/// not significant; the map recovers the association.
pub async fn fetch_map<K, V, F, Fut>(keys: Vec<K>, fetch: F) -> HashMap<K, V>
where
    K: Eq + Hash + Copy,
    V: Default,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<V, ApiError>>,
{
    let futures: Vec<_> = keys
        .into_iter()
        .map(|key| {
            let fut = fetch(key);
            async move { (key, fut.await) }
        })
        .collect();

    stream::iter(futures)
        .buffer_unordered(FANOUT_LIMIT)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .map(|(key, result)| match result {
            Ok(value) => (key, value),
            Err(err) => {
                tracing::warn!(%err, "per-record fetch failed; treating as empty");
                (key, V::default())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_map_preserves_key_association() {
        let keys = vec![1i64, 2, 3, 4, 5];
        let map = fetch_map(keys, |k| async move { Ok::<_, ApiError>(vec![k * 10]) }).await;

        assert_eq!(map.len(), 5);
        assert_eq!(map[&3], vec![30]);
        assert_eq!(map[&5], vec![50]);
    }

    #[tokio::test]
    async fn test_fetch_map_defaults_failed_records() {
        let map = fetch_map(vec![1i64, 2], |k| async move {
            if k == 2 {
                Err(ApiError::Transport("down".to_string()))
            } else {
                Ok(vec![k])
            }
        })
        .await;

        assert_eq!(map[&1], vec![1]);
        assert_eq!(map[&2], Vec::<i64>::new());
    }

    #[tokio::test]
    async fn test_fetch_map_handles_more_keys_than_window() {
        let keys: Vec<i64> = (0..50).collect();
        let map = fetch_map(keys, |k| async move { Ok::<_, ApiError>(k) }).await;
        assert_eq!(map.len(), 50);
        assert_eq!(map[&49], 49);
    }
}
