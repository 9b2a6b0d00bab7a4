use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Whether a lookup was served from memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

struct Entry<V> {
    created: Instant,
    value: Arc<V>,
}

/// Time-bounded memo of generated series, keyed by request parameters.
///
/// Entries older than the TTL are regenerated on the next lookup.
pub struct SeriesCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K: Eq + Hash + Copy + std::fmt::Debug, V> SeriesCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, generating it when absent, expired or `refresh` is set
    pub fn get_or_try_insert<E>(
        &self,
        key: K,
        refresh: bool,
        generate: impl FnOnce() -> Result<V, E>,
    ) -> Result<(Arc<V>, CacheStatus), E> {
        let mut entries = self.entries.lock();

        if !refresh {
            if let Some(entry) = entries.get(&key) {
                if entry.created.elapsed() < self.ttl {
                    debug!(?key, "series cache hit");
                    return Ok((entry.value.clone(), CacheStatus::Hit));
                }
            }
        }

        debug!(?key, refresh, "series cache miss");
        let value = Arc::new(generate()?);

        let ttl = self.ttl;
        let before = entries.len();
        entries.retain(|_, e| e.created.elapsed() < ttl);
        if entries.len() < before {
            debug!(evicted = before - entries.len(), "evicted expired series");
        }
        entries.insert(
            key,
            Entry {
                created: Instant::now(),
                value: value.clone(),
            },
        );
        Ok((value, CacheStatus::Miss))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_within_ttl() {
        let cache: SeriesCache<u32, Vec<u32>> = SeriesCache::new(Duration::from_secs(60));
        let (a, status) = cache.get_or_try_insert(7, false, || Ok::<_, ()>(vec![1])).unwrap();
        assert_eq!(status, CacheStatus::Miss);
        let (b, status) = cache.get_or_try_insert(7, false, || Ok::<_, ()>(vec![2])).unwrap();
        assert_eq!(status, CacheStatus::Hit);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*b, vec![1]);
    }

    #[test]
    fn test_keys_are_independent() {
        let cache: SeriesCache<u32, u32> = SeriesCache::new(Duration::from_secs(60));
        cache.get_or_try_insert(7, false, || Ok::<_, ()>(7)).unwrap();
        let (v, status) = cache.get_or_try_insert(30, false, || Ok::<_, ()>(30)).unwrap();
        assert_eq!(status, CacheStatus::Miss);
        assert_eq!(*v, 30);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_refresh_replaces_entry() {
        let cache: SeriesCache<u32, u32> = SeriesCache::new(Duration::from_secs(60));
        cache.get_or_try_insert(7, false, || Ok::<_, ()>(1)).unwrap();
        let (v, status) = cache.get_or_try_insert(7, true, || Ok::<_, ()>(2)).unwrap();
        assert_eq!(status, CacheStatus::Miss);
        assert_eq!(*v, 2);
        let (v, _) = cache.get_or_try_insert(7, false, || Ok::<_, ()>(3)).unwrap();
        assert_eq!(*v, 2);
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let cache: SeriesCache<u32, u32> = SeriesCache::new(Duration::ZERO);
        cache.get_or_try_insert(7, false, || Ok::<_, ()>(1)).unwrap();
        let (_, status) = cache.get_or_try_insert(7, false, || Ok::<_, ()>(2)).unwrap();
        assert_eq!(status, CacheStatus::Miss);
    }

    #[test]
    fn test_expired_entries_evicted_on_regeneration() {
        let cache: SeriesCache<u32, u32> = SeriesCache::new(Duration::ZERO);
        cache.get_or_try_insert(7, false, || Ok::<_, ()>(7)).unwrap();
        cache.get_or_try_insert(14, false, || Ok::<_, ()>(14)).unwrap();
        cache.get_or_try_insert(30, false, || Ok::<_, ()>(30)).unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_generation_error_leaves_cache_untouched() {
        let cache: SeriesCache<u32, u32> = SeriesCache::new(Duration::from_secs(60));
        let err = cache.get_or_try_insert(7, false, || Err::<u32, _>("boom")).unwrap_err();
        assert_eq!(err, "boom");
        assert_eq!(cache.len(), 0);
    }
}
