//! A small object pool handing out reusable [`Cache`](crate::nfa::executor::Cache)
//! values so a shared, `Send + Sync` [`crate::Regex`] doesn't force every
//! caller to allocate matching scratch space from scratch.
//!
//! This is a plain `Mutex`-guarded free list, not a lock-free
//! thread-owner-slot pool; a mutex is the right amount of cleverness for a
//! crate whose matching cost is dominated by the NFA simulation itself,
//! not by pool contention.

use std::sync::Mutex;

use crate::nfa::executor::Cache;

pub(crate) struct Pool {
    free: Mutex<Vec<Cache>>,
}

impl Pool {
    pub(crate) fn new() -> Self {
        Pool { free: Mutex::new(Vec::new()) }
    }

    pub(crate) fn get(&self) -> PooledCache<'_> {
        let cache = self.free.lock().unwrap().pop().unwrap_or_default();
        PooledCache { pool: self, cache: Some(cache) }
    }
}

/// A [`Cache`] borrowed from a [`Pool`]; returned to the pool on drop.
pub(crate) struct PooledCache<'a> {
    pool: &'a Pool,
    cache: Option<Cache>,
}

impl std::ops::Deref for PooledCache<'_> {
    type Target = Cache;
    fn deref(&self) -> &Cache {
        self.cache.as_ref().expect("cache taken only on drop")
    }
}

impl std::ops::DerefMut for PooledCache<'_> {
    fn deref_mut(&mut self) -> &mut Cache {
        self.cache.as_mut().expect("cache taken only on drop")
    }
}

impl Drop for PooledCache<'_> {
    fn drop(&mut self) {
        if let Some(cache) = self.cache.take() {
            self.pool.free.lock().unwrap().push(cache);
        }
    }
}
