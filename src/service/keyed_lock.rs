//! Async mutexes handed out per key.
//!
//! An entry exists only while some task holds or waits for its lock, so keys that
//! are locked once (a rejected `/setup`, a click on a long gone event) leave nothing
//! behind.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::{Arc, Mutex, PoisonError},
};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockTable<K> = Arc<Mutex<HashMap<K, Arc<AsyncMutex<()>>>>>;

/// Per-key locks, cheap to clone.
pub struct KeyedLocks<K> {
    locks: LockTable<K>,
}

impl<K> Clone for KeyedLocks<K> {
    fn clone(&self) -> Self {
        Self {
            locks: self.locks.clone(),
        }
    }
}

impl<K> Default for KeyedLocks<K> {
    fn default() -> Self {
        Self {
            locks: Arc::default(),
        }
    }
}

impl<K: Hash + Eq + Copy> KeyedLocks<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `key`.
    pub async fn lock(&self, key: K) -> KeyedGuard<K> {
        let lock = table(&self.locks).entry(key).or_default().clone();

        KeyedGuard {
            guard: Some(lock.lock_owned().await),
            locks: self.locks.clone(),
            key,
        }
    }

    /// Number of keys currently locked or waited on.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        table(&self.locks).len()
    }
}

/// Releases the key on drop and forgets it once nobody else is waiting.
pub struct KeyedGuard<K: Hash + Eq> {
    guard: Option<OwnedMutexGuard<()>>,
    locks: LockTable<K>,
    key: K,
}

impl<K: Hash + Eq> Drop for KeyedGuard<K> {
    fn drop(&mut self) {
        self.guard.take();

        let mut locks = table(&self.locks);
        // Waiters hold a clone of the mutex; only the table's reference is left otherwise.
        if locks
            .get(&self.key)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.key);
        }
    }
}

fn table<K>(
    locks: &Mutex<HashMap<K, Arc<AsyncMutex<()>>>>,
) -> std::sync::MutexGuard<'_, HashMap<K, Arc<AsyncMutex<()>>>> {
    locks.lock().unwrap_or_else(PoisonError::into_inner)
}
