//! Memoisation of check results.
//!
//! A check only ever sees a [`CacheSlot`]: a cell it can read and fill. Who
//! owns the storage behind the slot, and when it is invalidated, is up to the
//! caller.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// A per-unit, per-check cell holding a memoised decision.
pub trait CacheSlot {
    fn get(&self) -> Option<bool>;
    fn set(&mut self, value: bool);
}

/// The simplest slot: a local `Option<bool>`.
impl CacheSlot for Option<bool> {
    fn get(&self) -> Option<bool> {
        *self
    }

    fn set(&mut self, value: bool) {
        *self = Some(value);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    unit: String,
    check: &'static str,
    slot: usize,
}

/// Shared store of memoised results keyed by unit, check and slot index.
///
/// Safe to share between threads. Two threads racing on one key both compute
/// the same value, so the last write wins without harm.
#[derive(Debug, Default)]
pub struct CheckCache {
    entries: Mutex<HashMap<CacheKey, bool>>,
}

impl CheckCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for `check` on `unit`; plural checks use one slot per source form.
    pub fn entry(&self, unit: &str, check: &'static str, slot: usize) -> CacheEntry<'_> {
        CacheEntry {
            cache: self,
            key: CacheKey {
                unit: unit.to_string(),
                check,
                slot,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, bool>> {
        // A poisoned map still only holds complete bool values.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A slot backed by a [`CheckCache`].
#[derive(Debug)]
pub struct CacheEntry<'a> {
    cache: &'a CheckCache,
    key: CacheKey,
}

impl CacheSlot for CacheEntry<'_> {
    fn get(&self) -> Option<bool> {
        self.cache.lock().get(&self.key).copied()
    }

    fn set(&mut self, value: bool) {
        self.cache.lock().insert(self.key.clone(), value);
    }
}
