// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cache for resolved typefaces.

use alloc::string::String;
use core::fmt;
use hashbrown::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Memoized typeface handles keyed by the font identifier they were resolved from.
///
/// A cache is constructed once by its owner and shared by reference with every
/// [`TypefaceResolver`](crate::TypefaceResolver) that should see the same
/// entries. Entries are never evicted on their own; call [`clear`](Self::clear)
/// to release them, for example under memory pressure.
///
/// The internal lock is only held for the duration of a lookup or insert, so
/// the cache can be shared between threads.
pub struct TypefaceCache<T> {
    map: Mutex<HashMap<String, T>>,
}

impl<T> TypefaceCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
        }
    }

    /// Returns a clone of the handle cached for `identifier`.
    pub fn get(&self, identifier: &str) -> Option<T>
    where
        T: Clone,
    {
        self.lock().get(identifier).cloned()
    }

    /// Caches `typeface` under `identifier`, replacing any previous entry.
    pub fn insert(&self, identifier: &str, typeface: T) {
        self.lock().insert(identifier.into(), typeface);
    }

    /// Returns `true` if a handle is cached for `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.lock().contains_key(identifier)
    }

    /// Number of cached handles.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no handles are cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every cached handle.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, T>> {
        // The map is left consistent by every operation, so a panic while
        // holding the lock cannot corrupt it.
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for TypefaceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TypefaceCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypefaceCache")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
