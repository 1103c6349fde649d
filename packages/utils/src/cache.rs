//! A scoped cache for loaded artifacts such as compiled contracts.
//!
//! The cache is an ordinary value owned by whoever needs it, typically one
//! test fixture. Nothing is shared across tests unless the owner shares it.

use std::{borrow::Borrow, collections::HashMap, fmt::Debug, hash::Hash};

/// Memoizes fallible loads keyed by `K`.
#[derive(Debug, Clone)]
pub struct ArtifactCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for ArtifactCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Debug, V> ArtifactCache<K, V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, loading and storing it first if
    /// it is missing. A failed load is not cached.
    ///
    /// # Errors
    /// Returns the loader's error.
    pub fn get_or_try_insert_with<E, F>(&mut self, key: K, load: F) -> Result<&V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        match self.entries.entry(key) {
            std::collections::hash_map::Entry::Occupied(entry) => {
                tracing::debug!(key = ?entry.key(), "artifact cache hit");
                Ok(entry.into_mut())
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                tracing::debug!(key = ?entry.key(), "artifact cache miss, loading");
                let value = load(entry.key())?;
                Ok(entry.insert(value))
            }
        }
    }

    /// Returns the cached value for `key` without loading it.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key)
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn loads_once_per_key() {
        let loads = Cell::new(0);
        let mut cache = ArtifactCache::new();
        let mut load = |name: &String| -> Result<usize, String> {
            loads.set(loads.get() + 1);
            Ok(name.len())
        };

        assert_eq!(*cache.get_or_try_insert_with("ERC20".to_string(), &mut load).unwrap(), 5);
        assert_eq!(*cache.get_or_try_insert_with("ERC20".to_string(), &mut load).unwrap(), 5);
        assert_eq!(*cache.get_or_try_insert_with("WEVMOS".to_string(), &mut load).unwrap(), 6);

        assert_eq!(loads.get(), 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("ERC20"), Some(&5));
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let mut cache: ArtifactCache<&str, u8> = ArtifactCache::new();
        let err = cache
            .get_or_try_insert_with("Missing", |_| Err("not found"))
            .unwrap_err();
        assert_eq!(err, "not found");
        assert!(cache.is_empty());

        assert_eq!(
            cache.get_or_try_insert_with("Missing", |_| Ok::<_, &str>(1)),
            Ok(&1)
        );
    }

    #[test]
    fn caches_are_independent() {
        let mut first: ArtifactCache<&str, u8> = ArtifactCache::new();
        let second: ArtifactCache<&str, u8> = ArtifactCache::new();
        first
            .get_or_try_insert_with("Counter", |_| Ok::<_, ()>(1))
            .unwrap();

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());

        first.clear();
        assert!(first.is_empty());
    }
}
