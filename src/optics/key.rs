//! Lenses on the entry of a map at a fixed key.
//!
//! [`at_key`] builds a [`KeyLens`] that focuses on `Option<V>`: `get` yields
//! the value stored under the key (or `None`), `set(Some(v))` inserts or
//! overwrites, and `set(None)` removes the entry. The map is taken by value
//! and returned; the caller's map is never changed behind its back.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use lenskit::optics::{Lens, at_key};
//!
//! let inventory = BTreeMap::from([("apple", 3), ("pear", 0)]);
//! let apples = at_key("apple");
//!
//! let restocked = apples.modify(inventory, |count: Option<i32>| count.map(|count| count + 10));
//! assert_eq!(restocked.get("apple"), Some(&13));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use super::Lens;

/// A map-like collection that [`KeyLens`] can read and rebuild.
pub trait KeyedCollection<K, V> {
    /// Returns a reference to the value at `key`, if any.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Inserts or overwrites the value at `key`.
    fn insert_at(&mut self, key: K, value: V);

    /// Removes the entry at `key`, if present.
    fn remove_at(&mut self, key: &K);
}

impl<K, V, H> KeyedCollection<K, V> for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_at(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn remove_at(&mut self, key: &K) {
        self.remove(key);
    }
}

impl<K: Ord, V> KeyedCollection<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_at(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn remove_at(&mut self, key: &K) {
        self.remove(key);
    }
}

/// A lens on the optional value stored at a key of a map `M`.
///
/// # Type Parameters
///
/// - `K`: The key type
/// - `V`: The value type
/// - `M`: The map type
///
/// # Laws
///
/// All three lens laws hold: setting `None` for an absent key leaves the map
/// unchanged, and setting back what `get` returned rebuilds an equal map.
pub struct KeyLens<K, V, M> {
    key: K,
    _marker: PhantomData<(V, M)>,
}

impl<K, V, M> KeyLens<K, V, M> {
    /// Creates a new `KeyLens` for the given key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// Returns the key this lens focuses on.
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }
}

/// Creates a lens on the entry at `key`.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use lenskit::optics::{Lens, at_key};
///
/// let whole = HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
/// let a = at_key("a".to_string());
///
/// assert_eq!(a.get(&whole), Some(1));
///
/// let updated = a.set(whole, Some(5));
/// assert_eq!(updated["a"], 5);
/// assert_eq!(updated["b"], 2);
///
/// let removed = a.set(updated, None);
/// assert!(!removed.contains_key("a"));
/// ```
#[must_use]
pub const fn at_key<K, V, M>(key: K) -> KeyLens<K, V, M> {
    KeyLens::new(key)
}

impl<K, V, M> Lens<M, M, Option<V>, Option<V>> for KeyLens<K, V, M>
where
    K: Clone,
    V: Clone,
    M: KeyedCollection<K, V>,
{
    fn get(&self, source: &M) -> Option<V> {
        source.lookup(&self.key).cloned()
    }

    fn set(&self, mut source: M, value: Option<V>) -> M {
        match value {
            Some(value) => source.insert_at(self.key.clone(), value),
            None => source.remove_at(&self.key),
        }
        source
    }
}

impl<K: Clone, V, M> Clone for KeyLens<K, V, M> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<K: std::fmt::Debug, V, M> std::fmt::Debug for KeyLens<K, V, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("KeyLens")
            .field("key", &self.key)
            .finish()
    }
}

impl_compose_operator!([K, V, M] KeyLens<K, V, M> => (Option<V>, Option<V>));
