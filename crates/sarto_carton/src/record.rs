//! Insertion-ordered record.
//!
//! Props and inline styles are tiny (rarely more than a handful of keys) and
//! their order is observable in the rendered output, so they are stored as a
//! flat `SmallVec` of key/value pairs instead of a hash map.

use std::fmt;

use compact_str::CompactString;
use smallvec::SmallVec;

type Entries<V> = SmallVec<[(CompactString, V); 8]>;

/// A small map that remembers insertion order.
#[derive(Clone, PartialEq)]
pub struct Record<V> {
    entries: Entries<V>,
}

impl<V> Record<V> {
    /// Create an empty record
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.as_str() == key)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k.as_str() == key).then_some(v))
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert a value, returning the previous one.
    ///
    /// An existing key is replaced in place; a new key is appended.
    pub fn insert(&mut self, key: impl Into<CompactString>, value: V) -> Option<V> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[inline]
    pub fn with(mut self, key: impl Into<CompactString>, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.position(key).map(|index| self.entries.remove(index).1)
    }

    pub fn retain(&mut self, mut f: impl FnMut(&str, &V) -> bool) {
        self.entries.retain(|entry| f(&entry.0, &entry.1));
    }

    /// Overlay `other` on top of `self`: keys of `other` win, new keys are
    /// appended in `other`'s order.
    pub fn overlay(&mut self, other: Record<V>) {
        for (key, value) in other {
            self.insert(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V> Default for Record<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<CompactString>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl<K: Into<CompactString>, V> Extend<(K, V)> for Record<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (CompactString, V);
    type IntoIter = smallvec::IntoIter<[(CompactString, V); 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
