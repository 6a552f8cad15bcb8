//! Insertion-ordered string-keyed mapping.
//!
//! Key enumeration order is the contract here: every helper that walks a
//! mapping's own keys does so in insertion order, so [`ValueMap`] stores
//! its entries as an ordered list and scans linearly. The collections this
//! library targets are small property bags, which is also why the entry
//! list keeps its first few entries inline.

use smallvec::SmallVec;

use super::Value;

/// Inline capacity tuned for prop-bag-sized mappings.
type Entries = SmallVec<[(String, Value); 4]>;

/// A string-keyed mapping with insertion-ordered keys.
///
/// Re-inserting an existing key replaces the value but keeps the key's
/// original position. Equality is order-insensitive: two maps are equal
/// when they hold the same entries regardless of insertion history.
///
/// # Examples
///
/// ```rust
/// use underbars::value::{Value, ValueMap};
///
/// let mut map = ValueMap::new();
/// map.insert("b", Value::from(2));
/// map.insert("a", Value::from(1));
/// map.insert("b", Value::from(20));
///
/// assert_eq!(map.get("b"), Some(&Value::from(20)));
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ValueMap {
    // Boxed to break the `Value` -> `ValueMap` -> inline `Value` layout cycle:
    // `SmallVec` stores its first entries inline, so without indirection here
    // `Value::Map` would be infinitely sized.
    entries: Box<Entries>,
}

impl ValueMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Box::new(Entries::new()),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Returns whether the map holds an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    /// Inserts an entry, returning the previous value for the key.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes an entry, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(name, _)| name == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates over entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl PartialEq for ValueMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl FromIterator<(String, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(entries: I) -> Self {
        let mut map = Self::new();
        map.extend(entries);
        map
    }
}

impl Extend<(String, Value)> for ValueMap {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, entries: I) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for ValueMap {
    type Item = (String, Value);
    type IntoIter = smallvec::IntoIter<[(String, Value); 4]>;

    fn into_iter(self) -> Self::IntoIter {
        (*self.entries).into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing entry iterator for [`ValueMap`], in insertion order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
