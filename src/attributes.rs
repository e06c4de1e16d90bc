use std::fmt;

/// An insertion-ordered batch of proposed attribute assignments.
///
/// `AttributeSet<V>` maps attribute names to values of an arbitrary type `V`.
/// The sanitizer decides key membership only; values pass through untouched
/// and are never inspected.
///
/// # Ordering
///
/// Entries keep the order in which they were first inserted. Filtering
/// correctness does not depend on order, but removal diagnostics (the warning
/// message and [`SanitizationError`](crate::SanitizationError)) list names in
/// input order, so preserving it keeps those deterministic.
///
/// # Examples
///
/// ```
/// use assign_guard::AttributeSet;
///
/// let mut attributes = AttributeSet::new();
/// attributes.insert("name", "Alice");
/// attributes.insert("admin", "true");
///
/// assert_eq!(attributes.len(), 2);
/// assert_eq!(attributes.get("name"), Some(&"Alice"));
/// assert_eq!(attributes.keys().collect::<Vec<_>>(), vec!["name", "admin"]);
/// ```
///
/// Sets can also be collected from name/value pairs:
///
/// ```
/// use assign_guard::AttributeSet;
///
/// let attributes: AttributeSet<i64> = [("id", 1), ("age", 30)].into_iter().collect();
/// assert_eq!(attributes.get("age"), Some(&30));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AttributeSet<V> {
    // Linear storage: proposed batches are a handful of fields per call, so
    // key lookup stays a scan rather than a hashed index.
    entries: Vec<(String, V)>,
}

impl<V> AttributeSet<V> {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a name/value pair, returning the previous value if the name
    /// was already present.
    ///
    /// A replaced entry keeps its original position; only first insertion
    /// determines order.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Returns the value for the named attribute, if present.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns `true` if the named attribute is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterates over attribute names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterates over name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Returns the number of attributes in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set contains no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for AttributeSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for AttributeSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(n, v)| (n, v)))
            .finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for AttributeSet<V> {
    /// Collects name/value pairs in iteration order. A repeated name keeps
    /// its first position and takes the last value, as with [`insert`](AttributeSet::insert).
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for AttributeSet<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<V> IntoIterator for AttributeSet<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
