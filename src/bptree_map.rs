//! The public B+ tree map and its iterators.

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::TreeError;
use crate::raw::{Comparator, Handle, Node, RawBPTreeMap};

/// An ordered index based on a [B+ tree].
///
/// Given a key type with a [total order], the map stores unique keys in
/// sorted order across a chain of leaves, with internal nodes routing lookups
/// by separator keys. The branching factor (the maximum number of children
/// per internal node) is chosen at construction and must be greater than 2;
/// leaves hold at most `branching_factor - 1` entries before splitting.
///
/// The map is **grow-only**: [`insert`](BPTreeMap::insert) adds entries or
/// overwrites the value of an existing key, and no operation removes entries.
/// It is also strictly single-writer, with no internal synchronization.
///
/// Range queries use a comparator token rather than a bound pair:
/// [`range_search`](BPTreeMap::range_search) returns every value whose key
/// relates to the query key by `"<="`, `"=="`, or `">="`, in ascending key
/// order. A token outside that set yields an empty result, never an error.
///
/// # Examples
///
/// ```
/// use bptree::BPTreeMap;
///
/// let mut calories = BPTreeMap::new(4)?;
///
/// calories.insert("apple", 95);
/// calories.insert("banana", 105);
/// calories.insert("cherry", 50);
///
/// assert_eq!(calories.get(&"banana"), Some(&105));
/// assert_eq!(calories.len(), 3);
///
/// // Overwriting a key keeps the count unchanged and returns the old value.
/// assert_eq!(calories.insert("apple", 90), Some(95));
/// assert_eq!(calories.len(), 3);
///
/// // All values for keys >= "banana", ascending.
/// assert_eq!(calories.range_search(&"banana", ">="), [&105, &50]);
/// # Ok::<(), bptree::TreeError>(())
/// ```
///
/// [B+ tree]: https://en.wikipedia.org/wiki/B%2B_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct BPTreeMap<K, V> {
    raw: RawBPTreeMap<K, V>,
}

/// An iterator over the entries of a `BPTreeMap` in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`BPTreeMap`]. It walks
/// the leaf chain front to back; there is no backward link, so it is not
/// double-ended.
///
/// [`iter`]: BPTreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    raw: &'a RawBPTreeMap<K, V>,
    leaf: Option<Handle>,
    index: usize,
    remaining: usize,
}

/// An iterator over the keys of a `BPTreeMap` in ascending order.
///
/// This `struct` is created by the [`keys`] method on [`BPTreeMap`].
///
/// [`keys`]: BPTreeMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `BPTreeMap` in ascending key order.
///
/// This `struct` is created by the [`values`] method on [`BPTreeMap`].
///
/// [`values`]: BPTreeMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> BPTreeMap<K, V> {
    /// Makes a new, empty `BPTreeMap` with the given branching factor.
    ///
    /// The tree starts as a single empty leaf. Factors of 2 or less cannot
    /// form a valid tree and are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidBranchingFactor`] when
    /// `branching_factor <= 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::{BPTreeMap, TreeError};
    ///
    /// let mut map = BPTreeMap::new(3)?;
    /// map.insert(1, "a");
    ///
    /// let too_small = BPTreeMap::<i32, &str>::new(2);
    /// assert_eq!(too_small.unwrap_err(), TreeError::InvalidBranchingFactor(2));
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn new(branching_factor: usize) -> Result<Self, TreeError> {
        if branching_factor <= 2 {
            return Err(TreeError::InvalidBranchingFactor(branching_factor));
        }
        Ok(Self {
            raw: RawBPTreeMap::new(branching_factor),
        })
    }

    /// Makes a new, empty `BPTreeMap` pre-sized for `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidBranchingFactor`] when
    /// `branching_factor <= 2`.
    pub fn with_capacity(branching_factor: usize, capacity: usize) -> Result<Self, TreeError> {
        if branching_factor <= 2 {
            return Err(TreeError::InvalidBranchingFactor(branching_factor));
        }
        Ok(Self {
            raw: RawBPTreeMap::with_capacity(branching_factor, capacity),
        })
    }

    /// Returns the number of distinct keys in the map.
    ///
    /// Overwriting an existing key does not change the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPTreeMap;
    ///
    /// let mut map = BPTreeMap::new(3)?;
    /// assert_eq!(map.len(), 0);
    /// map.insert(2, 10.0);
    /// map.insert(2, 13.0);
    /// assert_eq!(map.len(), 1);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the branching factor the map was constructed with.
    #[must_use]
    pub const fn branching_factor(&self) -> usize {
        self.raw.branching_factor()
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPTreeMap;
    ///
    /// let mut map = BPTreeMap::new(3)?;
    /// map.insert(3, "c");
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            raw: &self.raw,
            leaf: Some(self.raw.first_leaf()),
            index: 0,
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V> BPTreeMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form *must* match the ordering on the key
    /// type. A missing key is `None`, never an error.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPTreeMap;
    ///
    /// let mut map = BPTreeMap::new(3)?;
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPTreeMap;
    ///
    /// let mut map = BPTreeMap::new(3)?;
    /// map.insert(1, "a");
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns true if the map contains a value for the specified key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains_key(key)
    }

    /// Collects every value whose key satisfies `comparator` against `key`,
    /// in ascending key order.
    ///
    /// `comparator` must be one of `"<="`, `"=="`, or `">="`, relating stored
    /// keys to the query key: `"<= key"` selects all entries with keys at
    /// most `key`, and so on. Any other token, like any query matching
    /// nothing, yields an empty vector; this method never fails.
    ///
    /// # Complexity
    ///
    /// O(n): the scan always walks the full leaf chain and filters, for
    /// every comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPTreeMap;
    ///
    /// let mut map = BPTreeMap::new(3)?;
    /// for key in [5, 1, 4, 2, 6, 3] {
    ///     map.insert(key, key * 10);
    /// }
    ///
    /// assert_eq!(map.range_search(&3, ">="), [&30, &40, &50, &60]);
    /// assert_eq!(map.range_search(&3, "<="), [&10, &20, &30]);
    /// assert_eq!(map.range_search(&3, "=="), [&30]);
    /// assert!(map.range_search(&3, "<").is_empty());
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    #[must_use]
    pub fn range_search<Q>(&self, key: &Q, comparator: &str) -> Vec<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match Comparator::from_token(comparator) {
            Some(comparator) => self.raw.range_scan(key, comparator),
            None => Vec::new(),
        }
    }
}

impl<K: Ord + Clone, V> BPTreeMap<K, V> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the map already had this key, the value is overwritten in place
    /// and the old value is returned; the length is unchanged. Otherwise the
    /// entry is added at its sorted position and `None` is returned.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPTreeMap;
    ///
    /// let mut map = BPTreeMap::new(3)?;
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let handle = self.leaf?;
            let leaf = self.raw.node(handle).as_leaf();

            if self.index < leaf.key_count() {
                let key = leaf.key(self.index);
                let value = self.raw.value(leaf.value(self.index));
                self.index += 1;
                self.remaining -= 1;
                return Some((key, value));
            }

            // Only the initial leaf can be empty, but skipping keeps the
            // walk uniform.
            self.leaf = leaf.next();
            self.index = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a BPTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BPTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Breadth-first structure dump, one line per level.
///
/// Each node renders as its key list; within a line, the children of one
/// parent are grouped in `{...}` and groups are joined by `", "`. Diagnostic
/// only: the exact format is not part of the functional contract.
///
/// # Examples
///
/// ```
/// use bptree::BPTreeMap;
///
/// let mut map = BPTreeMap::new(3)?;
/// for key in [1, 2, 3] {
///     map.insert(key, ());
/// }
/// assert_eq!(map.to_string(), "{[2]}\n{[1], [2, 3]}\n");
/// # Ok::<(), bptree::TreeError>(())
/// ```
impl<K: fmt::Debug, V> fmt::Display for BPTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut level: Vec<Vec<Handle>> = alloc::vec![alloc::vec![self.raw.root()]];

        while !level.is_empty() {
            let mut next_level: Vec<Vec<Handle>> = Vec::new();

            for (group_index, group) in level.iter().enumerate() {
                if group_index > 0 {
                    f.write_str(", ")?;
                }
                f.write_str("{")?;
                for (node_index, &handle) in group.iter().enumerate() {
                    if node_index > 0 {
                        f.write_str(", ")?;
                    }
                    let node = self.raw.node(handle);
                    write!(f, "{:?}", node.keys())?;
                    if let Node::Internal(internal) = node {
                        next_level.push((0..internal.child_count()).map(|i| internal.child(i)).collect());
                    }
                }
                f.write_str("}")?;
            }
            f.write_str("\n")?;

            level = next_level;
        }

        Ok(())
    }
}
