//! Capability tables and tag sets.
//!
//! Traversals never assume equality, hashing or ordering on vertices. Instead they are
//! handed a store that provides it:
//!
//! - [`Table`] - a key/value store with `contains`, `get` and `set`
//! - [`HashTable`] - a [`Table`] backed by a hash map with a caller-selectable hasher
//! - [`OrdTable`] - a [`Table`] backed by an ordered map
//! - [`TagSet`] - a boolean mark store, for callers that keep marks on the vertex itself
//! - [`FnTagSet`] - a [`TagSet`] built from a pair of closures
//!
//! A table lives for exactly one traversal call. Two traversals running over the same
//! graph view must each be given their own table.

use std::{
    collections::{hash_map::RandomState, BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};

use crate::{Error, Result};

/// A key/value store used for visited marks and per-vertex algorithm state.
///
/// # Examples
///
/// ```rust
/// use lazygraph::{graph::{HashTable, Table}, Error};
///
/// let mut table: HashTable<&str, u32> = HashTable::new();
/// table.set("a", 1);
///
/// assert!(table.contains(&"a"));
/// assert_eq!(*table.get(&"a")?, 1);
/// assert!(matches!(table.get(&"b"), Err(Error::KeyNotFound)));
/// # Ok::<(), Error>(())
/// ```
pub trait Table<K, V> {
    /// Returns `true` if a value was set for `key`.
    fn contains(&self, key: &K) -> bool;

    /// Returns the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no value was set for `key`.
    fn get(&self, key: &K) -> Result<&V>;

    /// Stores `value` for `key`, replacing any previous value.
    fn set(&mut self, key: K, value: V);
}

/// A [`Table`] backed by a [`HashMap`].
///
/// The hashing strategy is chosen at construction time through a [`BuildHasher`];
/// [`HashTable::new`] uses the standard randomized hasher.
#[derive(Debug, Clone)]
pub struct HashTable<K, V, S = RandomState> {
    map: HashMap<K, V, S>,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// Creates an empty table with the default hasher.
    #[must_use]
    pub fn new() -> Self {
        HashTable {
            map: HashMap::new(),
        }
    }

    /// Creates an empty table with room for at least `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        HashTable {
            map: HashMap::with_capacity(capacity),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashTable<K, V, S> {
    /// Creates an empty table that hashes keys with `hasher`.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        HashTable {
            map: HashMap::with_hasher(hasher),
        }
    }

    /// Returns the number of keys in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the table holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Table<K, V> for HashTable<K, V, S> {
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn get(&self, key: &K) -> Result<&V> {
        self.map.get(key).ok_or(Error::KeyNotFound)
    }

    fn set(&mut self, key: K, value: V) {
        self.map.insert(key, value);
    }
}

/// A [`Table`] backed by a [`BTreeMap`], for keys that are ordered but not hashable.
#[derive(Debug, Clone)]
pub struct OrdTable<K, V> {
    map: BTreeMap<K, V>,
}

impl<K: Ord, V> OrdTable<K, V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        OrdTable {
            map: BTreeMap::new(),
        }
    }

    /// Returns the number of keys in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the table holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Ord, V> Default for OrdTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Table<K, V> for OrdTable<K, V> {
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn get(&self, key: &K) -> Result<&V> {
        self.map.get(key).ok_or(Error::KeyNotFound)
    }

    fn set(&mut self, key: K, value: V) {
        self.map.insert(key, value);
    }
}

/// A boolean mark store.
///
/// Marks only ever go from unset to set during a traversal, so the interface is just
/// a query and a setter.
pub trait TagSet<V> {
    /// Returns `true` if `vertex` has been marked.
    fn get_tag(&self, vertex: &V) -> bool;

    /// Marks `vertex`.
    fn set_tag(&mut self, vertex: &V);
}

impl<V: Hash + Eq + Clone, S: BuildHasher> TagSet<V> for HashTable<V, (), S> {
    fn get_tag(&self, vertex: &V) -> bool {
        self.contains(vertex)
    }

    fn set_tag(&mut self, vertex: &V) {
        self.set(vertex.clone(), ());
    }
}

impl<V: Ord + Clone> TagSet<V> for OrdTable<V, ()> {
    fn get_tag(&self, vertex: &V) -> bool {
        self.contains(vertex)
    }

    fn set_tag(&mut self, vertex: &V) {
        self.set(vertex.clone(), ());
    }
}

/// Uses any `Table<V, ()>` as a [`TagSet`]: a vertex is tagged when it is a key.
///
/// This is how the table-driven traversal entry points share the tag-driven engine.
#[derive(Debug, Clone, Default)]
pub struct TableTags<T> {
    table: T,
}

impl<T> TableTags<T> {
    /// Wraps `table`.
    pub fn new(table: T) -> Self {
        TableTags { table }
    }

    /// Returns the wrapped table.
    pub fn into_inner(self) -> T {
        self.table
    }
}

impl<V, T> TagSet<V> for TableTags<T>
where
    V: Clone,
    T: Table<V, ()>,
{
    fn get_tag(&self, vertex: &V) -> bool {
        self.table.contains(vertex)
    }

    fn set_tag(&mut self, vertex: &V) {
        self.table.set(vertex.clone(), ());
    }
}

/// A [`TagSet`] that delegates to a getter and a setter closure.
///
/// This is how marks stored directly on vertices are plugged into a traversal.
///
/// # Examples
///
/// ```rust
/// use std::{cell::Cell, rc::Rc};
///
/// use lazygraph::graph::{FnTagSet, TagSet};
///
/// struct Node {
///     mark: Cell<bool>,
/// }
///
/// let node = Rc::new(Node { mark: Cell::new(false) });
/// let mut tags = FnTagSet::new(
///     |n: &Rc<Node>| n.mark.get(),
///     |n: &Rc<Node>| n.mark.set(true),
/// );
///
/// assert!(!tags.get_tag(&node));
/// tags.set_tag(&node);
/// assert!(node.mark.get());
/// ```
pub struct FnTagSet<V, G, S> {
    get: G,
    set: S,
    _vertex: PhantomData<fn(&V)>,
}

impl<V, G, S> FnTagSet<V, G, S>
where
    G: Fn(&V) -> bool,
    S: FnMut(&V),
{
    /// Creates a tag set from a mark query and a mark setter.
    pub fn new(get: G, set: S) -> Self {
        FnTagSet {
            get,
            set,
            _vertex: PhantomData,
        }
    }
}

impl<V, G, S> TagSet<V> for FnTagSet<V, G, S>
where
    G: Fn(&V) -> bool,
    S: FnMut(&V),
{
    fn get_tag(&self, vertex: &V) -> bool {
        (self.get)(vertex)
    }

    fn set_tag(&mut self, vertex: &V) {
        (self.set)(vertex);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::hash_map::RandomState};

    use super::*;

    #[test]
    fn test_hash_table_roundtrip() {
        let mut table: HashTable<u32, &str> = HashTable::with_capacity(4);
        assert!(table.is_empty());

        table.set(1, "one");
        table.set(2, "two");
        table.set(1, "uno");

        assert_eq!(table.len(), 2);
        assert!(table.contains(&1));
        assert!(!table.contains(&3));
        assert_eq!(*table.get(&1).unwrap(), "uno");
    }

    #[test]
    fn test_hash_table_missing_key() {
        let table: HashTable<u32, u32> = HashTable::default();
        assert!(matches!(table.get(&7), Err(Error::KeyNotFound)));
    }

    #[test]
    fn test_hash_table_custom_hasher() {
        let mut table: HashTable<&str, i32, RandomState> =
            HashTable::with_hasher(RandomState::new());
        table.set("x", -1);
        assert_eq!(*table.get(&"x").unwrap(), -1);
    }

    #[test]
    fn test_ord_table() {
        let mut table = OrdTable::new();
        table.set(vec![1, 2], 'a');
        assert!(table.contains(&vec![1, 2]));
        assert!(matches!(table.get(&vec![2]), Err(Error::KeyNotFound)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_tables_as_tag_sets() {
        let mut hashed: HashTable<char, ()> = HashTable::new();
        assert!(!hashed.get_tag(&'a'));
        hashed.set_tag(&'a');
        assert!(hashed.get_tag(&'a'));

        let mut ordered: OrdTable<char, ()> = OrdTable::new();
        ordered.set_tag(&'z');
        assert!(ordered.get_tag(&'z'));
        assert!(!ordered.get_tag(&'y'));
    }

    #[test]
    fn test_table_tags_adapter() {
        let mut tags = TableTags::new(OrdTable::<u8, ()>::new());
        assert!(!tags.get_tag(&1));
        tags.set_tag(&1);
        assert!(tags.get_tag(&1));
        assert_eq!(tags.into_inner().len(), 1);
    }

    #[test]
    fn test_fn_tag_set() {
        let marked = RefCell::new(Vec::new());
        let mut tags = FnTagSet::new(
            |v: &u8| marked.borrow().contains(v),
            |v: &u8| marked.borrow_mut().push(*v),
        );

        assert!(!tags.get_tag(&3));
        tags.set_tag(&3);
        assert!(tags.get_tag(&3));
        assert_eq!(*marked.borrow(), vec![3]);
    }
}
