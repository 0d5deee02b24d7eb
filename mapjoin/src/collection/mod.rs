use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use indexmap::IndexMap;

mod build;
pub use self::build::{from_iterable, CollisionPolicy, KeyBy};

/// Insertion-ordered map, the collection [`from_iterable`] produces.
pub type KeyedMap<K, V> = IndexMap<K, V>;

/// A read-only map that can take part in a join.
///
/// Joins only need three things from their inputs: a stable iteration order,
/// key lookup and the number of entries. Anything that provides them can be
/// joined against anything else with the same key type.
pub trait KeyedCollection {
    type Key;
    type Value;
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Entries in the collection's natural order.
    fn entries(&self) -> Self::Iter<'_>;
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;
    fn len(&self) -> usize;

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.lookup(key).is_some()
    }
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> KeyedCollection for IndexMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Iter<'a> = indexmap::map::Iter<'a, K, V> where Self: 'a;

    fn entries(&self) -> Self::Iter<'_> { self.iter() }
    fn lookup(&self, key: &K) -> Option<&V> { self.get(key) }
    fn len(&self) -> usize { IndexMap::len(self) }
}

impl<K: Hash + Eq, V, S: BuildHasher> KeyedCollection for HashMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Iter<'a> = std::collections::hash_map::Iter<'a, K, V> where Self: 'a;

    fn entries(&self) -> Self::Iter<'_> { self.iter() }
    fn lookup(&self, key: &K) -> Option<&V> { self.get(key) }
    fn len(&self) -> usize { HashMap::len(self) }
}

impl<K: Ord, V> KeyedCollection for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Iter<'a> = std::collections::btree_map::Iter<'a, K, V> where Self: 'a;

    fn entries(&self) -> Self::Iter<'_> { self.iter() }
    fn lookup(&self, key: &K) -> Option<&V> { self.get(key) }
    fn len(&self) -> usize { BTreeMap::len(self) }
}
