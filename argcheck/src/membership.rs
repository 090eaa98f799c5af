//! Containers that membership checks can look into.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A container of items, queried by `contains` / `not_contains`.
pub trait Collection {
    type Item;

    fn includes(&self, item: &Self::Item) -> bool;
}

/// A key/value container, queried by the `contains_key` and `contains_value`
/// families.
pub trait Mapping {
    type Key;
    type Value;

    fn has_key(&self, key: &Self::Key) -> bool;

    fn has_value(&self, value: &Self::Value) -> bool;
}

impl<T: PartialEq> Collection for [T] {
    type Item = T;

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq, const N: usize> Collection for [T; N] {
    type Item = T;

    fn includes(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}

impl<T: PartialEq> Collection for Vec<T> {
    type Item = T;

    fn includes(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}

impl<T: PartialEq> Collection for VecDeque<T> {
    type Item = T;

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Collection for HashSet<T, S> {
    type Item = T;

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Ord> Collection for BTreeSet<T> {
    type Item = T;

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<K: Eq + Hash, V: PartialEq, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn has_value(&self, value: &V) -> bool {
        self.values().any(|candidate| candidate == value)
    }
}

impl<K: Ord, V: PartialEq> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn has_value(&self, value: &V) -> bool {
        self.values().any(|candidate| candidate == value)
    }
}
