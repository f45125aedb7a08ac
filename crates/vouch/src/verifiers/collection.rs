//! Collection and map predicates

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::foundation::{Verifier, VerifyError, VerifyResult, all, any};
use crate::message::{Debugged, keys};

// ============================================================================
// SEQUENCE
// ============================================================================

/// Collections whose elements can be iterated by reference.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Number of elements.
    fn size(&self) -> usize;

    /// Iterates the elements.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T> Sequence for [T] {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn size(&self) -> usize {
        N
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, S> Sequence for HashSet<T, S> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for BTreeSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<C: Sequence + ?Sized> Sequence for &C {
    type Item = C::Item;

    fn size(&self) -> usize {
        (**self).size()
    }

    fn items(&self) -> impl Iterator<Item = &C::Item> {
        (**self).items()
    }
}

/// Predicates for collections.
pub trait CollectionVerify: Sized {
    /// Element type.
    type Item;

    /// Verifies that the collection has no elements.
    fn empty(self) -> VerifyResult<Self>;

    /// Verifies that the collection has exactly `size` elements.
    fn size_of(self, size: usize) -> VerifyResult<Self>;

    /// Verifies that the collection has between `min` and `max` elements.
    ///
    /// Returns [`VerifyError::InvalidArgument`] when `min > max`.
    fn size_between(self, min: usize, max: usize) -> VerifyResult<Self>;

    /// Verifies that `item` is an element.
    fn contains(self, item: &Self::Item) -> VerifyResult<Self>;

    /// Verifies that every one of `items` is an element.
    fn contains_all(self, items: &[Self::Item]) -> VerifyResult<Self>;

    /// Verifies that at least one of `items` is an element.
    fn contains_any(self, items: &[Self::Item]) -> VerifyResult<Self>;

    /// Verifies that `predicate` holds for every element.
    ///
    /// `description` completes "have all elements ...", e.g. `"positive"`.
    fn all_match<F>(self, predicate: F, description: &str) -> VerifyResult<Self>
    where
        F: FnMut(&Self::Item) -> bool;

    /// Verifies that `predicate` holds for at least one element.
    fn any_match<F>(self, predicate: F, description: &str) -> VerifyResult<Self>
    where
        F: FnMut(&Self::Item) -> bool;
}

fn ordered_sizes(min: usize, max: usize) -> VerifyResult<()> {
    if min > max {
        return Err(VerifyError::invalid_argument(
            "min",
            "minimum size must not exceed the maximum",
        ));
    }
    Ok(())
}

impl<C> CollectionVerify for Verifier<C>
where
    C: Sequence + fmt::Debug,
    C::Item: PartialEq + fmt::Debug,
{
    type Item = C::Item;

    fn empty(self) -> VerifyResult<Self> {
        let result = self.value().size() == 0;
        self.check_key(result, keys::COLLECTION_EMPTY, &[])
    }

    fn size_of(self, size: usize) -> VerifyResult<Self> {
        let result = self.value().size() == size;
        self.check_key(result, keys::SIZE_OF, &[&size])
    }

    fn size_between(self, min: usize, max: usize) -> VerifyResult<Self> {
        ordered_sizes(min, max)?;
        let result = (min..=max).contains(&self.value().size());
        self.check_key(result, keys::SIZE_BETWEEN, &[&min, &max])
    }

    fn contains(self, item: &C::Item) -> VerifyResult<Self> {
        let result = any(self.value().items(), |element| element == item);
        self.check_key(result, keys::COLLECTION_CONTAINS, &[&Debugged(item)])
    }

    fn contains_all(self, items: &[C::Item]) -> VerifyResult<Self> {
        let value = self.value();
        let result = all(items, |item| any(value.items(), |element| element == item));
        self.check_key(result, keys::COLLECTION_CONTAINS_ALL, &[&Debugged(items)])
    }

    fn contains_any(self, items: &[C::Item]) -> VerifyResult<Self> {
        let value = self.value();
        let result = any(items, |item| any(value.items(), |element| element == item));
        self.check_key(result, keys::COLLECTION_CONTAINS_ANY, &[&Debugged(items)])
    }

    fn all_match<F>(self, predicate: F, description: &str) -> VerifyResult<Self>
    where
        F: FnMut(&C::Item) -> bool,
    {
        let result = all(self.value().items(), predicate);
        self.check_key(result, keys::ALL_MATCH, &[&description])
    }

    fn any_match<F>(self, predicate: F, description: &str) -> VerifyResult<Self>
    where
        F: FnMut(&C::Item) -> bool,
    {
        let result = any(self.value().items(), predicate);
        self.check_key(result, keys::ANY_MATCH, &[&description])
    }
}

// ============================================================================
// MAPS
// ============================================================================

/// Maps that can be queried by key and iterated by value.
pub trait KeyValues {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Number of entries.
    fn size(&self) -> usize;

    /// Whether `key` has an entry.
    fn has_key(&self, key: &Self::Key) -> bool;

    /// Iterates the values.
    fn map_values(&self) -> impl Iterator<Item = &Self::Value>;
}

impl<K: Eq + Hash, V, S: BuildHasher> KeyValues for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn map_values(&self) -> impl Iterator<Item = &V> {
        self.values()
    }
}

impl<K: Ord, V> KeyValues for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn map_values(&self) -> impl Iterator<Item = &V> {
        self.values()
    }
}

impl<M: KeyValues + ?Sized> KeyValues for &M {
    type Key = M::Key;
    type Value = M::Value;

    fn size(&self) -> usize {
        (**self).size()
    }

    fn has_key(&self, key: &M::Key) -> bool {
        (**self).has_key(key)
    }

    fn map_values(&self) -> impl Iterator<Item = &M::Value> {
        (**self).map_values()
    }
}

/// Predicates for maps.
pub trait MapVerify: Sized {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Verifies that the map has no entries.
    fn empty(self) -> VerifyResult<Self>;

    /// Verifies that the map has exactly `size` entries.
    fn size_of(self, size: usize) -> VerifyResult<Self>;

    /// Verifies that `key` has an entry.
    fn contains_key(self, key: &Self::Key) -> VerifyResult<Self>;

    /// Verifies that some entry holds `value`.
    fn contains_value(self, value: &Self::Value) -> VerifyResult<Self>;
}

impl<M> MapVerify for Verifier<M>
where
    M: KeyValues + fmt::Debug,
    M::Key: fmt::Debug,
    M::Value: PartialEq + fmt::Debug,
{
    type Key = M::Key;
    type Value = M::Value;

    fn empty(self) -> VerifyResult<Self> {
        let result = self.value().size() == 0;
        self.check_key(result, keys::COLLECTION_EMPTY, &[])
    }

    fn size_of(self, size: usize) -> VerifyResult<Self> {
        let result = self.value().size() == size;
        self.check_key(result, keys::SIZE_OF, &[&size])
    }

    fn contains_key(self, key: &M::Key) -> VerifyResult<Self> {
        let result = self.value().has_key(key);
        self.check_key(result, keys::CONTAINS_KEY, &[&Debugged(key)])
    }

    fn contains_value(self, value: &M::Value) -> VerifyResult<Self> {
        let result = any(self.value().map_values(), |candidate| candidate == value);
        self.check_key(result, keys::CONTAINS_VALUE, &[&Debugged(value)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_vec_predicates() {
        let v = verify(vec![1, 2, 3])
            .not()
            .empty()
            .and_then(|v| v.not().size_of(3))
            .and_then(|v| v.contains(&2))
            .and_then(|v| v.contains_all(&[1, 3]))
            .and_then(|v| v.contains_any(&[9, 3]))
            .unwrap();
        assert_eq!(v.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_contains_message() {
        let err = verify(vec!["a", "b"]).contains(&"z").unwrap_err();
        assert_eq!(err.to_string(), "value must contain \"z\"");
    }

    #[test]
    fn test_slices_arrays_and_refs() {
        let items = vec![1, 2];
        assert!(verify(&items).size_of(2).is_ok());
        assert!(verify(&items[..1]).size_of(1).is_ok());
        assert!(verify([0u8; 4]).size_between(1, 4).is_ok());
        assert!(verify([0u8; 4]).size_between(5, 1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_sets() {
        let set: HashSet<_> = ["x", "y"].into_iter().collect();
        assert!(verify(&set).contains(&"x").is_ok());
        let tree: BTreeSet<_> = [3, 1].into_iter().collect();
        assert!(verify(tree).contains(&4).is_err());
        assert!(verify(VecDeque::<i32>::new()).empty().is_ok());
    }

    #[test]
    fn test_match_folds() {
        assert!(verify(vec![2, 4]).all_match(|n| n % 2 == 0, "even").is_ok());
        let err = verify(vec![2, 5]).all_match(|n| n % 2 == 0, "even").unwrap_err();
        assert_eq!(err.to_string(), "value must have all elements even");
        assert!(verify(vec![1, 4]).any_match(|n| *n > 3, "above 3").is_ok());
        assert!(verify(Vec::<i32>::new()).any_match(|_| true, "anything").is_err());
    }

    #[test]
    fn test_maps() {
        let mut ports = HashMap::new();
        ports.insert("http", 80);
        ports.insert("https", 443);

        assert!(verify(&ports).size_of(2).is_ok());
        assert!(verify(&ports).contains_key(&"http").is_ok());
        assert!(verify(&ports).contains_value(&443).is_ok());
        assert!(verify(&ports).contains_value(&22).is_err());

        let empty: BTreeMap<String, i32> = BTreeMap::new();
        assert!(verify(empty).empty().is_ok());
    }
}
