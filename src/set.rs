//! Set-algebra capability.

/// Set operations forwarded by the `Set` cap.
///
/// Every operation on a wrapper delegates to the identical operation on the
/// unwrapped raw set, rewrapping set-valued results. The standard set types
/// implement this directly so they can serve as raw types.
pub trait SetOps: Sized {
    /// The member type.
    type Item;

    /// The empty set.
    fn empty() -> Self;

    /// Members in `self`, `other`, or both.
    fn union(&self, other: &Self) -> Self;

    /// Members in both `self` and `other`.
    fn intersection(&self, other: &Self) -> Self;

    /// Members in exactly one of `self` and `other`.
    fn symmetric_difference(&self, other: &Self) -> Self;

    /// Members in `self` but not in `other`.
    fn difference(&self, other: &Self) -> Self;

    /// Membership test.
    fn contains(&self, item: &Self::Item) -> bool;

    /// Insert a member. Returns whether it was newly inserted.
    fn insert(&mut self, item: Self::Item) -> bool;

    /// Remove a member. Returns whether it was present.
    fn remove(&mut self, item: &Self::Item) -> bool;

    /// Insert, replacing and returning an equal existing member.
    fn replace(&mut self, item: Self::Item) -> Option<Self::Item>;

    fn is_subset(&self, other: &Self) -> bool;

    fn is_superset(&self, other: &Self) -> bool;

    fn is_disjoint(&self, other: &Self) -> bool;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

#[cfg(feature = "std")]
mod hash_set {
    use std::collections::HashSet;
    use std::hash::Hash;

    use super::SetOps;

    impl<T: Eq + Hash + Clone> SetOps for HashSet<T> {
        type Item = T;

        fn empty() -> Self {
            HashSet::new()
        }

        fn union(&self, other: &Self) -> Self {
            HashSet::union(self, other).cloned().collect()
        }

        fn intersection(&self, other: &Self) -> Self {
            HashSet::intersection(self, other).cloned().collect()
        }

        fn symmetric_difference(&self, other: &Self) -> Self {
            HashSet::symmetric_difference(self, other).cloned().collect()
        }

        fn difference(&self, other: &Self) -> Self {
            HashSet::difference(self, other).cloned().collect()
        }

        fn contains(&self, item: &T) -> bool {
            HashSet::contains(self, item)
        }

        fn insert(&mut self, item: T) -> bool {
            HashSet::insert(self, item)
        }

        fn remove(&mut self, item: &T) -> bool {
            HashSet::remove(self, item)
        }

        fn replace(&mut self, item: T) -> Option<T> {
            HashSet::replace(self, item)
        }

        fn is_subset(&self, other: &Self) -> bool {
            HashSet::is_subset(self, other)
        }

        fn is_superset(&self, other: &Self) -> bool {
            HashSet::is_superset(self, other)
        }

        fn is_disjoint(&self, other: &Self) -> bool {
            HashSet::is_disjoint(self, other)
        }

        fn is_empty(&self) -> bool {
            HashSet::is_empty(self)
        }

        fn len(&self) -> usize {
            HashSet::len(self)
        }
    }
}

#[cfg(feature = "alloc")]
mod btree_set {
    use alloc::collections::BTreeSet;

    use super::SetOps;

    impl<T: Ord + Clone> SetOps for BTreeSet<T> {
        type Item = T;

        fn empty() -> Self {
            BTreeSet::new()
        }

        fn union(&self, other: &Self) -> Self {
            BTreeSet::union(self, other).cloned().collect()
        }

        fn intersection(&self, other: &Self) -> Self {
            BTreeSet::intersection(self, other).cloned().collect()
        }

        fn symmetric_difference(&self, other: &Self) -> Self {
            BTreeSet::symmetric_difference(self, other).cloned().collect()
        }

        fn difference(&self, other: &Self) -> Self {
            BTreeSet::difference(self, other).cloned().collect()
        }

        fn contains(&self, item: &T) -> bool {
            BTreeSet::contains(self, item)
        }

        fn insert(&mut self, item: T) -> bool {
            BTreeSet::insert(self, item)
        }

        fn remove(&mut self, item: &T) -> bool {
            BTreeSet::remove(self, item)
        }

        fn replace(&mut self, item: T) -> Option<T> {
            BTreeSet::replace(self, item)
        }

        fn is_subset(&self, other: &Self) -> bool {
            BTreeSet::is_subset(self, other)
        }

        fn is_superset(&self, other: &Self) -> bool {
            BTreeSet::is_superset(self, other)
        }

        fn is_disjoint(&self, other: &Self) -> bool {
            BTreeSet::is_disjoint(self, other)
        }

        fn is_empty(&self) -> bool {
            BTreeSet::is_empty(self)
        }

        fn len(&self) -> usize {
            BTreeSet::len(self)
        }
    }
}
