//! Ordered merges over sorted posting data.
//!
//! Both inputs must be strictly ascending. That holds for every list built by
//! the index builder and for every list these functions return, so it is not
//! re-checked here.

use crate::index::posting::DocId;

/// Intersection of two sorted, duplicate-free slices (boolean AND).
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }

    out
}

/// Union of two sorted, duplicate-free slices (boolean OR).
pub fn union(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
        }
    }

    // One side is exhausted; the other's tail is already sorted.
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_intersect_basic() {
        assert_eq!(intersect(&[1, 2, 4], &[1, 4]), vec![1, 4]);
        assert_eq!(intersect(&[1, 3, 5], &[2, 4, 6]), Vec::<DocId>::new());
        assert_eq!(intersect(&[], &[1, 2]), Vec::<DocId>::new());
    }

    #[test]
    fn test_union_basic() {
        assert_eq!(union(&[1, 4], &[2, 3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(union(&[], &[2, 3]), vec![2, 3]);
        assert_eq!(union(&[5, 9], &[]), vec![5, 9]);
    }

    #[test]
    fn test_union_drains_longer_tail() {
        assert_eq!(union(&[1], &[2, 3, 7, 11]), vec![1, 2, 3, 7, 11]);
        assert_eq!(union(&[8, 10, 12], &[1]), vec![1, 8, 10, 12]);
    }

    fn sorted_ids() -> impl Strategy<Value = Vec<DocId>> {
        prop::collection::btree_set(0u64..200, 0..40).prop_map(|s| s.into_iter().collect())
    }

    fn is_strictly_ascending(ids: &[DocId]) -> bool {
        ids.windows(2).all(|w| w[0] < w[1])
    }

    proptest! {
        #[test]
        fn intersect_matches_set_intersection(a in sorted_ids(), b in sorted_ids()) {
            let got = intersect(&a, &b);
            let sa: BTreeSet<_> = a.iter().copied().collect();
            let sb: BTreeSet<_> = b.iter().copied().collect();
            let expected: Vec<_> = sa.intersection(&sb).copied().collect();

            prop_assert!(is_strictly_ascending(&got));
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn union_matches_set_union(a in sorted_ids(), b in sorted_ids()) {
            let got = union(&a, &b);
            let sa: BTreeSet<_> = a.iter().copied().collect();
            let sb: BTreeSet<_> = b.iter().copied().collect();
            let expected: Vec<_> = sa.union(&sb).copied().collect();

            prop_assert!(is_strictly_ascending(&got));
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn merges_are_commutative(a in sorted_ids(), b in sorted_ids()) {
            prop_assert_eq!(intersect(&a, &b), intersect(&b, &a));
            prop_assert_eq!(union(&a, &b), union(&b, &a));
        }

        #[test]
        fn merges_are_idempotent(a in sorted_ids()) {
            prop_assert_eq!(intersect(&a, &a), a.clone());
            prop_assert_eq!(union(&a, &a), a);
        }
    }
}
