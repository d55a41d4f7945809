//! Posting lists: sorted, duplicate-free document identifier sequences.

use serde::{Deserialize, Serialize};

use crate::index::merge;

/// Numeric document identifier parsed from the leading token of a line.
pub type DocId = u64;

/// The documents a single term occurs in, strictly ascending.
///
/// A posting list is never mutated after it has been built; [`intersect`] and
/// [`union`] always return a new list.
///
/// [`intersect`]: PostingList::intersect
/// [`union`]: PostingList::union
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DocId>", into = "Vec<DocId>")]
pub struct PostingList {
    doc_ids: Vec<DocId>,
}

impl PostingList {
    /// Create an empty posting list.
    pub fn new() -> Self {
        PostingList {
            doc_ids: Vec::new(),
        }
    }

    /// Build a posting list from arbitrary identifiers, sorting and
    /// deduplicating them.
    pub fn from_unsorted(mut doc_ids: Vec<DocId>) -> Self {
        doc_ids.sort_unstable();
        doc_ids.dedup();
        PostingList { doc_ids }
    }

    /// Wrap identifiers that are already strictly ascending.
    pub(crate) fn from_sorted(doc_ids: Vec<DocId>) -> Self {
        debug_assert!(doc_ids.windows(2).all(|w| w[0] < w[1]));
        PostingList { doc_ids }
    }

    /// Documents present in both lists.
    pub fn intersect(&self, other: &PostingList) -> PostingList {
        PostingList::from_sorted(merge::intersect(&self.doc_ids, &other.doc_ids))
    }

    /// Documents present in either list.
    pub fn union(&self, other: &PostingList) -> PostingList {
        PostingList::from_sorted(merge::union(&self.doc_ids, &other.doc_ids))
    }

    pub fn as_slice(&self) -> &[DocId] {
        &self.doc_ids
    }

    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.doc_ids.iter().copied()
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.doc_ids.binary_search(&doc_id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }

    pub fn into_vec(self) -> Vec<DocId> {
        self.doc_ids
    }
}

impl From<Vec<DocId>> for PostingList {
    fn from(doc_ids: Vec<DocId>) -> Self {
        PostingList::from_unsorted(doc_ids)
    }
}

impl From<PostingList> for Vec<DocId> {
    fn from(list: PostingList) -> Self {
        list.doc_ids
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = &'a DocId;
    type IntoIter = std::slice::Iter<'a, DocId>;

    fn into_iter(self) -> Self::IntoIter {
        self.doc_ids.iter()
    }
}
