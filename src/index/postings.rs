//! Posting list storage.

use std::hash::Hash;

use ahash::AHashSet;

/// The set of document identifiers associated with one indexed term.
///
/// Postings have set semantics: a document appears at most once per term, no
/// matter how many times the term occurs in its text.
#[derive(Clone, Debug)]
pub struct PostingList<D> {
    docs: AHashSet<D>,
}

impl<D: Eq + Hash> PostingList<D> {
    /// Create a new empty posting list.
    pub fn new() -> Self {
        PostingList {
            docs: AHashSet::new(),
        }
    }

    /// Add a document to the posting list.
    ///
    /// Returns `false` if the document was already present.
    pub fn insert(&mut self, uid: D) -> bool {
        self.docs.insert(uid)
    }

    /// Remove a document from the posting list.
    ///
    /// Returns `true` if the document was present.
    pub fn remove(&mut self, uid: &D) -> bool {
        self.docs.remove(uid)
    }

    /// Check whether a document is in the posting list.
    pub fn contains(&self, uid: &D) -> bool {
        self.docs.contains(uid)
    }

    /// Number of documents in the posting list.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if the posting list is empty.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate over the documents in the posting list.
    ///
    /// Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.docs.iter()
    }
}

impl<D: Eq + Hash> Default for PostingList<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_list() {
        let mut list = PostingList::new();
        assert!(list.is_empty());

        assert!(list.insert(42));
        assert_eq!(list.len(), 1);
        assert!(list.contains(&42));

        assert!(list.remove(&42));
        assert!(list.is_empty());
        assert!(!list.remove(&42));
    }

    #[test]
    fn test_set_semantics() {
        let mut list = PostingList::new();

        assert!(list.insert("doc-1"));
        assert!(!list.insert("doc-1"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_iter() {
        let mut list = PostingList::new();
        list.insert(1);
        list.insert(2);

        let mut docs: Vec<i32> = list.iter().copied().collect();
        docs.sort_unstable();
        assert_eq!(docs, vec![1, 2]);
    }
}
