//! In-memory inverted index mapping indexed terms to posting lists.

use std::hash::Hash;

use ahash::AHashMap;

use crate::index::postings::PostingList;

/// An in-memory inverted index from term to the set of documents containing
/// that term.
///
/// The index does not interpret terms: callers decide what a term is (here,
/// the analysis pipeline feeds it every substring of every token). Document
/// identifiers are a generic parameter and are only ever hashed, compared,
/// and cloned back out of queries.
///
/// # Examples
///
/// ```
/// use kensaku::index::inverted::InvertedIndex;
///
/// let mut index = InvertedIndex::new();
/// index.insert("hello", 1);
/// index.insert("world", 1);
/// index.insert("hello", 2);
///
/// let mut hits = index.search(["hello"]);
/// hits.sort_unstable();
/// assert_eq!(hits, vec![1, 2]);
///
/// assert_eq!(index.search(["hello", "world"]), vec![1]);
/// ```
#[derive(Clone, Debug)]
pub struct InvertedIndex<D> {
    /// Term -> posting list mapping.
    postings: AHashMap<String, PostingList<D>>,
}

impl<D: Eq + Hash + Clone> InvertedIndex<D> {
    /// Create a new empty index.
    pub fn new() -> Self {
        InvertedIndex {
            postings: AHashMap::new(),
        }
    }

    /// Insert a document into the posting list for a term, creating the
    /// posting list if absent.
    pub fn insert<S: Into<String>>(&mut self, term: S, uid: D) {
        self.postings.entry(term.into()).or_default().insert(uid);
    }

    /// Remove a document from every posting list.
    ///
    /// Posting lists left empty by the removal are pruned. Returns `true`
    /// if the document was present anywhere in the index.
    pub fn remove_document(&mut self, uid: &D) -> bool {
        let mut removed = false;
        self.postings.retain(|_, list| {
            if list.remove(uid) {
                removed = true;
            }
            !list.is_empty()
        });
        removed
    }

    /// Number of documents whose postings contain the given term.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map(PostingList::len).unwrap_or(0)
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Get the posting list for a term, if any.
    pub fn posting(&self, term: &str) -> Option<&PostingList<D>> {
        self.postings.get(term)
    }

    /// Find the documents whose postings contain every given term.
    ///
    /// The result is the intersection of the per-term posting lists,
    /// evaluated smallest list first. A term with no postings short-circuits
    /// to an empty result. Result order is unspecified. The zero-term case
    /// belongs to the caller; this method returns an empty result for it.
    pub fn search<I>(&self, terms: I) -> Vec<D>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut lists = Vec::new();
        for term in terms {
            match self.postings.get(term.as_ref()) {
                Some(list) => lists.push(list),
                None => return Vec::new(),
            }
        }

        lists.sort_by_key(|list| list.len());
        let Some((smallest, rest)) = lists.split_first() else {
            return Vec::new();
        };

        smallest
            .iter()
            .filter(|uid| rest.iter().all(|list| list.contains(*uid)))
            .cloned()
            .collect()
    }
}

impl<D: Eq + Hash + Clone> Default for InvertedIndex<D> {
    fn default() -> Self {
        Self::new()
    }
}
