//! High-level substring search engine that combines analysis and indexing.
//!
//! The engine owns the whole pipeline: documents are tokenized on
//! whitespace, lower-cased, expanded into all substrings of each token, and
//! stored in an inverted index. Queries run the same pipeline without the
//! expansion step, so a query word matches by direct postings lookup
//! whenever it is a substring of any indexed token.

use std::hash::Hash;
use std::sync::Arc;

use ahash::AHashMap;
use tracing::warn;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::substring::SubstringFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::index::inverted::InvertedIndex;

/// An in-memory substring search engine.
///
/// The engine maps opaque document identifiers to searchable text. A search
/// returns every document whose text contains each whitespace-delimited
/// query word as a substring, case-insensitively. All state lives in the
/// engine instance; there are no globals, no persistence, and no internal
/// locking — callers that share an engine across threads must serialize
/// access themselves, which the `&mut self` mutation API already enforces
/// for safe Rust.
///
/// Index size grows with the square of token length, because every
/// contiguous substring of every token becomes an index term. That is the
/// deliberate trade this engine makes for constant-time substring lookups
/// at query time.
///
/// # Document lifecycle
///
/// - [`index_document`](Self::index_document) registers a document and
///   indexes its text; calling it again for the same identifier replaces
///   the old postings (update semantics).
/// - [`remove_document`](Self::remove_document) clears a document's
///   postings and marks it inactive. The identifier stays known to the
///   engine but stops appearing in any search result until it is indexed
///   again.
///
/// # Examples
///
/// ```
/// use kensaku::engine::SearchEngine;
///
/// let mut engine = SearchEngine::new();
/// engine
///     .index_document(1, "Hello World")
///     .index_document(2, "hello rust");
///
/// let mut hits = engine.search("ello");
/// hits.sort_unstable();
/// assert_eq!(hits, vec![1, 2]);
///
/// // Every query word must match (logical AND).
/// assert_eq!(engine.search("hello world"), vec![1]);
/// assert!(engine.search("xyz").is_empty());
///
/// // An empty query lists all active documents.
/// assert_eq!(engine.search("").len(), 2);
/// ```
pub struct SearchEngine<D> {
    /// Expanded token -> documents postings.
    index: InvertedIndex<D>,

    /// Every identifier ever indexed, mapped to whether it is active.
    /// Entries are never removed, only deactivated.
    registry: AHashMap<D, bool>,

    /// Index-time pipeline: whitespace -> lowercase -> substring expansion.
    index_analyzer: PipelineAnalyzer,

    /// Query-time pipeline: whitespace -> lowercase. Query words are looked
    /// up directly, never expanded.
    query_analyzer: PipelineAnalyzer,
}

impl<D: Eq + Hash + Clone> SearchEngine<D> {
    /// Create a new empty search engine.
    pub fn new() -> Self {
        let index_analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(SubstringFilter::new()))
            .with_name("substring_index");

        let query_analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("substring_query");

        SearchEngine {
            index: InvertedIndex::new(),
            registry: AHashMap::new(),
            index_analyzer,
            query_analyzer,
        }
    }

    /// Index a document's text under the given identifier.
    ///
    /// Any text is accepted, including the empty string (the document is
    /// then registered but matches only the empty query). Re-indexing an
    /// existing identifier replaces its previous postings entirely, and
    /// re-indexing a removed identifier reactivates it.
    ///
    /// This method does not fail: a token whose expansion fails is logged
    /// and skipped inside the pipeline, and the rest of the text is still
    /// indexed. Returns the engine for call chaining.
    pub fn index_document(&mut self, uid: D, text: &str) -> &mut Self {
        // Update semantics: postings from a previous text for this
        // identifier must not survive re-indexing.
        if self.registry.contains_key(&uid) {
            self.index.remove_document(&uid);
        }
        self.registry.insert(uid.clone(), true);

        match self.index_analyzer.analyze(text) {
            Ok(tokens) => {
                for token in tokens.filter(|token| !token.is_stopped()) {
                    self.index.insert(token.text, uid.clone());
                }
            }
            Err(err) => {
                warn!(%err, "analysis failed, document indexed without postings");
            }
        }

        self
    }

    /// Remove a document from the index.
    ///
    /// Clears the document's postings and marks it inactive. Removing an
    /// unknown or already-removed identifier is a no-op. Returns the engine
    /// for call chaining.
    pub fn remove_document(&mut self, uid: &D) -> &mut Self {
        if let Some(active) = self.registry.get_mut(uid) {
            if *active {
                self.index.remove_document(uid);
                *active = false;
            }
        }

        self
    }

    /// Search for documents matching every word of the query.
    ///
    /// The query is tokenized on whitespace and lower-cased; a document
    /// matches if each query word is a substring of at least one token of
    /// its indexed text. A query with no words (empty or whitespace-only)
    /// returns every active document. Result order is unspecified.
    pub fn search(&self, query: &str) -> Vec<D> {
        let terms: Vec<String> = match self.query_analyzer.analyze(query) {
            Ok(tokens) => tokens
                .filter(|token| !token.is_stopped())
                .map(|token| token.text)
                .collect(),
            Err(err) => {
                warn!(%err, "query analysis failed");
                return Vec::new();
            }
        };

        if terms.is_empty() {
            return self
                .registry
                .iter()
                .filter(|(_, active)| **active)
                .map(|(uid, _)| uid.clone())
                .collect();
        }

        self.index.search(terms)
    }

    /// Number of active documents.
    pub fn doc_count(&self) -> usize {
        self.registry.values().filter(|active| **active).count()
    }

    /// Check whether an identifier is currently indexed (active).
    pub fn is_indexed(&self, uid: &D) -> bool {
        self.registry.get(uid).copied().unwrap_or(false)
    }

    /// Number of distinct expanded terms in the index.
    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }
}

impl<D: Eq + Hash + Clone> Default for SearchEngine<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> std::fmt::Debug for SearchEngine<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("documents", &self.registry.len())
            .field("index_analyzer", &self.index_analyzer)
            .field("query_analyzer", &self.query_analyzer)
            .finish()
    }
}
