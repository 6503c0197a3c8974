//! Index module for Kensaku.
//!
//! This module owns postings storage: the mapping from an indexed term to
//! the set of documents containing it, and the set-intersection lookup used
//! to resolve multi-term queries.

pub mod inverted;
pub mod postings;

// Re-export commonly used types
pub use inverted::InvertedIndex;
pub use postings::PostingList;
