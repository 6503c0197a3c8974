//! # Kensaku
//!
//! An in-memory substring search index for Rust.
//!
//! Kensaku indexes identified text documents and answers queries for every
//! document whose text contains each whitespace-delimited query word as a
//! substring, case-insensitively. At index time every token is expanded
//! into all of its contiguous substrings, so query words resolve by direct
//! postings lookup and multi-word queries by set intersection.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Substring matching without query-side expansion
//! - Flexible text analysis pipeline
//! - Generic document identifiers
//! - Fully synchronous, no persistence, no background work
//!
//! ## Example
//!
//! ```
//! use kensaku::engine::SearchEngine;
//!
//! let mut engine = SearchEngine::new();
//! engine
//!     .index_document("readme", "Kensaku substring search")
//!     .index_document("notes", "full text search");
//!
//! let mut hits = engine.search("sear");
//! hits.sort_unstable();
//! assert_eq!(hits, vec!["notes", "readme"]);
//!
//! assert_eq!(engine.search("substring sear"), vec!["readme"]);
//! ```

pub mod analysis;
pub mod engine;
pub mod error;
pub mod index;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
