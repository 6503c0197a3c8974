//! Analyzer implementations that combine tokenizers and filters.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analyzers are responsible for the complete text processing pipeline,
/// from raw text to the tokens handed to the index.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual analyzer modules
pub mod pipeline;

// Re-export for convenient access
pub use pipeline::PipelineAnalyzer;
