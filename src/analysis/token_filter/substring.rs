//! Substring expansion filter implementation.

use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{KensakuError, Result};

/// A filter that expands each token into every contiguous substring of
/// itself.
///
/// Indexing all substrings of a token is what turns an exact-term inverted
/// index into a substring-match index: a query word can then be looked up
/// directly and matches whenever it is a substring of some indexed token,
/// with no expansion on the query side. A token of n grapheme clusters
/// expands into n(n+1)/2 substrings, so index size grows quadratically in
/// token length, trading index space for constant-time substring lookups at
/// query time.
///
/// Substrings are taken on grapheme cluster boundaries, so combining
/// sequences are never split. Duplicate substrings of the same token are
/// emitted as-is; downstream posting sets collapse them.
///
/// Expansion is fallible per token: a token whose text cannot be sliced at
/// its computed boundaries is skipped with a logged warning, and the rest of
/// the stream is processed normally.
///
/// # Examples
///
/// ```
/// use kensaku::analysis::token::Token;
/// use kensaku::analysis::token_filter::Filter;
/// use kensaku::analysis::token_filter::substring::SubstringFilter;
///
/// let filter = SubstringFilter::new();
/// let tokens = vec![Token::new("abc", 0)];
/// let expanded: Vec<String> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
///
/// assert_eq!(expanded, vec!["a", "ab", "abc", "b", "bc", "c"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SubstringFilter;

impl SubstringFilter {
    /// Create a new substring expansion filter.
    pub fn new() -> Self {
        SubstringFilter
    }

    /// Expand text into all of its contiguous substrings.
    ///
    /// Emits `text[i..j]` for every pair of grapheme cluster boundaries
    /// i < j, ordered by start boundary and then by end boundary. Returns an
    /// error if any computed range does not fall on valid char boundaries.
    pub fn expand(text: &str) -> Result<Vec<String>> {
        let mut boundaries: Vec<usize> = text.grapheme_indices(true).map(|(i, _)| i).collect();
        boundaries.push(text.len());

        let clusters = boundaries.len() - 1;
        let mut substrings = Vec::with_capacity(clusters * (clusters + 1) / 2);

        for (i, &start) in boundaries.iter().enumerate() {
            for &end in &boundaries[i + 1..] {
                let substring = text.get(start..end).ok_or_else(|| {
                    KensakuError::analysis(format!(
                        "token {text:?} cannot be sliced at byte range {start}..{end}"
                    ))
                })?;
                substrings.push(substring.to_string());
            }
        }

        Ok(substrings)
    }
}

impl Filter for SubstringFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut expanded_tokens = Vec::new();
        let mut position = 0;

        for token in tokens {
            if token.is_stopped() {
                expanded_tokens.push(token.with_position(position));
                position += 1;
                continue;
            }

            match Self::expand(&token.text) {
                Ok(substrings) => {
                    for substring in substrings {
                        expanded_tokens.push(Token::with_offsets(
                            substring,
                            position,
                            token.start_offset,
                            token.end_offset,
                        ));
                        position += 1;
                    }
                }
                Err(err) => {
                    warn!(token = %token.text, %err, "skipping token that cannot be expanded");
                }
            }
        }

        Ok(Box::new(expanded_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}
