//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on runs of whitespace.
///
/// Consecutive whitespace characters are treated as a single separator, so
/// leading, trailing, and repeated whitespace never produce empty tokens.
///
/// # Examples
///
/// ```
/// use kensaku::analysis::token::Token;
/// use kensaku::analysis::tokenizer::Tokenizer;
/// use kensaku::analysis::tokenizer::whitespace::WhitespaceTokenizer;
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens: Vec<Token> = tokenizer.tokenize("  foo   bar  ").unwrap().collect();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "foo");
/// assert_eq!(tokens[1].text, "bar");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut start: Option<usize> = None;

        // Single scan over char boundaries, tracking word start offsets
        // directly so repeated words get the right offsets.
        for (offset, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(word_start) = start.take() {
                    tokens.push(Token::with_offsets(
                        &text[word_start..offset],
                        position,
                        word_start,
                        offset,
                    ));
                    position += 1;
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }

        if let Some(word_start) = start {
            tokens.push(Token::with_offsets(
                &text[word_start..],
                position,
                word_start,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_offsets() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("  abc  abc").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].start_offset, 2);
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[1].end_offset, 10);
    }

    #[test]
    fn test_positions_are_sequential() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("a b c").unwrap().collect();

        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        let tokenizer = WhitespaceTokenizer::new();

        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize("   \t\n  ").unwrap().count(), 0);
    }

    #[test]
    fn test_unicode_text() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("日本語 検索").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "日本語");
        assert_eq!(tokens[1].text, "検索");
        // "日本語" is 9 bytes in UTF-8
        assert_eq!(tokens[1].start_offset, 10);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
