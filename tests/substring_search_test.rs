#[cfg(test)]
mod tests {
    use kensaku::engine::SearchEngine;

    fn sorted(mut hits: Vec<u32>) -> Vec<u32> {
        hits.sort_unstable();
        hits
    }

    #[test]
    fn test_substring_lookup() {
        let mut engine = SearchEngine::new();
        engine.index_document(1, "hello world");

        assert_eq!(engine.search("hello"), vec![1]);
        assert_eq!(engine.search("ell"), vec![1]);
        assert_eq!(engine.search("wor"), vec![1]);
        assert_eq!(engine.search("HELLO"), vec![1]);
        assert!(engine.search("xyz").is_empty());
    }

    #[test]
    fn test_multi_word_and_semantics() {
        let mut engine = SearchEngine::new();
        engine
            .index_document(1, "alpha beta")
            .index_document(2, "alpha gamma");

        assert_eq!(engine.search("alpha beta"), vec![1]);
        assert_eq!(sorted(engine.search("alpha")), vec![1, 2]);
        assert_eq!(engine.search("beta gamma"), Vec::<u32>::new());
    }

    #[test]
    fn test_empty_query_returns_all_documents() {
        let mut engine = SearchEngine::new();
        engine
            .index_document(1, "first document")
            .index_document(2, "second document");

        assert_eq!(sorted(engine.search("")), vec![1, 2]);
        assert_eq!(sorted(engine.search("   \t  ")), vec![1, 2]);
    }

    #[test]
    fn test_removal_clears_postings_and_empty_query() {
        let mut engine = SearchEngine::new();
        engine
            .index_document(1, "hello world")
            .index_document(2, "hello there");

        engine.remove_document(&1);

        assert_eq!(engine.search("hello"), vec![2]);
        assert!(engine.search("world").is_empty());
        // Removed documents are excluded from empty-query results.
        assert_eq!(engine.search(""), vec![2]);

        // Removing again, or removing something never indexed, is a no-op.
        engine.remove_document(&1).remove_document(&42);
        assert_eq!(engine.search(""), vec![2]);
    }

    #[test]
    fn test_whitespace_robustness() {
        let mut engine = SearchEngine::new();
        engine
            .index_document(3, "  Foo   Bar  ")
            .index_document(4, "foo bar");

        // Both documents index identically.
        assert_eq!(sorted(engine.search("foo")), vec![3, 4]);
        assert_eq!(sorted(engine.search("foo bar")), vec![3, 4]);
        assert_eq!(sorted(engine.search("oo")), vec![3, 4]);
        // "foo" yields 5 distinct substrings, "bar" yields 6, no overlap;
        // both documents produce the same terms.
        assert_eq!(engine.term_count(), 11);
    }

    #[test]
    fn test_every_substring_matches() {
        let mut engine = SearchEngine::new();
        engine.index_document(1, "abcd");

        let chars: Vec<char> = "abcd".chars().collect();
        for i in 0..chars.len() {
            for j in i + 1..=chars.len() {
                let query: String = chars[i..j].iter().collect();
                assert_eq!(engine.search(&query), vec![1], "query {query:?}");
            }
        }

        // n(n+1)/2 distinct terms for a token with no repeated substrings.
        assert_eq!(engine.term_count(), 10);
    }

    #[test]
    fn test_repeated_words_collapse() {
        let mut engine = SearchEngine::new();
        engine.index_document(1, "echo echo echo");

        assert_eq!(engine.search("echo"), vec![1]);
        assert_eq!(engine.search("ch"), vec![1]);
    }

    #[test]
    fn test_reindex_replaces_old_text() {
        let mut engine = SearchEngine::new();
        engine.index_document(1, "hello world");
        engine.index_document(1, "planet world");

        // Words only in the old text no longer match.
        assert!(engine.search("hello").is_empty());
        // New and shared words do.
        assert_eq!(engine.search("planet"), vec![1]);
        assert_eq!(engine.search("world"), vec![1]);
        assert_eq!(engine.search(""), vec![1]);
    }

    #[test]
    fn test_query_is_not_expanded() {
        let mut engine = SearchEngine::new();
        engine.index_document(1, "ab");

        // "ba" is not a substring of "ab", so reversing must not match even
        // though both letters do individually.
        assert_eq!(engine.search("a"), vec![1]);
        assert_eq!(engine.search("b"), vec![1]);
        assert!(engine.search("ba").is_empty());
    }

    #[test]
    fn test_unicode_substrings() {
        let mut engine = SearchEngine::new();
        engine.index_document(1, "日本語 search");

        assert_eq!(engine.search("本語"), vec![1]);
        assert_eq!(engine.search("日"), vec![1]);
        assert_eq!(engine.search("本語 sear"), vec![1]);
        assert!(engine.search("語日").is_empty());
    }

    #[test]
    fn test_string_identifiers() {
        let mut engine = SearchEngine::new();
        engine
            .index_document("doc-a".to_string(), "rust search engine")
            .index_document("doc-b".to_string(), "rust substring index");

        let mut hits = engine.search("rust");
        hits.sort();
        assert_eq!(hits, vec!["doc-a".to_string(), "doc-b".to_string()]);

        assert_eq!(engine.search("engine"), vec!["doc-a".to_string()]);
    }
}
