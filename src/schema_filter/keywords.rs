const MIN_KEYWORD_LEN: usize = 3;
const TRAILING_NOISE: [char; 5] = [',', '.', '!', '?', ' '];

/// Splits a question into lowercase keywords of at least three characters,
/// with trailing punctuation removed.
pub fn extract_keywords(question: &str) -> Vec<String> {
    question
        .split_whitespace()
        .map(|word| word.to_lowercase().trim_end_matches(TRAILING_NOISE).to_string())
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords() {
        assert_eq!(
            extract_keywords("List all Users, please!"),
            vec!["list", "all", "users", "please"]
        );
    }

    #[test]
    fn test_extract_keywords_drops_short_words() {
        assert!(extract_keywords("is it ok?").is_empty());
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_extract_keywords_strips_before_measuring() {
        // "id?" is three characters but only two once the "?" is gone
        assert_eq!(extract_keywords("id? orders..."), vec!["orders"]);
    }

    #[test]
    fn test_extract_keywords_counts_characters() {
        assert_eq!(extract_keywords("été"), vec!["été"]);
    }
}
