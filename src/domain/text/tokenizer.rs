//! Word tokenizer used by frequency analysis and page word counts.

use super::is_cjk_ideograph;

/// Returns `true` if the character may appear inside a token.
pub fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || is_cjk_ideograph(c)
}

/// Splits free text into lower-cased word tokens.
///
/// Every character that is neither alphanumeric nor a CJK ideograph acts as
/// a separator. Tokens shorter than `min_length` characters are dropped.
/// Order follows the input; duplicates are kept.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(tokenize("Hello, hello world!", 2), vec!["hello", "hello", "world"]);
/// assert!(tokenize("", 1).is_empty());
/// ```
pub fn tokenize(text: &str, min_length: usize) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_token_char(c) { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() >= min_length)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Hello, World! Rust-lang", 1),
            vec!["hello", "world", "rust", "lang"]
        );
    }

    #[test]
    fn test_tokenize_preserves_order_and_duplicates() {
        assert_eq!(
            tokenize("buy shoes, buy boots", 1),
            vec!["buy", "shoes", "buy", "boots"]
        );
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("a an the of", 3), vec!["the"]);
    }

    #[test]
    fn test_tokenize_keeps_cjk_runs() {
        assert_eq!(tokenize("数字营销 SEO 分析", 2), vec!["数字营销", "seo", "分析"]);
    }

    #[test]
    fn test_tokenize_underscore_is_a_separator() {
        assert_eq!(tokenize("snake_case", 1), vec!["snake", "case"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("", 1).is_empty());
        assert!(tokenize("", 5).is_empty());
        assert!(tokenize("  ...  !!", 1).is_empty());
    }

    #[test]
    fn test_tokens_satisfy_length_and_character_class() {
        let text = "Ünïcode wörds, e-mail: x@y.z; 中文 字 a1b2 ___";
        for min in 1..=4 {
            for token in tokenize(text, min) {
                assert!(token.chars().count() >= min);
                assert!(token.chars().all(is_token_char));
                assert_eq!(token, token.to_lowercase());
            }
        }
    }
}
