use crate::config::DEFAULT_MIN_TERM_LEN;

/// Splits free text into normalized terms.
///
/// The text is lower-cased, every char that is not a letter, digit or `_`
/// becomes a separator, and terms shorter than `min_term_len` chars are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_term_len: usize,
}

impl Tokenizer {
    pub fn new(min_term_len: usize) -> Self {
        Self { min_term_len }
    }

    #[inline]
    pub fn min_term_len(&self) -> usize {
        self.min_term_len
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| if is_term_char(c) { c } else { ' ' })
            .collect();
        normalized
            .split_whitespace()
            .filter(|term| term.chars().count() >= self.min_term_len)
            .map(str::to_owned)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TERM_LEN)
    }
}

#[inline]
fn is_term_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize with the default length floor (terms of 2 chars or fewer dropped)
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_drops_short_terms() {
        assert_eq!(
            tokenize("Refund confirmation email not sent to customer"),
            vec!["refund", "confirmation", "email", "not", "sent", "customer"]
        );
    }

    #[test]
    fn punctuation_splits_terms() {
        assert_eq!(
            tokenize("login-page: throws ERROR,on submit!!"),
            vec!["login", "page", "throws", "error", "submit"]
        );
    }

    #[test]
    fn underscores_and_digits_are_kept() {
        assert_eq!(
            tokenize("order_id 404 v2 x86_64"),
            vec!["order_id", "404", "x86_64"]
        );
    }

    #[test]
    fn empty_and_blank_input_give_no_terms() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
        assert!(tokenize("a an to ?? --").is_empty());
    }

    #[test]
    fn length_is_counted_in_chars() {
        // "éé" is 4 bytes but 2 chars
        assert_eq!(tokenize("éé ééé"), vec!["ééé"]);
    }

    #[test]
    fn tokenizing_is_deterministic() {
        let text = "Duplicate invoice; duplicate INVOICE sent twice";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn custom_floor() {
        let tokenizer = Tokenizer::new(1);
        assert_eq!(tokenizer.tokenize("a to be"), vec!["a", "to", "be"]);
    }
}
