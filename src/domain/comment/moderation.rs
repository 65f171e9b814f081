// src/domain/comment/moderation.rs

/// Returns the first whitespace-separated token of `text` that appears in
/// `blocklist`. Tokens are lower-cased before comparison, so entries in
/// `blocklist` must already be lower-case. Matching is whole-token only;
/// a blocked word embedded inside a longer token passes.
pub fn first_prohibited_word(text: &str, blocklist: &[String]) -> Option<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .find(|token| blocklist.iter().any(|blocked| blocked == token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocklist() -> Vec<String> {
        vec!["badword1".into(), "badword2".into(), "badword3".into()]
    }

    #[test]
    fn clean_text_passes() {
        assert_eq!(
            first_prohibited_word("a perfectly fine comment", &blocklist()),
            None
        );
    }

    #[test]
    fn finds_the_first_blocked_token() {
        assert_eq!(
            first_prohibited_word("well badword2 then badword1", &blocklist()),
            Some("badword2".into())
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            first_prohibited_word("this is BadWord1 territory", &blocklist()),
            Some("badword1".into())
        );
    }

    #[test]
    fn embedded_words_are_not_flagged() {
        assert_eq!(
            first_prohibited_word("notbadword1 badword1suffix", &blocklist()),
            None
        );
    }

    #[test]
    fn empty_blocklist_blocks_nothing() {
        assert_eq!(first_prohibited_word("badword1", &[]), None);
    }
}
