//! Banned-word screening for comment submissions.

/// Substrings that may not appear in comment text.
pub const BAD_WORDS: &[&str] = &["редиска", "негодяй"];

/// Field error reported when a banned substring is found.
pub const MODERATION_WARNING: &str = "Не ругайтесь!";

/// Return the first banned substring contained in `text`, if any.
///
/// Matching is literal and case-sensitive; there is no masking or
/// alternative-spelling detection.
pub fn find_banned_word(text: &str) -> Option<&'static str> {
    BAD_WORDS.iter().copied().find(|word| text.contains(*word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Какой-то текст, редиска, еще текст", Some("редиска"))]
    #[case("ты негодяй", Some("негодяй"))]
    #[case("совершенно безобидный текст", None)]
    // Case-sensitive by contract: the capitalised spelling passes.
    #[case("Редиска", None)]
    #[case("", None)]
    fn finds_literal_substrings(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(find_banned_word(text), expected);
    }
}
