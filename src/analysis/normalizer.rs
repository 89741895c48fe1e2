//! Text normalization.

use regex::Regex;

use crate::error::{DocSearchError, Result};

/// Canonicalizes text into a lowercase, single-spaced, alphanumeric
/// token stream.
///
/// Normalization applies, in order:
/// 1. lowercasing,
/// 2. possessive-suffix stripping (`'s` or `’s` removed entirely, so
///    "day's" becomes "day", not "days"),
/// 3. removal of any remaining apostrophes ("o'clock" becomes "oclock"),
/// 4. replacement of every maximal run of characters outside `[a-z0-9]`
///    with a single space.
///
/// The result may keep a leading or trailing space when the input began
/// or ended with punctuation; callers tolerate this. The function is
/// pure and idempotent.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    /// Matches a possessive suffix: straight or curly apostrophe + `s`.
    possessive: Regex,
    /// Matches any leftover apostrophe character.
    apostrophe: Regex,
    /// Matches a maximal run of non-token characters.
    non_token: Regex,
}

impl TextNormalizer {
    /// Create a new normalizer with its patterns compiled.
    pub fn new() -> Result<Self> {
        Ok(TextNormalizer {
            possessive: compile(r"['’]s")?,
            apostrophe: compile(r"['’]")?,
            non_token: compile(r"[^a-z0-9]+")?,
        })
    }

    /// Normalize the given text into its canonical token-stream form.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.possessive.replace_all(&lowered, "");
        let stripped = self.apostrophe.replace_all(&stripped, "");
        self.non_token.replace_all(&stripped, " ").into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new().expect("Built-in normalization patterns should be valid")
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| DocSearchError::analysis(format!("Invalid pattern: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new().unwrap()
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(normalizer().normalize("Warp Drive"), "warp drive");
    }

    #[test]
    fn test_possessive_stripping() {
        let n = normalizer();
        assert_eq!(n.normalize("day's"), "day");
        assert_eq!(n.normalize("day’s"), "day");
        assert_eq!(n.normalize("the ship's hull"), "the ship hull");
        // Possessive stripping matches normalization of the bare word.
        assert_eq!(n.normalize("day's"), n.normalize("day"));
    }

    #[test]
    fn test_remaining_apostrophes_removed() {
        let n = normalizer();
        assert_eq!(n.normalize("o'clock"), "oclock");
        assert_eq!(n.normalize("don't"), "dont");
        // Plural possessive: the trailing apostrophe just disappears.
        assert_eq!(n.normalize("the days' end"), "the days end");
    }

    #[test]
    fn test_punctuation_runs_become_one_space() {
        let n = normalizer();
        assert_eq!(n.normalize("faster-than-light (FTL)"), "faster than light ftl ");
        assert_eq!(n.normalize("one,  two...three"), "one two three");
    }

    #[test]
    fn test_leading_trailing_punctuation_leaves_space() {
        let n = normalizer();
        assert_eq!(n.normalize("(FTL)"), " ftl ");
        assert_eq!(n.normalize("* "), " ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalizer().normalize(""), "");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(normalizer().normalize("In 2005!"), "in 2005 ");
    }

    #[test]
    fn test_idempotent() {
        let n = normalizer();
        for input in ["", " ", "Warp Drive!", "day's", "(FTL), don't panic... 2005"] {
            let once = n.normalize(input);
            assert_eq!(n.normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
