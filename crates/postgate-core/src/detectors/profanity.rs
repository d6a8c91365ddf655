//! Profanity detection.

use regex::Regex;

use crate::error::ConfigResult;

/// Matches denylisted terms anchored at a word start.
///
/// "shitty" and "fucking" match; "scrap" does not match "crap".
#[derive(Debug, Clone)]
pub struct ProfanityDetector {
    pattern: Option<Regex>,
}

impl ProfanityDetector {
    /// Compile from plain words. Entries are escaped, not treated as regex.
    pub fn compile(words: &[String]) -> ConfigResult<Self> {
        let escaped = words.iter().map(|w| regex::escape(w));
        let pattern = super::alternation("profanity", r"\b", escaped, "")?;
        Ok(Self { pattern })
    }

    /// `true` if any term starts a word in `normalized`.
    pub fn is_match(&self, normalized: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;

    fn detector() -> ProfanityDetector {
        ProfanityDetector::compile(&Vocabulary::default().profanity).unwrap()
    }

    #[test]
    fn whole_word() {
        assert!(detector().is_match("this post is shit"));
    }

    #[test]
    fn inflected_forms() {
        let d = detector();
        assert!(d.is_match("why this fucking framework keeps breaking"));
        assert!(d.is_match("a shitty week"));
        assert!(d.is_match("damned if you do"));
    }

    #[test]
    fn mid_word_substrings_do_not_match() {
        let d = detector();
        assert!(!d.is_match("scrap the old roadmap"));
        assert!(!d.is_match("a classic mishit"));
        assert!(!d.is_match("amsterdam office"));
    }

    #[test]
    fn punctuation_counts_as_boundary() {
        assert!(detector().is_match("what the (wtf) moment"));
    }

    #[test]
    fn clean_text() {
        assert!(!detector().is_match("how i grew from junior to senior developer"));
    }
}
