//! Audience plausibility.
//!
//! An audience is plausible when it names a professional role, industry or
//! seniority, uses a broad collective noun, or has the relational shape
//! "`<noun> who/in/at ...`".

use regex::Regex;

use crate::error::ConfigResult;
use crate::vocabulary::Vocabulary;

/// Compiled audience rules.
#[derive(Debug, Clone)]
pub struct AudienceDetector {
    terms: Option<Regex>,
    collective: Option<Regex>,
    relational: Option<Regex>,
}

impl AudienceDetector {
    /// Compile the role, collective and relational lists.
    pub fn compile(vocabulary: &Vocabulary) -> ConfigResult<Self> {
        let collective = vocabulary.collective_nouns.iter().map(|n| regex::escape(n));
        let connectors = vocabulary
            .relational_connectors
            .iter()
            .map(|c| regex::escape(c));
        Ok(Self {
            // No trailing boundary: "developers", "leadership" pass.
            terms: super::alternation("audience_terms", r"\b", &vocabulary.audience_terms, "")?,
            collective: super::alternation("collective_nouns", r"\b", collective, r"\b")?,
            relational: super::alternation(
                "relational_connectors",
                r"\w+\s+",
                connectors,
                r"\s+",
            )?,
        })
    }

    /// Names a role, industry or seniority term.
    pub fn has_professional_term(&self, normalized: &str) -> bool {
        matches(self.terms.as_ref(), normalized)
    }

    /// Uses a broad collective noun ("professionals", "job seekers").
    pub fn has_collective_noun(&self, normalized: &str) -> bool {
        matches(self.collective.as_ref(), normalized)
    }

    /// Has the shape "`<noun> who/in/at/...` more words".
    pub fn has_relational_shape(&self, normalized: &str) -> bool {
        matches(self.relational.as_ref(), normalized)
    }

    /// Any positive evidence of a professional audience.
    pub fn is_match(&self, normalized: &str) -> bool {
        self.has_professional_term(normalized)
            || self.has_collective_noun(normalized)
            || self.has_relational_shape(normalized)
    }
}

fn matches(re: Option<&Regex>, normalized: &str) -> bool {
    re.is_some_and(|re| re.is_match(normalized))
}
