//! Category detectors compiled from a [`Vocabulary`].
//!
//! [`Detectors`] holds every compiled matcher. Each predicate takes a string
//! already passed through [`text::normalize`](crate::text::normalize) and is
//! pure: same input, same answer, no shared mutable state.

pub mod audience;
pub mod injection;
pub mod lexical;
pub mod off_topic;
pub mod profanity;

use aho_corasick::AhoCorasick;
use regex::{Regex, RegexSet};

use crate::error::{ConfigError, ConfigResult};
use crate::vocabulary::Vocabulary;

pub use audience::AudienceDetector;
pub use injection::InjectionDetector;
pub use lexical::LexicalRule;
pub use off_topic::OffTopicDetector;
pub use profanity::ProfanityDetector;

/// All detectors, compiled once and shared by reference.
#[derive(Debug, Clone)]
pub struct Detectors {
    keyboard: AhoCorasick,
    profanity: ProfanityDetector,
    injection: InjectionDetector,
    off_topic: OffTopicDetector,
    audience: AudienceDetector,
}

impl Detectors {
    /// Compile every list in `vocabulary`.
    ///
    /// Fails only when a configured regular expression is invalid.
    #[tracing::instrument(skip_all)]
    pub fn compile(vocabulary: &Vocabulary) -> ConfigResult<Self> {
        let detectors = Self {
            keyboard: phrase_matcher("keyboard_fragments", &vocabulary.keyboard_fragments)?,
            profanity: ProfanityDetector::compile(&vocabulary.profanity)?,
            injection: InjectionDetector::compile(&vocabulary.injection_triggers)?,
            off_topic: OffTopicDetector::compile(vocabulary)?,
            audience: AudienceDetector::compile(vocabulary)?,
        };
        tracing::debug!(
            profanity = vocabulary.profanity.len(),
            injection = vocabulary.injection_triggers.len(),
            off_topic = vocabulary.off_topic_keywords.len(),
            audience = vocabulary.audience_terms.len(),
            "detectors compiled"
        );
        Ok(detectors)
    }

    /// First lexical rule that marks the input as gibberish, if any.
    pub fn gibberish_rule(&self, normalized: &str) -> Option<LexicalRule> {
        lexical::first_rule(normalized, &self.keyboard)
    }

    /// Input is not plausibly natural language.
    pub fn is_gibberish(&self, normalized: &str) -> bool {
        self.gibberish_rule(normalized).is_some()
    }

    /// Input contains a denylisted term at a word start.
    pub fn has_profanity(&self, normalized: &str) -> bool {
        self.profanity.is_match(normalized)
    }

    /// Input contains a prompt-injection or security trigger phrase.
    pub fn is_prompt_injection(&self, normalized: &str) -> bool {
        self.injection.is_match(normalized)
    }

    /// Input is off-topic for post content.
    pub fn is_off_topic(&self, normalized: &str) -> bool {
        self.off_topic.is_match(normalized)
    }

    /// Input names a plausible professional audience.
    pub fn is_plausible_audience(&self, normalized: &str) -> bool {
        self.audience.is_match(normalized)
    }
}

/// Compile one regular expression from a vocabulary list.
pub(crate) fn compile_regex(list: &'static str, pattern: &str) -> ConfigResult<Regex> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        list,
        pattern: pattern.to_string(),
        source: Box::new(e),
    })
}

/// Compile a list of independent regular expressions into a set.
///
/// Each pattern is compiled alone first so a failure names the exact entry.
pub(crate) fn compile_set(list: &'static str, patterns: &[String]) -> ConfigResult<RegexSet> {
    for p in patterns {
        compile_regex(list, p)?;
    }
    RegexSet::new(patterns).map_err(|e| ConfigError::InvalidPattern {
        list,
        pattern: patterns.join(" | "),
        source: Box::new(e),
    })
}

/// Build `prefix(?:a|b|c)suffix` from fragments, or `None` for an empty list.
///
/// An empty alternation would match everywhere, so it is never built.
pub(crate) fn alternation<S: AsRef<str>>(
    list: &'static str,
    prefix: &str,
    entries: impl IntoIterator<Item = S>,
    suffix: &str,
) -> ConfigResult<Option<Regex>> {
    let body: Vec<String> = entries
        .into_iter()
        .map(|e| e.as_ref().to_string())
        .filter(|e| !e.is_empty())
        .collect();
    if body.is_empty() {
        return Ok(None);
    }
    let pattern = format!("{prefix}(?:{}){suffix}", body.join("|"));
    compile_regex(list, &pattern).map(Some)
}

/// Build a substring matcher over plain phrases.
pub(crate) fn phrase_matcher(list: &'static str, phrases: &[String]) -> ConfigResult<AhoCorasick> {
    let phrases: Vec<&str> = phrases
        .iter()
        .map(String::as_str)
        .filter(|p| !p.is_empty())
        .collect();
    AhoCorasick::new(phrases).map_err(|source| ConfigError::InvalidPhrases { list, source })
}
