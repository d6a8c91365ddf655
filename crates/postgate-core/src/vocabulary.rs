//! Detector vocabulary as injectable configuration data.
//!
//! A [`Vocabulary`] enumerates every list the detectors consult. The
//! built-in catalog comes from [`crate::word_lists`]; configuration files
//! may extend or replace individual lists through [`VocabularyOverrides`].
//! Compile a vocabulary with [`Detectors::compile`](crate::detectors::Detectors::compile).

use serde::{Deserialize, Serialize};

use crate::word_lists;

/// Every list recognised by the detectors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Vocabulary {
    /// Keyboard-mash fragments (plain substrings of whitespace-stripped input).
    pub keyboard_fragments: Vec<String>,
    /// Profane terms (matched at a word start).
    pub profanity: Vec<String>,
    /// Prompt-injection trigger phrases (plain substrings).
    pub injection_triggers: Vec<String>,
    /// Off-topic question openers (regular expressions).
    pub question_patterns: Vec<String>,
    /// Words exempting a question from the off-topic rule (regex fragments, whole word).
    pub professional_terms: Vec<String>,
    /// Non-professional subject keywords (plain substrings).
    pub off_topic_keywords: Vec<String>,
    /// Pure coding-request patterns (regular expressions).
    pub code_patterns: Vec<String>,
    /// Professional audience terms (regex fragments, word-start).
    pub audience_terms: Vec<String>,
    /// Collective audience nouns (plain words, whole word).
    pub collective_nouns: Vec<String>,
    /// Relational connectors for "`<noun> who ...`" audiences (plain words).
    pub relational_connectors: Vec<String>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            keyboard_fragments: owned(word_lists::KEYBOARD_FRAGMENTS),
            profanity: owned(word_lists::PROFANITY),
            injection_triggers: owned(word_lists::INJECTION_TRIGGERS),
            question_patterns: owned(word_lists::QUESTION_PATTERNS),
            professional_terms: owned(word_lists::PROFESSIONAL_TERMS),
            off_topic_keywords: owned(word_lists::OFF_TOPIC_KEYWORDS),
            code_patterns: owned(word_lists::CODE_PATTERNS),
            audience_terms: owned(word_lists::AUDIENCE_TERMS),
            collective_nouns: owned(word_lists::COLLECTIVE_NOUNS),
            relational_connectors: owned(word_lists::RELATIONAL_CONNECTORS),
        }
    }
}

/// How configured lists combine with the built-in ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Configured entries are appended to the built-in list (default).
    #[default]
    Extend,
    /// Configured entries replace the built-in list.
    Replace,
}

/// Vocabulary section of the configuration file.
///
/// Lists left unset keep their built-in contents regardless of `mode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VocabularyOverrides {
    /// Whether configured lists extend or replace the built-ins.
    pub mode: MergeMode,
    /// See [`Vocabulary::keyboard_fragments`].
    pub keyboard_fragments: Option<Vec<String>>,
    /// See [`Vocabulary::profanity`].
    pub profanity: Option<Vec<String>>,
    /// See [`Vocabulary::injection_triggers`].
    pub injection_triggers: Option<Vec<String>>,
    /// See [`Vocabulary::question_patterns`].
    pub question_patterns: Option<Vec<String>>,
    /// See [`Vocabulary::professional_terms`].
    pub professional_terms: Option<Vec<String>>,
    /// See [`Vocabulary::off_topic_keywords`].
    pub off_topic_keywords: Option<Vec<String>>,
    /// See [`Vocabulary::code_patterns`].
    pub code_patterns: Option<Vec<String>>,
    /// See [`Vocabulary::audience_terms`].
    pub audience_terms: Option<Vec<String>>,
    /// See [`Vocabulary::collective_nouns`].
    pub collective_nouns: Option<Vec<String>>,
    /// See [`Vocabulary::relational_connectors`].
    pub relational_connectors: Option<Vec<String>>,
}

impl VocabularyOverrides {
    /// `true` when no list is configured.
    pub const fn is_empty(&self) -> bool {
        self.keyboard_fragments.is_none()
            && self.profanity.is_none()
            && self.injection_triggers.is_none()
            && self.question_patterns.is_none()
            && self.professional_terms.is_none()
            && self.off_topic_keywords.is_none()
            && self.code_patterns.is_none()
            && self.audience_terms.is_none()
            && self.collective_nouns.is_none()
            && self.relational_connectors.is_none()
    }
}

impl Vocabulary {
    /// Apply configuration overrides to this vocabulary.
    ///
    /// Configured entries are lower-cased and trimmed; blank entries are
    /// dropped so an empty string can never match everything.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &VocabularyOverrides) -> Self {
        let mode = overrides.mode;
        merge(&mut self.keyboard_fragments, overrides.keyboard_fragments.as_deref(), mode, phrase);
        merge(&mut self.profanity, overrides.profanity.as_deref(), mode, phrase);
        merge(&mut self.injection_triggers, overrides.injection_triggers.as_deref(), mode, phrase);
        merge(&mut self.question_patterns, overrides.question_patterns.as_deref(), mode, pattern);
        merge(&mut self.professional_terms, overrides.professional_terms.as_deref(), mode, pattern);
        merge(&mut self.off_topic_keywords, overrides.off_topic_keywords.as_deref(), mode, phrase);
        merge(&mut self.code_patterns, overrides.code_patterns.as_deref(), mode, pattern);
        merge(&mut self.audience_terms, overrides.audience_terms.as_deref(), mode, pattern);
        merge(&mut self.collective_nouns, overrides.collective_nouns.as_deref(), mode, phrase);
        merge(
            &mut self.relational_connectors,
            overrides.relational_connectors.as_deref(),
            mode,
            phrase,
        );
        self
    }
}

/// Plain phrases are matched against lower-cased input.
fn phrase(entry: &str) -> String {
    entry.trim().to_lowercase()
}

/// Regex sources keep their case: `\S` and `\s` differ.
fn pattern(entry: &str) -> String {
    entry.trim().to_string()
}

fn merge(
    target: &mut Vec<String>,
    configured: Option<&[String]>,
    mode: MergeMode,
    clean: fn(&str) -> String,
) {
    let Some(configured) = configured else {
        return;
    };
    if mode == MergeMode::Replace {
        target.clear();
    }
    for entry in configured {
        let entry = clean(entry);
        if !entry.is_empty() && !target.contains(&entry) {
            target.push(entry);
        }
    }
}
