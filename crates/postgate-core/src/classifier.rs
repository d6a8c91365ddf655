//! The classification pipeline.
//!
//! [`Classifier::classify`] applies the detectors in a fixed precedence so
//! that exactly one [`Verdict`] comes out even when several properties hold
//! at once:
//!
//! 1. trimmed length below the channel minimum → `too_short`
//! 2. lexical heuristics → `gibberish`
//! 3. profanity → `profanity`
//! 4. prompt injection → `irrelevant`
//! 5. topic: off-topic content → `off_topic`;
//!    audience: no professional evidence → `off_topic`;
//!    edit instruction: no subject screening
//! 6. otherwise → `safe`
//!
//! The pipeline never fails and never allocates shared state. The maximum
//! length is enforced separately by [`Classifier::screen`].

use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, ErrorDescriptor};
use crate::channel::{Channel, ChannelThresholds, ValidationThresholds};
use crate::config::Config;
use crate::detectors::{Detectors, LexicalRule};
use crate::error::ConfigResult;
use crate::text;
use crate::verdict::Verdict;
use crate::vocabulary::Vocabulary;

/// Process-wide classifier over the built-in vocabulary and thresholds.
static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::built_in);

/// Screening engine: compiled detectors plus per-channel thresholds.
#[derive(Debug, Clone)]
pub struct Classifier {
    thresholds: ChannelThresholds,
    detectors: Detectors,
}

/// Full report of one classification, for display and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Assessment {
    /// Channel the input was screened on.
    pub channel: Channel,
    /// The single verdict.
    pub verdict: Verdict,
    /// Trimmed input length in characters.
    pub length: usize,
    /// Length band applied.
    pub thresholds: ValidationThresholds,
    /// Lexical rule behind a `gibberish` verdict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexical_rule: Option<LexicalRule>,
    /// Descriptor for a blocking verdict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDescriptor>,
}

impl Default for Classifier {
    fn default() -> Self {
        DEFAULT_CLASSIFIER.clone()
    }
}

impl Classifier {
    /// Build a classifier from a vocabulary and thresholds.
    pub fn new(vocabulary: &Vocabulary, thresholds: ChannelThresholds) -> ConfigResult<Self> {
        thresholds.validate()?;
        Ok(Self {
            thresholds,
            detectors: Detectors::compile(vocabulary)?,
        })
    }

    /// Build a classifier from loaded configuration.
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        let vocabulary = Vocabulary::default().with_overrides(&config.vocabulary);
        let thresholds = ChannelThresholds::with_overrides(&config.thresholds)?;
        Self::new(&vocabulary, thresholds)
    }

    fn built_in() -> Self {
        Self::new(&Vocabulary::default(), ChannelThresholds::default())
            .expect("built-in vocabulary compiles")
    }

    /// Thresholds in effect.
    pub const fn thresholds(&self) -> &ChannelThresholds {
        &self.thresholds
    }

    /// Compiled detectors.
    pub const fn detectors(&self) -> &Detectors {
        &self.detectors
    }

    /// Classify `raw` for `channel`. Total over all strings.
    pub fn classify(&self, channel: Channel, raw: &str) -> Verdict {
        self.run(channel, raw).0
    }

    /// Classify, first rejecting input above the channel maximum as
    /// [`Verdict::TooLong`].
    pub fn screen(&self, channel: Channel, raw: &str) -> Verdict {
        if text::trimmed_len(raw) > self.thresholds.get(channel).max_length {
            tracing::debug!(%channel, "input above channel maximum");
            return Verdict::TooLong;
        }
        self.classify(channel, raw)
    }

    /// Screen `raw` and return a full report.
    pub fn assess(&self, channel: Channel, raw: &str) -> Assessment {
        let thresholds = self.thresholds.get(channel);
        let length = text::trimmed_len(raw);
        let (verdict, lexical_rule) = if length > thresholds.max_length {
            (Verdict::TooLong, None)
        } else {
            self.run(channel, raw)
        };
        Assessment {
            channel,
            verdict,
            length,
            thresholds,
            lexical_rule,
            error: verdict
                .is_blocking()
                .then(|| catalog::describe(verdict, channel)),
        }
    }

    #[tracing::instrument(level = "debug", skip(self, raw), fields(len))]
    fn run(&self, channel: Channel, raw: &str) -> (Verdict, Option<LexicalRule>) {
        let length = text::trimmed_len(raw);
        tracing::Span::current().record("len", length);

        let outcome = if length < self.thresholds.get(channel).min_length {
            (Verdict::TooShort, None)
        } else {
            let normalized = text::normalize(raw);
            if let Some(rule) = self.detectors.gibberish_rule(&normalized) {
                (Verdict::Gibberish, Some(rule))
            } else if self.detectors.has_profanity(&normalized) {
                (Verdict::Profanity, None)
            } else if self.detectors.is_prompt_injection(&normalized) {
                (Verdict::Irrelevant, None)
            } else {
                (self.screen_subject(channel, &normalized), None)
            }
        };

        tracing::debug!(verdict = %outcome.0, "classified");
        outcome
    }

    fn screen_subject(&self, channel: Channel, normalized: &str) -> Verdict {
        let off_topic = match channel {
            Channel::Topic => self.detectors.is_off_topic(normalized),
            Channel::Audience => !self.detectors.is_plausible_audience(normalized),
            Channel::EditInstruction => false,
        };
        if off_topic {
            Verdict::OffTopic
        } else {
            Verdict::Safe
        }
    }
}

/// Classify `raw` for `channel` with the built-in vocabulary.
pub fn classify(channel: Channel, raw: &str) -> Verdict {
    DEFAULT_CLASSIFIER.classify(channel, raw)
}

/// Shared built-in classifier.
pub(crate) fn default_classifier() -> &'static Classifier {
    &DEFAULT_CLASSIFIER
}

/// Descriptor for `verdict` on `channel`. Alias of [`catalog::describe`].
pub fn describe(verdict: Verdict, channel: Channel) -> ErrorDescriptor {
    catalog::describe(verdict, channel)
}
