//! The closed set of classification outcomes.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of screening one input string on one channel.
///
/// Exactly one verdict is produced per call. Every variant except
/// [`Verdict::Safe`] blocks the downstream generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Verdict {
    /// Input may be forwarded.
    Safe,
    /// Trimmed input is below the channel minimum.
    #[cfg_attr(feature = "clap", value(name = "too-short", alias = "too_short"))]
    TooShort,
    /// Trimmed input is above the channel maximum. Produced by the gate, not
    /// by the classification pipeline.
    #[cfg_attr(feature = "clap", value(name = "too-long", alias = "too_long"))]
    TooLong,
    /// Input is not plausibly natural language.
    Gibberish,
    /// Input is outside the professional domain for its channel.
    #[cfg_attr(feature = "clap", value(name = "off-topic", alias = "off_topic"))]
    OffTopic,
    /// Input contains a denylisted term.
    Profanity,
    /// Input looks like a prompt-injection or security-sensitive request.
    Irrelevant,
}

impl Verdict {
    /// Every verdict, in precedence order after `Safe`.
    pub const ALL: [Self; 7] = [
        Self::Safe,
        Self::TooShort,
        Self::TooLong,
        Self::Gibberish,
        Self::Profanity,
        Self::Irrelevant,
        Self::OffTopic,
    ];

    /// Returns the verdict as a snake_case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::Gibberish => "gibberish",
            Self::OffTopic => "off_topic",
            Self::Profanity => "profanity",
            Self::Irrelevant => "irrelevant",
        }
    }

    /// `true` only for [`Verdict::Safe`].
    pub const fn is_safe(&self) -> bool {
        matches!(self, Self::Safe)
    }

    /// `true` for every verdict that must stop the downstream call.
    pub const fn is_blocking(&self) -> bool {
        !self.is_safe()
    }

    /// `true` for policy findings (profanity, injection) as opposed to
    /// input-quality findings.
    pub const fn is_policy_violation(&self) -> bool {
        matches!(self, Self::Profanity | Self::Irrelevant)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown verdict name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown verdict: {0}")]
pub struct UnknownVerdict(pub String);

impl FromStr for Verdict {
    type Err = UnknownVerdict;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == key)
            .ok_or_else(|| UnknownVerdict(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_safe_is_non_blocking() {
        for v in Verdict::ALL {
            assert_eq!(v.is_blocking(), v != Verdict::Safe, "{v}");
        }
    }

    #[test]
    fn parses_its_own_names() {
        for v in Verdict::ALL {
            assert_eq!(v.as_str().parse::<Verdict>().unwrap(), v);
        }
        assert_eq!("off-topic".parse::<Verdict>().unwrap(), Verdict::OffTopic);
        assert!("unsafe".parse::<Verdict>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&Verdict::TooShort).unwrap(),
            "\"too_short\""
        );
        let v: Verdict = serde_json::from_str("\"irrelevant\"").unwrap();
        assert_eq!(v, Verdict::Irrelevant);
    }

    #[test]
    fn policy_violations() {
        assert!(Verdict::Profanity.is_policy_violation());
        assert!(Verdict::Irrelevant.is_policy_violation());
        assert!(!Verdict::Gibberish.is_policy_violation());
    }
}
