//! Input channels and their length thresholds.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// The logical field an input string belongs to.
///
/// The channel selects which detectors run and which length band applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Channel {
    /// The post topic.
    Topic,
    /// The target audience.
    Audience,
    /// A free-form instruction for editing a selected passage.
    #[cfg_attr(feature = "clap", value(name = "edit-instruction", alias = "edit_instruction"))]
    EditInstruction,
}

impl Channel {
    /// Every channel, in declaration order.
    pub const ALL: [Self; 3] = [Self::Topic, Self::Audience, Self::EditInstruction];

    /// Returns the channel as a snake_case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Audience => "audience",
            Self::EditInstruction => "edit_instruction",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown channel name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown channel: {0}. Use: topic, audience, edit_instruction")]
pub struct UnknownChannel(pub String);

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "topic" => Ok(Self::Topic),
            "audience" => Ok(Self::Audience),
            "edit_instruction" | "instruction" => Ok(Self::EditInstruction),
            _ => Err(UnknownChannel(s.to_string())),
        }
    }
}

/// Inclusive length band for one channel, in characters of trimmed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ValidationThresholds {
    /// Inputs shorter than this are `too_short`.
    pub min_length: usize,
    /// Inputs longer than this are `too_long` at the gate.
    pub max_length: usize,
}

impl ValidationThresholds {
    /// Topic band: 10..=500.
    pub const TOPIC: Self = Self {
        min_length: 10,
        max_length: 500,
    };
    /// Audience band: 3..=100.
    pub const AUDIENCE: Self = Self {
        min_length: 3,
        max_length: 100,
    };
    /// Edit instruction band: 5..=200.
    pub const EDIT_INSTRUCTION: Self = Self {
        min_length: 5,
        max_length: 200,
    };

    /// Built-in band for `channel`.
    pub const fn for_channel(channel: Channel) -> Self {
        match channel {
            Channel::Topic => Self::TOPIC,
            Channel::Audience => Self::AUDIENCE,
            Channel::EditInstruction => Self::EDIT_INSTRUCTION,
        }
    }
}

/// Partial override of a channel's band, as read from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThresholdOverride {
    /// Replacement minimum length.
    pub min_length: Option<usize>,
    /// Replacement maximum length.
    pub max_length: Option<usize>,
}

/// Per-channel overrides section of the configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThresholdOverrides {
    /// Topic overrides.
    pub topic: ThresholdOverride,
    /// Audience overrides.
    pub audience: ThresholdOverride,
    /// Edit instruction overrides.
    pub edit_instruction: ThresholdOverride,
}

/// Length bands for all three channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ChannelThresholds {
    /// Topic band.
    pub topic: ValidationThresholds,
    /// Audience band.
    pub audience: ValidationThresholds,
    /// Edit instruction band.
    pub edit_instruction: ValidationThresholds,
}

impl Default for ChannelThresholds {
    fn default() -> Self {
        Self {
            topic: ValidationThresholds::TOPIC,
            audience: ValidationThresholds::AUDIENCE,
            edit_instruction: ValidationThresholds::EDIT_INSTRUCTION,
        }
    }
}

impl ChannelThresholds {
    /// Band for `channel`.
    pub const fn get(&self, channel: Channel) -> ValidationThresholds {
        match channel {
            Channel::Topic => self.topic,
            Channel::Audience => self.audience,
            Channel::EditInstruction => self.edit_instruction,
        }
    }

    /// Apply configuration overrides on top of the built-in bands and
    /// validate the result.
    pub fn with_overrides(overrides: &ThresholdOverrides) -> ConfigResult<Self> {
        let apply = |base: ValidationThresholds, o: &ThresholdOverride| ValidationThresholds {
            min_length: o.min_length.unwrap_or(base.min_length),
            max_length: o.max_length.unwrap_or(base.max_length),
        };
        let defaults = Self::default();
        let merged = Self {
            topic: apply(defaults.topic, &overrides.topic),
            audience: apply(defaults.audience, &overrides.audience),
            edit_instruction: apply(defaults.edit_instruction, &overrides.edit_instruction),
        };
        merged.validate()?;
        Ok(merged)
    }

    /// Reject empty or inverted bands.
    pub fn validate(&self) -> ConfigResult<()> {
        for channel in Channel::ALL {
            let band = self.get(channel);
            if band.min_length == 0 || band.min_length > band.max_length {
                return Err(ConfigError::InvalidThresholds {
                    channel,
                    min: band.min_length,
                    max: band.max_length,
                });
            }
        }
        Ok(())
    }
}
