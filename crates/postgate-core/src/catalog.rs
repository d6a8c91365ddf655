//! User-facing error descriptors for blocking verdicts.
//!
//! [`describe`] is a pure lookup keyed by `(verdict, channel)`. Wording
//! varies by channel for length, gibberish and off-topic findings; policy
//! findings (profanity, injection) read the same on every channel.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::verdict::Verdict;

/// Renderable explanation of a blocking verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorDescriptor {
    /// Short headline.
    pub title: String,
    /// One or two sentences explaining the problem.
    pub message: String,
    /// Glyph shown next to the title.
    pub icon: String,
    /// Three example fixes, most useful first.
    pub suggestions: [String; 3],
}

/// Static form of a descriptor, as stored in the lookup table.
#[derive(Debug, Clone, Copy)]
struct Entry {
    title: &'static str,
    message: &'static str,
    icon: &'static str,
    suggestions: [&'static str; 3],
}

impl Entry {
    fn to_descriptor(self) -> ErrorDescriptor {
        ErrorDescriptor {
            title: self.title.to_string(),
            message: self.message.to_string(),
            icon: self.icon.to_string(),
            suggestions: self.suggestions.map(str::to_string),
        }
    }
}

const TOPIC_TOO_SHORT: Entry = Entry {
    title: "Too Short",
    message: "Your topic needs more detail to produce a quality post.",
    icon: "📏",
    suggestions: [
        "Add more context about your topic",
        "Include a specific detail or experience",
        "Say what value you want readers to take away",
    ],
};

const AUDIENCE_TOO_SHORT: Entry = Entry {
    title: "Too Short",
    message: "Your target audience needs more detail. Who exactly are you writing for?",
    icon: "📏",
    suggestions: [
        "Try: 'Software Developers & Engineers'",
        "Try: 'SaaS Founders & CTOs'",
        "Try: 'Marketing Professionals in Tech'",
    ],
};

const INSTRUCTION_TOO_SHORT: Entry = Entry {
    title: "Be More Specific",
    message: "Tell the editor what to do with the selected text in a few more words.",
    icon: "📏",
    suggestions: [
        "Try: 'Make this sentence punchier'",
        "Try: 'Rewrite this with a concrete number'",
        "Try: 'Turn this into a question'",
    ],
};

const TOPIC_TOO_LONG: Entry = Entry {
    title: "Too Long",
    message: "Your topic is longer than the allowed maximum. Trim it to the core idea.",
    icon: "✂️",
    suggestions: [
        "Keep the single most important point",
        "Move supporting details into the post itself",
        "Cut filler words and repeated phrases",
    ],
};

const AUDIENCE_TOO_LONG: Entry = Entry {
    title: "Too Long",
    message: "Describe your audience in a short phrase rather than a paragraph.",
    icon: "✂️",
    suggestions: [
        "Name one role: 'Product Managers'",
        "Add one qualifier: 'Product Managers in FinTech'",
        "Drop secondary groups",
    ],
};

const INSTRUCTION_TOO_LONG: Entry = Entry {
    title: "Too Long",
    message: "Keep the edit instruction short and focused on one change.",
    icon: "✂️",
    suggestions: [
        "Ask for one change at a time",
        "Try: 'Shorten this to one sentence'",
        "Try: 'Make the tone more confident'",
    ],
};

const TOPIC_GIBBERISH: Entry = Entry {
    title: "That Doesn't Look Right",
    message: "This doesn't look like a real topic. Please enter something meaningful.",
    icon: "🤔",
    suggestions: [
        "Try: 'Why remote work is the future of tech'",
        "Try: 'Lessons from scaling my startup to 100 users'",
        "Try: 'The one skill every developer needs'",
    ],
};

const AUDIENCE_GIBBERISH: Entry = Entry {
    title: "That Doesn't Look Right",
    message: "This doesn't look like a real audience. Please enter a professional group or role.",
    icon: "🤔",
    suggestions: [
        "Try: 'Junior Developers'",
        "Try: 'Startup Founders'",
        "Try: 'Product Managers in SaaS'",
    ],
};

const INSTRUCTION_GIBBERISH: Entry = Entry {
    title: "That Doesn't Look Right",
    message: "That doesn't look like a real instruction.",
    icon: "🤔",
    suggestions: [
        "Try: 'Make it more concise'",
        "Try: 'Add a call to action'",
        "Try: 'Use simpler words'",
    ],
};

const TOPIC_OFF_TOPIC: Entry = Entry {
    title: "Not Professional Content",
    message: "This doesn't seem related to professional content. Posts should be about business, career, tech, leadership or professional growth.",
    icon: "🚧",
    suggestions: [
        "Share a professional insight or experience",
        "Discuss an industry trend or a hot take",
        "Talk about career growth or a lesson learned",
    ],
};

const AUDIENCE_OFF_TOPIC: Entry = Entry {
    title: "Not a Professional Audience",
    message: "Your target audience should be a professional group, role or industry.",
    icon: "👥",
    suggestions: [
        "Try a job title: 'Software Engineers'",
        "Try an industry: 'FinTech Professionals'",
        "Try a role: 'Team Leads & Engineering Managers'",
    ],
};

const INSTRUCTION_OFF_TOPIC: Entry = Entry {
    title: "Not an Editing Instruction",
    message: "Describe how the selected text should change.",
    icon: "🚧",
    suggestions: [
        "Try: 'Make this more persuasive'",
        "Try: 'Add a statistic here'",
        "Try: 'Shorten this sentence'",
    ],
};

const PROFANITY: Entry = Entry {
    title: "Keep It Professional",
    message: "Your post will reach recruiters, colleagues and potential clients. Please rephrase without vulgar language.",
    icon: "🛑",
    suggestions: [
        "Express frustration professionally: 'The challenge I faced...'",
        "Channel strong feelings into a concrete insight",
        "Keep the energy, lose the language",
    ],
};

const IRRELEVANT: Entry = Entry {
    title: "Security Alert",
    message: "This looks like an attempt to change how the assistant behaves. Please stick to genuine post content.",
    icon: "🛡️",
    suggestions: [
        "Share a real professional experience",
        "Discuss an industry trend or opinion",
        "Talk about career growth or a lesson learned",
    ],
};

const FALLBACK: Entry = Entry {
    title: "Invalid Input",
    message: "Please enter a valid value for this field.",
    icon: "⚠️",
    suggestions: [
        "Try entering a professional topic",
        "Check the field for typos",
        "Use plain words rather than symbols",
    ],
};

const fn entry(verdict: Verdict, channel: Channel) -> Entry {
    use Channel::{Audience, EditInstruction, Topic};
    match (verdict, channel) {
        (Verdict::TooShort, Topic) => TOPIC_TOO_SHORT,
        (Verdict::TooShort, Audience) => AUDIENCE_TOO_SHORT,
        (Verdict::TooShort, EditInstruction) => INSTRUCTION_TOO_SHORT,
        (Verdict::TooLong, Topic) => TOPIC_TOO_LONG,
        (Verdict::TooLong, Audience) => AUDIENCE_TOO_LONG,
        (Verdict::TooLong, EditInstruction) => INSTRUCTION_TOO_LONG,
        (Verdict::Gibberish, Topic) => TOPIC_GIBBERISH,
        (Verdict::Gibberish, Audience) => AUDIENCE_GIBBERISH,
        (Verdict::Gibberish, EditInstruction) => INSTRUCTION_GIBBERISH,
        (Verdict::OffTopic, Topic) => TOPIC_OFF_TOPIC,
        (Verdict::OffTopic, Audience) => AUDIENCE_OFF_TOPIC,
        (Verdict::OffTopic, EditInstruction) => INSTRUCTION_OFF_TOPIC,
        (Verdict::Profanity, _) => PROFANITY,
        (Verdict::Irrelevant, _) => IRRELEVANT,
        // Callers do not describe safe input; answer with the generic entry.
        (Verdict::Safe, _) => FALLBACK,
    }
}

/// Descriptor for `verdict` on `channel`.
///
/// Total over every pair. [`Verdict::Safe`] is never a pipeline error and
/// maps to the generic "invalid input" descriptor.
pub fn describe(verdict: Verdict, channel: Channel) -> ErrorDescriptor {
    entry(verdict, channel).to_descriptor()
}

/// Generic descriptor for input that failed for an unspecified reason.
pub fn fallback() -> ErrorDescriptor {
    FALLBACK.to_descriptor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_is_total_and_complete() {
        for verdict in Verdict::ALL {
            for channel in Channel::ALL {
                let d = describe(verdict, channel);
                assert!(!d.title.is_empty(), "{verdict}/{channel}");
                assert!(!d.message.is_empty(), "{verdict}/{channel}");
                assert!(!d.icon.is_empty(), "{verdict}/{channel}");
                assert_eq!(d.suggestions.len(), 3);
                assert!(d.suggestions.iter().all(|s| !s.is_empty()));
            }
        }
    }

    #[test]
    fn policy_findings_ignore_channel() {
        for verdict in [Verdict::Profanity, Verdict::Irrelevant] {
            let topic = describe(verdict, Channel::Topic);
            assert_eq!(topic, describe(verdict, Channel::Audience));
            assert_eq!(topic, describe(verdict, Channel::EditInstruction));
        }
    }

    #[test]
    fn quality_findings_vary_by_channel() {
        for verdict in [Verdict::TooShort, Verdict::Gibberish, Verdict::OffTopic] {
            assert_ne!(
                describe(verdict, Channel::Topic).message,
                describe(verdict, Channel::Audience).message,
                "{verdict}"
            );
        }
    }

    #[test]
    fn audience_off_topic_has_its_own_icon() {
        assert_eq!(describe(Verdict::OffTopic, Channel::Audience).icon, "👥");
        assert_eq!(describe(Verdict::OffTopic, Channel::Topic).icon, "🚧");
    }

    #[test]
    fn safe_maps_to_fallback() {
        assert_eq!(describe(Verdict::Safe, Channel::Topic), fallback());
        assert_eq!(fallback().title, "Invalid Input");
    }

    #[test]
    fn descriptor_serializes_suggestions_as_array() {
        let json = serde_json::to_value(describe(Verdict::Profanity, Channel::Topic)).unwrap();
        assert_eq!(json["suggestions"].as_array().map(Vec::len), Some(3));
    }
}
