//! Screening in front of the generation backend.
//!
//! The checks here are the contract every caller of an expensive model call
//! follows: generation needs a `safe` audience and topic, a custom edit
//! needs a `safe` instruction, and autocomplete is only requested for a
//! topic that is long enough and already `safe`.
//!
//! [`Gatekeeper`] wraps any [`Backend`] and enforces that contract, so a
//! rejected input never reaches the backend.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{self, ErrorDescriptor};
use crate::channel::Channel;
use crate::classifier::{self, Classifier};
use crate::config::{Config, DEFAULT_SUGGEST_MIN_LENGTH};
use crate::error::ConfigResult;
use crate::text;
use crate::verdict::Verdict;

/// Model used when a request does not name one.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// A field that failed screening.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, JsonSchema)]
#[error("{channel} rejected as {verdict}: {}", .descriptor.title)]
pub struct Rejection {
    /// Field that failed.
    pub channel: Channel,
    /// Blocking verdict.
    pub verdict: Verdict,
    /// What to show the user.
    pub descriptor: ErrorDescriptor,
}

impl Rejection {
    /// Rejection for a blocking verdict.
    pub fn new(channel: Channel, verdict: Verdict) -> Self {
        Self {
            channel,
            verdict,
            descriptor: catalog::describe(verdict, channel),
        }
    }
}

/// Failure of a gated backend call.
#[derive(Debug, Error)]
pub enum GateError<E> {
    /// Screening refused the input; the backend was not called.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The backend itself failed.
    #[error("backend request failed: {0}")]
    Backend(E),
}

impl Classifier {
    /// Screen one field, mapping a blocking verdict to a [`Rejection`].
    pub fn check_field(&self, channel: Channel, raw: &str) -> Result<(), Rejection> {
        match self.screen(channel, raw) {
            Verdict::Safe => Ok(()),
            verdict => Err(Rejection::new(channel, verdict)),
        }
    }

    /// Screen a generation request's fields: audience first, then topic.
    ///
    /// Returns the first rejection only.
    pub fn check_submission(&self, topic: &str, audience: &str) -> Result<(), Rejection> {
        self.check_field(Channel::Audience, audience)?;
        self.check_field(Channel::Topic, topic)
    }

    /// Screen a free-text edit instruction.
    pub fn check_edit_instruction(&self, raw: &str) -> Result<(), Rejection> {
        self.check_field(Channel::EditInstruction, raw)
    }

    /// Whether a partial topic is worth an autocomplete request.
    pub fn allows_suggestion(&self, topic: &str, min_chars: usize) -> bool {
        text::trimmed_len(topic) > min_chars && self.classify(Channel::Topic, topic).is_safe()
    }
}

/// [`Classifier::check_field`] with the built-in classifier.
pub fn check_field(channel: Channel, raw: &str) -> Result<(), Rejection> {
    classifier::default_classifier().check_field(channel, raw)
}

/// [`Classifier::check_submission`] with the built-in classifier.
pub fn check_submission(topic: &str, audience: &str) -> Result<(), Rejection> {
    classifier::default_classifier().check_submission(topic, audience)
}

/// [`Classifier::check_edit_instruction`] with the built-in classifier.
pub fn check_edit_instruction(raw: &str) -> Result<(), Rejection> {
    classifier::default_classifier().check_edit_instruction(raw)
}

/// [`Classifier::allows_suggestion`] with the built-in classifier.
pub fn allows_suggestion(topic: &str, min_chars: usize) -> bool {
    classifier::default_classifier().allows_suggestion(topic, min_chars)
}

/// Voice of the generated post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Polished and neutral.
    #[default]
    Professional,
    /// Narrative, first person.
    Storyteller,
    /// Challenges a common belief.
    Contrarian,
    /// Short sentences, no hedging.
    Direct,
    /// Relaxed and informal.
    SuperChill,
}

/// Target length of the generated post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum PostLength {
    /// 3–5 lines.
    Short,
    /// 8–12 lines.
    #[default]
    Medium,
    /// 15–20 lines.
    Long,
}

/// How the post opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum HookStyle {
    /// A confident claim.
    BoldStatement,
    /// A question to the reader.
    Question,
    /// A number or statistic.
    Statistic,
    /// A two-line anecdote.
    Story,
    /// A contrarian take.
    Contrarian,
    /// Let the model choose.
    #[default]
    Auto,
}

macro_rules! impl_display_via_serde_name {
    ($($ty:ty { $($variant:ident => $name:literal),+ $(,)? })+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(match self {
                        $(Self::$variant => $name,)+
                    })
                }
            }
        )+
    };
}

impl_display_via_serde_name! {
    Tone {
        Professional => "professional",
        Storyteller => "storyteller",
        Contrarian => "contrarian",
        Direct => "direct",
        SuperChill => "super_chill",
    }
    PostLength {
        Short => "short",
        Medium => "medium",
        Long => "long",
    }
    HookStyle {
        BoldStatement => "bold_statement",
        Question => "question",
        Statistic => "statistic",
        Story => "story",
        Contrarian => "contrarian",
        Auto => "auto",
    }
}

/// Request for a new post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// What the post is about.
    pub topic: String,
    /// Who the post is for.
    pub audience: String,
    /// Voice.
    #[serde(default)]
    pub tone: Tone,
    /// Target length.
    #[serde(default)]
    pub length: PostLength,
    /// Opening style.
    #[serde(default)]
    pub hook_style: HookStyle,
    /// Backend model identifier.
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl GenerationRequest {
    /// Request with default tone, length, hook style and model.
    pub fn new(topic: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            audience: audience.into(),
            tone: Tone::default(),
            length: PostLength::default(),
            hook_style: HookStyle::default(),
            model: default_model(),
        }
    }
}

/// Edit to apply to an existing post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditAction {
    /// Make the post shorter.
    Shorten,
    /// Tighten wording without changing the message.
    Refine,
    /// Rewrite from scratch.
    Retry,
    /// Append relevant hashtags.
    AddHashtags,
    /// Sprinkle in emoji.
    AddEmoji,
    /// End with a call to action.
    AddCta,
    /// Rewrite a selected span according to a free-text instruction.
    CustomSelection {
        /// Text the user highlighted.
        selection: String,
        /// What to do with it.
        instruction: String,
    },
}

impl EditAction {
    /// Free-text instruction that must be screened, if any.
    pub fn instruction(&self) -> Option<&str> {
        match self {
            Self::CustomSelection { instruction, .. } => Some(instruction),
            _ => None,
        }
    }
}

/// Request to edit an existing post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EditRequest {
    /// Topic the post was generated from.
    pub topic: String,
    /// Current post text.
    pub current_text: String,
    /// Edit to perform.
    #[serde(flatten)]
    pub action: EditAction,
}

/// The model-backed service that writes posts.
pub trait Backend {
    /// Backend failure type.
    type Error;

    /// Write a new post.
    fn generate(&mut self, request: &GenerationRequest) -> Result<String, Self::Error>;

    /// Rewrite an existing post.
    fn edit(&mut self, request: &EditRequest) -> Result<String, Self::Error>;

    /// Complete a partial topic.
    fn suggest(&mut self, partial_topic: &str) -> Result<String, Self::Error>;
}

/// A [`Backend`] that is only called with screened input.
#[derive(Debug, Clone)]
pub struct Gatekeeper<B> {
    backend: B,
    classifier: Classifier,
    suggest_min_length: usize,
}

impl<B: Backend> Gatekeeper<B> {
    /// Gate `backend` with the built-in classifier.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            classifier: Classifier::default(),
            suggest_min_length: DEFAULT_SUGGEST_MIN_LENGTH,
        }
    }

    /// Gate `backend` with a classifier and suggestion threshold from config.
    pub fn from_config(backend: B, config: &Config) -> ConfigResult<Self> {
        Ok(Self {
            backend,
            classifier: Classifier::from_config(config)?,
            suggest_min_length: config.suggest_min_length,
        })
    }

    /// Replace the classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Classifier in use.
    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// The wrapped backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Unwrap the backend.
    pub fn into_inner(self) -> B {
        self.backend
    }

    /// Generate a post once audience and topic both screen `safe`.
    #[tracing::instrument(skip_all, fields(model = %request.model))]
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<String, GateError<B::Error>> {
        self.classifier
            .check_submission(&request.topic, &request.audience)
            .inspect_err(|r| tracing::info!(channel = %r.channel, verdict = %r.verdict, "generation refused"))?;
        self.backend.generate(request).map_err(GateError::Backend)
    }

    /// Edit a post, screening the instruction of a custom selection edit.
    #[tracing::instrument(skip_all)]
    pub fn edit(&mut self, request: &EditRequest) -> Result<String, GateError<B::Error>> {
        if let Some(instruction) = request.action.instruction() {
            self.classifier
                .check_edit_instruction(instruction)
                .inspect_err(|r| tracing::info!(verdict = %r.verdict, "edit refused"))?;
        }
        self.backend.edit(request).map_err(GateError::Backend)
    }

    /// Suggest a topic completion, or `Ok(None)` when the partial topic is
    /// too short or not `safe`.
    #[tracing::instrument(skip_all)]
    pub fn suggest(&mut self, partial_topic: &str) -> Result<Option<String>, B::Error> {
        if !self
            .classifier
            .allows_suggestion(partial_topic, self.suggest_min_length)
        {
            tracing::debug!("suggestion skipped");
            return Ok(None);
        }
        self.backend.suggest(partial_topic).map(Some)
    }
}
