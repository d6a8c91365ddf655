//! Core library for postgate.
//!
//! postgate screens short user inputs before they reach an LLM-backed post
//! generator. Every input is classified into exactly one [`Verdict`] for a
//! [`Channel`] (topic, audience or edit instruction), and every blocking
//! verdict has a renderable [`ErrorDescriptor`].
//!
//! # Modules
//!
//! - [`classifier`] - The classification pipeline
//! - [`detectors`] - Gibberish, profanity, injection, off-topic and audience predicates
//! - [`catalog`] - User-facing descriptors per `(verdict, channel)`
//! - [`gate`] - Screening contract in front of a generation backend
//! - [`session`] - Touched/debounced per-field form state
//! - [`engagement`] - Engagement scoring for finished posts
//! - [`vocabulary`] - Configurable detector word lists
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use postgate_core::{Channel, Verdict, classify, describe};
//!
//! assert_eq!(classify(Channel::Audience, "SaaS Founders and CTOs"), Verdict::Safe);
//!
//! let verdict = classify(Channel::Topic, "best pizza recipe for dinner");
//! assert_eq!(verdict, Verdict::OffTopic);
//! println!("{}", describe(verdict, Channel::Topic).title);
//! ```
#![deny(unsafe_code)]

pub mod catalog;
pub mod channel;
pub mod classifier;
pub mod config;
pub mod detectors;
pub mod engagement;
pub mod error;
pub mod gate;
pub mod session;
pub mod text;
pub mod verdict;
pub mod vocabulary;
pub mod word_lists;

pub use catalog::ErrorDescriptor;
pub use channel::{Channel, ChannelThresholds, ValidationThresholds};
pub use classifier::{Assessment, Classifier, classify, describe};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use engagement::{EngagementReport, Rating, score_post};
pub use error::{ConfigError, ConfigResult};
pub use gate::{Backend, GateError, Gatekeeper, Rejection};
pub use verdict::Verdict;
pub use vocabulary::Vocabulary;
