//! Per-field validation state for an interactive form.
//!
//! Classification itself is stateless; the only state is what the form
//! owns: whether a field has been touched, its latest verdict, and a
//! debounce timer for live re-validation. Time is passed in explicitly so
//! the state machine is deterministic under test.
//!
//! A field's verdict is computed before it is touched, but it is only
//! rendered as an inline error once the field is touched by a blur or a
//! submit attempt. Touching is one-way.

use std::time::{Duration, Instant};

use crate::catalog::{self, ErrorDescriptor};
use crate::channel::Channel;
use crate::classifier::Classifier;
use crate::config::{Config, DEFAULT_DEBOUNCE_MS};
use crate::error::ConfigResult;
use crate::gate::Rejection;
use crate::verdict::Verdict;

/// Whether errors for a field may be shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TouchState {
    /// Not yet blurred or submitted.
    #[default]
    Untouched,
    /// Blurred or submitted at least once.
    Touched,
}

/// Trailing-edge debounce driven by a caller-supplied clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    pending_since: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl Debouncer {
    /// Debouncer that fires `delay` after the last poke.
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    /// Quiet period.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Record activity at `now`, restarting the quiet period.
    pub const fn poke(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    /// Drop any pending firing.
    pub const fn cancel(&mut self) {
        self.pending_since = None;
    }

    /// Whether activity is waiting to fire.
    pub const fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Whether the quiet period has elapsed at `now`.
    pub fn due(&self, now: Instant) -> bool {
        self.pending_since
            .is_some_and(|since| now.saturating_duration_since(since) >= self.delay)
    }

    /// Consume a due firing. Returns `true` at most once per burst.
    pub fn fire(&mut self, now: Instant) -> bool {
        let due = self.due(now);
        if due {
            self.pending_since = None;
        }
        due
    }
}

/// One form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    channel: Channel,
    value: String,
    touch: TouchState,
    verdict: Option<Verdict>,
    debouncer: Debouncer,
}

impl FieldState {
    /// Empty, untouched field.
    pub fn new(channel: Channel, delay: Duration) -> Self {
        Self {
            channel,
            value: String::new(),
            touch: TouchState::Untouched,
            verdict: None,
            debouncer: Debouncer::new(delay),
        }
    }

    /// Channel this field is screened on.
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Current raw value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Touch state.
    pub const fn touch(&self) -> TouchState {
        self.touch
    }

    /// Latest verdict, if validated.
    pub const fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Mark touched. Never reverts.
    pub const fn mark_touched(&mut self) {
        self.touch = TouchState::Touched;
    }

    /// Descriptor to render under the field: only once touched, and only
    /// for a blocking verdict.
    pub fn inline_error(&self) -> Option<ErrorDescriptor> {
        match (self.touch, self.verdict) {
            (TouchState::Touched, Some(v)) if v.is_blocking() => {
                Some(catalog::describe(v, self.channel))
            }
            _ => None,
        }
    }

    fn validate(&mut self, classifier: &Classifier) -> Verdict {
        let verdict = classifier.screen(self.channel, &self.value);
        self.verdict = Some(verdict);
        verdict
    }
}

/// Form fields tracked by [`FormSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Post topic.
    Topic,
    /// Target audience.
    Audience,
}

impl Field {
    /// Channel the field is screened on.
    pub const fn channel(self) -> Channel {
        match self {
            Self::Topic => Channel::Topic,
            Self::Audience => Channel::Audience,
        }
    }
}

/// Validation state for the topic and audience fields of one form.
#[derive(Debug, Clone)]
pub struct FormSession {
    classifier: Classifier,
    topic: FieldState,
    audience: FieldState,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(Classifier::default(), Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl FormSession {
    /// Session with a classifier and debounce delay.
    pub fn new(classifier: Classifier, debounce: Duration) -> Self {
        Self {
            classifier,
            topic: FieldState::new(Channel::Topic, debounce),
            audience: FieldState::new(Channel::Audience, debounce),
        }
    }

    /// Session configured from loaded config.
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        Ok(Self::new(Classifier::from_config(config)?, config.debounce()))
    }

    /// Classifier the session validates with.
    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// State of one field.
    pub const fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Topic => &self.topic,
            Field::Audience => &self.audience,
        }
    }

    const fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Topic => &mut self.topic,
            Field::Audience => &mut self.audience,
        }
    }

    /// Record a keystroke. Validation is deferred until the field is quiet.
    pub fn input(&mut self, field: Field, value: impl Into<String>, now: Instant) {
        let state = self.field_mut(field);
        state.value = value.into();
        state.debouncer.poke(now);
    }

    /// Field lost focus: touch it and validate now.
    pub fn blur(&mut self, field: Field) -> Verdict {
        let Self {
            classifier,
            topic,
            audience,
        } = self;
        let state = match field {
            Field::Topic => topic,
            Field::Audience => audience,
        };
        state.mark_touched();
        state.debouncer.cancel();
        state.validate(classifier)
    }

    /// Run validations whose debounce has elapsed. Returns the fields that
    /// were re-validated.
    pub fn tick(&mut self, now: Instant) -> Vec<Field> {
        let mut fired = Vec::new();
        for (field, state) in [
            (Field::Audience, &mut self.audience),
            (Field::Topic, &mut self.topic),
        ] {
            if state.debouncer.fire(now) {
                state.validate(&self.classifier);
                fired.push(field);
            }
        }
        fired
    }

    /// Submit: touch and validate both fields, audience first, and return
    /// the first rejection. Both fields keep their inline verdicts.
    #[tracing::instrument(skip(self))]
    pub fn submit(&mut self) -> Result<(), Rejection> {
        let mut first = None;
        for state in [&mut self.audience, &mut self.topic] {
            state.mark_touched();
            state.debouncer.cancel();
            let verdict = state.validate(&self.classifier);
            if first.is_none() && verdict.is_blocking() {
                first = Some(Rejection::new(state.channel, verdict));
            }
        }
        match first {
            Some(rejection) => {
                tracing::debug!(channel = %rejection.channel, verdict = %rejection.verdict, "submission blocked");
                Err(rejection)
            }
            None => Ok(()),
        }
    }
}
