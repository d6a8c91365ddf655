//! Engagement scoring for generated posts.
//!
//! A heuristic 0–100 score for how well a finished post is shaped for a
//! professional feed: length band, line breaks, emoji, hashtags, a closing
//! question, concrete numbers and short paragraphs.
//!
//! Scoring starts at 50 and applies these adjustments:
//!
//! | Signal | Adjustment |
//! |--------|------------|
//! | 80–250 words | +15 |
//! | otherwise 50–300 words | +8 |
//! | otherwise under 30 or over 400 words | −10 |
//! | 3–15 line breaks | +10 |
//! | 1–6 emoji | +8 |
//! | more than 8 emoji | −5 |
//! | 2–5 hashtags | +8 |
//! | ends with `?` | +7 |
//! | contains a digit | +5 |
//! | mean paragraph ≤ 30 words | +5 |
//!
//! The result is clamped to 0–100. Blank text scores 0.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Reading speed used for the read-time estimate.
const WORDS_PER_MINUTE: usize = 200;

const BASE_SCORE: i32 = 50;

static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Za-z_]+").expect("valid regex"));

/// Score band shown next to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// 75 and above.
    High,
    /// 50 to 74.
    Good,
    /// Below 50.
    Improve,
}

impl Rating {
    /// Band for a clamped score.
    pub const fn from_score(score: u8) -> Self {
        match score {
            75.. => Self::High,
            50.. => Self::Good,
            _ => Self::Improve,
        }
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Good => "good",
            Self::Improve => "improve",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurements and score for one post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EngagementReport {
    /// Whitespace-delimited words.
    pub words: usize,
    /// Estimated read time in whole minutes (0 for blank text).
    pub read_minutes: usize,
    /// Newline characters.
    pub line_breaks: usize,
    /// Pictographic emoji.
    pub emoji: usize,
    /// `#tag` occurrences.
    pub hashtags: usize,
    /// Text ends with a question mark.
    pub ends_with_question: bool,
    /// Text contains at least one digit.
    pub has_number: bool,
    /// Mean words per blank-line separated paragraph.
    pub mean_paragraph_words: f64,
    /// Clamped engagement score.
    pub score: u8,
    /// Band for `score`.
    pub rating: Rating,
}

/// Measure and score a post.
#[tracing::instrument(skip(post), fields(post_len = post.len()))]
pub fn score_post(post: &str) -> EngagementReport {
    let words = text::count_words(post);
    let paragraphs = text::split_paragraphs(post);
    let mean_paragraph_words = if paragraphs.is_empty() {
        0.0
    } else {
        let total: usize = paragraphs.iter().map(|p| text::count_words(p)).sum();
        total as f64 / paragraphs.len() as f64
    };

    let mut report = EngagementReport {
        words,
        read_minutes: words.div_ceil(WORDS_PER_MINUTE),
        line_breaks: post.matches('\n').count(),
        emoji: post.chars().filter(|&c| is_emoji(c)).count(),
        hashtags: HASHTAG.find_iter(post).count(),
        ends_with_question: post.trim_end().ends_with('?'),
        has_number: post.chars().any(|c| c.is_ascii_digit()),
        mean_paragraph_words,
        score: 0,
        rating: Rating::Improve,
    };

    if !post.trim().is_empty() {
        report.score = score(&report);
        report.rating = Rating::from_score(report.score);
    }
    tracing::debug!(score = report.score, rating = %report.rating, "post scored");
    report
}

fn score(r: &EngagementReport) -> u8 {
    let mut score = BASE_SCORE;

    score += match r.words {
        80..=250 => 15,
        50..=300 => 8,
        w if !(30..=400).contains(&w) => -10,
        _ => 0,
    };
    if (3..=15).contains(&r.line_breaks) {
        score += 10;
    }
    if (1..=6).contains(&r.emoji) {
        score += 8;
    } else if r.emoji > 8 {
        score -= 5;
    }
    if (2..=5).contains(&r.hashtags) {
        score += 8;
    }
    if r.ends_with_question {
        score += 7;
    }
    if r.has_number {
        score += 5;
    }
    if r.mean_paragraph_words <= 30.0 {
        score += 5;
    }

    // clamp keeps the value in 0..=100
    u8::try_from(score.clamp(0, 100)).unwrap_or(0)
}

/// Pictographic emoji blocks: emoticons, symbols and pictographs, transport,
/// regional indicators, miscellaneous symbols and dingbats.
const fn is_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{1F600}'..='\u{1F64F}'
            | '\u{1F300}'..='\u{1F5FF}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{1F1E0}'..='\u{1F1FF}'
            | '\u{2600}'..='\u{26FF}'
            | '\u{2700}'..='\u{27BF}'
    )
}
