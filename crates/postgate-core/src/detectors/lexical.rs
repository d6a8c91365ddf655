//! Lexical heuristics for gibberish detection.
//!
//! Each rule is a pure function over a normalized string. A string is
//! gibberish when any rule fires; [`first_rule`] reports which one.

use aho_corasick::AhoCorasick;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Identical characters in a row that mark key-holding ("aaaa").
const REPEAT_RUN: usize = 4;
/// Diversity is only judged above this many letters.
const DIVERSITY_MIN_LETTERS: usize = 5;
/// Distinct-letter floor for the diversity rule.
const DIVERSITY_FLOOR: f64 = 4.0;
/// Distinct-letter ratio for the diversity rule.
const DIVERSITY_RATIO: f64 = 0.3;
/// Consecutive consonants inside one token.
const CONSONANT_RUN: usize = 5;
/// Characters a token needs before the vowel rule applies.
const VOWELLESS_MIN_CHARS: usize = 4;
/// Tokens needed before mean token length is judged.
const MEAN_TOKEN_MIN_TOKENS: usize = 3;
/// Mean token length below which input looks like letter mashing.
const MEAN_TOKEN_FLOOR: f64 = 2.2;

/// Which lexical rule flagged an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LexicalRule {
    /// A character repeated four or more times in a row.
    RepeatedCharacter,
    /// Too few distinct letters for the amount of text.
    LowDiversity,
    /// Five or more consonants in a row inside one token.
    ConsonantCluster,
    /// A token of four or more characters with no vowel.
    VowellessToken,
    /// A keyboard-row or finger-cluster fragment.
    KeyboardPattern,
    /// Three or more tokens averaging under 2.2 characters.
    ShortTokens,
}

impl LexicalRule {
    /// Returns the rule as a snake_case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RepeatedCharacter => "repeated_character",
            Self::LowDiversity => "low_diversity",
            Self::ConsonantCluster => "consonant_cluster",
            Self::VowellessToken => "vowelless_token",
            Self::KeyboardPattern => "keyboard_pattern",
            Self::ShortTokens => "short_tokens",
        }
    }
}

const fn is_consonant(c: char) -> bool {
    matches!(
        c,
        'b' | 'c'
            | 'd'
            | 'f'
            | 'g'
            | 'h'
            | 'j'
            | 'k'
            | 'l'
            | 'm'
            | 'n'
            | 'p'
            | 'q'
            | 'r'
            | 's'
            | 't'
            | 'v'
            | 'w'
            | 'x'
            | 'y'
            | 'z'
    )
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Any character repeated four or more times consecutively.
pub fn has_repeated_run(normalized: &str) -> bool {
    let mut prev = None;
    let mut run = 0;
    for c in normalized.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run >= REPEAT_RUN {
            return true;
        }
    }
    false
}

/// Distinct letters below `min(4, 0.3 × letters)` once there are more than
/// five letters. Only ASCII letters count; input without any never fires.
pub fn has_low_diversity(normalized: &str) -> bool {
    let mut seen = [false; 26];
    let mut letters = 0usize;
    for c in normalized.chars().filter(char::is_ascii_lowercase) {
        seen[(c as u8 - b'a') as usize] = true;
        letters += 1;
    }
    if letters <= DIVERSITY_MIN_LETTERS {
        return false;
    }
    let distinct = seen.iter().filter(|s| **s).count() as f64;
    distinct < DIVERSITY_FLOOR.min(letters as f64 * DIVERSITY_RATIO)
}

/// Some token holds five or more consonants in a row.
pub fn has_consonant_cluster(normalized: &str) -> bool {
    text::tokens(normalized).any(|token| {
        let mut run = 0;
        token.chars().any(|c| {
            if is_consonant(c) {
                run += 1;
            } else {
                run = 0;
            }
            run >= CONSONANT_RUN
        })
    })
}

/// Some token is four or more characters long and holds none of `aeiouy`.
///
/// Length counts every character, so digit runs like "2026" and scripts
/// without Latin vowels fire too.
pub fn has_vowelless_token(normalized: &str) -> bool {
    text::tokens(normalized)
        .any(|token| token.chars().count() >= VOWELLESS_MIN_CHARS && !token.chars().any(is_vowel))
}

/// The whitespace-stripped input contains a keyboard fragment.
pub fn contains_keyboard_fragment(normalized: &str, fragments: &AhoCorasick) -> bool {
    fragments.is_match(&text::compact(normalized))
}

/// Three or more tokens whose mean length is under 2.2 characters.
pub fn has_short_mean_token(normalized: &str) -> bool {
    let (count, total) = text::tokens(normalized)
        .fold((0usize, 0usize), |(n, len), t| (n + 1, len + t.chars().count()));
    count >= MEAN_TOKEN_MIN_TOKENS && (total as f64 / count as f64) < MEAN_TOKEN_FLOOR
}

/// First lexical rule that flags `normalized`, in evaluation order.
pub fn first_rule(normalized: &str, fragments: &AhoCorasick) -> Option<LexicalRule> {
    if has_repeated_run(normalized) {
        Some(LexicalRule::RepeatedCharacter)
    } else if has_low_diversity(normalized) {
        Some(LexicalRule::LowDiversity)
    } else if has_consonant_cluster(normalized) {
        Some(LexicalRule::ConsonantCluster)
    } else if has_vowelless_token(normalized) {
        Some(LexicalRule::VowellessToken)
    } else if contains_keyboard_fragment(normalized, fragments) {
        Some(LexicalRule::KeyboardPattern)
    } else if has_short_mean_token(normalized) {
        Some(LexicalRule::ShortTokens)
    } else {
        None
    }
}
