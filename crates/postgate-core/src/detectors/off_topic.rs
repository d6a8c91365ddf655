//! Off-topic detection for post content.
//!
//! A topic is off-topic when it is shaped like a general-knowledge question
//! with no career or business vocabulary, names a non-professional subject,
//! or asks for pure programming help.

use aho_corasick::AhoCorasick;
use regex::{Regex, RegexSet};

use crate::error::ConfigResult;
use crate::vocabulary::Vocabulary;

/// Compiled off-topic rules.
#[derive(Debug, Clone)]
pub struct OffTopicDetector {
    questions: RegexSet,
    exempt: Option<Regex>,
    keywords: AhoCorasick,
    code: RegexSet,
}

impl OffTopicDetector {
    /// Compile the question, exemption, keyword and code lists.
    pub fn compile(vocabulary: &Vocabulary) -> ConfigResult<Self> {
        Ok(Self {
            questions: super::compile_set("question_patterns", &vocabulary.question_patterns)?,
            exempt: super::alternation(
                "professional_terms",
                r"\b",
                &vocabulary.professional_terms,
                r"\b",
            )?,
            keywords: super::phrase_matcher("off_topic_keywords", &vocabulary.off_topic_keywords)?,
            code: super::compile_set("code_patterns", &vocabulary.code_patterns)?,
        })
    }

    /// Question-shaped input without a professional exemption term.
    pub fn is_unprofessional_question(&self, normalized: &str) -> bool {
        self.questions.is_match(normalized)
            && !self.exempt.as_ref().is_some_and(|re| re.is_match(normalized))
    }

    /// Input names a non-professional subject.
    pub fn has_off_topic_keyword(&self, normalized: &str) -> bool {
        self.keywords.is_match(normalized)
    }

    /// Input is a pure coding request.
    pub fn is_code_request(&self, normalized: &str) -> bool {
        self.code.is_match(normalized)
    }

    /// Any off-topic rule fires.
    pub fn is_match(&self, normalized: &str) -> bool {
        self.is_unprofessional_question(normalized)
            || self.has_off_topic_keyword(normalized)
            || self.is_code_request(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> OffTopicDetector {
        OffTopicDetector::compile(&Vocabulary::default()).unwrap()
    }

    #[test]
    fn trivia_question_is_off_topic() {
        let d = detector();
        assert!(d.is_unprofessional_question("what is the capital of france"));
        assert!(d.is_match("who was the first roman emperor"));
    }

    #[test]
    fn professional_question_is_exempt() {
        let d = detector();
        assert!(!d.is_unprofessional_question(
            "what is the future of remote work for developers"
        ));
        assert!(!d.is_match("how do i build a personal brand"));
    }

    #[test]
    fn exemption_is_whole_word() {
        // "aid" must not count as "ai"
        assert!(detector().is_unprofessional_question("what is first aid"));
    }

    #[test]
    fn questions_must_open_the_input() {
        assert!(!detector().is_unprofessional_question("so what is the plan"));
    }

    #[test]
    fn non_professional_subjects() {
        let d = detector();
        assert!(d.has_off_topic_keyword("best pizza recipe for dinner"));
        assert!(d.has_off_topic_keyword("my favourite anime this season"));
        assert!(d.has_off_topic_keyword("tell me a joke about cats"));
        assert!(d.has_off_topic_keyword("joke tell for the office party"));
    }

    #[test]
    fn code_requests() {
        let d = detector();
        assert!(d.is_code_request("help me debug my python script error"));
        assert!(d.is_code_request("write a function that sorts lists"));
        assert!(!d.is_code_request("how i used python at work to save time"));
    }

    #[test]
    fn career_story_passes() {
        assert!(!detector().is_match("how i grew from junior to senior developer in 2 years"));
    }
}
