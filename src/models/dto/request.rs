use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use validator::Validate;

use crate::constants::prompts::DEFAULT_QUIZ_QUESTIONS;
use crate::models::domain::{Answer, DifficultyLevel, Domain, Lesson, Quiz};

fn default_level() -> DifficultyLevel {
    DifficultyLevel::Beginner
}

fn default_duration() -> u32 {
    30
}

fn default_role() -> String {
    "IT Professional".to_string()
}

fn default_question_count() -> u32 {
    DEFAULT_QUIZ_QUESTIONS
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateLessonRequest {
    #[validate(length(min = 1, max = 10))]
    pub objective_id: String,

    #[serde(default = "default_level")]
    pub level: DifficultyLevel,

    #[serde(default = "default_duration")]
    #[validate(range(min = 5, max = 240))]
    pub duration_minutes: u32,

    #[serde(default = "default_role")]
    #[validate(length(min = 1, max = 100))]
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateLabRequest {
    #[validate(length(min = 1, max = 10))]
    pub objective_id: String,

    #[serde(default)]
    #[validate(length(max = 20))]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    pub domain: Domain,

    #[serde(default)]
    pub objective_id: Option<String>,

    #[serde(default = "default_question_count")]
    #[validate(range(min = 3, max = 20))]
    pub question_count: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateAssignmentRequest {
    pub domain: Domain,

    #[serde(default = "default_role")]
    #[validate(length(min = 1, max = 100))]
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExpandLessonRequest {
    #[validate(nested)]
    pub lesson: Lesson,

    #[serde(default = "default_role")]
    #[validate(length(min = 1, max = 100))]
    pub role: String,
}

/// An answer as the client sends it. Widgets left unpicked arrive as
/// `null`, either for the whole question or for one term of a matching.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SubmittedAnswer {
    Scalar(String),
    Sequence(Vec<String>),
    Mapping(BTreeMap<String, Option<String>>),
}

impl From<SubmittedAnswer> for Answer {
    /// Unpicked matching terms are dropped, so the pairing can no longer
    /// equal a canonical mapping that covers every term.
    fn from(submitted: SubmittedAnswer) -> Self {
        match submitted {
            SubmittedAnswer::Scalar(value) => Answer::Scalar(value),
            SubmittedAnswer::Sequence(values) => Answer::Sequence(values),
            SubmittedAnswer::Mapping(pairs) => Answer::Mapping(
                pairs
                    .into_iter()
                    .filter_map(|(term, picked)| picked.map(|p| (term, p)))
                    .collect(),
            ),
        }
    }
}

/// A quiz as previously generated plus the learner's answers keyed by
/// question prompt.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[validate(nested)]
    pub quiz: Quiz,

    #[serde(default)]
    pub answers: HashMap<String, Option<SubmittedAnswer>>,
}

impl SubmitQuizRequest {
    /// Split into the quiz and the answers that were actually given.
    pub fn into_parts(self) -> (Quiz, HashMap<String, Answer>) {
        let answers = self
            .answers
            .into_iter()
            .filter_map(|(prompt, answer)| answer.map(|a| (prompt, Answer::from(a))))
            .collect();
        (self.quiz, answers)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmissionFeedbackRequest {
    #[validate(length(min = 1, max = 20000))]
    pub submission: String,

    #[serde(default)]
    #[validate(length(max = 5000))]
    pub rubric: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectiveQuery {
    pub domain: Option<String>,
}
