use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::content::DifficultyLevel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum QuestionType {
    #[serde(rename = "Single Choice")]
    SingleChoice,
    #[serde(rename = "Multi-select")]
    MultiSelect,
    #[serde(rename = "True/False")]
    TrueFalse,
    Scenario,
    Matching,
    Dropdown,
}

/// Canonical or submitted answer. The shape depends on the question type:
/// a single option, an ordered list of options, or term-to-match pairs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Answer {
    Scalar(String),
    Sequence(Vec<String>),
    Mapping(BTreeMap<String, String>),
}

impl Answer {
    /// Whether `submitted` is exactly this answer. Sequences are compared in
    /// order and mappings key-for-key; a submission of a different shape
    /// never matches.
    pub fn accepts(&self, submitted: &Answer) -> bool {
        match self {
            Answer::Sequence(expected) => {
                matches!(submitted, Answer::Sequence(given) if given == expected)
            }
            Answer::Mapping(expected) => {
                matches!(submitted, Answer::Mapping(given) if given == expected)
            }
            Answer::Scalar(expected) => {
                matches!(submitted, Answer::Scalar(given) if given == expected)
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Answer::Scalar(_) => "scalar",
            Answer::Sequence(_) => "sequence",
            Answer::Mapping(_) => "mapping",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
#[validate(schema(function = "validate_question_options"))]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Question stem; also the key user answers are submitted under.
    #[validate(length(min = 1))]
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: Answer,
    pub rationale: String,
    pub difficulty: DifficultyLevel,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

// Matching questions keep their left-hand terms in the answer keys, so only
// they may come without options.
fn validate_question_options(question: &Question) -> Result<(), ValidationError> {
    if question.question_type != QuestionType::Matching && question.options.is_empty() {
        let mut err = ValidationError::new("options_required");
        err.message = Some(format!("question '{}' has no options", question.prompt).into());
        return Err(err);
    }
    Ok(())
}
