use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::objective::Domain;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "Beginner",
            DifficultyLevel::Intermediate => "Intermediate",
            DifficultyLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct Section {
    #[validate(length(min = 1))]
    pub title: String,
    /// Markdown body; empty in an outline until the section is expanded.
    #[serde(default)]
    pub content: String,
    pub duration_minutes: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct CheckQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct Lesson {
    #[validate(length(min = 1))]
    pub title: String,
    pub domain: Domain,
    #[validate(length(min = 1))]
    pub objective_id: String,
    pub level: DifficultyLevel,
    pub duration_minutes: u32,
    pub overview: String,
    #[validate(nested)]
    pub sections: Vec<Section>,
    pub key_terms: Vec<String>,
    pub misconceptions: Vec<String>,
    #[validate(nested)]
    pub checks: Vec<CheckQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct LabStep {
    pub step_number: u32,
    #[validate(length(min = 1))]
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_result: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct LabArtifact {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct Lab {
    #[validate(length(min = 1))]
    pub title: String,
    pub domain: Domain,
    #[validate(length(min = 1))]
    pub objective_id: String,
    pub goal: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub tools: Vec<String>,
    #[validate(length(min = 1), nested)]
    pub steps: Vec<LabStep>,
    #[validate(nested)]
    pub artifacts: Vec<LabArtifact>,
    /// Criterion to points.
    pub rubric: BTreeMap<String, u32>,
    #[serde(default)]
    pub hints: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct Assignment {
    #[validate(length(min = 1))]
    pub title: String,
    pub domain: Domain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective_id: Option<String>,
    #[validate(length(min = 1))]
    pub scenario: String,
    #[validate(length(min = 1))]
    pub task: String,
    pub deliverables: Vec<String>,
    pub submission_requirements: String,
    pub rubric: BTreeMap<String, u32>,
    #[serde(default)]
    pub self_check: Vec<String>,
}
