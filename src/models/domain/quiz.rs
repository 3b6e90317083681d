use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::objective::Domain;
use crate::models::domain::quiz_question::Question;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct Quiz {
    pub domain: Domain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective_id: Option<String>,
    #[validate(nested)]
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Give every question without an id a fresh one.
    pub fn assign_missing_ids(&mut self) {
        for question in self.questions.iter_mut() {
            let missing = question
                .id
                .as_deref()
                .map(|id| id.trim().is_empty())
                .unwrap_or(true);
            if missing {
                question.id = Some(Uuid::new_v4().to_string());
            }
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
