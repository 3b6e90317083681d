use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::models::domain::{Assignment, Lab, Lesson, Quiz};

/// A generated content object: something the generation pipeline can coerce
/// model output into.
pub trait Artifact: DeserializeOwned + Serialize + Validate + JsonSchema + Send + 'static {
    const KIND: &'static str;

    /// JSON Schema of the expected object, handed to the model alongside the
    /// prompt.
    fn schema_descriptor() -> String {
        let schema = schemars::schema_for!(Self);
        serde_json::to_string_pretty(&schema).unwrap_or_default()
    }

    /// Runs once after a successful coercion.
    fn normalize(&mut self) {}
}

impl Artifact for Lesson {
    const KIND: &'static str = "lesson";
}

impl Artifact for Lab {
    const KIND: &'static str = "lab";
}

impl Artifact for Quiz {
    const KIND: &'static str = "quiz";

    fn normalize(&mut self) {
        self.assign_missing_ids();
    }
}

impl Artifact for Assignment {
    const KIND: &'static str = "assignment";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_schema_describes_question_fields() {
        let schema = Quiz::schema_descriptor();

        assert!(schema.contains("questions"));
        assert!(schema.contains("rationale"));
        assert!(schema.contains("Multi-select"));
    }

    #[test]
    fn lesson_schema_lists_domains() {
        let schema = Lesson::schema_descriptor();

        assert!(schema.contains("objective_id"));
        assert!(schema.contains("Ethics & Security"));
    }
}
