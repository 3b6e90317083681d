#[cfg(test)]
pub mod fixtures {
    use std::collections::{BTreeMap, BTreeSet};

    use futures::stream;
    use serde_json::Value;

    use crate::errors::AppError;
    use crate::models::domain::{
        content::{CheckQuestion, Section},
        Answer, DifficultyLevel, Domain, Lesson, Question, QuestionType, Quiz, UserProgress,
    };
    use crate::services::llm_client::FragmentStream;

    fn question(
        question_type: QuestionType,
        prompt: &str,
        options: &[&str],
        answer: Answer,
    ) -> Question {
        Question {
            id: None,
            question_type,
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
            rationale: format!("Rationale for: {}", prompt),
            difficulty: DifficultyLevel::Beginner,
            tags: BTreeSet::new(),
        }
    }

    /// Three questions, one per answer shape, for objective 1.1.
    pub fn sample_quiz() -> Quiz {
        let mut pairs = BTreeMap::new();
        pairs.insert("Supervised".to_string(), "Learning from labels".to_string());
        pairs.insert("Unsupervised".to_string(), "Finding structure".to_string());

        Quiz {
            domain: Domain::AiFundamentals,
            objective_id: Some("1.1".to_string()),
            questions: vec![
                question(
                    QuestionType::SingleChoice,
                    "What is 1+1?",
                    &["1", "2"],
                    Answer::Scalar("2".to_string()),
                ),
                question(
                    QuestionType::MultiSelect,
                    "Select the supervised tasks",
                    &["Classification", "Clustering", "Regression"],
                    Answer::Sequence(vec!["Classification".to_string(), "Regression".to_string()]),
                ),
                question(
                    QuestionType::Matching,
                    "Match the term to its definition.",
                    &["Learning from labels", "Finding structure"],
                    Answer::Mapping(pairs),
                ),
            ],
        }
    }

    pub fn sample_quiz_json() -> Value {
        serde_json::to_value(sample_quiz()).expect("sample quiz serializes")
    }

    /// An outline: two sections without content.
    pub fn sample_lesson() -> Lesson {
        Lesson {
            title: "Intro to AI".to_string(),
            domain: Domain::AiFundamentals,
            objective_id: "1.1".to_string(),
            level: DifficultyLevel::Beginner,
            duration_minutes: 15,
            overview: "What AI is and where it came from".to_string(),
            sections: vec![
                Section {
                    title: "Terminology".to_string(),
                    content: String::new(),
                    duration_minutes: 5,
                },
                Section {
                    title: "History of AI".to_string(),
                    content: String::new(),
                    duration_minutes: 10,
                },
            ],
            key_terms: vec!["Model".to_string(), "Inference".to_string()],
            misconceptions: vec!["AI understands like humans do".to_string()],
            checks: vec![CheckQuestion {
                question: "What is inference?".to_string(),
                answer: "Using a trained model on new data".to_string(),
            }],
        }
    }

    pub fn sample_lesson_json() -> Value {
        serde_json::to_value(sample_lesson()).expect("sample lesson serializes")
    }

    /// Two lessons, one lab, AI Fundamentals averaging 60 and Ethics at 90.
    pub fn sample_progress() -> UserProgress {
        let mut progress = UserProgress::default();
        progress.completed_lessons.insert("1.1".to_string());
        progress.completed_lessons.insert("1.2".to_string());
        progress.completed_labs.insert("2.1".to_string());
        progress.record_score(Domain::AiFundamentals, 40.0);
        progress.record_score(Domain::AiFundamentals, 80.0);
        progress.record_score(Domain::EthicsSecurity, 90.0);
        progress.weak_objectives.insert("1.2".to_string());
        progress
    }

    /// A transport reply that yields `chunks` in order and then ends.
    pub fn scripted_fragments(chunks: Vec<String>) -> FragmentStream {
        Box::pin(stream::iter(chunks.into_iter().map(Ok::<String, AppError>)))
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::{path::Path, sync::Arc};

    use actix_web::http::StatusCode;

    use crate::{
        app_state::AppState,
        config::Config,
        repositories::{FileProgressRepository, FileSettingsRepository},
        services::llm_client::MockChatTransport,
    };

    /// Application state over JSON files in `data_dir` and a mocked transport.
    pub fn test_state(transport: MockChatTransport, data_dir: &Path) -> AppState {
        test_state_with_config(transport, Config::test_config(), data_dir)
    }

    pub fn test_state_with_config(
        transport: MockChatTransport,
        config: Config,
        data_dir: &Path,
    ) -> AppState {
        let config = Config {
            data_dir: data_dir.to_path_buf(),
            ..config
        };
        AppState::with_collaborators(
            config,
            Arc::new(transport),
            Arc::new(FileProgressRepository::new(data_dir)),
            Arc::new(FileSettingsRepository::new(data_dir)),
        )
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_are_valid() {
        assert!(sample_quiz().validate().is_ok());
        assert!(sample_lesson().validate().is_ok());
    }

    #[test]
    fn test_sample_quiz_covers_every_answer_shape() {
        let kinds: Vec<&str> = sample_quiz().questions.iter().map(|q| q.answer.kind()).collect();
        assert_eq!(kinds, vec!["scalar", "sequence", "mapping"]);
    }
}
