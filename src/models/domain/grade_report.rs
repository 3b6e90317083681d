use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::Answer;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GradeReport {
    pub score_percent: f64,
    pub correct_count: usize,
    pub total_questions: usize,
    pub results: Vec<QuestionResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub question: String,
    /// `None` when nothing was submitted for the question.
    pub user_answer: Option<Answer>,
    pub correct_answer: Answer,
    pub is_correct: bool,
    pub rationale: String,
}

impl GradeReport {
    pub fn passed(&self, threshold_percent: f64) -> bool {
        self.score_percent >= threshold_percent
    }

    pub fn unanswered_count(&self) -> usize {
        self.results.iter().filter(|r| r.user_answer.is_none()).count()
    }
}
