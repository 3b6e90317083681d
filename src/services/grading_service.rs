use std::collections::HashMap;

use crate::models::domain::{Answer, GradeReport, Question, QuestionResult, Quiz};

pub struct GradingService;

impl GradingService {
    /// Grade `answers`, keyed by question prompt, against `quiz`.
    ///
    /// Pure and deterministic. A question with no submitted answer is scored
    /// incorrect; an empty quiz scores 0.
    pub fn grade(quiz: &Quiz, answers: &HashMap<String, Answer>) -> GradeReport {
        let results: Vec<QuestionResult> = quiz
            .questions
            .iter()
            .map(|question| Self::grade_question(question, answers.get(&question.prompt)))
            .collect();

        let correct_count = results.iter().filter(|r| r.is_correct).count();
        let total_questions = results.len();

        GradeReport {
            score_percent: score_percent(correct_count, total_questions),
            correct_count,
            total_questions,
            results,
        }
    }

    /// Correctness follows the shape of the canonical answer, not the
    /// declared question type.
    fn grade_question(question: &Question, submitted: Option<&Answer>) -> QuestionResult {
        let is_correct = submitted
            .map(|given| question.answer.accepts(given))
            .unwrap_or(false);

        if let Some(given) = submitted.filter(|g| g.kind() != question.answer.kind()) {
            log::debug!(
                "Answer to '{}' is a {}, expected a {}",
                question.prompt,
                given.kind(),
                question.answer.kind()
            );
        }

        QuestionResult {
            question: question.prompt.clone(),
            user_answer: submitted.cloned(),
            correct_answer: question.answer.clone(),
            is_correct,
            rationale: question.rationale.clone(),
        }
    }
}

/// Percentage rounded to one decimal.
fn score_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(100.0 * correct as f64 / total as f64)
}

/// One decimal, halves to even.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
