use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{objective::objective_by_id, Domain, GradeReport, Quiz, UserProgress},
    repositories::ProgressRepository,
    services::analytics_service::{AnalyticsService, REVIEW_THRESHOLD},
    session::SessionContext,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub domain_scores: BTreeMap<Domain, f64>,
    pub overall_progress: f64,
    pub recommendation: String,
    pub completed_lessons: usize,
    pub completed_labs: usize,
    pub quizzes_taken: usize,
    pub weak_objectives: Vec<String>,
}

pub struct ProgressService {
    repository: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    pub fn new(repository: Arc<dyn ProgressRepository>) -> Self {
        Self { repository }
    }

    pub async fn load(&self) -> AppResult<UserProgress> {
        self.repository.load().await
    }

    /// Append the quiz score to its domain and update the weak-objective set.
    pub async fn record_quiz_result(
        &self,
        session: &SessionContext,
        quiz: &Quiz,
        report: &GradeReport,
    ) -> AppResult<UserProgress> {
        let mut progress = self.repository.load().await?;
        progress.record_score(quiz.domain, report.score_percent);

        if let Some(objective_id) = quiz.objective_id.as_deref().filter(|id| !id.is_empty()) {
            if report.score_percent < REVIEW_THRESHOLD {
                progress.weak_objectives.insert(objective_id.to_string());
            } else {
                progress.weak_objectives.remove(objective_id);
            }
        }

        self.persist(session, &progress).await?;
        Ok(progress)
    }

    pub async fn mark_lesson_completed(
        &self,
        session: &SessionContext,
        objective_id: &str,
    ) -> AppResult<UserProgress> {
        let objective_id = known_objective(objective_id)?;

        let mut progress = self.repository.load().await?;
        if progress.completed_lessons.insert(objective_id.to_string()) {
            progress.touch();
        }

        self.persist(session, &progress).await?;
        Ok(progress)
    }

    pub async fn mark_lab_completed(
        &self,
        session: &SessionContext,
        objective_id: &str,
    ) -> AppResult<UserProgress> {
        let objective_id = known_objective(objective_id)?;

        let mut progress = self.repository.load().await?;
        if progress.completed_labs.insert(objective_id.to_string()) {
            progress.touch();
        }

        self.persist(session, &progress).await?;
        Ok(progress)
    }

    /// Replace the stored record with an empty one, local-only or not.
    pub async fn reset(&self) -> AppResult<UserProgress> {
        let progress = UserProgress::default();
        self.repository.save(&progress).await?;
        log::info!("Progress reset");
        Ok(progress)
    }

    pub async fn dashboard(&self) -> AppResult<DashboardSummary> {
        let progress = self.repository.load().await?;

        Ok(DashboardSummary {
            domain_scores: AnalyticsService::domain_scores(&progress),
            overall_progress: AnalyticsService::overall_progress(&progress),
            recommendation: AnalyticsService::recommend_next_step(&progress),
            completed_lessons: progress.completed_lessons.len(),
            completed_labs: progress.completed_labs.len(),
            quizzes_taken: progress.quiz_scores.values().map(Vec::len).sum(),
            weak_objectives: progress.weak_objectives.iter().cloned().collect(),
        })
    }

    async fn persist(&self, session: &SessionContext, progress: &UserProgress) -> AppResult<()> {
        if session.local_only {
            log::info!("Local-only mode, progress not saved");
            return Ok(());
        }
        self.repository.save(progress).await
    }
}

fn known_objective(objective_id: &str) -> AppResult<&'static str> {
    objective_by_id(objective_id)
        .map(|objective| objective.id)
        .ok_or_else(|| AppError::NotFound(format!("Objective '{}' not found", objective_id)))
}
