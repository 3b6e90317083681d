use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::{
        domain::{
            objective::objective_by_id, Artifact, Assignment, Lab, LearningObjective, Lesson, Quiz,
        },
        dto::request::{
            GenerateAssignmentRequest, GenerateLabRequest, GenerateLessonRequest,
            GenerateQuizRequest, SubmissionFeedbackRequest,
        },
    },
    services::{
        generation_service::{collect_text, GenerationService, GenerationStream},
        llm_client::{ChatMessage, FragmentStream},
    },
    session::SessionContext,
};

/// Builds prompts for each artifact type and hands them to the generation
/// pipeline.
pub struct ContentService {
    generation: Arc<GenerationService>,
}

impl ContentService {
    pub fn new(generation: Arc<GenerationService>) -> Self {
        Self { generation }
    }

    pub async fn lesson_outline(
        &self,
        session: &SessionContext,
        request: &GenerateLessonRequest,
    ) -> AppResult<GenerationStream<Lesson>> {
        request.validate()?;
        let objective = find_objective(&request.objective_id)?;

        let user_prompt = prompts::lesson_outline_prompt(
            objective,
            request.level,
            request.duration_minutes,
            &request.role,
        );
        self.structured::<Lesson>(session, prompts::INSTRUCTOR_SYSTEM_PROMPT, &user_prompt)
            .await
    }

    pub async fn lab(
        &self,
        session: &SessionContext,
        request: &GenerateLabRequest,
    ) -> AppResult<GenerationStream<Lab>> {
        request.validate()?;
        let objective = find_objective(&request.objective_id)?;

        let user_prompt = prompts::lab_prompt(objective, &request.tools);
        self.structured::<Lab>(session, prompts::LAB_SYSTEM_PROMPT, &user_prompt)
            .await
    }

    pub async fn quiz(
        &self,
        session: &SessionContext,
        request: &GenerateQuizRequest,
    ) -> AppResult<GenerationStream<Quiz>> {
        request.validate()?;

        let objective = match request.objective_id.as_deref().filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                let objective = find_objective(id)?;
                if objective.domain != request.domain {
                    return Err(AppError::ValidationError(format!(
                        "Objective '{}' does not belong to '{}'",
                        id, request.domain
                    )));
                }
                Some(objective)
            }
            None => None,
        };

        let user_prompt = prompts::quiz_prompt(request.domain, objective, request.question_count);
        self.structured::<Quiz>(session, prompts::QUIZ_SYSTEM_PROMPT, &user_prompt)
            .await
    }

    pub async fn assignment(
        &self,
        session: &SessionContext,
        request: &GenerateAssignmentRequest,
    ) -> AppResult<GenerationStream<Assignment>> {
        request.validate()?;

        let user_prompt = prompts::assignment_prompt(request.domain, &request.role);
        self.structured::<Assignment>(session, prompts::ASSIGNMENT_SYSTEM_PROMPT, &user_prompt)
            .await
    }

    /// Write the body of every section, in order. Each fragment is handed to
    /// `on_chunk` with the index of the section it belongs to. The first
    /// failing section aborts the expansion.
    pub async fn expand_lesson(
        &self,
        session: &SessionContext,
        mut lesson: Lesson,
        role: &str,
        mut on_chunk: impl FnMut(usize, &str),
    ) -> AppResult<Lesson> {
        lesson.validate()?;

        let domain = lesson.domain;
        let overview = lesson.overview.clone();

        for (index, section) in lesson.sections.iter_mut().enumerate() {
            let prompt = prompts::section_content_prompt(&section.title, domain, role, &overview);
            let fragments = self
                .generation
                .generate_freeform(
                    session,
                    prompts::SECTION_WRITER_SYSTEM_PROMPT,
                    vec![ChatMessage::user(prompt)],
                )
                .await?;

            section.content = collect_text(fragments, |chunk| on_chunk(index, chunk)).await?;
            log::debug!(
                "Expanded section {} of '{}' ({} bytes)",
                index + 1,
                lesson.title,
                section.content.len()
            );
        }

        Ok(lesson)
    }

    pub async fn submission_feedback(
        &self,
        session: &SessionContext,
        request: &SubmissionFeedbackRequest,
    ) -> AppResult<FragmentStream> {
        if request.submission.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Submission must not be empty".to_string(),
            ));
        }
        request.validate()?;

        let user_prompt =
            prompts::submission_feedback_prompt(&request.submission, request.rubric.as_deref());
        self.generation
            .generate_freeform(
                session,
                prompts::GRADER_SYSTEM_PROMPT,
                vec![ChatMessage::user(user_prompt)],
            )
            .await
    }

    async fn structured<T: Artifact>(
        &self,
        session: &SessionContext,
        role_line: &str,
        user_prompt: &str,
    ) -> AppResult<GenerationStream<T>> {
        let system = prompts::structured_system_prompt(role_line, &T::schema_descriptor());
        self.generation.generate::<T>(session, &system, user_prompt).await
    }
}

fn find_objective(id: &str) -> AppResult<&'static LearningObjective> {
    objective_by_id(id).ok_or_else(|| AppError::NotFound(format!("Objective '{}' not found", id)))
}
