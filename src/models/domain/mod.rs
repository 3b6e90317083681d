pub mod artifact;
pub mod content;
pub mod grade_report;
pub mod objective;
pub mod quiz;
pub mod quiz_question;
pub mod settings;
pub mod user_progress;
pub use artifact::Artifact;
pub use content::{Assignment, DifficultyLevel, Lab, Lesson};
pub use grade_report::{GradeReport, QuestionResult};
pub use objective::{Domain, LearningObjective};
pub use quiz::Quiz;
pub use quiz_question::{Answer, Question, QuestionType};
pub use settings::AppSettings;
pub use user_progress::UserProgress;
