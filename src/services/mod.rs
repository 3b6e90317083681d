pub mod analytics_service;
pub mod content_service;
pub mod generation_service;
pub mod grading_service;
pub mod llm_client;
pub mod payload;
pub mod progress_service;
pub mod settings_service;

pub use analytics_service::AnalyticsService;
pub use content_service::ContentService;
pub use generation_service::{GenerationEvent, GenerationService, GenerationStream};
pub use grading_service::GradingService;
pub use llm_client::{ChatTransport, OpenAiTransport};
pub use progress_service::{DashboardSummary, ProgressService};
pub use settings_service::SettingsService;
