pub mod json_file;
pub mod progress_repository;
pub mod settings_repository;

pub use progress_repository::{FileProgressRepository, ProgressRepository};
pub use settings_repository::{FileSettingsRepository, SettingsRepository};
