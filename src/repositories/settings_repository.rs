use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{errors::AppResult, models::domain::AppSettings, repositories::json_file};

pub const SETTINGS_FILE: &str = "settings.json";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load(&self) -> AppResult<AppSettings>;
    async fn save(&self, settings: &AppSettings) -> AppResult<()>;
}

pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SETTINGS_FILE),
        }
    }
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    async fn load(&self) -> AppResult<AppSettings> {
        json_file::read_or_default(&self.path).await
    }

    async fn save(&self, settings: &AppSettings) -> AppResult<()> {
        json_file::write_atomic(&self.path, settings).await
    }
}
