use std::sync::Arc;

use validator::Validate;

use crate::{errors::AppResult, models::domain::AppSettings, repositories::SettingsRepository};

pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    pub async fn load(&self) -> AppResult<AppSettings> {
        self.repository.load().await
    }

    pub async fn save(&self, settings: AppSettings) -> AppResult<AppSettings> {
        settings.validate()?;
        self.repository.save(&settings).await?;
        log::info!(
            "Settings updated (model: {}, local_only_mode: {})",
            settings.model.as_deref().unwrap_or("default"),
            settings.local_only_mode
        );
        Ok(settings)
    }
}
