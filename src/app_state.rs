use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{
        FileProgressRepository, FileSettingsRepository, ProgressRepository, SettingsRepository,
    },
    services::{
        ChatTransport, ContentService, GenerationService, OpenAiTransport, ProgressService,
        SettingsService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<ContentService>,
    pub progress_service: Arc<ProgressService>,
    pub settings_service: Arc<SettingsService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        tokio::fs::create_dir_all(&config.data_dir).await?;

        let progress_repository = Arc::new(FileProgressRepository::new(&config.data_dir));
        let settings_repository = Arc::new(FileSettingsRepository::new(&config.data_dir));
        let transport = Arc::new(OpenAiTransport::new(config.openai_base_url.clone()));

        log::info!("Storing progress in {}", progress_repository.path().display());

        Ok(Self::with_collaborators(
            config,
            transport,
            progress_repository,
            settings_repository,
        ))
    }

    /// Wire the services over explicit collaborators.
    pub fn with_collaborators(
        config: Config,
        transport: Arc<dyn ChatTransport>,
        progress_repository: Arc<dyn ProgressRepository>,
        settings_repository: Arc<dyn SettingsRepository>,
    ) -> Self {
        let config = Arc::new(config);

        let generation = Arc::new(GenerationService::new(config.clone(), transport));
        let content_service = Arc::new(ContentService::new(generation));
        let progress_service = Arc::new(ProgressService::new(progress_repository));
        let settings_service = Arc::new(SettingsService::new(settings_repository));

        Self {
            content_service,
            progress_service,
            settings_service,
            config,
        }
    }
}
