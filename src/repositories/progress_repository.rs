use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{errors::AppResult, models::domain::UserProgress, repositories::json_file};

pub const PROGRESS_FILE: &str = "user_progress.json";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Returns an empty record when nothing has been saved yet.
    async fn load(&self) -> AppResult<UserProgress>;
    async fn save(&self, progress: &UserProgress) -> AppResult<()>;
}

pub struct FileProgressRepository {
    path: PathBuf,
}

impl FileProgressRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PROGRESS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProgressRepository for FileProgressRepository {
    async fn load(&self) -> AppResult<UserProgress> {
        json_file::read_or_default(&self.path).await
    }

    async fn save(&self, progress: &UserProgress) -> AppResult<()> {
        json_file::write_atomic(&self.path, progress).await?;
        log::debug!("Saved progress to {}", self.path.display());
        Ok(())
    }
}
