use std::env;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: Option<SecretString>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub structured_temperature: f32,
    pub chat_temperature: f32,
    pub data_dir: PathBuf,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub local_only_mode: bool,
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            structured_temperature: env::var("STRUCTURED_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.5),
            chat_temperature: env::var("CHAT_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            local_only_mode: env::var("LOCAL_ONLY_MODE")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            cors_origin: env::var("CORS_ORIGIN").ok().filter(|o| !o.trim().is_empty()),
        }
    }

    /// Reject settings that would make every generation call fail.
    pub fn validate(&self) -> AppResult<()> {
        if self.openai_base_url.trim().is_empty() {
            return Err(AppError::ValidationError(
                "OPENAI_BASE_URL must not be empty".to_string(),
            ));
        }

        if self.openai_model.trim().is_empty() {
            return Err(AppError::ValidationError(
                "OPENAI_MODEL must not be empty".to_string(),
            ));
        }

        for (name, value) in [
            ("STRUCTURED_TEMPERATURE", self.structured_temperature),
            ("CHAT_TEMPERATURE", self.chat_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(AppError::ValidationError(format!(
                    "{} must be between 0 and 2, got {}",
                    name, value
                )));
            }
        }

        if self.openai_api_key.is_none() {
            log::warn!("OPENAI_API_KEY is not set; generation requires a per-request key");
        }

        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: Some(SecretString::from("sk-test".to_string())),
            openai_base_url: "http://127.0.0.1:9/v1".to_string(),
            openai_model: "gpt-4o".to_string(),
            structured_temperature: 0.5,
            chat_temperature: 0.7,
            data_dir: PathBuf::from("data-test"),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            local_only_mode: false,
            cors_origin: None,
        }
    }
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
