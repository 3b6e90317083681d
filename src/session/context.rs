use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::{parse_flag, Config},
    errors::{AppError, AppResult},
    models::domain::AppSettings,
};

pub const API_KEY_HEADER: &str = "x-openai-key";
pub const LOCAL_ONLY_HEADER: &str = "x-local-only";

/// Per-request state that would otherwise live in ambient session storage.
/// Built once per request and passed by reference down the call chain.
#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    pub api_key_override: Option<SecretString>,
    pub local_only: bool,
    pub model: Option<String>,
    pub chat_temperature: Option<f32>,
}

impl SessionContext {
    pub fn from_settings(config: &Config, settings: &AppSettings) -> Self {
        Self {
            api_key_override: None,
            local_only: config.local_only_mode || settings.local_only_mode,
            model: settings.model.clone().filter(|m| !m.trim().is_empty()),
            chat_temperature: settings.temperature,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !key.trim().is_empty() {
            self.api_key_override = Some(SecretString::from(key));
        }
        self
    }

    pub fn with_local_only(mut self, local_only: bool) -> Self {
        self.local_only = local_only;
        self
    }

    /// Apply the optional request headers on top of the persisted settings.
    pub fn apply_headers(self, api_key: Option<&str>, local_only: Option<&str>) -> Self {
        let session = match api_key {
            Some(key) => self.with_api_key(key),
            None => self,
        };
        match local_only {
            Some(flag) => session.with_local_only(parse_flag(flag)),
            None => session,
        }
    }

    /// The runtime override wins over the environment key. Blank keys count
    /// as absent.
    pub fn resolve_api_key(&self, config: &Config) -> AppResult<SecretString> {
        let usable = |key: &&SecretString| !key.expose_secret().trim().is_empty();

        self.api_key_override
            .as_ref()
            .filter(usable)
            .or_else(|| config.openai_api_key.as_ref().filter(usable))
            .cloned()
            .ok_or_else(|| {
                AppError::NotConfigured(
                    "OpenAI API key not configured; set OPENAI_API_KEY or send X-OpenAI-Key"
                        .to_string(),
                )
            })
    }

    pub fn model<'a>(&'a self, config: &'a Config) -> &'a str {
        self.model.as_deref().unwrap_or(&config.openai_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_key() -> Config {
        Config {
            openai_api_key: None,
            ..Config::test_config()
        }
    }

    #[test]
    fn override_wins_over_environment_key() {
        let config = Config::test_config();
        let session = SessionContext::default().with_api_key("sk-override");

        let key = session.resolve_api_key(&config).expect("key resolves");
        assert_eq!(key.expose_secret(), "sk-override");
    }

    #[test]
    fn environment_key_is_used_without_override() {
        let config = Config::test_config();
        let key = SessionContext::default()
            .resolve_api_key(&config)
            .expect("key resolves");

        assert_eq!(key.expose_secret(), "sk-test");
    }

    #[test]
    fn missing_key_is_not_configured() {
        let config = config_without_key();
        let session = SessionContext::default().with_api_key("   ");

        let err = session.resolve_api_key(&config).unwrap_err();
        assert!(matches!(err, AppError::NotConfigured(_)));
    }

    #[test]
    fn headers_override_persisted_settings() {
        let config = Config::test_config();
        let settings = AppSettings {
            local_only_mode: true,
            ..AppSettings::default()
        };

        let session = SessionContext::from_settings(&config, &settings)
            .apply_headers(Some("sk-header"), Some("false"));

        assert!(!session.local_only);
        assert!(session.api_key_override.is_some());
        assert_eq!(session.model(&config), "gpt-4o");
    }

    #[test]
    fn unset_settings_fall_back_to_config() {
        let config = Config {
            openai_model: "gpt-4.1-mini".to_string(),
            ..Config::test_config()
        };

        let session = SessionContext::from_settings(&config, &AppSettings::default());

        assert_eq!(session.model(&config), "gpt-4.1-mini");
        assert!(session.chat_temperature.is_none());
    }

    #[test]
    fn saved_settings_override_config() {
        let config = Config::test_config();
        let settings = AppSettings {
            model: Some("gpt-4o-mini".to_string()),
            temperature: Some(0.2),
            local_only_mode: false,
        };

        let session = SessionContext::from_settings(&config, &settings);

        assert_eq!(session.model(&config), "gpt-4o-mini");
        assert_eq!(session.chat_temperature, Some(0.2));
    }
}
