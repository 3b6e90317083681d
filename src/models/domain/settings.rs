use serde::{Deserialize, Serialize};
use validator::Validate;

/// Persisted user preferences. The API key is deliberately absent; it only
/// ever lives in the environment or in a per-request override.
///
/// Unset model and temperature fall back to `OPENAI_MODEL` and
/// `CHAT_TEMPERATURE`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct AppSettings {
    #[validate(length(min = 1, max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[validate(range(min = 0.0, max = 2.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub local_only_mode: bool,
}
