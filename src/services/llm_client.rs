use std::pin::Pin;

use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::{AppError, AppResult};

/// Incremental text fragments of one completion. A mid-stream failure is
/// delivered as an `Err` item and ends the useful part of the stream.
pub type FragmentStream = Pin<Box<dyn Stream<Item = AppResult<String>> + Send>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChatRequest {
    pub api_key: SecretString,
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Ask the server for a generic JSON object response.
    pub json_mode: bool,
    pub temperature: f32,
}

impl ChatRequest {
    fn to_body(&self) -> serde_json::Value {
        let mut body = json!({
            "model": self.model,
            "messages": self.messages,
            "temperature": self.temperature,
            "stream": true,
        });
        if self.json_mode {
            body["response_format"] = json!({ "type": "json_object" });
        }
        body
    }
}

/// Streaming chat-completion endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn stream_chat(&self, request: ChatRequest) -> AppResult<FragmentStream>;
}

#[derive(Debug, Deserialize)]
struct CompletionChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: ChunkDelta,
}

#[derive(Debug, Default, Deserialize)]
struct ChunkDelta {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionChunk {
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|text| !text.is_empty())
    }
}

/// OpenAI-compatible transport. A client is built per request because the
/// credential may differ between sessions.
pub struct OpenAiTransport {
    api_base: String,
}

impl OpenAiTransport {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn client(&self, api_key: &SecretString) -> Client<OpenAIConfig> {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(&self.api_base);
        Client::with_config(config)
    }
}

#[async_trait]
impl ChatTransport for OpenAiTransport {
    async fn stream_chat(&self, request: ChatRequest) -> AppResult<FragmentStream> {
        let client = self.client(&request.api_key);
        let body = request.to_body();

        let upstream = client.chat().create_stream_byot(body).await?;

        let fragments = upstream.filter_map(|item: Result<CompletionChunk, OpenAIError>| async move {
            match item {
                Ok(chunk) => chunk.into_text().map(Ok),
                Err(err) => Some(Err(AppError::from(err))),
            }
        });

        Ok(Box::pin(fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json_mode: bool) -> ChatRequest {
        ChatRequest {
            api_key: SecretString::from("sk-test".to_string()),
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            json_mode,
            temperature: 0.5,
        }
    }

    #[test]
    fn json_mode_requests_json_object_format() {
        let body = request(true).to_body();

        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["stream"], true);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
    }

    #[test]
    fn freeform_requests_omit_response_format() {
        let body = request(false).to_body();
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn request_body_never_contains_the_key() {
        let body = request(true).to_body().to_string();
        assert!(!body.contains("sk-test"));
    }

    #[test]
    fn chunk_text_skips_empty_and_role_only_deltas() {
        let role_only: CompletionChunk = serde_json::from_str(
            r#"{"choices":[{"index":0,"delta":{"role":"assistant"}}]}"#,
        )
        .expect("chunk");
        let empty: CompletionChunk =
            serde_json::from_str(r#"{"choices":[{"delta":{"content":""}}]}"#).expect("chunk");
        let text: CompletionChunk =
            serde_json::from_str(r#"{"choices":[{"delta":{"content":"{\"a\""}}]}"#)
                .expect("chunk");
        let no_choices: CompletionChunk = serde_json::from_str(r#"{"choices":[]}"#).expect("chunk");

        assert_eq!(role_only.into_text(), None);
        assert_eq!(empty.into_text(), None);
        assert_eq!(text.into_text().as_deref(), Some("{\"a\""));
        assert_eq!(no_choices.into_text(), None);
    }
}
