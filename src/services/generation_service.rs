use std::pin::Pin;
use std::sync::Arc;

use futures::{stream, Stream, StreamExt};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::Artifact,
    services::{
        llm_client::{ChatMessage, ChatRequest, ChatTransport, FragmentStream},
        payload::coerce_document,
    },
    session::SessionContext,
};

/// One item of a structured generation: any number of `Chunk`s followed by
/// exactly one terminal `Completed` or `Failed`.
#[derive(Debug)]
pub enum GenerationEvent<T> {
    Chunk(String),
    Completed(T),
    Failed(AppError),
}

impl<T> GenerationEvent<T> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GenerationEvent::Chunk(_))
    }
}

pub type GenerationStream<T> = Pin<Box<dyn Stream<Item = GenerationEvent<T>> + Send>>;

enum PipelineState {
    Streaming {
        fragments: FragmentStream,
        buffer: String,
        chunks: usize,
    },
    Done,
}

pub struct GenerationService {
    config: Arc<Config>,
    transport: Arc<dyn ChatTransport>,
}

impl GenerationService {
    pub fn new(config: Arc<Config>, transport: Arc<dyn ChatTransport>) -> Self {
        Self { config, transport }
    }

    /// Stream a structured artifact of type `T`.
    ///
    /// The credential is resolved before anything is sent, so a missing key
    /// fails here with `NotConfigured` and no request is made. Failures after
    /// the stream has started arrive as a terminal `Failed` event.
    pub async fn generate<T: Artifact>(
        &self,
        session: &SessionContext,
        system_instruction: &str,
        user_prompt: &str,
    ) -> AppResult<GenerationStream<T>> {
        let api_key = session.resolve_api_key(&self.config)?;

        let request = ChatRequest {
            api_key,
            model: session.model(&self.config).to_string(),
            messages: vec![
                ChatMessage::system(system_instruction),
                ChatMessage::user(user_prompt),
            ],
            json_mode: true,
            temperature: self.config.structured_temperature,
        };

        log::info!(
            "Starting {} generation (model: {}, json_mode: true)",
            T::KIND,
            request.model
        );

        let fragments = self.transport.stream_chat(request).await?;
        Ok(Box::pin(pipeline::<T>(fragments)))
    }

    /// Stream uncoerced conversational text. Ends when the upstream ends.
    pub async fn generate_freeform(
        &self,
        session: &SessionContext,
        system_instruction: &str,
        history: Vec<ChatMessage>,
    ) -> AppResult<FragmentStream> {
        let api_key = session.resolve_api_key(&self.config)?;

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(system_instruction));
        messages.extend(history);

        let request = ChatRequest {
            api_key,
            model: session.model(&self.config).to_string(),
            messages,
            json_mode: false,
            temperature: session
                .chat_temperature
                .unwrap_or(self.config.chat_temperature),
        };

        log::info!(
            "Starting freeform generation (model: {}, json_mode: false)",
            request.model
        );

        self.transport.stream_chat(request).await
    }
}

fn pipeline<T: Artifact>(fragments: FragmentStream) -> impl Stream<Item = GenerationEvent<T>> + Send {
    let initial = PipelineState::Streaming {
        fragments,
        buffer: String::new(),
        chunks: 0,
    };

    stream::unfold(initial, |state| async move {
        let PipelineState::Streaming {
            mut fragments,
            mut buffer,
            chunks,
        } = state
        else {
            return None;
        };

        match fragments.next().await {
            Some(Ok(fragment)) => {
                buffer.push_str(&fragment);
                let next = PipelineState::Streaming {
                    fragments,
                    buffer,
                    chunks: chunks + 1,
                };
                Some((GenerationEvent::Chunk(fragment), next))
            }
            Some(Err(err)) => {
                let err = match err {
                    AppError::TransportFailure(_) => err,
                    other => AppError::TransportFailure(other.to_string()),
                };
                log::error!(
                    "{} generation failed after {} chunks: {}",
                    T::KIND,
                    chunks,
                    err.error_code()
                );
                Some((GenerationEvent::Failed(err), PipelineState::Done))
            }
            None => {
                log::info!(
                    "{} stream finished: {} chunks, {} bytes",
                    T::KIND,
                    chunks,
                    buffer.len()
                );
                let event = match coerce_document::<T>(&buffer) {
                    Ok(artifact) => GenerationEvent::Completed(artifact),
                    Err(err) => {
                        log::warn!("{} output rejected: {}", T::KIND, err);
                        GenerationEvent::Failed(err)
                    }
                };
                Some((event, PipelineState::Done))
            }
        }
    })
}

/// Drain a generation stream, handing each chunk to `on_chunk`, and return
/// the terminal outcome.
pub async fn collect_artifact<T>(
    mut events: GenerationStream<T>,
    mut on_chunk: impl FnMut(&str),
) -> AppResult<T> {
    while let Some(event) = events.next().await {
        match event {
            GenerationEvent::Chunk(text) => on_chunk(&text),
            GenerationEvent::Completed(artifact) => return Ok(artifact),
            GenerationEvent::Failed(err) => return Err(err),
        }
    }
    Err(AppError::InternalError(
        "generation stream ended without an outcome".to_string(),
    ))
}

/// Drain a freeform stream into one string, handing each fragment to
/// `on_chunk` as it arrives.
pub async fn collect_text(
    mut fragments: FragmentStream,
    mut on_chunk: impl FnMut(&str),
) -> AppResult<String> {
    let mut text = String::new();
    while let Some(fragment) = fragments.next().await {
        let fragment = fragment?;
        on_chunk(&fragment);
        text.push_str(&fragment);
    }
    Ok(text)
}
