//! Server-Sent Events framing for generation streams.
//!
//! Every `data:` line is a single JSON document, so fragments containing
//! newlines never break the framing.

use actix_web::{http::header, web::Bytes, HttpResponse};
use futures::{stream, Stream, StreamExt};
use serde::Serialize;
use serde_json::json;

use crate::{
    errors::AppError,
    models::dto::response::ChunkPayload,
    services::{generation_service::GenerationEvent, llm_client::FragmentStream, GenerationStream},
};

pub const CHUNK_EVENT: &str = "chunk";
pub const COMPLETE_EVENT: &str = "complete";
pub const ERROR_EVENT: &str = "error";
pub const DONE_EVENT: &str = "done";

pub fn sse_frame<T: Serialize + ?Sized>(event: &str, payload: &T) -> Bytes {
    let data = serde_json::to_string(payload)
        .unwrap_or_else(|err| json!({ "error": err.to_string() }).to_string());
    Bytes::from(format!("event: {}\ndata: {}\n\n", event, data))
}

fn error_frame(err: &AppError) -> Bytes {
    sse_frame(ERROR_EVENT, &err.to_response_body())
}

pub fn generation_frame<T: Serialize>(event: &GenerationEvent<T>) -> Bytes {
    match event {
        GenerationEvent::Chunk(text) => sse_frame(CHUNK_EVENT, &ChunkPayload { text }),
        GenerationEvent::Completed(artifact) => sse_frame(COMPLETE_EVENT, artifact),
        GenerationEvent::Failed(err) => error_frame(err),
    }
}

fn event_stream<S>(body: S) -> HttpResponse
where
    S: Stream<Item = Result<Bytes, AppError>> + 'static,
{
    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(body)
}

/// `chunk` events followed by exactly one `complete` or `error` event.
pub fn generation_response<T: Serialize + 'static>(events: GenerationStream<T>) -> HttpResponse {
    event_stream(events.map(|event| Ok::<_, AppError>(generation_frame(&event))))
}

/// `chunk` events followed by `done`, or by `error` if the upstream fails.
pub fn text_response(fragments: FragmentStream) -> HttpResponse {
    let frames = stream::unfold(Some(fragments), |state| async move {
        let mut fragments = state?;
        match fragments.next().await {
            Some(Ok(text)) => {
                let frame = sse_frame(CHUNK_EVENT, &ChunkPayload { text: &text });
                Some((frame, Some(fragments)))
            }
            Some(Err(err)) => Some((error_frame(&err), None)),
            None => Some((sse_frame(DONE_EVENT, &json!({})), None)),
        }
    });

    event_stream(frames.map(Ok::<_, AppError>))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Lesson;

    #[test]
    fn chunk_frames_keep_newlines_inside_json() {
        let frame = generation_frame::<Lesson>(&GenerationEvent::Chunk("a\nb".to_string()));
        assert_eq!(frame, Bytes::from("event: chunk\ndata: {\"text\":\"a\\nb\"}\n\n"));
    }

    #[test]
    fn error_frames_carry_kind_and_raw_text() {
        let err = AppError::malformed("bad json", "{oops");
        let frame = generation_frame::<Lesson>(&GenerationEvent::Failed(err));
        let text = String::from_utf8(frame.to_vec()).expect("utf8");

        assert!(text.starts_with("event: error\n"));
        assert!(text.contains("\"kind\":\"MALFORMED_PAYLOAD\""));
        assert!(text.contains("\"raw\":\"{oops\""));
    }
}
