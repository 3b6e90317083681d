//! Turning accumulated model output into a validated artifact.
//!
//! The text may be wrapped in a Markdown code fence and the object may be
//! nested under a single named root key; both are tolerated here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Artifact;

static FENCE_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```[A-Za-z0-9_+.\-]*[ \t]*\r?\n?").expect("FENCE_OPEN is a valid regex pattern")
});

const FENCE: &str = "```";

/// The JSON text inside `raw`.
///
/// Output that already starts like a JSON document is returned as is, so
/// fences inside string values are left alone. Otherwise the body between
/// the first opening fence (with an optional language tag) and the first
/// closing fence is taken; an unterminated fence runs to the end of input.
pub fn extract_json_text(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }

    let Some(open) = FENCE_OPEN.find(trimmed) else {
        return trimmed;
    };

    let body = &trimmed[open.end()..];
    match body.find(FENCE) {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}

pub fn parse_document(raw: &str) -> AppResult<Value> {
    let text = extract_json_text(raw);
    serde_json::from_str(text)
        .map_err(|err| AppError::malformed(format!("model output is not valid JSON: {}", err), raw))
}

/// The inner object when `document` is a one-key object wrapping another
/// object, e.g. `{"lesson": {...}}`.
pub fn unwrap_single_root(document: &Value) -> Option<&Value> {
    let object = document.as_object()?;
    if object.len() != 1 {
        return None;
    }
    object.values().next().filter(|inner| inner.is_object())
}

fn coerce_value<T: Artifact>(value: Value, raw: &str) -> AppResult<T> {
    let mut artifact: T = serde_json::from_value(value).map_err(|err| {
        AppError::malformed(format!("output does not match the {} shape: {}", T::KIND, err), raw)
    })?;

    artifact.validate().map_err(|err| {
        AppError::malformed(format!("{} failed validation: {}", T::KIND, err), raw)
    })?;

    artifact.normalize();
    Ok(artifact)
}

/// Parse and coerce the full accumulated text into `T`.
///
/// Direct coercion is tried first. Only when it fails and the document is a
/// single-key wrapper is the inner object tried, once.
pub fn coerce_document<T: Artifact>(raw: &str) -> AppResult<T> {
    let document = parse_document(raw)?;

    let direct_err = match coerce_value::<T>(document.clone(), raw) {
        Ok(artifact) => return Ok(artifact),
        Err(err) => err,
    };

    match unwrap_single_root(&document) {
        Some(inner) => {
            log::debug!("Retrying {} coercion on single root key", T::KIND);
            coerce_value::<T>(inner.clone(), raw)
        }
        None => Err(direct_err),
    }
}
