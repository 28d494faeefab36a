//! Best-effort extraction of the suggestion object from free LLM text.
//!
//! Models wrap the JSON they were asked for in prose, code fences, or both.
//! Recovery runs in two stages: `locate_object` cuts out the span from the
//! first `{` to the last `}`, then `decode` deserializes that span strictly.
//! Either stage fails with a value; nothing partial is ever returned.

use std::sync::OnceLock;

use regex::Regex;
use resume_editor::SuggestResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("no JSON object found in model reply")]
    NoObject,

    #[error("model reply is not a valid suggestion object: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn object_span() -> Option<&'static Regex> {
    static OBJECT_SPAN: OnceLock<Option<Regex>> = OnceLock::new();
    // Greedy: first `{` through last `}`.
    OBJECT_SPAN
        .get_or_init(|| Regex::new(r"(?s)\{.*\}").ok())
        .as_ref()
}

pub fn locate_object(raw: &str) -> Result<&str, RecoveryError> {
    object_span()
        .and_then(|re| re.find(raw))
        .map(|m| m.as_str())
        .ok_or(RecoveryError::NoObject)
}

pub fn decode(span: &str) -> Result<SuggestResponse, RecoveryError> {
    Ok(serde_json::from_str(span)?)
}

pub fn recover(raw: &str) -> Result<SuggestResponse, RecoveryError> {
    decode(locate_object(raw)?)
}
