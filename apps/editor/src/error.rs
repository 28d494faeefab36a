use thiserror::Error;

use crate::draft::ListName;

/// Contract violations raised by `FormController`.
/// None of these leave the draft modified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{list} has no entry at index {index} (len {len})")]
    IndexOutOfBounds {
        list: ListName,
        index: usize,
        len: usize,
    },

    #[error("unknown field '{field}' in {section}")]
    UnknownField { section: String, field: String },

    #[error("unknown list '{0}'")]
    UnknownList(String),

    #[error("nothing to improve: the text is empty")]
    EmptySuggestionInput,

    #[error("a suggestion request for this field is already in flight")]
    SuggestionPending,

    #[error("no suggestion {0} is available")]
    NoSuchSuggestion(usize),
}

/// Failures talking to the resume API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },
}
