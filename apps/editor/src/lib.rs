//! Client-side half of the resume builder.
//!
//! `FormController` owns the draft and is the only thing allowed to mutate it;
//! `preview::render` projects a draft snapshot into a read-only document;
//! `ApiClient` talks to the save and suggestion endpoints.

pub mod client;
pub mod controller;
pub mod draft;
pub mod error;
pub mod preview;
pub mod suggestion;

pub use client::ApiClient;
pub use controller::FormController;
pub use draft::{ListName, ResumeDraft, ScalarField};
pub use error::{ClientError, FormError};
pub use preview::{render, Preview};
pub use suggestion::{SuggestRequest, SuggestResponse, SuggestionTarget};
