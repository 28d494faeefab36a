//! HTTP client for the resume API.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::draft::{ResumeDraft, StoredResume};
use crate::error::ClientError;
use crate::suggestion::{SuggestRequest, SuggestResponse, SuggestionTicket};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const RESUME_ENDPOINT: &str = "/resume";
const SUGGEST_ENDPOINT: &str = "/ai/suggest";

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Reads `RESUME_API_URL` and `RESUME_API_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url =
            std::env::var("RESUME_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = std::env::var("RESUME_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Saves `draft` as a new record. Retrying after a failure is safe for the
    /// draft but may create a duplicate record on the server.
    pub async fn save_resume(&self, draft: &ResumeDraft) -> Result<StoredResume, ClientError> {
        let url = format!("{}{}", self.base_url, RESUME_ENDPOINT);
        let response = self.client.post(&url).json(draft).send().await?;
        let stored: StoredResume = ok_or_api_error(response).await?.json().await?;
        info!("Resume saved as {}", stored.id);
        Ok(stored)
    }

    pub async fn fetch_resume(&self, id: Uuid) -> Result<StoredResume, ClientError> {
        let url = format!("{}{}/{}", self.base_url, RESUME_ENDPOINT, id);
        let response = self.client.get(&url).send().await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    pub async fn suggest(&self, request: &SuggestRequest) -> Result<SuggestResponse, ClientError> {
        let url = format!("{}{}", self.base_url, SUGGEST_ENDPOINT);
        debug!("Requesting suggestions for field '{}'", request.field);
        let response = self.client.post(&url).json(request).send().await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Sends the request carried by a ticket from `FormController::begin_suggestion`.
    pub async fn suggest_for(
        &self,
        ticket: &SuggestionTicket,
    ) -> Result<SuggestResponse, ClientError> {
        self.suggest(&ticket.request).await
    }
}

async fn ok_or_api_error(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    warn!("Resume API returned {}: {}", status, body);
    Err(ClientError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pulls `error.message` out of an API error body, or returns the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}
