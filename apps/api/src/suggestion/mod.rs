// AI suggestion proxy: validates the field text, asks the LLM for a critique
// plus rewrites, and recovers a structured reply from whatever comes back.
// All LLM calls go through llm_client::TextGenerator.

pub mod handlers;
pub mod prompts;
pub mod recovery;

use resume_editor::suggestion::PROJECT_DESCRIPTION_FIELD;
use resume_editor::{SuggestRequest, SuggestResponse};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::prompts::{CAREER_COACH_PERSONA, JSON_ONLY_INSTRUCTION};
use crate::llm_client::TextGenerator;

/// Builds the full prompt for one field. Project descriptions get their own
/// framing; everything else shares the general template.
pub fn build_prompt(field: &str, value: &str) -> String {
    let body = if field == PROJECT_DESCRIPTION_FIELD {
        prompts::PROJECT_DESCRIPTION_TEMPLATE.replace("{value}", value)
    } else {
        prompts::GENERAL_TEMPLATE
            .replace("{field}", field)
            .replace("{value}", value)
    };
    format!("{CAREER_COACH_PERSONA}\n\n{body}\n\n{JSON_ONLY_INSTRUCTION}")
}

pub async fn suggest(
    llm: &dyn TextGenerator,
    req: &SuggestRequest,
) -> Result<SuggestResponse, AppError> {
    if req.value.trim().is_empty() {
        return Err(AppError::Validation("Value is required".to_string()));
    }

    let prompt = build_prompt(&req.field, &req.value);
    let raw = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    debug!(field = %req.field, raw = %raw, "LLM raw suggestion reply");

    let response = recovery::recover(&raw).map_err(|e| AppError::Llm(e.to_string()))?;

    info!(
        field = %req.field,
        suggestions = response.suggestions.len(),
        "Suggestions generated"
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::LlmError;

    struct ScriptedGenerator {
        reply: Result<String, u16>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl ScriptedGenerator {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "upstream failure".to_string(),
                }),
            }
        }
    }

    fn request(field: &str, value: &str) -> SuggestRequest {
        SuggestRequest {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_project_description_prompt_framing() {
        let prompt = build_prompt("projectDescription", "Built a chat app");
        assert!(prompt.contains("Built a chat app"));
        assert!(prompt.contains("problem"));
        assert!(prompt.contains("technologies"));
        assert!(prompt.contains("outcome"));
        assert!(!prompt.contains("{value}"));
    }

    #[test]
    fn test_general_prompt_names_field() {
        let prompt = build_prompt("summary", "Engineer with 3 years");
        assert!(prompt.contains(r#""summary" section"#));
        assert!(prompt.contains("action verb"));
        assert!(prompt.contains("quantify"));
        assert!(prompt.contains(JSON_ONLY_INSTRUCTION));
    }

    #[tokio::test]
    async fn test_blank_value_rejected_without_llm_call() {
        let llm = ScriptedGenerator::replying(r#"{"suggestions": ["x"]}"#);
        let err = suggest(&llm, &request("summary", "   \n")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wrapped_reply_is_recovered() {
        let llm = ScriptedGenerator::replying(
            "Sure! {\"criticism\": \"Vague\", \"suggestions\": [\"Shipped X\", \"Led Y\"]}",
        );
        let response = suggest(&llm, &request("experienceDescription", "did stuff"))
            .await
            .unwrap();
        assert_eq!(response.suggestions, vec!["Shipped X", "Led Y"]);
        assert_eq!(response.criticism.as_deref(), Some("Vague"));
        let prompt = llm.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("did stuff"));
    }

    #[tokio::test]
    async fn test_unrecoverable_reply_is_llm_error() {
        let llm = ScriptedGenerator::replying("no json here");
        let err = suggest(&llm, &request("summary", "text")).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_llm_error() {
        let llm = ScriptedGenerator::failing(503);
        let err = suggest(&llm, &request("summary", "text")).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }
}
