// LLM prompt templates for the suggestion endpoint.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Project descriptions. Replace `{value}` before sending.
pub const PROJECT_DESCRIPTION_TEMPLATE: &str = r#"Critique the following project description from a resume, then rewrite it two different ways.
Each rewrite must state the problem the project solved, the technologies used to solve it, and the measurable outcome.

Project description:
---
{value}
---

Return a JSON object with this EXACT schema:
{"criticism": "one or two sentences on what is weak or missing", "suggestions": ["rewrite 1", "rewrite 2"]}"#;

/// Every other free-text field. Replace `{field}` and `{value}` before sending.
pub const GENERAL_TEMPLATE: &str = r#"Critique the following text from the "{field}" section of a resume, then rewrite it two different ways.
Each rewrite must open with a strong action verb and quantify achievements wherever the text allows it.

User's input:
---
{value}
---

Return a JSON object with this EXACT schema:
{"criticism": "one or two sentences on what is weak or missing", "suggestions": ["rewrite 1", "rewrite 2"]}"#;
