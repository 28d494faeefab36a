// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every prompt that expects a machine-readable reply.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Your response MUST be a single valid JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Persona shared by every resume-writing prompt.
pub const CAREER_COACH_PERSONA: &str = "You are an expert career coach and resume writer.";
