//! Suggestion round-trip types shared by the editor and the API.

use serde::{Deserialize, Serialize};

use crate::draft::ListName;

/// Field name the API treats specially when building its instruction.
pub const PROJECT_DESCRIPTION_FIELD: &str = "projectDescription";

/// Shown in place of any failure detail. The user can only retry anyway.
pub const SUGGESTION_FAILED_MESSAGE: &str = "Could not get suggestions. Please try again.";

/// Body of `POST /api/ai/suggest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub value: String,
}

/// Successful reply of `POST /api/ai/suggest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
    #[serde(default, alias = "critique", skip_serializing_if = "Option::is_none")]
    pub criticism: Option<String>,
}

/// The free-text field a suggestion is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionTarget {
    Summary,
    ProjectDescription(usize),
    ExperienceDescription(usize),
}

impl SuggestionTarget {
    /// Wire name sent as `field`.
    pub fn field(&self) -> &'static str {
        match self {
            SuggestionTarget::Summary => "summary",
            SuggestionTarget::ProjectDescription(_) => PROJECT_DESCRIPTION_FIELD,
            SuggestionTarget::ExperienceDescription(_) => "experienceDescription",
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            SuggestionTarget::Summary => None,
            SuggestionTarget::ProjectDescription(i) | SuggestionTarget::ExperienceDescription(i) => {
                Some(*i)
            }
        }
    }

    pub fn list(&self) -> Option<ListName> {
        match self {
            SuggestionTarget::Summary => None,
            SuggestionTarget::ProjectDescription(_) => Some(ListName::Projects),
            SuggestionTarget::ExperienceDescription(_) => Some(ListName::Experience),
        }
    }

    /// Where this target points after `removed` was spliced out of `list`.
    /// `None` means the target entry itself is gone.
    pub fn after_removal(self, list: ListName, removed: usize) -> Option<Self> {
        if self.list() != Some(list) {
            return Some(self);
        }
        let index = self.index()?;
        if index == removed {
            return None;
        }
        if index < removed {
            return Some(self);
        }
        Some(match self {
            SuggestionTarget::ProjectDescription(_) => SuggestionTarget::ProjectDescription(index - 1),
            SuggestionTarget::ExperienceDescription(_) => {
                SuggestionTarget::ExperienceDescription(index - 1)
            }
            SuggestionTarget::Summary => SuggestionTarget::Summary,
        })
    }

    /// Every target slot tied to an entry of `list`, e.g. when the list is cleared.
    pub fn belongs_to(&self, list: ListName) -> bool {
        self.list() == Some(list)
    }
}

/// The single visible suggestion slot. Replaced wholesale by each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResult {
    pub target: SuggestionTarget,
    pub suggestions: Vec<String>,
    pub critique: Option<String>,
    pub error: Option<String>,
    pub pending: bool,
}

impl SuggestionResult {
    pub(crate) fn pending(target: SuggestionTarget) -> Self {
        Self {
            target,
            suggestions: Vec::new(),
            critique: None,
            error: None,
            pending: true,
        }
    }

    pub fn target_field(&self) -> &'static str {
        self.target.field()
    }

    pub fn target_index(&self) -> Option<usize> {
        self.target.index()
    }
}

/// Handed out by `FormController::begin_suggestion`; the caller sends
/// `request` and reports back with `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionTicket {
    pub id: u64,
    pub target: SuggestionTarget,
    pub request: SuggestRequest,
}
