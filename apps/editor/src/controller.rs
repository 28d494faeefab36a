//! Form state controller: the only writer of the Resume Draft.
//!
//! The draft lives behind an `Arc`. Mutations go through `Arc::make_mut`, so a
//! snapshot taken with [`FormController::snapshot`] (e.g. by the preview) is
//! never observed half-updated: it either predates a mutation or it does not.
//!
//! Suggestion requests are tracked by ticket. One result slot is visible at a
//! time and the last request to resolve wins it; nothing is cancelled. Every
//! index held by the slot or by an in-flight ticket is re-validated when a
//! list entry is removed.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::draft::{ListEntry, ListName, ResumeDraft, ScalarField};
use crate::error::FormError;
use crate::preview::{render, Preview};
use crate::suggestion::{
    SuggestRequest, SuggestResponse, SuggestionResult, SuggestionTarget, SuggestionTicket,
    SUGGESTION_FAILED_MESSAGE,
};

#[derive(Debug, Clone)]
struct InFlight {
    id: u64,
    /// `None` once the target entry has been deleted.
    target: Option<SuggestionTarget>,
}

#[derive(Debug, Clone)]
pub struct FormController {
    draft: Arc<ResumeDraft>,
    experience_visible: bool,
    slot: Option<SuggestionResult>,
    in_flight: Vec<InFlight>,
    next_ticket: u64,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    /// Starts from the default draft with the experience section hidden.
    pub fn new() -> Self {
        Self::with_draft(ResumeDraft::default())
    }

    /// Adopts an existing draft, restoring the one-education-row floor.
    pub fn with_draft(mut draft: ResumeDraft) -> Self {
        if draft.education.is_empty() {
            draft.education.push(Default::default());
        }
        let experience_visible = !draft.experience.is_empty();
        Self {
            draft: Arc::new(draft),
            experience_visible,
            slot: None,
            in_flight: Vec::new(),
            next_ticket: 1,
        }
    }

    pub fn draft(&self) -> &ResumeDraft {
        &self.draft
    }

    /// Immutable snapshot of the current draft. Later mutations do not affect it.
    pub fn snapshot(&self) -> Arc<ResumeDraft> {
        Arc::clone(&self.draft)
    }

    pub fn preview(&self) -> Preview {
        render(&self.draft)
    }

    pub fn experience_visible(&self) -> bool {
        self.experience_visible
    }

    // ── scalar fields ──────────────────────────────────────────────────────

    pub fn set_scalar_field(&mut self, field: ScalarField, value: impl Into<String>) {
        let value = value.into();
        let draft = Arc::make_mut(&mut self.draft);
        match field {
            ScalarField::Personal(personal) => draft.personal_info.set(personal, value),
            ScalarField::Summary => draft.summary = value,
        }
    }

    // ── list fields ────────────────────────────────────────────────────────

    pub fn set_list_field(
        &mut self,
        list: ListName,
        index: usize,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.check_index(list, index)?;
        let value = value.into();
        let draft = Arc::make_mut(&mut self.draft);
        match list {
            ListName::Education => set_entry_field(&mut draft.education, index, field, value),
            ListName::Projects => set_entry_field(&mut draft.projects, index, field, value),
            ListName::Experience => set_entry_field(&mut draft.experience, index, field, value),
        }
    }

    /// Appends an all-empty entry and returns its index.
    pub fn append_list_entry(&mut self, list: ListName) -> usize {
        let draft = Arc::make_mut(&mut self.draft);
        match list {
            ListName::Education => draft.education.push(Default::default()),
            ListName::Projects => draft.projects.push(Default::default()),
            ListName::Experience => {
                draft.experience.push(Default::default());
                self.experience_visible = true;
            }
        }
        self.draft.list_len(list) - 1
    }

    /// Splices out the entry at `index`. Returns `Ok(false)` when the removal
    /// was refused because it would leave education without any row.
    pub fn remove_list_entry(&mut self, list: ListName, index: usize) -> Result<bool, FormError> {
        self.check_index(list, index)?;
        if list == ListName::Education && self.draft.education.len() == 1 {
            return Ok(false);
        }

        let draft = Arc::make_mut(&mut self.draft);
        match list {
            ListName::Education => {
                draft.education.remove(index);
            }
            ListName::Projects => {
                draft.projects.remove(index);
            }
            ListName::Experience => {
                draft.experience.remove(index);
                if draft.experience.is_empty() {
                    self.experience_visible = false;
                }
            }
        }

        self.reindex_targets(list, index);
        Ok(true)
    }

    // ── skills ─────────────────────────────────────────────────────────────

    pub fn add_skill(&mut self, text: &str) -> bool {
        let skill = text.trim();
        if skill.is_empty() || self.draft.skills.contains(skill) {
            return false;
        }
        Arc::make_mut(&mut self.draft).skills.insert(skill)
    }

    pub fn remove_skill(&mut self, text: &str) -> bool {
        if !self.draft.skills.contains(text) {
            return false;
        }
        Arc::make_mut(&mut self.draft).skills.remove(text)
    }

    // ── experience section ─────────────────────────────────────────────────

    /// Disabling discards every experience entry; enabling starts from empty.
    pub fn toggle_experience_section(&mut self, enabled: bool) {
        if !enabled && !self.draft.experience.is_empty() {
            Arc::make_mut(&mut self.draft).experience.clear();
            self.drop_targets_in(ListName::Experience);
        }
        self.experience_visible = enabled;
    }

    // ── suggestions ────────────────────────────────────────────────────────

    pub fn suggestion(&self) -> Option<&SuggestionResult> {
        self.slot.as_ref()
    }

    /// True while a request for `target` has not resolved yet.
    pub fn is_pending(&self, target: SuggestionTarget) -> bool {
        self.in_flight.iter().any(|f| f.target == Some(target))
    }

    /// Validates `target`, discards the visible result and returns the
    /// request to send. No ticket is issued for blank text.
    pub fn begin_suggestion(
        &mut self,
        target: SuggestionTarget,
    ) -> Result<SuggestionTicket, FormError> {
        let value = self.target_text(target)?;
        if value.trim().is_empty() {
            return Err(FormError::EmptySuggestionInput);
        }
        if self.is_pending(target) {
            return Err(FormError::SuggestionPending);
        }

        let request = SuggestRequest {
            field: target.field().to_string(),
            value: value.to_string(),
        };
        let id = self.next_ticket;
        self.next_ticket += 1;

        self.in_flight.push(InFlight {
            id,
            target: Some(target),
        });
        self.slot = Some(SuggestionResult::pending(target));

        Ok(SuggestionTicket {
            id,
            target,
            request,
        })
    }

    /// Records the outcome of ticket `ticket_id`. Returns whether the result
    /// became visible; it does not when the ticket is unknown or its target
    /// entry was deleted in the meantime.
    pub fn complete_suggestion<E: fmt::Display>(
        &mut self,
        ticket_id: u64,
        outcome: Result<SuggestResponse, E>,
    ) -> bool {
        let Some(pos) = self.in_flight.iter().position(|f| f.id == ticket_id) else {
            return false;
        };
        let flight = self.in_flight.remove(pos);
        let Some(target) = flight.target else {
            debug!("Dropping suggestion {ticket_id}: its entry was removed");
            return false;
        };

        let result = match outcome {
            Ok(response) => SuggestionResult {
                target,
                suggestions: response.suggestions,
                critique: response.criticism,
                error: None,
                pending: false,
            },
            Err(e) => {
                warn!("Suggestion request {ticket_id} failed: {e}");
                SuggestionResult {
                    target,
                    suggestions: Vec::new(),
                    critique: None,
                    error: Some(SUGGESTION_FAILED_MESSAGE.to_string()),
                    pending: false,
                }
            }
        };
        self.slot = Some(result);
        true
    }

    /// Writes suggestion `choice` into the field it was requested for.
    pub fn apply_suggestion(&mut self, choice: usize) -> Result<(), FormError> {
        let (target, text) = {
            let slot = self
                .slot
                .as_ref()
                .filter(|s| !s.pending)
                .ok_or(FormError::NoSuchSuggestion(choice))?;
            let text = slot
                .suggestions
                .get(choice)
                .cloned()
                .ok_or(FormError::NoSuchSuggestion(choice))?;
            (slot.target, text)
        };

        match target {
            SuggestionTarget::Summary => self.set_scalar_field(ScalarField::Summary, text),
            SuggestionTarget::ProjectDescription(i) => {
                self.set_list_field(ListName::Projects, i, "description", text)?
            }
            SuggestionTarget::ExperienceDescription(i) => {
                self.set_list_field(ListName::Experience, i, "description", text)?
            }
        }
        self.slot = None;
        Ok(())
    }

    pub fn dismiss_suggestion(&mut self) {
        self.slot = None;
    }

    // ── internals ──────────────────────────────────────────────────────────

    fn check_index(&self, list: ListName, index: usize) -> Result<(), FormError> {
        let len = self.draft.list_len(list);
        if index >= len {
            return Err(FormError::IndexOutOfBounds { list, index, len });
        }
        Ok(())
    }

    fn target_text(&self, target: SuggestionTarget) -> Result<&str, FormError> {
        match target {
            SuggestionTarget::Summary => Ok(&self.draft.summary),
            SuggestionTarget::ProjectDescription(i) => {
                self.check_index(ListName::Projects, i)?;
                Ok(&self.draft.projects[i].description)
            }
            SuggestionTarget::ExperienceDescription(i) => {
                self.check_index(ListName::Experience, i)?;
                Ok(&self.draft.experience[i].description)
            }
        }
    }

    fn reindex_targets(&mut self, list: ListName, removed: usize) {
        if let Some(slot) = self.slot.take() {
            match slot.target.after_removal(list, removed) {
                Some(target) => self.slot = Some(SuggestionResult { target, ..slot }),
                None => debug!("Cleared suggestion for removed {list}[{removed}]"),
            }
        }
        for flight in &mut self.in_flight {
            flight.target = flight.target.and_then(|t| t.after_removal(list, removed));
        }
    }

    fn drop_targets_in(&mut self, list: ListName) {
        if self.slot.as_ref().is_some_and(|s| s.target.belongs_to(list)) {
            self.slot = None;
        }
        for flight in &mut self.in_flight {
            if flight.target.is_some_and(|t| t.belongs_to(list)) {
                flight.target = None;
            }
        }
    }
}

fn set_entry_field<E: ListEntry>(
    entries: &mut [E],
    index: usize,
    field: &str,
    value: String,
) -> Result<(), FormError> {
    let len = entries.len();
    entries
        .get_mut(index)
        .ok_or(FormError::IndexOutOfBounds {
            list: E::LIST,
            index,
            len,
        })?
        .set_field(field, value)
}
