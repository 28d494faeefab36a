//! The Resume Draft document and its addressable fields.
//!
//! Entries inside the three lists carry no identifier: their position is
//! their identity. Anything holding "the entry at index i" has to be
//! re-indexed when an earlier entry is removed (see `FormController`).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FormError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub grad_year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Insertion-ordered skill set. Duplicates are rejected on insert and
/// collapsed when a stored document is read back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Skills(Vec<String>);

impl Skills {
    /// Trims `skill` and appends it unless it is blank or already present.
    pub fn insert(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.contains(skill) {
            return false;
        }
        self.0.push(skill.to_string());
        true
    }

    pub fn remove(&mut self, skill: &str) -> bool {
        match self.0.iter().position(|s| s == skill) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|s| s == skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Skills {
    fn from(raw: Vec<String>) -> Self {
        let mut skills = Skills::default();
        for skill in &raw {
            skills.insert(skill);
        }
        skills
    }
}

impl From<Skills> for Vec<String> {
    fn from(skills: Skills) -> Self {
        skills.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDraft {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub projects: Vec<ProjectEntry>,
    pub experience: Vec<ExperienceEntry>,
}

impl Default for ResumeDraft {
    /// One empty education row, one empty project row, no experience.
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            education: vec![EducationEntry::default()],
            skills: Skills::default(),
            projects: vec![ProjectEntry::default()],
            experience: Vec::new(),
        }
    }
}

impl ResumeDraft {
    pub fn list_len(&self, list: ListName) -> usize {
        match list {
            ListName::Education => self.education.len(),
            ListName::Projects => self.projects.len(),
            ListName::Experience => self.experience.len(),
        }
    }
}

/// A saved draft as returned by the API. Every save creates a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResume {
    pub id: Uuid,
    #[serde(flatten)]
    pub document: ResumeDraft,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Field addressing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListName {
    Education,
    Projects,
    Experience,
}

impl ListName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListName::Education => "education",
            ListName::Projects => "projects",
            ListName::Experience => "experience",
        }
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "education" => Ok(ListName::Education),
            "projects" => Ok(ListName::Projects),
            "experience" => Ok(ListName::Experience),
            other => Err(FormError::UnknownList(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Address,
    Linkedin,
}

impl FromStr for PersonalField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" => Ok(PersonalField::FullName),
            "email" => Ok(PersonalField::Email),
            "phone" => Ok(PersonalField::Phone),
            "address" => Ok(PersonalField::Address),
            "linkedin" => Ok(PersonalField::Linkedin),
            other => Err(unknown_field("personalInfo", other)),
        }
    }
}

/// A top-level field that is not part of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Personal(PersonalField),
    Summary,
}

impl ScalarField {
    /// Resolves a `(section, name)` pair as sent by a form, e.g.
    /// `("personalInfo", "email")` or `("summary", "summary")`.
    pub fn from_parts(section: &str, name: &str) -> Result<Self, FormError> {
        match section {
            "personalInfo" => name.parse().map(ScalarField::Personal),
            "summary" if name == "summary" => Ok(ScalarField::Summary),
            "summary" => Err(unknown_field("summary", name)),
            other => Err(unknown_field("draft", other)),
        }
    }
}

impl FromStr for ScalarField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "summary" {
            return Ok(ScalarField::Summary);
        }
        s.parse().map(ScalarField::Personal)
    }
}

impl PersonalInfo {
    pub fn set(&mut self, field: PersonalField, value: String) {
        let slot = match field {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Address => &mut self.address,
            PersonalField::Linkedin => &mut self.linkedin,
        };
        *slot = value;
    }
}

/// An entry type stored in one of the draft's positional lists.
pub trait ListEntry: Clone + Default {
    const LIST: ListName;

    /// Mutable access to a field by its wire name (`"jobTitle"`, `"gradYear"`, ...).
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let slot = self
            .field_mut(name)
            .ok_or_else(|| unknown_field(Self::LIST.as_str(), name))?;
        *slot = value;
        Ok(())
    }
}

impl ListEntry for EducationEntry {
    const LIST: ListName = ListName::Education;

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "degree" => Some(&mut self.degree),
            "school" => Some(&mut self.school),
            "gradYear" => Some(&mut self.grad_year),
            _ => None,
        }
    }
}

impl ListEntry for ProjectEntry {
    const LIST: ListName = ListName::Projects;

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "description" => Some(&mut self.description),
            "link" => Some(&mut self.link),
            _ => None,
        }
    }
}

impl ListEntry for ExperienceEntry {
    const LIST: ListName = ListName::Experience;

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "jobTitle" => Some(&mut self.job_title),
            "company" => Some(&mut self.company),
            "location" => Some(&mut self.location),
            "startDate" => Some(&mut self.start_date),
            "endDate" => Some(&mut self.end_date),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }
}

fn unknown_field(section: &str, field: &str) -> FormError {
    FormError::UnknownField {
        section: section.to_string(),
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_shape() {
        let draft = ResumeDraft::default();
        assert_eq!(draft.education.len(), 1);
        assert_eq!(draft.projects.len(), 1);
        assert!(draft.experience.is_empty());
        assert!(draft.skills.is_empty());
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let mut draft = ResumeDraft::default();
        draft.personal_info.full_name = "Ada Lovelace".to_string();
        draft.education[0].grad_year = "1835".to_string();

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["personalInfo"]["fullName"], "Ada Lovelace");
        assert_eq!(json["education"][0]["gradYear"], "1835");
        assert!(json["skills"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let draft: ResumeDraft =
            serde_json::from_str(r#"{"summary": "Builder", "skills": ["Go", "Go", " Rust "]}"#)
                .unwrap();
        assert_eq!(draft.summary, "Builder");
        assert_eq!(draft.education.len(), 1);
        assert_eq!(draft.skills.iter().collect::<Vec<_>>(), vec!["Go", "Rust"]);
    }

    #[test]
    fn test_scalar_field_parsing() {
        assert_eq!(
            ScalarField::from_parts("personalInfo", "linkedin").unwrap(),
            ScalarField::Personal(PersonalField::Linkedin)
        );
        assert_eq!("summary".parse::<ScalarField>().unwrap(), ScalarField::Summary);
        assert!(matches!(
            ScalarField::from_parts("personalInfo", "website"),
            Err(FormError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_summary_section_only_accepts_summary_name() {
        assert_eq!(
            ScalarField::from_parts("summary", "summary").unwrap(),
            ScalarField::Summary
        );
        assert_eq!(
            ScalarField::from_parts("summary", "headline"),
            Err(FormError::UnknownField {
                section: "summary".to_string(),
                field: "headline".to_string(),
            })
        );
    }

    #[test]
    fn test_list_entry_unknown_field() {
        let mut entry = ExperienceEntry::default();
        assert!(entry.set_field("jobTitle", "Engineer".to_string()).is_ok());
        assert_eq!(entry.job_title, "Engineer");
        assert_eq!(
            entry.set_field("salary", "lots".to_string()),
            Err(FormError::UnknownField {
                section: "experience".to_string(),
                field: "salary".to_string()
            })
        );
    }
}
