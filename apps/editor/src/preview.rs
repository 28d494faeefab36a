//! Preview Renderer: a pure projection of a draft into a read-only document.
//!
//! Empty fields are replaced with fixed placeholders, except contact items and
//! project links, which are simply left out. Experience and Skills vanish
//! entirely when empty; Summary, Education and Projects always render.

use std::fmt;

use serde::Serialize;

use crate::draft::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeDraft};

pub mod placeholders {
    pub const FULL_NAME: &str = "YOUR NAME";
    pub const SUMMARY: &str = "Write a brief professional summary...";

    pub const JOB_TITLE: &str = "Job Title";
    pub const COMPANY: &str = "Company Name";
    pub const LOCATION: &str = "Location";
    pub const START_DATE: &str = "Start Date";
    pub const END_DATE: &str = "End Date";
    pub const EXPERIENCE_DESCRIPTION: &str = "Description of responsibilities and achievements.";

    pub const DEGREE: &str = "Degree / Field of Study";
    pub const GRAD_YEAR: &str = "Graduation Year";
    pub const SCHOOL: &str = "School / University";

    pub const PROJECT_NAME: &str = "Project Name";
    pub const PROJECT_DESCRIPTION: &str = "Project description...";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Address,
    Linkedin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceView {
    pub job_title: String,
    pub dates: String,
    pub company: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationView {
    pub degree: String,
    pub grad_year: String,
    pub school: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum SectionBody {
    Summary(String),
    Experience(Vec<ExperienceView>),
    Education(Vec<EducationView>),
    Projects(Vec<ProjectView>),
    Skills(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub header: Header,
    pub sections: Vec<Section>,
}

impl Preview {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

pub const SUMMARY_TITLE: &str = "Summary";
pub const EXPERIENCE_TITLE: &str = "Experience / Internships";
pub const EDUCATION_TITLE: &str = "Education";
pub const PROJECTS_TITLE: &str = "Projects";
pub const SKILLS_TITLE: &str = "Skills";

/// Renders `draft`. Never mutates it; equal drafts give equal previews.
pub fn render(draft: &ResumeDraft) -> Preview {
    let info = &draft.personal_info;
    let contacts = [
        (ContactKind::Email, &info.email),
        (ContactKind::Phone, &info.phone),
        (ContactKind::Address, &info.address),
        (ContactKind::Linkedin, &info.linkedin),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(kind, value)| Contact {
        kind,
        value: value.clone(),
    })
    .collect();

    let mut sections = vec![Section {
        title: SUMMARY_TITLE,
        body: SectionBody::Summary(or(&draft.summary, placeholders::SUMMARY)),
    }];

    if !draft.experience.is_empty() {
        sections.push(Section {
            title: EXPERIENCE_TITLE,
            body: SectionBody::Experience(draft.experience.iter().map(experience_view).collect()),
        });
    }

    sections.push(Section {
        title: EDUCATION_TITLE,
        body: SectionBody::Education(draft.education.iter().map(education_view).collect()),
    });

    sections.push(Section {
        title: PROJECTS_TITLE,
        body: SectionBody::Projects(draft.projects.iter().map(project_view).collect()),
    });

    if !draft.skills.is_empty() {
        sections.push(Section {
            title: SKILLS_TITLE,
            body: SectionBody::Skills(draft.skills.iter().map(String::from).collect()),
        });
    }

    Preview {
        header: Header {
            name: or(&info.full_name, placeholders::FULL_NAME),
            contacts,
        },
        sections,
    }
}

fn or(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn experience_view(exp: &ExperienceEntry) -> ExperienceView {
    ExperienceView {
        job_title: or(&exp.job_title, placeholders::JOB_TITLE),
        dates: format!(
            "{} - {}",
            or(&exp.start_date, placeholders::START_DATE),
            or(&exp.end_date, placeholders::END_DATE)
        ),
        company: or(&exp.company, placeholders::COMPANY),
        location: or(&exp.location, placeholders::LOCATION),
        description: or(&exp.description, placeholders::EXPERIENCE_DESCRIPTION),
    }
}

fn education_view(edu: &EducationEntry) -> EducationView {
    EducationView {
        degree: or(&edu.degree, placeholders::DEGREE),
        grad_year: or(&edu.grad_year, placeholders::GRAD_YEAR),
        school: or(&edu.school, placeholders::SCHOOL),
    }
}

fn project_view(proj: &ProjectEntry) -> ProjectView {
    ProjectView {
        name: or(&proj.name, placeholders::PROJECT_NAME),
        link: (!proj.link.is_empty()).then(|| proj.link.clone()),
        description: or(&proj.description, placeholders::PROJECT_DESCRIPTION),
    }
}

// Plain-text layout used for printing and export.
impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.name)?;
        if !self.header.contacts.is_empty() {
            let line: Vec<&str> = self
                .header
                .contacts
                .iter()
                .map(|c| c.value.as_str())
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
        }

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.title.to_uppercase())?;
            match &section.body {
                SectionBody::Summary(text) => writeln!(f, "{text}")?,
                SectionBody::Experience(items) => {
                    for exp in items {
                        writeln!(f, "{} ({})", exp.job_title, exp.dates)?;
                        writeln!(f, "{}, {}", exp.company, exp.location)?;
                        writeln!(f, "{}", exp.description)?;
                    }
                }
                SectionBody::Education(items) => {
                    for edu in items {
                        writeln!(f, "{} ({})", edu.degree, edu.grad_year)?;
                        writeln!(f, "{}", edu.school)?;
                    }
                }
                SectionBody::Projects(items) => {
                    for proj in items {
                        match &proj.link {
                            Some(link) => writeln!(f, "{} <{link}>", proj.name)?,
                            None => writeln!(f, "{}", proj.name)?,
                        }
                        writeln!(f, "{}", proj.description)?;
                    }
                }
                SectionBody::Skills(skills) => writeln!(f, "{}", skills.join(", "))?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(preview: &Preview) -> Vec<&'static str> {
        preview.sections.iter().map(|s| s.title).collect()
    }

    #[test]
    fn test_empty_name_uses_placeholder_and_contacts_are_omitted() {
        let preview = render(&ResumeDraft::default());
        assert_eq!(preview.header.name, "YOUR NAME");
        assert!(preview.header.contacts.is_empty());
        assert!(!preview.to_string().contains('|'));
    }

    #[test]
    fn test_each_contact_is_independently_omitted() {
        let mut draft = ResumeDraft::default();
        draft.personal_info.phone = "555-0100".to_string();
        draft.personal_info.linkedin = "linkedin.com/in/ada".to_string();

        let preview = render(&draft);
        let kinds: Vec<ContactKind> = preview.header.contacts.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ContactKind::Phone, ContactKind::Linkedin]);
    }

    #[test]
    fn test_default_draft_sections() {
        let preview = render(&ResumeDraft::default());
        assert_eq!(
            titles(&preview),
            vec![SUMMARY_TITLE, EDUCATION_TITLE, PROJECTS_TITLE]
        );

        let education = preview.section(EDUCATION_TITLE).unwrap();
        assert_eq!(
            education.body,
            SectionBody::Education(vec![EducationView {
                degree: placeholders::DEGREE.to_string(),
                grad_year: placeholders::GRAD_YEAR.to_string(),
                school: placeholders::SCHOOL.to_string(),
            }])
        );
    }

    #[test]
    fn test_experience_and_skills_appear_when_populated() {
        let mut draft = ResumeDraft::default();
        draft.experience.push(ExperienceEntry {
            company: "Acme".to_string(),
            ..Default::default()
        });
        draft.skills.insert("Rust");

        let preview = render(&draft);
        assert_eq!(
            titles(&preview),
            vec![
                SUMMARY_TITLE,
                EXPERIENCE_TITLE,
                EDUCATION_TITLE,
                PROJECTS_TITLE,
                SKILLS_TITLE
            ]
        );
        match &preview.section(EXPERIENCE_TITLE).unwrap().body {
            SectionBody::Experience(items) => {
                assert_eq!(items[0].company, "Acme");
                assert_eq!(items[0].job_title, placeholders::JOB_TITLE);
                assert_eq!(items[0].dates, "Start Date - End Date");
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_entry_views_serialize_camel_case() {
        let mut draft = ResumeDraft::default();
        draft.experience.push(ExperienceEntry {
            job_title: "Engineer".to_string(),
            ..Default::default()
        });
        draft.education[0].grad_year = "2024".to_string();

        let json = serde_json::to_value(render(&draft)).unwrap();
        let sections = json["sections"].as_array().unwrap();
        let experience = sections
            .iter()
            .find(|s| s["title"] == EXPERIENCE_TITLE)
            .unwrap();
        assert_eq!(experience["body"]["items"][0]["jobTitle"], "Engineer");
        assert!(experience["body"]["items"][0].get("job_title").is_none());

        let education = sections
            .iter()
            .find(|s| s["title"] == EDUCATION_TITLE)
            .unwrap();
        assert_eq!(education["body"]["items"][0]["gradYear"], "2024");
    }

    #[test]
    fn test_multiline_description_is_preserved() {
        let mut draft = ResumeDraft::default();
        draft.projects[0].description = "Line one\n\n  indented line two".to_string();
        draft.projects[0].link = "https://example.com".to_string();

        let preview = render(&draft);
        match &preview.section(PROJECTS_TITLE).unwrap().body {
            SectionBody::Projects(items) => {
                assert_eq!(items[0].description, "Line one\n\n  indented line two");
                assert_eq!(items[0].link.as_deref(), Some("https://example.com"));
                assert_eq!(items[0].name, placeholders::PROJECT_NAME);
            }
            other => panic!("unexpected body {other:?}"),
        }
        assert!(preview
            .to_string()
            .contains("Line one\n\n  indented line two\n"));
    }

    #[test]
    fn test_render_is_pure() {
        let mut draft = ResumeDraft::default();
        draft.personal_info.full_name = "Ada".to_string();
        let original = draft.clone();

        let first = render(&draft);
        let second = render(&draft);
        assert_eq!(first, second);
        assert_eq!(draft, original);

        draft.summary = "temporary".to_string();
        assert_ne!(render(&draft), first);
        draft.summary.clear();
        assert_eq!(render(&draft), first);
        assert_eq!(render(&draft).to_string(), first.to_string());
    }
}
