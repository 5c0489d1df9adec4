//! Edge validation for résumé fields.
//!
//! Validation lives outside the store: the report is informational, shown
//! inline next to fields, and never blocks an edit or a save. The store
//! accepts whatever the user typed; these rules describe what a finished
//! résumé should look like.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::models::resume::{ResumeDocument, SectionKind};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern")
});

/// E.164-like: optional +, no leading zero, at most 15 digits.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern"));

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$").expect("url pattern")
});

static GPA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-4]\.\d{1,2}$").expect("gpa pattern"));

/// One problem with one field, addressed by section, entry position, and
/// field name so the UI can attach it inline.
#[derive(Debug, Clone, Serialize)]
pub struct FieldIssue {
    pub section: SectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<FieldIssue>,
}

/// Validates the whole document and collects every issue.
pub fn validate_document(doc: &ResumeDocument) -> ValidationReport {
    let mut issues = Vec::new();

    personal_info(doc, &mut issues);
    education(doc, &mut issues);
    experience(doc, &mut issues);
    skills(doc, &mut issues);
    projects(doc, &mut issues);
    // Certifications carry no field constraints.

    ValidationReport {
        valid: issues.is_empty(),
        issues,
    }
}

struct Ctx<'a> {
    section: SectionKind,
    index: Option<usize>,
    issues: &'a mut Vec<FieldIssue>,
}

impl Ctx<'_> {
    fn push(&mut self, field: &'static str, message: String) {
        self.issues.push(FieldIssue {
            section: self.section,
            index: self.index,
            field,
            message,
        });
    }

    fn length(&mut self, field: &'static str, label: &str, value: &str, min: usize, max: usize) {
        let chars = value.chars().count();
        if chars < min {
            self.push(field, format!("{label} must be at least {min} characters"));
        } else if chars > max {
            self.push(field, format!("{label} must be less than {max} characters"));
        }
    }

    /// Same bounds, but only applied when the field is non-empty.
    fn optional_length(
        &mut self,
        field: &'static str,
        label: &str,
        value: &str,
        min: usize,
        max: usize,
    ) {
        if !value.is_empty() {
            self.length(field, label, value, min, max);
        }
    }

    fn date(&mut self, field: &'static str, label: &str, value: &str) {
        if value.is_empty() {
            self.push(field, format!("{label} is required"));
        } else if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            self.push(field, format!("Invalid {label}", label = label.to_lowercase()));
        }
    }

    fn optional_url(&mut self, field: &'static str, label: &str, value: &str) {
        if !value.is_empty() && !URL.is_match(value) {
            self.push(field, format!("Invalid {label} URL"));
        }
    }

    fn each(
        &mut self,
        field: &'static str,
        label: &str,
        values: &[String],
        min: usize,
        max: usize,
    ) {
        for value in values {
            let chars = value.chars().count();
            if chars < min {
                self.push(field, format!("{label} must be at least {min} characters"));
            } else if chars > max {
                self.push(field, format!("{label} must be less than {max} characters"));
            }
        }
    }
}

fn personal_info(doc: &ResumeDocument, issues: &mut Vec<FieldIssue>) {
    let info = &doc.personal_info;
    let mut ctx = Ctx {
        section: SectionKind::PersonalInfo,
        index: None,
        issues,
    };
    ctx.length("fullName", "Full name", &info.full_name, 2, 100);
    if !EMAIL.is_match(&info.email) {
        ctx.push("email", "Invalid email address".to_string());
    }
    if !PHONE.is_match(&info.phone) {
        ctx.push("phone", "Invalid phone number".to_string());
    }
    ctx.length("location", "Location", &info.location, 2, 100);
    ctx.length("summary", "Summary", &info.summary, 50, 500);
    ctx.optional_url("website", "website", &info.website);
    ctx.optional_url("linkedin", "LinkedIn", &info.linkedin);
    ctx.optional_url("github", "GitHub", &info.github);
    if let Some(objective) = &info.objective {
        ctx.optional_length("objective", "Objective", objective, 50, 500);
    }
}

fn education(doc: &ResumeDocument, issues: &mut Vec<FieldIssue>) {
    for (index, edu) in doc.education.iter().enumerate() {
        let mut ctx = Ctx {
            section: SectionKind::Education,
            index: Some(index),
            issues,
        };
        ctx.length("institution", "Institution name", &edu.institution, 2, 100);
        ctx.length("degree", "Degree", &edu.degree, 2, 100);
        ctx.length("fieldOfStudy", "Field of study", &edu.field_of_study, 2, 100);
        ctx.date("startDate", "Start date", &edu.start_date);
        ctx.date("endDate", "End date", &edu.end_date);
        if let Some(gpa) = &edu.gpa {
            if !gpa.is_empty() && !gpa_in_range(gpa) {
                ctx.push("gpa", "GPA must be between 0.00 and 4.00".to_string());
            }
        }
        ctx.optional_length("description", "Description", &edu.description, 0, 500);
    }
}

fn gpa_in_range(gpa: &str) -> bool {
    // Pattern admits 4.x; the numeric bound closes that gap.
    GPA.is_match(gpa) && gpa.parse::<f32>().is_ok_and(|v| v <= 4.0)
}

fn experience(doc: &ResumeDocument, issues: &mut Vec<FieldIssue>) {
    for (index, exp) in doc.experience.iter().enumerate() {
        let mut ctx = Ctx {
            section: SectionKind::Experience,
            index: Some(index),
            issues,
        };
        ctx.length("company", "Company name", &exp.company, 2, 100);
        ctx.length("position", "Position", &exp.position, 2, 100);
        ctx.length("location", "Location", &exp.location, 2, 100);
        ctx.date("startDate", "Start date", &exp.start_date);
        ctx.date("endDate", "End date", &exp.end_date);
        ctx.length("description", "Description", &exp.description, 50, 1000);
        ctx.each("achievements", "Achievement", &exp.achievements, 10, 200);
        ctx.each("technologies", "Technology", &exp.technologies, 2, 50);
    }
}

fn skills(doc: &ResumeDocument, issues: &mut Vec<FieldIssue>) {
    for (index, skill) in doc.skills.iter().enumerate() {
        let mut ctx = Ctx {
            section: SectionKind::Skills,
            index: Some(index),
            issues,
        };
        ctx.length("name", "Skill name", &skill.name, 2, 50);
        // Level is a closed enum; nothing to check.
        ctx.length("category", "Category", &skill.category, 2, 50);
        if let Some(description) = &skill.description {
            ctx.optional_length("description", "Description", description, 0, 200);
        }
    }
}

fn projects(doc: &ResumeDocument, issues: &mut Vec<FieldIssue>) {
    for (index, project) in doc.projects.iter().enumerate() {
        let mut ctx = Ctx {
            section: SectionKind::Projects,
            index: Some(index),
            issues,
        };
        ctx.length("title", "Project title", &project.title, 2, 100);
        ctx.length("description", "Description", &project.description, 50, 1000);
        ctx.date("startDate", "Start date", &project.start_date);
        ctx.date("endDate", "End date", &project.end_date);
        ctx.each("technologies", "Technology", &project.technologies, 2, 50);
        if let Some(url) = &project.url {
            ctx.optional_url("url", "repository", url);
        }
        if let Some(demo_url) = &project.demo_url {
            ctx.optional_url("demoUrl", "demo", demo_url);
        }
        if let Some(role) = &project.role {
            ctx.optional_length("role", "Project role", role, 2, 50);
        }
        if let Some(project_type) = &project.project_type {
            ctx.optional_length("type", "Project type", project_type, 2, 50);
        }
        if let Some(status) = &project.status {
            ctx.optional_length("status", "Project status", status, 2, 50);
        }
        ctx.each("highlights", "Highlight", &project.highlights, 10, 200);
        if let Some(impact) = &project.impact {
            ctx.optional_length("impact", "Impact description", impact, 0, 500);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, PersonalInfo, Skill};

    fn valid_personal_info() -> PersonalInfo {
        PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@analytical.engine.uk".to_string(),
            phone: "+442071234567".to_string(),
            location: "London".to_string(),
            summary: "Mathematician and writer, known for work on the Analytical \
                      Engine and the first published algorithm."
                .to_string(),
            ..PersonalInfo::default()
        }
    }

    fn issues_for(doc: &ResumeDocument, field: &str) -> Vec<String> {
        validate_document(doc)
            .issues
            .into_iter()
            .filter(|i| i.field == field)
            .map(|i| i.message)
            .collect()
    }

    #[test]
    fn test_complete_personal_info_passes() {
        let doc = ResumeDocument {
            personal_info: valid_personal_info(),
            ..ResumeDocument::default()
        };
        let report = validate_document(&doc);
        assert!(report.valid, "unexpected issues: {:?}", report.issues);
    }

    #[test]
    fn test_empty_document_reports_personal_info_issues() {
        let report = validate_document(&ResumeDocument::default());
        assert!(!report.valid);
        assert!(report
            .issues
            .iter()
            .all(|i| i.section == SectionKind::PersonalInfo));
    }

    #[test]
    fn test_email_shape() {
        let mut doc = ResumeDocument {
            personal_info: valid_personal_info(),
            ..ResumeDocument::default()
        };
        doc.personal_info.email = "not-an-email".to_string();
        assert_eq!(issues_for(&doc, "email"), vec!["Invalid email address"]);
    }

    #[test]
    fn test_phone_rejects_leading_zero_and_letters() {
        let mut doc = ResumeDocument {
            personal_info: valid_personal_info(),
            ..ResumeDocument::default()
        };
        for bad in ["0123456", "phone", "+0441234"] {
            doc.personal_info.phone = bad.to_string();
            assert!(!issues_for(&doc, "phone").is_empty(), "{bad} accepted");
        }
        doc.personal_info.phone = "14155552671".to_string();
        assert!(issues_for(&doc, "phone").is_empty());
    }

    #[test]
    fn test_optional_urls_only_checked_when_present() {
        let mut doc = ResumeDocument {
            personal_info: valid_personal_info(),
            ..ResumeDocument::default()
        };
        assert!(issues_for(&doc, "website").is_empty());

        doc.personal_info.website = "https://example.com/about".to_string();
        assert!(issues_for(&doc, "website").is_empty());

        doc.personal_info.website = "not a url".to_string();
        assert_eq!(issues_for(&doc, "website"), vec!["Invalid website URL"]);
    }

    #[test]
    fn test_education_dates_and_gpa() {
        let mut doc = ResumeDocument {
            personal_info: valid_personal_info(),
            education: vec![Education {
                institution: "University of London".to_string(),
                degree: "BSc".to_string(),
                field_of_study: "Mathematics".to_string(),
                start_date: "2015-09-01".to_string(),
                end_date: "2019-06-30".to_string(),
                gpa: Some("3.85".to_string()),
                ..Education::default()
            }],
            ..ResumeDocument::default()
        };
        assert!(validate_document(&doc).valid);

        doc.education[0].end_date = "June 2019".to_string();
        assert_eq!(issues_for(&doc, "endDate"), vec!["Invalid end date"]);

        doc.education[0].end_date = "2019-06-30".to_string();
        doc.education[0].gpa = Some("4.20".to_string());
        assert!(!issues_for(&doc, "gpa").is_empty());

        doc.education[0].gpa = Some("5.0".to_string());
        assert!(!issues_for(&doc, "gpa").is_empty());
    }

    #[test]
    fn test_missing_date_is_required() {
        let doc = ResumeDocument {
            personal_info: valid_personal_info(),
            education: vec![Education {
                institution: "University of London".to_string(),
                degree: "BSc".to_string(),
                field_of_study: "Mathematics".to_string(),
                end_date: "2019-06-30".to_string(),
                ..Education::default()
            }],
            ..ResumeDocument::default()
        };
        assert_eq!(issues_for(&doc, "startDate"), vec!["Start date is required"]);
    }

    #[test]
    fn test_experience_description_bounds() {
        let mut doc = ResumeDocument {
            personal_info: valid_personal_info(),
            experience: vec![Experience {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                location: "Remote".to_string(),
                start_date: "2020-01-01".to_string(),
                end_date: "2023-01-01".to_string(),
                description: "Too short".to_string(),
                ..Experience::default()
            }],
            ..ResumeDocument::default()
        };
        assert!(issues_for(&doc, "description")
            .iter()
            .any(|m| m.contains("at least 50")));

        doc.experience[0].description = "x".repeat(60);
        assert!(issues_for(&doc, "description").is_empty());
    }

    #[test]
    fn test_experience_sub_arrays_checked_per_item() {
        let doc = ResumeDocument {
            personal_info: valid_personal_info(),
            experience: vec![Experience {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                location: "Remote".to_string(),
                start_date: "2020-01-01".to_string(),
                end_date: "2023-01-01".to_string(),
                description: "x".repeat(60),
                achievements: vec!["too short".to_string(), "a".repeat(20)],
                technologies: vec!["C".to_string(), "Rust".to_string()],
                ..Experience::default()
            }],
            ..ResumeDocument::default()
        };
        let report = validate_document(&doc);
        let achievement_issues: Vec<_> = report
            .issues
            .iter()
            .filter(|i| i.field == "achievements")
            .collect();
        // "too short" is 9 chars; the 20-char one passes.
        assert_eq!(achievement_issues.len(), 1);
        let tech_issues: Vec<_> = report
            .issues
            .iter()
            .filter(|i| i.field == "technologies")
            .collect();
        // "C" is below the 2-char minimum.
        assert_eq!(tech_issues.len(), 1);
    }

    #[test]
    fn test_skill_bounds() {
        let doc = ResumeDocument {
            personal_info: valid_personal_info(),
            skills: vec![Skill {
                name: "R".to_string(),
                category: "Languages".to_string(),
                ..Skill::default()
            }],
            ..ResumeDocument::default()
        };
        assert!(!issues_for(&doc, "name").is_empty());
    }

    #[test]
    fn test_issue_addresses_carry_entry_index() {
        let doc = ResumeDocument {
            personal_info: valid_personal_info(),
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    category: "Languages".to_string(),
                    ..Skill::default()
                },
                Skill::default(),
            ],
            ..ResumeDocument::default()
        };
        let report = validate_document(&doc);
        assert!(report
            .issues
            .iter()
            .all(|i| i.section == SectionKind::Skills && i.index == Some(1)));
    }

    #[test]
    fn test_certifications_carry_no_constraints() {
        let doc = ResumeDocument {
            personal_info: valid_personal_info(),
            certifications: vec![Default::default()],
            ..ResumeDocument::default()
        };
        assert!(validate_document(&doc).valid);
    }
}
