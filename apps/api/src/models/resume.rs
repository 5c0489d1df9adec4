//! Entity model for the résumé document.
//!
//! The wire format is camelCase JSON, matching the shape persisted by the
//! document store. Every field carries a serde default so a partially-shaped
//! document (older saves, hand-edited exports) deserializes into a complete
//! value: absent strings become empty, absent collections become empty
//! sequences, and records missing a stable id are backfilled with a fresh one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The six résumé sections, in their default display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    PersonalInfo,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl SectionKind {
    /// Default display order: personal info first, certifications last.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::PersonalInfo,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Certifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::PersonalInfo => "personalInfo",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
        }
    }

    /// Resolves a section identifier from its wire name. Unknown identifiers
    /// return `None`; reorder gestures carrying one are dropped as no-ops.
    pub fn from_param(param: &str) -> Option<Self> {
        SectionKind::ALL.into_iter().find(|k| k.as_str() == param)
    }
}

/// The five record collections a user can add entries to.
/// `personalInfo` is a singleton, not a collection, so it is not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
}

impl CollectionKind {
    /// Resolves a URL path segment to a collection. Unknown segments are a
    /// routing-level not-found, never a store no-op.
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "education" => Some(CollectionKind::Education),
            "experience" => Some(CollectionKind::Experience),
            "skills" => Some(CollectionKind::Skills),
            "projects" => Some(CollectionKind::Projects),
            "certifications" => Some(CollectionKind::Certifications),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Education => "education",
            CollectionKind::Experience => "experience",
            CollectionKind::Skills => "skills",
            CollectionKind::Projects => "projects",
            CollectionKind::Certifications => "certifications",
        }
    }
}

/// Singleton header block. Always present on a document; fields are never
/// null; an unfilled field is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
}

/// Skill proficiency. `Beginner` is the default for newly added entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: SkillLevel,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

// Records get a fresh id at creation, so `Default` is the documented
// "empty record" used by the add-entry operations. The id is the only
// non-empty field.

impl Default for Education {
    fn default() -> Self {
        Education {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            field_of_study: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
            gpa: None,
            achievements: Vec::new(),
        }
    }
}

impl Default for Experience {
    fn default() -> Self {
        Experience {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
            achievements: Vec::new(),
            technologies: Vec::new(),
        }
    }
}

impl Default for Skill {
    fn default() -> Self {
        Skill {
            id: Uuid::new_v4(),
            name: String::new(),
            level: SkillLevel::Beginner,
            category: String::new(),
            description: None,
            years_of_experience: None,
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Project {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            technologies: Vec::new(),
            url: None,
            demo_url: None,
            role: None,
            project_type: None,
            status: None,
            impact: None,
            achievements: Vec::new(),
            highlights: Vec::new(),
        }
    }
}

impl Default for Certification {
    fn default() -> Self {
        Certification {
            id: Uuid::new_v4(),
            name: String::new(),
            issuer: String::new(),
            date: String::new(),
            description: String::new(),
            credential_url: None,
            credential_id: None,
            expiry_date: None,
            skills: Vec::new(),
        }
    }
}

/// The aggregate document. Every collection is always a sequence (possibly
/// empty) after deserialization or any store operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
}

impl ResumeDocument {
    /// True when the collection backing `kind` has no entries.
    /// `personalInfo` is a singleton and is never considered empty.
    pub fn section_is_empty(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::PersonalInfo => false,
            SectionKind::Education => self.education.is_empty(),
            SectionKind::Experience => self.experience.is_empty(),
            SectionKind::Skills => self.skills.is_empty(),
            SectionKind::Projects => self.projects.is_empty(),
            SectionKind::Certifications => self.certifications.is_empty(),
        }
    }

    /// Current position of the record with the given id, if it still exists.
    /// Identity is stable across reorders; position is not.
    pub fn position_of(&self, kind: CollectionKind, id: Uuid) -> Option<usize> {
        match kind {
            CollectionKind::Education => self.education.iter().position(|r| r.id == id),
            CollectionKind::Experience => self.experience.iter().position(|r| r.id == id),
            CollectionKind::Skills => self.skills.iter().position(|r| r.id == id),
            CollectionKind::Projects => self.projects.iter().position(|r| r.id == id),
            CollectionKind::Certifications => self.certifications.iter().position(|r| r.id == id),
        }
    }
}
