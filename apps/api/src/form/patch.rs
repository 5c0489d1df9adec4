//! Partial-update payloads for the form state store.
//!
//! A patch carries `Some` for every field the edit touched and `None` for
//! everything else; `apply` is a shallow merge: present fields overwrite,
//! absent fields are retained. Array-valued sub-fields are replaced
//! wholesale, never appended to. Record ids are not patchable.

use serde::Deserialize;

use crate::models::resume::{
    Certification, Education, Experience, PersonalInfo, Project, Skill, SkillLevel,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub objective: Option<String>,
}

impl PersonalInfoPatch {
    pub fn apply(self, target: &mut PersonalInfo) {
        if let Some(v) = self.full_name {
            target.full_name = v;
        }
        if let Some(v) = self.email {
            target.email = v;
        }
        if let Some(v) = self.phone {
            target.phone = v;
        }
        if let Some(v) = self.location {
            target.location = v;
        }
        if let Some(v) = self.summary {
            target.summary = v;
        }
        if let Some(v) = self.linkedin {
            target.linkedin = v;
        }
        if let Some(v) = self.github {
            target.github = v;
        }
        if let Some(v) = self.website {
            target.website = v;
        }
        if let Some(v) = self.objective {
            target.objective = Some(v);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub gpa: Option<String>,
    pub achievements: Option<Vec<String>>,
}

impl EducationPatch {
    pub fn apply(self, target: &mut Education) {
        if let Some(v) = self.institution {
            target.institution = v;
        }
        if let Some(v) = self.degree {
            target.degree = v;
        }
        if let Some(v) = self.field_of_study {
            target.field_of_study = v;
        }
        if let Some(v) = self.start_date {
            target.start_date = v;
        }
        if let Some(v) = self.end_date {
            target.end_date = v;
        }
        if let Some(v) = self.description {
            target.description = v;
        }
        if let Some(v) = self.gpa {
            target.gpa = Some(v);
        }
        if let Some(v) = self.achievements {
            target.achievements = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
}

impl ExperiencePatch {
    pub fn apply(self, target: &mut Experience) {
        if let Some(v) = self.company {
            target.company = v;
        }
        if let Some(v) = self.position {
            target.position = v;
        }
        if let Some(v) = self.location {
            target.location = v;
        }
        if let Some(v) = self.start_date {
            target.start_date = v;
        }
        if let Some(v) = self.end_date {
            target.end_date = v;
        }
        if let Some(v) = self.description {
            target.description = v;
        }
        if let Some(v) = self.achievements {
            target.achievements = v;
        }
        if let Some(v) = self.technologies {
            target.technologies = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub years_of_experience: Option<f32>,
}

impl SkillPatch {
    pub fn apply(self, target: &mut Skill) {
        if let Some(v) = self.name {
            target.name = v;
        }
        if let Some(v) = self.level {
            target.level = v;
        }
        if let Some(v) = self.category {
            target.category = v;
        }
        if let Some(v) = self.description {
            target.description = Some(v);
        }
        if let Some(v) = self.years_of_experience {
            target.years_of_experience = Some(v);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub url: Option<String>,
    pub demo_url: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub status: Option<String>,
    pub impact: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub highlights: Option<Vec<String>>,
}

impl ProjectPatch {
    pub fn apply(self, target: &mut Project) {
        if let Some(v) = self.title {
            target.title = v;
        }
        if let Some(v) = self.description {
            target.description = v;
        }
        if let Some(v) = self.start_date {
            target.start_date = v;
        }
        if let Some(v) = self.end_date {
            target.end_date = v;
        }
        if let Some(v) = self.technologies {
            target.technologies = v;
        }
        if let Some(v) = self.url {
            target.url = Some(v);
        }
        if let Some(v) = self.demo_url {
            target.demo_url = Some(v);
        }
        if let Some(v) = self.role {
            target.role = Some(v);
        }
        if let Some(v) = self.project_type {
            target.project_type = Some(v);
        }
        if let Some(v) = self.status {
            target.status = Some(v);
        }
        if let Some(v) = self.impact {
            target.impact = Some(v);
        }
        if let Some(v) = self.achievements {
            target.achievements = v;
        }
        if let Some(v) = self.highlights {
            target.highlights = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationPatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub credential_url: Option<String>,
    pub credential_id: Option<String>,
    pub expiry_date: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl CertificationPatch {
    pub fn apply(self, target: &mut Certification) {
        if let Some(v) = self.name {
            target.name = v;
        }
        if let Some(v) = self.issuer {
            target.issuer = v;
        }
        if let Some(v) = self.date {
            target.date = v;
        }
        if let Some(v) = self.description {
            target.description = v;
        }
        if let Some(v) = self.credential_url {
            target.credential_url = Some(v);
        }
        if let Some(v) = self.credential_id {
            target.credential_id = Some(v);
        }
        if let Some(v) = self.expiry_date {
            target.expiry_date = Some(v);
        }
        if let Some(v) = self.skills {
            target.skills = v;
        }
    }
}
