//! Template rendering layer.
//!
//! A template is a pure function `(document, section order) -> HTML string`:
//! no side effects, no dependence on mutable external state, equal inputs
//! produce equal output. The four templates are independent implementations
//! of one contract:
//!
//! - sections render strictly in the order given by `SectionOrder`;
//! - a section whose backing collection is empty produces no output at all
//!   (personal info is a singleton and always renders);
//! - absent optional fields render nothing, never a placeholder;
//! - every section body is wrapped in `<section data-section="...">`;
//! - all user-provided text is HTML-escaped.

use serde::Serialize;

use crate::form::order::SectionOrder;
use crate::models::resume::ResumeDocument;

pub mod classic;
pub mod creative;
pub mod modern;
pub mod professional;

/// The selectable visual templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Modern,
    Classic,
    Creative,
    Professional,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Modern,
        TemplateKind::Classic,
        TemplateKind::Creative,
        TemplateKind::Professional,
    ];

    /// Template selection is a lookup with a defined fallback: an unknown
    /// identifier selects the modern template, never an error.
    pub fn from_param(param: &str) -> Self {
        match param {
            "classic" => TemplateKind::Classic,
            "creative" => TemplateKind::Creative,
            "professional" => TemplateKind::Professional,
            _ => TemplateKind::Modern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
            TemplateKind::Creative => "creative",
            TemplateKind::Professional => "professional",
        }
    }
}

/// Renders the document through the selected template.
pub fn render_resume(kind: TemplateKind, doc: &ResumeDocument, order: &SectionOrder) -> String {
    match kind {
        TemplateKind::Modern => modern::render(doc, order),
        TemplateKind::Classic => classic::render(doc, order),
        TemplateKind::Creative => creative::render(doc, order),
        TemplateKind::Professional => professional::render(doc, order),
    }
}

/// Escapes user text for embedding in HTML body or attribute position.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        Certification, Education, Experience, PersonalInfo, Project, SectionKind, Skill,
    };

    fn full_document() -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@analytical.engine".to_string(),
                phone: "+4420719".to_string(),
                location: "London".to_string(),
                summary: "Pioneer of computing.".to_string(),
                ..PersonalInfo::default()
            },
            education: vec![Education {
                institution: "Home tutoring".to_string(),
                degree: "Mathematics".to_string(),
                ..Education::default()
            }],
            experience: vec![Experience {
                company: "Analytical Engine Project".to_string(),
                position: "Programmer".to_string(),
                description: "Wrote the first published algorithm.".to_string(),
                ..Experience::default()
            }],
            skills: vec![Skill {
                name: "Mathematics".to_string(),
                category: "Science".to_string(),
                ..Skill::default()
            }],
            projects: vec![Project {
                title: "Note G".to_string(),
                description: "Bernoulli number computation.".to_string(),
                ..Project::default()
            }],
            certifications: vec![Certification {
                name: "Royal Society mention".to_string(),
                issuer: "Royal Society".to_string(),
                ..Certification::default()
            }],
        }
    }

    fn marker(kind: SectionKind) -> String {
        format!("data-section=\"{}\"", kind.as_str())
    }

    #[test]
    fn test_unknown_template_falls_back_to_modern() {
        assert_eq!(TemplateKind::from_param("modern"), TemplateKind::Modern);
        assert_eq!(TemplateKind::from_param("classic"), TemplateKind::Classic);
        assert_eq!(TemplateKind::from_param("sparkly"), TemplateKind::Modern);
        assert_eq!(TemplateKind::from_param(""), TemplateKind::Modern);
    }

    #[test]
    fn test_all_templates_render_every_section_of_full_document() {
        let doc = full_document();
        let order = SectionOrder::default();
        for kind in TemplateKind::ALL {
            let html = render_resume(kind, &doc, &order);
            for section in SectionKind::ALL {
                assert!(
                    html.contains(&marker(section)),
                    "{} template missing {}",
                    kind.as_str(),
                    section.as_str()
                );
            }
        }
    }

    #[test]
    fn test_all_templates_skip_empty_sections() {
        let mut doc = full_document();
        doc.skills.clear();
        doc.certifications.clear();
        let order = SectionOrder::default();

        for kind in TemplateKind::ALL {
            let html = render_resume(kind, &doc, &order);
            assert!(
                !html.contains(&marker(SectionKind::Skills)),
                "{} rendered empty skills",
                kind.as_str()
            );
            assert!(
                !html.contains(&marker(SectionKind::Certifications)),
                "{} rendered empty certifications",
                kind.as_str()
            );
        }
    }

    #[test]
    fn test_all_templates_always_render_personal_info() {
        let doc = ResumeDocument::default();
        let order = SectionOrder::default();
        for kind in TemplateKind::ALL {
            let html = render_resume(kind, &doc, &order);
            assert!(
                html.contains(&marker(SectionKind::PersonalInfo)),
                "{} skipped personal info",
                kind.as_str()
            );
        }
    }

    #[test]
    fn test_all_templates_honor_section_order() {
        let doc = full_document();
        let mut order = SectionOrder::default();
        // Move skills ahead of education, then certifications to the front
        // of the non-header sections.
        order.move_section(SectionKind::Skills, SectionKind::Education);
        order.move_section(SectionKind::Certifications, SectionKind::Experience);

        for template in TemplateKind::ALL {
            let html = render_resume(template, &doc, &order);
            let positions: Vec<usize> = order
                .as_slice()
                .iter()
                .map(|section| {
                    html.find(&marker(*section)).unwrap_or_else(|| {
                        panic!("{} missing {}", template.as_str(), section.as_str())
                    })
                })
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(
                positions,
                sorted,
                "{} rendered sections out of order",
                template.as_str()
            );
        }
    }

    #[test]
    fn test_all_templates_escape_user_text() {
        let mut doc = full_document();
        doc.personal_info.full_name = "<script>alert('x')</script>".to_string();
        let order = SectionOrder::default();

        for kind in TemplateKind::ALL {
            let html = render_resume(kind, &doc, &order);
            assert!(
                !html.contains("<script>alert"),
                "{} emitted raw user markup",
                kind.as_str()
            );
            assert!(html.contains("&lt;script&gt;"));
        }
    }

    #[test]
    fn test_rendering_is_pure() {
        let doc = full_document();
        let order = SectionOrder::default();
        for kind in TemplateKind::ALL {
            let first = render_resume(kind, &doc, &order);
            let second = render_resume(kind, &doc, &order);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_escape_handles_all_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">&'b'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;b&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }
}
