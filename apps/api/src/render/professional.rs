//! Professional template: compact two-column rows with a left meta column
//! for dates, small-caps headings, thin rules between entries.

use crate::form::order::SectionOrder;
use crate::models::resume::{ResumeDocument, SectionKind};
use crate::render::escape;

const STYLE: &str = "\
body{font-family:Calibri,'Trebuchet MS',sans-serif;color:#1e293b;margin:0;padding:36px 44px;font-size:13px;}\
header{margin-bottom:18px;}\
h1{font-size:24px;margin:0;color:#0f172a;}\
.contact{font-size:12px;color:#475569;margin-top:4px;}\
.summary{margin-top:8px;}\
h2{font-size:13px;font-variant:small-caps;letter-spacing:1px;color:#0f172a;border-bottom:1px solid #cbd5e1;margin:18px 0 8px;padding-bottom:2px;}\
.row{display:flex;margin-bottom:10px;border-bottom:1px dotted #e2e8f0;padding-bottom:8px;}\
.row:last-child{border-bottom:none;}\
.meta{flex:0 0 120px;color:#64748b;font-size:12px;}\
.body{flex:1;}\
.title{font-weight:bold;}\
.subtitle{color:#475569;font-size:12px;}\
ul{margin:4px 0 0;padding-left:16px;}\
.note{font-size:12px;color:#475569;margin-top:3px;}";

pub fn render(doc: &ResumeDocument, order: &SectionOrder) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>");

    for kind in order.as_slice() {
        if doc.section_is_empty(*kind) {
            continue;
        }
        match kind {
            SectionKind::PersonalInfo => personal_info(&mut html, doc),
            SectionKind::Experience => experience(&mut html, doc),
            SectionKind::Education => education(&mut html, doc),
            SectionKind::Skills => skills(&mut html, doc),
            SectionKind::Projects => projects(&mut html, doc),
            SectionKind::Certifications => certifications(&mut html, doc),
        }
    }

    html.push_str("</body></html>");
    html
}

fn meta_dates(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => escape(start),
        (true, false) => escape(end),
        (false, false) => format!("{}<br>{}", escape(start), escape(end)),
    }
}

fn personal_info(html: &mut String, doc: &ResumeDocument) {
    let info = &doc.personal_info;
    html.push_str("<section data-section=\"personalInfo\"><header>");
    if !info.full_name.is_empty() {
        html.push_str(&format!("<h1>{}</h1>", escape(&info.full_name)));
    }
    let mut contact: Vec<String> = Vec::new();
    for value in [
        &info.email,
        &info.phone,
        &info.location,
        &info.website,
        &info.linkedin,
        &info.github,
    ] {
        if !value.is_empty() {
            contact.push(escape(value));
        }
    }
    if !contact.is_empty() {
        html.push_str(&format!(
            "<div class=\"contact\">{}</div>",
            contact.join(" \u{00b7} ")
        ));
    }
    if !info.summary.is_empty() {
        html.push_str(&format!("<p class=\"summary\">{}</p>", escape(&info.summary)));
    }
    html.push_str("</header></section>");
}

fn open_row(html: &mut String, meta: &str) {
    html.push_str("<div class=\"row\"><div class=\"meta\">");
    html.push_str(meta);
    html.push_str("</div><div class=\"body\">");
}

fn close_row(html: &mut String) {
    html.push_str("</div></div>");
}

fn experience(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"experience\"><h2>Experience</h2>");
    for exp in &doc.experience {
        open_row(html, &meta_dates(&exp.start_date, &exp.end_date));
        html.push_str("<div class=\"title\">");
        html.push_str(&escape(&exp.position));
        html.push_str("</div>");
        let mut subtitle: Vec<String> = Vec::new();
        if !exp.company.is_empty() {
            subtitle.push(escape(&exp.company));
        }
        if !exp.location.is_empty() {
            subtitle.push(escape(&exp.location));
        }
        if !subtitle.is_empty() {
            html.push_str(&format!(
                "<div class=\"subtitle\">{}</div>",
                subtitle.join(", ")
            ));
        }
        if !exp.description.is_empty() {
            html.push_str(&format!("<div>{}</div>", escape(&exp.description)));
        }
        if !exp.achievements.is_empty() {
            html.push_str("<ul>");
            for item in &exp.achievements {
                html.push_str(&format!("<li>{}</li>", escape(item)));
            }
            html.push_str("</ul>");
        }
        if !exp.technologies.is_empty() {
            let joined = exp
                .technologies
                .iter()
                .map(|t| escape(t))
                .collect::<Vec<_>>()
                .join(", ");
            html.push_str(&format!("<div class=\"note\">Stack: {joined}</div>"));
        }
        close_row(html);
    }
    html.push_str("</section>");
}

fn education(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"education\"><h2>Education</h2>");
    for edu in &doc.education {
        open_row(html, &meta_dates(&edu.start_date, &edu.end_date));
        html.push_str("<div class=\"title\">");
        html.push_str(&escape(&edu.degree));
        html.push_str("</div>");
        let mut subtitle: Vec<String> = Vec::new();
        if !edu.institution.is_empty() {
            subtitle.push(escape(&edu.institution));
        }
        if !edu.field_of_study.is_empty() {
            subtitle.push(escape(&edu.field_of_study));
        }
        if !subtitle.is_empty() {
            html.push_str(&format!(
                "<div class=\"subtitle\">{}</div>",
                subtitle.join(", ")
            ));
        }
        if let Some(gpa) = &edu.gpa {
            if !gpa.is_empty() {
                html.push_str(&format!("<div class=\"note\">GPA: {}</div>", escape(gpa)));
            }
        }
        if !edu.description.is_empty() {
            html.push_str(&format!("<div>{}</div>", escape(&edu.description)));
        }
        close_row(html);
    }
    html.push_str("</section>");
}

fn skills(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"skills\"><h2>Skills</h2>");
    // Group by category so related skills share a row.
    let mut categories: Vec<&str> = Vec::new();
    for skill in &doc.skills {
        let category = skill.category.as_str();
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    for category in categories {
        let label = if category.is_empty() { "General" } else { category };
        open_row(html, &escape(label));
        let joined = doc
            .skills
            .iter()
            .filter(|s| s.category == category)
            .map(|s| format!("{} ({})", escape(&s.name), s.level.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        html.push_str(&format!("<div>{joined}</div>"));
        close_row(html);
    }
    html.push_str("</section>");
}

fn projects(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"projects\"><h2>Projects</h2>");
    for project in &doc.projects {
        open_row(html, &meta_dates(&project.start_date, &project.end_date));
        html.push_str("<div class=\"title\">");
        html.push_str(&escape(&project.title));
        html.push_str("</div>");
        if let Some(status) = &project.status {
            if !status.is_empty() {
                html.push_str(&format!("<div class=\"subtitle\">{}</div>", escape(status)));
            }
        }
        if !project.description.is_empty() {
            html.push_str(&format!("<div>{}</div>", escape(&project.description)));
        }
        if !project.highlights.is_empty() {
            html.push_str("<ul>");
            for item in &project.highlights {
                html.push_str(&format!("<li>{}</li>", escape(item)));
            }
            html.push_str("</ul>");
        }
        if !project.technologies.is_empty() {
            let joined = project
                .technologies
                .iter()
                .map(|t| escape(t))
                .collect::<Vec<_>>()
                .join(", ");
            html.push_str(&format!("<div class=\"note\">Stack: {joined}</div>"));
        }
        close_row(html);
    }
    html.push_str("</section>");
}

fn certifications(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"certifications\"><h2>Certifications</h2>");
    for cert in &doc.certifications {
        let meta = if cert.date.is_empty() {
            String::new()
        } else {
            escape(&cert.date)
        };
        open_row(html, &meta);
        html.push_str("<div class=\"title\">");
        html.push_str(&escape(&cert.name));
        html.push_str("</div>");
        if !cert.issuer.is_empty() {
            html.push_str(&format!("<div class=\"subtitle\">{}</div>", escape(&cert.issuer)));
        }
        if let Some(credential_id) = &cert.credential_id {
            if !credential_id.is_empty() {
                html.push_str(&format!(
                    "<div class=\"note\">Credential {}</div>",
                    escape(credential_id)
                ));
            }
        }
        close_row(html);
    }
    html.push_str("</section>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Skill, SkillLevel};

    #[test]
    fn test_skills_grouped_by_category() {
        let doc = ResumeDocument {
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    category: "Languages".to_string(),
                    level: SkillLevel::Expert,
                    ..Skill::default()
                },
                Skill {
                    name: "Go".to_string(),
                    category: "Languages".to_string(),
                    ..Skill::default()
                },
                Skill {
                    name: "Postgres".to_string(),
                    category: "Data".to_string(),
                    ..Skill::default()
                },
            ],
            ..ResumeDocument::default()
        };
        let html = render(&doc, &SectionOrder::default());
        assert!(html.contains("Rust (Expert), Go (Beginner)"));
        assert!(html.contains("Postgres (Beginner)"));
        // Two category rows, not three skill rows.
        assert_eq!(html.matches("Languages").count(), 1);
    }

    #[test]
    fn test_uncategorized_skills_fall_under_general() {
        let doc = ResumeDocument {
            skills: vec![Skill {
                name: "Juggling".to_string(),
                ..Skill::default()
            }],
            ..ResumeDocument::default()
        };
        let html = render(&doc, &SectionOrder::default());
        assert!(html.contains("General"));
        assert!(html.contains("Juggling"));
    }
}
