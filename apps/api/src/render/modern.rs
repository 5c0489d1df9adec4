//! Modern template: centered header, sans-serif, underlined section
//! headings, dates right-aligned against the entry titles.

use crate::form::order::SectionOrder;
use crate::models::resume::{ResumeDocument, SectionKind};
use crate::render::escape;

const STYLE: &str = "\
body{font-family:'Helvetica Neue',Arial,sans-serif;color:#1f2937;margin:0;padding:40px 48px;}\
header{text-align:center;margin-bottom:28px;}\
h1{font-size:28px;margin:0 0 4px;}\
.contact{color:#4b5563;font-size:13px;}\
.contact span+span::before{content:'  \\2022  ';}\
.links{font-size:13px;color:#2563eb;margin-top:4px;}\
.summary{margin-top:12px;font-size:14px;}\
h2{font-size:18px;border-bottom:2px solid #d1d5db;padding-bottom:4px;margin:24px 0 12px;}\
.entry{margin-bottom:16px;}\
.row{display:flex;justify-content:space-between;align-items:baseline;}\
.title{font-size:15px;font-weight:600;}\
.subtitle{color:#4b5563;font-size:13px;}\
.dates{color:#6b7280;font-size:12px;white-space:nowrap;}\
.desc{font-size:13px;margin:6px 0 0;}\
ul{margin:6px 0 0;padding-left:18px;font-size:13px;}\
.tech{color:#4b5563;font-size:12px;margin-top:4px;}\
.skill-grid{display:flex;flex-wrap:wrap;gap:8px;}\
.skill{background:#f3f4f6;border-radius:4px;padding:4px 10px;font-size:13px;}";

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

fn date_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => escape(start),
        (true, false) => escape(end),
        (false, false) => format!("{} - {}", escape(start), escape(end)),
    }
}

fn personal_info(html: &mut String, doc: &ResumeDocument) {
    let info = &doc.personal_info;
    html.push_str("<section data-section=\"personalInfo\"><header>");
    if !info.full_name.is_empty() {
        html.push_str(&format!("<h1>{}</h1>", escape(&info.full_name)));
    }
    let contact: Vec<&String> = [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect();
    if !contact.is_empty() {
        html.push_str("<div class=\"contact\">");
        for item in contact {
            html.push_str(&format!("<span>{}</span>", escape(item)));
        }
        html.push_str("</div>");
    }
    let links: Vec<&String> = [&info.website, &info.linkedin, &info.github]
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect();
    if !links.is_empty() {
        html.push_str("<div class=\"links\">");
        for link in links {
            html.push_str(&format!("<span>{}</span> ", escape(link)));
        }
        html.push_str("</div>");
    }
    if !info.summary.is_empty() {
        html.push_str(&format!("<p class=\"summary\">{}</p>", escape(&info.summary)));
    }
    html.push_str("</header></section>");
}

fn experience(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"experience\"><h2>Professional Experience</h2>");
    for exp in &doc.experience {
        html.push_str("<div class=\"entry\"><div class=\"row\"><div>");
        if !exp.position.is_empty() {
            html.push_str(&format!("<div class=\"title\">{}</div>", escape(&exp.position)));
        }
        if !exp.company.is_empty() {
            html.push_str(&format!("<div class=\"subtitle\">{}</div>", escape(&exp.company)));
        }
        if !exp.location.is_empty() {
            html.push_str(&format!("<div class=\"subtitle\">{}</div>", escape(&exp.location)));
        }
        html.push_str("</div>");
        let dates = date_range(&exp.start_date, &exp.end_date);
        if !dates.is_empty() {
            html.push_str(&format!("<div class=\"dates\">{dates}</div>"));
        }
        html.push_str("</div>");
        if !exp.description.is_empty() {
            html.push_str(&format!("<p class=\"desc\">{}</p>", escape(&exp.description)));
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
            html.push_str(&format!("<div class=\"tech\">Technologies: {joined}</div>"));
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
}

fn education(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"education\"><h2>Education</h2>");
    for edu in &doc.education {
        html.push_str("<div class=\"entry\"><div class=\"row\"><div>");
        if !edu.degree.is_empty() {
            html.push_str(&format!("<div class=\"title\">{}</div>", escape(&edu.degree)));
        }
        if !edu.institution.is_empty() {
            html.push_str(&format!(
                "<div class=\"subtitle\">{}</div>",
                escape(&edu.institution)
            ));
        }
        if !edu.field_of_study.is_empty() {
            html.push_str(&format!(
                "<div class=\"subtitle\">{}</div>",
                escape(&edu.field_of_study)
            ));
        }
        html.push_str("</div><div class=\"dates\">");
        html.push_str(&date_range(&edu.start_date, &edu.end_date));
        if let Some(gpa) = &edu.gpa {
            if !gpa.is_empty() {
                html.push_str(&format!("<div>GPA: {}</div>", escape(gpa)));
            }
        }
        html.push_str("</div></div>");
        if !edu.description.is_empty() {
            html.push_str(&format!("<p class=\"desc\">{}</p>", escape(&edu.description)));
        }
        if !edu.achievements.is_empty() {
            html.push_str("<ul>");
            for item in &edu.achievements {
                html.push_str(&format!("<li>{}</li>", escape(item)));
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
}

fn skills(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"skills\"><h2>Skills</h2><div class=\"skill-grid\">");
    for skill in &doc.skills {
        html.push_str("<div class=\"skill\">");
        html.push_str(&escape(&skill.name));
        html.push_str(&format!(
            " <span class=\"subtitle\">({})</span>",
            skill.level.as_str()
        ));
        html.push_str("</div>");
    }
    html.push_str("</div></section>");
}

fn projects(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"projects\"><h2>Projects</h2>");
    for project in &doc.projects {
        html.push_str("<div class=\"entry\"><div class=\"row\"><div>");
        if !project.title.is_empty() {
            html.push_str(&format!("<div class=\"title\">{}</div>", escape(&project.title)));
        }
        if let Some(role) = &project.role {
            if !role.is_empty() {
                html.push_str(&format!("<div class=\"subtitle\">{}</div>", escape(role)));
            }
        }
        html.push_str("</div>");
        let dates = date_range(&project.start_date, &project.end_date);
        if !dates.is_empty() {
            html.push_str(&format!("<div class=\"dates\">{dates}</div>"));
        }
        html.push_str("</div>");
        if !project.description.is_empty() {
            html.push_str(&format!(
                "<p class=\"desc\">{}</p>",
                escape(&project.description)
            ));
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
            html.push_str(&format!("<div class=\"tech\">Technologies: {joined}</div>"));
        }
        if let Some(url) = &project.url {
            if !url.is_empty() {
                html.push_str(&format!("<div class=\"tech\">{}</div>", escape(url)));
            }
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
}

fn certifications(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"certifications\"><h2>Certifications</h2>");
    for cert in &doc.certifications {
        html.push_str("<div class=\"entry\"><div class=\"row\"><div>");
        if !cert.name.is_empty() {
            html.push_str(&format!("<div class=\"title\">{}</div>", escape(&cert.name)));
        }
        if !cert.issuer.is_empty() {
            html.push_str(&format!("<div class=\"subtitle\">{}</div>", escape(&cert.issuer)));
        }
        html.push_str("</div>");
        if !cert.date.is_empty() {
            html.push_str(&format!("<div class=\"dates\">{}</div>", escape(&cert.date)));
        }
        html.push_str("</div>");
        if !cert.description.is_empty() {
            html.push_str(&format!("<p class=\"desc\">{}</p>", escape(&cert.description)));
        }
        if !cert.skills.is_empty() {
            let joined = cert
                .skills
                .iter()
                .map(|s| escape(s))
                .collect::<Vec<_>>()
                .join(", ");
            html.push_str(&format!("<div class=\"tech\">Skills: {joined}</div>"));
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, PersonalInfo};

    #[test]
    fn test_header_renders_contact_line() {
        let doc = ResumeDocument {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                location: "London".to_string(),
                ..PersonalInfo::default()
            },
            ..ResumeDocument::default()
        };
        let html = render(&doc, &SectionOrder::default());
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("London"));
    }

    #[test]
    fn test_absent_optional_fields_render_nothing() {
        let doc = ResumeDocument {
            experience: vec![Experience {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                ..Experience::default()
            }],
            ..ResumeDocument::default()
        };
        let html = render(&doc, &SectionOrder::default());
        assert!(!html.contains("Technologies:"));
        assert!(!html.contains("undefined"));
        assert!(!html.contains("<ul>"));
    }
}
