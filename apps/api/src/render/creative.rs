//! Creative template: full-width accent header band, card-style entries,
//! skill pills with proficiency, an accent bar beside section headings.

use crate::form::order::SectionOrder;
use crate::models::resume::{ResumeDocument, SectionKind};
use crate::render::escape;

const STYLE: &str = "\
body{font-family:'Segoe UI',Verdana,sans-serif;color:#27272a;margin:0;}\
.band{background:#7c3aed;color:#fff;padding:36px 48px;}\
.band h1{font-size:30px;margin:0 0 6px;}\
.band .contact{font-size:13px;opacity:.9;}\
.band .summary{margin-top:12px;font-size:14px;max-width:640px;}\
main{padding:28px 48px;}\
h2{font-size:17px;color:#7c3aed;margin:26px 0 12px;display:flex;align-items:center;}\
h2::before{content:'';display:inline-block;width:18px;height:4px;background:#7c3aed;margin-right:8px;}\
.card{background:#fafafa;border-left:3px solid #7c3aed;border-radius:4px;padding:12px 16px;margin-bottom:12px;}\
.title{font-weight:600;font-size:15px;}\
.subtitle{font-size:13px;color:#52525b;}\
.dates{font-size:12px;color:#a1a1aa;}\
.desc{font-size:13px;margin:6px 0 0;}\
ul{margin:6px 0 0;padding-left:18px;font-size:13px;}\
.pills{display:flex;flex-wrap:wrap;gap:8px;}\
.pill{background:#ede9fe;color:#5b21b6;border-radius:999px;padding:5px 12px;font-size:12px;}\
.tags{font-size:12px;color:#52525b;margin-top:6px;}";

pub fn render(doc: &ResumeDocument, order: &SectionOrder) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>");

    // The header band sits outside <main> so the accent color bleeds to the
    // page edge; remaining sections flow inside it. Order is still honored:
    // the band is emitted when the loop reaches personalInfo.
    let mut in_main = false;
    for kind in order.as_slice() {
        if doc.section_is_empty(*kind) {
            continue;
        }
        if *kind == SectionKind::PersonalInfo {
            if in_main {
                html.push_str("</main>");
                in_main = false;
            }
            personal_info(&mut html, doc);
            continue;
        }
        if !in_main {
            html.push_str("<main>");
            in_main = true;
        }
        match kind {
            SectionKind::PersonalInfo => unreachable!("handled above"),
            SectionKind::Experience => experience(&mut html, doc),
            SectionKind::Education => education(&mut html, doc),
            SectionKind::Skills => skills(&mut html, doc),
            SectionKind::Projects => projects(&mut html, doc),
            SectionKind::Certifications => certifications(&mut html, doc),
        }
    }
    if in_main {
        html.push_str("</main>");
    }

    html.push_str("</body></html>");
    html
}

fn dates(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => escape(start),
        (true, false) => escape(end),
        (false, false) => format!("{} \u{2013} {}", escape(start), escape(end)),
    }
}

fn personal_info(html: &mut String, doc: &ResumeDocument) {
    let info = &doc.personal_info;
    html.push_str("<section data-section=\"personalInfo\"><div class=\"band\">");
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
            contact.join(" \u{2022} ")
        ));
    }
    if !info.summary.is_empty() {
        html.push_str(&format!("<p class=\"summary\">{}</p>", escape(&info.summary)));
    }
    html.push_str("</div></section>");
}

fn entry_card(
    html: &mut String,
    title: &str,
    subtitle: &str,
    date_line: &str,
    description: &str,
    bullets: &[String],
    tags: &[String],
) {
    html.push_str("<div class=\"card\">");
    if !title.is_empty() {
        html.push_str(&format!("<div class=\"title\">{}</div>", escape(title)));
    }
    if !subtitle.is_empty() {
        html.push_str(&format!("<div class=\"subtitle\">{}</div>", escape(subtitle)));
    }
    if !date_line.is_empty() {
        html.push_str(&format!("<div class=\"dates\">{date_line}</div>"));
    }
    if !description.is_empty() {
        html.push_str(&format!("<p class=\"desc\">{}</p>", escape(description)));
    }
    if !bullets.is_empty() {
        html.push_str("<ul>");
        for item in bullets {
            html.push_str(&format!("<li>{}</li>", escape(item)));
        }
        html.push_str("</ul>");
    }
    if !tags.is_empty() {
        let joined = tags.iter().map(|t| escape(t)).collect::<Vec<_>>().join(" / ");
        html.push_str(&format!("<div class=\"tags\">{joined}</div>"));
    }
    html.push_str("</div>");
}

fn experience(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"experience\"><h2>Where I Worked</h2>");
    for exp in &doc.experience {
        let subtitle = if exp.location.is_empty() {
            exp.company.clone()
        } else if exp.company.is_empty() {
            exp.location.clone()
        } else {
            format!("{}, {}", exp.company, exp.location)
        };
        entry_card(
            html,
            &exp.position,
            &subtitle,
            &dates(&exp.start_date, &exp.end_date),
            &exp.description,
            &exp.achievements,
            &exp.technologies,
        );
    }
    html.push_str("</section>");
}

fn education(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"education\"><h2>Where I Studied</h2>");
    for edu in &doc.education {
        let subtitle = if edu.field_of_study.is_empty() {
            edu.institution.clone()
        } else if edu.institution.is_empty() {
            edu.field_of_study.clone()
        } else {
            format!("{}, {}", edu.field_of_study, edu.institution)
        };
        let mut date_line = dates(&edu.start_date, &edu.end_date);
        if let Some(gpa) = &edu.gpa {
            if !gpa.is_empty() {
                if !date_line.is_empty() {
                    date_line.push_str(" \u{2022} ");
                }
                date_line.push_str(&format!("GPA {}", escape(gpa)));
            }
        }
        entry_card(
            html,
            &edu.degree,
            &subtitle,
            &date_line,
            &edu.description,
            &edu.achievements,
            &[],
        );
    }
    html.push_str("</section>");
}

fn skills(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"skills\"><h2>What I Know</h2><div class=\"pills\">");
    for skill in &doc.skills {
        html.push_str(&format!(
            "<span class=\"pill\">{} \u{00b7} {}</span>",
            escape(&skill.name),
            skill.level.as_str()
        ));
    }
    html.push_str("</div></section>");
}

fn projects(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"projects\"><h2>What I Built</h2>");
    for project in &doc.projects {
        let subtitle = match (&project.role, &project.url) {
            (Some(role), _) if !role.is_empty() => role.clone(),
            (_, Some(url)) if !url.is_empty() => url.clone(),
            _ => String::new(),
        };
        entry_card(
            html,
            &project.title,
            &subtitle,
            &dates(&project.start_date, &project.end_date),
            &project.description,
            &project.highlights,
            &project.technologies,
        );
    }
    html.push_str("</section>");
}

fn certifications(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"certifications\"><h2>Credentials</h2>");
    for cert in &doc.certifications {
        let date_line = if cert.date.is_empty() {
            String::new()
        } else {
            escape(&cert.date)
        };
        entry_card(
            html,
            &cert.name,
            &cert.issuer,
            &date_line,
            &cert.description,
            &[],
            &cert.skills,
        );
    }
    html.push_str("</section>");
}
