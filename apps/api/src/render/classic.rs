//! Classic template: serif typography, centered name, uppercase
//! letter-spaced headings over thin rules, dates inline after titles.

use crate::form::order::SectionOrder;
use crate::models::resume::{ResumeDocument, SectionKind};
use crate::render::escape;

const STYLE: &str = "\
body{font-family:Georgia,'Times New Roman',serif;color:#111827;margin:0;padding:48px 56px;}\
header{text-align:center;border-bottom:3px double #111827;padding-bottom:14px;margin-bottom:20px;}\
h1{font-size:26px;letter-spacing:2px;margin:0;text-transform:uppercase;}\
.contact{font-size:13px;margin-top:6px;}\
.summary{font-style:italic;font-size:14px;margin-top:10px;}\
h2{font-size:14px;letter-spacing:3px;text-transform:uppercase;border-bottom:1px solid #9ca3af;padding-bottom:3px;margin:22px 0 10px;}\
.entry{margin-bottom:14px;}\
.title{font-weight:bold;font-size:14px;}\
.when{font-size:13px;font-style:italic;}\
.desc{font-size:13px;margin:4px 0 0;}\
ul{margin:4px 0 0;padding-left:20px;font-size:13px;}\
.meta{font-size:12px;color:#374151;margin-top:3px;}";

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

fn when(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!(" ({})", escape(start)),
        (true, false) => format!(" ({})", escape(end)),
        (false, false) => format!(" ({} to {})", escape(start), escape(end)),
    }
}

fn personal_info(html: &mut String, doc: &ResumeDocument) {
    let info = &doc.personal_info;
    html.push_str("<section data-section=\"personalInfo\"><header>");
    if !info.full_name.is_empty() {
        html.push_str(&format!("<h1>{}</h1>", escape(&info.full_name)));
    }
    let mut contact: Vec<String> = Vec::new();
    for value in [&info.email, &info.phone, &info.location, &info.website] {
        if !value.is_empty() {
            contact.push(escape(value));
        }
    }
    if !contact.is_empty() {
        html.push_str(&format!("<div class=\"contact\">{}</div>", contact.join(" | ")));
    }
    let mut profiles: Vec<String> = Vec::new();
    for value in [&info.linkedin, &info.github] {
        if !value.is_empty() {
            profiles.push(escape(value));
        }
    }
    if !profiles.is_empty() {
        html.push_str(&format!("<div class=\"contact\">{}</div>", profiles.join(" | ")));
    }
    if !info.summary.is_empty() {
        html.push_str(&format!("<p class=\"summary\">{}</p>", escape(&info.summary)));
    }
    if let Some(objective) = &info.objective {
        if !objective.is_empty() {
            html.push_str(&format!("<p class=\"summary\">{}</p>", escape(objective)));
        }
    }
    html.push_str("</header></section>");
}

fn experience(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"experience\"><h2>Experience</h2>");
    for exp in &doc.experience {
        html.push_str("<div class=\"entry\"><span class=\"title\">");
        html.push_str(&escape(&exp.position));
        if !exp.company.is_empty() {
            html.push_str(&format!(", {}", escape(&exp.company)));
        }
        html.push_str("</span><span class=\"when\">");
        html.push_str(&when(&exp.start_date, &exp.end_date));
        html.push_str("</span>");
        if !exp.location.is_empty() {
            html.push_str(&format!("<div class=\"meta\">{}</div>", escape(&exp.location)));
        }
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
            html.push_str(&format!("<div class=\"meta\">{joined}</div>"));
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
}

fn education(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"education\"><h2>Education</h2>");
    for edu in &doc.education {
        html.push_str("<div class=\"entry\"><span class=\"title\">");
        html.push_str(&escape(&edu.degree));
        if !edu.field_of_study.is_empty() {
            html.push_str(&format!(" in {}", escape(&edu.field_of_study)));
        }
        if !edu.institution.is_empty() {
            html.push_str(&format!(", {}", escape(&edu.institution)));
        }
        html.push_str("</span><span class=\"when\">");
        html.push_str(&when(&edu.start_date, &edu.end_date));
        html.push_str("</span>");
        if let Some(gpa) = &edu.gpa {
            if !gpa.is_empty() {
                html.push_str(&format!("<div class=\"meta\">GPA {}</div>", escape(gpa)));
            }
        }
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
    html.push_str("<section data-section=\"skills\"><h2>Skills</h2><div class=\"entry\">");
    let mut rendered: Vec<String> = Vec::new();
    for skill in &doc.skills {
        let mut text = escape(&skill.name);
        if !skill.category.is_empty() {
            text = format!("{} ({})", text, escape(&skill.category));
        }
        rendered.push(text);
    }
    html.push_str(&format!("<p class=\"desc\">{}</p>", rendered.join("; ")));
    html.push_str("</div></section>");
}

fn projects(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"projects\"><h2>Projects</h2>");
    for project in &doc.projects {
        html.push_str("<div class=\"entry\"><span class=\"title\">");
        html.push_str(&escape(&project.title));
        html.push_str("</span><span class=\"when\">");
        html.push_str(&when(&project.start_date, &project.end_date));
        html.push_str("</span>");
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
            html.push_str(&format!("<div class=\"meta\">{joined}</div>"));
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
}

fn certifications(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<section data-section=\"certifications\"><h2>Certifications</h2>");
    for cert in &doc.certifications {
        html.push_str("<div class=\"entry\"><span class=\"title\">");
        html.push_str(&escape(&cert.name));
        if !cert.issuer.is_empty() {
            html.push_str(&format!(", {}", escape(&cert.issuer)));
        }
        html.push_str("</span>");
        if !cert.date.is_empty() {
            html.push_str(&format!("<span class=\"when\"> ({})</span>", escape(&cert.date)));
        }
        if !cert.description.is_empty() {
            html.push_str(&format!("<p class=\"desc\">{}</p>", escape(&cert.description)));
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
}
