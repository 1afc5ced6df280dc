//! Applicant-tracking-system layout: plain structure, no badges, lists
//! flattened to comma-joined text so parsers read them as prose.

use crate::models::resume::{Education, Experience, Project, Resume};
use crate::render::escape::escape_html;
use crate::render::sections::{
    bullet_list, list_or_placeholder, placeholder, RESUME_PLACEHOLDERS as EMPTY,
};

fn comma_joined(items: &[String]) -> String {
    escape_html(&items.join(", ")).into_owned()
}

fn experience(role: &Experience) -> String {
    format!(
        "<div class=\"entry experience-entry\"><p><strong>{}</strong></p><p>{}</p><p>{} - {}</p>{}</div>\n",
        escape_html(&role.role),
        escape_html(&role.company),
        escape_html(&role.start_date),
        escape_html(&role.end_date),
        bullet_list(&role.bullets),
    )
}

fn project(project: &Project) -> String {
    format!(
        "<div class=\"entry project-entry\"><p><strong>{}</strong></p><p>{}</p><p>Stack: {}</p></div>\n",
        escape_html(&project.name),
        escape_html(&project.description),
        comma_joined(&project.stack),
    )
}

fn education(item: &Education) -> String {
    format!(
        "<div class=\"entry education-entry\"><p><strong>{}</strong></p><p>{}</p><p>{} - {}</p></div>\n",
        escape_html(&item.school),
        escape_html(&item.program),
        escape_html(&item.start_date),
        escape_html(&item.end_date),
    )
}

pub fn render(resume: &Resume) -> String {
    let basics = &resume.basics;
    let mut out = String::from("<div class=\"resume resume-ats\">\n");
    out.push_str(&format!(
        "<header><h1>{}</h1><p>{}</p><p>{} | {} | {}</p></header>\n",
        escape_html(&basics.name),
        escape_html(&basics.title),
        escape_html(&basics.location),
        escape_html(&basics.email),
        escape_html(&resume.links.website),
    ));
    out.push_str(&format!(
        "<section><h2>Summary</h2><p>{}</p></section>\n",
        escape_html(&basics.summary)
    ));

    out.push_str("<section><h2>Experience</h2>\n");
    out.push_str(&list_or_placeholder(&resume.experience, EMPTY.experience, experience));
    out.push_str("</section>\n");

    out.push_str("<section><h2>Projects</h2>\n");
    out.push_str(&list_or_placeholder(&resume.projects, EMPTY.projects, project));
    out.push_str("</section>\n");

    out.push_str("<section><h2>Skills</h2>\n");
    if resume.skills.is_empty() {
        out.push_str(&placeholder(EMPTY.skills));
    } else {
        out.push_str(&format!("<p>{}</p>\n", comma_joined(&resume.skills)));
    }
    out.push_str("</section>\n");

    out.push_str("<section><h2>Education</h2>\n");
    out.push_str(&list_or_placeholder(&resume.education, EMPTY.education, education));
    out.push_str("</section>\n</div>\n");
    out
}
