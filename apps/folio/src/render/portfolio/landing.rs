use crate::models::resume::Resume;
use crate::render::escape::escape_html;
use crate::render::portfolio::{avatar, section_nav};
use crate::render::sections::{
    badges, education_entry, experience_entry, link, list_or_placeholder, placeholder,
    project_card, PORTFOLIO_PLACEHOLDERS as EMPTY,
};

/// A hero banner with the summary and call-to-action links, followed by
/// full-width sections.
pub fn render(resume: &Resume) -> String {
    let basics = &resume.basics;
    let links = &resume.links;
    let mut out = String::from("<div class=\"portfolio portfolio-landing\">\n");
    out.push_str(&section_nav(resume));

    out.push_str("<section id=\"about\" class=\"hero\">\n");
    out.push_str(&avatar(resume));
    out.push_str(&format!(
        "<p class=\"label\">{}</p><h1>{}</h1><p class=\"lead\">{}</p><p class=\"muted\">{} · {}</p>\n",
        escape_html(&basics.title),
        escape_html(&basics.name),
        escape_html(&basics.summary),
        escape_html(&basics.location),
        escape_html(&basics.email),
    ));
    out.push_str(&format!(
        "<div class=\"cta\">{}{}{}</div>\n",
        link(&links.website, "Website"),
        link(&links.github, "GitHub"),
        link(&links.linkedin, "LinkedIn"),
    ));
    out.push_str("</section>\n");

    out.push_str("<section id=\"projects\"><h2>Selected work</h2>\n");
    out.push_str(&list_or_placeholder(&resume.projects, EMPTY.projects, |p| {
        project_card(p, "h3")
    }));
    out.push_str("</section>\n");
    out.push_str("<section id=\"experience\"><h2>Experience</h2>\n");
    out.push_str(&list_or_placeholder(&resume.experience, EMPTY.experience, |r| {
        experience_entry(r, "h3")
    }));
    out.push_str("</section>\n");
    out.push_str("<section id=\"skills\"><h2>Toolkit</h2>\n");
    if resume.skills.is_empty() {
        out.push_str(&placeholder(EMPTY.skills));
    } else {
        out.push_str(&badges(&resume.skills, "outline"));
    }
    out.push_str("</section>\n");
    out.push_str("<section id=\"education\"><h2>Education</h2>\n");
    out.push_str(&list_or_placeholder(
        &resume.education,
        EMPTY.education,
        education_entry,
    ));
    out.push_str("</section>\n</div>\n");
    out
}
