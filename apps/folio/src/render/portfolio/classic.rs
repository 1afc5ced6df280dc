use crate::models::resume::Resume;
use crate::render::escape::escape_html;
use crate::render::portfolio::{avatar, section_nav};
use crate::render::sections::{
    badges, education_entry, experience_entry, link, list_or_placeholder, placeholder,
    project_card, PORTFOLIO_PLACEHOLDERS as EMPTY,
};

/// Single column, document-like portfolio.
pub fn render(resume: &Resume) -> String {
    let basics = &resume.basics;
    let mut out = String::from("<div class=\"portfolio portfolio-classic\">\n");
    out.push_str(&section_nav(resume));

    out.push_str("<header>\n");
    out.push_str(&avatar(resume));
    out.push_str(&format!(
        "<h1>{}</h1><p class=\"muted\">{}</p><div class=\"contact-line\"><span>{}</span><span>{}</span>{}</div>\n",
        escape_html(&basics.name),
        escape_html(&basics.title),
        escape_html(&basics.location),
        escape_html(&basics.email),
        link(&resume.links.website, &resume.links.website),
    ));
    out.push_str("</header>\n");

    out.push_str(&format!(
        "<section id=\"about\"><p class=\"label\">Summary</p><p>{}</p></section>\n",
        escape_html(&basics.summary)
    ));
    out.push_str("<section id=\"experience\"><p class=\"label\">Experience</p>\n");
    out.push_str(&list_or_placeholder(&resume.experience, EMPTY.experience, |r| {
        experience_entry(r, "h2")
    }));
    out.push_str("</section>\n");
    out.push_str("<section id=\"projects\"><p class=\"label\">Projects</p>\n");
    out.push_str(&list_or_placeholder(&resume.projects, EMPTY.projects, |p| {
        project_card(p, "h3")
    }));
    out.push_str("</section>\n");
    out.push_str("<section id=\"skills\"><p class=\"label\">Skills</p>\n");
    if resume.skills.is_empty() {
        out.push_str(&placeholder(EMPTY.skills));
    } else {
        out.push_str(&badges(&resume.skills, "outline"));
    }
    out.push_str("</section>\n");
    out.push_str("<section id=\"education\"><p class=\"label\">Education</p>\n");
    out.push_str(&list_or_placeholder(
        &resume.education,
        EMPTY.education,
        education_entry,
    ));
    out.push_str("</section>\n</div>\n");
    out
}
