use crate::models::resume::Resume;
use crate::render::escape::escape_html;
use crate::render::portfolio::{avatar, section_nav};
use crate::render::sections::{
    badges, contact_block, education_entry, experience_entry, list_or_placeholder, placeholder,
    project_card, PORTFOLIO_PLACEHOLDERS as EMPTY,
};

/// Profile, contact and skills in a narrow aside; projects and experience in
/// the main column.
pub fn render(resume: &Resume) -> String {
    let basics = &resume.basics;
    let mut out = String::from("<div class=\"portfolio portfolio-sidebar\">\n");

    out.push_str("<aside class=\"sidebar\">\n");
    out.push_str(&avatar(resume));
    out.push_str(&format!(
        "<p class=\"label\">Profile</p><h1>{}</h1><p class=\"muted\">{}</p><p class=\"muted\">{}</p>\n",
        escape_html(&basics.name),
        escape_html(&basics.title),
        escape_html(&basics.location),
    ));
    out.push_str(&contact_block(resume));
    out.push_str("<div id=\"skills\"><p class=\"label\">Skills</p>");
    if resume.skills.is_empty() {
        out.push_str(&placeholder(EMPTY.skills));
    } else {
        out.push_str(&badges(&resume.skills, "outline"));
    }
    out.push_str("</div>\n");
    out.push_str(&section_nav(resume));
    out.push_str("</aside>\n");

    out.push_str("<main>\n");
    out.push_str(&format!(
        "<section id=\"about\" class=\"card\"><p class=\"label\">About</p><p>{}</p></section>\n",
        escape_html(&basics.summary)
    ));
    out.push_str("<section id=\"projects\"><h2>Projects</h2>\n");
    out.push_str(&list_or_placeholder(&resume.projects, EMPTY.projects, |p| {
        project_card(p, "h3")
    }));
    out.push_str("</section>\n");
    out.push_str("<section id=\"experience\" class=\"card\"><h2>Experience</h2>\n");
    out.push_str(&list_or_placeholder(&resume.experience, EMPTY.experience, |r| {
        experience_entry(r, "h3")
    }));
    out.push_str("</section>\n");
    out.push_str("<section id=\"education\" class=\"card\"><h2>Education</h2>\n");
    out.push_str(&list_or_placeholder(
        &resume.education,
        EMPTY.education,
        education_entry,
    ));
    out.push_str("</section>\n</main>\n</div>\n");
    out
}
