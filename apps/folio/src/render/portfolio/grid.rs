use crate::models::resume::Resume;
use crate::render::escape::escape_html;
use crate::render::portfolio::{avatar, section_nav};
use crate::render::sections::{
    contact_block, education_entry, experience_entry, list_or_placeholder, project_card,
    PORTFOLIO_PLACEHOLDERS as EMPTY,
};

/// Project-first tile grid. Skills become individual tiles.
pub fn render(resume: &Resume) -> String {
    let basics = &resume.basics;
    let mut out = String::from("<div class=\"portfolio portfolio-grid\">\n");
    out.push_str(&section_nav(resume));

    out.push_str("<header class=\"tile tile-wide\">\n");
    out.push_str(&avatar(resume));
    out.push_str(&format!(
        "<h1>{}</h1><p class=\"muted\">{}</p><p class=\"muted\">{}</p>\n",
        escape_html(&basics.name),
        escape_html(&basics.title),
        escape_html(&basics.location),
    ));
    out.push_str(&contact_block(resume));
    out.push_str("</header>\n");
    out.push_str(&format!(
        "<section id=\"about\" class=\"tile\"><p class=\"label\">About</p><p>{}</p></section>\n",
        escape_html(&basics.summary)
    ));

    out.push_str("<section id=\"projects\" class=\"tiles\">\n");
    out.push_str(&list_or_placeholder(&resume.projects, EMPTY.projects, |p| {
        format!("<div class=\"tile\">{}</div>\n", project_card(p, "h3"))
    }));
    out.push_str("</section>\n");
    out.push_str("<section id=\"skills\" class=\"tiles tiles-small\">\n");
    out.push_str(&list_or_placeholder(&resume.skills, EMPTY.skills, |s| {
        format!("<div class=\"tile skill-tile\">{}</div>", escape_html(s))
    }));
    out.push_str("</section>\n");
    out.push_str("<section id=\"experience\" class=\"tile tile-wide\"><h2>Experience</h2>\n");
    out.push_str(&list_or_placeholder(&resume.experience, EMPTY.experience, |r| {
        experience_entry(r, "h3")
    }));
    out.push_str("</section>\n");
    out.push_str("<section id=\"education\" class=\"tile tile-wide\"><h2>Education</h2>\n");
    out.push_str(&list_or_placeholder(
        &resume.education,
        EMPTY.education,
        education_entry,
    ));
    out.push_str("</section>\n</div>\n");
    out
}
