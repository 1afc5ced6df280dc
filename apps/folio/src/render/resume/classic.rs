use crate::models::resume::{Density, Literal, Resume};
use crate::render::escape::escape_html;
use crate::render::sections::{
    badges, education_entry, experience_entry, list_or_placeholder, placeholder, project_card,
    RESUME_PLACEHOLDERS as EMPTY,
};

/// Classic layout at the density stored in `ui.resume.options`.
pub fn render(resume: &Resume) -> String {
    render_with_density(resume, resume.ui.resume.density())
}

/// Classic layout forced to compact spacing.
pub fn render_compact(resume: &Resume) -> String {
    render_with_density(resume, Density::Compact)
}

fn contact_item(icon: &str, value: &str, show_icons: bool) -> String {
    if show_icons {
        format!(
            "<span><span class=\"icon\" aria-hidden=\"true\">{icon}</span> {}</span>",
            escape_html(value)
        )
    } else {
        format!("<span>{}</span>", escape_html(value))
    }
}

pub fn render_with_density(resume: &Resume, density: Density) -> String {
    let basics = &resume.basics;
    let show_icons = resume.ui.resume.show_icons();
    let section = match density {
        Density::Compact => "<section class=\"resume-section tight\">",
        Density::Comfortable => "<section class=\"resume-section\">",
    };

    let mut out = format!(
        "<div class=\"resume resume-classic density-{}\">\n",
        density.as_str()
    );
    out.push_str(&format!(
        "<header><h1>{}</h1><p class=\"muted\">{}</p><div class=\"contact-line\">{}<span>•</span>{}<span>•</span>{}</div></header>\n",
        escape_html(&basics.name),
        escape_html(&basics.title),
        contact_item("⌖", &basics.location, show_icons),
        contact_item("✉", &basics.email, show_icons),
        contact_item("⌂", &resume.links.website, show_icons),
    ));

    out.push_str(section);
    out.push_str(&format!(
        "<p class=\"label\">Summary</p><p>{}</p></section>\n",
        escape_html(&basics.summary)
    ));

    out.push_str(section);
    out.push_str("<p class=\"label\">Experience</p>\n");
    out.push_str(&list_or_placeholder(&resume.experience, EMPTY.experience, |r| {
        experience_entry(r, "h2")
    }));
    out.push_str("</section>\n");

    out.push_str(section);
    out.push_str("<p class=\"label\">Projects</p>\n");
    out.push_str(&list_or_placeholder(&resume.projects, EMPTY.projects, |p| {
        project_card(p, "h3")
    }));
    out.push_str("</section>\n");

    out.push_str(section);
    out.push_str("<p class=\"label\">Skills</p>\n");
    if resume.skills.is_empty() {
        out.push_str(&placeholder(EMPTY.skills));
    } else {
        out.push_str(&badges(&resume.skills, "outline"));
    }
    out.push_str("</section>\n");

    out.push_str(section);
    out.push_str("<p class=\"label\">Education</p>\n");
    out.push_str(&list_or_placeholder(
        &resume.education,
        EMPTY.education,
        education_entry,
    ));
    out.push_str("</section>\n</div>\n");
    out
}
