//! Portfolio layouts. Each is a pure function of the resume record.

pub mod classic;
pub mod grid;
pub mod landing;
pub mod modern;
pub mod sidebar;

use crate::models::resume::{PortfolioLayout, Resume};
use crate::render::escape::escape_html;
use crate::render::sections::initials;

/// Section anchors shared by every portfolio layout, in page order.
const NAV_SECTIONS: [(&str, &str); 5] = [
    ("about", "About"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("skills", "Skills"),
    ("education", "Education"),
];

/// Section navigation as selected by `ui.portfolio.options.layout`.
pub(crate) fn section_nav(resume: &Resume) -> String {
    let placement = match resume.ui.portfolio.layout() {
        PortfolioLayout::LeftNav => "left",
        PortfolioLayout::TopNav => "top",
        PortfolioLayout::None => return String::new(),
    };
    let mut out = format!("<nav class=\"section-nav section-nav-{placement}\"><ul>");
    for (id, label) in NAV_SECTIONS {
        out.push_str(&format!("<li><a href=\"#{id}\">{label}</a></li>"));
    }
    out.push_str("</ul></nav>\n");
    out
}

/// Initials avatar when `showPhoto` is enabled.
pub(crate) fn avatar(resume: &Resume) -> String {
    if !resume.ui.portfolio.show_photo() {
        return String::new();
    }
    format!(
        "<div class=\"avatar\" aria-hidden=\"true\">{}</div>",
        escape_html(&initials(&resume.basics.name))
    )
}
