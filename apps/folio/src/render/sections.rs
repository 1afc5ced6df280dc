//! Fragments shared by every layout: empty-section placeholders, entry
//! blocks, badges, and links.
//!
//! Every user-supplied string passes through `escape_html` before it reaches
//! the output. Entry blocks carry an `entry` class plus a per-section class
//! (`experience-entry`, `project-entry`, `education-entry`).

use crate::models::resume::{Education, Experience, Project, Resume};
use crate::render::escape::{escape_html, safe_href};

/// Sentences shown in place of an empty collection.
#[derive(Debug, Clone, Copy)]
pub struct Placeholders {
    pub experience: &'static str,
    pub projects: &'static str,
    pub skills: &'static str,
    pub education: &'static str,
}

pub const RESUME_PLACEHOLDERS: Placeholders = Placeholders {
    experience: "Add experience entries to highlight your roles and impact.",
    projects: "Add projects to showcase your portfolio work.",
    skills: "List your core skills to round out the resume.",
    education: "Add education entries for degrees or certifications.",
};

pub const PORTFOLIO_PLACEHOLDERS: Placeholders = Placeholders {
    experience: "Add experience entries to share your impact.",
    projects: "Add projects to share your portfolio highlights.",
    skills: "Add skills to highlight your toolkit.",
    education: "Add education entries for degrees or certifications.",
};

pub fn placeholder(text: &str) -> String {
    format!("<p class=\"placeholder\">{}</p>\n", escape_html(text))
}

/// Renders `items` in stored order or the placeholder when empty.
pub fn list_or_placeholder<T>(
    items: &[T],
    empty: &str,
    render: impl Fn(&T) -> String,
) -> String {
    if items.is_empty() {
        return placeholder(empty);
    }
    items.iter().map(render).collect()
}

pub fn date_range(start: &str, end: &str) -> String {
    format!(
        "<span class=\"dates\">{} - {}</span>",
        escape_html(start),
        escape_html(end)
    )
}

pub fn bullet_list(bullets: &[String]) -> String {
    let mut out = String::from("<ul class=\"bullets\">");
    for bullet in bullets {
        out.push_str(&format!("<li>{}</li>", escape_html(bullet)));
    }
    out.push_str("</ul>");
    out
}

pub fn badges(items: &[String], variant: &str) -> String {
    let mut out = String::from("<div class=\"badges\">");
    for item in items {
        out.push_str(&format!(
            "<span class=\"badge badge-{variant}\">{}</span>",
            escape_html(item)
        ));
    }
    out.push_str("</div>");
    out
}

/// An anchor for web URLs; plain escaped text for anything else.
pub fn link(url: &str, label: &str) -> String {
    match safe_href(url) {
        Some(href) => format!(
            "<a href=\"{href}\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(label)
        ),
        None => format!("<span>{}</span>", escape_html(label)),
    }
}

pub fn experience_entry(role: &Experience, heading: &str) -> String {
    format!(
        "<article class=\"entry experience-entry\"><div class=\"entry-head\"><div><{heading}>{}</{heading}><p class=\"muted\">{}</p></div>{}</div>{}</article>\n",
        escape_html(&role.role),
        escape_html(&role.company),
        date_range(&role.start_date, &role.end_date),
        bullet_list(&role.bullets),
    )
}

/// A project card with its stack as badges and both links.
pub fn project_card(project: &Project, heading: &str) -> String {
    format!(
        "<article class=\"entry project-entry card\"><{heading}>{}</{heading}><p class=\"muted\">{}</p>{}<div class=\"card-actions\">{}{}</div></article>\n",
        escape_html(&project.name),
        escape_html(&project.description),
        badges(&project.stack, "ghost"),
        link(&project.repo_url, &project.repo_url),
        link(&project.live_url, &project.live_url),
    )
}

pub fn education_entry(item: &Education) -> String {
    format!(
        "<article class=\"entry education-entry\"><div class=\"entry-head\"><div><h3>{}</h3><p class=\"muted\">{}</p></div>{}</div></article>\n",
        escape_html(&item.school),
        escape_html(&item.program),
        date_range(&item.start_date, &item.end_date),
    )
}

/// Up to two uppercase initials for the avatar placeholder.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Contact block used by the portfolio layouts.
pub fn contact_block(resume: &Resume) -> String {
    format!(
        "<div class=\"contact\"><p class=\"label\">Contact</p><p>{}</p><p>{}</p><p>{}</p><p>{}</p></div>\n",
        escape_html(&resume.basics.email),
        link(&resume.links.website, &resume.links.website),
        link(&resume.links.github, &resume.links.github),
        link(&resume.links.linkedin, &resume.links.linkedin),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_for_empty_list() {
        let empty: Vec<String> = Vec::new();
        let out = list_or_placeholder(&empty, "Nothing yet.", |s| s.clone());
        assert_eq!(out, "<p class=\"placeholder\">Nothing yet.</p>\n");
    }

    #[test]
    fn test_list_keeps_order() {
        let items = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        let out = list_or_placeholder(&items, "unused", |s| s.clone());
        assert_eq!(out, "bac");
    }

    #[test]
    fn test_link_falls_back_to_text_for_unsafe_scheme() {
        let out = link("javascript:alert('x')", "javascript:alert('x')");
        assert!(!out.contains("href"));
        assert!(out.contains("&#39;x&#39;"));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("alex rivera"), "AR");
        assert_eq!(initials("Prince"), "P");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn test_badges_escape_content() {
        let out = badges(&["<b>".to_string()], "outline");
        assert_eq!(
            out,
            "<div class=\"badges\"><span class=\"badge badge-outline\">&lt;b&gt;</span></div>"
        );
    }
}
