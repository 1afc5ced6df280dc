//! HTML rendering of a validated resume for the portfolio and resume targets.
//!
//! Layouts are pure: no I/O, no mutation, arrays rendered in stored order,
//! every user string HTML-escaped, and a placeholder sentence for each empty
//! collection.

pub mod dispatch;
pub mod escape;
pub mod handlers;
mod portfolio;
mod resume;
pub mod sections;

use crate::models::resume::{Literal, Resume};

pub use dispatch::{render, RenderTarget};
use escape::escape_html;

/// Wraps the selected layout in a standalone HTML document themed for `target`.
pub fn render_document(resume: &Resume, target: RenderTarget) -> String {
    let (theme, template, accent) = match target {
        RenderTarget::Portfolio => {
            let ui = &resume.ui.portfolio;
            (ui.theme.as_str(), ui.template.as_str(), ui.accent())
        }
        RenderTarget::Resume => {
            let ui = &resume.ui.resume;
            (ui.theme.as_str(), ui.template.as_str(), None)
        }
    };
    let accent = accent
        .map(|a| format!(" data-accent=\"{}\"", escape_html(a)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{theme}\"{accent}>\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{name} | {title}</title>\n</head>\n<body data-target=\"{target}\" data-template=\"{template}\">\n{body}</body>\n</html>\n",
        theme = escape_html(theme),
        name = escape_html(&resume.basics.name),
        title = escape_html(&resume.basics.title),
        body = render(resume, target),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::dispatch::{render_portfolio, render_resume};
    use crate::models::resume::{Density, PortfolioTemplate, ResumeOptions, ResumeTemplate};
    use crate::schema::default_resume;

    const SCRIPT: &str = "<script>alert(1)</script>";

    fn resume_with(template: ResumeTemplate) -> Resume {
        let mut resume = default_resume();
        resume.ui.resume.template = template;
        resume
    }

    fn portfolio_with(template: PortfolioTemplate) -> Resume {
        let mut resume = default_resume();
        resume.ui.portfolio.template = template;
        resume
    }

    fn all_renderings(resume: &mut Resume) -> Vec<String> {
        let mut outputs = Vec::new();
        for template in PortfolioTemplate::ALL {
            resume.ui.portfolio.template = *template;
            outputs.push(render_document(resume, RenderTarget::Portfolio));
        }
        for template in ResumeTemplate::ALL {
            resume.ui.resume.template = *template;
            outputs.push(render_document(resume, RenderTarget::Resume));
        }
        outputs
    }

    #[test]
    fn test_script_in_name_is_escaped_everywhere() {
        let mut resume = default_resume();
        resume.basics.name = SCRIPT.to_string();
        resume.skills.push(SCRIPT.to_string());
        resume.experience[0].bullets.push(SCRIPT.to_string());
        resume.ui.portfolio.theme = "\"><script>".to_string();
        for html in all_renderings(&mut resume) {
            assert!(!html.contains("<script>"), "unescaped script in:\n{html}");
            assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        }
    }

    #[test]
    fn test_ats_has_no_badges() {
        let html = render_resume(&resume_with(ResumeTemplate::Ats));
        assert!(!html.contains("badge"));
        assert!(html.contains(
            "<p>Product design, Design systems, Figma, Next.js, TypeScript, Accessibility</p>"
        ));
        assert!(html.contains("<p>Stack: Next.js, DaisyUI, Zod</p>"));
        assert!(html.contains("<p>Stack: TypeScript, Tailwind, Vercel</p>"));
    }

    #[test]
    fn test_empty_experience_renders_placeholder_in_every_layout() {
        let mut resume = default_resume();
        resume.experience.clear();
        for html in all_renderings(&mut resume) {
            assert_eq!(html.matches("experience-entry").count(), 0);
            assert!(
                html.contains("Add experience entries to highlight your roles and impact.")
                    || html.contains("Add experience entries to share your impact.")
            );
        }
    }

    #[test]
    fn test_resume_placeholders_are_verbatim() {
        let mut resume = resume_with(ResumeTemplate::Classic);
        resume.experience.clear();
        resume.projects.clear();
        resume.skills.clear();
        resume.education.clear();
        let html = render_resume(&resume);
        for sentence in [
            "Add experience entries to highlight your roles and impact.",
            "Add projects to showcase your portfolio work.",
            "List your core skills to round out the resume.",
            "Add education entries for degrees or certifications.",
        ] {
            assert!(html.contains(sentence), "missing placeholder: {sentence}");
        }
        assert!(!html.contains("class=\"entry"));
    }

    #[test]
    fn test_portfolio_placeholders_are_verbatim() {
        let mut resume = portfolio_with(PortfolioTemplate::Sidebar);
        resume.projects.clear();
        resume.skills.clear();
        let html = render_portfolio(&resume);
        assert!(html.contains("Add projects to share your portfolio highlights."));
        assert!(html.contains("Add skills to highlight your toolkit."));
    }

    #[test]
    fn test_entries_render_in_stored_order() {
        let resume = default_resume();
        for html in [
            render_portfolio(&resume),
            render_resume(&resume),
            render_resume(&resume_with(ResumeTemplate::Ats)),
        ] {
            let nimbus = html.find("Nimbus Labs").unwrap();
            let harbor = html.find("Studio Harbor").unwrap();
            assert!(nimbus < harbor);
            assert_eq!(html.matches("experience-entry").count(), 2);
            assert_eq!(html.matches("project-entry").count(), 2);
        }
    }

    #[test]
    fn test_portfolio_dispatch_selects_distinct_layouts() {
        let cases = [
            (PortfolioTemplate::Sidebar, "portfolio-sidebar"),
            (PortfolioTemplate::Modern, "portfolio-modern"),
            (PortfolioTemplate::Classic, "portfolio-classic"),
            (PortfolioTemplate::Landing, "portfolio-landing"),
            (PortfolioTemplate::Grid, "portfolio-grid"),
        ];
        for (template, marker) in cases {
            assert!(render_portfolio(&portfolio_with(template)).contains(marker));
        }
    }

    #[test]
    fn test_resume_dispatch_and_density() {
        let classic = render_resume(&resume_with(ResumeTemplate::Classic));
        assert!(classic.contains("density-comfortable"));

        let compact = render_resume(&resume_with(ResumeTemplate::Compact));
        assert!(compact.contains("resume-classic density-compact"));
        assert!(compact.contains("resume-section tight"));

        let mut dense_classic = resume_with(ResumeTemplate::Classic);
        dense_classic.ui.resume.options = Some(ResumeOptions {
            density: Some(Density::Compact),
            show_icons: Some(true),
        });
        let html = render_resume(&dense_classic);
        assert!(html.contains("density-compact"));
        assert!(html.contains("class=\"icon\""));
    }

    #[test]
    fn test_document_carries_theme_and_accent() {
        let resume = default_resume();
        let portfolio = render_document(&resume, RenderTarget::Portfolio);
        assert!(portfolio.contains("data-theme=\"night\" data-accent=\"sky\""));
        assert!(portfolio.contains("data-template=\"sidebar\""));

        let printable = render_document(&resume, RenderTarget::Resume);
        assert!(printable.contains("data-theme=\"light\">"));
        assert!(printable.contains("data-target=\"resume\""));
    }
}
