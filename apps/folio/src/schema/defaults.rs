use crate::models::resume::{
    Basics, Density, Education, Experience, Links, PortfolioLayout, PortfolioOptions,
    PortfolioTemplate, PortfolioUi, Project, Resume, ResumeOptions, ResumeTemplate, ResumeUi, Ui,
};

/// Portfolio presentation used for new records and for legacy upgrades that
/// carry no usable theme/template.
pub fn default_portfolio_ui() -> PortfolioUi {
    PortfolioUi {
        theme: "night".to_string(),
        template: PortfolioTemplate::Sidebar,
        options: Some(PortfolioOptions {
            show_photo: Some(false),
            layout: Some(PortfolioLayout::LeftNav),
            accent: Some("sky".to_string()),
        }),
    }
}

/// Resume presentation that every legacy record is upgraded to.
pub fn default_resume_ui() -> ResumeUi {
    ResumeUi {
        theme: "light".to_string(),
        template: ResumeTemplate::Classic,
        options: Some(ResumeOptions {
            density: Some(Density::Comfortable),
            show_icons: Some(false),
        }),
    }
}

pub fn default_ui() -> Ui {
    Ui {
        portfolio: default_portfolio_ui(),
        resume: default_resume_ui(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in sample record shown to first-time users and substituted for
/// anything that cannot be salvaged.
pub fn default_resume() -> Resume {
    Resume {
        basics: Basics {
            name: "Alex Rivera".to_string(),
            title: "Product Designer & Front-End Developer".to_string(),
            email: "alex.rivera@example.com".to_string(),
            location: "Austin, TX".to_string(),
            summary: "Designs and ships clean, accessible interfaces for SaaS teams. Focused on design systems, rapid prototyping, and thoughtful UX writing.".to_string(),
        },
        links: Links {
            github: "https://github.com/alexrivera".to_string(),
            linkedin: "https://www.linkedin.com/in/alexrivera".to_string(),
            website: "https://alexrivera.design".to_string(),
        },
        skills: strings(&[
            "Product design",
            "Design systems",
            "Figma",
            "Next.js",
            "TypeScript",
            "Accessibility",
        ]),
        experience: vec![
            Experience {
                company: "Nimbus Labs".to_string(),
                role: "Senior Product Designer".to_string(),
                start_date: "2021".to_string(),
                end_date: "Present".to_string(),
                bullets: strings(&[
                    "Led a redesign of the billing flow, improving completion rate by 24%.",
                    "Partnered with engineering to ship a reusable component library.",
                    "Introduced content design guidelines across the product suite.",
                ]),
            },
            Experience {
                company: "Studio Harbor".to_string(),
                role: "UX Designer".to_string(),
                start_date: "2018".to_string(),
                end_date: "2021".to_string(),
                bullets: strings(&[
                    "Designed responsive onboarding for a fintech app used by 50k customers.",
                    "Facilitated user research and turned insights into product briefs.",
                ]),
            },
        ],
        projects: vec![
            Project {
                name: "Resume Builder".to_string(),
                description: "An open-source resume and portfolio generator.".to_string(),
                stack: strings(&["Next.js", "DaisyUI", "Zod"]),
                repo_url: "https://github.com/alexrivera/resume-builder".to_string(),
                live_url: "https://resume-builder.example.com".to_string(),
            },
            Project {
                name: "Portfolio Kit".to_string(),
                description: "A lightweight site template for designers and founders.".to_string(),
                stack: strings(&["TypeScript", "Tailwind", "Vercel"]),
                repo_url: "https://github.com/alexrivera/portfolio-kit".to_string(),
                live_url: "https://portfolio-kit.example.com".to_string(),
            },
        ],
        education: vec![Education {
            school: "University of Texas".to_string(),
            program: "BFA, Interaction Design".to_string(),
            start_date: "2014".to_string(),
            end_date: "2018".to_string(),
        }],
        ui: default_ui(),
    }
}
