//! Template dispatch: maps a stored template literal to its layout function.
//!
//! Registering a layout is one row in the relevant table. Lookups that find
//! no row use the target's fallback layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::resume::{PortfolioTemplate, Resume, ResumeTemplate};
use crate::render::{portfolio, resume};

/// A pure rendering of the whole record into an HTML fragment.
pub type Layout = fn(&Resume) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    Portfolio,
    Resume,
}

impl RenderTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderTarget::Portfolio => "portfolio",
            RenderTarget::Resume => "resume",
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portfolio" => Ok(RenderTarget::Portfolio),
            "resume" => Ok(RenderTarget::Resume),
            other => Err(format!(
                "Unknown render target '{other}' (expected portfolio or resume)"
            )),
        }
    }
}

const PORTFOLIO_LAYOUTS: &[(PortfolioTemplate, Layout)] = &[
    (PortfolioTemplate::Sidebar, portfolio::sidebar::render),
    (PortfolioTemplate::Modern, portfolio::modern::render),
    (PortfolioTemplate::Classic, portfolio::classic::render),
    (PortfolioTemplate::Landing, portfolio::landing::render),
    (PortfolioTemplate::Grid, portfolio::grid::render),
];
const PORTFOLIO_FALLBACK: Layout = portfolio::modern::render;

const RESUME_LAYOUTS: &[(ResumeTemplate, Layout)] = &[
    (ResumeTemplate::Classic, resume::classic::render),
    (ResumeTemplate::Compact, resume::classic::render_compact),
    (ResumeTemplate::Ats, resume::ats::render),
];
const RESUME_FALLBACK: Layout = resume::classic::render;

fn lookup<K: PartialEq + Copy>(table: &[(K, Layout)], key: K, fallback: Layout) -> Layout {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, layout)| *layout)
        .unwrap_or(fallback)
}

pub fn portfolio_layout(template: PortfolioTemplate) -> Layout {
    lookup(PORTFOLIO_LAYOUTS, template, PORTFOLIO_FALLBACK)
}

pub fn resume_layout(template: ResumeTemplate) -> Layout {
    lookup(RESUME_LAYOUTS, template, RESUME_FALLBACK)
}

pub fn render_portfolio(resume: &Resume) -> String {
    portfolio_layout(resume.ui.portfolio.template)(resume)
}

pub fn render_resume(resume: &Resume) -> String {
    resume_layout(resume.ui.resume.template)(resume)
}

pub fn render(resume: &Resume, target: RenderTarget) -> String {
    match target {
        RenderTarget::Portfolio => render_portfolio(resume),
        RenderTarget::Resume => render_resume(resume),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Literal;

    #[test]
    fn test_every_template_is_registered() {
        for template in PortfolioTemplate::ALL {
            assert!(PORTFOLIO_LAYOUTS.iter().any(|(k, _)| k == template));
        }
        for template in ResumeTemplate::ALL {
            assert!(RESUME_LAYOUTS.iter().any(|(k, _)| k == template));
        }
    }

    #[test]
    fn test_target_parsing() {
        assert_eq!("resume".parse::<RenderTarget>(), Ok(RenderTarget::Resume));
        assert!("pdf".parse::<RenderTarget>().is_err());
    }
}
