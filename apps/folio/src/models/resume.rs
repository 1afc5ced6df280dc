use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Literal enums
// ────────────────────────────────────────────────────────────────────────────

/// A closed set of string literals stored in the resume JSON.
///
/// Validation checks membership against `ALL` so the error message can list
/// every accepted value.
pub trait Literal: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.as_str()).collect()
    }
}

macro_rules! literal_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $lit:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $lit)] $variant),+
        }

        impl Literal for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $lit),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

literal_enum!(
    /// Layouts available to the portfolio target.
    PortfolioTemplate {
        Sidebar => "sidebar",
        Landing => "landing",
        Grid => "grid",
        Modern => "modern",
        Classic => "classic",
    }
);

literal_enum!(
    /// Layouts available to the printable resume target.
    ResumeTemplate {
        Classic => "classic",
        Compact => "compact",
        Ats => "ats",
    }
);

literal_enum!(
    /// Section navigation placement for portfolio layouts.
    PortfolioLayout {
        LeftNav => "leftNav",
        TopNav => "topNav",
        None => "none",
    }
);

literal_enum!(
    Density {
        Comfortable => "comfortable",
        Compact => "compact",
    }
);

// ────────────────────────────────────────────────────────────────────────────
// Resume record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basics {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub stack: Vec<String>,
    pub repo_url: String,
    pub live_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub program: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_photo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<PortfolioLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<Density>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_icons: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioUi {
    pub theme: String,
    pub template: PortfolioTemplate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PortfolioOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeUi {
    pub theme: String,
    pub template: ResumeTemplate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ResumeOptions>,
}

/// Presentation configuration in its current dual-target shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ui {
    pub portfolio: PortfolioUi,
    pub resume: ResumeUi,
}

/// The canonical resume record. Field order here is the serialization order
/// of `resume.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub basics: Basics,
    pub links: Links,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub ui: Ui,
}

impl PortfolioUi {
    pub fn layout(&self) -> PortfolioLayout {
        self.options
            .as_ref()
            .and_then(|o| o.layout)
            .unwrap_or(PortfolioLayout::None)
    }

    pub fn accent(&self) -> Option<&str> {
        self.options.as_ref().and_then(|o| o.accent.as_deref())
    }

    pub fn show_photo(&self) -> bool {
        self.options
            .as_ref()
            .and_then(|o| o.show_photo)
            .unwrap_or(false)
    }
}

impl ResumeUi {
    pub fn density(&self) -> Density {
        self.options
            .as_ref()
            .and_then(|o| o.density)
            .unwrap_or(Density::Comfortable)
    }

    pub fn show_icons(&self) -> bool {
        self.options
            .as_ref()
            .and_then(|o| o.show_icons)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_parse_uses_wire_names() {
        assert_eq!(
            PortfolioLayout::parse("leftNav"),
            Some(PortfolioLayout::LeftNav)
        );
        assert_eq!(PortfolioLayout::parse("left_nav"), None);
        assert_eq!(ResumeTemplate::parse("ats"), Some(ResumeTemplate::Ats));
    }

    #[test]
    fn test_literal_serde_matches_as_str() {
        for template in PortfolioTemplate::ALL {
            let json = serde_json::to_value(template).unwrap();
            assert_eq!(json, serde_json::json!(template.as_str()));
        }
    }

    #[test]
    fn test_missing_options_fall_back() {
        let ui = ResumeUi {
            theme: "light".to_string(),
            template: ResumeTemplate::Classic,
            options: None,
        };
        assert_eq!(ui.density(), Density::Comfortable);
        assert!(!ui.show_icons());
    }

    #[test]
    fn test_none_options_are_not_serialized() {
        let options = PortfolioOptions {
            show_photo: None,
            layout: Some(PortfolioLayout::TopNav),
            accent: None,
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"layout":"topNav"}"#);
    }
}
