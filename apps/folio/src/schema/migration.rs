//! Best-effort upgrade of stored or uploaded records to the current shape.
//!
//! `migrate` is total: any JSON value yields a valid [`Resume`]. Callers learn
//! how much of the input survived through [`MigrationStatus`] and must surface
//! a warning whenever [`Migrated::was_recovered`] is true.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::models::resume::{Literal, PortfolioTemplate, PortfolioUi, Resume, Ui};
use crate::schema::defaults::{default_portfolio_ui, default_resume, default_resume_ui, default_ui};
use crate::schema::ui::{classify_ui, LegacyUi, UiShape};
use crate::schema::validation::{validate, validate_section, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationStatus {
    /// Input already conformed to the current schema.
    Valid,
    /// Legacy `ui` was rewritten; every other section was kept.
    Upgraded,
    /// Some sections were invalid or missing and were replaced by defaults.
    Recovered,
    /// Nothing could be salvaged; the built-in default was substituted.
    Defaulted,
}

impl MigrationStatus {
    /// True when user data was discarded and the caller must warn.
    pub fn is_recovery(self) -> bool {
        matches!(self, MigrationStatus::Recovered | MigrationStatus::Defaulted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Migrated {
    pub resume: Resume,
    pub status: MigrationStatus,
}

impl Migrated {
    pub fn was_recovered(&self) -> bool {
        self.status.is_recovery()
    }

    fn defaulted() -> Self {
        Migrated {
            resume: default_resume(),
            status: MigrationStatus::Defaulted,
        }
    }
}

/// Upgrades `raw` to a valid record. Never fails.
pub fn migrate(raw: &Value) -> Migrated {
    if let Ok(resume) = validate(raw) {
        return Migrated {
            resume,
            status: MigrationStatus::Valid,
        };
    }

    let Some(base) = raw.as_object() else {
        warn!("Resume input is not an object; substituting the default record");
        return Migrated::defaulted();
    };

    let Ok(Value::Object(mut merged)) = serde_json::to_value(default_resume()) else {
        return Migrated::defaulted();
    };

    let mut dropped: Vec<&'static str> = Vec::new();
    for section in Section::ALL.into_iter().filter(|s| *s != Section::Ui) {
        let key = section.key();
        match base.get(key) {
            Some(value) if validate_section(section, value).is_ok() => {
                merged.insert(key.to_string(), value.clone());
            }
            _ => dropped.push(key),
        }
    }

    let (ui, upgraded) = migrate_ui(base, &mut dropped);
    match serde_json::to_value(&ui) {
        Ok(ui) => {
            merged.insert(Section::Ui.key().to_string(), ui);
        }
        Err(_) => return Migrated::defaulted(),
    }

    match validate(&Value::Object(merged)) {
        Ok(resume) if dropped.is_empty() => {
            if upgraded {
                info!("Upgraded legacy ui to the portfolio/resume shape");
            }
            Migrated {
                resume,
                status: if upgraded {
                    MigrationStatus::Upgraded
                } else {
                    MigrationStatus::Valid
                },
            }
        }
        Ok(resume) => {
            warn!(sections = ?dropped, "Resume recovered; invalid sections reset to defaults");
            Migrated {
                resume,
                status: MigrationStatus::Recovered,
            }
        }
        Err(errors) => {
            warn!("Merged resume failed validation ({errors}); substituting the default record");
            Migrated::defaulted()
        }
    }
}

/// Returns the upgraded `ui` and whether a legacy shape was rewritten.
fn migrate_ui(base: &Map<String, Value>, dropped: &mut Vec<&'static str>) -> (Ui, bool) {
    let key = Section::Ui.key();
    let Some(raw_ui) = base.get(key) else {
        dropped.push(key);
        return (default_ui(), false);
    };

    match classify_ui(raw_ui) {
        Some(UiShape::Legacy(legacy)) => {
            let unknown_template = legacy
                .template
                .as_deref()
                .is_some_and(|t| !t.is_empty() && PortfolioTemplate::parse(t).is_none());
            if unknown_template {
                dropped.push(key);
            }
            (upgrade_legacy_ui(&legacy), true)
        }
        Some(UiShape::Current(_)) if validate_section(Section::Ui, raw_ui).is_ok() => {
            match serde_json::from_value::<Ui>(raw_ui.clone()) {
                Ok(ui) => (ui, false),
                Err(_) => {
                    dropped.push(key);
                    (default_ui(), false)
                }
            }
        }
        _ => {
            dropped.push(key);
            (default_ui(), false)
        }
    }
}

/// Maps a legacy `{theme, template}` onto the portfolio target and fills the
/// resume target with fixed defaults.
pub fn upgrade_legacy_ui(legacy: &LegacyUi) -> Ui {
    let defaults = default_portfolio_ui();
    let theme = legacy
        .theme
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or(defaults.theme);
    let template = legacy
        .template
        .as_deref()
        .and_then(PortfolioTemplate::parse)
        .unwrap_or(defaults.template);

    Ui {
        portfolio: PortfolioUi {
            theme,
            template,
            options: defaults.options,
        },
        resume: default_resume_ui(),
    }
}
