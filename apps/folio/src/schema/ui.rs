//! Discriminates the two accepted shapes of the `ui` field.
//!
//! Older records carried a single flat `{theme, template}` pair. Current records
//! carry one configuration per target: `{portfolio, resume}`. A record's `ui`
//! is exactly one of these; the discriminator is the presence of the key sets.

use serde_json::{Map, Value};

const LEGACY_KEYS: [&str; 2] = ["theme", "template"];
const CURRENT_KEYS: [&str; 2] = ["portfolio", "resume"];

/// The flat single-template presentation config. Both keys are optional and
/// only string values are carried over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyUi {
    pub theme: Option<String>,
    pub template: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiShape<'a> {
    Legacy(LegacyUi),
    Current(&'a Map<String, Value>),
}

fn has_any(map: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().any(|k| map.contains_key(*k))
}

/// True iff `raw_ui` is an object with `theme` and/or `template` and neither
/// `portfolio` nor `resume`.
pub fn is_legacy_shape(raw_ui: &Value) -> bool {
    raw_ui
        .as_object()
        .is_some_and(|map| has_any(map, &LEGACY_KEYS) && !has_any(map, &CURRENT_KEYS))
}

/// True iff `raw_ui` carries keys from both shapes at once.
pub fn is_mixed_shape(raw_ui: &Value) -> bool {
    raw_ui
        .as_object()
        .is_some_and(|map| has_any(map, &LEGACY_KEYS) && has_any(map, &CURRENT_KEYS))
}

/// Classifies `raw_ui`. Returns `None` for non-objects and for objects that
/// carry neither key set.
pub fn classify_ui(raw_ui: &Value) -> Option<UiShape<'_>> {
    let map = raw_ui.as_object()?;
    if is_legacy_shape(raw_ui) {
        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);
        return Some(UiShape::Legacy(LegacyUi {
            theme: text("theme"),
            template: text("template"),
        }));
    }
    if has_any(map, &CURRENT_KEYS) {
        return Some(UiShape::Current(map));
    }
    None
}
