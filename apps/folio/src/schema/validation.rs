//! Strict structural validation of untrusted resume JSON.
//!
//! Validation walks the whole value and collects every violation with a
//! field-scoped path (`basics.email`, `experience[1].bullets[0]`). Only when
//! the walk is clean is the value deserialized into a typed [`Resume`].

use email_address::EmailAddress;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use crate::models::resume::{
    Density, Literal, PortfolioLayout, PortfolioTemplate, Resume, ResumeTemplate,
};
use crate::schema::ui::{is_legacy_shape, is_mixed_shape};

/// Path used for violations that concern the document itself.
const ROOT: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

/// Every violation found in one document, in walk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", summarize(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "resume is invalid".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

/// Top-level sections of a resume record, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Basics,
    Links,
    Skills,
    Experience,
    Projects,
    Education,
    Ui,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Basics,
        Section::Links,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Ui,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Basics => "basics",
            Section::Links => "links",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Ui => "ui",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public API
// ────────────────────────────────────────────────────────────────────────────

/// Validates `raw` against the canonical shape. Never panics; returns every
/// violation found.
pub fn validate(raw: &Value) -> Result<Resume, ValidationErrors> {
    let mut v = Validator::default();
    let Some(root) = raw.as_object() else {
        v.fail(ROOT, "expected a JSON object");
        return Err(v.finish_err());
    };

    for section in Section::ALL {
        check_section(&mut v, section, root.get(section.key()));
    }

    if !v.errors.is_empty() {
        return Err(v.finish_err());
    }

    // The walk above mirrors the typed model; unknown keys are dropped here.
    serde_json::from_value::<Resume>(raw.clone()).map_err(|e| {
        ValidationErrors(vec![ValidationError {
            path: ROOT.to_string(),
            message: e.to_string(),
        }])
    })
}

/// Validates a single top-level section value in isolation.
pub fn validate_section(section: Section, value: &Value) -> Result<(), ValidationErrors> {
    let mut v = Validator::default();
    check_section(&mut v, section, Some(value));
    if v.errors.is_empty() {
        Ok(())
    } else {
        Err(v.finish_err())
    }
}

/// Re-checks an already typed record. Typed records can still hold empty
/// strings or malformed URLs.
pub fn validate_resume(resume: &Resume) -> Result<(), ValidationErrors> {
    let raw = serde_json::to_value(resume).map_err(|e| {
        ValidationErrors(vec![ValidationError {
            path: ROOT.to_string(),
            message: e.to_string(),
        }])
    })?;
    validate(&raw).map(|_| ())
}

// ────────────────────────────────────────────────────────────────────────────
// Section rules
// ────────────────────────────────────────────────────────────────────────────

fn check_section(v: &mut Validator, section: Section, value: Option<&Value>) {
    let path = section.key();
    match section {
        Section::Basics => {
            if let Some(obj) = v.object(path, value) {
                v.non_empty_string(&field(path, "name"), obj.get("name"));
                v.non_empty_string(&field(path, "title"), obj.get("title"));
                v.email(&field(path, "email"), obj.get("email"));
                v.non_empty_string(&field(path, "location"), obj.get("location"));
                v.non_empty_string(&field(path, "summary"), obj.get("summary"));
            }
        }
        Section::Links => {
            if let Some(obj) = v.object(path, value) {
                for key in ["github", "linkedin", "website"] {
                    v.url(&field(path, key), obj.get(key));
                }
            }
        }
        Section::Skills => v.string_list(path, value),
        Section::Experience => {
            for (p, obj) in v.object_list(path, value) {
                v.non_empty_string(&field(&p, "company"), obj.get("company"));
                v.non_empty_string(&field(&p, "role"), obj.get("role"));
                v.non_empty_string(&field(&p, "startDate"), obj.get("startDate"));
                v.non_empty_string(&field(&p, "endDate"), obj.get("endDate"));
                v.string_list(&field(&p, "bullets"), obj.get("bullets"));
            }
        }
        Section::Projects => {
            for (p, obj) in v.object_list(path, value) {
                v.non_empty_string(&field(&p, "name"), obj.get("name"));
                v.non_empty_string(&field(&p, "description"), obj.get("description"));
                v.string_list(&field(&p, "stack"), obj.get("stack"));
                v.url(&field(&p, "repoUrl"), obj.get("repoUrl"));
                v.url(&field(&p, "liveUrl"), obj.get("liveUrl"));
            }
        }
        Section::Education => {
            for (p, obj) in v.object_list(path, value) {
                v.non_empty_string(&field(&p, "school"), obj.get("school"));
                v.non_empty_string(&field(&p, "program"), obj.get("program"));
                v.non_empty_string(&field(&p, "startDate"), obj.get("startDate"));
                v.non_empty_string(&field(&p, "endDate"), obj.get("endDate"));
            }
        }
        Section::Ui => check_ui(v, path, value),
    }
}

fn check_ui(v: &mut Validator, path: &str, value: Option<&Value>) {
    let Some(obj) = v.object(path, value) else {
        return;
    };
    if let Some(raw) = value {
        if is_legacy_shape(raw) {
            v.fail(
                path,
                "uses the legacy {theme, template} shape; expected {portfolio, resume}",
            );
            return;
        }
        if is_mixed_shape(raw) {
            v.fail(
                path,
                "mixes legacy keys (theme, template) with portfolio/resume",
            );
            return;
        }
    }

    let portfolio = field(path, "portfolio");
    if let Some(p) = v.object(&portfolio, obj.get("portfolio")) {
        v.non_empty_string(&field(&portfolio, "theme"), p.get("theme"));
        v.literal::<PortfolioTemplate>(&field(&portfolio, "template"), p.get("template"));
        let options = field(&portfolio, "options");
        if let Some(o) = v.optional_object(&options, p.get("options")) {
            v.optional_bool(&field(&options, "showPhoto"), o.get("showPhoto"));
            v.optional_literal::<PortfolioLayout>(&field(&options, "layout"), o.get("layout"));
            v.optional_string(&field(&options, "accent"), o.get("accent"));
        }
    }

    let resume = field(path, "resume");
    if let Some(r) = v.object(&resume, obj.get("resume")) {
        v.non_empty_string(&field(&resume, "theme"), r.get("theme"));
        v.literal::<ResumeTemplate>(&field(&resume, "template"), r.get("template"));
        let options = field(&resume, "options");
        if let Some(o) = v.optional_object(&options, r.get("options")) {
            v.optional_literal::<Density>(&field(&options, "density"), o.get("density"));
            v.optional_bool(&field(&options, "showIcons"), o.get("showIcons"));
        }
    }
}

/// RFC 5322 syntax plus the stricter web form: unquoted local part and a
/// dotted host name whose top-level label is at least two letters.
fn is_web_email(s: &str) -> bool {
    if !EmailAddress::is_valid(s) {
        return false;
    }
    let Some((local, domain)) = s.rsplit_once('@') else {
        return false;
    };
    if local.starts_with('"') || domain.starts_with('[') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };
    labels.len() >= 2
        && labels.iter().all(|label| !label.is_empty())
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn field(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}

fn index(path: &str, i: usize) -> String {
    format!("{path}[{i}]")
}

// ────────────────────────────────────────────────────────────────────────────
// Validator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Validator {
    errors: Vec<ValidationError>,
}

impl Validator {
    fn fail(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(ValidationError {
            path: path.to_string(),
            message: message.into(),
        });
    }

    fn finish_err(self) -> ValidationErrors {
        ValidationErrors(self.errors)
    }

    fn object<'v>(&mut self, path: &str, value: Option<&'v Value>) -> Option<&'v Map<String, Value>> {
        match value {
            None => {
                self.fail(path, "is required");
                None
            }
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                self.fail(path, "expected an object");
                None
            }
        }
    }

    fn optional_object<'v>(
        &mut self,
        path: &str,
        value: Option<&'v Value>,
    ) -> Option<&'v Map<String, Value>> {
        value.and_then(|v| self.object(path, Some(v)))
    }

    fn array<'v>(&mut self, path: &str, value: Option<&'v Value>) -> Option<&'v Vec<Value>> {
        match value {
            None => {
                self.fail(path, "is required");
                None
            }
            Some(Value::Array(items)) => Some(items),
            Some(_) => {
                self.fail(path, "expected an array");
                None
            }
        }
    }

    /// Returns `(path, object)` for each element that is an object; flags the rest.
    fn object_list<'v>(
        &mut self,
        path: &str,
        value: Option<&'v Value>,
    ) -> Vec<(String, &'v Map<String, Value>)> {
        let Some(items) = self.array(path, value) else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let p = index(path, i);
                self.object(&p, Some(item)).map(|obj| (p, obj))
            })
            .collect()
    }

    fn string_list(&mut self, path: &str, value: Option<&Value>) {
        if let Some(items) = self.array(path, value) {
            for (i, item) in items.iter().enumerate() {
                self.non_empty_string(&index(path, i), Some(item));
            }
        }
    }

    fn string<'v>(&mut self, path: &str, value: Option<&'v Value>) -> Option<&'v str> {
        match value {
            None => {
                self.fail(path, "is required");
                None
            }
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => {
                self.fail(path, "expected a string");
                None
            }
        }
    }

    fn non_empty_string<'v>(&mut self, path: &str, value: Option<&'v Value>) -> Option<&'v str> {
        let s = self.string(path, value)?;
        if s.is_empty() {
            self.fail(path, "must not be empty");
            return None;
        }
        Some(s)
    }

    fn email(&mut self, path: &str, value: Option<&Value>) {
        if let Some(s) = self.non_empty_string(path, value) {
            if !is_web_email(s) {
                self.fail(path, "must be a valid email address");
            }
        }
    }

    fn url(&mut self, path: &str, value: Option<&Value>) {
        if let Some(s) = self.non_empty_string(path, value) {
            if Url::parse(s).is_err() {
                self.fail(path, "must be a valid URL");
            }
        }
    }

    fn literal<T: Literal>(&mut self, path: &str, value: Option<&Value>) -> Option<T> {
        let s = self.string(path, value)?;
        let parsed = T::parse(s);
        if parsed.is_none() {
            self.fail(path, format!("must be one of: {}", T::names().join(", ")));
        }
        parsed
    }

    fn optional_literal<T: Literal>(&mut self, path: &str, value: Option<&Value>) {
        if value.is_some() {
            self.literal::<T>(path, value);
        }
    }

    fn optional_string(&mut self, path: &str, value: Option<&Value>) {
        if value.is_some() {
            self.string(path, value);
        }
    }

    fn optional_bool(&mut self, path: &str, value: Option<&Value>) {
        if let Some(v) = value {
            if !v.is_boolean() {
                self.fail(path, "expected a boolean");
            }
        }
    }
}
