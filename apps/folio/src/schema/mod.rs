//! Resume schema: the canonical record shape, strict validation, and the
//! best-effort migration of older or damaged records.

pub mod defaults;
pub mod handlers;
pub mod migration;
pub mod ui;
pub mod validation;

pub use defaults::default_resume;
pub use migration::{migrate, Migrated, MigrationStatus};
pub use validation::{validate, validate_resume, ValidationErrors};
