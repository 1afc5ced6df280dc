//! Named resume profiles: persistence, lifecycle rules, and HTTP handlers.

pub mod handlers;
pub mod service;
pub mod store;
