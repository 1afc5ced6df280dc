//! Printable resume layouts.

pub mod ats;
pub mod classic;
