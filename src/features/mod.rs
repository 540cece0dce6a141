//! Feature modules
//!
//! Collaborators that run before the calendar core:
//! - Holiday sources (JSON files, bank-holiday feeds, built-in rules)

pub mod holidays;
