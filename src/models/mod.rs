//! Display models for CLI output
//!
//! Converts API payloads into CLI-friendly rows.

pub mod display;

pub use display::{OrgDisplay, RepoDisplay};
