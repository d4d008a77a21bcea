//! Library crate for passwd-parser.
//!
//! This crate exposes the pieces of the passwd/group join:
//! - Record parsing for both inputs (`sys`)
//! - Line-indexed diagnostics (`diag`)
//! - User table, group resolution and report assembly (`app`)
//! - Rendering of the report to output streams (`output`)
//! - Error and result types (`error`)
//!
//! It is used by the `passwd-parser` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod diag;
pub mod error;
pub mod output;
pub mod sys;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
pub use app::{Report, run, transform};
pub use diag::{Diagnostic, DiagnosticKind};
