//! Two-phase join of a passwd file and a group file.
//!
//! The passwd input is parsed and tabulated completely before any group line
//! is resolved against it. Every problem along the way becomes a
//! [`Diagnostic`](crate::diag::Diagnostic) in the returned [`Report`].

pub mod report;
pub mod resolve;
pub mod table;

use std::io::BufRead;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::sys::{self, Parsed, SystemGroup, SystemUser};

pub use report::{Document, OutputEntry, Report, assemble};
pub use resolve::{Membership, Resolution, resolve};
pub use table::UserTable;

/// Read both files from disk and build the report.
///
/// Fails only when an input cannot be opened or read.
pub fn run(passwd: &Path, group: &Path) -> Result<Report> {
    let users = sys::load::<SystemUser>(passwd)?;
    let groups = sys::load::<SystemGroup>(group)?;
    Ok(join(users, groups))
}

/// Same as [`run`] over arbitrary readers.
pub fn transform<P: BufRead, G: BufRead>(passwd: P, group: G) -> Result<Report> {
    let users = sys::parse_lines::<SystemUser, _>(passwd)?;
    let groups = sys::parse_lines::<SystemGroup, _>(group)?;
    Ok(join(users, groups))
}

/// Tabulate users, resolve groups against them, then assemble.
pub fn join(users: Parsed<SystemUser>, groups: Parsed<SystemGroup>) -> Report {
    let mut diagnostics = users.diagnostics;
    let table = UserTable::build(users.records.into_iter().map(|n| n.record));

    diagnostics.extend(groups.diagnostics);
    let Resolution { membership, diagnostics: unknown } = resolve(&table, groups.records);
    diagnostics.extend(unknown);

    let report = assemble(table, membership, diagnostics);
    info!(
        users = report.document.len(),
        diagnostics = report.diagnostics.len(),
        "report assembled"
    );
    report
}
