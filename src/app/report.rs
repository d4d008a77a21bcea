//! Final document assembly.

use std::collections::BTreeMap;

use serde::Serialize;

use super::resolve::Membership;
use super::table::UserTable;
use crate::diag::Diagnostic;

/// One user in the output document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputEntry {
    /// Ascending, no duplicates, empty when the user is in no group.
    pub groups: Vec<String>,
    pub full_name: String,
    pub uid: String,
}

/// Username → entry. Ordered so repeated runs render identically.
pub type Document = BTreeMap<String, OutputEntry>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub document: Document,
    /// Passwd diagnostics first, then group diagnostics, each by line number.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Process exit status: `0` when no diagnostics were produced, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_clean() { 0 } else { 1 }
    }
}

/// Merge the user table with resolved memberships and order all diagnostics.
pub fn assemble(table: UserTable, mut membership: Membership, diagnostics: Vec<Diagnostic>) -> Report {
    let document = table
        .into_users()
        .map(|user| {
            let groups = membership.take_sorted(&user.name);
            (user.name, OutputEntry { groups, full_name: user.full_name, uid: user.uid })
        })
        .collect();

    let mut diagnostics = diagnostics;
    // stable: keeps resolver order for several unknown members on one line
    diagnostics.sort_by_key(|d| (d.source, d.line));

    Report { document, diagnostics }
}
