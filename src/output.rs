//! Rendering of a [`Report`]: JSON document on one stream, diagnostics on another.

use std::io::{self, Write};

use crate::app::{Document, Report};
use crate::diag::Diagnostic;

/// How the JSON document is laid out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Style {
    /// Two-space indented.
    Pretty,
    /// Single line.
    Compact,
}

/// Serialize the document completely in memory so nothing partial is ever written.
pub fn render_document(document: &Document, style: Style) -> serde_json::Result<String> {
    match style {
        Style::Pretty => serde_json::to_string_pretty(document),
        Style::Compact => serde_json::to_string(document),
    }
}

pub fn write_diagnostics<W: Write>(diagnostics: &[Diagnostic], mut err: W) -> io::Result<()> {
    for d in diagnostics {
        writeln!(err, "{d}")?;
    }
    err.flush()
}

/// Write the document to `out` followed by a newline, then each diagnostic to `err`.
pub fn write_report<O: Write, E: Write>(report: &Report, style: Style, mut out: O, err: E) -> io::Result<()> {
    let rendered = render_document(&report.document, style)?;
    writeln!(out, "{rendered}")?;
    out.flush()?;
    write_diagnostics(&report.diagnostics, err)
}
