//! Record parsing for passwd-style and group-style files.
//!
//! Every line of an input is turned into either a record or a diagnostic.
//! Both are collected side by side so one bad line never stops the rest
//! of the file from being read.

pub mod group;
pub mod passwd;

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::diag::Diagnostic;
use crate::error::{Context, DynError, Result, WithContextError};

pub use group::SystemGroup;
pub use passwd::SystemUser;

/// Which input a line came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceFile {
    Passwd,
    Group,
}

impl SourceFile {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceFile::Passwd => "passwd",
            SourceFile::Group => "group",
        }
    }
}

impl Display for SourceFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a line was rejected. Only logged; the diagnostic itself just says "invalid".
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Malformed {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },
    #[error("empty name field")]
    EmptyName,
    #[error("group id {0:?} is not numeric")]
    BadGid(String),
}

/// A record shape that can be parsed from a single colon-separated line.
pub trait Record: Sized {
    const SOURCE: SourceFile;

    fn parse(line: &str) -> std::result::Result<Self, Malformed>;
}

/// A parsed record together with the 1-based line it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Numbered<T> {
    pub line: usize,
    pub record: T,
}

/// Outcome of reading one file: good records and per-line diagnostics, both in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed<T> {
    pub records: Vec<Numbered<T>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self { records: Vec::new(), diagnostics: Vec::new() }
    }
}

/// Fold every line of `reader` into records and diagnostics.
///
/// Blank lines are skipped but still advance the line counter.
/// Only a failure to read the underlying stream is returned as an error.
pub fn parse_lines<T: Record, R: BufRead>(reader: R) -> Result<Parsed<T>> {
    let source = T::SOURCE;
    let mut parsed = Parsed::default();
    for (idx, line) in reader.lines().enumerate() {
        let number = idx + 1;
        let line = line.with_ctx(|| format!("{} line #{}", source, number))?;
        if line.trim().is_empty() {
            continue;
        }
        match T::parse(&line) {
            Ok(record) => parsed.records.push(Numbered { line: number, record }),
            Err(reason) => {
                debug!(%source, line = number, %reason, "rejecting line");
                parsed.diagnostics.push(Diagnostic::malformed(source, number));
            }
        }
    }
    info!(
        %source,
        records = parsed.records.len(),
        invalid = parsed.diagnostics.len(),
        "parsed input"
    );
    Ok(parsed)
}

/// Open `path` and parse it as records of type `T`.
pub fn load<T: Record>(path: impl AsRef<Path>) -> Result<Parsed<T>> {
    let path = path.as_ref();
    let file = File::open(path).with_ctx(|| format!("read {} file {}", T::SOURCE, path.display()))?;
    parse_lines::<T, _>(BufReader::new(file)).map_err(|e| {
        Box::new(WithContextError {
            context: format!("read {} file {}", T::SOURCE, path.display()),
            source: e,
        }) as DynError
    })
}
