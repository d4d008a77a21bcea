//! Line-indexed diagnostics collected during a run.
//!
//! A diagnostic never stops processing; the run gathers all of them and the
//! binary prints one per line on stderr.

use std::fmt::{Display, Formatter};

use crate::sys::SourceFile;

/// What went wrong on a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The line does not have the minimal shape of its record type.
    MalformedLine,
    /// A group lists a member that is not in the user table.
    UnknownUser { username: String },
}

/// One invalid line or reference, with the file and 1-based line it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub source: SourceFile,
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn malformed(source: SourceFile, line: usize) -> Self {
        Self { source, line, kind: DiagnosticKind::MalformedLine }
    }

    pub fn unknown_user(line: usize, username: impl Into<String>) -> Self {
        Self {
            source: SourceFile::Group,
            line,
            kind: DiagnosticKind::UnknownUser { username: username.into() },
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DiagnosticKind::MalformedLine => write!(f, "{} line #{} invalid", self.source, self.line),
            DiagnosticKind::UnknownUser { username } => {
                write!(f, "{} line #{} user not found: {}", self.source, self.line, username)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_line_text() {
        assert_eq!(Diagnostic::malformed(SourceFile::Passwd, 4).to_string(), "passwd line #4 invalid");
        assert_eq!(Diagnostic::malformed(SourceFile::Group, 2).to_string(), "group line #2 invalid");
    }

    #[test]
    fn unknown_user_text() {
        let d = Diagnostic::unknown_user(3, "user1001");
        assert_eq!(d.source, SourceFile::Group);
        assert_eq!(d.to_string(), "group line #3 user not found: user1001");
    }
}
