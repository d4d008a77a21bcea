use super::{Malformed, Record, SourceFile};

/// `username`, placeholder, `uid`, `gid`, `full_name`; the shell is optional.
pub const MIN_FIELDS: usize = 5;

/// The part of a passwd entry this tool reports on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemUser {
    pub name: String,
    /// Kept exactly as written, never parsed as a number.
    pub uid: String,
    pub full_name: String,
}

impl Record for SystemUser {
    const SOURCE: SourceFile = SourceFile::Passwd;

    fn parse(line: &str) -> Result<Self, Malformed> {
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() < MIN_FIELDS {
            return Err(Malformed::TooFewFields { expected: MIN_FIELDS, found: parts.len() });
        }
        if parts[0].is_empty() {
            return Err(Malformed::EmptyName);
        }
        Ok(Self {
            name: parts[0].to_string(),
            uid: parts[2].to_string(),
            full_name: parts[4].to_string(),
        })
    }
}
