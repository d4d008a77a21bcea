use super::{Malformed, Record, SourceFile};

/// `group_name`, placeholder, `gid`; the member list is optional.
pub const MIN_FIELDS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemGroup {
    pub name: String,
    pub gid: String,
    /// Usernames in the order listed on the line.
    pub members: Vec<String>,
}

impl Record for SystemGroup {
    const SOURCE: SourceFile = SourceFile::Group;

    fn parse(line: &str) -> Result<Self, Malformed> {
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() < MIN_FIELDS {
            return Err(Malformed::TooFewFields { expected: MIN_FIELDS, found: parts.len() });
        }
        if parts[0].is_empty() {
            return Err(Malformed::EmptyName);
        }
        let gid = parts[2];
        if gid.is_empty() || !gid.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Malformed::BadGid(gid.to_string()));
        }
        let members = match parts.get(3) {
            Some(list) => list.split(',').filter(|s| !s.is_empty()).map(|s| s.to_string()).collect(),
            None => Vec::new(),
        };
        Ok(Self { name: parts[0].to_string(), gid: gid.to_string(), members })
    }
}
