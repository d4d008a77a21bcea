//! Group resolution: attribute each group to the users it lists.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use super::table::UserTable;
use crate::diag::Diagnostic;
use crate::sys::{Numbered, SystemGroup};

/// Accumulated, deduplicated group names per username.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Membership {
    groups: HashMap<String, BTreeSet<String>>,
}

impl Membership {
    /// Returns `true` if the group was not yet attributed to the user.
    pub fn add(&mut self, user: &str, group: &str) -> bool {
        self.groups.entry(user.to_string()).or_default().insert(group.to_string())
    }

    /// Remove and return the user's groups in ascending order; empty when none.
    pub fn take_sorted(&mut self, user: &str) -> Vec<String> {
        self.groups.remove(user).map(|set| set.into_iter().collect()).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Resolution {
    pub membership: Membership,
    pub diagnostics: Vec<Diagnostic>,
}

/// Walk groups in file order and members in listed order.
///
/// Members missing from `table` yield one diagnostic per occurrence; the rest of
/// the group is still processed.
pub fn resolve<I>(table: &UserTable, groups: I) -> Resolution
where
    I: IntoIterator<Item = Numbered<SystemGroup>>,
{
    let mut res = Resolution::default();
    for Numbered { line, record: group } in groups {
        for member in &group.members {
            if table.contains(member) {
                if !res.membership.add(member, &group.name) {
                    debug!(user = %member, group = %group.name, line, "repeated membership");
                }
            } else {
                debug!(user = %member, group = %group.name, line, "unknown member");
                res.diagnostics.push(Diagnostic::unknown_user(line, member.as_str()));
            }
        }
    }
    info!(unknown = res.diagnostics.len(), "resolved group membership");
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::SystemUser;

    fn table(names: &[&str]) -> UserTable {
        names
            .iter()
            .map(|n| SystemUser { name: n.to_string(), uid: "1".into(), full_name: String::new() })
            .collect()
    }

    fn group(line: usize, name: &str, members: &[&str]) -> Numbered<SystemGroup> {
        Numbered {
            line,
            record: SystemGroup {
                name: name.into(),
                gid: line.to_string(),
                members: members.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    #[test]
    fn groups_accumulate_sorted_and_deduplicated() {
        let t = table(&["alice", "bob"]);
        let mut res = resolve(
            &t,
            vec![
                group(1, "zeta", &["alice"]),
                group(2, "alpha", &["alice", "bob", "alice"]),
                group(3, "zeta", &["alice"]),
            ],
        );
        assert!(res.diagnostics.is_empty());
        assert_eq!(res.membership.take_sorted("alice"), vec!["alpha", "zeta"]);
        assert_eq!(res.membership.take_sorted("bob"), vec!["alpha"]);
        assert!(res.membership.take_sorted("carol").is_empty());
    }

    #[test]
    fn unknown_member_reported_per_occurrence() {
        let t = table(&["bob"]);
        let res = resolve(
            &t,
            vec![group(1, "g1", &["ghost"]), group(3, "g3", &["ghost", "bob", "ghost"])],
        );
        assert_eq!(
            res.diagnostics,
            vec![
                Diagnostic::unknown_user(1, "ghost"),
                Diagnostic::unknown_user(3, "ghost"),
                Diagnostic::unknown_user(3, "ghost"),
            ]
        );
        let mut membership = res.membership;
        assert!(membership.take_sorted("ghost").is_empty());
        assert_eq!(membership.take_sorted("bob"), vec!["g3"]);
    }
}
