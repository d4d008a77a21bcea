//! User table: username → user record, built from the passwd pass.

use std::collections::HashMap;

use tracing::debug;

use crate::sys::SystemUser;

/// Lookup of users by name. A repeated username replaces the earlier entry.
#[derive(Clone, Debug, Default)]
pub struct UserTable {
    users: HashMap<String, SystemUser>,
}

impl UserTable {
    /// Insert records in order; later duplicates overwrite earlier ones.
    pub fn build<I: IntoIterator<Item = SystemUser>>(records: I) -> Self {
        let mut table = Self::default();
        for user in records {
            table.insert(user);
        }
        table
    }

    pub fn insert(&mut self, user: SystemUser) -> Option<SystemUser> {
        let previous = self.users.insert(user.name.clone(), user);
        if let Some(prev) = &previous {
            debug!(user = %prev.name, "duplicate username, keeping the later entry");
        }
        previous
    }

    pub fn contains(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    pub fn into_users(self) -> impl Iterator<Item = SystemUser> {
        self.users.into_values()
    }
}

impl FromIterator<SystemUser> for UserTable {
    fn from_iter<I: IntoIterator<Item = SystemUser>>(iter: I) -> Self {
        Self::build(iter)
    }
}
