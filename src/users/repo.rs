use std::collections::HashMap;

use crate::users::repo_types::{User, UserId, UserStatus};

/// In-memory user storage. Keeps insertion order for reports.
#[derive(Debug, Default)]
pub struct UserRepo {
    rows: Vec<User>,
    index: HashMap<UserId, usize>,
}

impl UserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new record. Returns `false` if the id is already taken.
    pub fn insert(&mut self, user: User) -> bool {
        if self.index.contains_key(&user.id) {
            return false;
        }
        self.index.insert(user.id, self.rows.len());
        self.rows.push(user);
        true
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.index.contains_key(id)
    }

    pub fn find_by_id(&self, id: &UserId) -> Option<&User> {
        self.index.get(id).map(|&i| &self.rows[i])
    }

    pub fn set_status(&mut self, id: &UserId, status: UserStatus) -> bool {
        match self.index.get(id) {
            Some(&i) => {
                self.rows[i].status = status;
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &[User] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.index.clear();
    }
}
