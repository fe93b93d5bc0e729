use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::users::repo_types::{User, UserId, UserStatus};

/// Input for user creation. Any field may be absent; the directory decides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "idade")]
    pub age: Option<u32>,
    #[serde(default, alias = "isAdmin")]
    pub is_admin: bool,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            age: Some(age),
            is_admin: false,
        }
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}

/// Public view of a user, as rendered in JSON reports. Email is withheld.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub age: u32,
    pub is_admin: bool,
    pub status: UserStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<&User> for PublicUser {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            age: u.age,
            is_admin: u.is_admin,
            status: u.status,
            created_at: u.created_at,
        }
    }
}
