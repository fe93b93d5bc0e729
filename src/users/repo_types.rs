use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// Opaque user identifier, stable for the lifetime of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user id {0:?}")]
pub struct InvalidUserId(String);

/// Only the exact text produced by `Display` is accepted, so every id has
/// a single spelling.
impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Uuid::parse_str(s) {
            Ok(uuid) if uuid.hyphenated().to_string() == s => Ok(Self(uuid)),
            _ => Err(InvalidUserId(s.to_string())),
        }
    }
}

/// Account status. Only `Active -> Inactive` is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "ativo")]
    Active,
    #[serde(rename = "inativo")]
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ativo",
            UserStatus::Inactive => "inativo",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record held by the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub is_admin: bool,
    pub status: UserStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display_parses_back() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().expect("hyphenated uuid");
        assert_eq!(parsed, id);
    }

    #[test]
    fn user_id_rejects_garbage() {
        assert!("id-fake-123".parse::<UserId>().is_err());
    }

    #[test]
    fn user_id_rejects_alternate_spellings() {
        let id = UserId::new();
        let canon = id.to_string();
        for alt in [
            canon.to_uppercase(),
            canon.replace('-', ""),
            format!("urn:uuid:{canon}"),
            format!("{{{canon}}}"),
        ] {
            assert!(alt.parse::<UserId>().is_err(), "accepted {alt}");
        }
    }

    #[test]
    fn status_uses_portuguese_labels() {
        assert_eq!(UserStatus::Active.to_string(), "ativo");
        assert_eq!(UserStatus::Inactive.to_string(), "inativo");
        assert_eq!(
            serde_json::to_string(&UserStatus::Inactive).unwrap(),
            "\"inativo\""
        );
    }

    #[test]
    fn user_serializes_created_at_as_rfc3339() {
        let user = User {
            id: UserId::new(),
            name: "Alice".into(),
            email: "alice@email.com".into(),
            age: 28,
            is_admin: false,
            status: UserStatus::Active,
            created_at: time::macros::datetime!(2024-05-01 12:00 UTC),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["created_at"], "2024-05-01T12:00:00Z");
        assert_eq!(json["status"], "ativo");
        assert_eq!(json["id"], user.id.to_string());
    }
}
