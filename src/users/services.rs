use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};

use crate::config::DirectoryConfig;
use crate::users::{
    dto::CreateUserRequest,
    error::UserError,
    repo::UserRepo,
    repo_types::{User, UserId, UserStatus},
    report,
};

pub const ADULT_AGE: u32 = 18;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

fn has_control_chars(s: &str) -> bool {
    s.chars().any(char::is_control)
}

/// In-memory user directory: create, look up, deactivate, report.
#[derive(Debug, Default)]
pub struct UserDirectory {
    repo: UserRepo,
    config: DirectoryConfig,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DirectoryConfig) -> Self {
        Self {
            repo: UserRepo::new(),
            config,
        }
    }

    #[instrument(skip(self, req))]
    pub fn create_user(&mut self, req: CreateUserRequest) -> Result<User, UserError> {
        let (name, email, age) = match (present(req.name), present(req.email), req.age) {
            (Some(n), Some(e), Some(a)) => (n, e, a),
            _ => {
                warn!("create_user missing required fields");
                return Err(UserError::MissingFields);
            }
        };

        if age < ADULT_AGE {
            warn!(age, "create_user underage");
            return Err(UserError::Underage);
        }

        // A report line per user relies on this.
        if has_control_chars(&name) || has_control_chars(&email) {
            warn!("create_user control characters in name or email");
            return Err(UserError::ControlCharacters);
        }

        if self.config.strict_email && !is_valid_email(&email) {
            warn!(email = %email, "create_user invalid email");
            return Err(UserError::InvalidEmail);
        }

        let mut id = UserId::new();
        while self.repo.contains(&id) {
            id = UserId::new();
        }

        let user = User {
            id,
            name,
            email,
            age,
            is_admin: req.is_admin,
            status: UserStatus::Active,
            created_at: OffsetDateTime::now_utc(),
        };
        let inserted = self.repo.insert(user.clone());
        debug_assert!(inserted, "fresh id already stored");

        info!(user_id = %user.id, email = %user.email, is_admin = user.is_admin, "user created");
        Ok(user)
    }

    /// Unknown or malformed ids yield `None`.
    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        let found = id
            .parse::<UserId>()
            .ok()
            .and_then(|id| self.repo.find_by_id(&id))
            .cloned();
        if found.is_none() {
            debug!(id, "user not found");
        }
        found
    }

    /// Returns `false` for unknown ids and for admins, leaving the record unchanged.
    pub fn deactivate_user(&mut self, id: &str) -> bool {
        let Ok(user_id) = id.parse::<UserId>() else {
            debug!(id, "deactivate_user malformed id");
            return false;
        };
        match self.repo.find_by_id(&user_id) {
            None => {
                debug!(user_id = %user_id, "deactivate_user unknown id");
                false
            }
            Some(u) if u.is_admin => {
                warn!(user_id = %user_id, "refusing to deactivate admin");
                false
            }
            Some(_) => {
                self.repo.set_status(&user_id, UserStatus::Inactive);
                info!(user_id = %user_id, "user deactivated");
                true
            }
        }
    }

    pub fn generate_user_report(&self) -> String {
        report::render_text(self.repo.list())
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        report::render_json(self.repo.list())
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.repo.list().iter()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    pub fn clear_all(&mut self) {
        let removed = self.repo.len();
        self.repo.clear();
        info!(removed, "directory cleared");
    }
}
