use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use crate::users::{dto::CreateUserRequest, services::UserDirectory};

pub fn parse_seed(raw: &str) -> anyhow::Result<Vec<CreateUserRequest>> {
    serde_json::from_str(raw).context("parse seed json")
}

pub fn load_seed_file(path: &Path) -> anyhow::Result<Vec<CreateUserRequest>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read seed file {}", path.display()))?;
    parse_seed(&raw).with_context(|| format!("seed file {}", path.display()))
}

/// Creates every valid request; rejected ones are logged and skipped.
/// Returns the number of users created.
pub fn apply_seed(dir: &mut UserDirectory, requests: Vec<CreateUserRequest>) -> usize {
    let total = requests.len();
    let mut created = 0;
    for (i, req) in requests.into_iter().enumerate() {
        match dir.create_user(req) {
            Ok(_) => created += 1,
            Err(e) => warn!(index = i, error = %e, "seed entry rejected"),
        }
    }
    info!(created, total, "seed applied");
    created
}
