use std::{path::PathBuf, str::FromStr};

use anyhow::{bail, Context};
/// Rules applied by the directory when creating users.
#[derive(Debug, Clone, Default)]
pub struct DirectoryConfig {
    /// Reject emails that do not look like `local@domain.tld`.
    pub strict_email: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => bail!("unknown report format {other:?} (expected text or json)"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub directory: DirectoryConfig,
    pub report_format: ReportFormat,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let strict_email = match get("USERDIR_STRICT_EMAIL") {
            Some(v) => parse_flag(&v).context("USERDIR_STRICT_EMAIL")?,
            None => false,
        };
        let report_format = match get("USERDIR_REPORT_FORMAT") {
            Some(v) => v.parse::<ReportFormat>().context("USERDIR_REPORT_FORMAT")?,
            None => ReportFormat::default(),
        };
        let seed_file = get("USERDIR_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            directory: DirectoryConfig { strict_email },
            report_format,
            seed_file,
        })
    }
}

fn parse_flag(v: &str) -> anyhow::Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
