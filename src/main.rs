use userdir::{
    config::{AppConfig, ReportFormat},
    users::seed::{apply_seed, load_seed_file},
    UserDirectory,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "userdir=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    // Logs go to stderr so the report on stdout stays clean.
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "config loaded");

    let mut directory = UserDirectory::with_config(config.directory.clone());
    if let Some(path) = &config.seed_file {
        let requests = load_seed_file(path)?;
        apply_seed(&mut directory, requests);
    }

    let report = match config.report_format {
        ReportFormat::Text => directory.generate_user_report(),
        ReportFormat::Json => directory.render_json()?,
    };
    println!("{report}");

    Ok(())
}
