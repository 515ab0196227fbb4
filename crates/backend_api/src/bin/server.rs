use anyhow::Context;
use backend_api::{init_tracing, run_server, AcknowledgingService};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // SETTINGS_PATH is optional; a missing file means defaults
    let settings_path = env::var("SETTINGS_PATH").ok().map(PathBuf::from);
    let settings = settings_loader::load_settings_with_fallback(settings_path.as_ref())
        .context("Loading server settings")?;
    let settings = settings_loader::apply_env_overrides(settings, |key| env::var(key).ok())?;

    init_tracing(&settings.log_filter);
    tracing::info!(
        host = %settings.host,
        port = settings.port,
        settings_file = ?settings_path,
        "Finance API configuration loaded"
    );

    let service = Arc::new(AcknowledgingService);
    run_server(service, &settings).await?;

    Ok(())
}
