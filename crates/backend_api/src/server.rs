use std::sync::Arc;

use anyhow::Context;
use settings_loader::ServerSettings;
use tokio::net::TcpListener;

use crate::{router::create_router, service::FinanceService};

/// Initialize tracing. `RUST_LOG` wins over the configured filter.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

/// Binds the configured address. Hostnames such as `localhost` are resolved here.
pub async fn bind_listener(settings: &ServerSettings) -> anyhow::Result<TcpListener> {
    let address = settings.bind_address();
    TcpListener::bind(&address)
        .await
        .with_context(|| format!("Binding {}", address))
}

/// Run the API server
pub async fn run_server(
    service: Arc<dyn FinanceService>,
    settings: &ServerSettings,
) -> anyhow::Result<()> {
    let app = create_router(service);

    let listener = bind_listener(settings).await?;
    tracing::info!("Starting server on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
