//! Server entry point.
//!
//! ```text
//! WECLAPP_BASE_URL=https://acme.weclapp.com/webapp/api/v1 \
//! WECLAPP_API_KEY=... \
//! RUST_LOG=article_ek_proxy=debug \
//! article-ek-proxy
//! ```
//!
//! `LOG_FORMAT=json` switches to JSON log lines.

use anyhow::Context;
use article_ek_proxy::api::rest::{AppState, create_router};
use article_ek_proxy::application::services::ArticleEnrichmentService;
use article_ek_proxy::config::AppConfig;
use article_ek_proxy::infrastructure::upstream::WeclappGateway;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "article_ek_proxy=info,tower_http=info";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Returns the error worth reporting from loading `.env`; a missing file is not one.
fn dotenv_failure(result: &dotenvy::Result<PathBuf>) -> Option<&dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    init_tracing();
    if let Some(e) = dotenv_failure(&dotenv) {
        warn!(error = %e, "Failed to load .env file");
    }

    let config = AppConfig::load().context("failed to load configuration")?;
    let addr = config.server.socket_addr()?;

    let gateway = WeclappGateway::new(&config.upstream).context("failed to create ERP gateway")?;
    info!(
        provider = %config.upstream.provider,
        base_url = %config.upstream.base_url,
        supply_source_mode = ?config.enrichment.supply_source_mode,
        concurrency = config.enrichment.concurrency,
        "ERP gateway configured"
    );

    let service = ArticleEnrichmentService::new(
        Arc::new(gateway),
        config.enrichment,
        config.upstream.page_size,
    );
    let router = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_dotenv_is_not_reported() {
        let result = Err(dotenvy::Error::Io(io::ErrorKind::NotFound.into()));
        assert!(dotenv_failure(&result).is_none());
        assert!(dotenv_failure(&Ok(PathBuf::from(".env"))).is_none());
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let result = Err(dotenvy::Error::LineParse("WECLAPP_API_KEY=\"abc".to_string(), 16));
        assert!(dotenv_failure(&result).is_some());

        let result = Err(dotenvy::Error::Io(io::ErrorKind::PermissionDenied.into()));
        assert!(dotenv_failure(&result).is_some());
    }
}
