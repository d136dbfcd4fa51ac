mod api;
mod middleware;

use std::sync::Arc;

use dsm_core::AppConfig;
use dsm_sentiment::{LexiconAnalyzer, PolarityAnalyzer};
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState, SERVICE_VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = dsm_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let analyzer = build_analyzer(&config)?;
    let state = AppState::new(analyzer, config.service_name.clone());
    let app = build_app(state, config.body_limit_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        service = %config.service_name,
        version = SERVICE_VERSION,
        "model server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Built once at startup and shared read-only by every request.
fn build_analyzer(config: &AppConfig) -> anyhow::Result<Arc<dyn PolarityAnalyzer>> {
    let analyzer = match &config.lexicon_path {
        Some(path) => {
            let file = dsm_core::load_lexicon_file(path)?;
            tracing::info!(
                path = %path.display(),
                words = file.words.len(),
                "loaded lexicon overrides"
            );
            LexiconAnalyzer::with_overrides(file.into_pairs())
        }
        None => LexiconAnalyzer::new(),
    };
    Ok(Arc::new(analyzer))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
