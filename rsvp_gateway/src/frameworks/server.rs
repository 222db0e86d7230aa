// Framework bootstrap for the gateway runtime.

use crate::frameworks::config::Config;
use crate::interface_adapters::clients::ScriptClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{QrImageGenerator, ShareLinks};
use axum::http::{HeaderName, HeaderValue, Method, header};
use std::io::{self, Result};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, config: Config) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&config)?;
    let cors = cors_layer(&config.allowed_origins)?;

    let app = routes::app(state).layer(cors);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        })
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        io::Error::other(e)
    })?;
    let address = config.socket_addr();

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

fn build_state(config: &Config) -> Result<Arc<AppState>> {
    let client = ScriptClient::new(config.script_url.clone(), &config.user_agent, config.timeouts)
        .map_err(|e| io::Error::other(format!("failed to initialize script client: {e}")))?;
    tracing::debug!(
        script_url = %config.script_url,
        lookup_timeout_ms = config.timeouts.lookup.as_millis(),
        search_timeout_ms = config.timeouts.search.as_millis(),
        submit_timeout_ms = config.timeouts.submit.as_millis(),
        "script client configured"
    );

    Ok(Arc::new(AppState {
        directory: Arc::new(client),
        links: ShareLinks::new(config.public_base_url.as_str()),
        qr: QrImageGenerator::new(config.verification_url.as_str()),
    }))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| io::Error::other(format!("invalid allowed origin {origin:?}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
        _ = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
