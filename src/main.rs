//! chat-relay server binary.

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chat_relay::api;
use chat_relay::config::RelayConfig;
use chat_relay::inference::InferenceClient;
use chat_relay::state::AppState;
use chat_relay::store::ChatStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RelayConfig::load()?;
    let db_path = config.resolve_db_path();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.backend_url,
        chat_model = %config.chat_model,
        code_model = %config.code_model,
        db_path = %db_path.display(),
        "starting chat-relay"
    );

    let store = ChatStore::open(&db_path.to_string_lossy())?;
    let inference = InferenceClient::new(&config.backend_url, config.timeout_secs)?;
    let state = AppState::new(&config, store, inference);

    let app = api::create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
