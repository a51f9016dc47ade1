//! Web UI: today's totals, the entry list, settings and the chart.
//!
//! Handlers are thin: each one opens a store on a blocking thread, calls into
//! `core`, and renders a page or redirects with a `?notice=` flash code.

pub mod error;
pub mod notice;
pub mod pages;
pub mod routes;
pub mod state;

use crate::config::Config;
use crate::errors::AppResult;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::add_entry))
        .route("/entries", get(routes::entries))
        .route("/entries/delete-last", post(routes::delete_last))
        .route("/entries/delete-today", post(routes::delete_today))
        .route(
            "/settings",
            get(routes::settings).post(routes::update_settings),
        )
        .route("/chart", get(routes::chart_page))
        .route("/chart.svg", get(routes::chart_svg))
        .route("/api/totals", get(routes::api_totals))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C / SIGTERM.
pub async fn serve(cfg: Config) -> AppResult<()> {
    let state = AppState::new(cfg);

    // Fail at startup, not on the first request, when the store is unusable.
    state.with_store(|_, _| Ok(())).await?;

    let app = router(state.clone());

    let address = format!("{}:{}", state.config.bind, state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on http://{address}");
    println!("healthlog web UI on http://{address} (Ctrl+C to stop)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal as unix_signal};

        match unix_signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
