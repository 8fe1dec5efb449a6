//! axumサーバー起動・シャットダウンハンドリング

use crate::common::error::{LinkError, LinkResult};
use crate::AppState;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// axumサーバーを起動し、Ctrl+C / SIGTERM を待機する
pub async fn run(state: AppState, bind_addr: &str) -> LinkResult<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| LinkError::Config(format!("Failed to bind to {}: {}", bind_addr, e)))?;

    info!("Link monitor listening on {}", bind_addr);

    serve(listener, state, shutdown_signal()).await
}

/// バインド済みリスナーでサーバーを動かし、`signal` 完了で停止する
///
/// 停止時に`AppState`のDBプールを閉じる。
pub async fn serve<F>(listener: TcpListener, state: AppState, signal: F) -> LinkResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db_pool = state.db_pool.clone();
    let app = crate::api::create_app(state);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .map_err(|e| LinkError::Server(e.to_string()));

    db_pool.close().await;

    result?;
    info!("Server shutdown complete");
    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
