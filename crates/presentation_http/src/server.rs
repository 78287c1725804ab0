//! Serving with a bounded graceful shutdown.
//!
//! Once the shutdown future resolves the listener stops accepting and open
//! connections get `drain_timeout` to finish. Whatever is still running
//! after that is abandoned.

use std::time::Duration;

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every connection closed within the drain timeout
    Drained,
    /// Connections were still open when the drain timeout ran out
    TimedOut,
}

/// Serve `app` until `shutdown` resolves, then drain for at most `drain_timeout`.
///
/// # Errors
///
/// Returns the I/O error that stopped the server, if any.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> std::io::Result<ShutdownOutcome>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let graceful = async move {
        shutdown.await;
        let _ = signalled_tx.send(());
    };
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(graceful)
        .into_future();

    let deadline = async move {
        // Sender dropped without a signal means the server already stopped
        if signalled_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
        info!(?drain_timeout, "Draining open connections");
        tokio::time::sleep(drain_timeout).await;
    };

    tokio::select! {
        result = server => {
            result?;
            Ok(ShutdownOutcome::Drained)
        },
        () = deadline => {
            warn!(?drain_timeout, "Connections still open after drain timeout, closing");
            Ok(ShutdownOutcome::TimedOut)
        },
    }
}
