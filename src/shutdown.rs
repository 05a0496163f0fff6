//! Cooperative cancellation shared by the job and in-flight requests.
use tokio::sync::broadcast;

pub type ShutdownSender = broadcast::Sender<()>;
pub type ShutdownReceiver = broadcast::Receiver<()>;

/// Broadcast channel size for shutdown notifications (single signal fan-out).
const SHUTDOWN_CHANNEL_CAPACITY: usize = 1;

#[must_use]
pub fn shutdown_channel() -> (ShutdownSender, ShutdownReceiver) {
    broadcast::channel::<()>(SHUTDOWN_CHANNEL_CAPACITY)
}

/// Fires shutdown on Ctrl+C (and SIGTERM on unix). Exits quietly once shutdown
/// was triggered elsewhere, including a send made before the task first runs.
pub fn setup_signal_shutdown_handler(shutdown_tx: &ShutdownSender) -> tokio::task::JoinHandle<()> {
    let shutdown_tx = shutdown_tx.clone();
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::spawn(async move {
        #[cfg(unix)]
        let mut term_signal =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(signal) => Some(signal),
                Err(err) => {
                    tracing::warn!("Failed to register SIGTERM handler: {}", err);
                    None
                }
            };

        #[cfg(unix)]
        {
            tokio::select! {
                _ = shutdown_rx.recv() => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::debug!("Ctrl+C received, stopping");
                    drop(shutdown_tx.send(()));
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {
                    tracing::debug!("SIGTERM received, stopping");
                    drop(shutdown_tx.send(()));
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = shutdown_rx.recv() => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::debug!("Ctrl+C received, stopping");
                    drop(shutdown_tx.send(()));
                }
            }
        }
    })
}
