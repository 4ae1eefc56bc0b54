use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};

/// Broadcasts a single shutdown notification to every subscriber.
///
/// The HTTP server and the cleanup task both subscribe; whichever observes the
/// termination signal first calls [`ShutdownCoordinator::shutdown`].
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: broadcast::Sender<()>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(1);
        Self {
            tx,
            shutdown_initiated: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_initiated.load(Ordering::Relaxed)
    }

    /// Mark shutdown as started and notify subscribers. Idempotent.
    pub fn shutdown(&self) {
        if self
            .shutdown_initiated
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            info!("Initiating graceful shutdown");
            let _ = self.tx.send(());
        }
    }

    /// Resolve once shutdown has been requested, either by a signal or by
    /// another holder calling [`shutdown`](Self::shutdown).
    pub async fn wait(&self) {
        // Subscribe before checking the flag: shutdown() sets it before sending
        let mut rx = self.subscribe();
        if self.is_shutting_down() {
            return;
        }
        tokio::select! {
            _ = shutdown_signal() => self.shutdown(),
            _ = rx.recv() => {}
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
///
/// A signal handler that fails to install is logged and then never fires, so
/// the other signal still works.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT (Ctrl+C), shutting down gracefully"),
        _ = terminate => info!("Received SIGTERM, shutting down gracefully"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shutdown_notifies_subscribers_once() {
        let coordinator = ShutdownCoordinator::new();
        let mut rx = coordinator.subscribe();

        assert!(!coordinator.is_shutting_down());
        coordinator.shutdown();
        coordinator.shutdown();

        assert!(coordinator.is_shutting_down());
        assert!(rx.recv().await.is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_wait_returns_after_shutdown() {
        let coordinator = ShutdownCoordinator::new();
        let waiter = coordinator.clone();
        let handle = tokio::spawn(async move { waiter.wait().await });

        tokio::task::yield_now().await;
        coordinator.shutdown();

        tokio::time::timeout(std::time::Duration::from_secs(1), handle)
            .await
            .expect("wait should resolve")
            .unwrap();
    }
}
