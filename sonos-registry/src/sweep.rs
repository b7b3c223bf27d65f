//! Periodic background rediscovery.
//!
//! [`SweepTask`] re-runs [`SpeakerRegistry::refresh`] at a fixed interval so
//! speakers that power on or off show up or disappear without a restart.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, timeout, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::error::{RegistryError, Result};
use crate::registry::SpeakerRegistry;

/// Added to the discovery timeout when waiting for the loop to stop
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Handle to the background discovery loop
///
/// The first sweep runs one interval after start, because constructing the
/// registry already ran one. Each sweep runs on tokio's blocking pool.
///
/// Dropping the handle aborts the loop; call [`SweepTask::shutdown`] to wait
/// for an in-flight sweep to finish instead.
///
/// # Example
///
/// ```rust,ignore
/// let registry = Arc::new(SpeakerRegistry::new(config, discovery));
/// let sweep = SweepTask::start(Arc::clone(&registry));
/// // ... serve requests ...
/// sweep.shutdown().await?;
/// ```
pub struct SweepTask {
    background_task: Option<JoinHandle<()>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    shutdown_timeout: Duration,
}

impl SweepTask {
    /// Start sweeping at the registry's configured interval
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(registry: Arc<SpeakerRegistry>) -> Self {
        let period = registry.config().sweep_interval;
        Self::start_with_interval(registry, period)
    }

    /// Start sweeping every `period`
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_with_interval(registry: Arc<SpeakerRegistry>, period: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let shutdown_timeout = registry.config().discovery_timeout + SHUTDOWN_GRACE;

        info!("Starting discovery sweep every {:?}", period);
        let background_task = tokio::spawn(Self::sweep_loop(registry, period, shutdown_rx));

        Self {
            background_task: Some(background_task),
            shutdown_tx: Some(shutdown_tx),
            shutdown_timeout,
        }
    }

    pub fn is_running(&self) -> bool {
        self.background_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Stop the loop, waiting for an in-flight sweep to complete
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Shutdown` if the loop does not stop within the
    /// discovery timeout plus a grace period, or if it panicked.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(()).await;
        }

        let Some(task) = self.background_task.take() else {
            return Ok(());
        };

        match timeout(self.shutdown_timeout, task).await {
            Ok(Ok(())) => {
                info!("Discovery sweep stopped");
                Ok(())
            }
            Ok(Err(e)) => Err(RegistryError::Shutdown(format!("sweep task panicked: {e}"))),
            Err(_) => Err(RegistryError::Shutdown(format!(
                "sweep task did not stop within {:?}",
                self.shutdown_timeout
            ))),
        }
    }

    async fn sweep_loop(
        registry: Arc<SpeakerRegistry>,
        period: Duration,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let registry = Arc::clone(&registry);
                    match tokio::task::spawn_blocking(move || registry.refresh()).await {
                        Ok(outcome) => debug!("Discovery sweep finished: {:?}", outcome),
                        Err(e) => warn!("Discovery sweep did not complete: {}", e),
                    }
                }
                _ = shutdown_rx.recv() => {
                    break;
                }
            }
        }
    }
}

impl Drop for SweepTask {
    fn drop(&mut self) {
        if let Some(task) = self.background_task.take() {
            task.abort();
        }
    }
}
