use crate::job::PeriodicJob;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Drives a [`PeriodicJob`] on a fixed interval until stopped.
///
/// Tick failures are logged and counted; they never terminate the loop.
pub struct JobRunner {
    shutdown_sender: Option<mpsc::Sender<()>>,
    task_handle: Option<tokio::task::JoinHandle<()>>,
}

impl JobRunner {
    /// Spawn the background loop for `job`
    pub fn start(job: Arc<dyn PeriodicJob>, interval: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let handle = tokio::spawn(Self::run_loop(job, shutdown_rx, interval));

        Self {
            shutdown_sender: Some(shutdown_tx),
            task_handle: Some(handle),
        }
    }

    /// Signal shutdown and wait for the loop to finish
    pub async fn stop(&mut self) {
        if let Some(sender) = self.shutdown_sender.take() {
            let _ = sender.send(()).await;
        }

        if let Some(handle) = self.task_handle.take() {
            match handle.await {
                Ok(()) => info!("Job runner stopped"),
                Err(e) => error!(error = %e, "Job runner task panicked"),
            }
        }
    }

    async fn run_loop(
        job: Arc<dyn PeriodicJob>,
        mut shutdown_rx: mpsc::Receiver<()>,
        interval: Duration,
    ) {
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!(job = job.name(), "Job runner shutting down");
                    break;
                }
                _ = tokio::time::sleep(interval) => {
                    if let Err(e) = job.tick().await {
                        reporting_metrics::counters::ingest_failures(1);
                        error!(job = job.name(), error = %e, "Job tick failed");
                    }
                }
            }
        }
    }
}
