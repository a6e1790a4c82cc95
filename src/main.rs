use reporting_api::{ApiConfig, ApiServer};
use reporting_core::config::LogConfig;
use reporting_db::{DatabaseConfig, DatabasePool};
use reporting_ingest::{IngestConfig, JobRunner, SyntheticOrderJob};
use reporting_metrics::{MetricsConfig, MetricsServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    let log_config = LogConfig::from_env();
    let _log_guard = match reporting_core::logging::init(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            std::process::exit(1);
        }
    };

    info!("Order reporting service starting...");

    let db_config = DatabaseConfig::from_env();
    let db_pool = match DatabasePool::new(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "Failed to connect to database");
            std::process::exit(1);
        }
    };
    if let Err(e) = db_pool.migrate().await {
        error!(error = %e, "Failed to run database migrations");
        std::process::exit(1);
    }
    info!("Database connected and migrations applied");
    let db_pool = Arc::new(db_pool);

    let metrics_config = MetricsConfig::from_env();
    if metrics_config.enabled {
        let metrics_server = MetricsServer::new(metrics_config);
        tokio::spawn(async move {
            if let Err(e) = metrics_server.run().await {
                error!(error = %e, "Metrics server error");
            }
        });
        info!("Metrics server started");
    } else {
        warn!("Metrics disabled");
    }

    let ingest_config = IngestConfig::from_env();
    let mut job_runner = if ingest_config.enabled {
        let job = Arc::new(SyntheticOrderJob::new(db_pool.clone(), &ingest_config));
        let runner = JobRunner::start(job, Duration::from_secs(ingest_config.interval_secs));
        info!(
            interval_secs = ingest_config.interval_secs,
            "Background order ingestion started"
        );
        Some(runner)
    } else {
        warn!("Background order ingestion disabled");
        None
    };

    let api_config = ApiConfig::from_env();
    let api_server = ApiServer::new(api_config, db_pool.clone());
    if let Err(e) = api_server.run(shutdown_signal()).await {
        error!(error = %e, "API server error");
        std::process::exit(1);
    }

    // Graceful shutdown
    info!("Shutting down...");
    if let Some(runner) = job_runner.as_mut() {
        runner.stop().await;
    }
    db_pool.close().await;
    info!("Order reporting service shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
