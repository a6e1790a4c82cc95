use crate::config::IngestConfig;
use crate::job::PeriodicJob;
use crate::{IngestError, Result};
use async_trait::async_trait;
use reporting_core::types::NewOrder;
use reporting_db::repositories::OrderRepository;
use reporting_db::DatabasePool;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Inserts one fixed synthetic order per tick.
///
/// Each tick runs in its own transaction; a failed insert rolls back and the
/// error surfaces to the runner. No retry within the tick.
pub struct SyntheticOrderJob {
    db_pool: Arc<DatabasePool>,
    order: NewOrder,
}

impl SyntheticOrderJob {
    pub fn new(db_pool: Arc<DatabasePool>, config: &IngestConfig) -> Self {
        Self {
            db_pool,
            order: config.synthetic_order(),
        }
    }
}

#[async_trait]
impl PeriodicJob for SyntheticOrderJob {
    fn name(&self) -> &'static str {
        "synthetic-order"
    }

    async fn tick(&self) -> Result<()> {
        let started = Instant::now();
        debug!("Inserting synthetic order");

        let mut tx = self
            .db_pool
            .inner()
            .begin()
            .await
            .map_err(|e| IngestError::Database(e.to_string()))?;

        match OrderRepository::insert(&mut *tx, &self.order).await {
            Ok(order_id) => {
                tx.commit()
                    .await
                    .map_err(|e| IngestError::Database(e.to_string()))?;

                let elapsed = started.elapsed();
                reporting_metrics::counters::synthetic_orders(1);
                reporting_metrics::histograms::db_insert_duration(elapsed);
                info!(
                    order_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Synthetic order inserted"
                );
                Ok(())
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    error!(error = %rollback_err, "Rollback after failed insert also failed");
                }
                Err(e.into())
            }
        }
    }
}
