use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use reporting_core::datetime;
use reporting_core::types::NewOrder;

/// Configuration for the background ingestion job.
///
/// Field values for the synthetic order are fixed per process; the job is a
/// liveness heartbeat, not a data generator.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub enabled: bool,

    /// Seconds between ticks (default: 60)
    pub interval_secs: u64,

    pub supplier_id: i64,
    pub customer_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub order_date: NaiveDateTime,
}

fn default_order_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or_default()
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 60,
            supplier_id: 1,
            customer_id: 1,
            quantity: 100,
            price: 500.0,
            order_date: default_order_date(),
        }
    }
}

impl IngestConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            enabled: std::env::var("INGEST_ENABLED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enabled),
            interval_secs: std::env::var("INGEST_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.interval_secs),
            supplier_id: std::env::var("SYNTHETIC_SUPPLIER_ID")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.supplier_id),
            customer_id: std::env::var("SYNTHETIC_CUSTOMER_ID")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.customer_id),
            quantity: std::env::var("SYNTHETIC_QUANTITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.quantity),
            price: std::env::var("SYNTHETIC_PRICE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.price),
            order_date: std::env::var("SYNTHETIC_ORDER_DATE")
                .ok()
                .and_then(|s| datetime::parse_flexible(&s))
                .unwrap_or(defaults.order_date),
        }
    }

    /// The fixed order inserted on every tick
    pub fn synthetic_order(&self) -> NewOrder {
        NewOrder {
            supplier_id: self.supplier_id,
            customer_id: self.customer_id,
            quantity: self.quantity,
            price: self.price,
            order_date: self.order_date,
        }
    }
}
