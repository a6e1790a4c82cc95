use metrics::{counter, describe_counter};

/// Initialize counter descriptions
pub fn init() {
    describe_counter!(
        "reporting_http_requests_total",
        "Total number of HTTP requests served"
    );
    describe_counter!(
        "reporting_orders_created_total",
        "Total number of orders created through the API"
    );
    describe_counter!(
        "reporting_synthetic_orders_total",
        "Total number of orders inserted by the background job"
    );
    describe_counter!(
        "reporting_ingest_failures_total",
        "Total number of failed background ingestion ticks"
    );
}

/// Increment the request counter for an endpoint and outcome
pub fn http_requests(endpoint: &'static str, outcome: &'static str) {
    counter!("reporting_http_requests_total", "endpoint" => endpoint, "outcome" => outcome)
        .increment(1);
}

/// Increment orders created counter
pub fn orders_created(count: u64) {
    counter!("reporting_orders_created_total").increment(count);
}

/// Increment synthetic orders counter
pub fn synthetic_orders(count: u64) {
    counter!("reporting_synthetic_orders_total").increment(count);
}

/// Increment ingestion failures counter
pub fn ingest_failures(count: u64) {
    counter!("reporting_ingest_failures_total").increment(count);
}
