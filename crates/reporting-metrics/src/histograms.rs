use metrics::{describe_histogram, histogram};
use std::time::Duration;

/// Initialize histogram descriptions
pub fn init() {
    describe_histogram!(
        "reporting_http_request_duration_seconds",
        "Wall-clock time to serve an analytics request"
    );
    describe_histogram!(
        "reporting_db_insert_duration_seconds",
        "Time for order insert operations"
    );
}

/// Record request duration for an endpoint
pub fn request_duration(endpoint: &'static str, duration: Duration) {
    histogram!("reporting_http_request_duration_seconds", "endpoint" => endpoint)
        .record(duration.as_secs_f64());
}

/// Record order insert duration
pub fn db_insert_duration(duration: Duration) {
    histogram!("reporting_db_insert_duration_seconds").record(duration.as_secs_f64());
}
