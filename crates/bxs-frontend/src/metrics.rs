use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts};

lazy_static::lazy_static! {
    pub static ref HEALTH_CHECKS_TOTAL: IntCounterVec = prometheus::register_int_counter_vec!(
        Opts::new(
            "bxs_frontend_health_checks_total",
            "Total number of backend health fetches"
        ),
        &["result"]
    )
    .unwrap();

    pub static ref ORDER_LOOKUPS_TOTAL: IntCounterVec = prometheus::register_int_counter_vec!(
        Opts::new(
            "bxs_frontend_order_lookups_total",
            "Total number of order lookups by outcome"
        ),
        &["result"]
    )
    .unwrap();

    pub static ref ORDER_LOOKUP_DURATION: Histogram = prometheus::register_histogram!(
        HistogramOpts::new(
            "bxs_frontend_order_lookup_duration_seconds",
            "Duration of order lookups in seconds"
        )
    )
    .unwrap();
}

pub fn increment_health_checks(result: &str) {
    HEALTH_CHECKS_TOTAL.with_label_values(&[result]).inc();
}

pub fn increment_order_lookups(result: &str) {
    ORDER_LOOKUPS_TOTAL.with_label_values(&[result]).inc();
}

pub fn observe_order_lookup_duration(secs: f64) {
    ORDER_LOOKUP_DURATION.observe(secs);
}

/// Encode every registered metric in Prometheus text format.
pub fn gather_text() -> String {
    let encoder = prometheus::TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return "Failed to encode metrics\n".to_string();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
