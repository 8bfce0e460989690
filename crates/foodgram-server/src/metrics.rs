// Metrics for observability
// Counters and histograms for report generation and cart changes

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};

/// Register metric descriptions. Call once at startup.
pub fn init_metrics() {
    describe_counter!(
        "shopping_list_renders_total",
        "Total number of shopping-list reports rendered"
    );
    describe_counter!(
        "shopping_list_render_failures_total",
        "Total number of failed shopping-list report requests"
    );
    describe_histogram!(
        "shopping_list_render_duration_seconds",
        "Shopping-list aggregation and rendering duration in seconds"
    );
    describe_histogram!(
        "shopping_list_rows",
        "Number of aggregated ingredient rows per shopping list"
    );
    describe_counter!(
        "recipe_collection_changes_total",
        "Total number of shopping cart and favorite changes"
    );
}

pub fn record_shopping_list_render(rows: usize, duration_secs: f64) {
    counter!("shopping_list_renders_total").increment(1);
    histogram!("shopping_list_render_duration_seconds").record(duration_secs);
    histogram!("shopping_list_rows").record(rows as f64);
}

/// `stage` is either `aggregate` or `render`.
pub fn record_shopping_list_failure(stage: &'static str) {
    counter!("shopping_list_render_failures_total", "stage" => stage).increment(1);
}

pub fn record_collection_change(collection: &'static str, action: &'static str) {
    counter!(
        "recipe_collection_changes_total",
        "collection" => collection,
        "action" => action
    )
    .increment(1);
}

/// Wall-clock timer for duration histograms
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
