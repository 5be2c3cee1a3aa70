pub mod annualize;
pub mod models;
pub mod ratio;


pub use annualize::{compute_annualized_roi, DAYS_PER_YEAR};
pub use models::RecordMetrics;
pub use ratio::{cost_per_conversion, manual_roi, revenue_per_conversion, roi_percent};

use crate::core::Record;

/// Compute the derived columns for one record.
pub fn compute_record_metrics(record: &Record) -> RecordMetrics {
    RecordMetrics {
        profit: record.profit(),
        roi_percent: ratio::roi_percent(record.cost, record.revenue),
        cost_per_conversion: ratio::cost_per_conversion(record.cost, record.conversions),
        revenue_per_conversion: ratio::revenue_per_conversion(record.revenue, record.conversions),
        annualized_roi_percent: None,
    }
}

/// Compute the derived columns plus the annualized ROI over an explicit
/// holding period in days.
///
/// A record whose ROI is undefined propagates that same error into the
/// annualized column rather than inventing a value for it.
pub fn compute_record_metrics_annualized(
    record: &Record,
    holding_period_days: f64,
) -> RecordMetrics {
    let mut metrics = compute_record_metrics(record);
    metrics.annualized_roi_percent = Some(
        metrics
            .roi_percent
            .and_then(|roi| annualize::compute_annualized_roi(roi, holding_period_days)),
    );
    metrics
}
