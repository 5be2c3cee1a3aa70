// Export modules for library usage
pub mod aggregation;
pub mod core;
pub mod report;
pub mod roi;

// Re-export commonly used types
pub use crate::core::errors::{AnnualizationCause, Denominator, Error, InputField, Result};

pub use crate::core::Record;

pub use crate::core::metrics::{
    count_profitable, find_max_profit, sort_by_profit, total_conversions, total_cost,
    total_profit, total_revenue,
};

pub use crate::roi::{
    compute_annualized_roi, compute_record_metrics, compute_record_metrics_annualized, manual_roi,
    RecordMetrics, DAYS_PER_YEAR,
};

pub use crate::aggregation::{aggregate_all, aggregate_by_key, Aggregate};

pub use crate::report::{
    build_report, AnalyzedRecord, GroupKey, ReportOptions, ReportSummary, RoiReport,
};
