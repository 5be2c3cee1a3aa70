use serde::{Deserialize, Serialize};

use crate::core::errors::Result;

/// Derived columns for one record.
///
/// `profit` is always defined. Each ratio carries its own defined or
/// undefined outcome, so a zero denominator in one column never hides the
/// others. `annualized_roi_percent` is `None` unless a holding period was
/// supplied alongside the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordMetrics {
    pub profit: f64,
    pub roi_percent: Result<f64>,
    pub cost_per_conversion: Result<f64>,
    pub revenue_per_conversion: Result<f64>,
    pub annualized_roi_percent: Option<Result<f64>>,
}
