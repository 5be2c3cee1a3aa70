use crate::core::errors::{Error, Result};

/// Days in a compounding year, including the leap-day fraction.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Normalize an ROI percentage to a one-year holding period.
///
/// Inverts compound interest over the holding period:
/// `((1 + roi/100) ^ (365.25 / days) - 1) * 100`. A non-positive holding
/// period is undefined. So is a non-positive compounding base (an ROI at
/// or below -100%), which would otherwise raise a negative number to a
/// fractional exponent and yield NaN; the guard applies even when the
/// exponent happens to be integral.
pub fn compute_annualized_roi(roi_percent: f64, holding_period_days: f64) -> Result<f64> {
    if holding_period_days.is_nan() || holding_period_days <= 0.0 {
        return Err(Error::non_positive_holding_period(holding_period_days));
    }
    let base = 1.0 + roi_percent / 100.0;
    if base.is_nan() || base <= 0.0 {
        return Err(Error::non_positive_base(base));
    }
    Ok((base.powf(DAYS_PER_YEAR / holding_period_days) - 1.0) * 100.0)
}
