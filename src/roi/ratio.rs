use crate::core::errors::{Denominator, Error, InputField, Result};

/// ROI of a cost/revenue pair, as a percentage of cost.
///
/// Defined only for a positive cost; a zero or negative cost has no
/// meaningful ROI and is reported as `UndefinedRatio`, never as `0` or
/// infinity.
pub fn roi_percent(cost: f64, revenue: f64) -> Result<f64> {
    if cost > 0.0 {
        Ok((revenue - cost) / cost * 100.0)
    } else {
        Err(Error::undefined_ratio(Denominator::Cost, cost))
    }
}

/// Cost per conversion; undefined when the count is zero or absent.
pub fn cost_per_conversion(cost: f64, conversions: Option<u64>) -> Result<f64> {
    per_conversion(cost, conversions)
}

/// Revenue per conversion; undefined when the count is zero or absent.
pub fn revenue_per_conversion(revenue: f64, conversions: Option<u64>) -> Result<f64> {
    per_conversion(revenue, conversions)
}

fn per_conversion(amount: f64, conversions: Option<u64>) -> Result<f64> {
    match conversions {
        Some(count) if count > 0 => Ok(amount / count as f64),
        // An absent count guards the same as a zero count.
        Some(_) | None => Err(Error::undefined_ratio(Denominator::Conversions, 0.0)),
    }
}

/// ROI of a single investment/return pair, as a plain ratio.
///
/// The investment must be positive; `0.5` means a 50% return.
pub fn manual_roi(investment: f64, return_amount: f64) -> Result<f64> {
    if investment > 0.0 {
        Ok((return_amount - investment) / investment)
    } else {
        Err(Error::invalid_input(InputField::Investment, investment))
    }
}
