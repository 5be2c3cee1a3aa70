//! Shared error types for ROI arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Denominator of a ratio-style metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Denominator {
    Cost,
    Conversions,
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denominator::Cost => write!(f, "cost"),
            Denominator::Conversions => write!(f, "conversions"),
        }
    }
}

/// Caller-supplied field rejected by an input guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    Investment,
    Cost,
    Revenue,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Investment => write!(f, "investment"),
            InputField::Cost => write!(f, "cost"),
            InputField::Revenue => write!(f, "revenue"),
        }
    }
}

/// Why an annualization could not be computed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnnualizationCause {
    /// The holding period was zero, negative, or NaN.
    NonPositiveHoldingPeriod { days: f64 },
    /// The compounding base `1 + roi/100` was zero, negative, or NaN, so
    /// raising it to a fractional exponent is undefined.
    NonPositiveBase { base: f64 },
}

impl fmt::Display for AnnualizationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnualizationCause::NonPositiveHoldingPeriod { days } => {
                write!(f, "holding period must be positive, got {days} days")
            }
            AnnualizationCause::NonPositiveBase { base } => {
                write!(f, "compounding base 1 + roi/100 must be positive, got {base}")
            }
        }
    }
}

/// Main error type for ROI calculations.
///
/// Every undefined-arithmetic case is an explicit variant rather than a
/// panic, a NaN, or a sentinel value such as `0` or infinity. Each variant
/// carries enough context for a caller to explain an "N/A" cell.
#[derive(Clone, Copy, Debug, PartialEq, Error, Serialize, Deserialize)]
pub enum Error {
    /// A ratio's denominator was zero or negative where a positive value
    /// is required.
    #[error("ratio undefined: {denominator} must be positive, got {value}")]
    UndefinedRatio {
        denominator: Denominator,
        value: f64,
    },

    /// Annualization was requested over an undefined domain.
    #[error("annualization undefined: {cause}")]
    UndefinedAnnualization { cause: AnnualizationCause },

    /// A caller-supplied value was outside the meaningful range.
    #[error("invalid input: {field} out of range, got {value}")]
    InvalidInput { field: InputField, value: f64 },
}

impl Error {
    /// Create an undefined-ratio error for the given denominator value.
    pub fn undefined_ratio(denominator: Denominator, value: f64) -> Self {
        Self::UndefinedRatio { denominator, value }
    }

    /// Create an undefined-annualization error for a non-positive holding
    /// period.
    pub fn non_positive_holding_period(days: f64) -> Self {
        Self::UndefinedAnnualization {
            cause: AnnualizationCause::NonPositiveHoldingPeriod { days },
        }
    }

    /// Create an undefined-annualization error for a non-positive
    /// compounding base.
    pub fn non_positive_base(base: f64) -> Self {
        Self::UndefinedAnnualization {
            cause: AnnualizationCause::NonPositiveBase { base },
        }
    }

    /// Create an invalid-input error for an out-of-range field.
    pub fn invalid_input(field: InputField, value: f64) -> Self {
        Self::InvalidInput { field, value }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_denominator() {
        let err = Error::undefined_ratio(Denominator::Cost, 0.0);
        assert_eq!(err.to_string(), "ratio undefined: cost must be positive, got 0");

        let err = Error::undefined_ratio(Denominator::Conversions, 0.0);
        assert_eq!(err.to_string(), "ratio undefined: conversions must be positive, got 0");
    }

    #[test]
    fn display_names_the_annualization_cause() {
        let err = Error::non_positive_holding_period(-3.0);
        assert_eq!(
            err.to_string(),
            "annualization undefined: holding period must be positive, got -3 days"
        );

        let err = Error::non_positive_base(-0.5);
        assert_eq!(
            err.to_string(),
            "annualization undefined: compounding base 1 + roi/100 must be positive, got -0.5"
        );
    }

    #[test]
    fn display_names_the_invalid_field() {
        let err = Error::invalid_input(InputField::Investment, 0.0);
        assert_eq!(err.to_string(), "invalid input: investment out of range, got 0");
    }

    #[test]
    fn every_variant_round_trips_through_serde() {
        let errors = [
            Error::undefined_ratio(Denominator::Conversions, 0.0),
            Error::non_positive_holding_period(-3.0),
            Error::invalid_input(InputField::Investment, -10.0),
        ];

        for err in errors {
            let json = serde_json::to_string(&err).unwrap();
            let restored: Error = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, err);
        }
    }
}
