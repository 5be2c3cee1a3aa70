pub mod errors;
pub mod metrics;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, InputField, Result};

/// One row of uploaded campaign data.
///
/// `cost` and `revenue` are monetary amounts in the same currency unit and
/// are expected to be non-negative; `validate` enforces that at the
/// ingestion boundary. The remaining fields are optional columns that may
/// or may not be present in an upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub cost: f64,
    pub revenue: f64,
    pub conversions: Option<u64>,
    pub date: Option<NaiveDate>,
    pub campaign: Option<String>,
}

impl Record {
    pub fn new(cost: f64, revenue: f64) -> Self {
        Self {
            cost,
            revenue,
            conversions: None,
            date: None,
            campaign: None,
        }
    }

    pub fn with_conversions(mut self, conversions: u64) -> Self {
        self.conversions = Some(conversions);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = Some(campaign.into());
        self
    }

    pub fn profit(&self) -> f64 {
        self.revenue - self.cost
    }

    /// Check the monetary fields at the ingestion boundary.
    ///
    /// The calculator guards every denominator regardless; this lets the
    /// ingestion side reject negative or non-finite amounts before they
    /// reach a report.
    pub fn validate(&self) -> Result<()> {
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(Error::invalid_input(InputField::Cost, self.cost));
        }
        if !self.revenue.is_finite() || self.revenue < 0.0 {
            return Err(Error::invalid_input(InputField::Revenue, self.revenue));
        }
        Ok(())
    }
}
