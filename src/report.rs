//! Report composition: one call that turns a batch of records into
//! per-record metrics, grouped aggregates, and an overall summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregation::{aggregate_all, aggregate_by_key, Aggregate};
use crate::core::errors::Result;
use crate::core::{metrics, Record};
use crate::roi::{self, RecordMetrics};

/// Which record column the report groups by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    Campaign,
    Date,
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Campaign => write!(f, "campaign"),
            GroupKey::Date => write!(f, "date"),
        }
    }
}

fn default_group_by() -> GroupKey {
    GroupKey::Campaign
}

/// Options accepted by [`build_report`].
///
/// `holding_period_days` applies one holding period uniformly to every
/// record and to the summary; when absent no annualization is attempted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    #[serde(default = "default_group_by")]
    pub group_by: GroupKey,
    #[serde(default)]
    pub holding_period_days: Option<f64>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            group_by: default_group_by(),
            holding_period_days: None,
        }
    }
}

/// A source record paired with its computed metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    pub record: Record,
    pub metrics: RecordMetrics,
}

/// Totals over the whole batch, with ratios recomputed from those totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub record_count: usize,
    pub profitable_records: usize,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_conversions: u64,
    pub roi_percent: Result<f64>,
    pub annualized_roi_percent: Option<Result<f64>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiReport {
    pub generated_at: DateTime<Utc>,
    pub options: ReportOptions,
    pub records: Vec<AnalyzedRecord>,
    pub aggregates: Vec<Aggregate<String>>,
    pub summary: ReportSummary,
}

/// Analyze a batch of records in one pass.
///
/// Produces metrics for every record, aggregates grouped by the selected
/// key (records missing that column are left out of the aggregates but
/// still appear in `records` and the summary), and an overall summary.
pub fn build_report(records: &[Record], options: &ReportOptions) -> RoiReport {
    log::debug!(
        "building roi report for {} records grouped by {}",
        records.len(),
        options.group_by
    );

    let analyzed = records
        .iter()
        .map(|record| {
            let metrics = match options.holding_period_days {
                Some(days) => roi::compute_record_metrics_annualized(record, days),
                None => roi::compute_record_metrics(record),
            };
            AnalyzedRecord {
                record: record.clone(),
                metrics,
            }
        })
        .collect();

    let aggregates = match options.group_by {
        GroupKey::Campaign => aggregate_by_key(records, |r| r.campaign.clone()),
        GroupKey::Date => aggregate_by_key(records, |r| r.date.map(|d| d.to_string())),
    };
    log::debug!("report has {} aggregate groups", aggregates.len());

    RoiReport {
        generated_at: Utc::now(),
        options: options.clone(),
        records: analyzed,
        aggregates,
        summary: summarize(records, options.holding_period_days),
    }
}

fn summarize(records: &[Record], holding_period_days: Option<f64>) -> ReportSummary {
    let totals = aggregate_all(records);
    let annualized = holding_period_days.map(|days| {
        totals
            .roi_percent
            .and_then(|overall| roi::compute_annualized_roi(overall, days))
    });

    ReportSummary {
        record_count: totals.records,
        profitable_records: metrics::count_profitable(records),
        total_cost: totals.cost,
        total_revenue: totals.revenue,
        total_profit: totals.profit,
        total_conversions: totals.conversions,
        roi_percent: totals.roi_percent,
        annualized_roi_percent: annualized,
    }
}
