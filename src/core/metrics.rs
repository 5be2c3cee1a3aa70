use crate::core::Record;
use std::cmp::Ordering;

pub fn total_cost(records: &[Record]) -> f64 {
    records.iter().map(|r| r.cost).sum()
}

pub fn total_revenue(records: &[Record]) -> f64 {
    records.iter().map(|r| r.revenue).sum()
}

pub fn total_profit(records: &[Record]) -> f64 {
    records.iter().map(|r| r.profit()).sum()
}

pub fn total_conversions(records: &[Record]) -> u64 {
    records.iter().filter_map(|r| r.conversions).sum()
}

pub fn count_profitable(records: &[Record]) -> usize {
    records.iter().filter(|r| r.profit() > 0.0).count()
}

pub fn find_max_profit(records: &[Record]) -> Option<f64> {
    records
        .iter()
        .map(|r| r.profit())
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

pub fn sort_by_profit(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(|a, b| b.profit().partial_cmp(&a.profit()).unwrap_or(Ordering::Equal));
    records
}
