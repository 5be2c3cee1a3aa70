use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

use crate::core::errors::Result;
use crate::core::Record;
use crate::roi::ratio;

/// Summary row for one group of records.
///
/// Monetary fields are sums over the group; every ratio is recomputed from
/// those sums. Averaging per-record percentages across unequal cost bases
/// is not a valid aggregate and is never done here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aggregate<K> {
    pub key: K,
    pub records: usize,
    pub cost: f64,
    pub revenue: f64,
    pub profit: f64,
    pub conversions: u64,
    pub roi_percent: Result<f64>,
    pub cost_per_conversion: Result<f64>,
    pub revenue_per_conversion: Result<f64>,
}

#[derive(Clone, Copy, Default)]
struct Totals {
    records: usize,
    cost: f64,
    revenue: f64,
    conversions: u64,
}

impl Totals {
    fn add(&mut self, record: &Record) {
        self.records += 1;
        self.cost += record.cost;
        self.revenue += record.revenue;
        self.conversions += record.conversions.unwrap_or(0);
    }

    fn into_aggregate<K>(self, key: K) -> Aggregate<K> {
        Aggregate {
            key,
            records: self.records,
            cost: self.cost,
            revenue: self.revenue,
            // Derived from the summed totals, so profit == revenue - cost
            // holds exactly for every aggregate.
            profit: self.revenue - self.cost,
            conversions: self.conversions,
            roi_percent: ratio::roi_percent(self.cost, self.revenue),
            cost_per_conversion: ratio::cost_per_conversion(self.cost, Some(self.conversions)),
            revenue_per_conversion: ratio::revenue_per_conversion(
                self.revenue,
                Some(self.conversions),
            ),
        }
    }
}

/// Group records by a key and sum each group.
///
/// The selector returns `None` for records that do not participate in the
/// grouping (a missing campaign label, for example); those records are
/// skipped. Output order is the first-seen order of keys, so repeated runs
/// over the same input produce identical output. A group whose summed cost
/// is zero carries an undefined ROI without disturbing its siblings.
pub fn aggregate_by_key<K, F>(records: &[Record], key_selector: F) -> Vec<Aggregate<K>>
where
    K: Clone + Eq + Hash,
    F: Fn(&Record) -> Option<K>,
{
    // First pass buckets records by key, second pass reduces each bucket.
    let mut order: Vec<K> = Vec::new();
    let mut buckets: HashMap<K, Totals> = HashMap::new();

    for record in records {
        if let Some(key) = key_selector(record) {
            if !buckets.contains_key(&key) {
                order.push(key.clone());
            }
            buckets.entry(key).or_default().add(record);
        }
    }

    order
        .into_iter()
        .filter_map(|key| buckets.remove(&key).map(|totals| totals.into_aggregate(key)))
        .collect()
}

/// Sum every record into a single aggregate.
pub fn aggregate_all(records: &[Record]) -> Aggregate<()> {
    let mut totals = Totals::default();
    for record in records {
        totals.add(record);
    }
    totals.into_aggregate(())
}
