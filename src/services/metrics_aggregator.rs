//! Client-side aggregation over a fetched list of metric records.
//!
//! Every function is pure and total: empty input yields zero (or the scale
//! floor) instead of an error, and a NaN `value` propagates into the numeric
//! results rather than being skipped.

use std::collections::{HashMap, HashSet};
use crate::config::constants::{DEFAULT_RECENT_LIMIT, DEFAULT_SCALE_FLOOR, DEFAULT_TOP_CATEGORIES};
use crate::structs::category_stat::CategoryStat;
use crate::structs::dashboard_summary::DashboardSummary;
use crate::structs::metric_record::MetricRecord;

/// Knobs for [`MetricsAggregator::summarize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationOptions {
    pub scale_floor: f64,
    pub top_limit: usize,
    pub recent_limit: usize,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            scale_floor: DEFAULT_SCALE_FLOOR,
            top_limit: DEFAULT_TOP_CATEGORIES,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

pub struct MetricsAggregator;

impl MetricsAggregator {

    pub fn total_count(records: &[MetricRecord]) -> usize {
        records.len()
    }

    pub fn unique_category_count(records: &[MetricRecord]) -> usize {
        records
            .iter()
            .map(|record| record.category.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Arithmetic mean of `value`; 0 for an empty slice.
    pub fn average_value(records: &[MetricRecord]) -> f64 {
        if records.is_empty() {
            return 0.0;
        }

        let sum: f64 = records.iter().map(|record| record.value).sum();
        sum / records.len() as f64
    }

    /// Largest `value`, never below `floor`. Any NaN value makes the result NaN.
    pub fn max_value(records: &[MetricRecord], floor: f64) -> f64 {
        records.iter().fold(floor, |max, record| {
            if max.is_nan() || record.value.is_nan() {
                f64::NAN
            } else if record.value > max {
                record.value
            } else {
                max
            }
        })
    }

    /// Categories ranked by occurrence count, ties kept in first-seen order.
    pub fn top_categories(records: &[MetricRecord], limit: usize) -> Vec<CategoryStat> {
        let mut index_by_name: HashMap<&str, usize> = HashMap::new();
        let mut stats: Vec<CategoryStat> = Vec::new();

        for record in records {
            match index_by_name.get(record.category.as_str()) {
                Some(&index) => stats[index].count += 1,
                None => {
                    index_by_name.insert(record.category.as_str(), stats.len());
                    stats.push(CategoryStat::new(&record.category, 1));
                }
            }
        }

        // sort_by is stable, so equal counts keep insertion order
        stats.sort_by(|a, b| b.count.cmp(&a.count));
        stats.truncate(limit);
        stats
    }

    /// The `limit` records with the largest ids, returned in ascending id order.
    /// Records without an id sort as id 0.
    pub fn most_recent(records: &[MetricRecord], limit: usize) -> Vec<MetricRecord> {
        let mut sorted: Vec<&MetricRecord> = records.iter().collect();
        sorted.sort_by(|a, b| b.id_or_zero().cmp(&a.id_or_zero()));

        let mut window: Vec<MetricRecord> = sorted.into_iter().take(limit).cloned().collect();
        window.reverse();
        window
    }

    pub fn summarize(records: &[MetricRecord], options: &AggregationOptions) -> DashboardSummary {
        DashboardSummary {
            total_records: Self::total_count(records),
            unique_categories: Self::unique_category_count(records),
            average_value: Self::average_value(records),
            max_value: Self::max_value(records, options.scale_floor),
            top_categories: Self::top_categories(records, options.top_limit),
            recent: Self::most_recent(records, options.recent_limit),
        }
    }

    /// Bar height of each recent record as a percentage of the chart scale.
    pub fn bar_heights(summary: &DashboardSummary) -> Vec<f64> {
        summary
            .recent
            .iter()
            .map(|record| {
                if summary.max_value > 0.0 {
                    record.value / summary.max_value * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: Option<i64>, value: f64, category: &str) -> MetricRecord {
        MetricRecord::new(id, "metric", value, category)
    }

    #[test]
    fn test_empty_input_has_defined_results() {
        assert_eq!(MetricsAggregator::total_count(&[]), 0);
        assert_eq!(MetricsAggregator::unique_category_count(&[]), 0);
        assert_eq!(MetricsAggregator::average_value(&[]), 0.0);
        assert_eq!(MetricsAggregator::max_value(&[], 100.0), 100.0);
        assert!(MetricsAggregator::top_categories(&[], 5).is_empty());
        assert!(MetricsAggregator::most_recent(&[], 10).is_empty());
    }

    #[test]
    fn test_average_value() {
        let records = vec![record(Some(1), 10.0, "A"), record(Some(2), 20.0, "B")];
        assert_eq!(MetricsAggregator::average_value(&records), 15.0);
    }

    #[test]
    fn test_nan_value_propagates() {
        let records = vec![record(Some(1), 10.0, "A"), record(Some(2), f64::NAN, "A")];
        assert!(MetricsAggregator::average_value(&records).is_nan());
        assert!(MetricsAggregator::max_value(&records, 100.0).is_nan());
    }

    #[test]
    fn test_max_value_respects_floor() {
        assert_eq!(MetricsAggregator::max_value(&[record(None, 40.0, "A")], 100.0), 100.0);
        assert_eq!(MetricsAggregator::max_value(&[record(None, 150.0, "A")], 100.0), 150.0);
    }

    #[test]
    fn test_top_categories_breaks_ties_by_first_appearance() {
        let records = vec![
            record(Some(1), 1.0, "DB"),
            record(Some(2), 1.0, "App"),
            record(Some(3), 1.0, "System"),
            record(Some(4), 1.0, "App"),
            record(Some(5), 1.0, "System"),
        ];

        let top = MetricsAggregator::top_categories(&records, 5);
        assert_eq!(
            top,
            vec![
                CategoryStat::new("App", 2),
                CategoryStat::new("System", 2),
                CategoryStat::new("DB", 1),
            ]
        );
        assert_eq!(MetricsAggregator::top_categories(&records, 1), vec![CategoryStat::new("App", 2)]);
    }

    #[test]
    fn test_empty_category_is_its_own_group() {
        let records = vec![record(Some(1), 1.0, ""), record(Some(2), 1.0, "")];
        assert_eq!(MetricsAggregator::unique_category_count(&records), 1);
        assert_eq!(MetricsAggregator::top_categories(&records, 5), vec![CategoryStat::new("", 2)]);
    }

    #[test]
    fn test_most_recent_returns_largest_ids_ascending() {
        let records: Vec<MetricRecord> = [5, 3, 1, 4, 2]
            .iter()
            .map(|id| record(Some(*id), 1.0, "A"))
            .collect();

        let ids: Vec<i64> = MetricsAggregator::most_recent(&records, 3)
            .iter()
            .map(MetricRecord::id_or_zero)
            .collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn test_missing_id_sorts_as_zero() {
        let records = vec![record(None, 1.0, "A"), record(Some(2), 1.0, "A"), record(Some(-1), 1.0, "A")];
        let recent = MetricsAggregator::most_recent(&records, 2);
        assert_eq!(recent[0].id, None);
        assert_eq!(recent[1].id, Some(2));
    }

    #[test]
    fn test_bar_heights_scale_against_max() {
        let records = vec![record(Some(1), 50.0, "A"), record(Some(2), 200.0, "B")];
        let summary = MetricsAggregator::summarize(&records, &AggregationOptions::default());
        assert_eq!(MetricsAggregator::bar_heights(&summary), vec![25.0, 100.0]);
    }
}
