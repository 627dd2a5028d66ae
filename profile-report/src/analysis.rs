//! Profile analysis: summary totals, top-N rankings and bottleneck flags.
//!
//! Every function here is a pure read over a [`Dataset`]. Rankings use a
//! stable sort, so methods with equal values keep their input order, and the
//! bottleneck filters never reorder rows.

use crate::config::ReportConfig;
use crate::types::{Dataset, MethodRecord};
use std::fmt;

/// Aggregate totals over a whole dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub method_count: usize,
    pub total_calls: u64,
    pub total_time_ms: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} methods, {} calls, {:.3} ms",
            self.method_count, self.total_calls, self.total_time_ms
        )
    }
}

/// Compute row count, call total and time total
pub fn summarize(dataset: &Dataset) -> Summary {
    Summary {
        method_count: dataset.len(),
        total_calls: dataset.iter().map(|r| r.call_count).sum(),
        // f64's Sum starts from -0.0, which would print as "-0.000"
        total_time_ms: dataset.iter().fold(0.0, |acc, r| acc + r.total_time_ms),
    }
}

/// Numeric field a ranking is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    TotalTime,
    AvgTime,
}

impl RankKey {
    /// Extract the ranked value from a record
    pub fn value(self, record: &MethodRecord) -> f64 {
        match self {
            RankKey::TotalTime => record.total_time_ms,
            RankKey::AvgTime => record.avg_time_ms,
        }
    }
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankKey::TotalTime => write!(f, "total time"),
            RankKey::AvgTime => write!(f, "average time"),
        }
    }
}

/// The `n` records with the largest `key`, descending.
///
/// Fewer than `n` rows yields all of them.
pub fn top_n(dataset: &Dataset, key: RankKey, n: usize) -> Vec<&MethodRecord> {
    let mut ranked: Vec<&MethodRecord> = dataset.iter().collect();
    // sort_by is stable: equal values stay in input order
    ranked.sort_by(|a, b| key.value(b).total_cmp(&key.value(a)));
    ranked.truncate(n);
    ranked
}

/// Records whose time share is strictly above `threshold_pct`, in input order
pub fn above_share(dataset: &Dataset, threshold_pct: f64) -> Vec<&MethodRecord> {
    dataset
        .iter()
        .filter(|r| r.percentage > threshold_pct)
        .collect()
}

/// Records whose average call time is strictly above `threshold_ms`, in input order
pub fn above_avg_time(dataset: &Dataset, threshold_ms: f64) -> Vec<&MethodRecord> {
    dataset
        .iter()
        .filter(|r| r.avg_time_ms > threshold_ms)
        .collect()
}

/// Methods flagged by the two independent bottleneck filters.
///
/// A method may appear in both lists, one, or neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Bottlenecks<'a> {
    pub high_share: Vec<&'a MethodRecord>,
    pub high_avg_time: Vec<&'a MethodRecord>,
}

impl<'a> Bottlenecks<'a> {
    pub fn find(dataset: &'a Dataset, config: &ReportConfig) -> Self {
        Self {
            high_share: above_share(dataset, config.share_threshold_pct),
            high_avg_time: above_avg_time(dataset, config.avg_time_threshold_ms),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.high_share.is_empty() && self.high_avg_time.is_empty()
    }
}

/// Everything the report prints, computed in one pass over the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis<'a> {
    pub summary: Summary,
    pub by_total_time: Vec<&'a MethodRecord>,
    pub by_avg_time: Vec<&'a MethodRecord>,
    pub bottlenecks: Bottlenecks<'a>,
}

impl<'a> Analysis<'a> {
    pub fn run(dataset: &'a Dataset, config: &ReportConfig) -> Self {
        log::debug!(
            "Analysing {} method(s): top {}, share > {}%, avg > {} ms",
            dataset.len(),
            config.top_n,
            config.share_threshold_pct,
            config.avg_time_threshold_ms
        );

        Self {
            summary: summarize(dataset),
            by_total_time: top_n(dataset, RankKey::TotalTime, config.top_n),
            by_avg_time: top_n(dataset, RankKey::AvgTime, config.top_n),
            bottlenecks: Bottlenecks::find(dataset, config),
        }
    }
}
