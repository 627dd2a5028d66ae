//! Core types for the profile report library
//!
//! This module defines the profile row type, the immutable dataset built from
//! those rows, and the error type shared by the loader and its callers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// One profiled method's aggregated timing statistics.
///
/// `avg_time_ms` and `percentage` are taken as given by the profiler; they are
/// never recomputed from the other fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRecord {
    /// Method name as reported by the profiler (not guaranteed unique)
    pub method_name: String,
    /// Number of recorded calls
    pub call_count: u64,
    /// Accumulated time across all calls, in milliseconds
    pub total_time_ms: f64,
    /// Average time per call, in milliseconds
    pub avg_time_ms: f64,
    /// Share of the profiled run's total time, in percent
    pub percentage: f64,
}

impl MethodRecord {
    /// Create a record from its five fields
    pub fn new(
        method_name: impl Into<String>,
        call_count: u64,
        total_time_ms: f64,
        avg_time_ms: f64,
        percentage: f64,
    ) -> Self {
        Self {
            method_name: method_name.into(),
            call_count,
            total_time_ms,
            avg_time_ms,
            percentage,
        }
    }

    /// Check the per-row constraints the loader enforces.
    ///
    /// Returns a human-readable reason on failure.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.method_name.trim().is_empty() {
            return Err("method_name is empty".to_string());
        }
        if !self.total_time_ms.is_finite() || self.total_time_ms < 0.0 {
            return Err(format!(
                "total_time_ms must be a non-negative number, got {}",
                self.total_time_ms
            ));
        }
        if !self.avg_time_ms.is_finite() || self.avg_time_ms < 0.0 {
            return Err(format!(
                "avg_time_ms must be a non-negative number, got {}",
                self.avg_time_ms
            ));
        }
        if !self.percentage.is_finite() {
            return Err(format!("percentage must be finite, got {}", self.percentage));
        }
        Ok(())
    }
}

/// Ordered, read-only collection of method records.
///
/// Row order is the order of the input file and is preserved by every
/// operation that does not explicitly rank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<MethodRecord>,
}

impl Dataset {
    pub fn new(records: Vec<MethodRecord>) -> Self {
        Self { records }
    }

    /// All records in input order
    pub fn records(&self) -> &[MethodRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MethodRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MethodRecord;
    type IntoIter = std::slice::Iter<'a, MethodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<MethodRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = MethodRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Errors that can occur while loading a profile
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Schema mismatch: missing required column(s): {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    #[error("Invalid record at data row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
