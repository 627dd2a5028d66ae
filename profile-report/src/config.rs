//! Report configuration
//!
//! The report has no configuration file; this module gathers the fixed
//! constants of a run in one value so the analysis and rendering code never
//! hard-code them.

use std::path::PathBuf;

/// Input file read when no path is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "method_analysis.csv";

/// Text export written in the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "performance_report.txt";

/// Settings for a single report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Number of rows shown in each ranking
    pub top_n: usize,

    /// Methods with a time share strictly above this percentage are flagged
    pub share_threshold_pct: f64,

    /// Methods with an average call time strictly above this are flagged (ms)
    pub avg_time_threshold_ms: f64,

    /// Column width for method names in ranking tables
    pub name_width: usize,

    /// Where the text export is written
    pub output_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            share_threshold_pct: 10.0,
            avg_time_threshold_ms: 1.0,
            name_width: 30,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl ReportConfig {
    /// Create a configuration with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the ranking length
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set the time-share threshold (percent)
    pub fn with_share_threshold(mut self, pct: f64) -> Self {
        self.share_threshold_pct = pct;
        self
    }

    /// Builder method: set the average-latency threshold (ms)
    pub fn with_avg_time_threshold(mut self, ms: f64) -> Self {
        self.avg_time_threshold_ms = ms;
        self
    }

    /// Builder method: set the method name column width
    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Builder method: set the export path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.share_threshold_pct, 10.0);
        assert_eq!(config.avg_time_threshold_ms, 1.0);
        assert_eq!(config.name_width, 30);
        assert_eq!(config.output_path, PathBuf::from("performance_report.txt"));
    }

    #[test]
    fn test_report_config_builder() {
        let config = ReportConfig::new()
            .with_top_n(5)
            .with_share_threshold(25.0)
            .with_avg_time_threshold(0.5)
            .with_name_width(20)
            .with_output_path("out/report.txt");

        assert_eq!(config.top_n, 5);
        assert_eq!(config.share_threshold_pct, 25.0);
        assert_eq!(config.avg_time_threshold_ms, 0.5);
        assert_eq!(config.name_width, 20);
        assert_eq!(config.output_path, PathBuf::from("out/report.txt"));
    }
}
