//! Method Profile Report Library
//!
//! A small, stateless library for loading per-method performance profiles
//! (one CSV row per profiled method) and analysing them.
//!
//! # Architecture
//!
//! This library only loads and analyses:
//! - Reads a CSV profile into a typed, immutable [`Dataset`]
//! - Computes summary totals and top-N rankings
//! - Flags bottlenecks against fixed thresholds
//!
//! The library does NOT:
//! - Collect profiling data (that happens in the profiled program)
//! - Print the report or write the text export
//!
//! Console rendering and export live in the application layer (profile-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use profile_report::{load_dataset, Analysis, LoadOutcome, ReportConfig};
//! use std::path::Path;
//!
//! let config = ReportConfig::new().with_top_n(5);
//!
//! match load_dataset(Path::new("method_analysis.csv")) {
//!     LoadOutcome::Loaded(dataset) => {
//!         let analysis = Analysis::run(&dataset, &config);
//!         println!("{}", analysis.summary);
//!         for record in &analysis.by_total_time {
//!             println!("{} {:.3} ms", record.method_name, record.total_time_ms);
//!         }
//!     }
//!     LoadOutcome::Missing(path) => eprintln!("not found: {}", path.display()),
//!     LoadOutcome::Failed(e) => eprintln!("load error: {}", e),
//! }
//! ```

// Public modules
pub mod analysis;
pub mod config;
pub mod format;
pub mod loader;
pub mod types;

// Re-export main types for convenience
pub use analysis::{Analysis, Bottlenecks, RankKey, Summary};
pub use config::{ReportConfig, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
pub use loader::{load_dataset, read_dataset, read_from, LoadOutcome, REQUIRED_COLUMNS};
pub use types::{Dataset, MethodRecord, ReportError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
