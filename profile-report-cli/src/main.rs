//! Method Profile Report CLI
//!
//! Command-line front end for the profile-report library. It loads a
//! per-method profile CSV and adds:
//! - Console report (summary, rankings, bottlenecks)
//! - Plain-text export to `performance_report.txt`
//!
//! Every failure degrades to a diagnostic; a completed run always exits 0.

use chrono::Local;
use clap::Parser;
use profile_report::{load_dataset, Analysis, LoadOutcome, ReportConfig, DEFAULT_INPUT_FILE};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod report;

/// Method Profile Report - Summarise a per-method performance profile
#[derive(Parser, Debug)]
#[command(name = "profile-report")]
#[command(about = "Print a diagnostic report for a per-method profile CSV", long_about = None)]
#[command(version)]
struct Args {
    /// Method profile CSV (method_name,call_count,total_time_ms,avg_time_ms,percentage)
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,
}

fn main() {
    let args = Args::parse();

    init_logging();

    log::info!("Profile Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using profile-report library v{}", profile_report::VERSION);

    let config = ReportConfig::default();
    run(
        &args.input,
        &config,
        io::stdout().lock(),
        io::stderr().lock(),
    );
}

/// Load the profile, print the report and write the export.
///
/// Console and diagnostic writes go through `out` and `err`; a failed write
/// is logged and never stops the export step.
fn run<W: Write, E: Write>(input: &Path, config: &ReportConfig, out: W, err: E) {
    let mut out = Console::new(out);
    let mut err = Console::new(err);

    out.emit(|w| {
        writeln!(w, "🎮 Performance analyzer starting...")?;
        writeln!(w, "   Method profile: {}", input.display())
    });

    let outcome = load_dataset(input);
    match &outcome {
        LoadOutcome::Loaded(dataset) => out.emit(|w| {
            writeln!(
                w,
                "✓ Loaded method profile: {} ({} methods)",
                input.display(),
                dataset.len()
            )
        }),
        LoadOutcome::Missing(path) => {
            out.emit(|w| writeln!(w, "✗ Method profile not found: {}", path.display()))
        }
        LoadOutcome::Failed(e) => {
            err.emit(|w| writeln!(w, "Error loading method profile: {}", e))
        }
    }

    match outcome.dataset() {
        Some(dataset) => {
            let analysis = Analysis::run(dataset, config);
            out.emit(|w| report::console::write_report(w, &analysis, config));

            let generated_at = Local::now().naive_local();
            match report::txt::export(dataset, &config.output_path, generated_at) {
                Ok(()) => out.emit(|w| {
                    writeln!(
                        w,
                        "\n📄 Detailed report exported to: {}",
                        config.output_path.display()
                    )
                }),
                Err(e) => {
                    log::error!("Report export failed: {:#}", e);
                    err.emit(|w| writeln!(w, "\n✗ Failed to export report: {:#}", e));
                }
            }
        }
        None => out.emit(|w| {
            report::console::write_no_data(w)?;
            writeln!(w, "\n📄 Export: no data, nothing written")
        }),
    }

    out.emit(|w| {
        writeln!(w, "\n✅ Analysis complete!")?;
        w.flush()
    });
}

/// Output stream that stops writing after its first I/O error (e.g. a closed pipe)
struct Console<W: Write> {
    inner: W,
    failed: bool,
}

impl<W: Write> Console<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            failed: false,
        }
    }

    fn emit<F>(&mut self, write: F)
    where
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        if self.failed {
            return;
        }
        if let Err(e) = write(&mut self.inner) {
            log::warn!("Console output stopped: {}", e);
            self.failed = true;
        }
    }
}

/// Initialize logging: warnings and errors by default, `RUST_LOG` overrides
fn init_logging() {
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_input() {
        let args = Args::try_parse_from(["profile-report"]).unwrap();
        assert_eq!(args.input, PathBuf::from("method_analysis.csv"));
    }

    #[test]
    fn test_positional_input() {
        let args = Args::try_parse_from(["profile-report", "runs/frame.csv"]).unwrap();
        assert_eq!(args.input, PathBuf::from("runs/frame.csv"));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Args::try_parse_from(["profile-report", "a.csv", "b.csv"]).is_err());
        assert!(Args::try_parse_from(["profile-report", "--top", "5"]).is_err());
    }

    const PROFILE: &str = "method_name,call_count,total_time_ms,avg_time_ms,percentage\n\
                           B,5,30.0,6.0,30.0\n\
                           A,10,50.0,16.667,50.0\n";

    /// Writer whose every write fails, like stdout after the reader hung up
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn run_captured(input: &Path, config: &ReportConfig) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(input, config, &mut out, &mut err);
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_run_reports_and_exports() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("method_analysis.csv");
        fs::write(&input, PROFILE).unwrap();
        let report_path = dir.path().join("performance_report.txt");
        let config = ReportConfig::default().with_output_path(&report_path);

        let (out, err) = run_captured(&input, &config);

        assert!(err.is_empty());
        assert!(out.contains("✓ Loaded method profile"));
        assert!(out.contains("📊 Summary: 2 methods, 15 calls, 80.000 ms"));
        assert!(out.contains("📄 Detailed report exported to"));
        assert!(out.ends_with("✅ Analysis complete!\n"));

        let exported = fs::read_to_string(&report_path).unwrap();
        let b_at = exported.find("  B: 30.000 ms").unwrap();
        let a_at = exported.find("  A: 50.000 ms").unwrap();
        assert!(b_at < a_at);
    }

    #[test]
    fn test_run_with_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("performance_report.txt");
        let config = ReportConfig::default().with_output_path(&report_path);

        let (out, err) = run_captured(&dir.path().join("absent.csv"), &config);

        assert!(err.is_empty());
        assert!(out.contains("✗ Method profile not found"));
        assert_eq!(out.matches("no data").count(), 4);
        assert!(out.ends_with("✅ Analysis complete!\n"));
        assert!(!report_path.exists());
    }

    #[test]
    fn test_run_with_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("method_analysis.csv");
        fs::write(&input, "name,calls\nA,1\n").unwrap();
        let report_path = dir.path().join("performance_report.txt");
        let config = ReportConfig::default().with_output_path(&report_path);

        let (out, err) = run_captured(&input, &config);

        assert!(err.contains("Error loading method profile"));
        assert!(err.contains("method_name"));
        assert!(out.contains("📊 Summary: no data"));
        assert!(!report_path.exists());
    }

    #[test]
    fn test_run_completes_when_export_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("method_analysis.csv");
        fs::write(&input, PROFILE).unwrap();
        let config = ReportConfig::default()
            .with_output_path(dir.path().join("missing-dir").join("performance_report.txt"));

        let (out, err) = run_captured(&input, &config);

        assert!(err.contains("✗ Failed to export report"));
        assert!(err.contains("Failed to create report file"));
        assert!(!out.contains("exported to"));
        assert!(out.ends_with("✅ Analysis complete!\n"));
    }

    #[test]
    fn test_run_exports_when_console_is_closed() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("method_analysis.csv");
        fs::write(&input, PROFILE).unwrap();
        let report_path = dir.path().join("performance_report.txt");
        let config = ReportConfig::default().with_output_path(&report_path);

        run(&input, &config, ClosedPipe, ClosedPipe);

        let exported = fs::read_to_string(&report_path).unwrap();
        assert!(exported.contains("  A: 50.000 ms (50.0%), calls: 10, avg: 16.667 ms"));
    }

    #[test]
    fn test_console_stops_after_first_error() {
        let mut console = Console::new(ClosedPipe);
        console.emit(|w| writeln!(w, "first"));
        assert!(console.failed);

        let mut called = false;
        console.emit(|_| {
            called = true;
            Ok(())
        });
        assert!(!called);
    }
}
