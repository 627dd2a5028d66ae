//! Plain-text export
//!
//! Mirrors every profile row, in input order, into `performance_report.txt`.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use profile_report::format::fixed;
use profile_report::Dataset;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const TITLE: &str = "Method Performance Report";
const RULE_WIDTH: usize = 50;

/// Write the export body for `dataset`
pub fn write_export<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    generated_at: NaiveDateTime,
) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "═".repeat(RULE_WIDTH))?;
    writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out)?;
    writeln!(out, "Method breakdown:")?;

    for record in dataset {
        writeln!(
            out,
            "  {}: {} ms ({}%), calls: {}, avg: {} ms",
            record.method_name,
            fixed(record.total_time_ms, 0, 3),
            fixed(record.percentage, 0, 1),
            record.call_count,
            fixed(record.avg_time_ms, 0, 3),
        )?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write the export into it
pub fn export(dataset: &Dataset, path: &Path, generated_at: NaiveDateTime) -> Result<()> {
    log::info!("Exporting {} method(s) to {:?}", dataset.len(), path);

    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    write_export(&mut writer, dataset, generated_at)
        .with_context(|| format!("Failed to write report file: {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush report file: {:?}", path))?;

    Ok(())
}
