//! Console report
//!
//! Each section writes to any `io::Write` so the layout can be checked in tests
//! against an in-memory buffer.

use profile_report::format::{count, fixed, name_field};
use profile_report::{Analysis, Bottlenecks, MethodRecord, RankKey, ReportConfig, Summary};
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// Write the banner and every report section
pub fn write_report<W: Write>(
    out: &mut W,
    analysis: &Analysis<'_>,
    config: &ReportConfig,
) -> io::Result<()> {
    write_banner(out)?;
    write_summary(out, &analysis.summary)?;
    write_rankings(out, analysis, config)?;
    write_bottlenecks(out, &analysis.bottlenecks, config)
}

/// Write the banner followed by a "no data" line for every section
pub fn write_no_data<W: Write>(out: &mut W) -> io::Result<()> {
    write_banner(out)?;
    writeln!(out, "\n📊 Summary: no data")?;
    writeln!(out, "\n🏆 Rankings: no data")?;
    writeln!(out, "\n🔍 Bottlenecks: no data")
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "═".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "           Method Performance Report")?;
    writeln!(out, "{rule}")
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "\n📊 Summary: {summary}")
}

pub fn write_rankings<W: Write>(
    out: &mut W,
    analysis: &Analysis<'_>,
    config: &ReportConfig,
) -> io::Result<()> {
    writeln!(
        out,
        "\n🏆 Top {} methods by {}:",
        config.top_n,
        RankKey::TotalTime
    )?;
    for (rank, record) in analysis.by_total_time.iter().enumerate() {
        writeln!(
            out,
            "   {}. {} {} ms ({}%) calls: {}",
            count(rank as u64 + 1, 2),
            name_field(&record.method_name, config.name_width),
            fixed(record.total_time_ms, 8, 3),
            fixed(record.percentage, 5, 1),
            count(record.call_count, 4),
        )?;
    }

    writeln!(
        out,
        "\n⏱️  Top {} methods by {}:",
        config.top_n,
        RankKey::AvgTime
    )?;
    for (rank, record) in analysis.by_avg_time.iter().enumerate() {
        writeln!(
            out,
            "   {}. {} {} ms calls: {}",
            count(rank as u64 + 1, 2),
            name_field(&record.method_name, config.name_width),
            fixed(record.avg_time_ms, 8, 3),
            count(record.call_count, 4),
        )?;
    }
    Ok(())
}

pub fn write_bottlenecks<W: Write>(
    out: &mut W,
    bottlenecks: &Bottlenecks<'_>,
    config: &ReportConfig,
) -> io::Result<()> {
    writeln!(out, "\n🔍 Bottlenecks:")?;

    writeln!(
        out,
        "   🔧 Methods above {}% of total time:",
        config.share_threshold_pct
    )?;
    write_flagged(out, &bottlenecks.high_share, |r| {
        format!("{}%", fixed(r.percentage, 0, 1))
    })?;

    writeln!(
        out,
        "\n   ⚠️  Methods averaging over {} ms per call:",
        config.avg_time_threshold_ms
    )?;
    write_flagged(out, &bottlenecks.high_avg_time, |r| {
        format!("{} ms", fixed(r.avg_time_ms, 0, 3))
    })
}

fn write_flagged<W, F>(out: &mut W, records: &[&MethodRecord], value: F) -> io::Result<()>
where
    W: Write,
    F: Fn(&MethodRecord) -> String,
{
    for record in records {
        writeln!(out, "      {}: {}", record.method_name, value(record))?;
    }
    Ok(())
}
