//! `milestones` — list noteworthy anniversaries of an instant.
//!
//! Thin consumer of `milestone-core`: parses and validates the inputs the
//! engine refuses to validate itself (instant syntax, `from <= to`), runs
//! one computation, and prints the records as a table or as JSON.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, ValueEnum};

use milestone_core::{compute_window, ComputeOptions, Locale, PatternSelection, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "milestones",
    about = "List noteworthy anniversaries of an instant inside a date window",
    version
)]
struct Args {
    /// Starting instant, e.g. 2000-01-01T12:00:00 (a bare date means midnight)
    #[arg(long)]
    start: String,

    /// Window start (inclusive); a bare date means midnight
    #[arg(long)]
    from: String,

    /// Window end (inclusive); a bare date means end of day, 23:59:59
    #[arg(long)]
    to: String,

    /// What the start instant marks ("Wedding", "Launch", ...)
    #[arg(long, default_value = "")]
    label: String,

    /// Comma-separated units to enumerate
    #[arg(long, default_value = "years,months,weeks,days,hours,minutes,seconds")]
    units: String,

    /// Comma-separated pattern families: rounded, repdigit
    #[arg(long, default_value = "rounded,repdigit")]
    patterns: String,

    /// Label language tag (de, en)
    #[arg(long, default_value = "de")]
    locale: String,

    /// Anchor for the relative-time column; defaults to the start instant
    /// so output is reproducible
    #[arg(long)]
    now: Option<String>,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

/// Parse a naive instant: `YYYY-MM-DDTHH:MM:SS` (or with a space), or a
/// bare `YYYY-MM-DD` resolved to midnight / end of day.
fn parse_instant(s: &str, end_of_day: bool) -> Result<NaiveDateTime> {
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = if end_of_day {
            date.and_hms_opt(23, 59, 59)
        } else {
            date.and_hms_opt(0, 0, 0)
        };
        if let Some(dt) = dt {
            return Ok(dt);
        }
    }
    bail!("cannot parse instant '{s}' (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)")
}

fn parse_units(s: &str) -> Result<Vec<Unit>> {
    let mut units = Vec::new();
    for part in s.split(',') {
        let unit = Unit::from_str(part.trim())?;
        if !units.contains(&unit) {
            units.push(unit);
        }
    }
    Ok(units)
}

fn run(args: &Args) -> Result<Vec<u8>> {
    let start = parse_instant(&args.start, false).context("invalid --start")?;
    let from = parse_instant(&args.from, false).context("invalid --from")?;
    let to = parse_instant(&args.to, true).context("invalid --to")?;
    if from > to {
        bail!("window start {from} is after window end {to}");
    }

    let units = parse_units(&args.units).context("invalid --units")?;
    let patterns = PatternSelection::from_str(&args.patterns).context("invalid --patterns")?;
    let locale = Locale::from_str(&args.locale).context("invalid --locale")?;
    let now = match &args.now {
        Some(s) => parse_instant(s, false).context("invalid --now")?,
        None => start,
    };

    let options = ComputeOptions {
        label: args.label.clone(),
        units,
        patterns,
        locale,
        now,
    };
    let records = compute_window(start, &options, from, to);

    let mut out = Vec::new();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &records)?;
            out.push(b'\n');
        }
        OutputFormat::Table => {
            use std::io::Write;
            for record in &records {
                writeln!(
                    out,
                    "{}  {:<28} {:<24} {}",
                    record.instant.format("%Y-%m-%d %H:%M:%S"),
                    record.title,
                    record.since,
                    record.relative
                )?;
            }
            writeln!(out, "{} milestones", records.len())?;
        }
    }
    Ok(out)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let out = run(&args)?;
    use std::io::Write;
    std::io::stdout().write_all(&out)?;
    Ok(())
}
