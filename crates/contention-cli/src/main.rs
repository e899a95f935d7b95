//! `contention` CLI — find over-subscribed call slots across mentorship schedules.
//!
//! ## Usage
//!
//! ```sh
//! # Ranked table, worst contention first (stdin → stdout)
//! contention report < mentorships.json
//!
//! # Same report as JSON, written to a file
//! contention report --json -i mentorships.json -o report.json
//!
//! # Raw histogram: bucket offset (minutes since cycle start) → call count
//! contention histogram -i mentorships.json
//!
//! # Mentorships in contention order
//! contention rank -i mentorships.json
//!
//! # Use 30-minute buckets, or a TOML config file
//! contention --bucket-minutes 30 report -i mentorships.json
//! contention --config analyzer.toml report -i mentorships.json
//!
//! # Validate configuration only
//! contention --meeting-minutes 50 check
//! ```

mod logging;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contention_core::{parse_mentorships, AnalyzerConfig, ContentionAnalyzer, Mentorship};
use std::io::{self, Read};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "contention",
    version,
    about = "Rank mentorship calls by time-slot contention"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with analyzer settings
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Call length in minutes (overrides the config file)
    #[arg(long, global = true)]
    meeting_minutes: Option<u32>,

    /// Bucket width in minutes (overrides the config file)
    #[arg(long, global = true)]
    bucket_minutes: Option<u32>,

    /// Recurrence cycle length in weeks (overrides the config file)
    #[arg(long, global = true)]
    cycle_weeks: Option<u32>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the per-bucket call counts as JSON
    Histogram {
        /// Input mentorships JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print mentorships in contention order as JSON
    Rank {
        /// Input mentorships JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the ranked contention table
    Report {
        /// Input mentorships JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit the report as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Validate the analyzer configuration and exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(if cli.verbose { "debug" } else { "warn" });

    // Configuration problems stop the run before any input is read.
    let config = load_config(&cli)?;
    let analyzer = ContentionAnalyzer::new(&config).context("Invalid analyzer configuration")?;
    let bucketizer = analyzer.bucketizer();
    info!(
        meeting_minutes = bucketizer.meeting_duration_minutes(),
        bucket_minutes = bucketizer.bucket_size_minutes(),
        cycle_weeks = bucketizer.cycle_weeks(),
        "analyzer configured"
    );

    match cli.command {
        Commands::Histogram { input, output } => {
            let mentorships = read_mentorships(input.as_deref())?;
            let histogram = analyzer.histogram(&mentorships);
            let json = serde_json::to_string_pretty(&histogram)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Rank { input, output } => {
            let mentorships = read_mentorships(input.as_deref())?;
            let histogram = analyzer.histogram(&mentorships);
            let ranked = analyzer.rank(&mentorships, &histogram);
            let json = serde_json::to_string_pretty(&ranked)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Report {
            input,
            output,
            json,
        } => {
            let mentorships = read_mentorships(input.as_deref())?;
            let report = analyzer.report(&mentorships);
            let rendered = if json {
                serde_json::to_string_pretty(&report)?
            } else {
                render::render_table(&report)
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check => {
            println!(
                "ok: {}-minute calls, {} buckets of {} minutes, {}-week cycle",
                bucketizer.meeting_duration_minutes(),
                bucketizer.buckets_per_meeting(),
                bucketizer.bucket_size_minutes(),
                bucketizer.cycle_weeks()
            );
        }
    }

    Ok(())
}

/// Build the analyzer config from `--config` (or defaults) plus any flag overrides.
fn load_config(cli: &Cli) -> Result<AnalyzerConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            AnalyzerConfig::from_toml_str(&text)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        }
        None => AnalyzerConfig::default(),
    };

    if let Some(minutes) = cli.meeting_minutes {
        config = config.with_meeting_duration(minutes);
    }
    if let Some(minutes) = cli.bucket_minutes {
        config = config.with_bucket_size(minutes);
    }
    if let Some(weeks) = cli.cycle_weeks {
        config = config.with_cycle_weeks(weeks);
    }

    debug!(?config, "loaded analyzer config");
    Ok(config)
}

fn read_mentorships(path: Option<&str>) -> Result<Vec<Mentorship>> {
    let json = read_input(path)?;
    let mentorships = parse_mentorships(&json).context("Failed to parse mentorships")?;
    debug!(count = mentorships.len(), "read mentorships");
    Ok(mentorships)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content.trim_end());
        }
    }
    Ok(())
}
