//! `quorum` CLI: find when enough people are free at once, from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Windows with at least 3 participants on each day, plus the best day
//! quorum match -q 3 -i roster.json
//!
//! # Same, as JSON (stdin → stdout)
//! cat roster.json | quorum match -q 3 --format json
//!
//! # Every overlap window on one day, no quorum applied
//! quorum day --day Sat -i roster.json
//!
//! # Only the best day
//! quorum best -q 3 -i roster.json
//! ```
//!
//! A roster is a JSON array of participants:
//!
//! ```json
//! [{ "name": "Ana", "timeZone": "UTC", "availability": { "Mon": [[18, 22]] } }]
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use quorum_engine::{
    compute_day_overlaps, day_label, match_groups, parse_day, DayScore, GroupMatches,
    OverlapWindow, Roster, DEFAULT_QUORUM,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "quorum",
    version,
    about = "Find weekly time windows where a quorum of participants is free"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List qualifying windows for every day and recommend a best day
    Match {
        /// Roster JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Minimum number of participants per window
        #[arg(short, long, default_value_t = DEFAULT_QUORUM)]
        quorum: usize,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List every overlap window on a single day, without a quorum
    Day {
        /// Roster JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Day label: Mon, Tue, Wed, Thu, Fri, Sat or Sun
        #[arg(long)]
        day: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print only the best day and its matched hours
    Best {
        /// Roster JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Minimum number of participants per window
        #[arg(short, long, default_value_t = DEFAULT_QUORUM)]
        quorum: usize,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

const NO_MATCH: &str = "No day has enough players at the same time.";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Match {
            input,
            output,
            quorum,
            format,
        } => {
            let roster = load_roster(input.as_deref())?;
            let matches = match_groups(&roster, quorum);
            let rendered = match format {
                Format::Text => render_matches(&matches, quorum),
                Format::Json => {
                    let value = serde_json::json!({
                        "quorum": quorum,
                        "days": &matches,
                        "best": matches.best_day(),
                    });
                    serde_json::to_string_pretty(&value)?
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Day {
            input,
            output,
            day,
            format,
        } => {
            let day = parse_day(&day)?;
            let roster = load_roster(input.as_deref())?;
            let windows = compute_day_overlaps(day, &roster);
            let rendered = match format {
                Format::Text => {
                    if windows.is_empty() {
                        format!("No one is available on {}.\n", day_label(day))
                    } else {
                        let mut out = format!("Day: {}\n", day_label(day));
                        for w in &windows {
                            out.push_str(&render_window(w));
                        }
                        out
                    }
                }
                Format::Json => serde_json::to_string_pretty(&windows)?,
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Best {
            input,
            quorum,
            format,
        } => {
            let roster = load_roster(input.as_deref())?;
            let best = match_groups(&roster, quorum).best_day();
            match format {
                Format::Text => match best {
                    Some(DayScore { day, hours }) => {
                        println!("{} ({} hours)", day_label(day), hours)
                    }
                    None => println!("{}", NO_MATCH),
                },
                Format::Json => println!("{}", serde_json::to_string_pretty(&best)?),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Per-day listing followed by the best-day recommendation.
fn render_matches(matches: &GroupMatches<'_>, quorum: usize) -> String {
    let mut out = format!("Overlapping intervals with at least {} players:\n", quorum);

    for day_matches in matches {
        out.push_str(&format!("\nDay: {}\n", day_label(day_matches.day)));
        for w in &day_matches.windows {
            out.push_str(&render_window(w));
        }
    }

    match matches.best_day() {
        Some(best) => out.push_str(&format!(
            "\nThe best day to schedule (by total overlapping hours for {}+ players) is: {}\n",
            quorum,
            day_label(best.day)
        )),
        None => out.push_str(&format!("\n{}\n", NO_MATCH)),
    }
    out
}

fn render_window(w: &OverlapWindow<'_>) -> String {
    format!("  {:02}:00 - {:02}:00 --> {:?}\n", w.start, w.end, w.names())
}

fn load_roster(path: Option<&str>) -> Result<Roster> {
    let json = read_input(path)?;
    let roster = Roster::from_json(&json).context("Failed to load roster")?;
    debug!(participants = roster.len(), "roster ready");
    Ok(roster)
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
            print!("{}", content);
        }
    }
    Ok(())
}
