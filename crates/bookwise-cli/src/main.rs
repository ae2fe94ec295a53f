//! `bookwise` CLI — check booking proposals and query free slots against a
//! JSON schedule.
//!
//! ## Usage
//!
//! ```sh
//! # Check a proposal against bookings from a file
//! bookwise check -i bookings.json --group a \
//!     --start 2024-01-01T10:30:00Z --end 2024-01-01T11:30:00Z
//!
//! # Same, piping the bookings via stdin
//! cat bookings.json | bookwise check --group a \
//!     --start 2024-01-01T10:30:00Z --end 2024-01-01T11:30:00Z
//!
//! # List bookings sorted by (group, start)
//! bookwise list -i bookings.json
//!
//! # Free slots for a group within a window
//! bookwise free -i bookings.json --group a \
//!     --from 2024-01-01T08:00:00Z --to 2024-01-01T17:00:00Z --min-duration 60
//! ```
//!
//! `check` exits with code 1 when a conflict is found, so scripts can use
//! the exit status as the accept/reject decision.

use anyhow::{Context, Result};
use bookwise_core::booking::{parse_rfc3339, Booking};
use bookwise_core::{find_conflicts, find_free_slots};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "bookwise",
    version,
    about = "Booking conflict checks and free/busy queries over JSON schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a proposed booking for conflicts (exit code 1 on conflict)
    Check {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Resource group of the proposal
        #[arg(short, long)]
        group: String,
        /// Proposal start (RFC 3339)
        #[arg(long)]
        start: String,
        /// Proposal end (RFC 3339)
        #[arg(long)]
        end: String,
    },
    /// List bookings sorted by group then start time
    List {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show free slots for a group within a time window
    Free {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Resource group to query
        #[arg(short, long)]
        group: String,
        /// Window start (RFC 3339)
        #[arg(long)]
        from: String,
        /// Window end (RFC 3339)
        #[arg(long)]
        to: String,
        /// Only show slots of at least this many minutes
        #[arg(long, default_value_t = 0)]
        min_duration: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            group,
            start,
            end,
        } => {
            let bookings = read_bookings(input.as_deref())?;
            let proposal = Booking::from_rfc3339(group, "proposal", &start, &end)
                .context("Invalid proposal")?;

            let conflicts =
                find_conflicts(&proposal, &bookings).context("Conflict check failed")?;
            if conflicts.is_empty() {
                println!("no conflict");
            } else {
                for c in &conflicts {
                    println!(
                        "conflict: '{}' {} - {} ({} min overlap)",
                        c.existing.title,
                        c.existing.start.to_rfc3339(),
                        c.existing.end.to_rfc3339(),
                        c.overlap_minutes
                    );
                }
                process::exit(1);
            }
        }
        Commands::List { input } => {
            let mut bookings = read_bookings(input.as_deref())?;
            bookings.sort_by(|a, b| (&a.group_id, a.start).cmp(&(&b.group_id, b.start)));
            for b in &bookings {
                println!(
                    "[{}] {} - {}  {}",
                    b.group_id,
                    b.start.to_rfc3339(),
                    b.end.to_rfc3339(),
                    b.title
                );
            }
        }
        Commands::Free {
            input,
            group,
            from,
            to,
            min_duration,
        } => {
            let bookings = read_bookings(input.as_deref())?;
            let window_start = parse_rfc3339(&from).context("Invalid --from timestamp")?;
            let window_end = parse_rfc3339(&to).context("Invalid --to timestamp")?;

            let slots = find_free_slots(&bookings, &group, window_start, window_end);
            let slots: Vec<_> = slots
                .into_iter()
                .filter(|s| s.duration_minutes >= min_duration)
                .collect();

            if slots.is_empty() {
                println!("no free slots");
            } else {
                for slot in &slots {
                    println!(
                        "free: {} - {} ({} min)",
                        slot.start.to_rfc3339(),
                        slot.end.to_rfc3339(),
                        slot.duration_minutes
                    );
                }
            }
        }
    }

    Ok(())
}

/// Read and decode a bookings JSON array from a file or stdin.
fn read_bookings(path: Option<&str>) -> Result<Vec<Booking>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse bookings JSON")
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
