//! `slots` CLI — compute shared free time from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Free windows from live calendar events (JSON array on stdin)
//! cat events.json | slots events --range "03/16/2026 - 03/22/2026" \
//!     --open 9:00 --close 17:00 --duration 30
//!
//! # From a file, also writing the anonymized busy list for storage
//! slots events -i events.json --range "03/16/2026 - 03/22/2026" \
//!     --open 9am --close 5pm --duration 30 --busy-out busy.json
//!
//! # Free windows from busy pairs accumulated in storage
//! slots stored -i busy.json --range "03/16/2026 - 03/22/2026" --duration 30
//! ```

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use slot_engine::{
    format, free_windows_from_events, free_windows_from_stored, parse, DailyWindow, DayRange,
    FreeWindow, LabeledInterval, PlainInterval,
};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Shared free-time finder for meeting scheduling"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute free windows from labeled calendar events
    Events {
        /// Input file with a JSON array of events (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Day range, "MM/DD/YYYY - MM/DD/YYYY" (both days included)
        #[arg(long)]
        range: String,
        /// Daily open time (e.g. 9:00 or 9am)
        #[arg(long)]
        open: String,
        /// Daily close time (e.g. 17:00 or 5pm)
        #[arg(long)]
        close: String,
        /// Minimum meeting length in minutes
        #[arg(long)]
        duration: i64,
        /// IANA timezone for day boundaries and display
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Write the anonymized busy list (JSON) to this file
        #[arg(long)]
        busy_out: Option<String>,
    },
    /// Compute free windows from stored anonymized busy pairs
    Stored {
        /// Input file with a JSON array of busy pairs (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Day range, "MM/DD/YYYY - MM/DD/YYYY" (both days included)
        #[arg(long)]
        range: String,
        /// Minimum meeting length in minutes
        #[arg(long)]
        duration: i64,
        /// IANA timezone for day boundaries and display
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Events {
            input,
            range,
            open,
            close,
            duration,
            timezone,
            busy_out,
        } => {
            let tz = parse_timezone(&timezone)?;
            let day_range = day_range_from_arg(&range, tz)?;

            let (open_hour, open_minute) = parse::parse_clock_time("open", &open)?;
            let (close_hour, close_minute) = parse::parse_clock_time("close", &close)?;
            let window = DailyWindow::new(open_hour, open_minute, close_hour, close_minute)?;

            let json = read_input(input.as_deref())?;
            let events: Vec<LabeledInterval> =
                serde_json::from_str(&json).context("input is not a JSON array of events")?;

            let result = free_windows_from_events(&events, &window, &day_range, duration)?;
            print_windows(&result.free, tz);

            if let Some(path) = busy_out {
                let busy = serde_json::to_string_pretty(&result.storable_busy)?;
                std::fs::write(&path, busy)
                    .with_context(|| format!("Failed to write file: {}", path))?;
            }
        }
        Commands::Stored {
            input,
            range,
            duration,
            timezone,
        } => {
            let tz = parse_timezone(&timezone)?;
            let day_range = day_range_from_arg(&range, tz)?;

            let json = read_input(input.as_deref())?;
            let stored: Vec<PlainInterval> =
                serde_json::from_str(&json).context("input is not a JSON array of busy pairs")?;

            let free = free_windows_from_stored(&stored, &day_range, duration)?;
            print_windows(&free, tz);
        }
    }

    Ok(())
}

fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {}", name))
}

fn day_range_from_arg(range: &str, tz: Tz) -> Result<DayRange> {
    let (first, last) = parse::parse_date_range(range)?;
    Ok(DayRange::consecutive(first, last, tz)?)
}

fn print_windows(windows: &[FreeWindow], tz: Tz) {
    if windows.is_empty() {
        println!("No shared free time in this range.");
        return;
    }
    for line in format::format_windows(windows, tz) {
        println!("{}", line);
    }
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
