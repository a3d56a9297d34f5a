//! Command-line interface for daybook.

use crate::constants::{APP_DESCRIPTION, APP_NAME, DEFAULT_MOOD};
use clap::{Parser, Subcommand, ValueEnum};

/// Local-date helpers and today's entry for a daily journal
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prints today's local date (YYYY-MM-DD)
    Today,

    /// Prints the date a number of days before today
    DaysAgo {
        /// Number of days to go back
        days: u32,
    },

    /// Formats a date for display, e.g. "Dec 13, 2024"
    Display {
        /// Date in YYYY-MM-DD format
        date: String,

        /// Leave out the year when it is the current year
        #[arg(short, long)]
        short: bool,
    },

    /// Describes a date relative to today ("Yesterday", "3 days ago", ...)
    Relative {
        /// Date in YYYY-MM-DD format
        date: String,
    },

    /// Reports whether a date is today, in this week and in this month
    Check {
        /// Date in YYYY-MM-DD format
        date: String,
    },

    /// Prints midnight of the Sunday starting the week
    WeekStart {
        /// Reference date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Prints midnight of the first day of the month
    MonthStart {
        /// Reference date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Saves today's entry and prints it as JSON
    Entry {
        /// Mood from 1 (very sad) to 5 (very happy)
        #[arg(short, long, default_value_t = DEFAULT_MOOD)]
        mood: u8,

        /// What's on your mind today
        #[arg(short, long)]
        text: String,

        /// A habit completed today (repeatable)
        #[arg(long = "habit")]
        habits: Vec<String>,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}
