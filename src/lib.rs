/*!
# daybook

daybook is the date and entry core of a daily journal: a mood, a short
reflection and a habit checklist for each day. Days are exchanged as
`YYYY-MM-DD` strings in the user's local timezone, and all "today"-relative
logic reads the time from an injected clock.

## Core Features

- Parse, produce and compare local date strings without UTC drift
- Sunday-anchored week and calendar-month boundaries
- en-US display strings and relative labels ("Today", "3 days ago", ...)
- Form state and save flow for today's entry

## Architecture

- `clock`: Sources of the current instant
- `dates`: Local date type, calendar boundaries, formatting
- `entry`: Mood, habit checklist, entry draft and store contract
- `cli` / `commands`: Command-line interface using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `logging`: tracing subscriber setup

## Usage Example

```rust
use daybook::clock::FixedClock;
use daybook::dates::{DateUtils, LocalDate};
use chrono::NaiveDate;

let today = NaiveDate::from_ymd_opt(2024, 12, 16).unwrap();
let utils = DateUtils::new(FixedClock::at_midnight(today));

let date = LocalDate::parse("2024-12-13").unwrap();
assert_eq!(utils.relative_date_label(&date), "3 days ago");
assert_eq!(daybook::dates::format::format_display_date(&date), "Dec 13, 2024");
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Sources of the current local instant
pub mod clock;
/// Command execution for the binary
pub mod commands;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Local-timezone calendar dates
pub mod dates;
/// Today's journal entry
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Logging setup
pub mod logging;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use dates::{DateUtils, LocalDate};
pub use errors::{AppError, AppResult};
