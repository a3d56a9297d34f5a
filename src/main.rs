/*!
# daybook

Command-line front end for the daybook date helpers and today's journal entry.

## Usage

```
daybook [OPTIONS] <COMMAND>

Commands:
  today        Prints today's local date (YYYY-MM-DD)
  days-ago     Prints the date a number of days before today
  display      Formats a date for display, e.g. "Dec 13, 2024"
  relative     Describes a date relative to today
  check        Reports whether a date is today, in this week and in this month
  week-start   Prints midnight of the Sunday starting the week
  month-start  Prints midnight of the first day of the month
  entry        Saves today's entry and prints it as JSON

Options:
  -v, --verbose                Print verbose output
      --log-format <FORMAT>    Log output format [default: text] [possible values: text, json]
```

## Configuration

- `DAYBOOK_TODAY`: pin "today" to a `YYYY-MM-DD` date
- `DAYBOOK_HABITS`: comma-separated habit list for new entries
- `DAYBOOK_LOG_LEVEL`: default log filter (`RUST_LOG` takes precedence)
*/

use daybook::cli::CliArgs;
use daybook::clock::{Clock, FixedClock, SystemClock};
use daybook::commands;
use daybook::config::Config;
use daybook::constants::{TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use daybook::dates::DateUtils;
use daybook::entry::MemoryStore;
use daybook::errors::AppResult;
use daybook::logging;
use std::io::Write;
use tracing::{debug, error, info, info_span};
use uuid::Uuid;

fn run<C: Clock>(args: &CliArgs, config: &Config, clock: C) -> AppResult<()> {
    let utils = DateUtils::new(clock);
    let mut store = MemoryStore::new();

    let output = commands::execute(&args.command, &utils, config, &mut store)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}

/// The main entry point for the daybook application.
///
/// 1. Parses command-line arguments
/// 2. Loads and validates configuration
/// 3. Initializes logging
/// 4. Picks the clock (fixed via `DAYBOOK_TODAY`, otherwise the system clock)
/// 5. Runs the command and prints its output
fn main() -> AppResult<()> {
    let args = CliArgs::parse_args();
    let config = Config::load()?;

    let level = if args.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    logging::init(args.log_format, level)?;

    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        invocation_id = %Uuid::new_v4()
    );
    let _guard = span.enter();

    info!("Starting daybook");
    debug!("CLI arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    let result = match config.fixed_today {
        Some(today) => {
            info!("Using fixed date {}", today);
            run(&args, &config, FixedClock::at_midnight(today.naive()))
        }
        None => run(&args, &config, SystemClock),
    };

    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }
    result
}
