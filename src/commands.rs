//! Runs a parsed command and renders its output.
//!
//! Each command reads "today" from the given [`DateUtils`], so the whole flow
//! can be exercised with a fixed clock.

use crate::cli::Command;
use crate::clock::Clock;
use crate::config::Config;
use crate::constants::INSTANT_FORMAT;
use crate::dates::{calendar, format, DateUtils, LocalDate};
use crate::entry::{save_entry, EntryDraft, EntryStore, Mood};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use tracing::{debug, info};

fn render_instant(instant: &NaiveDateTime) -> String {
    instant.format(INSTANT_FORMAT).to_string()
}

/// Resolves an optional reference date to an instant, defaulting to now.
fn reference_instant<C: Clock>(
    utils: &DateUtils<C>,
    date: Option<&str>,
) -> AppResult<NaiveDateTime> {
    match date {
        Some(raw) => Ok(LocalDate::parse(raw)?.to_instant()),
        None => Ok(utils.now()),
    }
}

/// Executes `command` and returns the text to print on stdout.
///
/// # Errors
///
/// Returns `AppError::Date` for unparsable dates and `AppError::Entry` when an
/// entry cannot be saved.
pub fn execute<C: Clock, S: EntryStore>(
    command: &Command,
    utils: &DateUtils<C>,
    config: &Config,
    store: &mut S,
) -> AppResult<String> {
    debug!("Executing {:?}", command);

    let output = match command {
        Command::Today => utils.current_local_date().to_string(),
        Command::DaysAgo { days } => utils.days_ago(*days)?.to_string(),
        Command::Display { date, short } => {
            let date = LocalDate::parse(date)?;
            if *short {
                utils.format_short_display_date(&date)
            } else {
                format::format_display_date(&date)
            }
        }
        Command::Relative { date } => utils.relative_date_label(&LocalDate::parse(date)?),
        Command::Check { date: raw } => {
            let date = LocalDate::parse(raw)?;
            format!(
                "date: {}\ntoday: {}\nthis week: {}\nthis month: {}",
                date,
                utils.is_today_str(raw),
                utils.is_this_week(&date),
                utils.is_this_month(&date)
            )
        }
        Command::WeekStart { date } => {
            let instant = reference_instant(utils, date.as_deref())?;
            render_instant(&calendar::start_of_week(&instant))
        }
        Command::MonthStart { date } => {
            let instant = reference_instant(utils, date.as_deref())?;
            render_instant(&calendar::start_of_month(&instant))
        }
        Command::Entry { mood, text, habits } => {
            let today = utils.current_local_date();
            let mut draft = EntryDraft::for_today(&*store, &today, &config.habits);
            draft.set_mood(Mood::new(*mood)?);
            draft.set_decision(text.as_str());
            for habit in habits {
                if !draft.habits().is_done(habit) {
                    draft.toggle_habit(habit);
                }
            }

            let outcome = save_entry(store, &draft, &today)?;
            info!("{}", outcome.message());
            serde_json::to_string_pretty(outcome.entry())
                .map_err(|e| AppError::Io(std::io::Error::other(e)))?
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::entry::MemoryStore;
    use crate::errors::{DateError, EntryError};
    use chrono::NaiveDate;

    fn utils() -> DateUtils<FixedClock> {
        // Thursday, 15 February 2024, mid-afternoon
        let now = NaiveDate::from_ymd_opt(2024, 2, 15)
            .unwrap()
            .and_hms_opt(15, 20, 0)
            .unwrap();
        DateUtils::new(FixedClock::new(now))
    }

    fn run(command: Command) -> AppResult<String> {
        let mut store = MemoryStore::new();
        execute(&command, &utils(), &Config::default(), &mut store)
    }

    #[test]
    fn test_today_and_days_ago() {
        assert_eq!(run(Command::Today).unwrap(), "2024-02-15");
        assert_eq!(run(Command::DaysAgo { days: 15 }).unwrap(), "2024-01-31");
    }

    #[test]
    fn test_display() {
        let long = run(Command::Display {
            date: "2024-12-13".to_string(),
            short: false,
        });
        assert_eq!(long.unwrap(), "Dec 13, 2024");

        let short = run(Command::Display {
            date: "2024-12-13".to_string(),
            short: true,
        });
        assert_eq!(short.unwrap(), "Dec 13");
    }

    #[test]
    fn test_relative() {
        let label = run(Command::Relative {
            date: "2024-02-14".to_string(),
        });
        assert_eq!(label.unwrap(), "Yesterday");
    }

    #[test]
    fn test_check() {
        let output = run(Command::Check {
            date: "2024-02-29".to_string(),
        })
        .unwrap();
        assert_eq!(
            output,
            "date: 2024-02-29\ntoday: false\nthis week: false\nthis month: true"
        );
    }

    #[test]
    fn test_check_today_compares_the_string_as_given() {
        let first_of_march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let utils = DateUtils::new(FixedClock::at_midnight(first_of_march));
        let check = |date: &str| {
            let command = Command::Check {
                date: date.to_string(),
            };
            execute(&command, &utils, &Config::default(), &mut MemoryStore::new()).unwrap()
        };

        // Rolls over to 2024-03-01 but is not today's string
        let rolled = check("2024-02-30");
        assert!(rolled.starts_with("date: 2024-03-01\ntoday: false\n"));

        let unpadded = check("2024-3-1");
        assert!(unpadded.starts_with("date: 2024-03-01\ntoday: false\n"));

        let canonical = check("2024-03-01");
        assert!(canonical.starts_with("date: 2024-03-01\ntoday: true\n"));
    }

    #[test]
    fn test_week_and_month_start() {
        assert_eq!(
            run(Command::WeekStart { date: None }).unwrap(),
            "2024-02-11T00:00:00.000"
        );
        assert_eq!(
            run(Command::MonthStart {
                date: Some("2023-07-19".to_string())
            })
            .unwrap(),
            "2023-07-01T00:00:00.000"
        );
    }

    #[test]
    fn test_malformed_date_is_reported() {
        let result = run(Command::Relative {
            date: "yesterday".to_string(),
        });
        assert!(matches!(
            result,
            Err(AppError::Date(DateError::Malformed { .. }))
        ));
    }

    #[test]
    fn test_entry_saves_and_prints_json() {
        let mut store = MemoryStore::new();
        let command = Command::Entry {
            mood: 5,
            text: "Finished the draft".to_string(),
            habits: vec!["Exercise".to_string(), "Exercise".to_string()],
        };
        let output = execute(&command, &utils(), &Config::default(), &mut store).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["date"], "2024-02-15");
        assert_eq!(value["mood"], 5);
        assert_eq!(value["habits"]["Exercise"], true);
        assert_eq!(value["habits"]["Reading"], false);
        assert_eq!(store.len(), 1);

        // A second save on the same day edits the stored entry
        let again = Command::Entry {
            mood: 2,
            text: "Changed my mind".to_string(),
            habits: vec![],
        };
        execute(&again, &utils(), &Config::default(), &mut store).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].data.decision, "Changed my mind");
        assert!(store.entries()[0].data.habits.is_done("Exercise"));
    }

    #[test]
    fn test_entry_rejects_bad_input() {
        let bad_mood = run(Command::Entry {
            mood: 9,
            text: "text".to_string(),
            habits: vec![],
        });
        assert!(matches!(
            bad_mood,
            Err(AppError::Entry(EntryError::InvalidMood(9)))
        ));

        let blank = run(Command::Entry {
            mood: 3,
            text: "   ".to_string(),
            habits: vec![],
        });
        assert!(matches!(
            blank,
            Err(AppError::Entry(EntryError::MissingReflection))
        ));
    }
}
