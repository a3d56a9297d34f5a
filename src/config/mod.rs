//! Configuration management for the daybook application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_TODAY`: Pins "today" to a fixed `YYYY-MM-DD` date instead of the system clock
//! - `DAYBOOK_HABITS`: Comma-separated habits offered on a new entry (defaults to the built-in list)
//! - `DAYBOOK_LOG_LEVEL`: Default log filter (defaults to "info"; `RUST_LOG` takes precedence)

use crate::constants::{
    DEFAULT_HABITS, DEFAULT_LOG_LEVEL, ENV_VAR_DAYBOOK_HABITS, ENV_VAR_DAYBOOK_LOG_LEVEL,
    ENV_VAR_DAYBOOK_TODAY, HABIT_LIST_SEPARATOR,
};
use crate::dates::LocalDate;
use crate::errors::{AppError, AppResult};
use std::env;

/// Configuration for the daybook application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use daybook::Config;
/// use daybook::dates::LocalDate;
///
/// let config = Config {
///     fixed_today: Some(LocalDate::parse("2024-02-15").unwrap()),
///     habits: vec!["Reading".to_string()],
///     log_level: "debug".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Date to treat as today. `None` means the system clock decides.
    pub fixed_today: Option<LocalDate>,

    /// Habits offered on a fresh entry, in display order.
    pub habits: Vec<String>,

    /// Default log filter directive.
    pub log_level: String,
}

impl Default for Config {
    /// Creates a new Config with default values.
    fn default() -> Self {
        Config {
            fixed_today: None,
            habits: DEFAULT_HABITS.iter().map(|h| h.to_string()).collect(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Splits a comma-separated habit list, trimming names and dropping blanks.
    fn parse_habit_list(raw: &str) -> Vec<String> {
        raw.split(HABIT_LIST_SEPARATOR)
            .map(str::trim)
            .filter(|habit| !habit.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - `DAYBOOK_TODAY` is not a `YYYY-MM-DD` date
    /// - `DAYBOOK_HABITS` is set but names no habit
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use daybook::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Loaded config with {} habits", config.habits.len()),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let fixed_today = match env::var(ENV_VAR_DAYBOOK_TODAY) {
            Ok(raw) => Some(LocalDate::parse(raw.trim()).map_err(|e| {
                AppError::Config(format!("{} is invalid: {}", ENV_VAR_DAYBOOK_TODAY, e))
            })?),
            Err(_) => None,
        };

        let habits = match env::var(ENV_VAR_DAYBOOK_HABITS) {
            Ok(raw) => Config::parse_habit_list(&raw),
            Err(_) => Config::default().habits,
        };

        let log_level =
            env::var(ENV_VAR_DAYBOOK_LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let config = Config {
            fixed_today,
            habits,
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the habit list is empty or the log
    /// level is blank.
    pub fn validate(&self) -> AppResult<()> {
        if self.habits.is_empty() {
            return Err(AppError::Config(format!(
                "{} must name at least one habit",
                ENV_VAR_DAYBOOK_HABITS
            )));
        }

        if self.log_level.trim().is_empty() {
            return Err(AppError::Config("Log level is empty".to_string()));
        }

        Ok(())
    }
}
