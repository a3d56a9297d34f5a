//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents errors that can occur when reading a local date string.
///
/// Date strings are expected in the `YYYY-MM-DD` form. Anything that does not
/// split into exactly three numeric components is rejected as `Malformed`.
/// Out-of-range month or day values are not errors: they roll over into the
/// neighbouring month or year, the same way calendar arithmetic does.
///
/// # Examples
///
/// ```
/// use daybook::errors::DateError;
///
/// let error = DateError::Malformed {
///     input: "2024/12/13".to_string(),
///     reason: "expected three components separated by '-'".to_string(),
/// };
/// assert!(format!("{}", error).contains("2024/12/13"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input is not a `YYYY-MM-DD` date string.
    #[error("Malformed date '{input}': {reason}. Expected a date in YYYY-MM-DD format.")]
    Malformed {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// The input is well-formed but lands outside the representable calendar.
    #[error("Date '{input}' is outside the supported calendar range")]
    OutOfRange {
        /// The rejected input
        input: String,
    },
}

/// Represents errors raised by an entry store.
///
/// # Examples
///
/// ```
/// use daybook::errors::StoreError;
///
/// let error = StoreError::NotFound("1234".to_string());
/// assert!(format!("{}", error).contains("1234"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entry exists with the given id.
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// An entry already exists for the given date.
    #[error("An entry for {0} already exists")]
    DuplicateDate(String),
}

/// Represents errors that can occur while filling in or saving an entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Mood values run from 1 to 5.
    #[error("Invalid mood {0}: mood must be between 1 and 5")]
    InvalidMood(u8),

    /// The reflection text is empty once trimmed.
    #[error("Missing information. Please write about your day before saving.")]
    MissingReflection,

    /// The entry store refused the save.
    #[error("Failed to save entry: {0}")]
    Store(#[from] StoreError),
}

/// Represents all possible errors that can occur in the daybook application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use daybook::errors::AppError;
///
/// let error = AppError::Config("DAYBOOK_HABITS is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: DAYBOOK_HABITS is empty");
/// ```
///
/// Converting from a date error:
/// ```
/// use daybook::errors::{AppError, DateError};
///
/// let date_error = DateError::OutOfRange { input: "99999-01-01".to_string() };
/// let app_error: AppError = date_error.into();
///
/// match app_error {
///     AppError::Date(DateError::OutOfRange { input }) => assert_eq!(input, "99999-01-01"),
///     _ => panic!("Expected Date variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors, e.g. when writing command output.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors parsing or computing local dates.
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    /// Errors filling in or saving a journal entry.
    #[error("Entry error: {0}")]
    Entry(#[from] EntryError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use daybook::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
