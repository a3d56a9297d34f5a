//! Constants used throughout the application.
//!
//! This module contains all constants used in the daybook application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Local-date helpers and today's entry for a daily journal";

// Logging Defaults
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable pinning "today" to a fixed `YYYY-MM-DD` date.
pub const ENV_VAR_DAYBOOK_TODAY: &str = "DAYBOOK_TODAY";
/// Environment variable holding a comma-separated habit list.
pub const ENV_VAR_DAYBOOK_HABITS: &str = "DAYBOOK_HABITS";
/// Environment variable holding the default log filter.
pub const ENV_VAR_DAYBOOK_LOG_LEVEL: &str = "DAYBOOK_LOG_LEVEL";
/// Separator used in `DAYBOOK_HABITS`.
pub const HABIT_LIST_SEPARATOR: char = ',';

// Date/Time Logic
/// Separator between the components of a local date string.
pub const DATE_SEPARATOR: char = '-';
/// Display format, en-US convention (e.g. "Dec 13, 2024").
pub const DISPLAY_FORMAT: &str = "%b %-d, %Y";
/// Display format without the year (e.g. "Dec 13").
pub const SHORT_DISPLAY_FORMAT: &str = "%b %-d";
/// Format used when printing local instants.
pub const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";
/// Largest distance in days that still gets a relative label.
pub const RELATIVE_LABEL_MAX_DAYS: i64 = 7;
/// Number of days in a week.
pub const DAYS_PER_WEEK: i64 = 7;
/// Label for the current day.
pub const LABEL_TODAY: &str = "Today";
/// Label for the previous day.
pub const LABEL_YESTERDAY: &str = "Yesterday";

// Entry Form
/// Lowest mood value.
pub const MOOD_MIN: u8 = 1;
/// Highest mood value.
pub const MOOD_MAX: u8 = 5;
/// Mood preselected on a new entry.
pub const DEFAULT_MOOD: u8 = 3;
/// Emoji per mood, indexed by `mood - 1`.
pub const MOOD_EMOJIS: [&str; 5] = ["😞", "😔", "😐", "😊", "😄"];
/// Label per mood, indexed by `mood - 1`.
pub const MOOD_LABELS: [&str; 5] = ["Very Sad", "Sad", "Neutral", "Happy", "Very Happy"];
/// Habits offered on a fresh checklist.
pub const DEFAULT_HABITS: [&str; 8] = [
    "Exercise",
    "Meditation",
    "Reading",
    "Healthy Eating",
    "Early Sleep",
    "Gratitude Practice",
    "Learning",
    "Social Connection",
];
/// Heading shown while creating today's entry.
pub const HEADING_NEW_ENTRY: &str = "Today's Reflection";
/// Heading shown while editing today's entry.
pub const HEADING_EDIT_ENTRY: &str = "Edit Today's Entry";
/// Message after a new entry is stored.
pub const MESSAGE_ENTRY_SAVED: &str = "Your entry has been saved.";
/// Message after an existing entry is updated.
pub const MESSAGE_ENTRY_UPDATED: &str = "Your entry has been updated.";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "daybook";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
