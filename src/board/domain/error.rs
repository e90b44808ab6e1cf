//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The task title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,

    /// The task title exceeds the configured limit.
    #[error("title is too long: {actual} characters, maximum is {max}")]
    TitleTooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length.
        actual: usize,
    },

    /// A stored description is blank. Absence is expressed as no value.
    #[error("description must not be blank; omit it instead")]
    EmptyDescription,

    /// The task description exceeds the configured limit.
    #[error("description is too long: {actual} characters, maximum is {max}")]
    DescriptionTooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length.
        actual: usize,
    },

    /// The time-of-day is not in `HH:MM` 24-hour format.
    #[error("invalid time of day '{0}', expected HH:MM")]
    InvalidTimeOfDay(String),

    /// A time-of-day was given without a deadline date.
    #[error("a deadline time requires a deadline date")]
    TimeWithoutDate,
}

/// Error returned while parsing column identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnIdError(pub String);

/// Error returned while parsing theme preferences.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme preference: {0}")]
pub struct ParseThemePreferenceError(pub String);
