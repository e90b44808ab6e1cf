//! Validated scalar fields carried by a task.

use super::TaskDomainError;
use crate::board::config::ValidationLimits;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, length-bounded task title.
///
/// Deserialisation applies the default [`ValidationLimits`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the trimmed value is empty
    /// or [`TaskDomainError::TitleTooLong`] when it exceeds the limit.
    pub fn new(value: impl Into<String>, limits: &ValidationLimits) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let actual = normalized.chars().count();
        if actual > limits.max_title_chars {
            return Err(TaskDomainError::TitleTooLong {
                max: limits.max_title_chars,
                actual,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Wraps a title read back from storage without re-validating it.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value, &ValidationLimits::default())
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Length-bounded free-text task description.
///
/// Deserialisation applies the default [`ValidationLimits`] and rejects blank
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description.
    ///
    /// Blank input means "no description" and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooLong`] when the trimmed value
    /// exceeds the limit.
    pub fn new(
        value: impl Into<String>,
        limits: &ValidationLimits,
    ) -> Result<Option<Self>, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Ok(None);
        }
        let actual = normalized.chars().count();
        if actual > limits.max_description_chars {
            return Err(TaskDomainError::DescriptionTooLong {
                max: limits.max_description_chars,
                actual,
            });
        }
        Ok(Some(Self(normalized.to_owned())))
    }

    /// Wraps a description read back from storage without re-validating it.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskDescription {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value, &ValidationLimits::default())?.ok_or(TaskDomainError::EmptyDescription)
    }
}

impl From<TaskDescription> for String {
    fn from(value: TaskDescription) -> Self {
        value.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task deadline: a calendar date with an optional time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Deadline {
    date: NaiveDate,
    time: Option<NaiveTime>,
}

impl Deadline {
    /// Creates a date-only deadline.
    #[must_use]
    pub const fn on(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    /// Creates a deadline at a specific time of day.
    #[must_use]
    pub const fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }

    /// Builds a deadline from optional form parts.
    ///
    /// Returns `Ok(None)` when neither part is set. A blank time string counts
    /// as unset.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTimeOfDay`] when the time is not
    /// `HH:MM`, or [`TaskDomainError::TimeWithoutDate`] when a time is given
    /// without a date.
    pub fn from_parts(
        date: Option<NaiveDate>,
        time: Option<&str>,
    ) -> Result<Option<Self>, TaskDomainError> {
        let parsed_time = time
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(parse_time_of_day)
            .transpose()?;
        match (date, parsed_time) {
            (None, None) => Ok(None),
            (None, Some(_)) => Err(TaskDomainError::TimeWithoutDate),
            (Some(day), time_of_day) => Ok(Some(Self {
                date: day,
                time: time_of_day,
            })),
        }
    }

    /// Returns the deadline date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the time of day, if one was set.
    #[must_use]
    pub const fn time(&self) -> Option<NaiveTime> {
        self.time
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time {
            Some(time) => write!(f, "{} {}", self.date.format("%b %d, %Y"), time.format("%H:%M")),
            None => write!(f, "{}", self.date.format("%b %d, %Y")),
        }
    }
}

/// Parses a 24-hour `HH:MM` time of day.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTimeOfDay`] for any other format.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, TaskDomainError> {
    let is_well_formed = raw.len() == 5 && raw.as_bytes().get(2) == Some(&b':');
    if !is_well_formed {
        return Err(TaskDomainError::InvalidTimeOfDay(raw.to_owned()));
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| TaskDomainError::InvalidTimeOfDay(raw.to_owned()))
}
