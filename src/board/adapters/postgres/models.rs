//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline date.
    pub deadline_date: Option<NaiveDate>,
    /// Optional deadline time of day.
    pub deadline_time: Option<NaiveTime>,
    /// Raw column identifier.
    pub column_id: String,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert model for task records. The store fills `id` and `created_at`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline date.
    pub deadline_date: Option<NaiveDate>,
    /// Optional deadline time of day.
    pub deadline_time: Option<NaiveTime>,
    /// Column identifier.
    pub column_id: String,
}

/// Partial update model. `None` leaves a column untouched; `Some(None)`
/// writes `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<Option<String>>,
    /// New deadline date.
    pub deadline_date: Option<Option<NaiveDate>>,
    /// New deadline time.
    pub deadline_time: Option<Option<NaiveTime>>,
    /// New column identifier.
    pub column_id: Option<String>,
}
