//! `PostgreSQL` adapter for task persistence.

mod models;
mod repository;
mod schema;


pub use repository::{PostgresTaskRepository, TaskPgPool};
