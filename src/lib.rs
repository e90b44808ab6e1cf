//! Taskboard: a three-column Kanban board core.
//!
//! This crate holds the task model, the board reconciliation algorithm, and
//! the services that turn user intents (create, edit, drag-and-drop, delete)
//! into single repository calls with one notification each.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory, logs)
//!
//! # Modules
//!
//! - [`board`]: Tasks, columns, board state, and mutation coordination

pub mod board;
