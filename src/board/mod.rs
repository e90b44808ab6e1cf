//! Kanban board state, mutations, and drag-and-drop for a single board.
//!
//! The board has three fixed columns. Tasks live in an external repository;
//! the client only ever holds a [`domain::BoardState`] derived from the
//! repository's latest task list. The module follows hexagonal architecture:
//!
//! - Domain types and the reconciler in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Configuration in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
