//! Port contracts for the board's external collaborators.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod celebration;
pub mod notifier;
pub mod preferences;
pub mod repository;

pub use celebration::Celebration;
pub use notifier::NotificationSink;
pub use preferences::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
