//! Application services for board orchestration.

mod cache;
mod coordinator;
mod drag;
mod theme;

pub use cache::TaskListCache;
pub use coordinator::{MutationCoordinator, MutationError, MutationOutcome, MutationResult};
pub use drag::{DragDropController, DragEffect, DragState, DropOutcome};
pub use theme::ThemeService;
