//! In-memory adapters for every board port.

mod celebration;
mod notifier;
mod preferences;
mod task;

pub use celebration::TimedCelebration;
pub use notifier::RecordingNotificationSink;
pub use preferences::InMemoryPreferenceStore;
pub use task::InMemoryTaskRepository;
