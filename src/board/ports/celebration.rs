//! Port for the celebratory effect shown when a task is completed.

/// Triggers a self-clearing celebratory effect.
///
/// Implementations bound the effect's lifetime themselves; callers only fire
/// it and never reset it.
pub trait Celebration: Send + Sync {
    /// Fires the effect once.
    fn celebrate(&self);
}
