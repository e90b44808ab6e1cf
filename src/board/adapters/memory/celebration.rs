//! Self-clearing, clock-bounded celebration effect.

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock};

use crate::board::ports::Celebration;

/// Celebration that stays active for a fixed window after each trigger.
///
/// Nothing outlives the window: once it elapses the effect reads as inactive
/// without any explicit reset. Retriggering restarts the window.
pub struct TimedCelebration<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    duration: TimeDelta,
    state: RwLock<CelebrationState>,
}

#[derive(Debug, Default)]
struct CelebrationState {
    last_triggered: Option<DateTime<Utc>>,
    triggers: u64,
}

impl<C: Clock + Send + Sync> TimedCelebration<C> {
    /// Creates an inactive celebration with the given lifetime.
    #[must_use]
    pub fn new(clock: Arc<C>, duration: TimeDelta) -> Self {
        Self {
            clock,
            duration,
            state: RwLock::new(CelebrationState::default()),
        }
    }

    /// Returns `true` while the most recent trigger's window is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.last_triggered.is_some_and(|started| {
            started
                .checked_add_signed(self.duration)
                .is_none_or(|ends| self.clock.utc() < ends)
        })
    }

    /// Returns how many times the effect has fired.
    #[must_use]
    pub fn trigger_count(&self) -> u64 {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .triggers
    }
}

impl<C: Clock + Send + Sync> Celebration for TimedCelebration<C> {
    fn celebrate(&self) {
        let now = self.clock.utc();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.last_triggered = Some(now);
        state.triggers = state.triggers.saturating_add(1);
        tracing::debug!(triggers = state.triggers, "celebration triggered");
    }
}
