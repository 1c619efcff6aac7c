//! Session clock: one tick per elapsed second, driven by the [`Scheduler`].

use crate::scheduler::{Scheduler, Task, TaskToken};
use crate::types::CLOCK_TICK_MS;

/// Handle to a running clock. Identifies which ticks belong to the live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockHandle(TaskToken);

impl ClockHandle {
    pub fn token(&self) -> TaskToken {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    period_ms: u32,
}

impl SessionClock {
    pub fn new(period_ms: u32) -> Self {
        Self { period_ms }
    }

    /// Arm a repeating tick. The caller stops any previous clock first.
    pub fn start(&self, scheduler: &mut Scheduler) -> ClockHandle {
        ClockHandle(scheduler.schedule_repeating(self.period_ms, Task::ClockTick))
    }

    /// Cancel a clock. Unset and already-stopped handles are ignored.
    pub fn stop(&self, scheduler: &mut Scheduler, handle: Option<ClockHandle>) {
        if let Some(handle) = handle {
            scheduler.cancel(handle.0);
        }
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(CLOCK_TICK_MS)
    }
}
