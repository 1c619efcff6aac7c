//! Deferred tasks on a virtual millisecond timeline.
//!
//! Nothing here sleeps. The owner advances time explicitly and runs whatever
//! falls due, one task at a time, so a handler may cancel later tasks before
//! they fire.

use crate::types::CardId;

/// Cancellation token for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskToken(u64);

/// Work the engine knows how to run when it falls due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// One session-clock second elapsed.
    ClockTick,
    /// Turn a mismatched pair face down and unlock the board.
    RevealMismatch { first: CardId, second: CardId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    token: TaskToken,
    due_ms: u64,
    period_ms: Option<u32>,
    task: Task,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheduler {
    now_ms: u64,
    next_token: u64,
    entries: Vec<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of live (not yet fired or cancelled) tasks.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_scheduled(&self, token: TaskToken) -> bool {
        self.entries.iter().any(|e| e.token == token)
    }

    /// Run `task` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u32, task: Task) -> TaskToken {
        self.insert(delay_ms, None, task)
    }

    /// Run `task` every `period_ms`, first after one full period.
    pub fn schedule_repeating(&mut self, period_ms: u32, task: Task) -> TaskToken {
        let period_ms = period_ms.max(1);
        self.insert(period_ms, Some(period_ms), task)
    }

    fn insert(&mut self, delay_ms: u32, period_ms: Option<u32>, task: Task) -> TaskToken {
        self.next_token += 1;
        let token = TaskToken(self.next_token);
        self.entries.push(Entry {
            token,
            due_ms: self.now_ms + u64::from(delay_ms),
            period_ms,
            task,
        });
        token
    }

    /// Cancel a task. Returns whether it was still live; cancelling twice is fine.
    pub fn cancel(&mut self, token: TaskToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.token != token);
        self.entries.len() != before
    }

    /// Pop the earliest task due at or before `deadline_ms`.
    ///
    /// Moves the timeline to the task's due time. Ties fire in scheduling order.
    /// Repeating tasks are re-armed one period later.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<(TaskToken, Task)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= deadline_ms)
            .min_by_key(|(_, e)| (e.due_ms, e.token))
            .map(|(i, _)| i)?;

        let Entry {
            token,
            due_ms,
            period_ms,
            task,
        } = self.entries[idx];
        self.now_ms = self.now_ms.max(due_ms);

        match period_ms {
            Some(period) => self.entries[idx].due_ms = due_ms + u64::from(period),
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some((token, task))
    }

    /// Move the timeline to `deadline_ms` once every due task has been popped.
    pub fn settle(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut Scheduler, elapsed: u64) -> Vec<Task> {
        let deadline = s.now_ms() + elapsed;
        let mut out = Vec::new();
        while let Some((_, task)) = s.pop_due(deadline) {
            out.push(task);
        }
        s.settle(deadline);
        out
    }

    #[test]
    fn once_fires_exactly_at_delay() {
        let mut s = Scheduler::new();
        let reveal = Task::RevealMismatch {
            first: CardId(1),
            second: CardId(2),
        };
        s.schedule_once(600, reveal);

        assert!(drain(&mut s, 599).is_empty());
        assert_eq!(drain(&mut s, 1), vec![reveal]);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn repeating_fires_once_per_period() {
        let mut s = Scheduler::new();
        s.schedule_repeating(1000, Task::ClockTick);

        assert_eq!(drain(&mut s, 3500).len(), 3);
        assert_eq!(drain(&mut s, 500).len(), 1);
        assert_eq!(s.pending(), 1);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut s = Scheduler::new();
        let token = s.schedule_once(10, Task::ClockTick);

        assert!(s.cancel(token));
        assert!(!s.cancel(token));
        assert!(drain(&mut s, 100).is_empty());
    }

    #[test]
    fn due_tasks_fire_in_time_order() {
        let mut s = Scheduler::new();
        let reveal = Task::RevealMismatch {
            first: CardId(3),
            second: CardId(4),
        };
        s.schedule_repeating(1000, Task::ClockTick);
        s.schedule_once(600, reveal);

        assert_eq!(drain(&mut s, 1000), vec![reveal, Task::ClockTick]);
    }

    #[test]
    fn pop_due_moves_the_timeline() {
        let mut s = Scheduler::new();
        s.schedule_once(250, Task::ClockTick);
        assert!(s.pop_due(1000).is_some());
        assert_eq!(s.now_ms(), 250);
        s.settle(1000);
        assert_eq!(s.now_ms(), 1000);
    }

    #[test]
    fn cancelled_before_due_never_fires_even_mid_drain() {
        let mut s = Scheduler::new();
        let _tick = s.schedule_once(100, Task::ClockTick);
        let later = s.schedule_once(200, Task::ClockTick);

        let deadline = 300;
        assert!(s.pop_due(deadline).is_some());
        s.cancel(later);
        assert!(s.pop_due(deadline).is_none());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tick_count_ignores_frame_split(
                period in 1u32..2000,
                frames in prop::collection::vec(0u64..700, 0..60),
            ) {
                let mut s = Scheduler::new();
                s.schedule_repeating(period, Task::ClockTick);

                let mut fired = 0u64;
                for frame in &frames {
                    fired += drain(&mut s, *frame).len() as u64;
                }
                let total: u64 = frames.iter().sum();
                prop_assert_eq!(fired, total / u64::from(period));
                prop_assert_eq!(s.now_ms(), total);
            }
        }
    }
}
