use std::time::Duration;

use slotmap::SlotMap;

use crate::{Context, timer::TimerId};

/// Dummy context for tests. Timers are recorded but never fire; tests
/// deliver `Event::Timer` themselves.
#[derive(Debug, Default)]
pub struct DummyContext {
    /// Live timers and their intervals.
    timers: SlotMap<TimerId, Duration>,
    /// Number of timers ever started.
    pub started: usize,
}

impl DummyContext {
    /// Construct an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the live timers.
    pub fn active(&self) -> Vec<TimerId> {
        self.timers.keys().collect()
    }

    /// Interval of a live timer.
    pub fn interval(&self, id: TimerId) -> Option<Duration> {
        self.timers.get(id).copied()
    }
}

impl Context for DummyContext {
    fn add_timer(&mut self, interval: Duration) -> TimerId {
        self.started += 1;
        self.timers.insert(interval)
    }

    fn del_timer(&mut self, id: TimerId) {
        self.timers.remove(id);
    }
}
