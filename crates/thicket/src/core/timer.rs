//! Repeating timers for a single-threaded event loop.
//!
//! Timers never fire on their own: the loop asks [`Timers::next_wait`] how
//! long it may block, then calls [`Timers::due`] and delivers an
//! [`Event::Timer`](crate::event::Event::Timer) for each id returned.
use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    time::{Duration, Instant},
};

use slotmap::{SlotMap, new_key_type};

use crate::Context;

new_key_type! {
    /// Identifies a timer.
    pub struct TimerId;
}

/// A scheduled firing.
#[derive(Debug)]
struct Pending {
    /// Scheduled time for the firing.
    time: Instant,
    /// Timer to fire.
    id: TimerId,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
    }
}

impl Eq for Pending {}

/// Reverse order so the closest firing is at the top.
impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reverse order so the closest firing is at the top.
impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other.time.cmp(&self.time)
    }
}

/// A set of repeating timers.
#[derive(Debug, Default)]
pub struct Timers {
    /// Live timers and their intervals.
    intervals: SlotMap<TimerId, Duration>,
    /// Upcoming firings. Entries for removed timers are dropped lazily.
    pending: BinaryHeap<Pending>,
}

impl Timers {
    /// Construct an empty timer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a repeating timer relative to an explicit time base.
    pub fn add_at(&mut self, now: Instant, interval: Duration) -> TimerId {
        let id = self.intervals.insert(interval);
        self.pending.push(Pending {
            time: now + interval,
            id,
        });
        id
    }

    /// Add a repeating timer.
    pub fn add(&mut self, interval: Duration) -> TimerId {
        self.add_at(Instant::now(), interval)
    }

    /// Remove a timer. Returns false if it did not exist.
    pub fn remove(&mut self, id: TimerId) -> bool {
        self.intervals.remove(id).is_some()
    }

    /// Is the timer live?
    pub fn contains(&self, id: TimerId) -> bool {
        self.intervals.contains_key(id)
    }

    /// Number of live timers.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True if no timers are live.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Drop stale heap entries from the top of the heap.
    fn prune(&mut self) {
        while let Some(top) = self.pending.peek() {
            if self.intervals.contains_key(top.id) {
                break;
            }
            self.pending.pop();
        }
    }

    /// Wait time until the next firing relative to a given timestamp. None
    /// if no timers are live, zero if a firing is overdue.
    pub fn next_wait_at(&mut self, now: Instant) -> Option<Duration> {
        self.prune();
        self.pending
            .peek()
            .map(|top| top.time.checked_duration_since(now).unwrap_or(Duration::ZERO))
    }

    /// Wait time until the next firing.
    pub fn next_wait(&mut self) -> Option<Duration> {
        self.next_wait_at(Instant::now())
    }

    /// Collect timers due at `now`, rescheduling each one interval later.
    pub fn due_at(&mut self, now: Instant) -> Vec<TimerId> {
        let mut ret = vec![];
        let mut next = vec![];
        while let Some(p) = self.pending.pop() {
            let Some(interval) = self.intervals.get(p.id).copied() else {
                continue;
            };
            if p.time > now {
                self.pending.push(p);
                break;
            }
            ret.push(p.id);
            next.push(Pending {
                time: now + interval,
                id: p.id,
            });
        }
        self.pending.extend(next);
        ret
    }

    /// Collect timers that are due now.
    pub fn due(&mut self) -> Vec<TimerId> {
        self.due_at(Instant::now())
    }
}

impl Context for Timers {
    fn add_timer(&mut self, interval: Duration) -> TimerId {
        self.add(interval)
    }

    fn del_timer(&mut self, id: TimerId) {
        self.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule() {
        let now = Instant::now();
        let mut t = Timers::new();
        assert_eq!(t.next_wait_at(now), None);

        let a = t.add_at(now, Duration::from_secs(10));
        let b = t.add_at(now, Duration::from_secs(100));
        assert_eq!(t.next_wait_at(now), Some(Duration::from_secs(10)));
        assert_eq!(t.due_at(now + Duration::from_secs(11)), vec![a]);
        // Rescheduled one interval after it fired.
        assert_eq!(
            t.next_wait_at(now + Duration::from_secs(11)),
            Some(Duration::from_secs(10))
        );
        assert!(t.due_at(now + Duration::from_secs(12)).is_empty());

        let mut fired = t.due_at(now + Duration::from_secs(200));
        fired.sort();
        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(fired, expected);
    }

    #[test]
    fn remove() {
        let now = Instant::now();
        let mut t = Timers::new();
        let a = t.add_at(now, Duration::from_millis(100));
        assert!(t.contains(a));
        assert!(t.remove(a));
        assert!(!t.remove(a));
        assert!(t.is_empty());
        assert_eq!(t.next_wait_at(now), None);
        assert!(t.due_at(now + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn as_context() {
        let mut t = Timers::new();
        let ctx: &mut dyn Context = &mut t;
        let id = ctx.add_timer(Duration::from_millis(50));
        assert!(t.contains(id));
        let ctx: &mut dyn Context = &mut t;
        ctx.del_timer(id);
        ctx.del_timer(id);
        assert!(t.is_empty());
    }
}
