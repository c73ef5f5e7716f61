use std::time::Duration;

use crate::timer::TimerId;

/// Services a widget can use while handling an event.
pub trait Context {
    /// Start a repeating timer. Firings arrive as `Event::Timer(id)`.
    fn add_timer(&mut self, interval: Duration) -> TimerId;
    /// Stop a timer. Unknown ids are ignored.
    fn del_timer(&mut self, id: TimerId);
}
