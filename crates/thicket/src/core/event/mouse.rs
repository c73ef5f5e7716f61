//! Mouse input.
use std::time::{Duration, Instant};

use super::key;
use crate::geom::Point;

/// A mouse button.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Button {
    /// Left button.
    Left,
    /// Right button.
    Right,
    /// Middle button.
    Middle,
    /// No button, for moves.
    None,
}

/// What the mouse did.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Action {
    /// Button pressed.
    Down,
    /// Button released.
    Up,
    /// Moved with a button held.
    Drag,
    /// Moved with no button held.
    Moved,
    /// Second press in quick succession at the same location.
    DoubleClick,
}

/// A mouse event. Locations are screen coordinates.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MouseEvent {
    /// Action.
    pub action: Action,
    /// Button involved in the action.
    pub button: Button,
    /// Screen location.
    pub location: Point,
    /// Modifier keys held.
    pub modifiers: key::Mods,
}

impl MouseEvent {
    /// A left-button event with no modifiers.
    pub fn left(action: Action, location: impl Into<Point>) -> Self {
        Self {
            action,
            button: Button::Left,
            location: location.into(),
            modifiers: key::Empty,
        }
    }
}

/// Wheel direction.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Wheel {
    /// Scroll towards the top.
    Up,
    /// Scroll towards the bottom.
    Down,
}

/// A wheel event at a screen location.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WheelEvent {
    /// Direction.
    pub direction: Wheel,
    /// Screen location.
    pub location: Point,
}

/// Terminals report presses only, so double clicks are synthesized from
/// two left presses at the same cell within `interval`.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    /// Maximum gap between presses.
    interval: Duration,
    /// Last left press.
    last: Option<(Instant, Point)>,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl ClickTracker {
    /// Construct a tracker with a custom double-click interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Rewrite a press into a double click when it follows a recent press.
    pub fn track(&mut self, now: Instant, mut m: MouseEvent) -> MouseEvent {
        if m.action != Action::Down || m.button != Button::Left {
            return m;
        }
        match self.last {
            Some((t, loc))
                if loc == m.location && now.saturating_duration_since(t) <= self.interval =>
            {
                self.last = None;
                m.action = Action::DoubleClick;
            }
            _ => self.last = Some((now, m.location)),
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_click() {
        let mut t = ClickTracker::default();
        let now = Instant::now();
        let down = MouseEvent::left(Action::Down, (3, 3));

        assert_eq!(t.track(now, down).action, Action::Down);
        assert_eq!(
            t.track(now + Duration::from_millis(100), down).action,
            Action::DoubleClick
        );
        // A third press starts over.
        assert_eq!(
            t.track(now + Duration::from_millis(150), down).action,
            Action::Down
        );
        // Too slow.
        assert_eq!(t.track(now + Duration::from_secs(2), down).action, Action::Down);
        // Moved.
        let other = MouseEvent::left(Action::Down, (4, 3));
        assert_eq!(
            t.track(now + Duration::from_millis(2100), other).action,
            Action::Down
        );
    }
}
