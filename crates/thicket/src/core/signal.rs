//! Typed signal subscriptions.
//!
//! A widget owns one [`Signal`] per kind of notification it emits. Handlers
//! are plain closures, so they are dropped, and therefore revoked, together
//! with the widget.
use std::fmt;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Identifies one connection to a signal.
    pub struct ConnectionId;
}

/// A boxed handler.
type Slot<T> = Box<dyn FnMut(&T)>;

/// A list of handlers called with a `&T` on every emission.
pub struct Signal<T> {
    /// Connected handlers.
    slots: SlotMap<ConnectionId, Slot<T>>,
    /// While blocked, emissions are dropped.
    blocked: bool,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            slots: SlotMap::with_key(),
            blocked: false,
        }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.slots.len())
            .field("blocked", &self.blocked)
            .finish()
    }
}

impl<T> Signal<T> {
    /// Construct a signal with no connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect a handler.
    pub fn connect<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&T) + 'static,
    {
        self.slots.insert(Box::new(slot))
    }

    /// Disconnect a handler. Returns false if it was not connected.
    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        self.slots.remove(id).is_some()
    }

    /// Disconnect every handler.
    pub fn disconnect_all(&mut self) {
        self.slots.clear();
    }

    /// Number of connected handlers.
    pub fn connection_count(&self) -> usize {
        self.slots.len()
    }

    /// Block or unblock emission.
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    /// Call every handler with `args`.
    pub fn emit(&mut self, args: &T) {
        if self.blocked {
            return;
        }
        for slot in self.slots.values_mut() {
            slot(args);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn connect_emit_disconnect() {
        let seen = Rc::new(RefCell::new(vec![]));
        let mut s: Signal<u32> = Signal::new();

        let a = {
            let seen = seen.clone();
            s.connect(move |v| seen.borrow_mut().push(*v))
        };
        {
            let seen = seen.clone();
            s.connect(move |v| seen.borrow_mut().push(v * 10));
        }
        assert_eq!(s.connection_count(), 2);

        s.emit(&1);
        let mut got = seen.borrow().clone();
        got.sort();
        assert_eq!(got, vec![1, 10]);

        assert!(s.disconnect(a));
        assert!(!s.disconnect(a));
        seen.borrow_mut().clear();
        s.emit(&2);
        assert_eq!(*seen.borrow(), vec![20]);

        s.set_blocked(true);
        s.emit(&3);
        assert_eq!(*seen.borrow(), vec![20]);

        s.disconnect_all();
        assert_eq!(s.connection_count(), 0);
    }

    #[test]
    fn dropping_signal_drops_handlers() {
        let token = Rc::new(());
        let mut s: Signal<()> = Signal::new();
        {
            let token = token.clone();
            s.connect(move |_| assert!(Rc::strong_count(&token) > 0));
        }
        assert_eq!(Rc::strong_count(&token), 2);
        drop(s);
        assert_eq!(Rc::strong_count(&token), 1);
    }
}
