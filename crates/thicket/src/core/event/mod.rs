//! Input events delivered to widgets.
use crossterm::event as cevent;

use crate::{geom::Expanse, timer::TimerId};

pub mod key;
pub mod mouse;

pub use key::{Key, KeyCode};
pub use mouse::{MouseEvent, Wheel, WheelEvent};

/// An event delivered to a widget.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Event {
    /// A key press.
    Key(Key),
    /// A mouse button or movement event.
    Mouse(MouseEvent),
    /// A wheel turn.
    Wheel(WheelEvent),
    /// A timer owned by the receiving widget fired.
    Timer(TimerId),
    /// The widget gained focus.
    FocusIn,
    /// The widget lost focus.
    FocusOut,
    /// The terminal was resized.
    Resize(Expanse),
}

/// Translate a crossterm mouse button.
fn translate_button(b: cevent::MouseButton) -> mouse::Button {
    match b {
        cevent::MouseButton::Left => mouse::Button::Left,
        cevent::MouseButton::Right => mouse::Button::Right,
        cevent::MouseButton::Middle => mouse::Button::Middle,
    }
}

impl TryFrom<cevent::Event> for Event {
    type Error = ();

    /// Events with no counterpart here (paste, horizontal wheel, key
    /// releases, exotic keys) are rejected.
    fn try_from(e: cevent::Event) -> Result<Self, Self::Error> {
        Ok(match e {
            cevent::Event::Key(k) => {
                if k.kind == cevent::KeyEventKind::Release {
                    return Err(());
                }
                Self::Key(k.try_into()?)
            }
            cevent::Event::Mouse(m) => {
                let location = (u32::from(m.column), u32::from(m.row)).into();
                let (action, button) = match m.kind {
                    cevent::MouseEventKind::Down(b) => (mouse::Action::Down, translate_button(b)),
                    cevent::MouseEventKind::Up(b) => (mouse::Action::Up, translate_button(b)),
                    cevent::MouseEventKind::Drag(b) => (mouse::Action::Drag, translate_button(b)),
                    cevent::MouseEventKind::Moved => (mouse::Action::Moved, mouse::Button::None),
                    cevent::MouseEventKind::ScrollUp => {
                        return Ok(Self::Wheel(WheelEvent {
                            direction: Wheel::Up,
                            location,
                        }));
                    }
                    cevent::MouseEventKind::ScrollDown => {
                        return Ok(Self::Wheel(WheelEvent {
                            direction: Wheel::Down,
                            location,
                        }));
                    }
                    cevent::MouseEventKind::ScrollLeft | cevent::MouseEventKind::ScrollRight => {
                        return Err(());
                    }
                };
                Self::Mouse(MouseEvent {
                    action,
                    button,
                    location,
                    modifiers: m.modifiers.into(),
                })
            }
            cevent::Event::Resize(w, h) => Self::Resize(Expanse::new(w.into(), h.into())),
            cevent::Event::FocusGained => Self::FocusIn,
            cevent::Event::FocusLost => Self::FocusOut,
            cevent::Event::Paste(_) => return Err(()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_mouse() {
        let e = cevent::Event::Mouse(cevent::MouseEvent {
            kind: cevent::MouseEventKind::Down(cevent::MouseButton::Left),
            column: 4,
            row: 2,
            modifiers: cevent::KeyModifiers::NONE,
        });
        assert_eq!(
            Event::try_from(e),
            Ok(Event::Mouse(MouseEvent::left(mouse::Action::Down, (4, 2))))
        );

        let e = cevent::Event::Mouse(cevent::MouseEvent {
            kind: cevent::MouseEventKind::ScrollDown,
            column: 1,
            row: 1,
            modifiers: cevent::KeyModifiers::NONE,
        });
        assert_eq!(
            Event::try_from(e),
            Ok(Event::Wheel(WheelEvent {
                direction: Wheel::Down,
                location: (1, 1).into()
            }))
        );
    }

    #[test]
    fn translate_other() {
        assert_eq!(
            Event::try_from(cevent::Event::Resize(80, 24)),
            Ok(Event::Resize(Expanse::new(80, 24)))
        );
        assert!(Event::try_from(cevent::Event::Paste("x".into())).is_err());
    }
}
