//! A scrollbar that reports scroll gestures and shows a position.
//!
//! The bar never scrolls anything itself. Mouse and wheel input is
//! classified into a [`ScrollType`], which the owner applies to its own
//! state before writing the resulting position back with
//! [`ScrollBar::set_value`]. The only exception is [`ScrollType::Jump`],
//! where the bar computes the new value from the slider position first.
use crate::{
    Result,
    event::{
        Wheel,
        mouse::{Action, Button, MouseEvent},
    },
    geom::{Point, Rect},
    render::Render,
    signal::Signal,
};

/// Scrollbar orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
}

/// The kind of scroll gesture a scrollbar interaction produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollType {
    /// Nothing to do.
    NoScroll,
    /// One step towards the start.
    StepBackward,
    /// One step towards the end.
    StepForward,
    /// One page towards the start.
    PageBackward,
    /// One page towards the end.
    PageForward,
    /// Jump to the bar's current value.
    Jump,
    /// Wheel turned towards the start.
    WheelUp,
    /// Wheel turned towards the end.
    WheelDown,
}

/// Glyphs used to draw a bar.
#[derive(Debug, Clone, Copy)]
struct BarGlyphs {
    /// Arrow at the start.
    backward: char,
    /// Arrow at the end.
    forward: char,
    /// Trough.
    trough: char,
    /// Slider.
    slider: char,
}

/// Vertical bar glyphs.
const VERTICAL: BarGlyphs = BarGlyphs {
    backward: '▲',
    forward: '▼',
    trough: '░',
    slider: '█',
};

/// Horizontal bar glyphs.
const HORIZONTAL: BarGlyphs = BarGlyphs {
    backward: '◄',
    forward: '►',
    trough: '░',
    slider: '█',
};

/// A scrollbar. Its area is relative to the owning widget.
#[derive(Debug)]
pub struct ScrollBar {
    /// Orientation.
    orientation: Orientation,
    /// Area within the owner.
    area: Rect,
    /// Drawn and accepting input.
    visible: bool,
    /// Current value.
    value: usize,
    /// Smallest value.
    min: usize,
    /// Largest value.
    max: usize,
    /// Size of the scrolled document.
    document_size: usize,
    /// Size of one page of the document.
    page_size: usize,
    /// Slider grab offset while dragging.
    drag: Option<usize>,
    /// Emitted for every gesture other than `NoScroll`.
    pub change: Signal<ScrollType>,
}

impl ScrollBar {
    /// Construct a hidden bar with an empty range.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            area: Rect::default(),
            visible: false,
            value: 0,
            min: 0,
            max: 0,
            document_size: 0,
            page_size: 0,
            drag: None,
            change: Signal::new(),
        }
    }

    /// Orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current value.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Set the value, clamped to the range.
    pub fn set_value(&mut self, v: usize) {
        self.value = v.clamp(self.min, self.max);
    }

    /// Smallest value.
    pub fn minimum(&self) -> usize {
        self.min
    }

    /// Largest value.
    pub fn maximum(&self) -> usize {
        self.max
    }

    /// Set the largest value. It never drops below the minimum.
    pub fn set_maximum(&mut self, max: usize) {
        self.set_range(self.min, max);
    }

    /// Set both ends of the range.
    pub fn set_range(&mut self, min: usize, max: usize) {
        self.min = min;
        self.max = max.max(min);
        self.set_value(self.value);
    }

    /// Page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the document and page sizes, which determine the slider length.
    pub fn set_page_size(&mut self, document_size: usize, page_size: usize) {
        self.document_size = document_size;
        self.page_size = page_size;
    }

    /// Is the bar shown?
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the bar.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the bar.
    pub fn hide(&mut self) {
        self.visible = false;
        self.drag = None;
    }

    /// Area within the owner.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Place the bar within the owner.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Is a slider drag in progress?
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Length along the scroll axis, arrows included.
    fn length(&self) -> usize {
        match self.orientation {
            Orientation::Vertical => self.area.h as usize,
            Orientation::Horizontal => self.area.w as usize,
        }
    }

    /// Length of the trough between the arrows.
    fn trough(&self) -> usize {
        self.length().saturating_sub(2)
    }

    /// Slider offset within the trough and slider length.
    pub fn slider(&self) -> (usize, usize) {
        let bar = self.trough();
        if bar == 0 {
            return (0, 0);
        }
        let len = if self.document_size == 0 {
            bar
        } else {
            (bar * self.page_size / self.document_size).clamp(1, bar)
        };
        let range = self.max - self.min;
        let pos = if range == 0 {
            0
        } else {
            ((bar - len) * (self.value - self.min) + range / 2) / range
        };
        (pos, len)
    }

    /// The value whose slider sits at trough offset `pos`.
    fn value_at(&self, pos: usize) -> usize {
        let (_, len) = self.slider();
        let travel = self.trough().saturating_sub(len);
        if travel == 0 {
            return self.min;
        }
        let range = self.max - self.min;
        self.min + (pos.min(travel) * range + travel / 2) / travel
    }

    /// Offset along the scroll axis of an owner-local point.
    fn offset(&self, x: i32, y: i32) -> i32 {
        match self.orientation {
            Orientation::Vertical => y - self.area.tl.y as i32,
            Orientation::Horizontal => x - self.area.tl.x as i32,
        }
    }

    /// Does the bar cover an owner-local point?
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.visible && x >= 0 && y >= 0 && self.area.contains_point((x as u32, y as u32))
    }

    /// Classify a mouse event at owner-local coordinates `(x, y)`.
    pub fn on_mouse(&mut self, m: &MouseEvent, x: i32, y: i32) -> ScrollType {
        if !self.visible {
            return ScrollType::NoScroll;
        }
        let o = self.offset(x, y);
        let kind = match (m.action, m.button) {
            (Action::Up, _) => {
                self.drag = None;
                ScrollType::NoScroll
            }
            (Action::Drag, Button::Left) => match self.drag {
                Some(grab) => {
                    let t = (o - 1).max(0) as usize;
                    self.jump_to(self.value_at(t.saturating_sub(grab)))
                }
                None => ScrollType::NoScroll,
            },
            (Action::Down | Action::DoubleClick, Button::Left) if self.contains(x, y) => {
                self.press(o as usize)
            }
            (Action::Down, Button::Middle) if self.contains(x, y) => {
                let (_, len) = self.slider();
                let t = (o as usize).saturating_sub(1);
                self.jump_to(self.value_at(t.saturating_sub(len / 2)))
            }
            _ => ScrollType::NoScroll,
        };
        if kind != ScrollType::NoScroll {
            self.change.emit(&kind);
        }
        kind
    }

    /// Classify a left press at offset `o` along the bar.
    fn press(&mut self, o: usize) -> ScrollType {
        let len = self.length();
        if o == 0 {
            return ScrollType::StepBackward;
        }
        if o + 1 >= len {
            return ScrollType::StepForward;
        }
        let t = o - 1;
        let (pos, slen) = self.slider();
        if t < pos {
            ScrollType::PageBackward
        } else if t >= pos + slen {
            ScrollType::PageForward
        } else {
            self.drag = Some(t - pos);
            ScrollType::NoScroll
        }
    }

    /// Move to `v`, reporting a jump if the value changed.
    fn jump_to(&mut self, v: usize) -> ScrollType {
        let v = v.clamp(self.min, self.max);
        if v == self.value {
            return ScrollType::NoScroll;
        }
        self.value = v;
        ScrollType::Jump
    }

    /// Classify a wheel turn over the bar.
    pub fn on_wheel(&mut self, w: Wheel) -> ScrollType {
        if !self.visible {
            return ScrollType::NoScroll;
        }
        let kind = match w {
            Wheel::Up => ScrollType::WheelUp,
            Wheel::Down => ScrollType::WheelDown,
        };
        self.change.emit(&kind);
        kind
    }

    /// Draw the bar onto the owner's render surface.
    pub fn render(&self, r: &mut Render) -> Result<()> {
        if !self.visible || self.length() == 0 {
            return Ok(());
        }
        let g = match self.orientation {
            Orientation::Vertical => VERTICAL,
            Orientation::Horizontal => HORIZONTAL,
        };
        let len = self.length();
        let (pos, slen) = self.slider();
        for i in 0..len {
            let (style, ch) = if i == 0 {
                ("scrollbar/arrow", g.backward)
            } else if i + 1 == len {
                ("scrollbar/arrow", g.forward)
            } else if (pos..pos + slen).contains(&(i - 1)) {
                ("scrollbar/slider", g.slider)
            } else {
                ("scrollbar", g.trough)
            };
            r.put(style, self.cell(i), ch)?;
        }
        Ok(())
    }

    /// Owner-local position of cell `i` along the bar.
    fn cell(&self, i: usize) -> Point {
        match self.orientation {
            Orientation::Vertical => Point {
                x: self.area.tl.x,
                y: self.area.tl.y + i as u32,
            },
            Orientation::Horizontal => Point {
                x: self.area.tl.x + i as u32,
                y: self.area.tl.y,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TermBuf, buf, style::StyleMap, testing::buf::BufTest};

    fn vbar() -> ScrollBar {
        let mut b = ScrollBar::new(Orientation::Vertical);
        b.set_area(Rect::new(0, 0, 1, 10));
        b.set_range(0, 16);
        b.set_page_size(24, 8);
        b.show();
        b
    }

    fn left(action: Action, y: u32) -> MouseEvent {
        MouseEvent::left(action, (0, y))
    }

    #[test]
    fn slider_geometry() {
        let mut b = vbar();
        assert_eq!(b.slider(), (0, 2));
        b.set_value(16);
        assert_eq!(b.slider(), (6, 2));
        b.set_value(8);
        assert_eq!(b.slider(), (3, 2));
        b.set_value(100);
        assert_eq!(b.value(), 16);
    }

    #[test]
    fn classify_presses() {
        let mut b = vbar();
        b.set_value(8);
        assert_eq!(b.on_mouse(&left(Action::Down, 0), 0, 0), ScrollType::StepBackward);
        assert_eq!(b.on_mouse(&left(Action::Down, 9), 0, 9), ScrollType::StepForward);
        assert_eq!(b.on_mouse(&left(Action::Down, 1), 0, 1), ScrollType::PageBackward);
        assert_eq!(b.on_mouse(&left(Action::Down, 8), 0, 8), ScrollType::PageForward);
        // On the slider: starts a drag.
        assert_eq!(b.on_mouse(&left(Action::Down, 4), 0, 4), ScrollType::NoScroll);
        assert!(b.is_dragging());
        assert_eq!(b.on_mouse(&left(Action::Drag, 8), 0, 8), ScrollType::Jump);
        assert_eq!(b.value(), 16);
        assert_eq!(b.on_mouse(&left(Action::Up, 8), 0, 8), ScrollType::NoScroll);
        assert!(!b.is_dragging());
        assert_eq!(b.on_wheel(Wheel::Down), ScrollType::WheelDown);
    }

    #[test]
    fn hidden_bar_ignores_input() {
        let mut b = vbar();
        b.hide();
        assert_eq!(b.on_mouse(&left(Action::Down, 0), 0, 0), ScrollType::NoScroll);
        assert_eq!(b.on_wheel(Wheel::Up), ScrollType::NoScroll);
    }

    #[test]
    fn change_signal() {
        use std::{cell::RefCell, rc::Rc};
        let seen = Rc::new(RefCell::new(vec![]));
        let mut b = vbar();
        let s = seen.clone();
        b.change.connect(move |k| s.borrow_mut().push(*k));
        b.on_mouse(&left(Action::Down, 0), 0, 0);
        b.on_mouse(&left(Action::Up, 0), 0, 0);
        assert_eq!(*seen.borrow(), vec![ScrollType::StepBackward]);
    }

    #[test]
    fn render() {
        let smap = StyleMap::new();
        let mut tb = TermBuf::empty((1, 6));
        let mut b = ScrollBar::new(Orientation::Vertical);
        b.set_area(Rect::new(0, 0, 1, 6));
        b.set_range(0, 4);
        b.set_page_size(8, 4);
        b.set_value(4);
        b.show();
        let mut r = Render::new(&mut tb, &smap, Rect::new(0, 0, 1, 6));
        b.render(&mut r).unwrap();
        BufTest::new(&tb).assert_matches(buf!("▲" "░" "░" "█" "█" "▼"));
    }
}
