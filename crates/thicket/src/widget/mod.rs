//! The widget trait and the state every widget carries.
use crate::{
    Context, Result,
    event::Event,
    geom::{Expanse, Point, Rect},
    render::Render,
};

/// Was an event handled?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was accepted and the widget needs a redraw.
    Handle,
    /// The event was not for us; the caller may route it elsewhere.
    Ignore,
}

/// The trait implemented by all widgets.
pub trait Widget {
    /// Draw the widget. The render surface covers exactly the widget's area.
    fn render(&mut self, r: &mut Render) -> Result<()>;

    /// Handle an event.
    fn on_event(&mut self, _event: &Event, _ctx: &mut dyn Context) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// Can the widget take keyboard focus?
    fn accept_focus(&self) -> bool {
        false
    }

    /// A short name for logs.
    fn name(&self) -> &'static str;
}

/// Geometry and flags shared by all widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    /// Screen area.
    area: Rect,
    /// Shown or hidden.
    visible: bool,
    /// Accepts input.
    enabled: bool,
    /// Holds keyboard focus.
    focused: bool,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            area: Rect::default(),
            visible: true,
            enabled: true,
            focused: false,
        }
    }
}

impl WidgetState {
    /// Screen area.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Width and height.
    pub fn size(&self) -> Expanse {
        self.area.expanse()
    }

    /// Move and resize.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Is the widget shown?
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the widget.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Does the widget accept input?
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Does the widget hold focus?
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focus flag.
    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Translate a screen point into signed local coordinates. Points left
    /// of or above the widget come out negative.
    pub fn to_local(&self, p: Point) -> (i32, i32) {
        (
            p.x as i32 - self.area.tl.x as i32,
            p.y as i32 - self.area.tl.y as i32,
        )
    }
}
