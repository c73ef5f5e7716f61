//! Thicket: a text-mode widget toolkit.
//!
//! Thicket renders widgets into a cell buffer that a terminal backend can
//! flush. Its centrepiece is [`widgets::listview::ListView`], a scrollable,
//! multi-column list that can show a tree of items with expand and collapse.
//!
//! # Module Organization
//!
//! - [`geom`] - Geometry primitives (Rect, Point, Expanse, Line)
//! - [`event`] - Key, mouse, wheel, timer and focus events
//! - [`render`] - The clipped render surface widgets draw through
//! - [`widgets`] - Built-in widget implementations
//! - [`backend`] - A crossterm run loop for a root widget

#![warn(missing_docs)]

mod core;

pub mod backend;
pub mod geom;
pub mod widget;
pub mod widgets;

pub use core::termbuf::TermBuf;
#[cfg(any(test, feature = "testing"))]
pub use core::testing;
pub use core::{
    context::Context,
    error::{self, Error, Result},
    event, render, signal, style, text, timer,
};

pub use widget::{EventOutcome, Widget, WidgetState};
