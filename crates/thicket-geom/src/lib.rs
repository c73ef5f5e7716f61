//! Cell-grid geometry for thicket: points, sizes, rectangles and
//! single-row spans. All coordinates are unsigned cell counts with the
//! origin at the top-left of the screen.

/// Sizes without a location.
mod expanse;
/// Single-row spans.
mod line;
/// Grid locations.
mod point;
/// Rectangles and clipping.
mod rect;

pub use expanse::Expanse;
pub use line::Line;
pub use point::Point;
pub use rect::Rect;
