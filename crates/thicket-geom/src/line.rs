use super::{Point, Rect};

/// A run of cells on one row, starting at `tl`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Line {
    /// First cell of the run.
    pub tl: Point,
    /// Number of cells.
    pub w: u32,
}

impl Line {
    /// A run of `w` cells starting at (`x`, `y`).
    pub fn new(x: u32, y: u32, w: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
        }
    }

    /// The run as a one-row rectangle, for clipping.
    pub fn rect(&self) -> Rect {
        Rect {
            tl: self.tl,
            w: self.w,
            h: 1,
        }
    }
}
