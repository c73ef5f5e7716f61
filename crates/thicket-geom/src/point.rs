use std::ops::Add;

/// A cell on the terminal grid.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Point {
    /// Column, counting from the left edge.
    pub x: u32,
    /// Row, counting from the top edge.
    pub y: u32,
}

impl Add for Point {
    type Output = Self;

    /// Offset one point by another, e.g. a local position by a widget origin.
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl From<(u32, u32)> for Point {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}
