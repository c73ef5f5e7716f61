use super::{Expanse, Point};

/// A screen region given by its top-left cell and its size.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// A `w` by `h` rectangle with its top-left cell at (`x`, `y`).
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// The size of this rectangle.
    pub fn expanse(&self) -> Expanse {
        Expanse::new(self.w, self.h)
    }

    /// Does this rectangle contain the point?
    pub fn contains_point(&self, p: impl Into<Point>) -> bool {
        let p = p.into();
        p.x >= self.tl.x
            && p.x < self.tl.x.saturating_add(self.w)
            && p.y >= self.tl.y
            && p.y < self.tl.y.saturating_add(self.h)
    }

    /// The region both rectangles cover, or `None` when they are disjoint.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x1 = self.tl.x.max(other.tl.x);
        let y1 = self.tl.y.max(other.tl.y);
        let x2 = (self.tl.x + self.w).min(other.tl.x + other.w);
        let y2 = (self.tl.y + self.h).min(other.tl.y + other.h);
        if x2 > x1 && y2 > y1 {
            Some(Self::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(
            a.intersect(&Rect::new(5, 5, 10, 10)),
            Some(Rect::new(5, 5, 5, 5))
        );
        assert_eq!(a.intersect(&Rect::new(10, 0, 2, 2)), None);
        assert_eq!(a.intersect(&Rect::new(2, 2, 1, 1)), Some(Rect::new(2, 2, 1, 1)));
    }

    #[test]
    fn contains() {
        let a = Rect::new(2, 2, 3, 3);
        assert!(a.contains_point((2, 2)));
        assert!(a.contains_point((4, 4)));
        assert!(!a.contains_point((5, 4)));
    }
}
