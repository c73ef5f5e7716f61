use super::{Point, Rect};

/// A width and height with no position, such as a terminal or buffer size.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Columns.
    pub w: u32,
    /// Rows.
    pub h: u32,
}

impl Expanse {
    /// A `w` by `h` size.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Number of cells covered.
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// This size placed at the origin.
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point { x: 0, y: 0 },
            w: self.w,
            h: self.h,
        }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from((w, h): (u32, u32)) -> Self {
        Self { w, h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_at_origin() {
        let e = Expanse::new(3, 2);
        assert_eq!(e.area(), 6);
        assert_eq!(e.rect(), Rect::new(0, 0, 3, 2));
        assert_eq!(Expanse::from((3, 2)), e);
    }
}
