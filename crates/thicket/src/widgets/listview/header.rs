//! Column headers.
use crate::text;

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Flush left.
    #[default]
    Left,
    /// Centred.
    Center,
    /// Flush right.
    Right,
}

impl Alignment {
    /// Leading padding for text `len` columns wide in a cell `width` wide.
    pub fn offset(self, len: usize, width: usize) -> usize {
        match self {
            Self::Left => 0,
            Self::Center => width.saturating_sub(len) / 2,
            Self::Right => width.saturating_sub(len),
        }
    }
}

/// How a column is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Grow to fit the widest cell or label. Never shrinks.
    Auto,
    /// A fixed number of columns.
    Fixed(usize),
}

/// A column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Label drawn on the top border.
    pub(super) name: String,
    /// Current width in columns.
    pub(super) width: usize,
    /// The width was given explicitly.
    pub(super) fixed: bool,
    /// Cell alignment.
    pub(super) alignment: Alignment,
}

impl Header {
    /// Construct a header. Auto columns start as wide as their label.
    pub fn new(name: &str, width: Width) -> Self {
        let (width, fixed) = match width {
            Width::Auto => (text::width(name), false),
            Width::Fixed(w) => (w, true),
        };
        Self {
            name: name.to_string(),
            width,
            fixed,
            alignment: Alignment::Left,
        }
    }

    /// Label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Is the width fixed?
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Cell alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Grow an auto column to hold `len` columns.
    pub(super) fn fit(&mut self, len: usize) {
        if !self.fixed && len > self.width {
            self.width = len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_grows() {
        let mut h = Header::new("Name", Width::Auto);
        assert_eq!(h.width(), 4);
        h.fit(7);
        h.fit(2);
        assert_eq!(h.width(), 7);

        let mut h = Header::new("Size", Width::Fixed(3));
        h.fit(10);
        assert_eq!(h.width(), 3);
        assert!(h.is_fixed());
    }

    #[test]
    fn alignment_offset() {
        assert_eq!(Alignment::Left.offset(3, 9), 0);
        assert_eq!(Alignment::Center.offset(3, 9), 3);
        assert_eq!(Alignment::Right.offset(3, 9), 6);
        assert_eq!(Alignment::Right.offset(12, 9), 0);
    }
}
