use unicode_segmentation::UnicodeSegmentation;

use crate::{
    error::Result,
    geom::{Expanse, Line, Point, Rect},
    render::RenderBackend,
    style::Style,
    text,
};

/// NULL character constant.
const NULL: char = '\0';

/// A terminal cell with glyph and style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Base glyph character.
    pub ch: char,
    /// Additional grapheme characters stored with the base glyph.
    pub suffix: String,
    /// Style applied to the cell.
    pub style: Style,
    /// True when this cell continues a wide glyph from the previous column.
    pub continuation: bool,
}

impl Cell {
    /// Construct a cell containing a single glyph.
    fn new(ch: char, style: Style) -> Self {
        Self {
            ch,
            suffix: String::new(),
            style,
            continuation: false,
        }
    }

    /// Return true when nothing was ever written to the cell.
    pub fn is_empty(&self) -> bool {
        self.ch == NULL && self.suffix.is_empty() && !self.continuation
    }

    /// Append this cell's renderable text to the output buffer.
    fn push_text(&self, out: &mut String) {
        if self.continuation {
            return;
        }
        if self.is_empty() {
            out.push(' ');
            return;
        }
        out.push(self.ch);
        out.push_str(&self.suffix);
    }
}

/// A 2D terminal buffer of styled cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermBuf {
    /// Buffer size in cells.
    size: Expanse,
    /// Backing cell storage, row-major.
    cells: Vec<Cell>,
}

impl TermBuf {
    /// Create a TermBuf filled with NULL characters in the default style.
    pub fn empty(size: impl Into<Expanse>) -> Self {
        let size = size.into();
        Self {
            size,
            cells: vec![Cell::new(NULL, Style::default()); size.area() as usize],
        }
    }

    /// Return the buffer size.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// Return the buffer bounds as a rectangle.
    pub fn rect(&self) -> Rect {
        self.size.rect()
    }

    /// Convert a point into a cell index.
    fn idx(&self, p: Point) -> Option<usize> {
        if self.rect().contains_point(p) {
            Some(p.y as usize * self.size.w as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Get a cell by position.
    pub fn get(&self, p: impl Into<Point>) -> Option<&Cell> {
        self.idx(p.into()).map(|i| &self.cells[i])
    }

    /// Write a cell at a specific point. Writes outside the buffer are dropped.
    pub fn put(&mut self, p: Point, ch: char, style: Style) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = Cell::new(ch, style);
        }
    }

    /// Write a grapheme cluster at a specific point.
    fn put_grapheme(&mut self, p: Point, grapheme: &str, style: Style) {
        if let Some(i) = self.idx(p) {
            let mut chars = grapheme.chars();
            let ch = chars.next().unwrap_or(' ');
            self.cells[i] = Cell {
                ch,
                suffix: chars.collect(),
                style,
                continuation: false,
            };
        }
    }

    /// Fill a rectangle with a glyph and style.
    pub fn fill(&mut self, style: Style, r: Rect, ch: char) {
        if let Some(isec) = self.rect().intersect(&r) {
            for y in isec.tl.y..isec.tl.y + isec.h {
                for x in isec.tl.x..isec.tl.x + isec.w {
                    self.put(Point { x, y }, ch, style);
                }
            }
        }
    }

    /// Draw text clipped to the given line, padding the rest of the line
    /// with spaces.
    pub fn text(&mut self, style: Style, l: Line, txt: &str) {
        let Some(isec) = self.rect().intersect(&l.rect()) else {
            return;
        };
        let offset = isec.tl.x.saturating_sub(l.tl.x) as usize;
        let max = isec.w as usize;
        let (out, _) = text::slice_by_columns(txt, offset, max);
        let mut x = isec.tl.x;

        for grapheme in out.graphemes(true) {
            let width = text::grapheme_width(grapheme);
            self.put_grapheme(Point { x, y: isec.tl.y }, grapheme, style);
            for i in 1..width {
                if let Some(idx) = self.idx(Point {
                    x: x + i as u32,
                    y: isec.tl.y,
                }) {
                    self.cells[idx] = Cell {
                        ch: NULL,
                        suffix: String::new(),
                        style,
                        continuation: true,
                    };
                }
            }
            x += width as u32;
        }

        let end = isec.tl.x + isec.w;
        while x < end {
            self.put(Point { x, y: isec.tl.y }, ' ', style);
            x += 1;
        }
    }

    /// The text of each row. Unwritten cells read as spaces.
    pub fn lines(&self) -> Vec<String> {
        let w = self.size.w as usize;
        if w == 0 {
            return vec![String::new(); self.size.h as usize];
        }
        self.cells
            .chunks(w)
            .map(|row| {
                let mut s = String::new();
                for c in row {
                    c.push_text(&mut s);
                }
                s
            })
            .collect()
    }

    /// Render every row to a backend.
    pub fn render<R: RenderBackend>(&self, backend: &mut R) -> Result<()> {
        for y in 0..self.size.h {
            self.render_row(backend, y)?;
        }
        backend.flush()
    }

    /// Render only the rows that differ from `prev`. A size change redraws
    /// everything.
    pub fn diff<R: RenderBackend>(&self, prev: &Self, backend: &mut R) -> Result<()> {
        if self.size != prev.size {
            return self.render(backend);
        }
        let w = self.size.w as usize;
        for y in 0..self.size.h {
            let start = y as usize * w;
            if self.cells[start..start + w] != prev.cells[start..start + w] {
                self.render_row(backend, y)?;
            }
        }
        backend.flush()
    }

    /// Emit one row as runs of identically styled text.
    fn render_row<R: RenderBackend>(&self, backend: &mut R, y: u32) -> Result<()> {
        let w = self.size.w as usize;
        let row = &self.cells[y as usize * w..(y as usize + 1) * w];
        let mut x = 0usize;
        while x < w {
            let style = row[x].style;
            let start = x;
            let mut txt = String::new();
            while x < w && row[x].style == style {
                row[x].push_text(&mut txt);
                x += 1;
            }
            backend.style(&style)?;
            backend.text(
                Point {
                    x: start as u32,
                    y,
                },
                &txt,
            )?;
        }
        Ok(())
    }
}
