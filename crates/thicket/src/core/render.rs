use super::termbuf::TermBuf;
use crate::{
    error::Result,
    geom::{Expanse, Line, Point, Rect},
    style::{Style, StyleMap},
};

/// The trait implemented by renderers that put a [`TermBuf`] on a screen.
pub trait RenderBackend {
    /// Apply a style to the following text output.
    fn style(&mut self, style: &Style) -> Result<()>;
    /// Output text at a screen location.
    fn text(&mut self, loc: Point, txt: &str) -> Result<()>;
    /// Flush output to the terminal.
    fn flush(&mut self) -> Result<()>;
}

/// A render surface for one widget. All coordinates are local to the
/// widget's area, and writes outside the area are clipped.
pub struct Render<'a> {
    /// The screen buffer.
    buf: &'a mut TermBuf,
    /// Style names are resolved through this map.
    stylemap: &'a StyleMap,
    /// Screen area of the widget.
    area: Rect,
    /// Hardware cursor requested by the widget, in screen coordinates.
    cursor: Option<Point>,
}

impl<'a> Render<'a> {
    /// Construct a renderer for a widget occupying `area` of `buf`.
    pub fn new(buf: &'a mut TermBuf, stylemap: &'a StyleMap, area: Rect) -> Self {
        Self {
            buf,
            stylemap,
            area,
            cursor: None,
        }
    }

    /// The size of the drawable area.
    pub fn size(&self) -> Expanse {
        self.area.expanse()
    }

    /// Resolve a style name.
    pub fn style(&self, name: &str) -> Style {
        self.stylemap.get(name)
    }

    /// Translate a local rectangle to screen space, clipped to the area.
    fn to_screen(&self, r: Rect) -> Option<Rect> {
        let local = self.area.expanse().rect().intersect(&r)?;
        Some(Rect::new(
            local.tl.x + self.area.tl.x,
            local.tl.y + self.area.tl.y,
            local.w,
            local.h,
        ))
    }

    /// Fill a rectangle with a specified character.
    pub fn fill(&mut self, style: &str, r: Rect, c: char) -> Result<()> {
        if let Some(r) = self.to_screen(r) {
            let style = self.style(style);
            self.buf.fill(style, r, c);
        }
        Ok(())
    }

    /// Put a single character.
    pub fn put(&mut self, style: &str, p: impl Into<Point>, c: char) -> Result<()> {
        let p = p.into();
        self.fill(style, Rect::new(p.x, p.y, 1, 1), c)
    }

    /// Print text in the specified line. If the text is wider than the
    /// line, it will be truncated; if it is shorter, it will be padded.
    pub fn text(&mut self, style: &str, l: Line, txt: &str) -> Result<()> {
        let Some(clip) = self.to_screen(l.rect()) else {
            return Ok(());
        };
        let style = self.style(style);
        let skip = clip.tl.x - self.area.tl.x - l.tl.x;
        let (visible, _) = crate::text::slice_by_columns(txt, skip as usize, clip.w as usize);
        self.buf
            .text(style, Line::new(clip.tl.x, clip.tl.y, clip.w), visible);
        Ok(())
    }

    /// Print consecutive runs of differently styled text starting at `p`.
    /// Nothing is written past the end of the area.
    pub fn runs(&mut self, p: impl Into<Point>, runs: &[(&str, String)]) -> Result<()> {
        let mut p = p.into();
        for (style, txt) in runs {
            let w = crate::text::width(txt) as u32;
            if w == 0 {
                continue;
            }
            self.text(style, Line::new(p.x, p.y, w), txt)?;
            p.x += w;
        }
        Ok(())
    }

    /// Request the hardware cursor at a local position.
    pub fn set_cursor(&mut self, p: impl Into<Point>) {
        let p = p.into();
        if self.area.expanse().rect().contains_point(p) {
            self.cursor = Some(self.area.tl + p);
        }
    }

    /// The requested cursor position, in screen coordinates.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }
}
