use crate::{
    Result,
    geom::Point,
    render::RenderBackend,
    style::Style,
};

/// A render backend for testing, which logs render outcomes.
#[derive(Debug, Default)]
pub struct TestRender {
    /// Captured text fragments with their locations.
    pub text: Vec<(Point, String)>,
    /// Number of flushes.
    pub flushes: usize,
    /// Last style applied.
    style: Option<Style>,
}

impl TestRender {
    /// Return true if any captured fragment contains the substring.
    pub fn contains_text(&self, txt: &str) -> bool {
        self.text.iter().any(|(_, t)| t.contains(txt))
    }

    /// The most recently applied style.
    pub fn last_style(&self) -> Option<Style> {
        self.style
    }
}

impl RenderBackend for TestRender {
    fn style(&mut self, style: &Style) -> Result<()> {
        self.style = Some(*style);
        Ok(())
    }

    fn text(&mut self, loc: Point, txt: &str) -> Result<()> {
        self.text.push((loc, txt.to_owned()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TermBuf, geom::Line};

    #[test]
    fn diff_only_changed_rows() {
        let mut a = TermBuf::empty((4, 3));
        a.text(Style::default(), Line::new(0, 0, 4), "abcd");
        let mut b = a.clone();
        b.text(Style::default(), Line::new(0, 2, 4), "wxyz");

        let mut be = TestRender::default();
        b.diff(&a, &mut be).unwrap();
        assert_eq!(be.text, vec![(Point { x: 0, y: 2 }, "wxyz".to_string())]);
        assert_eq!(be.flushes, 1);

        let mut be = TestRender::default();
        b.render(&mut be).unwrap();
        assert_eq!(be.text.len(), 3);
        assert!(be.contains_text("abcd"));
        assert_eq!(be.last_style(), Some(Style::default()));
    }
}
