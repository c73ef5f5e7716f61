//! Buffer assertions for render tests.
use crate::{TermBuf, geom::Point};

/// Build the expected rows for [`BufTest::assert_matches`].
#[macro_export]
macro_rules! buf {
    ($($line:literal)*) => {
        &[$($line),*]
    };
}

/// Compares a [`TermBuf`] against expected rows. Cells nothing has written
/// to read as `X`, so partial renders can be checked exactly.
pub struct BufTest<'a> {
    /// Buffer under test.
    buf: &'a TermBuf,
    /// Stand-in for unwritten cells.
    null_char: char,
}

impl<'a> BufTest<'a> {
    /// Wrap a buffer.
    pub fn new(buf: &'a TermBuf) -> Self {
        Self {
            buf,
            null_char: 'X',
        }
    }

    /// Rows of the buffer with unwritten cells marked.
    pub fn lines(&self) -> Vec<String> {
        let size = self.buf.size();
        (0..size.h)
            .map(|y| {
                (0..size.w)
                    .filter_map(|x| self.buf.get(Point { x, y }))
                    .map(|c| if c.ch == '\0' { self.null_char } else { c.ch })
                    .collect()
            })
            .collect()
    }

    /// Do the rows match, ignoring trailing whitespace?
    pub fn matches(&self, expected: &[&str]) -> bool {
        let actual = self.lines();
        expected.len() == actual.len()
            && expected
                .iter()
                .zip(&actual)
                .all(|(e, a)| e.trim_end() == a.trim_end())
    }

    /// Panic with both renderings side by side unless the rows match.
    pub fn assert_matches(&self, expected: &[&str]) {
        if self.matches(expected) {
            return;
        }
        let actual = self.lines();
        let width = expected
            .iter()
            .copied()
            .chain(actual.iter().map(String::as_str))
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        println!("\n{:width$}   actual", "expected");
        for i in 0..expected.len().max(actual.len()) {
            let e = expected.get(i).copied().unwrap_or("");
            let a = actual.get(i).map(String::as_str).unwrap_or("");
            let mark = if e.trim_end() == a.trim_end() { ' ' } else { '!' };
            println!("{e:width$} {mark} {a}");
        }
        panic!("buffer did not match");
    }
}
