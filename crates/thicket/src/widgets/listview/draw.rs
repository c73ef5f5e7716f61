//! Line builders and border drawing for the list view.
use pad::PadStr;

use super::header::{Alignment, Header};
use crate::{Result, geom::Rect, render::Render, text};

/// Box drawing glyphs for the border.
pub struct FrameGlyphs {
    /// Top-left corner.
    pub topleft: char,
    /// Top-right corner.
    pub topright: char,
    /// Bottom-left corner.
    pub bottomleft: char,
    /// Bottom-right corner.
    pub bottomright: char,
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge.
    pub vertical: char,
}

/// Single line thin Unicode box drawing frame set.
pub const SINGLE: FrameGlyphs = FrameGlyphs {
    topleft: '┌',
    topright: '┐',
    bottomleft: '└',
    bottomright: '┘',
    horizontal: '─',
    vertical: '│',
};

/// A run of text in a named style.
pub(super) type Run = (&'static str, String);

/// Draw a single line border around the whole render area.
pub(super) fn border(r: &mut Render, style: &str, g: &FrameGlyphs) -> Result<()> {
    let sz = r.size();
    if sz.w < 2 || sz.h < 2 {
        return Ok(());
    }
    let (right, bottom) = (sz.w - 1, sz.h - 1);
    r.put(style, (0, 0), g.topleft)?;
    r.put(style, (right, 0), g.topright)?;
    r.put(style, (0, bottom), g.bottomleft)?;
    r.put(style, (right, bottom), g.bottomright)?;
    r.fill(style, Rect::new(1, 0, sz.w - 2, 1), g.horizontal)?;
    r.fill(style, Rect::new(1, bottom, sz.w - 2, 1), g.horizontal)?;
    r.fill(style, Rect::new(0, 1, 1, sz.h - 2), g.vertical)?;
    r.fill(style, Rect::new(right, 1, 1, sz.h - 2), g.vertical)?;
    Ok(())
}

/// Build the label line drawn over the top border. Each column gets a
/// leading space and its label, then a horizontal rule up to the column's
/// width. Labels that do not fit are cut and marked with the ellipsis.
pub(super) fn label_runs(headers: &[Header], label_style: &'static str, ellipsis: &str) -> Vec<Run> {
    let ell = text::width(ellipsis);
    let mut runs = Vec::new();
    for (i, h) in headers.iter().enumerate() {
        let column_width = 1 + h.width;
        if h.name.is_empty() {
            runs.push(("list/border", SINGLE.horizontal.to_string().repeat(column_width)));
            continue;
        }
        let txt = format!(" {}", h.name);
        let len = text::width(&txt);
        if len <= column_width {
            let mut label = txt;
            if len < column_width {
                label.push(' ');
            }
            runs.push((label_style, label));
            if len + 1 < column_width {
                let rule = SINGLE.horizontal.to_string().repeat(column_width - 1 - len);
                runs.push(("list/border", rule));
            }
        } else {
            let cut = text::head(&h.name, h.width.saturating_sub(ell));
            runs.push((label_style, format!(" {cut}")));
            let mut mark = ellipsis.to_string();
            if i + 1 == headers.len() {
                mark.push(' ');
            }
            runs.push(("list/ellipsis", mark));
        }
    }
    runs
}

/// Cut a run list to the columns `[start, start + width)`.
pub(super) fn slice_runs(runs: &[Run], start: usize, width: usize) -> Vec<Run> {
    let end = start + width;
    let mut col = 0;
    let mut out = Vec::new();
    for (style, txt) in runs {
        let w = text::width(txt);
        let (from, to) = (col.max(start), (col + w).min(end));
        if from < to {
            let (cut, _) = text::slice_by_columns(txt, from - col, to - from);
            out.push((*style, cut.to_string()));
        }
        col += w;
    }
    out
}

/// Build the full text of one row: `lead` (the indent and expander in tree
/// mode, a single space otherwise), then each column padded to its header
/// width plus a trailing space. The first column gives up `trim` columns to
/// the lead. Text that does not fit is cut and marked with the ellipsis,
/// keeping the end of right-aligned text and the start of anything else.
pub(super) fn row_text(
    headers: &[Header],
    columns: &[String],
    lead: String,
    trim: usize,
    ellipsis: &str,
) -> String {
    let ell = text::width(ellipsis);
    let mut line = lead;
    for (i, (txt, h)) in columns.iter().zip(headers).enumerate() {
        let len = text::width(txt);
        let width = if i == 0 {
            h.width.saturating_sub(trim)
        } else {
            h.width
        };
        if len <= width {
            let offset = h.alignment.offset(len, width);
            let cell = format!("{}{txt}", " ".repeat(offset));
            line.push_str(&cell.pad_to_width(width + 1));
        } else if h.alignment == Alignment::Right {
            line.push_str(ellipsis);
            line.push_str(text::tail(txt, width.saturating_sub(ell)));
            line.push(' ');
        } else {
            line.push_str(text::head(txt, width.saturating_sub(ell)));
            line.push_str(ellipsis);
            line.push(' ');
        }
    }
    line
}

/// The part of a row visible through a window `width` columns wide
/// starting at `x_offset`, padded to fill the window.
pub(super) fn visible_slice(line: &str, x_offset: usize, width: usize) -> String {
    let (cut, _) = text::slice_by_columns(line, x_offset, width);
    cut.pad_to_width(width)
}

#[cfg(test)]
mod tests {
    use super::{super::header::Width, *};
    use crate::{TermBuf, buf, style::StyleMap, testing::buf::BufTest};

    fn headers() -> Vec<Header> {
        let mut a = Header::new("Name", Width::Fixed(6));
        a.alignment = Alignment::Left;
        let mut b = Header::new("Size", Width::Fixed(4));
        b.alignment = Alignment::Right;
        vec![a, b]
    }

    fn joined(runs: &[Run]) -> String {
        runs.iter().map(|(_, s)| s.as_str()).collect()
    }

    #[test]
    fn labels() {
        let runs = label_runs(&headers(), "list/label", "..");
        assert_eq!(joined(&runs), " Name ─ Size");
        assert_eq!(runs[0], ("list/label", " Name ".to_string()));

        let narrow = vec![Header::new("Description", Width::Fixed(6))];
        let runs = label_runs(&narrow, "list/label", "..");
        assert_eq!(joined(&runs), " Desc.. ");
        assert_eq!(runs[1].0, "list/ellipsis");
    }

    #[test]
    fn slicing_runs() {
        let runs = label_runs(&headers(), "list/label", "..");
        assert_eq!(joined(&slice_runs(&runs, 3, 6)), "me ─ S");
        assert_eq!(joined(&slice_runs(&runs, 0, 100)), " Name ─ Size");
        assert!(slice_runs(&runs, 40, 5).is_empty());
    }

    #[test]
    fn rows() {
        let h = headers();
        let cols = vec!["abc".to_string(), "12".to_string()];
        assert_eq!(row_text(&h, &cols, " ".into(), 0, ".."), " abc      12 ");

        let cols = vec!["abcdefghij".to_string(), "123456".to_string()];
        assert_eq!(row_text(&h, &cols, " ".into(), 0, ".."), " abcd.. ..56 ");

        let cols = vec!["ab".to_string()];
        assert_eq!(row_text(&h, &cols, "  ► ".into(), 3, ".."), "  ► ab  ");
        assert_eq!(visible_slice(" abc      12 ", 2, 6), "bc    ");
        assert_eq!(visible_slice("ab", 5, 3), "   ");
    }

    #[test]
    fn centred() {
        let mut h = Header::new("C", Width::Fixed(7));
        h.alignment = Alignment::Center;
        let cols = vec!["abc".to_string()];
        assert_eq!(row_text(&[h], &cols, " ".into(), 0, ".."), "   abc   ");
    }

    /// Nested rows align and cut within what is left of the first column.
    #[test]
    fn trimmed_first_column() {
        let mut h = Header::new("C", Width::Fixed(6));
        h.alignment = Alignment::Center;
        let lead = "  ► ";
        let ab = vec!["ab".to_string()];
        assert_eq!(row_text(&[h.clone()], &ab, lead.into(), 3, ".."), "  ► ab  ");
        let long = vec!["abcdefgh".to_string()];
        let row = row_text(&[h.clone()], &long, lead.into(), 3, "..");
        assert_eq!(row, "  ► a.. ");
        assert_eq!(text::width(&row), 4 + h.width - 3 + 1);

        h.alignment = Alignment::Right;
        assert_eq!(row_text(&[h], &ab, lead.into(), 3, ".."), "  ►  ab ");
    }

    #[test]
    fn draws_border() {
        let sm = StyleMap::new();
        let mut tb = TermBuf::empty((5, 3));
        let mut r = Render::new(&mut tb, &sm, Rect::new(0, 0, 5, 3));
        border(&mut r, "list/border", &SINGLE).unwrap();
        BufTest::new(&tb).assert_matches(buf!["┌───┐" "│XXX│" "└───┘"]);
    }
}
