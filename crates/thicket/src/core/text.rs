//! Display-width aware text helpers. Columns here are terminal cells, so a
//! wide glyph counts as two.
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Slice a string by display columns, returning the substring and its width.
/// A wide glyph straddling `start` is skipped entirely.
pub fn slice_by_columns(s: &str, start: usize, max: usize) -> (&str, usize) {
    if max == 0 || s.is_empty() {
        return ("", 0);
    }

    let mut col = 0usize;
    let mut out_cols = 0usize;
    let mut started = false;
    let mut start_byte = 0usize;
    let mut end_byte = 0usize;

    for (idx, grapheme) in s.grapheme_indices(true) {
        let g_width = grapheme_width(grapheme);

        if !started {
            if col < start {
                col += g_width;
                continue;
            }
            started = true;
            start_byte = idx;
            end_byte = idx;
        }

        if out_cols + g_width > max {
            break;
        }
        out_cols += g_width;
        end_byte = idx + grapheme.len();
        if out_cols >= max {
            break;
        }
    }

    if !started {
        return ("", 0);
    }

    (&s[start_byte..end_byte], out_cols)
}

/// Return the display width of a grapheme cluster, clamped to terminal cell widths.
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    UnicodeWidthStr::width(grapheme).clamp(1, 2)
}

/// Return the display width of a string in terminal cells.
pub fn width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// The leading `n` columns of a string.
pub fn head(s: &str, n: usize) -> &str {
    slice_by_columns(s, 0, n).0
}

/// The trailing `n` columns of a string.
pub fn tail(s: &str, n: usize) -> &str {
    let w = width(s);
    if n >= w {
        return s;
    }
    slice_by_columns(s, w - n, n).0
}

/// Replace control characters with printable stand-ins: C0 controls and DEL
/// become their Unicode control pictures, C1 controls become spaces.
pub fn replace_control_codes(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{0}'..='\u{1f}' => char::from_u32(0x2400 + c as u32).unwrap_or(' '),
            '\u{7f}' => '\u{2421}',
            '\u{80}'..='\u{9f}' => ' ',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_by_columns_handles_wide_chars() {
        let s = "a界b";
        let (out, w) = slice_by_columns(s, 0, 3);
        assert_eq!(out, "a界");
        assert_eq!(w, width(out));

        let (out, w) = slice_by_columns(s, 1, 2);
        assert_eq!(out, "界");
        assert_eq!(w, 2);

        let (out, w) = slice_by_columns(s, 3, 2);
        assert_eq!(out, "b");
        assert_eq!(w, 1);

        // A straddled wide glyph is dropped.
        assert_eq!(slice_by_columns(s, 2, 2).0, "b");
        assert_eq!(slice_by_columns(s, 0, 2).0, "a");
    }

    #[test]
    fn head_and_tail() {
        assert_eq!(head("abcdef", 3), "abc");
        assert_eq!(head("ab", 3), "ab");
        assert_eq!(tail("abcdef", 2), "ef");
        assert_eq!(tail("ab", 5), "ab");
        assert_eq!(tail("abc", 0), "");
    }

    #[test]
    fn control_codes() {
        assert_eq!(replace_control_codes("a\tb"), "a\u{2409}b");
        assert_eq!(replace_control_codes("\u{7f}"), "\u{2421}");
        assert_eq!(replace_control_codes("x\u{85}y"), "x y");
        assert_eq!(replace_control_codes("plain"), "plain");
    }
}
