//! The default widget theme.
use super::{Attr, AttrSet, Color, StyleMap};

/// Build the default style map for the built-in widgets.
pub fn default_theme() -> StyleMap {
    let mut c = StyleMap::new();
    c.add("/", Some(Color::Black), Some(Color::Grey), Some(AttrSet::default()));

    c.add("/list", Some(Color::Black), Some(Color::White), None);
    c.add_fg("/list/border", Color::DarkGrey);
    c.add_fg("/list/label", Color::DarkBlue);
    c.add_attr("/list/label", Attr::Bold);
    c.add_fg("/list/label/inactive", Color::DarkGrey);
    c.add_fg("/list/ellipsis", Color::DarkGrey);
    c.add("/list/current", Some(Color::Black), Some(Color::Cyan), None);
    c.add("/list/current/focus", Some(Color::White), Some(Color::Blue), None);
    c.add_attr("/list/current/focus", Attr::Bold);

    c.add("/scrollbar", Some(Color::DarkGrey), Some(Color::Grey), None);
    c.add_fg("/scrollbar/slider", Color::DarkBlue);
    c.add_fg("/scrollbar/arrow", Color::Black);
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks() {
        let t = default_theme();
        let s = t.get("list/current/focus");
        assert_eq!((s.fg, s.bg), (Color::White, Color::Blue));
        assert!(s.attrs.bold);
        // The label background comes from the list.
        assert_eq!(t.get("list/label").bg, Color::White);
        assert_eq!(t.get("list/label/inactive").fg, Color::DarkGrey);
        assert_eq!(t.get("scrollbar/slider").bg, Color::Grey);
    }
}
