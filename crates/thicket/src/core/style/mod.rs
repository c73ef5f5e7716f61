//! Style resolution by path.
//!
//! Widgets ask for styles by slash-separated names such as
//! `list/current/focus`. A lookup that finds no entry for the full path falls
//! back one component at a time towards the root, and partial styles are
//! merged along the way, so a theme only needs to specify what differs.

/// Color helpers.
mod color;
/// The default widget theme.
pub mod theme;

use std::collections::HashMap;

pub use color::Color;

/// A text attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attr {
    /// Bold text.
    Bold,
    /// Dim text.
    Dim,
    /// Italic text.
    Italic,
    /// Reversed foreground and background.
    Reverse,
    /// Underlined text.
    Underline,
}

/// A set of active text attributes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct AttrSet {
    /// Bold flag.
    pub bold: bool,
    /// Dim flag.
    pub dim: bool,
    /// Italic flag.
    pub italic: bool,
    /// Reverse flag.
    pub reverse: bool,
    /// Underline flag.
    pub underline: bool,
}

impl AttrSet {
    /// Turn an attribute on.
    pub fn with(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::Dim => self.dim = true,
            Attr::Italic => self.italic = true,
            Attr::Reverse => self.reverse = true,
            Attr::Underline => self.underline = true,
        };
        self
    }
}

/// A fully resolved style.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Text attributes.
    pub attrs: AttrSet,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            attrs: AttrSet::default(),
        }
    }
}

/// Style components set at one path of a [`StyleMap`]; unset ones are inherited.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub struct PartialStyle {
    /// Optional foreground color.
    pub fg: Option<Color>,
    /// Optional background color.
    pub bg: Option<Color>,
    /// Optional attributes.
    pub attrs: Option<AttrSet>,
}

impl PartialStyle {
    /// Merge two partial styles. Values in `self` win.
    pub fn join(&self, other: &Self) -> Self {
        Self {
            fg: self.fg.or(other.fg),
            bg: self.bg.or(other.bg),
            attrs: self.attrs.or(other.attrs),
        }
    }

    /// Return true if all components are set.
    pub fn is_complete(&self) -> bool {
        self.fg.is_some() && self.bg.is_some() && self.attrs.is_some()
    }

    /// Fill any gaps from the default style.
    fn resolve(&self) -> Style {
        let d = Style::default();
        Style {
            fg: self.fg.unwrap_or(d.fg),
            bg: self.bg.unwrap_or(d.bg),
            attrs: self.attrs.unwrap_or(d.attrs),
        }
    }
}

/// Split a style path into components.
fn parse_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Map of style paths to partial styles.
#[derive(Debug, Clone)]
pub struct StyleMap {
    /// Path-to-style map.
    styles: HashMap<Vec<String>, PartialStyle>,
}

impl Default for StyleMap {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleMap {
    /// Construct a style map with only the root style set.
    pub fn new() -> Self {
        let mut cs = Self {
            styles: HashMap::new(),
        };
        cs.add(
            "/",
            Some(Color::White),
            Some(Color::Black),
            Some(AttrSet::default()),
        );
        cs
    }

    /// Set the style components at a path, replacing what was there.
    pub fn add(
        &mut self,
        path: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        attrs: Option<AttrSet>,
    ) {
        self.styles
            .insert(parse_path(path), PartialStyle { fg, bg, attrs });
    }

    /// Set the foreground at a path, keeping other components.
    pub fn add_fg(&mut self, path: &str, c: Color) {
        self.styles.entry(parse_path(path)).or_default().fg = Some(c);
    }

    /// Set the background at a path, keeping other components.
    pub fn add_bg(&mut self, path: &str, c: Color) {
        self.styles.entry(parse_path(path)).or_default().bg = Some(c);
    }

    /// Add an attribute at a path.
    pub fn add_attr(&mut self, path: &str, attr: Attr) {
        let ps = self.styles.entry(parse_path(path)).or_default();
        ps.attrs = Some(ps.attrs.unwrap_or_default().with(attr));
    }

    /// Resolve a style path, falling back towards the root.
    pub fn get(&self, path: &str) -> Style {
        let path = parse_path(path);
        let mut ret = PartialStyle::default();
        for i in (0..=path.len()).rev() {
            if let Some(ps) = self.styles.get(&path[..i]) {
                ret = ret.join(ps);
                if ret.is_complete() {
                    break;
                }
            }
        }
        ret.resolve()
    }
}
