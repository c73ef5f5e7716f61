//! List view configuration.
use std::time::Duration;

/// Glyphs drawn by a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGlyphs {
    /// Expander of an expanded item.
    pub expanded: char,
    /// Expander of a collapsed item.
    pub collapsed: char,
    /// Marks truncated text.
    pub ellipsis: String,
}

impl Default for ListGlyphs {
    fn default() -> Self {
        Self {
            expanded: '▼',
            collapsed: '►',
            ellipsis: "..".into(),
        }
    }
}

/// Behaviour settings for a [`ListView`](super::ListView).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewConfig {
    /// Indent items by depth and draw expanders.
    pub tree_view: bool,
    /// Rows moved per wheel notch.
    pub wheel_step: usize,
    /// Interval of the auto-scroll timer while dragging outside the list.
    pub scroll_repeat: Duration,
    /// Glyphs.
    pub glyphs: ListGlyphs,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            tree_view: false,
            wheel_step: 4,
            scroll_repeat: Duration::from_millis(100),
            glyphs: ListGlyphs::default(),
        }
    }
}

impl ListViewConfig {
    /// Enable or disable tree mode.
    pub fn with_tree_view(mut self, tree_view: bool) -> Self {
        self.tree_view = tree_view;
        self
    }

    /// Set the wheel step. Zero is raised to one.
    pub fn with_wheel_step(mut self, step: usize) -> Self {
        self.wheel_step = step.max(1);
        self
    }

    /// Set the auto-scroll interval.
    pub fn with_scroll_repeat(mut self, interval: Duration) -> Self {
        self.scroll_repeat = interval;
        self
    }

    /// Set the glyphs.
    pub fn with_glyphs(mut self, glyphs: ListGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }
}
