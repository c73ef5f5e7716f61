//! A scrollable, multi-column list that can show a tree of items.
//!
//! The list owns an [`ItemTree`] and shows it flattened: an expanded item is
//! followed by its children, a collapsed one hides them. Navigation moves
//! cursors over the flattened rows, and the window of visible rows follows
//! the selection. In tree mode items are indented by depth and carry an
//! expander glyph that can be clicked.
//!
//! ```
//! use thicket::widgets::listview::{ListView, ListViewConfig, Parent, Width};
//!
//! let mut list: ListView = ListView::new(ListViewConfig::default().with_tree_view(true));
//! list.add_column("Name", Width::Auto);
//! let fruit = list.insert(&["fruit"], (), Parent::Root).unwrap();
//! list.insert(&["apple"], (), fruit);
//! list.insert(&["pear"], (), fruit);
//! assert_eq!(list.count(), 1);
//! list.expand(fruit);
//! assert_eq!(list.count(), 3);
//! ```
mod config;
mod draw;
mod header;
mod item;
mod iter;
mod viewport;

pub use config::{ListGlyphs, ListViewConfig};
pub use header::{Alignment, Header, Width};
pub use item::{ItemId, ItemTree, ListItem, Parent};
pub use iter::ListIterator;
use tracing::{debug, trace, warn};
use viewport::Viewport;

use crate::{
    Context, EventOutcome, Result, Widget, WidgetState,
    event::{
        Event, Key, KeyCode, Wheel, WheelEvent,
        mouse::{Action, Button, MouseEvent},
    },
    geom::{Line, Rect},
    render::Render,
    signal::Signal,
    text,
    timer::TimerId,
    widgets::scrollbar::{Orientation, ScrollBar, ScrollType},
};

/// Direction of an active drag auto-scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragScroll {
    /// Not scrolling.
    None,
    /// Pointer above the list.
    Up,
    /// Pointer below the list.
    Down,
}

/// A list view over items carrying a payload of type `P`.
pub struct ListView<P = ()> {
    /// Geometry and flags.
    state: WidgetState,
    /// Behaviour settings.
    config: ListViewConfig,
    /// The items.
    tree: ItemTree<P>,
    /// Column headers.
    headers: Vec<Header>,
    /// Selection and window.
    vp: Viewport,
    /// Widest row seen, in columns.
    max_line_width: usize,
    /// Right-hand scrollbar.
    vbar: ScrollBar,
    /// Bottom scrollbar.
    hbar: ScrollBar,
    /// Auto-scroll direction.
    drag: DragScroll,
    /// Auto-scroll timer.
    scroll_timer: Option<TimerId>,
    /// Rows per auto-scroll tick.
    scroll_distance: usize,
    /// Local position of a press on an expander.
    clicked_expander: Option<(i32, i32)>,
    /// Emitted with the current item on Enter or a double click.
    pub clicked: Signal<ItemId>,
    /// Emitted with the new current item when user input moves the selection.
    pub row_changed: Signal<ItemId>,
}

impl<P> Default for ListView<P> {
    fn default() -> Self {
        Self::new(ListViewConfig::default())
    }
}

impl<P> ListView<P> {
    /// Construct an empty list.
    pub fn new(config: ListViewConfig) -> Self {
        Self {
            state: WidgetState::default(),
            config,
            tree: ItemTree::new(),
            headers: Vec::new(),
            vp: Viewport::default(),
            max_line_width: 0,
            vbar: ScrollBar::new(Orientation::Vertical),
            hbar: ScrollBar::new(Orientation::Horizontal),
            drag: DragScroll::None,
            scroll_timer: None,
            scroll_distance: 1,
            clicked_expander: None,
            clicked: Signal::new(),
            row_changed: Signal::new(),
        }
    }

    /// Widget state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Mutable widget state. Call [`Self::adjust_size`] after changing the
    /// area directly.
    pub fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    /// Move and resize the list.
    pub fn set_area(&mut self, area: Rect) {
        self.state.set_area(area);
        self.adjust_size();
    }

    /// Resize the list in place.
    pub fn resize(&mut self, w: u32, h: u32) {
        let tl = self.state.area().tl;
        self.set_area(Rect::new(tl.x, tl.y, w, h));
    }

    /// Behaviour settings.
    pub fn config(&self) -> &ListViewConfig {
        &self.config
    }

    /// Is tree mode on?
    pub fn is_tree_view(&self) -> bool {
        self.config.tree_view
    }

    /// Turn tree mode on or off.
    pub fn set_tree_view(&mut self, tree_view: bool) {
        self.config.tree_view = tree_view;
    }

    /// The item tree.
    pub fn tree(&self) -> &ItemTree<P> {
        &self.tree
    }

    /// Rows available for items.
    pub fn client_height(&self) -> usize {
        (self.state.size().h as usize).saturating_sub(2)
    }

    /// Columns available for items.
    pub fn client_width(&self) -> usize {
        (self.state.size().w as usize).saturating_sub(2)
    }

    /// Add a column and return its 1-based index.
    pub fn add_column(&mut self, label: &str, width: Width) -> usize {
        self.headers.push(Header::new(label, width));
        self.fit_line_width();
        self.headers.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// A header by 1-based index.
    fn header(&self, column: usize) -> Option<&Header> {
        column.checked_sub(1).and_then(|i| self.headers.get(i))
    }

    /// Mutable header by 1-based index.
    fn header_mut(&mut self, column: usize) -> Option<&mut Header> {
        column.checked_sub(1).and_then(|i| self.headers.get_mut(i))
    }

    /// Label of a 1-based column. Out of range yields the empty string.
    pub fn column_text(&self, column: usize) -> &str {
        self.header(column).map_or("", Header::name)
    }

    /// Relabel a column. An auto column grows to fit the label.
    pub fn set_column_text(&mut self, column: usize, label: &str) {
        let Some(h) = self.header_mut(column) else {
            return;
        };
        h.name = label.to_string();
        h.fit(text::width(label));
        self.fit_line_width();
        self.adjust_size();
    }

    /// Alignment of a 1-based column. Out of range yields `Left`.
    pub fn column_alignment(&self, column: usize) -> Alignment {
        self.header(column).map_or(Alignment::Left, Header::alignment)
    }

    /// Set the alignment of a column.
    pub fn set_column_alignment(&mut self, column: usize, alignment: Alignment) {
        if let Some(h) = self.header_mut(column) {
            h.alignment = alignment;
        }
    }

    /// Width of a rendered row: a leading space, then each column and its
    /// trailing space.
    fn line_width(&self) -> usize {
        1 + self.headers.iter().map(|h| h.width + 1).sum::<usize>()
    }

    /// Record the current row width if it is the widest yet.
    fn fit_line_width(&mut self) {
        self.max_line_width = self.max_line_width.max(self.line_width());
    }

    /// Insert an item at the end of `parent`'s children. Control characters
    /// in the text are made printable, and auto columns grow to fit. Returns
    /// `None`, changing nothing, if `columns` is empty or the parent does
    /// not exist.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        columns: &[S],
        payload: P,
        parent: impl Into<Parent>,
    ) -> Option<ItemId> {
        let parent = parent.into();
        if columns.is_empty() {
            warn!(?parent, "list item without columns rejected");
            return None;
        }
        if !self.tree.has_parent(parent) {
            warn!(?parent, "list item with unknown parent rejected");
            return None;
        }
        let columns: Vec<String> = columns
            .iter()
            .map(|c| text::replace_control_codes(c.as_ref()))
            .collect();
        for (h, c) in self.headers.iter_mut().zip(&columns) {
            h.fit(text::width(c));
        }
        self.fit_line_width();

        let shifts_rows = match parent {
            Parent::Root => false,
            Parent::Item(pid) => {
                self.tree.is_visible(pid) && self.tree.get(pid).is_some_and(ListItem::is_expanded)
            }
        };
        let anchors = self.vp.anchors(&self.tree);
        let id = self.tree.append(parent, columns, payload)?;
        if shifts_rows {
            self.vp.restore(&self.tree, anchors, self.client_height());
        }
        self.adjust_size();
        Some(id)
    }

    /// Insert an item whose columns are numbers.
    pub fn insert_numbers(
        &mut self,
        columns: &[i64],
        payload: P,
        parent: impl Into<Parent>,
    ) -> Option<ItemId> {
        let columns: Vec<String> = columns.iter().map(ToString::to_string).collect();
        self.insert(&columns, payload, parent)
    }

    /// Insert an item with a default payload.
    pub fn insert_item<S: AsRef<str>>(
        &mut self,
        parent: impl Into<Parent>,
        columns: &[S],
    ) -> Option<ItemId>
    where
        P: Default,
    {
        self.insert(columns, P::default(), parent)
    }

    /// Remove an item and its subtree, returning the payloads.
    pub fn remove(&mut self, id: ItemId) -> Vec<P> {
        let anchors = self.vp.anchors(&self.tree);
        let removed = self.tree.remove(id);
        if !removed.is_empty() {
            self.vp.restore(&self.tree, anchors, self.client_height());
            self.adjust_size();
        }
        removed
    }

    /// Remove all items. Columns are kept.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.vp.reset();
        self.max_line_width = self.line_width();
        self.adjust_size();
    }

    /// Look up an item.
    pub fn item(&self, id: ItemId) -> Option<&ListItem<P>> {
        self.tree.get(id)
    }

    /// Text of an item's 1-based column.
    pub fn item_text(&self, id: ItemId, column: usize) -> &str {
        self.tree.text(id, column)
    }

    /// Replace the text of an item's 1-based column. An auto column grows
    /// to fit. Returns false, changing nothing, if the item or column does
    /// not exist.
    pub fn set_item_text(&mut self, id: ItemId, column: usize, txt: &str) -> bool {
        let txt = text::replace_control_codes(txt);
        let w = text::width(&txt);
        if !self.tree.set_text(id, column, txt) {
            return false;
        }
        if let Some(h) = self.header_mut(column) {
            h.fit(w);
        }
        self.fit_line_width();
        self.adjust_size();
        true
    }

    /// Number of item ancestors.
    pub fn depth(&self, id: ItemId) -> usize {
        self.tree.depth(id)
    }

    /// The payload of an item.
    pub fn payload(&self, id: ItemId) -> Option<&P> {
        self.tree.get(id).map(ListItem::payload)
    }

    /// The container of an item.
    pub fn parent(&self, id: ItemId) -> Option<Parent> {
        self.tree.parent(id)
    }

    /// Children of a container.
    pub fn children(&self, parent: impl Into<Parent>) -> &[ItemId] {
        self.tree.children(parent.into())
    }

    /// Does the item have children?
    pub fn is_expandable(&self, id: ItemId) -> bool {
        self.tree.get(id).is_some_and(ListItem::is_expandable)
    }

    /// Are the item's children shown?
    pub fn is_expanded(&self, id: ItemId) -> bool {
        self.tree.get(id).is_some_and(ListItem::is_expanded)
    }

    /// Rows the item's subtree occupies.
    pub fn visible_line_count(&self, id: ItemId) -> usize {
        self.tree.visible_line_count(id)
    }

    /// Show an item's children. Returns true if anything changed.
    pub fn expand(&mut self, id: ItemId) -> bool {
        let anchors = self.vp.anchors(&self.tree);
        if !self.tree.expand(id) {
            return false;
        }
        debug!(?id, "expanded");
        self.vp.restore(&self.tree, anchors, self.client_height());
        self.adjust_size();
        true
    }

    /// Hide an item's children. Returns true if anything changed.
    pub fn collapse(&mut self, id: ItemId) -> bool {
        let anchors = self.vp.anchors(&self.tree);
        if !self.tree.collapse(id) {
            return false;
        }
        debug!(?id, "collapsed");
        self.vp.restore(&self.tree, anchors, self.client_height());
        self.adjust_size();
        true
    }

    /// Expand a collapsed item or collapse an expanded one.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.is_expanded(id) {
            self.collapse(id)
        } else {
            self.expand(id)
        }
    }

    /// Number of visible rows.
    pub fn count(&self) -> usize {
        self.tree.count()
    }

    /// The selected item.
    pub fn current(&self) -> Option<ItemId> {
        self.vp.current.item(&self.tree)
    }

    /// Row of the selected item.
    pub fn current_position(&self) -> usize {
        self.vp.current.position()
    }

    /// Row of the first visible item.
    pub fn first_visible_position(&self) -> usize {
        self.vp.first.position()
    }

    /// Row of the last visible item.
    pub fn last_visible_position(&self) -> usize {
        self.vp.last.position()
    }

    /// Horizontal scroll in columns.
    pub fn x_offset(&self) -> usize {
        self.vp.x_offset
    }

    /// Widest row seen, in columns.
    pub fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    /// Largest useful horizontal scroll.
    fn max_x_offset(&self) -> usize {
        self.max_line_width.saturating_sub(self.client_width())
    }

    /// Select an item and scroll it into view. A hidden item selects its
    /// outermost collapsed ancestor.
    pub fn set_current(&mut self, id: ItemId) -> bool {
        let Some(it) = ListIterator::at(&self.tree, id) else {
            return false;
        };
        self.vp.current = it;
        self.vp.reveal(&self.tree, self.client_height());
        self.sync_bars();
        true
    }

    /// The right-hand scrollbar.
    pub fn vertical_bar(&self) -> &ScrollBar {
        &self.vbar
    }

    /// The right-hand scrollbar, for connecting to its signal.
    pub fn vertical_bar_mut(&mut self) -> &mut ScrollBar {
        &mut self.vbar
    }

    /// The bottom scrollbar.
    pub fn horizontal_bar(&self) -> &ScrollBar {
        &self.hbar
    }

    /// The bottom scrollbar, for connecting to its signal.
    pub fn horizontal_bar_mut(&mut self) -> &mut ScrollBar {
        &mut self.hbar
    }

    /// Select the next row.
    pub fn step_forward(&mut self) {
        self.vp.step_forward(&self.tree);
        self.settle();
    }

    /// Select the previous row.
    pub fn step_backward(&mut self) {
        self.vp.step_backward(&self.tree);
        self.settle();
    }

    /// Move the selection down by up to `distance` rows.
    pub fn step_forward_by(&mut self, distance: usize) {
        self.vp.step_forward_by(&self.tree, distance);
        self.settle();
    }

    /// Move the selection up by up to `distance` rows.
    pub fn step_backward_by(&mut self, distance: usize) {
        self.vp.step_backward_by(&self.tree, distance);
        self.settle();
    }

    /// Scroll horizontally to `x`.
    pub fn scroll_to_x(&mut self, x: usize) {
        self.vp.scroll_to_x(x, self.max_x_offset());
        self.sync_bars();
    }

    /// Make row `y` the first visible row.
    pub fn scroll_to_y(&mut self, y: usize) {
        self.vp.scroll_to_y(&self.tree, self.client_height(), y);
        self.settle();
    }

    /// Re-clamp the window and push the position to the bars.
    fn settle(&mut self) {
        self.vp.adjust(&self.tree, self.client_height());
        self.sync_bars();
    }

    /// Show the bars' positions.
    fn sync_bars(&mut self) {
        self.vbar.set_value(self.vp.first.position());
        self.hbar.set_value(self.vp.x_offset);
    }

    /// Recompute the window, bar ranges, bar placement and visibility after
    /// a size or content change.
    pub fn adjust_size(&mut self) {
        let (ch, cw) = (self.client_height(), self.client_width());
        self.vp.adjust(&self.tree, ch);
        self.vp.x_offset = self.vp.x_offset.min(self.max_x_offset());

        let count = self.count();
        let sz = self.state.size();
        self.vbar.set_maximum(count.saturating_sub(ch));
        self.vbar.set_page_size(count, ch);
        self.vbar
            .set_area(Rect::new(sz.w.saturating_sub(1), 1, 1, ch as u32));
        self.hbar.set_maximum(self.max_x_offset());
        self.hbar.set_page_size(self.max_line_width, cw);
        self.hbar
            .set_area(Rect::new(1, sz.h.saturating_sub(1), cw as u32, 1));

        if count > ch {
            self.vbar.show();
        } else {
            self.vbar.hide();
        }
        if self.max_line_width > cw {
            self.hbar.show();
        } else {
            self.hbar.hide();
        }
        self.sync_bars();
    }

    /// Emit `row_changed` if the selection moved away from `before`.
    fn notify(&mut self, before: Option<ItemId>) {
        let now = self.current();
        if now != before
            && let Some(id) = now
        {
            self.row_changed.emit(&id);
        }
    }

    /// Emit `clicked` for the selection.
    fn click(&mut self) {
        if let Some(id) = self.current() {
            self.clicked.emit(&id);
        }
    }

    /// Left arrow: scroll left, else collapse, else jump to the parent.
    fn key_left(&mut self) {
        if self.vp.x_offset > 0 {
            self.vp.x_offset -= 1;
            return;
        }
        let Some(id) = self.current() else {
            return;
        };
        if self.config.tree_view && self.is_expanded(id) {
            self.collapse(id);
        } else if matches!(self.tree.parent(id), Some(Parent::Item(_))) {
            let before = self.vp.current.position();
            self.vp.current.to_parent(&self.tree);
            if self.vp.current.position() < self.vp.first.position() {
                let shift = (before - self.vp.current.position()).min(self.vp.first.position());
                self.vp.first.retreat_by(&self.tree, shift);
                self.vp.last.retreat_by(&self.tree, shift);
            }
        }
    }

    /// Right arrow: expand, else scroll right.
    fn key_right(&mut self) {
        match self.current() {
            Some(id) if self.config.tree_view && self.is_expandable(id) && !self.is_expanded(id) => {
                self.expand(id);
            }
            _ => self.vp.x_offset = (self.vp.x_offset + 1).min(self.max_x_offset()),
        }
    }

    /// Expand the selection in tree mode.
    fn key_plus(&mut self) -> bool {
        match self.current() {
            Some(id) if self.config.tree_view => self.expand(id),
            _ => false,
        }
    }

    /// Collapse the selection in tree mode.
    fn key_minus(&mut self) -> bool {
        match self.current() {
            Some(id) if self.config.tree_view => self.collapse(id),
            _ => false,
        }
    }

    /// Handle a key press.
    pub fn on_key(&mut self, k: Key) -> EventOutcome {
        let before = self.current();
        let page = self.client_height().saturating_sub(1).max(1);
        self.clicked_expander = None;
        let outcome = match k.key {
            KeyCode::Enter => {
                self.click();
                EventOutcome::Handle
            }
            KeyCode::Up => {
                self.vp.step_backward(&self.tree);
                EventOutcome::Handle
            }
            KeyCode::Down => {
                self.vp.step_forward(&self.tree);
                EventOutcome::Handle
            }
            KeyCode::Left => {
                self.key_left();
                EventOutcome::Handle
            }
            KeyCode::Right => {
                self.key_right();
                EventOutcome::Handle
            }
            KeyCode::PageUp => {
                self.vp.step_backward_by(&self.tree, page);
                EventOutcome::Handle
            }
            KeyCode::PageDown => {
                self.vp.step_forward_by(&self.tree, page);
                EventOutcome::Handle
            }
            KeyCode::Home => {
                self.vp.home(&self.tree);
                EventOutcome::Handle
            }
            KeyCode::End => {
                self.vp.end(&self.tree);
                EventOutcome::Handle
            }
            KeyCode::Char('+') if self.key_plus() => EventOutcome::Handle,
            KeyCode::Char('-') if self.key_minus() => EventOutcome::Handle,
            _ => EventOutcome::Ignore,
        };
        self.settle();
        self.notify(before);
        outcome
    }

    /// Is a local point inside the item area?
    fn in_client(&self, x: i32, y: i32) -> bool {
        let sz = self.state.size();
        x >= 1 && y >= 1 && x < sz.w as i32 - 1 && y < sz.h as i32 - 1
    }

    /// Select the item shown `row` rows below the first visible one, if
    /// there is one.
    fn select_row(&mut self, row: usize) {
        if self.vp.first.position() + row < self.count() {
            self.vp.set_relative(&self.tree, row);
        }
    }

    /// Is local column `x` on the expander of the selected item?
    fn on_expander(&self, x: i32) -> bool {
        let Some(id) = self.current() else {
            return false;
        };
        let indent = 2 * self.tree.depth(id) as i32;
        self.is_expandable(id) && x - 1 == indent - self.vp.x_offset as i32
    }

    /// Handle a mouse event.
    pub fn on_mouse(&mut self, m: &MouseEvent, ctx: &mut dyn Context) -> EventOutcome {
        let (x, y) = self.state.to_local(m.location);
        let before = self.current();
        let pressed = matches!(m.action, Action::Down | Action::DoubleClick);
        if self.vbar.is_dragging() || (pressed && self.vbar.contains(x, y)) {
            let kind = self.vbar.on_mouse(m, x, y);
            self.on_vbar(kind);
            self.notify(before);
            return EventOutcome::Handle;
        }
        if self.hbar.is_dragging() || (pressed && self.hbar.contains(x, y)) {
            let kind = self.hbar.on_mouse(m, x, y);
            self.on_hbar(kind);
            return EventOutcome::Handle;
        }

        let outcome = match m.action {
            Action::Down => self.mouse_down(m.button, x, y),
            Action::Up => self.mouse_up(m.button, x, y, ctx),
            Action::Drag => self.mouse_drag(m.button, x, y, ctx),
            Action::DoubleClick => self.double_click(m.button, x, y),
            Action::Moved => EventOutcome::Ignore,
        };
        self.settle();
        self.notify(before);
        outcome
    }

    /// A press selects the row under the pointer and arms the expander.
    fn mouse_down(&mut self, button: Button, x: i32, y: i32) -> EventOutcome {
        if button != Button::Left {
            self.clicked_expander = None;
            return EventOutcome::Ignore;
        }
        self.state.set_focus(true);
        if self.in_client(x, y) {
            self.select_row((y - 1) as usize);
            if self.config.tree_view && self.on_expander(x) {
                self.clicked_expander = Some((x, y));
            }
        }
        EventOutcome::Handle
    }

    /// A release on an armed expander toggles the selected item.
    fn mouse_up(&mut self, button: Button, x: i32, y: i32, ctx: &mut dyn Context) -> EventOutcome {
        self.stop_scroll(ctx);
        let armed = self.clicked_expander.take() == Some((x, y));
        if button != Button::Left {
            return EventOutcome::Ignore;
        }
        if armed
            && self.config.tree_view
            && self.in_client(x, y)
            && let Some(id) = self.current()
        {
            self.toggle(id);
        }
        EventOutcome::Handle
    }

    /// Dragging selects rows, and auto-scrolls while the pointer is above
    /// or below the list.
    fn mouse_drag(&mut self, button: Button, x: i32, y: i32, ctx: &mut dyn Context) -> EventOutcome {
        if button != Button::Left {
            self.clicked_expander = None;
            return EventOutcome::Ignore;
        }
        if self.in_client(x, y) {
            self.select_row((y - 1) as usize);
        }
        let pos = self.vp.current.position();
        if y < 1 {
            self.auto_scroll(DragScroll::Up, pos > 0, ctx);
            if pos == 0 {
                self.stop_scroll(ctx);
            }
        } else if y >= self.state.size().h as i32 - 1 {
            let more = pos + 1 < self.count();
            self.auto_scroll(DragScroll::Down, more, ctx);
            if !more {
                self.stop_scroll(ctx);
            }
        } else {
            self.stop_scroll(ctx);
        }
        EventOutcome::Handle
    }

    /// Accelerate a running auto-scroll, or start one if `room` allows.
    fn auto_scroll(&mut self, dir: DragScroll, room: bool, ctx: &mut dyn Context) {
        if self.drag != DragScroll::None && self.scroll_distance < self.client_height() {
            self.scroll_distance += 1;
        }
        if self.scroll_timer.is_none() && room {
            debug!(?dir, "auto-scroll started");
            self.scroll_timer = Some(ctx.add_timer(self.config.scroll_repeat));
            self.drag = dir;
        }
    }

    /// Cancel any auto-scroll.
    fn stop_scroll(&mut self, ctx: &mut dyn Context) {
        if let Some(id) = self.scroll_timer.take() {
            debug!("auto-scroll stopped");
            ctx.del_timer(id);
        }
        self.drag = DragScroll::None;
        self.scroll_distance = 1;
    }

    /// A double click on a row toggles it in tree mode and reports a click.
    fn double_click(&mut self, button: Button, x: i32, y: i32) -> EventOutcome {
        if button != Button::Left {
            return EventOutcome::Ignore;
        }
        self.clicked_expander = None;
        if !self.in_client(x, y) {
            return EventOutcome::Handle;
        }
        if self.vp.first.position() + (y - 1) as usize >= self.count() {
            return EventOutcome::Ignore;
        }
        if let Some(id) = self.current()
            && self.config.tree_view
            && self.is_expandable(id)
        {
            self.toggle(id);
        }
        self.click();
        EventOutcome::Handle
    }

    /// An auto-scroll tick.
    pub fn on_timer(&mut self, id: TimerId, ctx: &mut dyn Context) -> EventOutcome {
        if self.scroll_timer != Some(id) {
            return EventOutcome::Ignore;
        }
        let before = self.current();
        let pos = self.vp.current.position();
        match self.drag {
            DragScroll::None => self.stop_scroll(ctx),
            DragScroll::Up if pos == 0 => self.stop_scroll(ctx),
            DragScroll::Up => self.vp.step_backward_by(&self.tree, self.scroll_distance),
            DragScroll::Down if pos + 1 >= self.count() => self.stop_scroll(ctx),
            DragScroll::Down => self.vp.step_forward_by(&self.tree, self.scroll_distance),
        }
        self.settle();
        self.notify(before);
        EventOutcome::Handle
    }

    /// Scroll the list by one wheel notch.
    fn wheel(&mut self, direction: Wheel) {
        match direction {
            Wheel::Up => self.vp.wheel_up(&self.tree, self.config.wheel_step),
            Wheel::Down => self.vp.wheel_down(&self.tree, self.config.wheel_step),
        }
    }

    /// Handle a wheel event. Over the bottom bar the wheel scrolls
    /// horizontally.
    pub fn on_wheel(&mut self, w: &WheelEvent, ctx: &mut dyn Context) -> EventOutcome {
        self.stop_scroll(ctx);
        let before = self.current();
        let (x, y) = self.state.to_local(w.location);
        if self.hbar.contains(x, y) {
            let kind = self.hbar.on_wheel(w.direction);
            self.on_hbar(kind);
        } else if self.vbar.contains(x, y) {
            let kind = self.vbar.on_wheel(w.direction);
            self.on_vbar(kind);
        } else {
            self.wheel(w.direction);
            self.settle();
        }
        self.notify(before);
        EventOutcome::Handle
    }

    /// Apply a vertical scrollbar gesture.
    pub fn on_vbar(&mut self, kind: ScrollType) {
        let page = self.client_height();
        match kind {
            ScrollType::NoScroll => {}
            ScrollType::StepBackward => self.vp.step_backward_by(&self.tree, 1),
            ScrollType::PageBackward => self.vp.step_backward_by(&self.tree, page),
            ScrollType::StepForward => self.vp.step_forward_by(&self.tree, 1),
            ScrollType::PageForward => self.vp.step_forward_by(&self.tree, page),
            ScrollType::Jump => {
                let y = self.vbar.value();
                self.vp.scroll_to_y(&self.tree, page, y);
            }
            ScrollType::WheelUp => self.wheel(Wheel::Up),
            ScrollType::WheelDown => self.wheel(Wheel::Down),
        }
        self.settle();
    }

    /// Apply a horizontal scrollbar gesture.
    pub fn on_hbar(&mut self, kind: ScrollType) {
        let max = self.max_x_offset();
        let page = self.client_width();
        let step = self.config.wheel_step;
        let x = self.vp.x_offset;
        match kind {
            ScrollType::NoScroll => {}
            ScrollType::StepBackward => self.vp.x_offset = x.saturating_sub(1),
            ScrollType::PageBackward => self.vp.x_offset = x.saturating_sub(page),
            ScrollType::StepForward => self.vp.x_offset = (x + 1).min(max),
            ScrollType::PageForward => self.vp.x_offset = (x + page).min(max),
            ScrollType::Jump => {
                let v = self.hbar.value();
                self.vp.scroll_to_x(v, max);
            }
            ScrollType::WheelUp => self.vp.x_offset = x.saturating_sub(step),
            ScrollType::WheelDown => self.vp.x_offset = (x + step).min(max),
        }
        self.sync_bars();
    }

    /// The full text of an item's row, before horizontal scrolling.
    fn row_line(&self, id: ItemId) -> String {
        let Some(item) = self.tree.get(id) else {
            return String::new();
        };
        let g = &self.config.glyphs;
        let (lead, trim) = if self.config.tree_view {
            let indent = 2 * self.tree.depth(id);
            let expander = if !item.is_expandable() {
                "  ".to_string()
            } else if item.is_expanded() {
                format!("{} ", g.expanded)
            } else {
                format!("{} ", g.collapsed)
            };
            (format!("{}{expander}", " ".repeat(indent)), indent + 1)
        } else {
            (" ".to_string(), 0)
        };
        draw::row_text(&self.headers, item.columns(), lead, trim, &g.ellipsis)
    }

    /// Draw the column labels over the top border.
    fn render_labels(&self, r: &mut Render) -> Result<()> {
        let sz = self.state.size();
        if self.headers.is_empty() || sz.h <= 2 || sz.w <= 4 {
            return Ok(());
        }
        let style = if self.state.is_enabled() {
            "list/label"
        } else {
            "list/label/inactive"
        };
        let runs = draw::label_runs(&self.headers, style, &self.config.glyphs.ellipsis);
        let total: usize = runs.iter().map(|(_, s)| text::width(s)).sum();
        let cw = self.client_width();
        let take = if total <= cw { total } else { cw - 1 };
        let visible = draw::slice_runs(&runs, self.vp.x_offset, take);
        r.runs((1, 0), &visible)
    }

    /// Draw the visible rows.
    fn render_rows(&self, r: &mut Render) -> Result<()> {
        let (ch, cw) = (self.client_height(), self.client_width());
        if ch == 0 || cw == 0 {
            return Ok(());
        }
        r.fill("list", Rect::new(1, 1, cw as u32, ch as u32), ' ')?;
        let focus = self.state.has_focus();
        let mut it = self.vp.first.clone();
        for row in 0..ch {
            let Some(id) = it.item(&self.tree) else {
                break;
            };
            let current = it == self.vp.current;
            let style = match (current, focus) {
                (true, true) => "list/current/focus",
                (true, false) => "list/current",
                _ => "list",
            };
            let y = row as u32 + 1;
            let line = draw::visible_slice(&self.row_line(id), self.vp.x_offset, cw);
            r.text(style, Line::new(1, y, cw as u32), &line)?;
            if current && focus {
                r.set_cursor((2, y));
            }
            it.advance(&self.tree);
        }
        Ok(())
    }
}

impl<P> Widget for ListView<P> {
    fn render(&mut self, r: &mut Render) -> Result<()> {
        if !self.state.is_visible() {
            return Ok(());
        }
        draw::border(r, "list/border", &draw::SINGLE)?;
        self.render_labels(r)?;
        self.render_rows(r)?;
        self.vbar.render(r)?;
        self.hbar.render(r)?;
        Ok(())
    }

    fn on_event(&mut self, event: &Event, ctx: &mut dyn Context) -> Result<EventOutcome> {
        trace!(?event, "listview event");
        if !self.state.is_enabled() && !matches!(event, Event::Resize(_)) {
            return Ok(EventOutcome::Ignore);
        }
        Ok(match event {
            Event::Key(k) => self.on_key(*k),
            Event::Mouse(m) => self.on_mouse(m, ctx),
            Event::Wheel(w) => self.on_wheel(w, ctx),
            Event::Timer(id) => self.on_timer(*id, ctx),
            Event::FocusIn => {
                self.state.set_focus(true);
                EventOutcome::Handle
            }
            Event::FocusOut => {
                self.stop_scroll(ctx);
                self.state.set_focus(false);
                EventOutcome::Handle
            }
            Event::Resize(sz) => {
                self.resize(sz.w, sz.h);
                EventOutcome::Handle
            }
        })
    }

    fn accept_focus(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "listview"
    }
}
