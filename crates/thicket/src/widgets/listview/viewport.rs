//! Selection and scroll state of a list view.
//!
//! All movement is expressed through three cursors into the flattened rows:
//! the selection, and the first and last rows of the window. `page` is the
//! number of rows the window can hold.
use tracing::debug;

use super::{
    item::{ItemId, ItemTree},
    iter::ListIterator,
};

/// Item ids that identify the viewport across a structural change.
#[derive(Debug, Clone, Copy)]
pub(super) struct Anchors {
    /// Selected item and its row.
    current: Option<(ItemId, usize)>,
    /// First visible item and its row.
    first: Option<(ItemId, usize)>,
}

/// Cursor and window state.
#[derive(Debug, Clone, Default)]
pub(super) struct Viewport {
    /// Selected row.
    pub(super) current: ListIterator,
    /// First row in the window.
    pub(super) first: ListIterator,
    /// Last row in the window, inclusive.
    pub(super) last: ListIterator,
    /// Horizontal scroll in columns.
    pub(super) x_offset: usize,
}

impl Viewport {
    /// Back to the top left.
    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Put the selection `ry` rows below the first visible row.
    pub(super) fn set_relative<P>(&mut self, tree: &ItemTree<P>, ry: usize) {
        self.current = self.first.clone();
        self.current.advance_by(tree, ry);
        if self.current.is_end(tree) {
            self.current.retreat(tree);
        }
    }

    /// Offset of the selection within the window.
    fn relative(&self) -> usize {
        self.current.position().saturating_sub(self.first.position())
    }

    /// Shift the window towards the end.
    fn slide_forward<P>(&mut self, tree: &ItemTree<P>, n: usize) {
        self.first.advance_by(tree, n);
        self.last.advance_by(tree, n);
    }

    /// Shift the window towards the start.
    fn slide_backward<P>(&mut self, tree: &ItemTree<P>, n: usize) {
        self.first.retreat_by(tree, n);
        self.last.retreat_by(tree, n);
    }

    /// Select the next row, scrolling by one if the selection was on the
    /// last visible row.
    pub(super) fn step_forward<P>(&mut self, tree: &ItemTree<P>) {
        if tree.count() == 0 {
            return;
        }
        if self.current == self.last {
            self.last.advance(tree);
            if self.last.is_end(tree) {
                self.last.retreat(tree);
            } else {
                self.first.advance(tree);
            }
        }
        self.current.advance(tree);
        if self.current.is_end(tree) {
            self.current.retreat(tree);
        }
    }

    /// Select the previous row, scrolling by one if the selection was on
    /// the first visible row.
    pub(super) fn step_backward<P>(&mut self, tree: &ItemTree<P>) {
        if self.current == self.first && self.current.position() > 0 {
            self.slide_backward(tree, 1);
        }
        self.current.retreat(tree);
    }

    /// Move the selection `distance` rows down, stopping at the last row.
    pub(super) fn step_forward_by<P>(&mut self, tree: &ItemTree<P>, distance: usize) {
        let count = tree.count();
        let pos = self.current.position();
        if pos + 1 >= count {
            return;
        }
        self.current.advance_by(tree, distance.min(count - 1 - pos));
        let last = self.last.position();
        if self.current.position() > last {
            let shift = if last + distance < count {
                distance
            } else {
                count - last - 1
            };
            self.slide_forward(tree, shift);
        }
    }

    /// Move the selection `distance` rows up, stopping at the first row.
    pub(super) fn step_backward_by<P>(&mut self, tree: &ItemTree<P>, distance: usize) {
        let pos = self.current.position();
        if pos == 0 {
            return;
        }
        self.current.retreat_by(tree, distance.min(pos));
        let first = self.first.position();
        if self.current.position() < first {
            self.slide_backward(tree, distance.min(first));
        }
    }

    /// Select the first row.
    pub(super) fn home<P>(&mut self, tree: &ItemTree<P>) {
        self.current = ListIterator::begin();
        let shift = self.first.position();
        self.slide_backward(tree, shift);
    }

    /// Select the last row.
    pub(super) fn end<P>(&mut self, tree: &ItemTree<P>) {
        let count = tree.count();
        if count == 0 {
            return;
        }
        self.current = ListIterator::end(tree);
        self.current.retreat(tree);
        let shift = (count - 1).saturating_sub(self.last.position());
        self.slide_forward(tree, shift);
    }

    /// Wheel towards the top: move selection and window up by `step`, or
    /// pin the window to the top keeping the selection's offset within it.
    pub(super) fn wheel_up<P>(&mut self, tree: &ItemTree<P>, step: usize) {
        if self.current.position() == 0 {
            return;
        }
        if self.first.position() >= step {
            self.current.retreat_by(tree, step);
            self.slide_backward(tree, step);
        } else {
            let ry = self.relative();
            let shift = self.first.position();
            self.slide_backward(tree, shift);
            self.set_relative(tree, ry);
        }
    }

    /// Wheel towards the bottom: the mirror of [`Self::wheel_up`].
    pub(super) fn wheel_down<P>(&mut self, tree: &ItemTree<P>, step: usize) {
        let count = tree.count();
        if self.current.position() + 1 >= count {
            return;
        }
        if self.last.position() + step < count {
            self.current.advance_by(tree, step);
            self.slide_forward(tree, step);
        } else {
            let ry = self.relative();
            let shift = (count - 1).saturating_sub(self.last.position());
            self.slide_forward(tree, shift);
            self.set_relative(tree, ry);
        }
    }

    /// Make row `y` the first visible row, keeping the selection's offset
    /// within the window.
    pub(super) fn scroll_to_y<P>(&mut self, tree: &ItemTree<P>, page: usize, y: usize) {
        let count = tree.count();
        if count == 0 || self.first.position() == y {
            return;
        }
        let span = page.saturating_sub(1);
        if y + span < count {
            let ry = self.relative();
            self.first = ListIterator::begin();
            self.first.advance_by(tree, y);
            self.set_relative(tree, ry);
            self.last = self.first.clone();
            self.last.advance_by(tree, span);
        } else {
            let shift = (count - 1).saturating_sub(self.last.position());
            self.current.advance_by(tree, shift);
            self.slide_forward(tree, shift);
        }
    }

    /// Scroll horizontally to `x`, clamped to `[0, max]`.
    pub(super) fn scroll_to_x(&mut self, x: usize, max: usize) {
        self.x_offset = x.min(max);
    }

    /// Scroll the window so the selection is visible.
    pub(super) fn reveal<P>(&mut self, tree: &ItemTree<P>, page: usize) {
        let pos = self.current.position();
        if pos < self.first.position() {
            let shift = self.first.position() - pos;
            self.slide_backward(tree, shift);
        } else if pos > self.last.position() {
            let shift = pos - self.last.position();
            self.slide_forward(tree, shift);
        }
        self.adjust(tree, page);
    }

    /// Re-clamp the window to the tree and the page size: the window never
    /// extends past the last row, holds at most `page` rows, and contains
    /// the selection.
    pub(super) fn adjust<P>(&mut self, tree: &ItemTree<P>, page: usize) {
        let count = tree.count();
        if count == 0 {
            let x = self.x_offset;
            self.reset();
            self.x_offset = x;
            return;
        }
        if page == 0 {
            return;
        }
        if count < page {
            self.first = ListIterator::begin();
        } else if self.first.position() > count - page {
            let shift = self.first.position() - (count - page);
            debug!(shift, "pulling viewport back from the end");
            self.first.retreat_by(tree, shift);
        }
        self.last = self.first.clone();
        self.last
            .advance_by(tree, page.min(count - self.first.position()) - 1);
        if self.current.position() > self.last.position() {
            self.current = self.last.clone();
        }
        if self.current.position() < self.first.position() {
            self.current = self.first.clone();
        }
    }

    /// Remember the selection and the first visible row by item.
    pub(super) fn anchors<P>(&self, tree: &ItemTree<P>) -> Anchors {
        let anchor = |it: &ListIterator| it.item(tree).map(|id| (id, it.position()));
        Anchors {
            current: anchor(&self.current),
            first: anchor(&self.first),
        }
    }

    /// Rebuild the cursors after the rows moved. Removed anchors fall back
    /// to their old row number, clamped to the new row count.
    pub(super) fn restore<P>(&mut self, tree: &ItemTree<P>, anchors: Anchors, page: usize) {
        let locate = |a: Option<(ItemId, usize)>| match a {
            Some((id, pos)) => ListIterator::at(tree, id).unwrap_or_else(|| {
                let mut it = ListIterator::begin();
                it.advance_by(tree, pos.min(tree.count().saturating_sub(1)));
                it
            }),
            None => ListIterator::begin(),
        };
        self.current = locate(anchors.current);
        self.first = locate(anchors.first);
        self.adjust(tree, page);
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::item::{ItemTree, Parent},
        *,
    };

    fn flat(n: usize) -> ItemTree<()> {
        let mut t = ItemTree::new();
        for i in 0..n {
            t.append(Parent::Root, vec![i.to_string()], ()).unwrap();
        }
        t
    }

    fn state(v: &Viewport) -> (usize, usize, usize) {
        (v.first.position(), v.current.position(), v.last.position())
    }

    fn fresh(t: &ItemTree<()>, page: usize) -> Viewport {
        let mut v = Viewport::default();
        v.adjust(t, page);
        v
    }

    #[test]
    fn end_with_small_page() {
        let t = flat(3);
        let mut v = fresh(&t, 2);
        assert_eq!(state(&v), (0, 0, 1));
        v.end(&t);
        v.adjust(&t, 2);
        assert_eq!(state(&v), (1, 2, 2));
        v.home(&t);
        v.adjust(&t, 2);
        assert_eq!(state(&v), (0, 0, 1));
    }

    #[test]
    fn single_steps_scroll_at_edges() {
        let t = flat(5);
        let mut v = fresh(&t, 3);
        for _ in 0..3 {
            v.step_forward(&t);
        }
        assert_eq!(state(&v), (1, 3, 3));
        v.step_forward(&t);
        v.step_forward(&t);
        assert_eq!(state(&v), (2, 4, 4));
        for _ in 0..3 {
            v.step_backward(&t);
        }
        assert_eq!(state(&v), (1, 1, 3));
        v.step_backward(&t);
        v.step_backward(&t);
        assert_eq!(state(&v), (0, 0, 2));
    }

    #[test]
    fn distance_steps_clamp() {
        let t = flat(10);
        let mut v = fresh(&t, 4);
        v.step_forward_by(&t, 50);
        assert_eq!(state(&v), (6, 9, 9));
        v.step_backward_by(&t, 3);
        assert_eq!(state(&v), (6, 6, 9));
        v.step_backward_by(&t, 3);
        assert_eq!(state(&v), (3, 3, 6));
        v.step_backward_by(&t, 50);
        assert_eq!(state(&v), (0, 0, 3));
    }

    #[test]
    fn wheel_pins_to_ends() {
        let t = flat(10);
        let mut v = fresh(&t, 4);
        v.step_forward_by(&t, 1);
        v.wheel_down(&t, 4);
        assert_eq!(state(&v), (4, 5, 7));
        v.wheel_down(&t, 4);
        assert_eq!(state(&v), (6, 7, 9));
        v.wheel_up(&t, 4);
        assert_eq!(state(&v), (2, 3, 5));
        v.wheel_up(&t, 4);
        assert_eq!(state(&v), (0, 1, 3));
        v.wheel_up(&t, 4);
        assert_eq!(state(&v), (0, 1, 3));
    }

    #[test]
    fn scroll_y_keeps_offset() {
        let t = flat(10);
        let mut v = fresh(&t, 4);
        v.step_forward_by(&t, 2);
        v.scroll_to_y(&t, 4, 5);
        assert_eq!(state(&v), (5, 7, 8));
        v.scroll_to_y(&t, 4, 6);
        assert_eq!(state(&v), (6, 8, 9));
        v.scroll_to_y(&t, 4, 7);
        assert_eq!(state(&v), (6, 8, 9));
        v.scroll_to_x(30, 12);
        assert_eq!(v.x_offset, 12);
    }

    #[test]
    fn adjust_after_shrink() {
        let mut t = flat(3);
        let a = t.children(Parent::Root)[0];
        for i in 0..6 {
            t.append(a.into(), vec![i.to_string()], ()).unwrap();
        }
        t.expand(a);
        let mut v = fresh(&t, 4);
        v.end(&t);
        v.adjust(&t, 4);
        assert_eq!(state(&v), (5, 8, 8));
        let anchors = v.anchors(&t);
        t.collapse(a);
        v.restore(&t, anchors, 4);
        assert_eq!(state(&v), (0, 2, 2));
    }

    #[test]
    fn restore_falls_back_to_row() {
        let mut t = flat(6);
        let mut v = fresh(&t, 3);
        v.end(&t);
        let anchors = v.anchors(&t);
        let last = t.children(Parent::Root)[5];
        t.remove(last);
        v.restore(&t, anchors, 3);
        assert_eq!(state(&v), (2, 4, 4));
        t.clear();
        v.restore(&t, anchors, 3);
        assert_eq!(state(&v), (0, 0, 0));
    }
}
