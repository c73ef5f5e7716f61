//! A cursor over the flattened row order of an [`ItemTree`].
//!
//! The cursor is detached from the tree it walks: every movement takes the
//! tree by reference, so a list view can keep several cursors alongside the
//! tree it owns. The ancestor stack holds the places to return to when a
//! subtree is exhausted, and the position counts rows from the top.
use super::item::{ItemId, ItemTree, ListItem, Parent};

/// A child slot in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Place {
    /// Container.
    parent: Parent,
    /// Index into the container's children.
    index: usize,
}

/// A cursor over visible rows.
#[derive(Debug, Clone)]
pub struct ListIterator {
    /// Where the cursor points.
    here: Place,
    /// Places of the expanded ancestors we are inside, outermost first.
    stack: Vec<Place>,
    /// Absolute row number.
    position: usize,
}

impl PartialEq for ListIterator {
    fn eq(&self, other: &Self) -> bool {
        self.here == other.here
    }
}

impl Eq for ListIterator {}

impl Default for ListIterator {
    fn default() -> Self {
        Self::begin()
    }
}

impl ListIterator {
    /// A cursor on the first row.
    pub fn begin() -> Self {
        Self {
            here: Place {
                parent: Parent::Root,
                index: 0,
            },
            stack: Vec::new(),
            position: 0,
        }
    }

    /// A cursor one past the last row.
    pub fn end<P>(tree: &ItemTree<P>) -> Self {
        Self {
            here: Place {
                parent: Parent::Root,
                index: tree.children(Parent::Root).len(),
            },
            stack: Vec::new(),
            position: tree.count(),
        }
    }

    /// A cursor on the row that shows `id`: the item itself if it is
    /// visible, otherwise its outermost collapsed ancestor.
    pub fn at<P>(tree: &ItemTree<P>, id: ItemId) -> Option<Self> {
        let mut chain = vec![id];
        let mut cur = tree.parent(id)?;
        while let Parent::Item(pid) = cur {
            chain.push(pid);
            cur = tree.parent(pid)?;
        }

        let mut it = Self::begin();
        let mut parent = Parent::Root;
        while let Some(node) = chain.pop() {
            let siblings = tree.children(parent);
            let index = siblings.iter().position(|c| *c == node)?;
            it.position += siblings[..index]
                .iter()
                .map(|c| tree.visible_line_count(*c))
                .sum::<usize>();
            it.here = Place { parent, index };
            if chain.is_empty() || !tree.get(node).is_some_and(ListItem::opens) {
                break;
            }
            it.stack.push(it.here);
            it.position += 1;
            parent = Parent::Item(node);
        }
        Some(it)
    }

    /// The item under the cursor, or `None` past the end.
    pub fn item<P>(&self, tree: &ItemTree<P>) -> Option<ItemId> {
        tree.children(self.here.parent).get(self.here.index).copied()
    }

    /// Absolute row number.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Is the cursor past the last row?
    pub fn is_end<P>(&self, tree: &ItemTree<P>) -> bool {
        self.item(tree).is_none()
    }

    /// Move to the next row. Does nothing past the end.
    pub fn advance<P>(&mut self, tree: &ItemTree<P>) {
        let Some(id) = self.item(tree) else {
            return;
        };
        if tree.get(id).is_some_and(ListItem::opens) {
            self.stack.push(self.here);
            self.here = Place {
                parent: Parent::Item(id),
                index: 0,
            };
        } else {
            self.here.index += 1;
            while self.here.index >= tree.children(self.here.parent).len() {
                let Some(up) = self.stack.pop() else {
                    break;
                };
                self.here = Place {
                    index: up.index + 1,
                    ..up
                };
            }
        }
        self.position += 1;
    }

    /// Move to the previous row. Does nothing on the first row.
    pub fn retreat<P>(&mut self, tree: &ItemTree<P>) {
        if self.here.index == 0 {
            if let Some(up) = self.stack.pop() {
                self.here = up;
                self.position = self.position.saturating_sub(1);
            }
            return;
        }
        self.here.index -= 1;
        self.position = self.position.saturating_sub(1);
        while let Some(id) = self.item(tree) {
            let Some(item) = tree.get(id).filter(|i| i.opens()) else {
                break;
            };
            self.stack.push(self.here);
            self.here = Place {
                parent: Parent::Item(id),
                index: item.children().len() - 1,
            };
        }
    }

    /// Advance `n` rows, one at a time.
    pub fn advance_by<P>(&mut self, tree: &ItemTree<P>, n: usize) {
        for _ in 0..n {
            self.advance(tree);
        }
    }

    /// Retreat `n` rows, one at a time.
    pub fn retreat_by<P>(&mut self, tree: &ItemTree<P>, n: usize) {
        for _ in 0..n {
            self.retreat(tree);
        }
    }

    /// Move to the row of the enclosing item. Does nothing at the top level.
    pub fn to_parent<P>(&mut self, tree: &ItemTree<P>) {
        let Some(target) = self.stack.last().copied() else {
            return;
        };
        while self.here != target && !self.stack.is_empty() {
            self.retreat(tree);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// a(b(c), e), f, with everything expanded.
    fn tree() -> (ItemTree<()>, Vec<ItemId>) {
        let mut t = ItemTree::new();
        let a = t.append(Parent::Root, vec!["a".into()], ()).unwrap();
        let b = t.append(a.into(), vec!["b".into()], ()).unwrap();
        let c = t.append(b.into(), vec!["c".into()], ()).unwrap();
        let e = t.append(a.into(), vec!["e".into()], ()).unwrap();
        let f = t.append(Parent::Root, vec!["f".into()], ()).unwrap();
        t.expand(a);
        t.expand(b);
        (t, vec![a, b, c, e, f])
    }

    fn walk(t: &ItemTree<()>) -> Vec<(usize, String)> {
        let mut it = ListIterator::begin();
        let mut out = vec![];
        while let Some(id) = it.item(t) {
            out.push((it.position(), t.text(id, 1).to_string()));
            it.advance(t);
        }
        out
    }

    #[test]
    fn flattens_in_order() {
        let (t, _) = tree();
        let names: Vec<_> = walk(&t).into_iter().map(|(_, s)| s).collect();
        assert_eq!(names, ["a", "b", "c", "e", "f"]);
        assert_eq!(walk(&t).last().unwrap().0, 4);
    }

    #[test]
    fn skips_collapsed() {
        let (mut t, ids) = tree();
        t.collapse(ids[1]);
        let names: Vec<_> = walk(&t).into_iter().map(|(_, s)| s).collect();
        assert_eq!(names, ["a", "b", "e", "f"]);
        t.collapse(ids[0]);
        assert_eq!(walk(&t).len(), 2);
    }

    #[test]
    fn unwinds_several_levels() {
        let (t, ids) = tree();
        let mut it = ListIterator::at(&t, ids[2]).unwrap();
        assert_eq!(it.position(), 2);
        it.advance(&t);
        assert_eq!(it.item(&t), Some(ids[3]));
        it.advance(&t);
        assert_eq!(it.item(&t), Some(ids[4]));
        it.advance(&t);
        assert!(it.is_end(&t));
        assert_eq!(it, ListIterator::end(&t));
        it.advance(&t);
        assert_eq!(it.position(), 5);
    }

    #[test]
    fn retreat_mirrors_advance() {
        let (t, ids) = tree();
        let mut it = ListIterator::end(&t);
        let mut seen = vec![];
        for _ in 0..5 {
            it.retreat(&t);
            seen.push((it.position(), it.item(&t).unwrap()));
        }
        assert_eq!(
            seen,
            vec![(4, ids[4]), (3, ids[3]), (2, ids[2]), (1, ids[1]), (0, ids[0])]
        );
        it.retreat(&t);
        assert_eq!(it.position(), 0);
        assert_eq!(it, ListIterator::begin());
    }

    #[test]
    fn step_by() {
        let (t, ids) = tree();
        let mut it = ListIterator::begin();
        it.advance_by(&t, 3);
        assert_eq!(it.item(&t), Some(ids[3]));
        it.retreat_by(&t, 2);
        assert_eq!(it.item(&t), Some(ids[1]));
        assert_eq!(it.position(), 1);
    }

    #[test]
    fn parent() {
        let (t, ids) = tree();
        let mut it = ListIterator::at(&t, ids[3]).unwrap();
        it.to_parent(&t);
        assert_eq!(it.item(&t), Some(ids[0]));
        assert_eq!(it.position(), 0);
        it.to_parent(&t);
        assert_eq!(it.position(), 0);

        let mut it = ListIterator::at(&t, ids[2]).unwrap();
        it.to_parent(&t);
        assert_eq!((it.item(&t), it.position()), (Some(ids[1]), 1));
    }

    #[test]
    fn at_hidden_item() {
        let (mut t, ids) = tree();
        t.collapse(ids[1]);
        let it = ListIterator::at(&t, ids[2]).unwrap();
        assert_eq!((it.item(&t), it.position()), (Some(ids[1]), 1));
        let it = ListIterator::at(&t, ids[4]).unwrap();
        assert_eq!(it.position(), 3);
        t.collapse(ids[0]);
        let it = ListIterator::at(&t, ids[3]).unwrap();
        assert_eq!((it.item(&t), it.position()), (Some(ids[0]), 0));
    }
}
