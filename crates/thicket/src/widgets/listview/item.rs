//! The item tree behind a list view.
//!
//! Items live in an arena keyed by [`ItemId`]. A parent owns the ordered
//! ids of its children; the child only keeps a back-reference. Each item
//! caches how many rows its subtree occupies when flattened, and every
//! structural change marks the cache dirty along the ancestor chain so the
//! counts are recomputed lazily on the next query.
use std::cell::Cell;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Stable handle to an item in a list view.
    pub struct ItemId;
}

/// The container an item is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    /// Top level of the list.
    Root,
    /// Another item.
    Item(ItemId),
}

impl From<ItemId> for Parent {
    fn from(id: ItemId) -> Self {
        Self::Item(id)
    }
}

/// One row of a hierarchical list.
#[derive(Debug)]
pub struct ListItem<P> {
    /// Column text, indexed from 0 internally.
    columns: Vec<String>,
    /// User payload.
    payload: P,
    /// Back-reference to the container.
    parent: Parent,
    /// Child ids in display order.
    children: Vec<ItemId>,
    /// Are the children shown?
    expanded: bool,
    /// Cached row count of the subtree.
    visible_lines: Cell<usize>,
    /// The cached count is stale.
    dirty: Cell<bool>,
}

impl<P> ListItem<P> {
    /// Construct a detached item.
    fn new(columns: Vec<String>, payload: P, parent: Parent) -> Self {
        Self {
            columns,
            payload,
            parent,
            children: Vec::new(),
            expanded: false,
            visible_lines: Cell::new(1),
            dirty: Cell::new(false),
        }
    }

    /// Text of a 1-based column. Out of range yields the empty string.
    pub fn text(&self, column: usize) -> &str {
        column
            .checked_sub(1)
            .and_then(|i| self.columns.get(i))
            .map_or("", String::as_str)
    }

    /// All column texts.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// The container this item is attached to.
    pub fn parent(&self) -> Parent {
        self.parent
    }

    /// Child ids in display order.
    pub fn children(&self) -> &[ItemId] {
        &self.children
    }

    /// Does the item have children?
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty()
    }

    /// Are the children shown?
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Does advancing from this item descend into its children?
    pub(super) fn opens(&self) -> bool {
        self.expanded && !self.children.is_empty()
    }
}

/// An arena of list items plus the ordered top-level ids.
#[derive(Debug)]
pub struct ItemTree<P> {
    /// All items.
    items: SlotMap<ItemId, ListItem<P>>,
    /// Top-level ids in display order.
    roots: Vec<ItemId>,
}

impl<P> Default for ItemTree<P> {
    fn default() -> Self {
        Self {
            items: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }
}

impl<P> ItemTree<P> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an item.
    pub fn get(&self, id: ItemId) -> Option<&ListItem<P>> {
        self.items.get(id)
    }

    /// Does the handle refer to a live item?
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Total number of items, hidden ones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is the tree empty?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Does the container exist?
    pub fn has_parent(&self, parent: Parent) -> bool {
        match parent {
            Parent::Root => true,
            Parent::Item(id) => self.contains(id),
        }
    }

    /// Children of a container. Unknown containers have none.
    pub fn children(&self, parent: Parent) -> &[ItemId] {
        match parent {
            Parent::Root => &self.roots,
            Parent::Item(id) => self.items.get(id).map_or(&[], |i| i.children.as_slice()),
        }
    }

    /// The container of an item.
    pub fn parent(&self, id: ItemId) -> Option<Parent> {
        self.items.get(id).map(|i| i.parent)
    }

    /// Attach a new item at the end of `parent`'s children. Returns `None`
    /// if the parent does not exist, leaving the tree untouched.
    pub fn append(&mut self, parent: Parent, columns: Vec<String>, payload: P) -> Option<ItemId> {
        if !self.has_parent(parent) {
            return None;
        }
        let id = self.items.insert(ListItem::new(columns, payload, parent));
        match parent {
            Parent::Root => self.roots.push(id),
            Parent::Item(pid) => {
                if let Some(p) = self.items.get_mut(pid) {
                    p.children.push(id);
                }
                self.invalidate(pid);
            }
        }
        Some(id)
    }

    /// Text of a 1-based column of an item.
    pub fn text(&self, id: ItemId, column: usize) -> &str {
        self.items.get(id).map_or("", |i| i.text(column))
    }

    /// Replace the text of a 1-based column. Returns false, changing
    /// nothing, if the item or column does not exist.
    pub fn set_text(&mut self, id: ItemId, column: usize, text: String) -> bool {
        let Some(slot) = self
            .items
            .get_mut(id)
            .and_then(|i| column.checked_sub(1).and_then(|c| i.columns.get_mut(c)))
        else {
            return false;
        };
        *slot = text;
        true
    }

    /// Number of item ancestors, computed by walking the parent links.
    pub fn depth(&self, id: ItemId) -> usize {
        let mut depth = 0;
        let mut cur = self.parent(id);
        while let Some(Parent::Item(pid)) = cur {
            depth += 1;
            cur = self.parent(pid);
        }
        depth
    }

    /// Show an item's children. Returns true if anything changed.
    pub fn expand(&mut self, id: ItemId) -> bool {
        match self.items.get_mut(id) {
            Some(i) if !i.expanded && !i.children.is_empty() => {
                i.expanded = true;
                self.invalidate(id);
                true
            }
            _ => false,
        }
    }

    /// Hide an item's children. Returns true if anything changed.
    pub fn collapse(&mut self, id: ItemId) -> bool {
        match self.items.get_mut(id) {
            Some(i) if i.expanded => {
                i.expanded = false;
                i.visible_lines.set(1);
                i.dirty.set(false);
                if let Parent::Item(pid) = i.parent {
                    self.invalidate(pid);
                }
                true
            }
            _ => false,
        }
    }

    /// Number of rows the item's subtree occupies: 1 when collapsed or a
    /// leaf, otherwise 1 plus the children's counts.
    pub fn visible_line_count(&self, id: ItemId) -> usize {
        let Some(item) = self.items.get(id) else {
            return 0;
        };
        if !item.dirty.get() {
            return item.visible_lines.get();
        }
        let n = if item.opens() {
            1 + item
                .children
                .iter()
                .map(|c| self.visible_line_count(*c))
                .sum::<usize>()
        } else {
            1
        };
        item.visible_lines.set(n);
        item.dirty.set(false);
        n
    }

    /// Mark an item and all its ancestors stale.
    fn invalidate(&self, id: ItemId) {
        let mut cur = Some(id);
        while let Some(i) = cur.and_then(|id| self.items.get(id)) {
            i.dirty.set(true);
            cur = match i.parent {
                Parent::Item(pid) => Some(pid),
                Parent::Root => None,
            };
        }
    }

    /// Total number of visible rows.
    pub fn count(&self) -> usize {
        self.roots.iter().map(|id| self.visible_line_count(*id)).sum()
    }

    /// Is every ancestor of the item expanded?
    pub fn is_visible(&self, id: ItemId) -> bool {
        let mut cur = self.parent(id);
        loop {
            match cur {
                Some(Parent::Root) => return true,
                Some(Parent::Item(pid)) => match self.items.get(pid) {
                    Some(p) if p.expanded => cur = Some(p.parent),
                    _ => return false,
                },
                None => return false,
            }
        }
    }

    /// Remove an item and its subtree. Returns the removed payloads in
    /// depth-first order, or an empty list for an unknown id.
    pub fn remove(&mut self, id: ItemId) -> Vec<P> {
        let Some(parent) = self.parent(id) else {
            return Vec::new();
        };
        match parent {
            Parent::Root => self.roots.retain(|c| *c != id),
            Parent::Item(pid) => {
                if let Some(p) = self.items.get_mut(pid) {
                    p.children.retain(|c| *c != id);
                    if p.children.is_empty() {
                        p.expanded = false;
                    }
                }
                self.invalidate(pid);
            }
        }
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(item) = self.items.remove(cur) {
                stack.extend(item.children.iter().rev());
                out.push(item.payload);
            }
        }
        out
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
        self.roots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(s: &str) -> Vec<String> {
        vec![s.to_string()]
    }

    fn tree() -> (ItemTree<()>, ItemId, ItemId, ItemId) {
        let mut t = ItemTree::new();
        let a = t.append(Parent::Root, cols("a"), ()).unwrap();
        let b = t.append(a.into(), cols("b"), ()).unwrap();
        let c = t.append(b.into(), cols("c"), ()).unwrap();
        t.append(Parent::Root, cols("d"), ()).unwrap();
        (t, a, b, c)
    }

    #[test]
    fn counts_follow_expansion() {
        let (mut t, a, b, _) = tree();
        assert_eq!(t.count(), 2);
        assert!(t.expand(a));
        assert_eq!(t.visible_line_count(a), 2);
        assert_eq!(t.count(), 3);
        assert!(t.expand(b));
        assert_eq!(t.visible_line_count(a), 3);
        assert_eq!(t.count(), 4);
        assert!(t.collapse(b));
        assert_eq!(t.count(), 3);
        assert!(t.collapse(a));
        assert_eq!(t.count(), 2);
        assert!(t.expand(a));
        assert_eq!(t.count(), 3);
    }

    #[test]
    fn expand_collapse_idempotent() {
        let (mut t, a, _, c) = tree();
        assert!(!t.collapse(a));
        assert!(!t.expand(c));
        assert!(t.expand(a));
        assert!(!t.expand(a));
        assert!(t.get(a).unwrap().is_expanded());
    }

    #[test]
    fn append_invalidates_ancestors() {
        let (mut t, a, b, c) = tree();
        t.expand(a);
        t.expand(b);
        assert_eq!(t.count(), 4);
        t.append(c.into(), cols("e"), ()).unwrap();
        t.expand(c);
        assert_eq!(t.visible_line_count(a), 4);
        t.append(b.into(), cols("f"), ()).unwrap();
        assert_eq!(t.count(), 6);
    }

    #[test]
    fn text_and_depth() {
        let (mut t, a, b, c) = tree();
        assert_eq!(t.text(a, 1), "a");
        assert_eq!(t.text(a, 0), "");
        assert_eq!(t.text(a, 2), "");
        assert!(t.set_text(b, 1, "bee".into()));
        assert_eq!(t.text(b, 1), "bee");
        assert!(!t.set_text(b, 2, "x".into()));
        assert_eq!(t.get(b).unwrap().columns(), ["bee"]);
        assert_eq!((t.depth(a), t.depth(b), t.depth(c)), (0, 1, 2));
    }

    #[test]
    fn stale_parent_rejected() {
        let (mut t, a, b, _) = tree();
        let n = t.len();
        t.remove(b);
        assert_eq!(t.append(b.into(), cols("x"), ()), None);
        assert_eq!(t.len(), n - 2);
        assert!(!t.get(a).unwrap().is_expandable());
    }

    #[test]
    fn visibility() {
        let (mut t, a, b, c) = tree();
        assert!(t.is_visible(a));
        assert!(!t.is_visible(b));
        t.expand(a);
        assert!(t.is_visible(b));
        assert!(!t.is_visible(c));
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.count(), 0);
    }
}
