//! The unbalanced binary search tree every tree in this crate is built on.
//!
//! Nodes live in a slot table and refer to each other by [`NodeId`]. A node's `left` and
//! `right` links are the owning edges of the tree while `parent` is only ever used to walk
//! back up. Because no node owns another through a pointer, rotations can rewrite all six
//! links they touch without fighting the borrow checker, and dropping a tree of any shape
//! never recurses.
//!
//! The per-node `meta` field is where refinements keep their extra state: the red-black tree
//! stores a [`Color`](crate::rbt::Color) there, the plain and splay trees store `()`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

use log::debug;

use crate::error::{Error, Result};

/// Handle to a slot in an [`OrderedTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// An optional edge between two nodes. `None` is the nil leaf.
pub(crate) type Link = Option<NodeId>;

#[derive(Clone, Debug)]
pub(crate) struct Node<K, M> {
    pub(crate) key: K,
    pub(crate) meta: M,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

/// Arena-backed BST. Keys equal to a node's key are routed into its right subtree, so
/// duplicates are kept (and counted) rather than merged.
#[derive(Clone)]
pub(crate) struct OrderedTree<K, M> {
    slots: Vec<Option<Node<K, M>>>,
    // Released slots, reused before the table grows.
    free: Vec<NodeId>,
    root: Link,
    len: usize,
}

impl<K, M> Default for OrderedTree<K, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, M> Index<NodeId> for OrderedTree<K, M> {
    type Output = Node<K, M>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.slots[id.0]
            .as_ref()
            .expect("live link points at a released slot")
    }
}

impl<K, M> IndexMut<NodeId> for OrderedTree<K, M> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.slots[id.0]
            .as_mut()
            .expect("live link points at a released slot")
    }
}

impl<K, M> OrderedTree<K, M> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    fn alloc(&mut self, key: K, meta: M, parent: Link) -> NodeId {
        let node = Node {
            key,
            meta,
            parent,
            left: None,
            right: None,
        };
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, M> {
        let node = self.slots[id.0].take().expect("slot released twice");
        self.free.push(id);
        node
    }

    /// Makes whatever owned `old` (the `parent`'s child slot, or the root slot when `parent`
    /// is `None`) own `new` instead, and points `new` back at `parent`.
    pub(crate) fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(p) => {
                if self[p].left == Some(old) {
                    self[p].left = new;
                } else {
                    self[p].right = new;
                }
            }
        }
        if let Some(new) = new {
            self[new].parent = parent;
        }
    }

    /// Hangs a new leaf holding `key` where a search for it falls off the tree and returns its
    /// handle. Never rebalances.
    pub(crate) fn insert(&mut self, key: K, meta: M) -> NodeId
    where
        K: Ord,
    {
        let mut parent = None;
        let mut go_left = false;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            parent = Some(id);
            go_left = key < self[id].key;
            cursor = if go_left { self[id].left } else { self[id].right };
        }

        let id = self.alloc(key, meta, parent);
        match parent {
            None => self.root = Some(id),
            Some(p) if go_left => self[p].left = Some(id),
            Some(p) => self[p].right = Some(id),
        }
        self.len += 1;
        id
    }

    pub(crate) fn find(&self, key: &K) -> Link
    where
        K: Ord,
    {
        self.find_or_last(key).0
    }

    /// Searches for `key`, returning the matching node (if any) together with the last node
    /// the search examined. On a hit both are the same node.
    pub(crate) fn find_or_last(&self, key: &K) -> (Link, Link)
    where
        K: Ord,
    {
        let mut last = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            last = Some(id);
            match key.cmp(&self[id].key) {
                Ordering::Equal => return (Some(id), last),
                Ordering::Less => cursor = self[id].left,
                Ordering::Greater => cursor = self[id].right,
            }
        }
        (None, last)
    }

    pub(crate) fn min_node(&self, from: NodeId) -> NodeId {
        let mut node = from;
        while let Some(left) = self[node].left {
            node = left;
        }
        node
    }

    pub(crate) fn max_node(&self, from: NodeId) -> NodeId {
        let mut node = from;
        while let Some(right) = self[node].right {
            node = right;
        }
        node
    }

    /// The in-order successor of `id`: the minimum of its right subtree if it has one,
    /// otherwise the first ancestor reached by stepping up out of a left subtree.
    pub(crate) fn successor_node(&self, id: NodeId) -> Link {
        if let Some(right) = self[id].right {
            return Some(self.min_node(right));
        }
        let mut node = id;
        let mut parent = self[id].parent;
        while let Some(p) = parent {
            if self[p].right != Some(node) {
                break;
            }
            node = p;
            parent = self[p].parent;
        }
        parent
    }

    /// Unlinks a node with at most one child, promoting that child (if any) into its place,
    /// and returns the node's key.
    pub(crate) fn splice(&mut self, id: NodeId) -> K {
        let (left, right, parent) = (self[id].left, self[id].right, self[id].parent);
        debug_assert!(
            left.is_none() || right.is_none(),
            "only nodes with at most one child can be spliced out"
        );
        self.replace_child(parent, id, left.or(right));
        self.len -= 1;
        self.release(id).key
    }

    /// Removes the key stored at `id` and returns it.
    ///
    /// A node with two children is never unlinked directly: its in-order successor (which has
    /// no left child) is spliced out instead and its key moved into `id`.
    pub(crate) fn remove_node(&mut self, id: NodeId) -> K {
        match (self[id].left, self[id].right) {
            (Some(_), Some(right)) => {
                let successor = self.min_node(right);
                let successor_key = self.splice(successor);
                std::mem::replace(&mut self[id].key, successor_key)
            }
            _ => self.splice(id),
        }
    }

    pub(crate) fn minimum(&self) -> Result<&K> {
        let root = self.root.ok_or(Error::Empty)?;
        Ok(&self[self.min_node(root)].key)
    }

    pub(crate) fn maximum(&self) -> Result<&K> {
        let root = self.root.ok_or(Error::Empty)?;
        Ok(&self[self.max_node(root)].key)
    }

    pub(crate) fn successor(&self, key: &K) -> Result<Option<&K>>
    where
        K: Ord,
    {
        let id = self.find(key).ok_or(Error::KeyNotFound)?;
        Ok(self.successor_node(id).map(|s| &self[s].key))
    }

    /// Replaces every key with `f` applied to it, visiting keys in order. Links are left
    /// alone, so `f` must keep the keys in the same order.
    pub(crate) fn map_keys(&mut self, mut f: impl FnMut(&K) -> K) {
        let mut cursor = self.root.map(|root| self.min_node(root));
        while let Some(id) = cursor {
            let key = f(&self[id].key);
            self[id].key = key;
            cursor = self.successor_node(id);
        }
    }

    /// Releases every node without recursing: while the current subtree root has a left
    /// child, rotate it right; once it has none, release it and continue with its right
    /// subtree. Keys are dropped in ascending order.
    pub(crate) fn clear(&mut self) {
        let mut released = 0usize;
        let mut cursor = self.root.take();
        while let Some(id) = cursor {
            match self[id].left {
                Some(left) => {
                    // Parent links are not kept up to date here; every node is about to go.
                    let inner = self[left].right;
                    self[id].left = inner;
                    self[left].right = Some(id);
                    cursor = Some(left);
                }
                None => {
                    cursor = self[id].right;
                    self.release(id);
                    released += 1;
                }
            }
        }
        debug!("cleared tree, released {} nodes", released);

        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }

    /// Walks the keys in order using successor steps, so no stack is needed.
    pub(crate) fn iter(&self) -> InOrder<'_, K, M> {
        InOrder {
            tree: self,
            next: self.root.map(|root| self.min_node(root)),
        }
    }

    /// Draws the tree sideways, one node per line, using `mark` to decorate each key.
    pub(crate) fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        mark: impl Fn(&M) -> &'static str,
    ) -> fmt::Result
    where
        K: fmt::Display,
    {
        let Some(root) = self.root else {
            return writeln!(f, "(empty)");
        };

        let mut pending = vec![(root, String::new(), false)];
        while let Some((id, prefix, is_left)) = pending.pop() {
            let node = &self[id];
            let branch = if is_left { "├──" } else { "└──" };
            writeln!(f, "{}{}{}{}", prefix, branch, node.key, mark(&node.meta))?;

            let child_prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
            // Left is drawn first, so it goes on the stack last.
            if let Some(right) = node.right {
                pending.push((right, child_prefix.clone(), false));
            }
            if let Some(left) = node.left {
                pending.push((left, child_prefix, true));
            }
        }
        Ok(())
    }
}

pub(crate) struct InOrder<'a, K, M> {
    tree: &'a OrderedTree<K, M>,
    next: Link,
}

impl<'a, K, M> Iterator for InOrder<'a, K, M> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.successor_node(id);
        Some(&self.tree[id].key)
    }
}

#[cfg(test)]
impl<K, M> OrderedTree<K, M> {
    /// Follows a path of `L`/`R` steps from the root and returns the key found there.
    pub(crate) fn key_at(&self, path: &str) -> Option<&K> {
        let mut node = self.root?;
        for step in path.chars() {
            node = match step {
                'L' => self[node].left?,
                'R' => self[node].right?,
                other => panic!("unknown step {:?}", other),
            };
        }
        Some(&self[node].key)
    }

    /// Asserts that every reachable child points back at the node owning it, that the root
    /// has no parent and that `len` matches the number of reachable nodes.
    pub(crate) fn assert_links(&self) {
        let mut reachable = 0;
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();
        if let Some(root) = self.root {
            assert_eq!(self[root].parent, None, "root has a parent");
        }
        while let Some(id) = pending.pop() {
            reachable += 1;
            for child in [self[id].left, self[id].right].into_iter().flatten() {
                assert_eq!(self[child].parent, Some(id), "child does not point at owner");
                pending.push(child);
            }
        }
        assert_eq!(reachable, self.len);
    }

    pub(crate) fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }
}
