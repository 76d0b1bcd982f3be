//! A splay tree: a self-adjusting binary search tree. Every access (`insert`, `contains`,
//! `remove`) rotates the node it touched all the way up to the root using zig, zig-zig and
//! zig-zag steps. No single operation is guaranteed to be fast but any sequence of `m`
//! operations costs `O(m lg n)`, and recently used keys stay near the top.
//!
//! Because lookups restructure the tree, [`Tree::contains`] takes `&mut self`.
//!
//! # Examples
//!
//! ```
//! use classic_ds::splay::Tree;
//!
//! let mut tree: Tree<_> = (1..=5).collect();
//!
//! // Looking a key up splays it to the root.
//! assert!(tree.contains(&2));
//! assert_eq!(tree.root(), Some(&2));
//!
//! // A miss splays the last node the search looked at.
//! assert!(!tree.contains(&10));
//! assert_eq!(tree.root(), Some(&5));
//! ```

use std::fmt;

use log::trace;

use crate::error::Result;
use crate::nav;
use crate::ordered::{NodeId, OrderedTree};

/// A splay tree. Duplicate keys are allowed and each copy is counted.
#[derive(Clone)]
pub struct Tree<K> {
    inner: OrderedTree<K, ()>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            inner: OrderedTree::new(),
        }
    }

    /// The number of keys stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// The key at the root, i.e. the most recently accessed one.
    pub fn root(&self) -> Option<&K> {
        self.inner.root().map(|root| &self.inner[root].key)
    }

    /// Inserts `key` and splays the new node to the root.
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let node = self.inner.insert(key, ());
        self.splay(node);
    }

    /// Whether some node holds `key`. The node found, or on a miss the last node the search
    /// examined, is splayed to the root.
    pub fn contains(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let (found, last) = self.inner.find_or_last(key);
        if let Some(node) = found.or(last) {
            self.splay(node);
        }
        found.is_some()
    }

    /// Removes one node holding `key` and returns the stored key.
    ///
    /// The node is first splayed to the root. If it has two children, its in-order
    /// predecessor is spliced out and moved into its place. On a miss the last node examined
    /// is splayed, exactly as for [`contains`](Self::contains), and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::splay::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let (found, last) = self.inner.find_or_last(key);
        let Some(node) = found else {
            if let Some(last) = last {
                self.splay(last);
            }
            return None;
        };

        self.splay(node);
        let removed = match (self.inner[node].left, self.inner[node].right) {
            (Some(left), Some(_)) => {
                let predecessor = self.inner.max_node(left);
                let predecessor_key = self.inner.splice(predecessor);
                std::mem::replace(&mut self.inner[node].key, predecessor_key)
            }
            _ => self.inner.splice(node),
        };
        Some(removed)
    }

    /// The smallest key in the tree. Does not splay.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`](crate::Error::Empty) if the tree holds nothing.
    pub fn minimum(&self) -> Result<&K> {
        self.inner.minimum()
    }

    /// The largest key in the tree. Does not splay.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`](crate::Error::Empty) if the tree holds nothing.
    pub fn maximum(&self) -> Result<&K> {
        self.inner.maximum()
    }

    /// The key that follows `key` in order, or `None` if `key` is the maximum. Does not
    /// splay.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`](crate::Error::KeyNotFound) if `key` isn't in the tree.
    pub fn successor(&self, key: &K) -> Result<Option<&K>>
    where
        K: Ord,
    {
        self.inner.successor(key)
    }

    /// Rotates `node` up until it is the root.
    fn splay(&mut self, node: NodeId) {
        let tree = &mut self.inner;
        while let Some(parent) = tree[node].parent {
            let node_is_left = nav::is_left_child(tree, node);
            let Some(grandparent) = tree[parent].parent else {
                trace!("zig");
                if node_is_left {
                    nav::rotate_right(tree, parent);
                } else {
                    nav::rotate_left(tree, parent);
                }
                break;
            };

            match (node_is_left, nav::is_left_child(tree, parent)) {
                (true, true) => {
                    trace!("zig-zig");
                    nav::rotate_right(tree, grandparent);
                    nav::rotate_right(tree, parent);
                }
                (false, false) => {
                    trace!("zig-zig");
                    nav::rotate_left(tree, grandparent);
                    nav::rotate_left(tree, parent);
                }
                (true, false) => {
                    trace!("zig-zag");
                    nav::rotate_right(tree, parent);
                    nav::rotate_left(tree, grandparent);
                }
                (false, true) => {
                    trace!("zig-zag");
                    nav::rotate_left(tree, parent);
                    nav::rotate_right(tree, grandparent);
                }
            }
        }
    }
}

impl<K: PartialEq> PartialEq for Tree<K> {
    /// Shape and keys must match node for node.
    fn eq(&self, other: &Self) -> bool {
        nav::same_shape(&self.inner, &other.inner)
    }
}

impl<K: Eq> Eq for Tree<K> {}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.render(f, |_| "")
    }
}
