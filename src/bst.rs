//! A plain, unbalanced binary search tree. Nothing is done to keep it shallow so inserting
//! keys in sorted order degrades it into a linked list; see [`rbt`](crate::rbt) and
//! [`splay`](crate::splay) for trees that fight back.
//!
//! # Examples
//!
//! ```
//! use classic_ds::bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! tree.insert(3);
//! assert!(tree.contains(&1));
//! assert_eq!(tree.successor(&1), Ok(Some(&3)));
//!
//! // Removing a key hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(!tree.contains(&1));
//! ```

use std::fmt;

use crate::error::Result;
use crate::nav;
use crate::ordered::OrderedTree;

/// An unbalanced Binary Search Tree. Duplicate keys are allowed and each copy is counted.
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

    /// Removes every key. Works iteratively, so a degenerate tree can't blow the stack.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Inserts `key`. Ties go to the right, so inserting an existing key adds a second copy.
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.inner.insert(key, ());
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.inner.find(key).is_some()
    }

    /// Removes one node holding `key` and returns the stored key. Returns `None` if no node
    /// holds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::bst::Tree;
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
        let node = self.inner.find(key)?;
        Some(self.inner.remove_node(node))
    }

    /// The smallest key in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`](crate::Error::Empty) if the tree holds nothing.
    pub fn minimum(&self) -> Result<&K> {
        self.inner.minimum()
    }

    /// The largest key in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`](crate::Error::Empty) if the tree holds nothing.
    pub fn maximum(&self) -> Result<&K> {
        self.inner.maximum()
    }

    /// The key that follows `key` in order, or `None` if `key` is the maximum.
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

    /// Transforms every key in place, in ascending order, without moving any node.
    ///
    /// `f` must be strictly increasing (`a < b` implies `f(a) < f(b)`). The tree is not
    /// rebuilt, so any other `f` leaves keys in positions a search can no longer reach.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::bst::Tree;
    ///
    /// let mut tree: Tree<_> = [1, 2, 3].into_iter().collect();
    /// tree.map_keys(|key| key * 2);
    ///
    /// assert!(tree.contains(&4));
    /// assert!(!tree.contains(&3));
    /// ```
    pub fn map_keys(&mut self, f: impl FnMut(&K) -> K) {
        self.inner.map_keys(f);
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
