//! A red-black tree. Every node carries a [`Color`] and after every `insert` or `remove` the
//! tree satisfies:
//!
//! 1. Every node is red or black.
//! 2. The root is black.
//! 3. Every nil leaf is (conceptually) black.
//! 4. A red node never has a red parent.
//! 5. Every path from a node down to a nil leaf passes through the same number of black
//!    nodes.
//!
//! Together these keep the height within `2 * lg(n + 1)`.
//!
//! # Examples
//!
//! ```
//! use classic_ds::rbt::{Color, Tree};
//!
//! // Ascending inserts would make a plain BST a linked list.
//! let tree: Tree<_> = (1..=7).collect();
//!
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.root_color(), Some(Color::Black));
//! assert!(tree.contains(&4));
//! assert_eq!(tree.successor(&4), Ok(Some(&5)));
//! ```

use std::fmt;

use log::debug;

use crate::error::Result;
use crate::nav;
use crate::ordered::{Link, NodeId, OrderedTree};

/// The color tag of a red-black tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Freshly inserted nodes start red.
    Red,
    /// The root, and every nil leaf, is black.
    Black,
}

/// Nil leaves count as black.
fn color_of<K>(tree: &OrderedTree<K, Color>, node: Link) -> Color {
    node.map_or(Color::Black, |n| tree[n].meta)
}

/// A self-balancing binary search tree (specifically, a red-black tree). Duplicate keys are
/// allowed and each copy is counted.
#[derive(Clone)]
pub struct Tree<K> {
    inner: OrderedTree<K, Color>,
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

    /// Removes every key. Works iteratively, so even very deep trees are safe to clear.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// The color of the root, or `None` for an empty tree. Always `Some(Color::Black)` for a
    /// non-empty tree.
    pub fn root_color(&self) -> Option<Color> {
        self.inner.root().map(|root| self.inner[root].meta)
    }

    /// The number of black nodes on any path from the root to a nil leaf (not counting the
    /// leaf itself). Every such path agrees, so the leftmost one is followed.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut cursor = self.inner.root();
        while let Some(node) = cursor {
            if self.inner[node].meta == Color::Black {
                height += 1;
            }
            cursor = self.inner[node].left;
        }
        height
    }

    /// Inserts `key` and restores the red-black invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::rbt::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let node = self.inner.insert(key, Color::Red);
        self.fix_insert(node);

        if let Some(root) = self.inner.root() {
            self.inner[root].meta = Color::Black;
        }
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.inner.find(key).is_some()
    }

    /// Removes one node holding `key` and returns the stored key, restoring the red-black
    /// invariants. Returns `None` (and changes nothing) if no node holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::rbt::Tree;
    ///
    /// let mut tree: Tree<_> = [3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let target = self.inner.find(key)?;
        // The node that actually leaves the tree has at most one child: `target` itself, or
        // its in-order successor when `target` has two children.
        let unlinked = match (self.inner[target].left, self.inner[target].right) {
            (Some(_), Some(right)) => self.inner.min_node(right),
            _ => target,
        };

        if self.inner[unlinked].meta == Color::Black {
            match self.inner[unlinked].left.or(self.inner[unlinked].right) {
                // A black node with a single child must have a red leaf there.
                Some(child) => self.inner[child].meta = Color::Black,
                // Removing a black leaf shortens its paths; fix that while it's still linked.
                None => self.fix_remove(unlinked),
            }
        }

        let unlinked_key = self.inner.splice(unlinked);
        if unlinked == target {
            Some(unlinked_key)
        } else {
            Some(std::mem::replace(&mut self.inner[target].key, unlinked_key))
        }
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

    /// Walks the violation a red `node` may cause up the ancestor chain until the invariants
    /// hold again.
    fn fix_insert(&mut self, mut node: NodeId) {
        let tree = &mut self.inner;
        loop {
            let Some(parent) = tree[node].parent else {
                tree[node].meta = Color::Black;
                return;
            };
            if tree[parent].meta == Color::Black {
                return;
            }
            // A red parent is never the root so there is always a grandparent here.
            let grandparent =
                nav::grandparent(tree, Some(node)).expect("red parent => grandparent");

            match nav::uncle(tree, Some(node)) {
                Some(uncle) if tree[uncle].meta == Color::Red => {
                    debug!("fix-up: red uncle, recoloring and moving up");
                    tree[parent].meta = Color::Black;
                    tree[uncle].meta = Color::Black;
                    tree[grandparent].meta = Color::Red;
                    node = grandparent;
                }
                _ => {
                    let (mut node, mut parent) = (node, parent);
                    if nav::is_right_child(tree, node) && nav::is_left_child(tree, parent) {
                        debug!("fix-up: inner left-right case");
                        nav::rotate_left(tree, parent);
                        std::mem::swap(&mut node, &mut parent);
                    } else if nav::is_left_child(tree, node) && nav::is_right_child(tree, parent) {
                        debug!("fix-up: inner right-left case");
                        nav::rotate_right(tree, parent);
                        std::mem::swap(&mut node, &mut parent);
                    }

                    debug!("fix-up: straight case, rotating grandparent");
                    if nav::is_left_child(tree, node) {
                        nav::rotate_right(tree, grandparent);
                    } else {
                        nav::rotate_left(tree, grandparent);
                    }
                    tree[parent].meta = Color::Black;
                    tree[grandparent].meta = Color::Red;
                    return;
                }
            }
        }
    }

    /// `node` is a black node about to lose one black from every path through it. Pushes
    /// the missing black up (or absorbs it with rotations) until every path agrees again.
    ///
    /// Rotations here only ever happen at `node`'s parent or sibling, so a leaf passed in
    /// stays a leaf under the same parent and can be spliced out afterwards.
    fn fix_remove(&mut self, mut node: NodeId) {
        let tree = &mut self.inner;
        while tree[node].meta == Color::Black {
            let Some(parent) = tree[node].parent else {
                break;
            };
            debug!("delete fix-up at {:?}", node);

            if nav::is_left_child(tree, node) {
                // `node` is black so the other side has black height >= 1.
                let mut sibling = tree[parent].right.expect("black node => sibling");
                if tree[sibling].meta == Color::Red {
                    tree[sibling].meta = Color::Black;
                    tree[parent].meta = Color::Red;
                    nav::rotate_left(tree, parent);
                    sibling = tree[parent].right.expect("black node => sibling");
                }

                if color_of(tree, tree[sibling].left) == Color::Black
                    && color_of(tree, tree[sibling].right) == Color::Black
                {
                    tree[sibling].meta = Color::Red;
                    node = parent;
                } else {
                    if color_of(tree, tree[sibling].right) == Color::Black {
                        if let Some(near) = tree[sibling].left {
                            tree[near].meta = Color::Black;
                        }
                        tree[sibling].meta = Color::Red;
                        nav::rotate_right(tree, sibling);
                        sibling = tree[parent].right.expect("black node => sibling");
                    }
                    tree[sibling].meta = tree[parent].meta;
                    tree[parent].meta = Color::Black;
                    if let Some(far) = tree[sibling].right {
                        tree[far].meta = Color::Black;
                    }
                    nav::rotate_left(tree, parent);
                    break;
                }
            } else {
                let mut sibling = tree[parent].left.expect("black node => sibling");
                if tree[sibling].meta == Color::Red {
                    tree[sibling].meta = Color::Black;
                    tree[parent].meta = Color::Red;
                    nav::rotate_right(tree, parent);
                    sibling = tree[parent].left.expect("black node => sibling");
                }

                if color_of(tree, tree[sibling].left) == Color::Black
                    && color_of(tree, tree[sibling].right) == Color::Black
                {
                    tree[sibling].meta = Color::Red;
                    node = parent;
                } else {
                    if color_of(tree, tree[sibling].left) == Color::Black {
                        if let Some(near) = tree[sibling].right {
                            tree[near].meta = Color::Black;
                        }
                        tree[sibling].meta = Color::Red;
                        nav::rotate_left(tree, sibling);
                        sibling = tree[parent].left.expect("black node => sibling");
                    }
                    tree[sibling].meta = tree[parent].meta;
                    tree[parent].meta = Color::Black;
                    if let Some(far) = tree[sibling].left {
                        tree[far].meta = Color::Black;
                    }
                    nav::rotate_right(tree, parent);
                    break;
                }
            }
        }
        tree[node].meta = Color::Black;
    }
}

impl<K: PartialEq> PartialEq for Tree<K> {
    /// Trees are equal when they have the same shape with the same key at every node, not
    /// merely the same keys.
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

/// Draws the tree sideways. Red nodes are marked with `*`.
impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.render(f, |color| match color {
            Color::Red => "*",
            Color::Black => "",
        })
    }
}

#[cfg(test)]
impl<K> Tree<K> {
    /// Checks all five invariants plus parent links and returns the black height.
    fn assert_red_black(&self) -> usize {
        fn check<K>(tree: &OrderedTree<K, Color>, node: Link) -> usize {
            let Some(id) = node else {
                return 0;
            };
            if tree[id].meta == Color::Red {
                assert_eq!(color_of(tree, tree[id].left), Color::Black, "red-red");
                assert_eq!(color_of(tree, tree[id].right), Color::Black, "red-red");
            }
            let left = check(tree, tree[id].left);
            let right = check(tree, tree[id].right);
            assert_eq!(left, right, "black heights differ");
            left + usize::from(tree[id].meta == Color::Black)
        }

        self.inner.assert_links();
        assert_eq!(color_of(&self.inner, self.inner.root()), Color::Black);
        let height = check(&self.inner, self.inner.root());
        assert_eq!(height, self.black_height());
        height
    }
}
