//! Navigation and rotation primitives shared by the balanced trees.
//!
//! Everything here works on node handles of any [`OrderedTree`], whatever metadata its nodes
//! carry. Absent handles are accepted where that makes the red-black case analysis read
//! naturally: the parent of nothing is nothing.

use log::trace;

use crate::ordered::{Link, NodeId, OrderedTree};

pub(crate) fn parent<K, M>(tree: &OrderedTree<K, M>, node: Link) -> Link {
    node.and_then(|n| tree[n].parent)
}

pub(crate) fn grandparent<K, M>(tree: &OrderedTree<K, M>, node: Link) -> Link {
    parent(tree, parent(tree, node))
}

/// The other child of `node`'s parent.
pub(crate) fn sibling<K, M>(tree: &OrderedTree<K, M>, node: Link) -> Link {
    let node = node?;
    let parent = tree[node].parent?;
    if tree[parent].left == Some(node) {
        tree[parent].right
    } else {
        tree[parent].left
    }
}

pub(crate) fn uncle<K, M>(tree: &OrderedTree<K, M>, node: Link) -> Link {
    sibling(tree, parent(tree, node))
}

pub(crate) fn is_left_child<K, M>(tree: &OrderedTree<K, M>, node: NodeId) -> bool {
    tree[node]
        .parent
        .map_or(false, |p| tree[p].left == Some(node))
}

pub(crate) fn is_right_child<K, M>(tree: &OrderedTree<K, M>, node: NodeId) -> bool {
    tree[node]
        .parent
        .map_or(false, |p| tree[p].right == Some(node))
}

/// Rotate `x` to the left, lifting its right child into its place.
///
/// ## Panics
///
/// When `x` has no right child.
///
/// # Diagram
///
/// ```text
///      P                  P
///      |                  |
///      x                  y
///     / \    rotate ->   / \
///    a   y              x   c
///       / \            / \
///      b   c          a   b
/// ```
pub(crate) fn rotate_left<K, M>(tree: &mut OrderedTree<K, M>, x: NodeId) {
    let y = tree[x].right.expect("Rotate left => right child");
    let b = tree[y].left;
    let p = tree[x].parent;
    trace!("rotate left {:?} -> {:?}", x, y);

    tree[x].right = b;
    if let Some(b) = b {
        tree[b].parent = Some(x);
    }
    // P still owns x at this point, so this finds the right slot before x moves.
    tree.replace_child(p, x, Some(y));
    tree[y].left = Some(x);
    tree[x].parent = Some(y);
}

/// Rotate `y` to the right, lifting its left child into its place. The mirror of
/// [`rotate_left`].
///
/// ## Panics
///
/// When `y` has no left child.
///
/// # Diagram
///
/// ```text
///        P              P
///        |              |
///        y              x
///       / \  rotate -> / \
///      x   c          a   y
///     / \                / \
///    a   b              b   c
/// ```
pub(crate) fn rotate_right<K, M>(tree: &mut OrderedTree<K, M>, y: NodeId) {
    let x = tree[y].left.expect("Rotate right => left child");
    let b = tree[x].right;
    let p = tree[y].parent;
    trace!("rotate right {:?} -> {:?}", y, x);

    tree[y].left = b;
    if let Some(b) = b {
        tree[b].parent = Some(y);
    }
    tree.replace_child(p, y, Some(x));
    tree[x].right = Some(y);
    tree[y].parent = Some(x);
}

/// Structural equality: both trees have the same shape and the same key at every position.
/// Two trees holding the same keys in different shapes are *not* equal.
pub(crate) fn same_shape<K, M, N>(a: &OrderedTree<K, M>, b: &OrderedTree<K, N>) -> bool
where
    K: PartialEq,
{
    let mut pending = vec![(a.root(), b.root())];
    while let Some(pair) = pending.pop() {
        match pair {
            (None, None) => {}
            (Some(x), Some(y)) => {
                if a[x].key != b[y].key {
                    return false;
                }
                pending.push((a[x].left, b[y].left));
                pending.push((a[x].right, b[y].right));
            }
            _ => return false,
        }
    }
    true
}
