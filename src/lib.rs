//! This crate implements a handful of classic ordered and probabilistic set structures,
//! mostly for educational purposes.
//!
//! ## Binary Search Trees
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and
//! delete stored keys. BSTs are typically defined recursively using the notion of a `Node`.
//! A `Node` stores a key and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than
//!    its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater
//!    than (or, for duplicates, equal to) its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root to a leaf.
//! The trees here differ in how hard they work to keep that height down:
//!
//! - [`bst::Tree`] does nothing, so sorted input turns it into a linked list.
//! - [`rbt::Tree`] colors every node red or black and rotates on insert and remove so the
//!   height stays `O(lg N)`.
//! - [`splay::Tree`] moves every node it touches to the root, which makes any sequence of
//!   operations `O(lg N)` amortized and keeps hot keys cheap.
//!
//! All three share one arena-backed node store and one set of rotation primitives.
//!
//! ## Bloom filter
//!
//! [`bloom::BloomFilter`] answers set membership with no false negatives and a tunable false
//! positive rate, using a bit array and double hashing.

#![deny(missing_docs)]

pub mod bloom;
pub mod bst;
pub mod error;
pub mod rbt;
pub mod splay;

mod nav;
mod ordered;


pub use bloom::BloomFilter;
pub use error::{Error, Result};
