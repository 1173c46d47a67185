//! A Binary Search Tree over unique values that restores balance by rebuilding.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. A [`Tree`] built from a list of values has the
//! smallest possible height, but plain inserts and deletes can make it lopsided.
//! Rather than rotating nodes on every change like an AVL tree, [`Tree::rebalance`]
//! flattens the whole tree and builds it again.
//!
//! ## Balance
//!
//! The height of a node is the number of edges on the longest path down to a leaf, so
//! a leaf has height 0. A tree is balanced when, at every node, the heights of the two
//! children differ by at most one, counting a missing child as height 0.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod display;
pub mod error;
pub mod iter;
pub mod random;
mod tree;

pub use error::{Error, Result};
pub use tree::{Node, Tree};
