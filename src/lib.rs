//! This crate exposes an unbalanced Binary Search Tree (BST) over a caller-chosen ordering,
//! along with a way to draw it as plain text.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The invariants of the
//! [`Tree`] in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less
//!    than or equal to its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//!
//! Equal values are allowed and are always inserted to the left. Nothing
//! rebalances the tree, so its shape is decided entirely by insertion order.
//! Visiting the left subtree, then the subtree root, then the right subtree
//! yields the values in sorted order ([`Tree::inorder`]).
//!
//! ## Drawings
//!
//! [`Tree::drawing`] lays the nodes out level by level, placing each one with
//! the rules in [`layout`], and connects them with `/` and `\` arrows:
//!
//! ```
//! use ascii_bst::Tree;
//!
//! let tree: Tree<char> = "DBACGHJK".chars().collect();
//! print!("{}", tree.drawing());
//! ```
//!
//! ```text
//!     D
//!    / \
//!   B   G
//!  / \   \
//! A   C   H
//!          \
//!           J
//!            \
//!             K
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod error;
pub mod layout;
pub mod render;
pub mod tree;


pub use compare::{Compare, Natural};
pub use error::Error;
pub use layout::{Layout, Placement};
pub use render::Drawing;
pub use tree::{Traversal, Tree};
