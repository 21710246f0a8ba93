//! This crate exposes an unbalanced Binary Search Tree (BST) that maps
//! ordered keys to values.
//!
//! ## Binary Search Tree
//!
//! A BST stores one `Node` per key. A `Node` holds the key, its associated
//! value, and up to two child `Node`s. The invariants every operation
//! maintains are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have
//!    a key less than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have
//!    a key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching, inserting, and deleting are all descents guided by key
//! comparison and cost `O(height)`. Nothing here rebalances: feeding the
//! tree keys in ascending or descending order degenerates it into a linked
//! list with `height == n - 1`, and the operations stay correct (if slow)
//! on that shape.
//!
//! Beyond the classical operations, the tree answers structural questions
//! about itself (node/leaf/internal-node counts, per-node and tree-wide
//! degree, height) and path questions about a stored key: its depth, its
//! ancestors, and its descendants. The three depth-first traversals and a
//! breadth-first one visit every entry in the usual orders.

#![deny(missing_docs)]

pub mod tree;

#[cfg(test)]
mod test;
