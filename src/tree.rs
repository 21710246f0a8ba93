//! A mutable, unbalanced BST. One heap allocation per node, with each node
//! owning its children outright.
//!
//! # Examples
//!
//! ```
//! use bstmap::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Some(&2));
//!
//! // Inserting a new value for an existing key keeps the original value.
//! tree.insert(1, 3);
//! assert_eq!(tree.find(&1), Some(&2));
//!
//! // Deleting a node returns its value.
//! let deleted_value = tree.delete(&1);
//!
//! assert_eq!(deleted_value, Some(2));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

/// An owning edge. `None` marks the absent child at the bottom of a subtree.
type Link<K, V> = Option<Box<Node<K, V>>>;

/// An unbalanced Binary Search Tree. This can be used for inserting,
/// finding, and deleting keys and values, for visiting every entry in the
/// classical traversal orders, and for asking structural questions such as
/// node counts, degree, and height.
#[derive(Debug, Clone)]
pub struct Tree<K, V> {
    root: Link<K, V>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no nodes. O(1).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node in the tree, leaving it empty.
    ///
    /// The teardown is a worklist loop rather than the owning pointers'
    /// natural recursion, so clearing a degenerate chain cannot overflow
    /// the stack. `Drop` goes through here as well.
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }

    /// Potentially finds the value associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.root
            .as_deref()
            .and_then(|n| n.find(key))
            .map(|n| &n.value)
    }

    /// Inserts the given value into the tree stored at the given key.
    ///
    /// Inserting a value for a key that is already present does nothing:
    /// the stored value is kept and the new one is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.find(&1), Some(&2));
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.find(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        match &mut self.root {
            Some(root) => root.insert(key, value),
            None => self.root = Some(Box::new(Node::new(key, value))),
        }
    }

    /// Deletes the node containing the given key from the tree and returns
    /// its value. If the tree does not contain a node with the key, nothing
    /// happens and `None` is returned.
    ///
    /// A node with two children is deleted by copying: it adopts the payload
    /// of its in-order predecessor (the rightmost node of its left subtree)
    /// and the predecessor, which has at most one child, is the node that is
    /// physically unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    /// let deleted_value = tree.delete(&1);
    ///
    /// assert_eq!(deleted_value, Some(2));
    /// assert_eq!(tree.find(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        // Walk down to the link that owns the matching node. Holding the
        // link instead of the node means relinking needs no parent pointer.
        let mut link = &mut self.root;
        loop {
            let ordering = match link {
                None => return None,
                Some(node) => key.cmp(&node.key),
            };
            match ordering {
                Ordering::Less => link = &mut link.as_mut().unwrap().left,
                Ordering::Greater => link = &mut link.as_mut().unwrap().right,
                Ordering::Equal => break,
            }
        }
        Self::unlink(link)
    }

    /// Removes the node held by `link` and returns its value. The caller has
    /// already matched the key, so `link` holds the target node.
    fn unlink(link: &mut Link<K, V>) -> Option<V> {
        match link {
            Some(node) if node.left.is_some() && node.right.is_some() => {
                // Deletion by copying: the node keeps its place in the tree
                // but takes over its in-order predecessor's payload, and the
                // predecessor is what actually leaves the tree.
                let mut predecessor = Self::detach_max(&mut node.left)
                    .expect("a node with two children has a left subtree");
                mem::swap(&mut node.key, &mut predecessor.key);
                mem::swap(&mut node.value, &mut predecessor.value);
                Some(predecessor.value)
            }
            _ => {
                let node = link.take()?;
                let Node {
                    value, left, right, ..
                } = *node;
                *link = left.or(right);
                Some(value)
            }
        }
    }

    /// Detaches the node with the largest key in the subtree under `link`,
    /// putting that node's left child (its only possible child) in its place.
    fn detach_max(mut link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
        loop {
            match link {
                None => return None,
                Some(node) if node.right.is_some() => {}
                Some(_) => break,
            }
            link = &mut link.as_mut().unwrap().right;
        }
        let mut node = link.take()?;
        *link = node.left.take();
        Some(node)
    }

    /// Visits every entry in pre-order: node, then left subtree, then right
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.pre_order(|k, _| keys.push(*k));
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(root) = self.root.as_deref() {
            root.pre_order(&mut visit);
        }
    }

    /// Visits every entry in in-order: left subtree, then node, then right
    /// subtree. By the ordering invariant this visits keys in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 3, 1] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.in_order(|k, _| keys.push(*k));
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(root) = self.root.as_deref() {
            root.in_order(&mut visit);
        }
    }

    /// Visits every entry in post-order: left subtree, then right subtree,
    /// then node.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(root) = self.root.as_deref() {
            root.post_order(&mut visit);
        }
    }

    /// Visits every entry level by level from the root down, left to right
    /// within a level, using an explicit queue.
    pub fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        let mut queue = VecDeque::new();
        queue.extend(self.root.as_deref());
        while let Some(node) = queue.pop_front() {
            visit(&node.key, &node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
    }

    /// Counts every node in the tree. O(n).
    pub fn count_nodes(&self) -> usize {
        self.root.as_deref().map_or(0, Node::count)
    }

    /// Counts the leaf nodes, the nodes with no children. O(n).
    pub fn count_leaves(&self) -> usize {
        self.root.as_deref().map_or(0, Node::count_leaves)
    }

    /// Counts the internal nodes: nodes with at least one child, excluding
    /// the root. The root never counts as internal, even when it has
    /// children, so `count_nodes == count_leaves + count_internal_nodes + 1`
    /// for any non-empty tree.
    pub fn count_internal_nodes(&self) -> usize {
        self.root.as_deref().map_or(0, |root| {
            root.left.as_deref().map_or(0, Node::count_internal)
                + root.right.as_deref().map_or(0, Node::count_internal)
        })
    }

    /// Returns the degree (0, 1, or 2 children) of the node holding `key`,
    /// or `None` if the tree is empty or the key is not present.
    pub fn degree(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        self.root
            .as_deref()
            .and_then(|n| n.find(key))
            .map(Node::degree)
    }

    /// Returns the largest degree of any node in the tree, or `None` if the
    /// tree is empty.
    pub fn max_degree(&self) -> Option<usize> {
        self.root.as_deref().map(Node::max_degree)
    }

    /// Returns the height of the tree: the number of edges on the longest
    /// path from the root to a leaf. An empty tree and a tree holding a
    /// single node both have height 0.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Returns the height of the subtree rooted at the node holding `key`,
    /// using the same edge count as [`height`](Self::height). `None` if the
    /// key is not present.
    pub fn subtree_height(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        self.root
            .as_deref()
            .and_then(|n| n.find(key))
            .map(Node::height)
    }

    /// Returns the number of edges between the root and the node holding
    /// `key`, or `None` if the key is not present. The root's key has
    /// depth 0.
    pub fn depth(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        let mut edges = 0;
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(edges),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
            edges += 1;
        }
        None
    }

    /// Returns the keys on the path from the root down to `key`, root first
    /// and excluding `key` itself. The root's key has no ancestors, so it
    /// yields `Some(vec![])`. `None` if the key is not present.
    pub fn ancestors(&self, key: &K) -> Option<Vec<&K>>
    where
        K: Ord,
    {
        let mut path = Vec::new();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(path),
                Ordering::Less => {
                    path.push(&node.key);
                    current = node.left.as_deref();
                }
                Ordering::Greater => {
                    path.push(&node.key);
                    current = node.right.as_deref();
                }
            }
        }
        None
    }

    /// Returns every key strictly below the node holding `key`, collected in
    /// pre-order (the whole left subtree, then the whole right subtree). A
    /// leaf yields `Some(vec![])`. `None` if the key is not present.
    pub fn descendants(&self, key: &K) -> Option<Vec<&K>>
    where
        K: Ord,
    {
        let node = self.root.as_deref().and_then(|n| n.find(key))?;
        let mut keys = Vec::new();
        if let Some(left) = node.left.as_deref() {
            left.collect_keys(&mut keys);
        }
        if let Some(right) = node.right.as_deref() {
            right.collect_keys(&mut keys);
        }
        Some(keys)
    }
}

/// Renders the tree rotated a quarter turn: the right subtree sits above its
/// parent, the left subtree below, with `/` and `\` connectors marking the
/// branch each node hangs off. An empty tree renders as `[empty]`.
impl<K, V> fmt::Display for Tree<K, V>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return f.write_str("[empty]"),
        };
        if let Some(right) = root.right.as_deref() {
            right.fmt_rotated(true, "", f)?;
        }
        writeln!(f, "{}", root.key)?;
        if let Some(left) = root.left.as_deref() {
            left.fmt_rotated(false, "", f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many children this node has: 0, 1, or 2.
    fn degree(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_deref().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.find(key)),
        }
    }

    fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => match &mut self.left {
                Some(left) => left.insert(key, value),
                None => self.left = Some(Box::new(Node::new(key, value))),
            },
            // An equal key keeps its stored value; the new one is dropped.
            Ordering::Equal => {}
            Ordering::Greater => match &mut self.right {
                Some(right) => right.insert(key, value),
                None => self.right = Some(Box::new(Node::new(key, value))),
            },
        }

        if cfg!(debug_assertions) {
            if let Some(left) = self.left.as_deref() {
                assert!(self.key > left.key);
            }
            if let Some(right) = self.right.as_deref() {
                assert!(self.key < right.key);
            }
        }
    }

    fn pre_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&K, &V),
    {
        visit(&self.key, &self.value);
        if let Some(left) = self.left.as_deref() {
            left.pre_order(visit);
        }
        if let Some(right) = self.right.as_deref() {
            right.pre_order(visit);
        }
    }

    fn in_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(left) = self.left.as_deref() {
            left.in_order(visit);
        }
        visit(&self.key, &self.value);
        if let Some(right) = self.right.as_deref() {
            right.in_order(visit);
        }
    }

    fn post_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(left) = self.left.as_deref() {
            left.post_order(visit);
        }
        if let Some(right) = self.right.as_deref() {
            right.post_order(visit);
        }
        visit(&self.key, &self.value);
    }

    fn count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Node::count)
            + self.right.as_deref().map_or(0, Node::count)
    }

    fn count_leaves(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.left.as_deref().map_or(0, Node::count_leaves)
            + self.right.as_deref().map_or(0, Node::count_leaves)
    }

    /// Counts the non-leaf nodes in this subtree, this node included.
    fn count_internal(&self) -> usize {
        usize::from(!self.is_leaf())
            + self.left.as_deref().map_or(0, Node::count_internal)
            + self.right.as_deref().map_or(0, Node::count_internal)
    }

    fn max_degree(&self) -> usize {
        self.degree()
            .max(self.left.as_deref().map_or(0, Node::max_degree))
            .max(self.right.as_deref().map_or(0, Node::max_degree))
    }

    /// Edges on the longest path from this node down to a leaf. A leaf has
    /// height 0.
    fn height(&self) -> usize {
        if self.is_leaf() {
            return 0;
        }
        1 + self
            .left
            .as_deref()
            .map_or(0, Node::height)
            .max(self.right.as_deref().map_or(0, Node::height))
    }

    /// Pushes this subtree's keys in pre-order.
    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a K>) {
        keys.push(&self.key);
        if let Some(left) = self.left.as_deref() {
            left.collect_keys(keys);
        }
        if let Some(right) = self.right.as_deref() {
            right.collect_keys(keys);
        }
    }

    /// One line per node, right subtree above, indent growing by one
    /// 8-column cell per level. `is_right` picks the connector and which
    /// side of the branch gets the `|` rail.
    fn fmt_rotated(&self, is_right: bool, indent: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        K: fmt::Display,
    {
        if let Some(right) = self.right.as_deref() {
            let deeper = format!("{}{}", indent, if is_right { "        " } else { " |      " });
            right.fmt_rotated(true, &deeper, f)?;
        }
        writeln!(
            f,
            "{}{}----- {}",
            indent,
            if is_right { " /" } else { " \\" },
            self.key
        )?;
        if let Some(left) = self.left.as_deref() {
            let deeper = format!("{}{}", indent, if is_right { " |      " } else { "        " });
            left.fmt_rotated(false, &deeper, f)?;
        }
        Ok(())
    }
}
