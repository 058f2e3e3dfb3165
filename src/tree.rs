//! An unbalanced Binary Search Tree over a caller-chosen ordering. Values that
//! compare equal are kept, each insert adding a new node, and ties are routed
//! into the left subtree.
//!
//! # Examples
//!
//! ```
//! use ascii_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&'D'));
//!
//! for c in "DBACGHJK".chars() {
//!     tree.insert(c);
//! }
//! assert_eq!(tree.size(), 8);
//! assert_eq!(tree.inorder().collect::<String>(), "ABCDGHJK");
//!
//! // Removing a value returns whether it was there.
//! assert!(tree.remove(&'D'));
//! assert!(!tree.remove(&'D'));
//! assert_eq!(tree.min(), Some(&'A'));
//! assert_eq!(tree.max(), Some(&'K'));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;

use crate::compare::{Compare, Natural};

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding values of type `T` arranged by the ordering `C`.
///
/// For every node, everything in its left subtree compares less than or equal
/// to it and everything in its right subtree compares greater.
///
/// Nothing keeps the tree balanced, so its height can reach its size. Inserting, cloning,
/// clearing, dropping and [`Tree::size_iterative`] use constant stack space; searches, removals,
/// traversals, [`Tree::size`], [`Tree::height`] and the `Debug` output recurse once per level.
pub struct Tree<T, C = Natural> {
    pub(crate) root: Link<T>,
    pub(crate) compare: C,
}

impl<T> Tree<T, Natural> {
    /// Generate a new, empty `Tree` using the natural order of `T`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T> Default for Tree<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: Node::clone_subtree(&self.root),
            compare: self.compare.clone(),
        }
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl<T, C> Tree<T, C> {
    /// Generate a new, empty `Tree` that orders its values with `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_bst::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// tree.insert("three");
    /// tree.insert("a");
    /// tree.insert("to");
    ///
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec!["a", "to", "three"]);
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            compare,
        }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree, counted by recursing into both subtrees.
    pub fn size(&self) -> usize {
        Node::size(&self.root)
    }

    /// The number of values in the tree, counted with an explicit stack so that every node is
    /// visited exactly once. Always agrees with [`Tree::size`].
    pub fn size_iterative(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a lone root a
    /// height of 1.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// The smallest value in the tree, or `None` if it is empty.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree, or `None` if it is empty.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Visits each node before its left and then its right subtree.
    pub fn preorder(&self) -> Traversal<'_, T> {
        Traversal::new(&self.root, Order::Pre)
    }

    /// Visits the left subtree, then the node, then the right subtree. This yields the values in
    /// ascending order.
    pub fn inorder(&self) -> Traversal<'_, T> {
        Traversal::new(&self.root, Order::In)
    }

    /// Visits both subtrees, left first, before the node itself.
    pub fn postorder(&self) -> Traversal<'_, T> {
        Traversal::new(&self.root, Order::Post)
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        // Released one node at a time so a long chain can't overflow the stack.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Inserts `value` into the tree. Values comparing equal to an existing value are kept
    /// alongside it in its left subtree. A linked tree is never full so this always returns
    /// `true`.
    pub fn insert(&mut self, value: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match self.compare.compare(&value, &node.value) {
                Ordering::Greater => &mut node.right,
                Ordering::Less | Ordering::Equal => &mut node.left,
            };
        }
        *slot = Some(Box::new(Node::new(value)));
        true
    }

    /// Returns `true` if some value in the tree compares equal to `target`.
    pub fn contains(&self, target: &T) -> bool {
        self.get(target).is_some()
    }

    /// Potentially finds the stored value comparing equal to `target`. If there are several, the
    /// one closest to the root is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_bst::Tree;
    ///
    /// // Values compare by their tens digit.
    /// let mut tree = Tree::with_comparator(|a: &u32, b: &u32| (a / 10).cmp(&(b / 10)));
    /// tree.insert(42);
    ///
    /// assert_eq!(tree.get(&40), Some(&42));
    /// assert_eq!(tree.get(&50), None);
    /// ```
    pub fn get(&self, target: &T) -> Option<&T> {
        self.root
            .as_deref()
            .and_then(|n| n.find(target, &self.compare))
    }

    /// Removes one value comparing equal to `target` and returns `true`, or returns `false` and
    /// leaves the tree untouched if there is none.
    pub fn remove(&mut self, target: &T) -> bool {
        let (root, removed) = Node::remove(self.root.take(), target, &self.compare);
        self.root = root;
        removed
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T, Natural>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// A single cell of the tree. Its children are owned exclusively by it.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Deep copy of the subtree at `link`. Nodes are copied in preorder, remembering which
    /// parent and side each hangs from, then attached from the back so every subtree is whole
    /// before it moves into its parent.
    fn clone_subtree(link: &Link<T>) -> Link<T>
    where
        T: Clone,
    {
        let mut copies: Vec<Link<T>> = Vec::new();
        let mut parents: Vec<Option<(usize, bool)>> = Vec::new();
        let mut stack: Vec<(&Node<T>, Option<(usize, bool)>)> =
            link.as_deref().map(|n| (n, None)).into_iter().collect();
        while let Some((node, parent)) = stack.pop() {
            let index = copies.len();
            copies.push(Some(Box::new(Node::new(node.value.clone()))));
            parents.push(parent);
            if let Some(right) = node.right.as_deref() {
                stack.push((right, Some((index, false))));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, Some((index, true))));
            }
        }

        for index in (1..copies.len()).rev() {
            let copy = copies[index].take();
            if let Some((parent, is_left)) = parents[index] {
                if let Some(parent) = copies[parent].as_mut() {
                    if is_left {
                        parent.left = copy;
                    } else {
                        parent.right = copy;
                    }
                }
            }
        }
        copies.into_iter().next().flatten()
    }

    fn size(link: &Link<T>) -> usize {
        match link {
            None => 0,
            Some(n) => 1 + Self::size(&n.left) + Self::size(&n.right),
        }
    }

    fn height(link: &Link<T>) -> usize {
        match link {
            None => 0,
            Some(n) => 1 + Self::height(&n.left).max(Self::height(&n.right)),
        }
    }

    fn find<C>(&self, target: &T, compare: &C) -> Option<&T>
    where
        C: Compare<T>,
    {
        match compare.compare(target, &self.value) {
            Ordering::Less => self.left.as_deref().and_then(|n| n.find(target, compare)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.find(target, compare)),
        }
    }

    /// Removes `target` from the subtree rooted at `link`. Returns the new root of that subtree
    /// and whether anything was removed.
    fn remove<C>(link: Link<T>, target: &T, compare: &C) -> (Link<T>, bool)
    where
        C: Compare<T>,
    {
        let mut node = match link {
            Some(node) => node,
            None => return (None, false),
        };

        match compare.compare(target, &node.value) {
            Ordering::Less => {
                let (left, removed) = Self::remove(node.left.take(), target, compare);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Equal => (node.splice_out(), true),
            Ordering::Greater => {
                let (right, removed) = Self::remove(node.right.take(), target, compare);
                node.right = right;
                (Some(node), removed)
            }
        }
    }

    /// Unlinks this node from the tree, returning whatever should take its place.
    fn splice_out(mut self: Box<Self>) -> Link<T> {
        match (self.left.take(), self.right.take()) {
            (None, right) => right,
            (left, None) => left,

            // With two children the predecessor (the largest value in the left subtree) moves
            // up into this node and its old node is dropped from the left subtree.
            (Some(left), right) => {
                let (predecessor, left) = left.remove_largest();
                self.value = predecessor;
                self.left = left;
                self.right = right;
                Some(self)
            }
        }
    }

    /// Returns the value of the largest node and a new subtree without that largest node.
    fn remove_largest(mut self: Box<Self>) -> (T, Link<T>) {
        match self.right.take() {
            None => {
                let Node { value, left, .. } = *self;
                (value, left)
            }
            Some(right) => {
                let (value, right) = right.remove_largest();
                self.right = right;
                (value, Some(self))
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

/// A one-shot walk over the values of a [`Tree`], produced by [`Tree::preorder`],
/// [`Tree::inorder`] or [`Tree::postorder`].
#[derive(Clone, Debug)]
pub struct Traversal<'a, T> {
    queue: VecDeque<&'a T>,
}

impl<'a, T> Traversal<'a, T> {
    fn new(root: &'a Link<T>, order: Order) -> Self {
        let mut queue = VecDeque::new();
        Self::visit(root, order, &mut queue);
        Self { queue }
    }

    fn visit(link: &'a Link<T>, order: Order, queue: &mut VecDeque<&'a T>) {
        if let Some(node) = link {
            match order {
                Order::Pre => {
                    queue.push_back(&node.value);
                    Self::visit(&node.left, order, queue);
                    Self::visit(&node.right, order, queue);
                }
                Order::In => {
                    Self::visit(&node.left, order, queue);
                    queue.push_back(&node.value);
                    Self::visit(&node.right, order, queue);
                }
                Order::Post => {
                    Self::visit(&node.left, order, queue);
                    Self::visit(&node.right, order, queue);
                    queue.push_back(&node.value);
                }
            }
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}
