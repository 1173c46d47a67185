//! A BST that is kept balanced by rebuilding rather than by rotations. Inserts and deletes are
//! plain BST operations and may leave the tree lopsided; [`Tree::rebalance`] flattens the tree and
//! rebuilds it with minimal height.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::from_values(vec![5, 3, 8, 3, 1]);
//!
//! // Duplicates are dropped and the middle value becomes the root.
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(3));
//!
//! // Inserting an existing value does nothing.
//! assert!(tree.insert(10));
//! assert!(!tree.insert(10));
//!
//! // Deleting a missing value does nothing either.
//! assert!(tree.delete(&3));
//! assert!(!tree.delete(&3));
//!
//! let sorted: Vec<_> = tree.in_order().map(|n| *n.value()).collect();
//! assert_eq!(sorted, vec![1, 5, 8, 10]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::{InOrder, LevelOrder, PostOrder, PreOrder};

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree over unique values. Values in a node's left subtree are strictly less than
/// the node's value and values in its right subtree are strictly greater.
///
/// Nothing here recurses once per level, so lopsided trees of any depth can be inspected, mutated,
/// cloned and compared before they are rebalanced.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// A single value in a [`Tree`] along with the subtrees it owns.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Degenerate trees can be as deep as they are long so the default recursive drop could blow
    // the stack. Unlink nodes onto a heap allocated stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    // Subtrees come out of a post-order walk before their parent, so each node's copied children
    // are on top of `built` when it is reached: right above left.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<T>>> = Vec::with_capacity(self.len);
        for node in self.post_order() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    /// Trees are equal when they hold the same values in the same shape. A pre-order walk that
    /// records which children each node has pins the shape down.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.pre_order().zip(other.pre_order()).all(|(a, b)| {
                a.value == b.value
                    && a.left.is_some() == b.left.is_some()
                    && a.right.is_some() == b.right.is_some()
            })
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    /// Lists the nodes in level order, each with the values of its children.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.level_order()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree out of `values`. See [`Tree::build_tree`].
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        tree.build_tree(values);
        tree
    }

    /// Replaces the contents of this tree with a minimal height tree holding `values`.
    ///
    /// The values are sorted and deduplicated first. The middle value of each sorted range (the
    /// lower middle for ranges of even length) becomes the root of that range's subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.build_tree(vec![4, 2, 2, 1]);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), 2);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(4));
    /// ```
    pub fn build_tree<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let len = values.len();
        // Dropping through `Tree::drop` keeps the old root's teardown off the call stack.
        drop(std::mem::replace(self, Self::new()));
        self.root = build_link(&mut values.into_iter(), len);
        self.len = len;
        debug!(nodes = len, "built balanced tree");
    }

    /// The root node, or `None` when the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` as a new leaf. Returns `false` and leaves the tree untouched if the value is
    /// already present. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(1));
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(1));
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.depth(&2), Some(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let slot = slot_for(&mut self.root, &value);
        let inserted = slot.is_none();
        if inserted {
            *slot = Some(Node::new_boxed(value));
            self.len += 1;
        }
        trace!(inserted, len = self.len, "insert");
        inserted
    }

    /// Removes `value` from the tree. Returns `false` if it wasn't there.
    ///
    /// A node with two children takes the value of its in-order successor (the smallest value in
    /// its right subtree) and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::from_values(vec![1, 3, 5, 8]);
    /// assert!(tree.delete(&3));
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), 5);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(8));
    ///
    /// assert!(!tree.delete(&42));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let deleted = delete_from(&mut self.root, value);
        if deleted {
            self.len -= 1;
        }
        trace!(deleted, len = self.len, "delete");
        deleted
    }

    /// Potentially finds the node holding `value`. If no node has the value, `None` is returned.
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.locate(value).map(|(node, _)| node)
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The number of edges between the root and the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values(vec![1, 3, 5, 8]);
    /// assert_eq!(tree.depth(&3), Some(0));
    /// assert_eq!(tree.depth(&8), Some(2));
    /// assert_eq!(tree.depth(&4), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.locate(value).map(|(_, depth)| depth)
    }

    /// The height of the subtree rooted at the node holding `value`. See [`Node::height`].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values(vec![1, 3, 5, 8]);
    /// assert_eq!(tree.height(&3), Some(2));
    /// assert_eq!(tree.height(&5), Some(1));
    /// assert_eq!(tree.height(&8), Some(0));
    /// assert_eq!(tree.height(&4), None);
    /// ```
    pub fn height(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.find(value).map(Node::height)
    }

    /// Whether every node's subtrees differ in height by at most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the tree with minimal height. The values are pulled out in pre-order and handed to
    /// [`Tree::build_tree`], which sorts them again.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in 0..8 {
    ///     tree.insert(value);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.len(), 8);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let mut values = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(node) = stack.pop() {
            let Node { value, left, right } = *node;
            values.push(value);
            // Right is pushed first so the left subtree is flattened first.
            stack.extend(right);
            stack.extend(left);
        }

        debug!(nodes = values.len(), "rebalancing");
        self.build_tree(values);
    }

    /// Iterates over the nodes breadth first, left to right within each level.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    /// Iterates over the nodes visiting each node before its left then right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Iterates over the nodes in ascending order of their values.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Iterates over the nodes visiting each node after its left then right subtree.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Calls `visitor` on every node in level order.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `visitor` is `None`. No node is visited in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Node, Tree};
    ///
    /// let tree = Tree::from_values(vec![1, 3, 5, 8]);
    ///
    /// let mut seen = Vec::new();
    /// tree.level_order_for_each(Some(|n: &Node<i32>| seen.push(*n.value())))
    ///     .unwrap();
    /// assert_eq!(seen, vec![3, 1, 5, 8]);
    ///
    /// let missing: Option<fn(&Node<i32>)> = None;
    /// assert_eq!(tree.level_order_for_each(missing), Err(Error::MissingCallback));
    /// ```
    pub fn level_order_for_each<F>(&self, visitor: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<T>),
    {
        visit_each(self.level_order(), visitor)
    }

    /// Calls `visitor` on every node in pre-order.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `visitor` is `None`.
    pub fn pre_order_for_each<F>(&self, visitor: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<T>),
    {
        visit_each(self.pre_order(), visitor)
    }

    /// Calls `visitor` on every node in ascending order.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `visitor` is `None`.
    pub fn in_order_for_each<F>(&self, visitor: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<T>),
    {
        visit_each(self.in_order(), visitor)
    }

    /// Calls `visitor` on every node in post-order.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `visitor` is `None`.
    pub fn post_order_for_each<F>(&self, visitor: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<T>),
    {
        visit_each(self.post_order(), visitor)
    }

    /// Walks down from the root towards `value`, returning its node and depth if found.
    fn locate(&self, value: &T) -> Option<(&Node<T>, usize)>
    where
        T: Ord,
    {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some((node, depth)),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        None
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    /// Inserts each value in turn without rebalancing.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, holding smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding larger values.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a height
    /// of 0.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Whether every node in this subtree has children whose heights differ by at most one. A
    /// missing child counts as height 0, the same as a leaf.
    pub fn is_balanced(&self) -> bool {
        self.balanced_height().is_some()
    }

    /// The height of this subtree if it is balanced. Checking balance and measuring height in one
    /// pass keeps this linear in the size of the subtree.
    fn balanced_height(&self) -> Option<usize> {
        // Post-order finishes both subtrees before their parent, so the children's heights are on
        // top of the stack when the parent comes up: right above left.
        let mut heights: Vec<usize> = Vec::new();
        for node in PostOrder::new(Some(self)) {
            let right = node.right.as_ref().and_then(|_| heights.pop());
            let left = node.left.as_ref().and_then(|_| heights.pop());

            if left.unwrap_or(0).abs_diff(right.unwrap_or(0)) > 1 {
                return None;
            }

            heights.push(
                left.into_iter()
                    .chain(right)
                    .map(|height| height + 1)
                    .max()
                    .unwrap_or(0),
            );
        }

        heights.pop()
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }
}

/// Builds a minimal height subtree out of the next `len` values of the sorted `values`.
fn build_link<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let mid = (len - 1) / 2;
    let left = build_link(values, mid);
    let value = values.next()?;
    let right = build_link(values, len - mid - 1);

    Some(Box::new(Node { value, left, right }))
}

/// Walks down from `link` to the slot holding `value`, or to the empty slot where it would be
/// inserted.
fn slot_for<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => Ordering::Equal,
        };

        link = match (ordering, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Deletes `value` from the subtree in `link`, returning whether anything was removed.
fn delete_from<T: Ord>(link: &mut Link<T>, value: &T) -> bool {
    let slot = slot_for(link, value);
    let Some(mut node) = slot.take() else {
        return false;
    };

    *slot = match (node.left.take(), node.right.take()) {
        // A leaf falls into the first arm and is replaced by nothing.
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            if let Some(successor) = take_min(&mut right) {
                node.value = successor;
            }
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
    };
    true
}

/// Unlinks the leftmost node below `link` and returns its value. The leftmost node has no left
/// child so its right child takes its place.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().map_or(false, |node| node.left.is_some()) {
        link = &mut link.as_mut()?.left;
    }

    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}

fn visit_each<'a, T, I, F>(nodes: I, visitor: Option<F>) -> Result<()>
where
    T: 'a,
    I: Iterator<Item = &'a Node<T>>,
    F: FnMut(&Node<T>),
{
    let mut visitor = visitor.ok_or(Error::MissingCallback)?;
    for node in nodes {
        visitor(node);
    }
    Ok(())
}
