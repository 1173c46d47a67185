//! Borrowing iterators over the nodes of a [`Tree`][crate::Tree] in the four traversal orders.
//!
//! Every iterator is lazy and visits each node exactly once. Traversing again just means asking
//! the tree for a new iterator.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::from_values(vec![2, 1, 3]);
//!
//! let level: Vec<_> = tree.level_order().map(|n| *n.value()).collect();
//! let post: Vec<_> = tree.post_order().map(|n| *n.value()).collect();
//!
//! assert_eq!(level, vec![2, 1, 3]);
//! assert_eq!(post, vec![1, 3, 2]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::Node;

/// Breadth first iterator. See [`Tree::level_order`][crate::Tree::level_order].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

/// Node, then left subtree, then right subtree. See [`Tree::pre_order`][crate::Tree::pre_order].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

/// Left subtree, then node, then right subtree. See [`Tree::in_order`][crate::Tree::in_order].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being walked and which still have to be yielded.
    stack: Vec<&'a Node<T>>,
    /// The root of the next subtree to descend into.
    next: Option<&'a Node<T>>,
}

/// Left subtree, then right subtree, then node. See [`Tree::post_order`][crate::Tree::post_order].
pub struct PostOrder<'a, T> {
    /// Each node is pushed twice: first unexpanded (`false`) and, once its children have been
    /// scheduled, expanded (`true`) which means it is ready to be yielded.
    stack: Vec<(&'a Node<T>, bool)>,
}

// Manual `Clone` implementations so cloning an iterator doesn't require `T: Clone`. These only
// copy references.

impl<'a, T> Clone for LevelOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
        }
    }
}

impl<'a, T> Clone for PreOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Clone for InOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            next: self.next,
        }
    }
}

impl<'a, T> Clone for PostOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            next: root,
        }
    }
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on the stack first so the left subtree comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next {
            self.stack.push(node);
            self.next = node.left();
        }

        let node = self.stack.pop()?;
        self.next = node.right();
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len() + usize::from(self.next.is_some()), None)
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<'a, T> FusedIterator for LevelOrder<'a, T> {}
impl<'a, T> FusedIterator for PreOrder<'a, T> {}
impl<'a, T> FusedIterator for InOrder<'a, T> {}
impl<'a, T> FusedIterator for PostOrder<'a, T> {}
