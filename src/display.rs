//! Text rendering of a [`Tree`] for humans.
//!
//! The tree is drawn on its side: the right subtree above a node and the left subtree below it,
//! so reading top to bottom goes from the largest value to the smallest.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::from_values(vec![1, 3, 5, 8]);
//! let expected = "\
//! │       ┌── 8
//! │   ┌── 5
//! └── 3
//!     └── 1
//! ";
//! assert_eq!(tree.to_string(), expected);
//! ```

use std::fmt;

use crate::error::Result;
use crate::tree::{Node, Tree};

/// Pending work for drawing the tree, kept on an explicit stack so deep trees can be drawn.
enum Step<'a, T> {
    /// Draw the subtree under `node`. Its prefix is the first `base` bytes of the shared prefix
    /// followed by `guide`.
    Subtree {
        node: &'a Node<T>,
        is_left: bool,
        base: usize,
        guide: &'static str,
    },
    /// Write the line for `node`, whose prefix is the first `base` bytes of the shared prefix.
    Line {
        node: &'a Node<T>,
        is_left: bool,
        base: usize,
    },
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prefix = String::new();
        let mut steps: Vec<Step<'_, T>> = self
            .root()
            .into_iter()
            .map(|node| Step::Subtree {
                node,
                is_left: true,
                base: 0,
                guide: "",
            })
            .collect();

        while let Some(step) = steps.pop() {
            match step {
                Step::Subtree {
                    node,
                    is_left,
                    base,
                    guide,
                } => {
                    prefix.truncate(base);
                    prefix.push_str(guide);
                    let base = prefix.len();

                    // Popped in reverse: right subtree, this node, then left subtree.
                    if let Some(left) = node.left() {
                        steps.push(Step::Subtree {
                            node: left,
                            is_left: true,
                            base,
                            guide: if is_left { "    " } else { "│   " },
                        });
                    }
                    steps.push(Step::Line {
                        node,
                        is_left,
                        base,
                    });
                    if let Some(right) = node.right() {
                        steps.push(Step::Subtree {
                            node: right,
                            is_left: false,
                            base,
                            guide: if is_left { "│   " } else { "    " },
                        });
                    }
                }
                Step::Line {
                    node,
                    is_left,
                    base,
                } => {
                    prefix.truncate(base);
                    let connector = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{}{}{}", prefix, connector, node.value())?;
                }
            }
        }

        Ok(())
    }
}

/// Lists the values of `tree` in each of the four traversal orders, one order per line.
///
/// # Errors
///
/// Fails if a traversal rejects its visitor. See [`Error::MissingCallback`][crate::Error].
///
/// # Examples
///
/// ```
/// use balanced_bst::{display::element_orders, Tree};
///
/// let tree = Tree::from_values(vec![2, 1, 3]);
/// assert_eq!(
///     element_orders(&tree).unwrap(),
///     "Level Order: 2, 1, 3\nPre Order: 2, 1, 3\nIn Order: 1, 2, 3\nPost Order: 1, 3, 2\n",
/// );
/// ```
pub fn element_orders<T: fmt::Display>(tree: &Tree<T>) -> Result<String> {
    Ok([
        order_line::<T, _>("Level Order", |visit| tree.level_order_for_each(Some(visit)))?,
        order_line::<T, _>("Pre Order", |visit| tree.pre_order_for_each(Some(visit)))?,
        order_line::<T, _>("In Order", |visit| tree.in_order_for_each(Some(visit)))?,
        order_line::<T, _>("Post Order", |visit| tree.post_order_for_each(Some(visit)))?,
    ]
    .concat())
}

/// Runs `traverse` with a visitor that records each value, then formats them as `name: a, b`.
fn order_line<T, W>(name: &str, traverse: W) -> Result<String>
where
    T: fmt::Display,
    W: FnOnce(&mut dyn FnMut(&Node<T>)) -> Result<()>,
{
    let mut values = Vec::new();
    traverse(&mut |node: &Node<T>| values.push(node.value().to_string()))?;
    Ok(format!("{}: {}\n", name, values.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_renders_nothing() {
        assert_eq!(Tree::<i32>::new().to_string(), "");
        assert_eq!(
            element_orders(&Tree::<i32>::new()).unwrap(),
            "Level Order: \nPre Order: \nIn Order: \nPost Order: \n"
        );
    }

    #[test]
    fn test_single_node() {
        assert_eq!(Tree::from_values(vec![42]).to_string(), "└── 42\n");
    }

    #[test]
    fn test_guides_under_right_child() {
        //   4
        //  / \
        // 2   6
        //    /
        //   5
        let mut tree = Tree::new();
        tree.extend(vec![4, 2, 6, 5]);

        let expected = "\
│   ┌── 6
│   │   └── 5
└── 4
    └── 2
";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_guides_over_left_child() {
        let mut tree = Tree::new();
        tree.extend(vec![4, 1, 2]);

        let expected = "\
└── 4
    │   ┌── 2
    └── 1
";
        assert_eq!(tree.to_string(), expected);
    }
}
