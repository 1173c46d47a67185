use balanced_bst::{Node, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebuilds we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => assert_eq!(tree.insert(v.clone()), set.insert(v.clone())),
            Op::Delete(v) => assert_eq!(tree.delete(v), set.remove(v)),
            Op::Rebalance => tree.rebalance(),
        }
    }
}

/// Whether every node is strictly between the bounds its ancestors impose.
fn is_bst<T: Ord>(node: Option<&Node<T>>, low: Option<&T>, high: Option<&T>) -> bool {
    match node {
        None => true,
        Some(n) => {
            low.map_or(true, |low| low < n.value())
                && high.map_or(true, |high| n.value() < high)
                && is_bst(n.left(), low, Some(n.value()))
                && is_bst(n.right(), Some(n.value()), high)
        }
    }
}

fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.in_order().map(|n| n.value().clone()).collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);

    is_bst(tree.root(), None, None)
        && tree.len() == set.len()
        && in_order(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn build_round_trips_through_in_order(xs: Vec<i16>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let sorted: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    is_bst(tree.root(), None, None) && tree.is_balanced() && in_order(&tree) == sorted
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());

    xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| tree.find(x).is_none() && tree.depth(x).is_none() && tree.height(x).is_none())
}

#[quickcheck]
fn repeated_insert_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    let before = tree.clone();

    let any_inserted = xs.iter().any(|x| tree.insert(*x));

    !any_inserted && tree == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        still_present.remove(delete);
    }

    is_bst(tree.root(), None, None)
        && deletes.iter().all(|x| !tree.contains(x))
        && in_order(&tree) == still_present.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn rebalance_balances(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    let values = in_order(&tree);

    tree.rebalance();

    tree.is_balanced() && in_order(&tree) == values && is_bst(tree.root(), None, None)
}

#[quickcheck]
fn depth_and_height_agree(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());

    // The root's height is the deepest depth of any node.
    let deepest = tree.in_order().filter_map(|n| tree.depth(n.value())).max();
    let root_height = tree.root().and_then(|root| tree.height(root.value()));

    deepest == root_height
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());

    let expected = in_order(&tree);
    let sorted = |nodes: Vec<&Node<i8>>| {
        let mut values: Vec<_> = nodes.into_iter().map(|n| *n.value()).collect();
        values.sort_unstable();
        values
    };

    sorted(tree.level_order().collect()) == expected
        && sorted(tree.pre_order().collect()) == expected
        && sorted(tree.post_order().collect()) == expected
}
