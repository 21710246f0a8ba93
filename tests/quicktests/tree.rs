use bstmap::tree::Tree;

use std::collections::{HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                // The tree keeps the first value stored for a key.
                map.entry(k.clone()).or_insert_with(|| v.clone());
            }
            Op::Remove(k) => {
                assert_eq!(bst.delete(k), map.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    map.keys().all(|key| tree.find(key) == map.get(key))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == None)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn in_order_yields_strictly_ascending_keys(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);

    let mut keys = Vec::new();
    tree.in_order(|k, _| keys.push(*k));
    keys.len() == map.len() && keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn count_identity_on_random_trees(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);

    tree.count_nodes()
        == tree.count_leaves() + tree.count_internal_nodes() + usize::from(!tree.is_empty())
}

#[quickcheck]
fn structural_bounds_on_random_trees(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    let degree_ok = match tree.max_degree() {
        None => tree.is_empty(),
        Some(degree) => degree <= 2,
    };
    let height_ok = tree.is_empty() || tree.height() <= tree.count_nodes() - 1;

    degree_ok && height_ok
}

#[quickcheck]
fn ascending_inserts_build_a_chain(n: u8) -> bool {
    let mut tree = Tree::new();
    for key in 0..i16::from(n) {
        tree.insert(key, key);
    }

    if tree.is_empty() {
        return tree.height() == 0;
    }
    tree.height() == tree.count_nodes() - 1
}

#[quickcheck]
fn deleted_keys_stay_gone_and_the_rest_keep_their_values(
    xs: Vec<i8>,
    deletes: Vec<i8>,
) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();
    for x in &xs {
        tree.insert(*x, i32::from(*x) * 3);
        map.entry(*x).or_insert(i32::from(*x) * 3);
    }
    for delete in &deletes {
        assert_eq!(tree.delete(delete), map.remove(delete));
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && map.iter().all(|(k, v)| tree.find(k) == Some(v))
}
