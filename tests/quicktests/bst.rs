use classic_ds::bst::Tree;
use classic_ds::Error;
use quickcheck_macros::quickcheck;

use crate::{Multiset, Op};

/// Applies a set of operations to a tree and a model multiset, checking every answer the
/// tree gives along the way.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Multiset) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k);
                model.insert(k);
            }
            Op::Remove(k) => assert_eq!(tree.remove(&k), model.remove(k)),
            Op::Contains(k) => assert_eq!(tree.contains(&k), model.contains(k)),
        }
        assert_eq!(tree.len(), model.len());
        assert_eq!(tree.is_empty(), model.len() == 0);
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Multiset::default();

    do_ops(&ops, &mut tree, &mut model);
    model.keys().all(|key| tree.contains(&key))
        && tree.minimum().ok().copied() == model.min()
        && tree.maximum().ok().copied() == model.max()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.len() == xs.len() && xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.remove(delete).is_some() {}
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();
    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.len() == still_present.len()
}

#[quickcheck]
fn successor_walk_is_sorted(xs: Vec<i8>) -> bool {
    let mut distinct = Vec::new();
    for x in xs {
        if !distinct.contains(&x) {
            distinct.push(x);
        }
    }
    let tree: Tree<_> = distinct.iter().copied().collect();
    let mut sorted = distinct;
    sorted.sort_unstable();

    let mut walked = Vec::new();
    let mut cursor = tree.minimum().ok().copied();
    while let Some(key) = cursor {
        walked.push(key);
        cursor = tree.successor(&key).unwrap().copied();
    }
    walked == sorted
}

#[quickcheck]
fn map_keys_keeps_every_key_reachable(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i16> = xs.iter().map(|&x| i16::from(x)).collect();
    tree.map_keys(|key| key * 3 + 1);

    tree.len() == xs.len()
        && xs.iter().all(|&x| tree.contains(&(i16::from(x) * 3 + 1)))
        && xs.iter().all(|&x| !tree.contains(&(i16::from(x) * 3)))
}

#[test]
fn queries_on_empty_tree_report_errors() {
    let tree: Tree<i8> = Tree::new();

    assert_eq!(tree.minimum(), Err(Error::Empty));
    assert_eq!(tree.maximum(), Err(Error::Empty));
    assert_eq!(tree.successor(&0), Err(Error::KeyNotFound));
}
