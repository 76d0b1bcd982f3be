use classic_ds::rbt::{Color, Tree};
use quickcheck_macros::quickcheck;

use crate::{Multiset, Op};

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
        if !tree.is_empty() {
            assert_eq!(tree.root_color(), Some(Color::Black));
        }
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
fn round_trip(xs: Vec<i16>) -> bool {
    let mut distinct = xs;
    distinct.sort_unstable();
    distinct.dedup();

    let mut tree = Tree::new();
    for x in &distinct {
        tree.insert(*x);
        if !tree.contains(x) {
            return false;
        }
    }
    distinct.iter().all(|x| tree.remove(x) == Some(*x) && !tree.contains(x)) && tree.is_empty()
}

#[quickcheck]
fn black_height_bounds_size(n: u16) -> bool {
    let n = usize::from(n % 2048);
    let tree: Tree<_> = (0..n).collect();

    // A tree with black height h has at least 2^h - 1 nodes.
    let h = tree.black_height() as u32;
    tree.len() == n && 2usize.pow(h) - 1 <= n
}

#[test]
fn same_insertion_order_same_tree() {
    let keys = [7, 4, 11, 3, 6, 9, 18, 2, 14, 19, 12, 17, 22, 20];
    let a: Tree<_> = keys.into_iter().collect();
    let b: Tree<_> = keys.into_iter().collect();

    assert_eq!(a, b);
    assert_eq!(Tree::<i32>::new(), Tree::new());
}

#[test]
fn same_keys_different_shape() {
    let forward: Tree<_> = (1..=4).collect();
    let backward: Tree<_> = (1..=4).rev().collect();

    assert_ne!(forward, backward);
}
