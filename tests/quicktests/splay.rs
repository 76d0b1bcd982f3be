use classic_ds::splay::Tree;
use quickcheck_macros::quickcheck;

use crate::{Multiset, Op};

fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Multiset) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k);
                model.insert(k);
                assert_eq!(tree.root(), Some(&k));
            }
            Op::Remove(k) => assert_eq!(tree.remove(&k), model.remove(k)),
            Op::Contains(k) => {
                let present = model.contains(k);
                assert_eq!(tree.contains(&k), present);
                if present {
                    assert_eq!(tree.root(), Some(&k));
                }
            }
        }
        assert_eq!(tree.len(), model.len());
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Multiset::default();

    do_ops(&ops, &mut tree, &mut model);
    let result = model.keys().all(|key| tree.contains(&key));
    result
}

#[quickcheck]
fn found_key_is_splayed_to_root(xs: Vec<i8>, needle: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let key = xs[needle % xs.len()];

    tree.contains(&key) && tree.root() == Some(&key)
}

#[quickcheck]
fn miss_keeps_contents(xs: Vec<i8>, needle: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let present = xs.contains(&needle);

    tree.contains(&needle) == present
        && tree.len() == xs.len()
        && xs.iter().all(|x| tree.contains(x))
}

#[test]
fn sequential_access_flattens_then_recovers() {
    let mut tree: Tree<_> = (0..1000).collect();
    // Ascending inserts leave a left spine; a full in-order scan of lookups still finds all.
    for key in 0..1000 {
        assert!(tree.contains(&key));
        assert_eq!(tree.root(), Some(&key));
    }
    assert_eq!(tree.minimum(), Ok(&0));
    assert_eq!(tree.maximum(), Ok(&999));
}
