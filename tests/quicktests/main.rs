//! Property tests comparing each tree against a multiset model.

use std::collections::BTreeMap;

use quickcheck::{Arbitrary, Gen};

mod bloom;
mod bst;
mod rbt;
mod splay;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Remove one copy of the K from the data structure
    Remove(K),
    /// Check whether the K is present
    Contains(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Contains(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Keys with how many copies of each were inserted.
#[derive(Default)]
pub struct Multiset(BTreeMap<i8, usize>);

impl Multiset {
    pub fn insert(&mut self, key: i8) {
        *self.0.entry(key).or_default() += 1;
    }

    /// Removes one copy, returning it if there was one.
    pub fn remove(&mut self, key: i8) -> Option<i8> {
        let count = self.0.get_mut(&key)?;
        *count -= 1;
        if *count == 0 {
            self.0.remove(&key);
        }
        Some(key)
    }

    pub fn contains(&self, key: i8) -> bool {
        self.0.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.0.values().sum()
    }

    pub fn min(&self) -> Option<i8> {
        self.0.keys().next().copied()
    }

    pub fn max(&self) -> Option<i8> {
        self.0.keys().next_back().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = i8> + '_ {
        self.0.keys().copied()
    }
}
