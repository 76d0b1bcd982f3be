//! A Bloom filter: a fixed-size bit array answering "possibly present" or "definitely
//! absent" for items that were added to it.
//!
//! The filter is sized from the number of items it is expected to hold (`n`) and the false
//! positive rate it should have at that load (`p`):
//!
//! - bits: `m = ceil(n * ln(p) / ln(1 / 2^ln(2)))`
//! - hash functions: `k = round((m / n) * ln(2))`, at least 1
//!
//! Rather than running `k` independent hash functions, two base hashes `a` and `b` are
//! computed and the `i`th index is `(a + i * b) mod m` (Kirsch and Mitzenmacher, *Less
//! Hashing, Same Performance: Building a Better Bloom Filter*).
//!
//! # Examples
//!
//! ```
//! use classic_ds::bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(100, 0.01).unwrap();
//! filter.extend(["hello", "cruel", "world"].iter().copied());
//!
//! assert_eq!(filter.bit_count(), 959);
//! assert_eq!(filter.hash_function_count(), 7);
//! assert!(filter.test("hello"));
//! assert!(filter.test("world"));
//! ```

use std::collections::hash_map::RandomState;
use std::f64::consts::LN_2;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::marker::PhantomData;

use bit_vec::BitVec;
use log::debug;

use crate::error::{Error, Result};

fn validate(items: usize, fp_rate: f64) -> Result<()> {
    if items == 0 {
        return Err(Error::InvalidItemCount);
    }
    // Written so NaN fails too.
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(Error::InvalidProbability(fp_rate));
    }
    Ok(())
}

/// The number of bits a filter needs to hold `items` items with a false positive rate of
/// `fp_rate`.
///
/// # Errors
///
/// [`Error::InvalidItemCount`] if `items` is 0, [`Error::InvalidProbability`] unless
/// `0 < fp_rate < 1`, [`Error::TooLarge`] if the bit count exceeds `isize::MAX`.
///
/// # Examples
///
/// ```
/// use classic_ds::bloom::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(10, 0.5), Ok(15));
/// ```
pub fn optimal_bit_count(items: usize, fp_rate: f64) -> Result<usize> {
    validate(items, fp_rate)?;
    let bits = (items as f64 * fp_rate.ln() / (1.0 / 2f64.powf(LN_2)).ln()).ceil();
    // `as` saturates; no allocation may exceed `isize::MAX`.
    if bits >= isize::MAX as f64 {
        return Err(Error::TooLarge(items));
    }
    Ok(bits as usize)
}

/// The number of hash functions that minimizes the false positive rate of a filter with
/// `bits` bits holding `items` items. Never less than 1.
pub fn optimal_hash_count(bits: usize, items: usize) -> usize {
    if items == 0 {
        return 1;
    }
    let hashes = (bits as f64 / items as f64 * LN_2).round() as usize;
    hashes.max(1)
}

/// A Bloom filter over items of type `T`. `S` builds the two base hashers; the defaults are
/// two independently keyed SipHash instances.
pub struct BloomFilter<T: ?Sized, S = RandomState> {
    bits: BitVec,
    hash_count: usize,
    hashers: [S; 2],
    _item: PhantomData<fn(&T)>,
}

impl<T: ?Sized + Hash> BloomFilter<T, RandomState> {
    /// Creates an empty filter sized for `items` items at a false positive rate of
    /// `fp_rate`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidItemCount`] if `items` is 0, [`Error::InvalidProbability`] unless
    /// `0 < fp_rate < 1`, [`Error::TooLarge`] if the filter could never be allocated.
    pub fn new(items: usize, fp_rate: f64) -> Result<Self> {
        Self::with_hashers(items, fp_rate, RandomState::new(), RandomState::new())
    }
}

impl<T: ?Sized + Hash, S: BuildHasher> BloomFilter<T, S> {
    /// Like [`BloomFilter::new`] but with caller supplied hash builders. `first` and `second`
    /// should hash differently or every probe lands on the same bit.
    pub fn with_hashers(items: usize, fp_rate: f64, first: S, second: S) -> Result<Self> {
        let bit_count = optimal_bit_count(items, fp_rate)?;
        let hash_count = optimal_hash_count(bit_count, items);
        debug!(
            "bloom filter n = {} p = {} -> m = {} k = {}",
            items, fp_rate, bit_count, hash_count
        );

        Ok(Self {
            bits: BitVec::from_elem(bit_count, false),
            hash_count,
            hashers: [first, second],
            _item: PhantomData,
        })
    }

    /// Records `item` in the filter.
    pub fn add(&mut self, item: &T) {
        let (a, b) = self.base_hashes(item);
        for i in 0..self.hash_count {
            let index = self.index(a, b, i);
            self.bits.set(index, true);
        }
    }

    /// Returns `false` if `item` was definitely never added, `true` if it probably was.
    pub fn test(&self, item: &T) -> bool {
        let (a, b) = self.base_hashes(item);
        (0..self.hash_count).all(|i| self.bits.get(self.index(a, b, i)) == Some(true))
    }

    /// The size of the bit array, `m`.
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// The number of bits set per item, `k`.
    pub fn hash_function_count(&self) -> usize {
        self.hash_count
    }

    /// Forgets every item.
    pub fn clear(&mut self) {
        self.bits = BitVec::from_elem(self.bits.len(), false);
    }

    fn base_hashes(&self, item: &T) -> (u64, u64) {
        let [first, second] = &self.hashers;
        let mut hasher = first.build_hasher();
        item.hash(&mut hasher);
        let a = hasher.finish();

        let mut hasher = second.build_hasher();
        item.hash(&mut hasher);
        (a, hasher.finish())
    }

    fn index(&self, a: u64, b: u64, i: usize) -> usize {
        let probe = a.wrapping_add((i as u64).wrapping_mul(b));
        (probe % self.bits.len() as u64) as usize
    }
}

impl<'a, T, S> Extend<&'a T> for BloomFilter<T, S>
where
    T: 'a + ?Sized + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: ?Sized, S> fmt::Debug for BloomFilter<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bit_count", &self.bits.len())
            .field("hash_function_count", &self.hash_count)
            .field("bits_set", &self.bits.iter().filter(|bit| *bit).count())
            .finish()
    }
}
