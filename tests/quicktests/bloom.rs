use classic_ds::bloom::{optimal_bit_count, optimal_hash_count, BloomFilter};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn no_false_negatives(items: Vec<String>) -> bool {
    let mut filter = BloomFilter::new(items.len().max(1), 0.01).unwrap();
    for item in &items {
        filter.add(item.as_str());
    }

    items.iter().all(|item| filter.test(item.as_str()))
}

#[quickcheck]
fn sizing_is_monotone(n: u16) -> bool {
    let n = usize::from(n).max(1);
    let loose = optimal_bit_count(n, 0.1).unwrap();
    let tight = optimal_bit_count(n, 0.001).unwrap();

    loose < tight && optimal_hash_count(loose, n) <= optimal_hash_count(tight, n)
}

#[test]
fn regression_fixtures() {
    let filter = BloomFilter::<str>::new(10, 0.5).unwrap();
    assert_eq!(filter.bit_count(), 15);
    assert_eq!(filter.hash_function_count(), 1);

    let filter = BloomFilter::<str>::new(100, 0.01).unwrap();
    assert_eq!(filter.bit_count(), 959);
    assert_eq!(filter.hash_function_count(), 7);
}
