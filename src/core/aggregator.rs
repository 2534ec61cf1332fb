use std::collections::BTreeMap;

/// Counts how often each label occurs. Counts always sum to the number of
/// labels consumed.
pub fn count_categories<I, K>(categories: I) -> BTreeMap<K, usize>
where
    I: IntoIterator<Item = K>,
    K: Ord,
{
    let mut counts = BTreeMap::new();
    for category in categories {
        *counts.entry(category).or_insert(0) += 1;
    }
    counts
}
