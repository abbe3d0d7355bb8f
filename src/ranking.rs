use crate::grouping::CountBucket;

/// The `k` highest-count buckets, descending.
///
/// Equal counts keep their input order, so the result does not depend on the
/// stability of the sort. `k == 0` yields nothing.
pub fn top_k(buckets: &[CountBucket], k: usize) -> Vec<CountBucket> {
    if k == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<(usize, &CountBucket)> = buckets.iter().enumerate().collect();
    ranked.sort_unstable_by(|(ia, a), (ib, b)| b.count.cmp(&a.count).then_with(|| ia.cmp(ib)));
    ranked.into_iter().take(k).map(|(_, b)| b.clone()).collect()
}

/// Highest-count bucket; the earliest one wins a tie.
pub fn top(buckets: &[CountBucket]) -> Option<&CountBucket> {
    buckets.iter().fold(None, |best: Option<&CountBucket>, b| match best {
        Some(cur) if cur.count >= b.count => Some(cur),
        _ => Some(b),
    })
}
