//! Broadphase candidate enumeration.
//!
//! Scenes handled here are small, so there is no spatial partitioning: every
//! unordered pair of bodies is a candidate and goes straight to GJK.

/// Number of unordered pairs among `n` bodies, `n(n-1)/2`.
#[inline]
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Every unordered index pair `(i, j)` with `i < j < n`, in lexicographic order.
pub fn unordered_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
}
