//! Final preference order over accepted variants.

use std::cmp::Ordering;

use fadv_transform::Transform;

/// Larger batches first, then smaller shapes, comparing Z, Y, X last.
#[must_use]
pub fn size_order(l: &Transform, r: &Transform) -> Ordering {
    r.n.cmp(&l.n)
        .then_with(|| l.dim_size().cmp(&r.dim_size()))
        .then_with(|| l.z.cmp(&r.z))
        .then_with(|| l.y.cmp(&r.y))
        .then_with(|| l.x.cmp(&r.x))
}

/// Single before double, real before complex, out-of-place before in-place,
/// batched before not, then [`size_order`].
#[must_use]
pub fn perf_order(l: &Transform, r: &Transform) -> Ordering {
    r.is_float
        .cmp(&l.is_float)
        .then_with(|| r.is_real.cmp(&l.is_real))
        .then_with(|| l.is_in_place.cmp(&r.is_in_place))
        .then_with(|| r.is_batched.cmp(&l.is_batched))
        .then_with(|| size_order(l, r))
}

/// Stable sort by [`perf_order`], keeping the first `n_best`.
#[must_use]
pub fn rank_variants(mut variants: Vec<Transform>, n_best: usize) -> Vec<Transform> {
    variants.sort_by(perf_order);
    variants.truncate(n_best);
    variants
}
