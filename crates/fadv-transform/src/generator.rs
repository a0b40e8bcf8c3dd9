#![forbid(unsafe_code)]

use crate::request::GeneralTransform;
use crate::variant::Transform;

/// Expands an abstract request into concrete variants.
pub trait VariantGenerator {
    /// Every concrete variant of `request` for `n` images, with any `Both`
    /// property resolved into both of its values.
    fn generate(&self, request: &GeneralTransform, n: usize, is_batched: bool) -> Vec<Transform>;
}

/// Cross product over precision, direction, placement and domain, `true`
/// branches first.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardVariantGenerator;

impl VariantGenerator for StandardVariantGenerator {
    fn generate(&self, request: &GeneralTransform, n: usize, is_batched: bool) -> Vec<Transform> {
        let mut out = Vec::new();
        for &is_float in request.is_float.values() {
            for &is_forward in request.is_forward.values() {
                for &is_in_place in request.is_in_place.values() {
                    for &is_real in request.is_real.values() {
                        out.push(Transform::new(
                            request.device,
                            request.x,
                            request.y,
                            request.z,
                            n,
                            is_batched,
                            is_float,
                            is_forward,
                            is_in_place,
                            is_real,
                        ));
                    }
                }
            }
        }
        out
    }
}

/// Axis-order permutations of `request`, the original order first.
///
/// Only axes longer than 1 move; inactive axes keep their position. Orders
/// that produce an identical shape are reported once.
#[must_use]
pub fn transpositions(request: &GeneralTransform) -> Vec<GeneralTransform> {
    let dims = [request.x, request.y, request.z];
    let active: Vec<usize> = (0..dims.len()).filter(|&axis| dims[axis] > 1).collect();
    let values: Vec<usize> = active.iter().map(|&axis| dims[axis]).collect();

    let mut shapes: Vec<[usize; 3]> = Vec::new();
    for order in permutations(values.len()) {
        let mut shape = dims;
        for (slot, &source) in active.iter().zip(&order) {
            shape[*slot] = values[source];
        }
        if !shapes.contains(&shape) {
            shapes.push(shape);
        }
    }
    shapes
        .into_iter()
        .map(|[x, y, z]| request.with_shape(x, y, z))
        .collect()
}

/// Index permutations of `0..len` in lexicographic order.
fn permutations(len: usize) -> Vec<Vec<usize>> {
    if len == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for first in 0..len {
        for rest in permutations(len - 1) {
            let mut order = vec![first];
            order.extend(
                rest.into_iter()
                    .map(|idx| if idx >= first { idx + 1 } else { idx }),
            );
            out.push(order);
        }
    }
    out
}
