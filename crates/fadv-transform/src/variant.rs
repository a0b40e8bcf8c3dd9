#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::request::Rank;

/// One fully resolved transform variant with its raw buffer sizes.
///
/// A non-batched variant processes its `n` images one at a time, so its
/// buffers hold a single image. A batched variant holds all `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transform {
    pub device: i32,
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub n: usize,
    pub is_batched: bool,
    pub is_float: bool,
    pub is_forward: bool,
    pub is_in_place: bool,
    pub is_real: bool,
    /// Bytes of one real scalar (4 or 8).
    pub elem_size_b: u64,
    /// Elements of one input image.
    pub in_elems: u64,
    /// Elements of one output image.
    pub out_elems: u64,
    pub input_size_b: u64,
    pub output_size_b: u64,
    pub data_size_b: u64,
}

impl Transform {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        device: i32,
        x: usize,
        y: usize,
        z: usize,
        n: usize,
        is_batched: bool,
        is_float: bool,
        is_forward: bool,
        is_in_place: bool,
        is_real: bool,
    ) -> Self {
        let mut transform = Self {
            device,
            x,
            y,
            z,
            n,
            is_batched,
            is_float,
            is_forward,
            is_in_place,
            is_real,
            elem_size_b: 0,
            in_elems: 0,
            out_elems: 0,
            input_size_b: 0,
            output_size_b: 0,
            data_size_b: 0,
        };
        transform.set_sizes();
        transform
    }

    fn set_sizes(&mut self) {
        self.elem_size_b = if self.is_float { 4 } else { 8 };
        let complex_b = self.complex_elem_size_b();
        let yz = self.y as u64 * self.z as u64;

        let (in_elems, in_b, out_elems, out_b) = if self.is_real {
            let half = (self.x as u64 / 2 + 1) * yz;
            // in-place R2C needs the real rows padded to the complex width
            let real_side = if self.is_in_place { 2 * half } else { self.dim_size() };
            if self.is_forward {
                (real_side, self.elem_size_b, half, complex_b)
            } else {
                (half, complex_b, real_side, self.elem_size_b)
            }
        } else {
            let dims = self.dim_size();
            (dims, complex_b, dims, complex_b)
        };

        let batch = self.batch() as u64;
        self.in_elems = in_elems;
        self.out_elems = out_elems;
        self.input_size_b = (in_elems * in_b).saturating_mul(batch);
        self.output_size_b = (out_elems * out_b).saturating_mul(batch);
        self.data_size_b = if self.is_in_place {
            self.input_size_b.max(self.output_size_b)
        } else {
            self.input_size_b.saturating_add(self.output_size_b)
        };
    }

    #[must_use]
    pub const fn complex_elem_size_b(&self) -> u64 {
        2 * self.elem_size_b
    }

    /// Images held in memory at once.
    #[must_use]
    pub const fn batch(&self) -> usize {
        if self.is_batched { self.n } else { 1 }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        Rank::from_dims(self.y, self.z)
    }

    #[must_use]
    pub const fn dim_size(&self) -> u64 {
        self.x as u64 * self.y as u64 * self.z as u64
    }

    /// Serialize to JSON line for result export.
    #[must_use]
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Transform;

    #[test]
    fn complex_out_of_place_holds_two_buffers() {
        let t = Transform::new(0, 64, 64, 1, 10, true, true, true, false, false);
        let one_buffer = 64 * 64 * 8 * 10;
        assert_eq!(t.input_size_b, one_buffer);
        assert_eq!(t.output_size_b, one_buffer);
        assert_eq!(t.data_size_b, 2 * one_buffer);
    }

    #[test]
    fn non_batched_variant_holds_one_image() {
        let t = Transform::new(0, 64, 1, 1, 10, false, false, true, true, false);
        assert_eq!(t.batch(), 1);
        assert_eq!(t.data_size_b, 64 * 16);
    }

    #[test]
    fn real_forward_in_place_pads_real_rows() {
        let t = Transform::new(0, 10, 4, 1, 1, false, true, true, true, true);
        assert_eq!(t.out_elems, 6 * 4);
        assert_eq!(t.in_elems, 12 * 4);
        assert_eq!(t.input_size_b, t.output_size_b);
        assert_eq!(t.data_size_b, 6 * 4 * 8);
    }

    #[test]
    fn real_inverse_swaps_sides() {
        let t = Transform::new(0, 10, 1, 1, 1, false, false, false, false, true);
        assert_eq!(t.in_elems, 6);
        assert_eq!(t.input_size_b, 6 * 16);
        assert_eq!(t.output_size_b, 10 * 8);
        assert_eq!(t.data_size_b, 6 * 16 + 10 * 8);
    }

    #[test]
    fn json_line_exposes_shape() {
        let t = Transform::new(1, 128, 1, 1, 4, true, true, true, false, true);
        let parsed: serde_json::Value =
            serde_json::from_str(&t.to_json_line()).expect("valid JSON");
        assert_eq!(parsed["x"], 128);
        assert_eq!(parsed["device"], 1);
        assert_eq!(parsed["is_real"], true);
    }
}
