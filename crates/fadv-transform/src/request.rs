#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::tristate::Tristate;

/// Dimensionality of a transform, derived from which axes exceed 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    OneD = 1,
    TwoD = 2,
    ThreeD = 3,
}

impl Rank {
    /// Z is checked first, so `100x1x5` is 3-D.
    #[must_use]
    pub const fn from_dims(y: usize, z: usize) -> Self {
        if z > 1 {
            Self::ThreeD
        } else if y > 1 {
            Self::TwoD
        } else {
            Self::OneD
        }
    }
}

/// A transform as the caller requested it, before size optimization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneralTransform {
    pub device: i32,
    pub x: usize,
    pub y: usize,
    pub z: usize,
    /// Number of images to process, not necessarily in one batch.
    pub n: usize,
    pub is_batched: Tristate,
    /// Single precision; otherwise double.
    pub is_float: Tristate,
    /// Forward; otherwise inverse.
    pub is_forward: Tristate,
    /// In-place; otherwise out-of-place.
    pub is_in_place: Tristate,
    /// Real input (R2C/C2R); otherwise C2C.
    pub is_real: Tristate,
}

impl GeneralTransform {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        device: i32,
        x: usize,
        y: usize,
        z: usize,
        n: usize,
        is_batched: Tristate,
        is_float: Tristate,
        is_forward: Tristate,
        is_in_place: Tristate,
        is_real: Tristate,
    ) -> Self {
        Self {
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
        }
    }

    /// Copy of this request with the axis lengths replaced.
    #[must_use]
    pub fn with_shape(&self, x: usize, y: usize, z: usize) -> Self {
        Self {
            x,
            y,
            z,
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        Rank::from_dims(self.y, self.z)
    }

    /// Element count of one image, `X * Y * Z`.
    #[must_use]
    pub const fn dim_size(&self) -> u64 {
        self.x as u64 * self.y as u64 * self.z as u64
    }
}

#[cfg(test)]
mod tests {
    use super::{GeneralTransform, Rank};
    use crate::Tristate;

    fn request(x: usize, y: usize, z: usize) -> GeneralTransform {
        GeneralTransform::new(
            0,
            x,
            y,
            z,
            1,
            Tristate::False,
            Tristate::True,
            Tristate::True,
            Tristate::False,
            Tristate::False,
        )
    }

    #[test]
    fn rank_checks_z_before_y() {
        assert_eq!(request(64, 1, 1).rank(), Rank::OneD);
        assert_eq!(request(64, 32, 1).rank(), Rank::TwoD);
        assert_eq!(request(64, 1, 3).rank(), Rank::ThreeD);
    }

    #[test]
    fn dim_size_does_not_overflow_32_bits() {
        let big = request(4096, 4096, 512);
        assert_eq!(big.dim_size(), 4096 * 4096 * 512);
    }

    #[test]
    fn with_shape_keeps_properties_and_recomputes_rank() {
        let base = request(100, 1, 1);
        let reshaped = base.with_shape(128, 128, 2);
        assert_eq!(reshaped.rank(), Rank::ThreeD);
        assert_eq!(reshaped.is_float, base.is_float);
        assert_eq!(reshaped.n, base.n);
    }
}
