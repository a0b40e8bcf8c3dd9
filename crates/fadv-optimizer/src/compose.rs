//! Cross-axis composition of per-axis candidates into whole shapes.
//!
//! Candidate lists are sorted ascending before composing, so once `X * Y`
//! exceeds the upper bound no later `Y` can fit either.

use fadv_transform::GeneralTransform;

use crate::options::OptimizeOptions;
use crate::polynom::{Polynom, filter_good_set, generate_candidates};
use crate::radix::RadixTable;

/// Inclusive element-count window a composed shape must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min_size: u64,
    pub max_size: u64,
}

impl SizeBounds {
    /// Padding never goes below the requested size; cropping may shrink by
    /// the allowed percentage. The upper bound is the smaller of the per-axis
    /// power-of-two ceilings and the allowed growth in either mode.
    #[must_use]
    pub fn new(
        tr: &GeneralTransform,
        max_perc_increase: u32,
        square_only: bool,
        crop: bool,
    ) -> Self {
        let dims = tr.dim_size();
        let ratio = f64::from(max_perc_increase) / 100.0;

        let min_size = if crop {
            (dims as f64 * (1.0 - ratio)).max(0.0) as u64
        } else {
            dims
        };

        let ceil_x = pow2_ceiling(tr.x);
        let (ceil_y, ceil_z) = if square_only {
            (ceil_x, ceil_x)
        } else {
            (pow2_ceiling(tr.y), pow2_ceiling(tr.z))
        };
        let pow2_bound = ceil_x.saturating_mul(ceil_y).saturating_mul(ceil_z);
        let after_increase = (dims as f64 * (1.0 + ratio)) as u64;
        let max_size = pow2_bound.min(after_increase);

        Self { min_size, max_size }
    }

    #[must_use]
    pub const fn contains(&self, size: u64) -> bool {
        self.min_size <= size && size <= self.max_size
    }
}

fn pow2_ceiling(len: usize) -> u64 {
    (len as u64).max(1).next_power_of_two()
}

/// How `square_only` constrains a pair of axis values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SquareRule {
    Off,
    /// Every axis must match X.
    AllAxes,
    /// Axes of length 1 are exempt.
    ActiveAxes,
}

impl SquareRule {
    fn admits(self, x: u64, other: u64) -> bool {
        match self {
            Self::Off => true,
            Self::AllAxes => x == other,
            Self::ActiveAxes => x == other || other == 1,
        }
    }
}

fn compose(
    tr: &GeneralTransform,
    axes: [&[Polynom]; 3],
    bounds: SizeBounds,
    n_best: usize,
    rule: SquareRule,
) -> Vec<GeneralTransform> {
    let [xs, ys, zs] = axes;
    let mut result = Vec::new();
    if n_best == 0 {
        return result;
    }
    for x in xs {
        for y in ys {
            if !rule.admits(x.value, y.value) {
                continue;
            }
            let xy = x.value.saturating_mul(y.value);
            if xy > bounds.max_size {
                break;
            }
            for z in zs {
                if !rule.admits(x.value, z.value) {
                    continue;
                }
                let xyz = xy.saturating_mul(z.value);
                if bounds.contains(xyz) {
                    let (x, y, z) = (x.value as usize, y.value as usize, z.value as usize);
                    result.push(tr.with_shape(x, y, z));
                    if result.len() == n_best {
                        return result;
                    }
                }
            }
        }
    }
    result
}

/// The `n_best` candidates nearest to `num`, ascending by value.
///
/// Cropping keeps the largest values, padding the smallest. A list with
/// fewer than `n_best` entries is kept whole.
fn top_candidates(
    num: usize,
    table: &RadixTable,
    is_float: bool,
    crop: bool,
    n_best: usize,
) -> Vec<Polynom> {
    let mut polys = generate_candidates(num, table.limits(is_float), crop);
    if crop {
        polys.sort_by(|l, r| r.value.cmp(&l.value));
    } else {
        polys.sort_by_key(|p| p.value);
    }
    polys.truncate(n_best);
    polys.sort_by_key(|p| p.value);
    if polys.is_empty() {
        polys.push(Polynom::UNIT);
    }
    polys
}

fn good_candidates(num: usize, table: &RadixTable, is_float: bool, crop: bool) -> Vec<Polynom> {
    filter_good_set(&generate_candidates(num, table.limits(is_float), crop))
}

/// Exhaustive composition for 3-D requests over the top `n_best` candidates
/// of each axis.
#[must_use]
pub fn optimize_xyz_3d(
    tr: &GeneralTransform,
    table: &RadixTable,
    options: &OptimizeOptions,
) -> Vec<GeneralTransform> {
    let OptimizeOptions {
        n_best,
        max_perc_increase,
        square_only,
        crop,
        ..
    } = *options;
    let is_float = tr.is_float.is();

    let xs = top_candidates(tr.x, table, is_float, crop, n_best);
    let own_y;
    let ys: &[Polynom] = if tr.x == tr.y || square_only {
        &xs
    } else {
        own_y = top_candidates(tr.y, table, is_float, crop, n_best);
        &own_y
    };
    let own_z;
    let zs: &[Polynom] = if tr.x == tr.z || square_only {
        &xs
    } else if tr.y == tr.z {
        ys
    } else {
        own_z = top_candidates(tr.z, table, is_float, crop, n_best);
        &own_z
    };

    let bounds = SizeBounds::new(tr, max_perc_increase, square_only, crop);
    let rule = if square_only {
        SquareRule::AllAxes
    } else {
        SquareRule::Off
    };
    compose(tr, [&xs, ys, zs], bounds, n_best, rule)
}

/// Filtered composition for 1-D and 2-D requests.
///
/// Each axis contributes its [`filter_good_set`]; an inactive axis
/// contributes the unit candidate and is exempt from `square_only`.
#[must_use]
pub fn optimize_xyz_1d_2d(
    tr: &GeneralTransform,
    table: &RadixTable,
    options: &OptimizeOptions,
) -> Vec<GeneralTransform> {
    let OptimizeOptions {
        n_best,
        max_perc_increase,
        square_only,
        crop,
        ..
    } = *options;
    let is_float = tr.is_float.is();

    let xs = good_candidates(tr.x, table, is_float, crop);
    let own_y;
    let ys: &[Polynom] = if tr.x == tr.y || (square_only && tr.y != 1) {
        &xs
    } else {
        own_y = good_candidates(tr.y, table, is_float, crop);
        &own_y
    };
    let own_z;
    let zs: &[Polynom] = if tr.x == tr.z || (square_only && tr.z != 1) {
        &xs
    } else if tr.y == tr.z {
        ys
    } else {
        own_z = good_candidates(tr.z, table, is_float, crop);
        &own_z
    };

    let bounds = SizeBounds::new(tr, max_perc_increase, square_only, crop);
    let rule = if square_only {
        SquareRule::ActiveAxes
    } else {
        SquareRule::Off
    };
    compose(tr, [&xs, ys, zs], bounds, n_best, rule)
}

#[cfg(test)]
mod tests {
    use fadv_transform::{GeneralTransform, Tristate};

    use super::{SizeBounds, optimize_xyz_1d_2d, optimize_xyz_3d, top_candidates};
    use crate::options::OptimizeOptions;
    use crate::polynom::Polynom;
    use crate::radix::{AcceleratorVersion, RadixTable};

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

    fn table() -> &'static RadixTable {
        RadixTable::for_version(AcceleratorVersion::V8).expect("v8 is supported")
    }

    fn shapes(found: &[GeneralTransform]) -> Vec<(usize, usize, usize)> {
        found.iter().map(|t| (t.x, t.y, t.z)).collect()
    }

    #[test]
    fn pad_bounds_start_at_requested_size() {
        let bounds = SizeBounds::new(&request(100, 1, 1), 10, false, false);
        assert_eq!(
            bounds,
            SizeBounds {
                min_size: 100,
                max_size: 110
            }
        );
    }

    #[test]
    fn pow2_ceiling_caps_growth() {
        let bounds = SizeBounds::new(&request(100, 1, 1), 50, false, false);
        assert_eq!(bounds.max_size, 128);
    }

    #[test]
    fn crop_bounds_shrink_below_and_allow_growth_above() {
        let bounds = SizeBounds::new(&request(100, 1, 1), 10, false, true);
        assert_eq!(
            bounds,
            SizeBounds {
                min_size: 90,
                max_size: 110
            }
        );
        let wide = SizeBounds::new(&request(100, 1, 1), 150, false, true);
        assert_eq!(wide.min_size, 0);
    }

    #[test]
    fn crop_keeps_largest_candidates_and_pad_keeps_smallest() {
        let values = |polys: Vec<Polynom>| polys.iter().map(|p| p.value).collect::<Vec<_>>();
        let cropped = top_candidates(100, table(), true, true, 3);
        assert_eq!(values(cropped), vec![96, 98, 100]);
        let padded = top_candidates(100, table(), true, false, 3);
        assert_eq!(values(padded), vec![100, 108, 112]);
    }

    #[test]
    fn square_crop_uses_x_candidates_on_a_shorter_axis() {
        let opts = OptimizeOptions::default()
            .with_crop(true)
            .with_square_only(true)
            .with_max_perc_increase(10)
            .with_n_best(10);
        let tr = request(100, 50, 1);
        assert_eq!(SizeBounds::new(&tr, 10, true, true).max_size, 5500);
        let found = optimize_xyz_1d_2d(&tr, table(), &opts);
        assert_eq!(shapes(&found), vec![(70, 70, 1), (72, 72, 1)]);
    }

    #[test]
    fn one_dimensional_pad_finds_nearby_sizes() {
        let opts = OptimizeOptions::default()
            .with_n_best(5)
            .with_max_perc_increase(10);
        let found = optimize_xyz_1d_2d(&request(100, 1, 1), table(), &opts);
        assert_eq!(shapes(&found), vec![(100, 1, 1), (108, 1, 1)]);
    }

    #[test]
    fn one_dimensional_crop_stays_below_request() {
        let opts = OptimizeOptions::default()
            .with_crop(true)
            .with_max_perc_increase(10);
        let found = optimize_xyz_1d_2d(&request(99, 1, 1), table(), &opts);
        assert!(!found.is_empty());
        for t in &found {
            assert!(t.x <= 99 && t.x >= 89, "{t:?}");
            assert_eq!((t.y, t.z), (1, 1));
        }
    }

    #[test]
    fn two_dimensional_square_keeps_axes_equal() {
        let opts = OptimizeOptions::default()
            .with_square_only(true)
            .with_max_perc_increase(30)
            .with_n_best(10);
        let found = optimize_xyz_1d_2d(&request(100, 100, 1), table(), &opts);
        assert!(!found.is_empty());
        for t in &found {
            assert_eq!(t.x, t.y);
            assert_eq!(t.z, 1);
            assert!(t.x * t.y >= 10_000 && t.x * t.y <= 13_000);
        }
    }

    #[test]
    fn square_only_exempts_inactive_axis() {
        let opts = OptimizeOptions::default().with_square_only(true);
        let found = optimize_xyz_1d_2d(&request(100, 1, 1), table(), &opts);
        assert_eq!(shapes(&found), vec![(100, 1, 1), (108, 1, 1)]);
    }

    #[test]
    fn three_dimensional_cube_search() {
        let opts = OptimizeOptions::default()
            .with_square_only(true)
            .with_n_best(5)
            .with_max_perc_increase(10);
        let found = optimize_xyz_3d(&request(100, 100, 100), table(), &opts);
        assert_eq!(shapes(&found), vec![(100, 100, 100)]);
    }

    #[test]
    fn three_dimensional_search_respects_n_best() {
        let opts = OptimizeOptions::default()
            .with_n_best(3)
            .with_max_perc_increase(40);
        let found = optimize_xyz_3d(&request(60, 50, 40), table(), &opts);
        assert_eq!(found.len(), 3);
        let bounds = SizeBounds::new(&request(60, 50, 40), 40, false, false);
        for t in &found {
            assert!(bounds.contains(t.dim_size()), "{t:?}");
        }
    }

    #[test]
    fn three_dimensional_inactive_axis_uses_unit() {
        let opts = OptimizeOptions::default().with_max_perc_increase(20);
        let found = optimize_xyz_3d(&request(100, 1, 30), table(), &opts);
        assert!(!found.is_empty());
        assert!(found.iter().all(|t| t.y == 1));
    }

    #[test]
    fn zero_n_best_composes_nothing() {
        let opts = OptimizeOptions::default().with_n_best(0);
        assert!(optimize_xyz_3d(&request(64, 64, 64), table(), &opts).is_empty());
        assert!(optimize_xyz_1d_2d(&request(64, 1, 1), table(), &opts).is_empty());
    }
}
