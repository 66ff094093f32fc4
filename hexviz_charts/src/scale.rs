// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scales and scatter domain inference.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A collapsed domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns “nice-ish” tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Infer a `(min, max)` extent over an iterator of values.
///
/// Non-finite values are ignored. Returns `None` if no finite values are present.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Derives a scatter axis domain from a data extent.
///
/// A zero-anchored domain is `[0, max + 1]`; a data-anchored domain is
/// `[min - 1, max + 1]`. The one-unit padding also rescues all-equal data, so
/// the result is always finite and well ordered. An empty extent yields
/// `[0, 1]`.
pub fn scatter_domain(extent: Option<(f64, f64)>, zero_anchored: bool) -> (f64, f64) {
    let Some((min, max)) = extent else {
        return (0.0, 1.0);
    };
    let (d0, d1) = if zero_anchored {
        (0.0, max + 1.0)
    } else {
        (min - 1.0, max + 1.0)
    };
    // A zero anchor above an all-negative extent would invert the domain.
    if d1 > d0 { (d0, d1) } else { (d1, d0) }
}

pub(crate) fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

pub(crate) fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn maps_endpoints_to_range() {
        let s = ScaleLinear::new((-1.0, 31.0), (100.0, 0.0));
        assert!((s.map(-1.0) - 100.0).abs() < 1e-9);
        assert!((s.map(31.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn collapsed_domain_maps_to_range_start() {
        let s = ScaleLinear::new((5.0, 5.0), (10.0, 90.0));
        assert_eq!(s.map(5.0), 10.0);
        assert_eq!(s.map(123.0), 10.0);
    }

    #[test]
    fn extent_ignores_non_finite_values() {
        let e = extent([3.0, f64::NAN, -2.0, f64::INFINITY, 7.0]);
        assert_eq!(e, Some((-2.0, 7.0)));
        assert_eq!(extent([f64::NAN]), None);
        assert_eq!(extent([]), None);
    }

    #[test]
    fn scatter_domain_pads_by_one_unit() {
        assert_eq!(scatter_domain(Some((10.0, 30.0)), false), (9.0, 31.0));
        assert_eq!(scatter_domain(Some((10.0, 30.0)), true), (0.0, 31.0));
    }

    #[test]
    fn scatter_domain_is_finite_and_ordered_for_degenerate_extents() {
        assert_eq!(scatter_domain(None, false), (0.0, 1.0));

        // All-equal data is rescued by the padding.
        let (d0, d1) = scatter_domain(Some((4.0, 4.0)), false);
        assert!(d0 < d1);
        assert_eq!((d0, d1), (3.0, 5.0));

        // Zero anchor above an all-negative extent stays ordered.
        let (d0, d1) = scatter_domain(Some((-9.0, -5.0)), true);
        assert!(d0 < d1);
        assert!(d0.is_finite() && d1.is_finite());
    }

    #[test]
    fn ticks_fall_inside_the_domain() {
        let s = ScaleLinear::new((-1.0, 31.0), (0.0, 1.0));
        let ticks = s.ticks(10);
        assert!(!ticks.is_empty());
        for t in &ticks {
            assert!(*t >= -1.0 && *t <= 31.0, "tick {t} out of domain");
        }
    }
}
