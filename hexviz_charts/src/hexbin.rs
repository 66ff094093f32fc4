// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexagonal binning of screen-space points.
//!
//! Points are snapped to a pointy-top hexagonal grid by converting to axial
//! coordinates and cube-rounding to the nearest cell. Binning is a full
//! recompute over the input, O(n) with a hash index keyed by axial
//! coordinates. Cells are reported in first-touch order and empty cells are
//! omitted.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{BezPath, Point};
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// One occupied cell of the hexagonal grid.
#[derive(Clone, Debug)]
pub struct HexCell {
    /// Geometric center of the cell in screen space.
    pub center: Point,
    /// Axial grid coordinates of the cell.
    pub axial: (i32, i32),
    /// Indices into the binned point slice, in input order.
    pub members: SmallVec<[usize; 8]>,
}

impl HexCell {
    /// A stable per-grid key derived from the axial coordinates, suitable for
    /// mark identity.
    pub fn key(&self) -> u64 {
        let (q, r) = self.axial;
        (u64::from(q as u32) << 32) | u64::from(r as u32)
    }

    /// Number of points in this cell.
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// A pointy-top hexagonal binner with a fixed cell radius.
#[derive(Clone, Copy, Debug)]
pub struct Hexbin {
    radius: f64,
}

impl Hexbin {
    /// Creates a binner with the given center-to-vertex radius.
    ///
    /// Non-finite or non-positive radii are clamped to a small positive value
    /// rather than rejected, since the radius is derived from user settings.
    pub fn new(radius: f64) -> Self {
        let radius = if radius.is_finite() && radius > 0.0 {
            radius
        } else {
            1.0
        };
        Self { radius }
    }

    /// The cell radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Assigns each finite point to its nearest hex cell.
    ///
    /// Every finite input point lands in exactly one cell, so the member
    /// counts sum to the number of finite points.
    pub fn bin(&self, points: &[Point]) -> Vec<HexCell> {
        let mut cells: Vec<HexCell> = Vec::new();
        let mut index: HashMap<(i32, i32), usize> = HashMap::new();

        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                continue;
            }
            let axial = self.axial_of(*p);
            match index.get(&axial) {
                Some(&slot) => cells[slot].members.push(i),
                None => {
                    index.insert(axial, cells.len());
                    let mut members = SmallVec::new();
                    members.push(i);
                    cells.push(HexCell {
                        center: self.center_of(axial),
                        axial,
                        members,
                    });
                }
            }
        }
        cells
    }

    /// The outline of the cell centered at `center`, as a closed path.
    pub fn hexagon(&self, center: Point) -> BezPath {
        let r = self.radius;
        let half_w = 0.5 * SQRT_3 * r;
        let offsets = [
            (0.0, -r),
            (half_w, -0.5 * r),
            (half_w, 0.5 * r),
            (0.0, r),
            (-half_w, 0.5 * r),
            (-half_w, -0.5 * r),
        ];
        let mut path = BezPath::new();
        path.move_to((center.x + offsets[0].0, center.y + offsets[0].1));
        for (dx, dy) in &offsets[1..] {
            path.line_to((center.x + dx, center.y + dy));
        }
        path.close_path();
        path
    }

    fn axial_of(&self, p: Point) -> (i32, i32) {
        let q = (SQRT_3 / 3.0 * p.x - p.y / 3.0) / self.radius;
        let r = (2.0 / 3.0 * p.y) / self.radius;
        cube_round(q, r)
    }

    fn center_of(&self, axial: (i32, i32)) -> Point {
        let (q, r) = (f64::from(axial.0), f64::from(axial.1));
        Point::new(
            self.radius * SQRT_3 * (q + 0.5 * r),
            self.radius * 1.5 * r,
        )
    }
}

/// Rounds fractional axial coordinates to the nearest cell via cube
/// coordinates, fixing up the component with the largest rounding error so
/// the cube invariant `x + y + z = 0` holds.
fn cube_round(q: f64, r: f64) -> (i32, i32) {
    let x = q;
    let z = r;
    let y = -x - z;

    let mut rx = x.round();
    let mut rz = z.round();
    let ry = y.round();

    let dx = (rx - x).abs();
    let dy = (ry - y).abs();
    let dz = (rz - z).abs();

    if dx > dy && dx > dz {
        rx = -ry - rz;
    } else if dy <= dz {
        rz = -rx - ry;
    }

    (clamp_coord(rx), clamp_coord(rz))
}

fn clamp_coord(v: f64) -> i32 {
    let v = v.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        v as i32
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Shape;

    use super::*;

    #[test]
    fn every_finite_point_lands_in_exactly_one_cell() {
        let hexbin = Hexbin::new(20.0);
        let points: Vec<Point> = (0..97)
            .map(|i| {
                let i = i as f64;
                Point::new(13.0 * i % 311.0, 29.0 * i % 197.0)
            })
            .collect();

        let cells = hexbin.bin(&points);
        let total: usize = cells.iter().map(HexCell::count).sum();
        assert_eq!(total, points.len());

        let mut seen = hashbrown::HashSet::new();
        for cell in &cells {
            assert!(!cell.members.is_empty(), "empty cells must be omitted");
            for m in &cell.members {
                assert!(seen.insert(*m), "point {m} assigned twice");
            }
        }
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let hexbin = Hexbin::new(10.0);
        let points = [
            Point::new(5.0, 5.0),
            Point::new(f64::NAN, 1.0),
            Point::new(1.0, f64::INFINITY),
        ];
        let cells = hexbin.bin(&points);
        let total: usize = cells.iter().map(HexCell::count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn cells_appear_in_first_touch_order() {
        let hexbin = Hexbin::new(10.0);
        // Far apart, then back into the first cell.
        let points = [
            Point::new(0.0, 0.0),
            Point::new(200.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let cells = hexbin.bin(&points);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].members.as_slice(), &[0, 2]);
        assert_eq!(cells[1].members.as_slice(), &[1]);
    }

    #[test]
    fn points_snap_to_the_nearest_center() {
        let hexbin = Hexbin::new(15.0);
        let points = [Point::new(47.0, 83.0)];
        let cells = hexbin.bin(&points);
        let center = cells[0].center;

        // No other cell center may be closer.
        let d0 = center.distance(points[0]);
        for dq in -2..=2_i32 {
            for dr in -2..=2_i32 {
                let other = (cells[0].axial.0 + dq, cells[0].axial.1 + dr);
                let c = hexbin.center_of(other);
                assert!(
                    c.distance(points[0]) + 1e-9 >= d0,
                    "cell {other:?} is closer than the assigned cell"
                );
            }
        }
    }

    #[test]
    fn hexagon_outline_is_closed_and_sized_by_the_radius() {
        let hexbin = Hexbin::new(12.0);
        let path = hexbin.hexagon(Point::new(100.0, 50.0));
        let bbox = path.bounding_box();
        assert!((bbox.height() - 24.0).abs() < 1e-9);
        assert!((bbox.width() - 12.0 * SQRT_3).abs() < 1e-9);
        assert!((bbox.center().x - 100.0).abs() < 1e-9);
        assert!((bbox.center().y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_radius_is_clamped() {
        assert_eq!(Hexbin::new(0.0).radius(), 1.0);
        assert_eq!(Hexbin::new(-3.0).radius(), 1.0);
        assert_eq!(Hexbin::new(f64::NAN).radius(), 1.0);
        assert_eq!(Hexbin::new(25.0).radius(), 25.0);
    }
}
