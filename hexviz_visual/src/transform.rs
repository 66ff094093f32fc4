// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dataview-to-viewmodel transform.
//!
//! This stage is infallible: missing structure degrades to an empty view
//! model (the documented no-data state) and missing cells degrade to
//! defaults. Nulls and absent roles substitute `0.0` so every row stays
//! plottable; the substitution is applied here, once, so extents, binning,
//! and marks all agree on the same coordinates.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hexviz_charts::{FieldFormat, format_category};
use smallvec::SmallVec;

use crate::data::{DataView, Role, ValueColumn};

/// Tooltip header for per-point items.
pub(crate) const POINT_TOOLTIP_HEADER: &str = "Point Values";

/// A stable per-point identity for selection.
///
/// Derived from the category bytes folded with the row index (FNV-1a), so the
/// same input rows produce the same keys on every update cycle and persisted
/// selections stay valid across data refreshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointKey(pub u64);

impl PointKey {
    pub(crate) fn derive(category: Option<&str>, row: usize) -> Self {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut hash = FNV_OFFSET;
        if let Some(category) = category {
            for byte in category.as_bytes() {
                hash ^= u64::from(*byte);
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
        for byte in (row as u64).to_le_bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        Self(hash)
    }
}

/// One tooltip line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipItem {
    /// Grouping header shown above the items.
    pub header: String,
    /// Column display name (blank for absent roles).
    pub display_name: String,
    /// Formatted value (empty for absent roles).
    pub value: String,
}

/// One plottable point.
#[derive(Clone, Debug)]
pub struct ScatterPoint {
    /// Selection identity.
    pub key: PointKey,
    /// X coordinate in data units.
    pub x: f64,
    /// Y coordinate in data units.
    pub y: f64,
    /// Measure value, if the measure role is bound.
    pub measure: Option<f64>,
    /// Tooltip payload in role order: category, x, y, measure.
    pub tooltip: SmallVec<[TooltipItem; 4]>,
}

/// The transform output consumed by the update cycle.
#[derive(Clone, Debug, Default)]
pub struct ViewModel {
    /// One entry per input row.
    pub points: Vec<ScatterPoint>,
    /// X axis title, from the bound column's display name.
    pub x_label: String,
    /// Y axis title, from the bound column's display name.
    pub y_label: String,
    /// Whether the measure role is bound.
    pub has_measure: bool,
}

struct Binding<'a> {
    column: Option<&'a ValueColumn>,
    format: FieldFormat,
}

impl<'a> Binding<'a> {
    fn resolve(view: &'a DataView, role: Role) -> Self {
        let column = view.column(role);
        let format = column.map_or(FieldFormat::General, |c| FieldFormat::parse(&c.format));
        Self { column, format }
    }

    fn display_name(&self) -> &str {
        self.column.map_or("", |c| c.display_name.as_str())
    }

    /// The plotted coordinate: null and absent cells substitute `0.0`.
    fn coordinate(&self, row: usize) -> f64 {
        self.cell(row).unwrap_or(0.0)
    }

    fn cell(&self, row: usize) -> Option<f64> {
        self.column
            .and_then(|c| c.values.get(row).copied().flatten())
            .filter(|v| v.is_finite())
    }

    fn tooltip_item(&self, row: usize) -> TooltipItem {
        let value = if self.column.is_some() {
            self.format.value(Some(self.coordinate(row)))
        } else {
            String::new()
        };
        TooltipItem {
            header: String::from(POINT_TOOLTIP_HEADER),
            display_name: String::from(self.display_name()),
            value,
        }
    }
}

/// Builds the view model from a host dataview.
///
/// `None` and structurally empty views yield an empty view model.
pub fn build_view_model(view: Option<&DataView>) -> ViewModel {
    let Some(view) = view else {
        return ViewModel::default();
    };
    if view.is_empty() {
        return ViewModel::default();
    }

    let x = Binding::resolve(view, Role::X);
    let y = Binding::resolve(view, Role::Y);
    let measure = Binding::resolve(view, Role::Measure);

    let category_name = view
        .categories
        .as_ref()
        .map_or("", |c| c.display_name.as_str());

    let rows = view.row_count();
    let mut points = Vec::with_capacity(rows);
    for row in 0..rows {
        let category = view
            .categories
            .as_ref()
            .and_then(|c| c.values.get(row))
            .and_then(|v| v.as_deref());

        let mut tooltip = SmallVec::new();
        tooltip.push(TooltipItem {
            header: String::from(POINT_TOOLTIP_HEADER),
            display_name: String::from(category_name),
            value: format_category(category),
        });
        tooltip.push(x.tooltip_item(row));
        tooltip.push(y.tooltip_item(row));
        tooltip.push(measure.tooltip_item(row));

        points.push(ScatterPoint {
            key: PointKey::derive(category, row),
            x: x.coordinate(row),
            y: y.coordinate(row),
            measure: measure.cell(row).or(if measure.column.is_some() {
                Some(0.0)
            } else {
                None
            }),
            tooltip,
        });
    }

    ViewModel {
        points,
        x_label: String::from(x.display_name()),
        y_label: String::from(y.display_name()),
        has_measure: measure.column.is_some(),
    }
}
