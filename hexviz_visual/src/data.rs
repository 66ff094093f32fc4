// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing dataview model.
//!
//! Hosts deliver tabular data as one optional category column plus value
//! columns bound to roles. Cells are optional; how missing cells are handled
//! is the transform's concern, not the dataview's.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// The role a value column is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
    /// Continuous color encoding for dots.
    Measure,
}

/// A role-bound numeric column.
#[derive(Clone, Debug, Default)]
pub struct ValueColumn {
    /// Column display name, used for axis titles and tooltips.
    pub display_name: String,
    /// Host format string for this column (may be empty).
    pub format: String,
    /// Per-row values; `None` is a missing cell.
    pub values: Vec<Option<f64>>,
}

/// The category column.
#[derive(Clone, Debug, Default)]
pub struct CategoryColumn {
    /// Column display name.
    pub display_name: String,
    /// Per-row categories; `None` is a missing cell.
    pub values: Vec<Option<String>>,
}

/// A single dataview: categories plus role-bound values.
#[derive(Clone, Debug, Default)]
pub struct DataView {
    /// The category column, if bound.
    pub categories: Option<CategoryColumn>,
    /// Role-bound value columns. At most one column per role is used; the
    /// first binding wins.
    pub values: Vec<(Role, ValueColumn)>,
}

impl DataView {
    /// Returns the first column bound to `role`, if any.
    pub fn column(&self, role: Role) -> Option<&ValueColumn> {
        self.values.iter().find(|(r, _)| *r == role).map(|(_, c)| c)
    }

    /// Number of rows, taken as the longest bound column.
    pub fn row_count(&self) -> usize {
        let categories = self.categories.as_ref().map_or(0, |c| c.values.len());
        self.values
            .iter()
            .map(|(_, c)| c.values.len())
            .fold(categories, usize::max)
    }

    /// Whether the view carries anything to plot.
    ///
    /// A view without a category column, or without any role-bound values,
    /// is the documented no-data state even when the other side has rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.categories.is_none() || self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn row_count_is_the_longest_column() {
        let view = DataView {
            categories: Some(CategoryColumn {
                display_name: "Region".to_string(),
                values: vec![Some("A".to_string()), Some("B".to_string())],
            }),
            values: vec![(
                Role::X,
                ValueColumn {
                    display_name: "Sales".to_string(),
                    format: String::new(),
                    values: vec![Some(1.0), Some(2.0), Some(3.0)],
                },
            )],
        };
        assert_eq!(view.row_count(), 3);
        assert!(!view.is_empty());
    }

    #[test]
    fn first_binding_per_role_wins() {
        let view = DataView {
            categories: None,
            values: vec![
                (
                    Role::Y,
                    ValueColumn {
                        display_name: "first".to_string(),
                        ..ValueColumn::default()
                    },
                ),
                (
                    Role::Y,
                    ValueColumn {
                        display_name: "second".to_string(),
                        ..ValueColumn::default()
                    },
                ),
            ],
        };
        assert_eq!(view.column(Role::Y).unwrap().display_name, "first");
        assert!(view.column(Role::X).is_none());
    }

    #[test]
    fn empty_views_report_empty() {
        assert!(DataView::default().is_empty());
    }

    #[test]
    fn categories_without_values_is_no_data() {
        let view = DataView {
            categories: Some(CategoryColumn {
                display_name: "Region".to_string(),
                values: vec![
                    Some("A".to_string()),
                    Some("B".to_string()),
                    Some("C".to_string()),
                ],
            }),
            values: vec![],
        };
        assert!(view.is_empty());
    }

    #[test]
    fn values_without_categories_is_no_data() {
        let view = DataView {
            categories: None,
            values: vec![(
                Role::X,
                ValueColumn {
                    display_name: "Sales".to_string(),
                    format: String::new(),
                    values: vec![Some(1.0), Some(2.0)],
                },
            )],
        };
        assert!(view.is_empty());
    }
}
