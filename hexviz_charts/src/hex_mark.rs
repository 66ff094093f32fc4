// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexagon cell mark generation.

extern crate alloc;

use hexviz_core::{Mark, MarkId, TextAnchor, TextBaseline, Transition};
use kurbo::Point;
use peniko::Brush;

use crate::hexbin::Hexbin;

/// A filled hexagon cell with a stable identity.
#[derive(Clone, Debug)]
pub struct HexMarkSpec {
    /// Mark identity, stable across frames for the same grid cell.
    pub id: MarkId,
    /// Cell center in scene coordinates.
    pub center: Point,
    /// Fill paint.
    pub fill: Brush,
    /// Outline paint.
    pub stroke: Brush,
    /// Outline width.
    pub stroke_width: f64,
    /// Cell opacity in `[0, 1]`.
    pub opacity: f64,
    /// Rendering order hint.
    pub z_index: i32,
    /// Optional transition for fill/position updates.
    pub transition: Option<Transition>,
}

impl HexMarkSpec {
    /// Creates a hexagon spec with default paint and no transition.
    pub fn new(id: MarkId, center: Point) -> Self {
        Self {
            id,
            center,
            fill: Brush::default(),
            stroke: Brush::default(),
            stroke_width: 1.0,
            opacity: 1.0,
            z_index: crate::z_order::HEXAGONS,
            transition: None,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = width;
        self
    }

    /// Sets the cell opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets the update transition.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Builds the cell outline mark using `hexbin`'s radius.
    pub fn mark(&self, hexbin: &Hexbin) -> Mark {
        let mut builder = Mark::builder(self.id).z_index(self.z_index);
        if let Some(transition) = self.transition {
            builder = builder.transition(transition);
        }
        builder
            .path(hexbin.hexagon(self.center))
            .fill(self.fill.clone())
            .stroke(self.stroke.clone(), self.stroke_width)
            .opacity(self.opacity)
            .build()
    }

    /// Builds a centered count label for this cell.
    pub fn count_label(&self, label_id: MarkId, count: usize, font_size: f64, fill: Brush) -> Mark {
        let mut builder = Mark::builder(label_id).z_index(crate::z_order::HEX_LABELS);
        if let Some(transition) = self.transition {
            builder = builder.transition(transition);
        }
        builder
            .text(self.center, alloc::format!("{count}"))
            .font_size(font_size)
            .anchor(TextAnchor::Middle)
            .baseline(TextBaseline::Middle)
            .fill(fill)
            .build()
    }
}
