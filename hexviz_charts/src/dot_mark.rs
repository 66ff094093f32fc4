// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter dot mark generation.

use hexviz_core::{Mark, MarkId, Transition};
use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;

/// A circular scatter glyph with a stable identity.
#[derive(Clone, Debug)]
pub struct DotMarkSpec {
    /// Mark identity, stable across frames for the same data point.
    pub id: MarkId,
    /// Center in scene coordinates.
    pub center: Point,
    /// Glyph radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Outline paint.
    pub stroke: Brush,
    /// Outline width.
    pub stroke_width: f64,
    /// Glyph opacity in `[0, 1]`.
    pub opacity: f64,
    /// Rendering order hint.
    pub z_index: i32,
    /// Optional transition for position/style updates.
    pub transition: Option<Transition>,
}

impl DotMarkSpec {
    /// Creates a dot spec with a dark-grey outline and no transition.
    pub fn new(id: MarkId, center: Point, radius: f64) -> Self {
        Self {
            id,
            center,
            radius,
            fill: Brush::default(),
            stroke: Brush::Solid(css::DARK_SLATE_GRAY),
            stroke_width: 1.0,
            opacity: 1.0,
            z_index: crate::z_order::DOTS,
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

    /// Sets the glyph opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the update transition.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Builds the mark.
    pub fn mark(&self) -> Mark {
        let mut builder = Mark::builder(self.id).z_index(self.z_index);
        if let Some(transition) = self.transition {
            builder = builder.transition(transition);
        }
        builder
            .circle(self.center, self.radius)
            .fill(self.fill.clone())
            .stroke(self.stroke.clone(), self.stroke_width)
            .opacity(self.opacity)
            .build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use hexviz_core::MarkPayload;

    use super::*;

    #[test]
    fn mark_carries_geometry_and_style() {
        let spec = DotMarkSpec::new(MarkId::from_raw(7), Point::new(40.0, 60.0), 4.0)
            .with_fill(css::TEAL)
            .with_opacity(0.2)
            .with_transition(Transition::ease(1500));
        let mark = spec.mark();

        assert_eq!(mark.id, MarkId::from_raw(7));
        assert_eq!(mark.z_index, crate::z_order::DOTS);
        assert_eq!(mark.transition.map(|t| t.duration_ms), Some(1500));
        let MarkPayload::Circle(circle) = &mark.payload else {
            panic!("expected a circle payload");
        };
        assert_eq!(circle.center, Point::new(40.0, 60.0));
        assert_eq!(circle.radius, 4.0);
        assert_eq!(circle.opacity, 0.2);
    }
}
