// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark primitives.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, PathEl, Point};
use peniko::Brush;

/// A stable mark identity.
///
/// Identity is what the scene diffs on: a mark that keeps its id across frames
/// is *updated* (and can transition), a new id *enters*, a dropped id *exits*.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Creates an id for a keyed element within a mark group.
    ///
    /// The group occupies the top 16 bits so per-group keys (row identities,
    /// grid cells, tick indices) cannot collide across groups. Keys wider than
    /// 48 bits are folded down, which keeps the mapping deterministic.
    pub const fn in_group(group: u16, key: u64) -> Self {
        let folded = (key ^ (key >> 48)) & 0x0000_FFFF_FFFF_FFFF;
        Self(((group as u64) << 48) | folded)
    }

    /// Returns the group this id was created in (top 16 bits).
    pub const fn group(self) -> u16 {
        (self.0 >> 48) as u16
    }
}

/// Easing applied to a transition's progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Slow-in/slow-out cubic, the usual choice for position/size moves.
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
        }
    }
}

/// A declarative transition spec attached to a mark.
///
/// The scene hands this through on [`crate::MarkDiff::Update`]; entering marks
/// are placed at their final position without animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Progress easing.
    pub easing: Easing,
}

impl Transition {
    /// A linear transition.
    pub const fn linear(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            easing: Easing::Linear,
        }
    }

    /// A cubic-in-out transition.
    pub const fn ease(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            easing: Easing::CubicInOut,
        }
    }
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor at the start of the text run.
    #[default]
    Start,
    /// Anchor at the middle of the text run.
    Middle,
    /// Anchor at the end of the text run.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Center the text vertically on the anchor point.
    #[default]
    Middle,
    /// Standard alphabetic baseline.
    Alphabetic,
    /// Hanging baseline (text hangs below the anchor).
    Hanging,
}

/// A filled/stroked path mark.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint; `None` renders as unfilled.
    pub fill: Option<Brush>,
    /// Stroke paint; `None` renders as unstroked.
    pub stroke: Option<Brush>,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Element opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A circle mark.
#[derive(Clone, Debug)]
pub struct CircleMark {
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint; `None` renders as unstroked.
    pub stroke: Option<Brush>,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Element opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A text mark (unshaped; shaping is a renderer concern).
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Element opacity in `[0, 1]`.
    pub opacity: f64,
}

/// The drawable payload of a mark.
#[derive(Clone, Debug)]
pub enum MarkPayload {
    /// A path (hexagon outlines, axis rules, tick strokes).
    Path(PathMark),
    /// A circle (scatter dots).
    Circle(CircleMark),
    /// A text run (labels, titles, bin counts).
    Text(TextMark),
}

impl MarkPayload {
    /// Returns whether all geometry in this payload is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Path(p) => {
                let pt_ok = |pt: &Point| pt.x.is_finite() && pt.y.is_finite();
                p.stroke_width.is_finite()
                    && p.opacity.is_finite()
                    && p.path.elements().iter().all(|el| match el {
                        PathEl::MoveTo(a) | PathEl::LineTo(a) => pt_ok(a),
                        PathEl::QuadTo(a, b) => pt_ok(a) && pt_ok(b),
                        PathEl::CurveTo(a, b, c) => pt_ok(a) && pt_ok(b) && pt_ok(c),
                        PathEl::ClosePath => true,
                    })
            }
            Self::Circle(c) => {
                c.center.x.is_finite()
                    && c.center.y.is_finite()
                    && c.radius.is_finite()
                    && c.stroke_width.is_finite()
                    && c.opacity.is_finite()
            }
            Self::Text(t) => {
                t.pos.x.is_finite()
                    && t.pos.y.is_finite()
                    && t.font_size.is_finite()
                    && t.angle.is_finite()
                    && t.opacity.is_finite()
            }
        }
    }
}

/// A mark: stable identity + render order + payload + optional transition.
#[derive(Clone, Debug)]
pub struct Mark {
    /// Stable identity used for diffing.
    pub id: MarkId,
    /// Rendering order hint; adapters sort by `(z_index, id)`.
    pub z_index: i32,
    /// Drawable payload.
    pub payload: MarkPayload,
    /// Transition applied when this mark updates an existing one.
    pub transition: Option<Transition>,
}

impl Mark {
    /// Starts building a mark with the given identity.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder {
            id,
            z_index: 0,
            transition: None,
        }
    }
}

/// Common builder state shared by the payload-specific builders.
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    z_index: i32,
    transition: Option<Transition>,
}

impl MarkBuilder {
    /// Sets the z-index used for render ordering.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the transition applied on updates.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Continues as a path mark.
    pub fn path(self, path: BezPath) -> PathBuilder {
        PathBuilder {
            common: self,
            mark: PathMark {
                path,
                fill: None,
                stroke: None,
                stroke_width: 0.0,
                opacity: 1.0,
            },
        }
    }

    /// Continues as a circle mark.
    pub fn circle(self, center: Point, radius: f64) -> CircleBuilder {
        CircleBuilder {
            common: self,
            mark: CircleMark {
                center,
                radius,
                fill: Brush::default(),
                stroke: None,
                stroke_width: 0.0,
                opacity: 1.0,
            },
        }
    }

    /// Continues as a text mark.
    pub fn text(self, pos: Point, text: impl Into<String>) -> TextBuilder {
        TextBuilder {
            common: self,
            mark: TextMark {
                pos,
                text: text.into(),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::default(),
                baseline: TextBaseline::default(),
                fill: Brush::default(),
                opacity: 1.0,
            },
        }
    }

    fn finish(self, payload: MarkPayload) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload,
            transition: self.transition,
        }
    }
}

/// Builder for [`PathMark`]s.
#[derive(Clone, Debug)]
pub struct PathBuilder {
    common: MarkBuilder,
    mark: PathMark,
}

impl PathBuilder {
    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.mark.fill = Some(fill.into());
        self
    }

    /// Sets the stroke paint and width.
    pub fn stroke(mut self, stroke: impl Into<Brush>, width: f64) -> Self {
        self.mark.stroke = Some(stroke.into());
        self.mark.stroke_width = width;
        self
    }

    /// Sets the element opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.mark.opacity = opacity;
        self
    }

    /// Builds the mark.
    pub fn build(self) -> Mark {
        let payload = MarkPayload::Path(self.mark);
        self.common.finish(payload)
    }
}

/// Builder for [`CircleMark`]s.
#[derive(Clone, Debug)]
pub struct CircleBuilder {
    common: MarkBuilder,
    mark: CircleMark,
}

impl CircleBuilder {
    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.mark.fill = fill.into();
        self
    }

    /// Sets the stroke paint and width.
    pub fn stroke(mut self, stroke: impl Into<Brush>, width: f64) -> Self {
        self.mark.stroke = Some(stroke.into());
        self.mark.stroke_width = width;
        self
    }

    /// Sets the element opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.mark.opacity = opacity;
        self
    }

    /// Builds the mark.
    pub fn build(self) -> Mark {
        let payload = MarkPayload::Circle(self.mark);
        self.common.finish(payload)
    }
}

/// Builder for [`TextMark`]s.
#[derive(Clone, Debug)]
pub struct TextBuilder {
    common: MarkBuilder,
    mark: TextMark,
}

impl TextBuilder {
    /// Sets the font size.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.mark.font_size = font_size;
        self
    }

    /// Sets the rotation angle in degrees.
    pub fn angle(mut self, angle: f64) -> Self {
        self.mark.angle = angle;
        self
    }

    /// Sets the horizontal anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.mark.anchor = anchor;
        self
    }

    /// Sets the vertical baseline.
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.mark.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.mark.fill = fill.into();
        self
    }

    /// Sets the element opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.mark.opacity = opacity;
        self
    }

    /// Builds the mark.
    pub fn build(self) -> Mark {
        let payload = MarkPayload::Text(self.mark);
        self.common.finish(payload)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn group_ids_do_not_collide_across_groups() {
        let a = MarkId::in_group(1, 7);
        let b = MarkId::in_group(2, 7);
        assert_ne!(a, b);
        assert_eq!(a.group(), 1);
        assert_eq!(b.group(), 2);
    }

    #[test]
    fn wide_keys_fold_deterministically() {
        let key = 0xDEAD_BEEF_CAFE_F00D_u64;
        assert_eq!(MarkId::in_group(3, key), MarkId::in_group(3, key));
    }

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::CubicInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn builder_produces_finite_circle() {
        let mark = Mark::builder(MarkId::from_raw(1))
            .z_index(5)
            .transition(Transition::ease(1500))
            .circle(Point::new(10.0, 20.0), 4.0)
            .fill(css::TEAL)
            .stroke(css::BLACK, 1.0)
            .build();
        assert_eq!(mark.z_index, 5);
        assert!(mark.payload.is_finite());
        assert_eq!(mark.transition, Some(Transition::ease(1500)));
    }

    #[test]
    fn non_finite_geometry_is_detected() {
        let mark = Mark::builder(MarkId::from_raw(2))
            .circle(Point::new(f64::NAN, 0.0), 4.0)
            .build();
        assert!(!mark.payload.is_finite());
    }
}
