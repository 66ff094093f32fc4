// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! A single [`AxisSpec`] with an orient of `left` or `bottom` generates the
//! domain line, tick strokes, tick labels, and an optional title as
//! stable-identity marks. Layout is margin-driven (see [`crate::layout`]);
//! the axis draws into the strip the layout reserved for it.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hexviz_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{BezPath, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::format::{format_si, format_tick_with_step};
use crate::scale::ScaleLinear;
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Fill paint for the axis title.
    pub title_fill: Brush,
    /// Font size for the axis title.
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            rule: rule.clone(),
            label_fill: rule.brush.clone(),
            label_font_size: 10.0,
            title_fill: rule.brush,
            title_font_size: 11.0,
        }
    }
}

/// Axis placement relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A vertical axis to the left of the plot.
    Left,
    /// A horizontal axis below the plot.
    Bottom,
}

/// An axis specification.
#[derive(Clone)]
pub struct AxisSpec {
    /// Mark-id group; every generated mark uses a deterministic key within it.
    pub group: u16,
    /// The axis domain in data units.
    pub domain: (f64, f64),
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick stroke length in scene coordinates.
    pub tick_size: f64,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Whether to draw the domain line and tick strokes.
    pub rules: bool,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional axis title text.
    pub title: Option<String>,
    /// Optional tick label formatter `(value, step) -> label`.
    ///
    /// Defaults to step-aware decimals (`format_tick_with_step`), switching
    /// to SI prefixes (`format_si`) from a magnitude of 1000 up.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("group", &self.group)
            .field("domain", &self.domain)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("tick_padding", &self.tick_padding)
            .field("rules", &self.rules)
            .field("labels", &self.labels)
            .field("style", &self.style)
            .field("title", &self.title)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

// Mark-id keys within the axis group.
const KEY_DOMAIN: u64 = 0;
const KEY_TICKS: u64 = 1;
const KEY_LABELS: u64 = 1_000;
const KEY_TITLE: u64 = 9_000;

impl AxisSpec {
    /// Creates an axis with default styling and ~10 ticks.
    pub fn new(group: u16, domain: (f64, f64), orient: AxisOrient) -> Self {
        Self {
            group,
            domain,
            orient,
            tick_count: 10,
            tick_size: 5.0,
            tick_padding: 4.0,
            rules: true,
            labels: true,
            style: AxisStyle::default(),
            title: None,
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(group: u16, domain: (f64, f64)) -> Self {
        Self::new(group, domain, AxisOrient::Left)
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(group: u16, domain: (f64, f64)) -> Self {
        Self::new(group, domain, AxisOrient::Bottom)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable the domain line and tick strokes.
    pub fn with_rules(mut self, rules: bool) -> Self {
        self.rules = rules;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Returns the scale this axis uses for the given plot rectangle.
    ///
    /// Bottom axes map left-to-right; left axes map bottom-to-top (range
    /// inverted, since scene y grows downward).
    pub fn scale(&self, plot: Rect) -> ScaleLinear {
        let range = match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left => (plot.y1, plot.y0),
        };
        ScaleLinear::new(self.domain, range)
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None if v.abs() >= 1_000.0 => format_si(v),
            None => format_tick_with_step(v, step),
        }
    }

    /// Generate axis marks for the given plot rectangle and reserved axis strip.
    pub fn marks(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let scale = self.scale(plot);
        let ticks = scale.ticks(self.tick_count);
        let step = tick_step(&ticks);

        let mut out = Vec::with_capacity(2 * ticks.len() + 2);
        match self.orient {
            AxisOrient::Bottom => self.marks_bottom(plot, axis_rect, &scale, &ticks, step, &mut out),
            AxisOrient::Left => self.marks_left(plot, axis_rect, &scale, &ticks, step, &mut out),
        }
        out
    }

    fn marks_bottom(
        &self,
        plot: Rect,
        axis_rect: Rect,
        scale: &ScaleLinear,
        ticks: &[f64],
        step: f64,
        out: &mut Vec<Mark>,
    ) {
        let y = plot.y1;
        let tick_size = self.tick_size.abs();

        if self.rules {
            let mut domain = BezPath::new();
            domain.move_to((plot.x0, y));
            domain.line_to((plot.x1, y));
            out.push(self.rule(KEY_DOMAIN, domain));
        }

        for (i, v) in ticks.iter().copied().enumerate() {
            let x = scale.map(v);

            if self.rules {
                let mut tick = BezPath::new();
                tick.move_to((x, y));
                tick.line_to((x, y + tick_size));
                out.push(self.rule(KEY_TICKS + i as u64, tick));
            }

            if self.labels {
                let anchor = if i == 0 {
                    TextAnchor::Start
                } else if i + 1 == ticks.len() {
                    TextAnchor::End
                } else {
                    TextAnchor::Middle
                };
                out.push(
                    Mark::builder(MarkId::in_group(self.group, KEY_LABELS + i as u64))
                        .z_index(z_order::AXIS_LABELS)
                        .text(
                            (x, y + tick_size + self.tick_padding).into(),
                            self.format_tick(v, step),
                        )
                        .anchor(anchor)
                        .baseline(TextBaseline::Hanging)
                        .font_size(self.style.label_font_size)
                        .fill(self.style.label_fill.clone())
                        .build(),
                );
            }
        }

        if let Some(title) = &self.title {
            let x = plot.x0.midpoint(plot.x1);
            let y = axis_rect.y1 - self.style.title_font_size;
            out.push(
                Mark::builder(MarkId::in_group(self.group, KEY_TITLE))
                    .z_index(z_order::AXIS_TITLES)
                    .text((x, y).into(), title.clone())
                    .anchor(TextAnchor::Middle)
                    .baseline(TextBaseline::Hanging)
                    .font_size(self.style.title_font_size)
                    .fill(self.style.title_fill.clone())
                    .build(),
            );
        }
    }

    fn marks_left(
        &self,
        plot: Rect,
        axis_rect: Rect,
        scale: &ScaleLinear,
        ticks: &[f64],
        step: f64,
        out: &mut Vec<Mark>,
    ) {
        let x = plot.x0;
        let tick_size = self.tick_size.abs();

        if self.rules {
            let mut domain = BezPath::new();
            domain.move_to((x, plot.y0));
            domain.line_to((x, plot.y1));
            out.push(self.rule(KEY_DOMAIN, domain));
        }

        for (i, v) in ticks.iter().copied().enumerate() {
            let y = scale.map(v);

            if self.rules {
                let mut tick = BezPath::new();
                tick.move_to((x, y));
                tick.line_to((x - tick_size, y));
                out.push(self.rule(KEY_TICKS + i as u64, tick));
            }

            if self.labels {
                out.push(
                    Mark::builder(MarkId::in_group(self.group, KEY_LABELS + i as u64))
                        .z_index(z_order::AXIS_LABELS)
                        .text(
                            (x - tick_size - self.tick_padding, y).into(),
                            self.format_tick(v, step),
                        )
                        .anchor(TextAnchor::End)
                        .baseline(TextBaseline::Middle)
                        .font_size(self.style.label_font_size)
                        .fill(self.style.label_fill.clone())
                        .build(),
                );
            }
        }

        if let Some(title) = &self.title {
            // Rotated into the title strip at the outer edge of the axis rect.
            let x = axis_rect.x0 + 0.5 * self.style.title_font_size;
            let y = plot.y0.midpoint(plot.y1);
            out.push(
                Mark::builder(MarkId::in_group(self.group, KEY_TITLE))
                    .z_index(z_order::AXIS_TITLES)
                    .text((x, y).into(), title.clone())
                    .anchor(TextAnchor::Middle)
                    .baseline(TextBaseline::Middle)
                    .angle(-90.0)
                    .font_size(self.style.title_font_size)
                    .fill(self.style.title_fill.clone())
                    .build(),
            );
        }
    }

    fn rule(&self, key: u64, path: BezPath) -> Mark {
        Mark::builder(MarkId::in_group(self.group, key))
            .z_index(z_order::AXIS_RULES)
            .path(path)
            .stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
            .build()
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}
