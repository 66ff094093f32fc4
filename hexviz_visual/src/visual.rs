// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visual itself: the synchronous update cycle.
//!
//! Each host update runs transform → layout → scales → bin → mark
//! generation → scene reconciliation and returns a [`Frame`] of diffs. The
//! scene retains mark state between updates, so a stable data point moves
//! with a transition instead of being redrawn from scratch.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use hexviz_charts::{
    AxisSpec, ColorScale, DotMarkSpec, HexCell, HexMarkSpec, Hexbin, LayoutSpec, PlotLayout,
    ScaleLinear, Size, extent, scatter_domain,
};
use hexviz_core::{Mark, MarkDiff, MarkId, Scene, SceneError, Transition};
use kurbo::Point;
use peniko::Color;
use smallvec::{SmallVec, smallvec};

use crate::data::DataView;
use crate::interaction::{HoverTarget, InteractionController, PointerOutput};
use crate::settings::VisualSettings;
use crate::transform::{PointKey, TooltipItem, build_view_model};

/// Below this viewport the whole frame is hidden (retained state survives).
const MIN_VIEWPORT: Size = Size {
    width: 160.0,
    height: 100.0,
};
/// Below this width the x tick labels are elided to `…`.
const NARROW_VIEWPORT_WIDTH: f64 = 240.0;

const HEX_TRANSITION: Transition = Transition::ease(1000);
const DOT_TRANSITION: Transition = Transition::ease(1500);

const BIN_TOOLTIP_HEADER: &str = "Bin Stats";

// Mark-id groups. Axis groups are per axis so tick ids never collide.
const GROUP_HEXES: u16 = 1;
const GROUP_HEX_LABELS: u16 = 2;
const GROUP_DOTS: u16 = 3;
const GROUP_X_AXIS: u16 = 4;
const GROUP_Y_AXIS: u16 = 5;

/// Low stop shared by the density and measure color ramps.
fn ramp_low() -> Color {
    Color::from_rgb8(0xDD, 0xDD, 0xDD)
}

fn dot_stroke() -> Color {
    Color::from_rgb8(0x44, 0x44, 0x44)
}

/// Errors surfaced by [`HexbinScatter::update`].
///
/// A failed update leaves the previous frame's retained state intact; the
/// caller logs the error and skips the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Scene reconciliation rejected the generated marks.
    Scene(SceneError),
}

impl From<SceneError> for RenderError {
    fn from(err: SceneError) -> Self {
        Self::Scene(err)
    }
}

/// One update's output: a visibility flag plus the diffs to apply.
#[derive(Debug, Default)]
pub struct Frame {
    /// Whether the visual should be shown at all. When `false` the adapter
    /// hides its output but keeps its retained marks.
    pub visible: bool,
    /// Scene diffs in deterministic `(z_index, id)` order.
    pub diffs: Vec<MarkDiff>,
}

/// One host update's input.
#[derive(Clone, Copy, Debug)]
pub struct UpdateInput<'a> {
    /// The dataview, if the host has one.
    pub data: Option<&'a DataView>,
    /// Current viewport size.
    pub viewport: Size,
    /// Current settings.
    pub settings: VisualSettings,
}

#[derive(Clone, Debug)]
enum HoverEntry {
    Dot {
        key: PointKey,
        radius: f64,
        items: SmallVec<[TooltipItem; 4]>,
    },
    Cell {
        items: SmallVec<[TooltipItem; 4]>,
    },
}

/// The hexbin scatter visual.
#[derive(Debug, Default)]
pub struct HexbinScatter {
    scene: Scene,
    controller: InteractionController,
    dots: Vec<(MarkId, PointKey)>,
    hover_index: HashMap<MarkId, HoverEntry>,
}

impl HexbinScatter {
    /// Creates a visual with an empty scene and no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the interaction controller.
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Runs one synchronous update cycle.
    pub fn update(&mut self, input: &UpdateInput<'_>) -> Result<Frame, RenderError> {
        if input.viewport.width < MIN_VIEWPORT.width || input.viewport.height < MIN_VIEWPORT.height
        {
            // Too small to draw: hide everything but keep retained state so
            // the scene picks up where it left off when the viewport grows.
            return Ok(Frame {
                visible: false,
                diffs: Vec::new(),
            });
        }

        let settings = &input.settings;
        let vm = build_view_model(input.data);

        let layout = PlotLayout::arrange(&LayoutSpec {
            viewport: input.viewport,
            x_axis: settings.axes.x_axis,
            y_axis: settings.axes.y_axis,
            x_title: settings.axes.x_title,
            y_title: settings.axes.y_title,
        });
        let plot = layout.plot;

        let zero = settings.axes.origin_zero_zero;
        let x_domain = scatter_domain(extent(vm.points.iter().map(|p| p.x)), zero);
        let y_domain = scatter_domain(extent(vm.points.iter().map(|p| p.y)), zero);
        let x_scale = ScaleLinear::new(x_domain, (plot.x0, plot.x1));
        let y_scale = ScaleLinear::new(y_domain, (plot.y1, plot.y0));

        let screen: Vec<Point> = vm
            .points
            .iter()
            .map(|p| Point::new(x_scale.map(p.x), y_scale.map(p.y)))
            .collect();

        self.dots.clear();
        self.hover_index.clear();
        let mut marks = Vec::new();

        if settings.bins.show {
            self.hexbin_marks(settings, plot.width(), &screen, &mut marks);
        }

        if settings.dots.show {
            let measure_ramp = vm.has_measure.then(|| {
                let domain = extent(vm.points.iter().filter_map(|p| p.measure)).unwrap_or((0.0, 1.0));
                ColorScale::new(domain, ramp_low(), settings.dots.color)
            });
            for (point, pos) in vm.points.iter().zip(&screen) {
                let id = MarkId::in_group(GROUP_DOTS, point.key.0);
                let fill = match (&measure_ramp, point.measure) {
                    (Some(ramp), Some(m)) => ramp.color_at(m),
                    _ => settings.dots.color,
                };
                marks.push(
                    DotMarkSpec::new(id, *pos, settings.dots.size)
                        .with_fill(fill)
                        .with_stroke(dot_stroke(), 1.0)
                        .with_opacity(self.controller.selection().opacity_for(point.key))
                        .with_transition(DOT_TRANSITION)
                        .mark(),
                );
                self.dots.push((id, point.key));
                self.hover_index.insert(
                    id,
                    HoverEntry::Dot {
                        key: point.key,
                        radius: settings.dots.size,
                        items: point.tooltip.clone(),
                    },
                );
            }
        }

        let narrow = input.viewport.width < NARROW_VIEWPORT_WIDTH;
        if settings.axes.x_axis || settings.axes.x_title {
            let mut axis = AxisSpec::bottom(GROUP_X_AXIS, x_domain)
                .with_rules(settings.axes.x_axis)
                .with_labels(settings.axes.x_axis);
            if settings.axes.x_title {
                axis = axis.with_title(vm.x_label.clone());
            }
            if narrow {
                axis = axis.with_tick_formatter(|_, _| String::from("…"));
            }
            marks.extend(axis.marks(plot, layout.axis_bottom.unwrap_or(plot)));
        }
        if settings.axes.y_axis || settings.axes.y_title {
            let mut axis = AxisSpec::left(GROUP_Y_AXIS, y_domain)
                .with_rules(settings.axes.y_axis)
                .with_labels(settings.axes.y_axis);
            if settings.axes.y_title {
                axis = axis.with_title(vm.y_label.clone());
            }
            marks.extend(axis.marks(plot, layout.axis_left.unwrap_or(plot)));
        }

        let diffs = self.scene.tick(marks)?;
        Ok(Frame {
            visible: true,
            diffs,
        })
    }

    fn hexbin_marks(
        &mut self,
        settings: &VisualSettings,
        plot_width: f64,
        screen: &[Point],
        marks: &mut Vec<Mark>,
    ) {
        let radius = plot_width / f64::from(settings.bins.divisor.max(1));
        let hexbin = Hexbin::new(radius);
        let cells = hexbin.bin(screen);
        let max_count = cells.iter().map(HexCell::count).max().unwrap_or(0);
        let ramp = ColorScale::new((0.0, max_count as f64), ramp_low(), settings.bins.color);

        for cell in &cells {
            let id = MarkId::in_group(GROUP_HEXES, cell.key());
            let spec = HexMarkSpec::new(id, cell.center)
                .with_fill(ramp.color_at(cell.count() as f64))
                .with_stroke(settings.bins.outline, 1.0)
                .with_transition(HEX_TRANSITION);
            marks.push(spec.mark(&hexbin));

            if settings.bins.show_labels {
                let label_id = MarkId::in_group(GROUP_HEX_LABELS, cell.key());
                marks.push(spec.count_label(label_id, cell.count(), 10.0, dot_stroke().into()));
                self.hover_index.insert(
                    id,
                    HoverEntry::Cell {
                        items: smallvec![TooltipItem {
                            header: String::from(BIN_TOOLTIP_HEADER),
                            display_name: String::from("Density"),
                            value: alloc::format!("{}", cell.count()),
                        }],
                    },
                );
            }
        }
    }

    /// The pointer entered the mark with `id`.
    ///
    /// Unknown ids (axis marks, stale elements) produce an empty output.
    pub fn pointer_enter(&mut self, id: MarkId, pos: Point) -> PointerOutput {
        let Some(entry) = self.hover_index.get(&id) else {
            return PointerOutput::default();
        };
        let target = match entry {
            HoverEntry::Dot { radius, items, .. } => HoverTarget::Dot {
                id,
                radius: *radius,
                items: items.clone(),
            },
            HoverEntry::Cell { items } => HoverTarget::Cell {
                items: items.clone(),
            },
        };
        self.controller.pointer_enter(target, pos)
    }

    /// The pointer moved while over a mark.
    pub fn pointer_move(&mut self, pos: Point) -> PointerOutput {
        self.controller.pointer_move(pos)
    }

    /// The pointer left the mark it was over.
    pub fn pointer_leave(&mut self) -> PointerOutput {
        self.controller.pointer_leave()
    }

    /// A click on the mark with `id`, or on the background (`None`).
    ///
    /// Only dots are selectable; clicks on cells or guides fall through to
    /// the background behavior.
    pub fn click(&mut self, id: Option<MarkId>) -> PointerOutput {
        let key = id.and_then(|id| match self.hover_index.get(&id) {
            Some(HoverEntry::Dot { key, .. }) => Some(*key),
            _ => None,
        });
        self.controller.click(key, &self.dots)
    }
}
