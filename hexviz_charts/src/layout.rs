// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot layout: margins and the data rectangle.
//!
//! Margins are fixed-size strips whose thickness depends on which guides are
//! enabled, so toggling an axis or a title off hands its strip back to the
//! plot. The layout is recomputed from the viewport on every update.

use kurbo::Rect;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene coordinate units.
    pub width: f64,
    /// Height in scene coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Layout inputs: the viewport plus which guides are enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSpec {
    /// Outer viewport size.
    pub viewport: Size,
    /// Whether the bottom (x) axis line/ticks/labels are drawn.
    pub x_axis: bool,
    /// Whether the left (y) axis line/ticks/labels are drawn.
    pub y_axis: bool,
    /// Whether the x axis title is drawn.
    pub x_title: bool,
    /// Whether the y axis title is drawn.
    pub y_title: bool,
}

/// Arranged plot rectangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    /// Outer viewport bounds.
    pub view: Rect,
    /// The data rectangle marks are mapped into.
    pub plot: Rect,
    /// Strip reserved for the left axis (labels plus title), if enabled.
    pub axis_left: Option<Rect>,
    /// Strip reserved for the bottom axis (labels plus title), if enabled.
    pub axis_bottom: Option<Rect>,
}

// Strip thicknesses. The base margins keep edge dots and the outermost tick
// labels inside the viewport even with all guides off.
const MARGIN_TOP: f64 = 10.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_LEFT_BASE: f64 = 25.0;
const MARGIN_BOTTOM_BASE: f64 = 15.0;
const Y_AXIS_STRIP: f64 = 59.0;
const X_AXIS_STRIP: f64 = 19.0;
const TITLE_STRIP: f64 = 16.0;

impl PlotLayout {
    /// Computes a layout from the provided specification.
    pub fn arrange(spec: &LayoutSpec) -> Self {
        let width = spec.viewport.width.max(0.0);
        let height = spec.viewport.height.max(0.0);

        let mut left = MARGIN_LEFT_BASE;
        if spec.y_axis {
            left += Y_AXIS_STRIP;
        }
        if spec.y_title {
            left += TITLE_STRIP;
        }
        let mut bottom = MARGIN_BOTTOM_BASE;
        if spec.x_axis {
            bottom += X_AXIS_STRIP;
        }
        if spec.x_title {
            bottom += TITLE_STRIP;
        }

        let view = Rect::new(0.0, 0.0, width, height);
        let plot = Rect::new(
            left.min(width),
            MARGIN_TOP.min(height),
            (width - MARGIN_RIGHT).max(left.min(width)),
            (height - bottom).max(MARGIN_TOP.min(height)),
        );

        let axis_left = (spec.y_axis || spec.y_title)
            .then(|| Rect::new(0.0, plot.y0, plot.x0, plot.y1));
        let axis_bottom = (spec.x_axis || spec.x_title)
            .then(|| Rect::new(plot.x0, plot.y1, plot.x1, view.y1));

        Self {
            view,
            plot,
            axis_left,
            axis_bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_guides_reserve_the_full_margins() {
        let layout = PlotLayout::arrange(&LayoutSpec {
            viewport: Size::new(500.0, 400.0),
            x_axis: true,
            y_axis: true,
            x_title: true,
            y_title: true,
        });
        assert_eq!(layout.plot, Rect::new(100.0, 10.0, 490.0, 350.0));
        assert!(layout.axis_left.is_some());
        assert!(layout.axis_bottom.is_some());
    }

    #[test]
    fn disabled_guides_hand_their_strips_back_to_the_plot() {
        let layout = PlotLayout::arrange(&LayoutSpec {
            viewport: Size::new(500.0, 400.0),
            x_axis: false,
            y_axis: false,
            x_title: false,
            y_title: false,
        });
        assert_eq!(layout.plot, Rect::new(25.0, 10.0, 490.0, 385.0));
        assert!(layout.axis_left.is_none());
        assert!(layout.axis_bottom.is_none());
    }

    #[test]
    fn tiny_viewports_never_produce_an_inverted_plot() {
        let layout = PlotLayout::arrange(&LayoutSpec {
            viewport: Size::new(40.0, 20.0),
            x_axis: true,
            y_axis: true,
            x_title: true,
            y_title: true,
        });
        assert!(layout.plot.width() >= 0.0);
        assert!(layout.plot.height() >= 0.0);
    }
}
