// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `hexviz_core`.
//!
//! This crate is a small, reusable layer above `hexviz_core`:
//! - **Scales** map data values into screen coordinates, and Lab-space color
//!   ramps map values into perceptually even fills.
//! - **Binning** groups screen-space points into a pointy-top hexagonal grid.
//! - **Guides** (axes) and the plot layout are built by generating
//!   `hexviz_core::Mark`s with stable identities suitable for incremental
//!   diffing.
//!
//! Text shaping and layout are out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod axis;
mod color;
mod dot_mark;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod hex_mark;
mod hexbin;
mod layout;
mod scale;
pub mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, StrokeStyle};
pub use color::ColorScale;
pub use dot_mark::DotMarkSpec;
pub use format::{FieldFormat, format_category, format_si, format_tick_with_step};
pub use hex_mark::HexMarkSpec;
pub use hexbin::{HexCell, Hexbin};
pub use layout::{LayoutSpec, PlotLayout, Size};
pub use scale::{ScaleLinear, extent, scatter_domain};
