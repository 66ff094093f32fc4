// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A hexbin scatter visual built on `hexviz_core` and `hexviz_charts`.
//!
//! The host hands us a [`DataView`] (a category column plus role-bound value
//! columns), a viewport, and [`VisualSettings`]; [`HexbinScatter::update`]
//! runs the synchronous transform → scale → bin → reconcile cycle and returns
//! a [`Frame`] of mark diffs for the host's adapter to apply. Pointer events
//! come back through the visual and produce tooltip events and style effects;
//! how tooltips and selection are *displayed* stays the host's concern.

#![no_std]

extern crate alloc;

mod data;
mod interaction;
mod settings;
mod transform;
mod visual;

pub use data::{CategoryColumn, DataView, Role, ValueColumn};
pub use interaction::{
    Effect, HoverTarget, InteractionController, PointerOutput, SelectionState, TooltipEvent,
};
pub use settings::{AxisSettings, BinSettings, DotSettings, VisualSettings, parse_bin_divisor};
pub use transform::{PointKey, ScatterPoint, TooltipItem, ViewModel, build_view_model};
pub use visual::{Frame, HexbinScatter, RenderError, UpdateInput};
