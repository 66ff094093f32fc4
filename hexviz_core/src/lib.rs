// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal retained-mark runtime for incremental chart rendering.
//!
//! This crate owns two things:
//! - **Marks**: stable-identity drawing primitives (paths, circles, text) with
//!   paint and an optional transition spec.
//! - **Scene**: a retained set of marks that diffs each frame's mark list
//!   against the previous one, producing enter/update/exit [`MarkDiff`]s.
//!
//! Nothing here draws. A thin adapter downstream (retained-mode SVG/DOM,
//! immediate-mode canvas, or a test harness) applies the diffs to whatever
//! surface is available. The scene does not run a clock either: transitions
//! are declarative specs the adapter schedules against its own frame clock,
//! and a new tick simply supersedes any in-flight transition for the same
//! identity (last update wins, no queueing).

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    CircleMark, Easing, Mark, MarkId, MarkPayload, PathMark, TextAnchor, TextBaseline, TextMark,
    Transition,
};
pub use scene::{MarkDiff, Scene, SceneError};
