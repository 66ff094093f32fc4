// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover, selection, and tooltip handling.
//!
//! All handling is synchronous and single-threaded: the host adapter calls
//! in with pointer events and applies the returned effects before the next
//! event arrives. Selection is per visual instance and survives update
//! cycles because it is keyed by [`PointKey`], not by mark id.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashSet;
use hexviz_core::MarkId;
use kurbo::Point;
use smallvec::SmallVec;

use crate::transform::{PointKey, TooltipItem};

/// Dot radius while hovered.
pub(crate) const HOVER_RADIUS: f64 = 8.0;
/// Opacity of unselected dots while a selection exists.
pub(crate) const DIMMED_OPACITY: f64 = 0.2;

/// The set of selected points.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected: HashSet<PointKey>,
}

impl SelectionState {
    /// Returns whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns whether `key` is selected.
    pub fn contains(&self, key: PointKey) -> bool {
        self.selected.contains(&key)
    }

    /// Toggles `key` and returns whether it is now selected.
    pub fn toggle(&mut self, key: PointKey) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Clears the selection (host-driven deselection).
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// The opacity a dot with `key` should render at.
    pub fn opacity_for(&self, key: PointKey) -> f64 {
        if self.is_empty() || self.contains(key) {
            1.0
        } else {
            DIMMED_OPACITY
        }
    }
}

/// What the pointer is over.
#[derive(Clone, Debug)]
pub enum HoverTarget {
    /// A scatter dot; hovering grows it to the hover radius.
    Dot {
        /// The dot's mark id.
        id: MarkId,
        /// Radius to restore on leave.
        radius: f64,
        /// Tooltip payload.
        items: SmallVec<[TooltipItem; 4]>,
    },
    /// A hexagon cell; cells show density tooltips but are not selectable.
    Cell {
        /// Tooltip payload.
        items: SmallVec<[TooltipItem; 4]>,
    },
}

/// A tooltip instruction for the host's tooltip service.
#[derive(Clone, Debug)]
pub enum TooltipEvent {
    /// Show a tooltip with the given items at the given position.
    Show {
        /// Tooltip lines.
        items: SmallVec<[TooltipItem; 4]>,
        /// Pointer position in scene coordinates.
        pos: Point,
    },
    /// Move the visible tooltip.
    Move {
        /// Pointer position in scene coordinates.
        pos: Point,
    },
    /// Hide the tooltip.
    Hide,
}

/// A style change the adapter applies to a retained mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Set a circle mark's radius.
    SetRadius {
        /// Target mark.
        id: MarkId,
        /// New radius.
        radius: f64,
    },
    /// Set a mark's opacity.
    SetOpacity {
        /// Target mark.
        id: MarkId,
        /// New opacity.
        opacity: f64,
    },
}

/// The result of one pointer event.
#[derive(Clone, Debug, Default)]
pub struct PointerOutput {
    /// Tooltip instruction, if any.
    pub tooltip: Option<TooltipEvent>,
    /// Style effects to apply.
    pub effects: Vec<Effect>,
    /// Whether the adapter should stop event propagation.
    pub handled: bool,
}

#[derive(Clone, Debug)]
struct Hovered {
    restore: Option<(MarkId, f64)>,
}

/// Per-element hover state machine plus the selection set.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    selection: SelectionState,
    hovered: Option<Hovered>,
}

impl InteractionController {
    /// Creates a controller with an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The pointer entered a target: show its tooltip, and grow dots.
    pub fn pointer_enter(&mut self, target: HoverTarget, pos: Point) -> PointerOutput {
        // A missed leave event (fast pointer) is healed by entering directly.
        let mut out = self.pointer_leave();
        let (items, restore, effect) = match target {
            HoverTarget::Dot { id, radius, items } => (
                items,
                Some((id, radius)),
                Some(Effect::SetRadius {
                    id,
                    radius: HOVER_RADIUS,
                }),
            ),
            HoverTarget::Cell { items } => (items, None, None),
        };
        self.hovered = Some(Hovered { restore });
        out.tooltip = Some(TooltipEvent::Show { items, pos });
        out.effects.extend(effect);
        out.handled = true;
        out
    }

    /// The pointer moved while over the current target.
    pub fn pointer_move(&mut self, pos: Point) -> PointerOutput {
        PointerOutput {
            tooltip: self
                .hovered
                .is_some()
                .then_some(TooltipEvent::Move { pos }),
            ..PointerOutput::default()
        }
    }

    /// The pointer left the current target: hide the tooltip, restore radii.
    pub fn pointer_leave(&mut self) -> PointerOutput {
        let Some(hovered) = self.hovered.take() else {
            return PointerOutput::default();
        };
        let mut effects = Vec::new();
        if let Some((id, radius)) = hovered.restore {
            effects.push(Effect::SetRadius { id, radius });
        }
        PointerOutput {
            tooltip: Some(TooltipEvent::Hide),
            effects,
            handled: true,
        }
    }

    /// A click on a dot (`Some`) or the background (`None`).
    ///
    /// Dot clicks toggle that point and are handled (the adapter stops
    /// propagation); background clicks clear the selection. Either way the
    /// returned effects reassign every dot's opacity.
    pub fn click(
        &mut self,
        target: Option<PointKey>,
        dots: &[(MarkId, PointKey)],
    ) -> PointerOutput {
        let handled = match target {
            Some(key) => {
                self.selection.toggle(key);
                true
            }
            None => {
                self.selection.clear();
                false
            }
        };

        let effects = dots
            .iter()
            .map(|(id, key)| Effect::SetOpacity {
                id: *id,
                opacity: self.selection.opacity_for(*key),
            })
            .collect();

        PointerOutput {
            tooltip: None,
            effects,
            handled,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use smallvec::smallvec;

    use super::*;

    fn items() -> SmallVec<[TooltipItem; 4]> {
        smallvec![TooltipItem {
            header: String::from("Point Values"),
            display_name: String::from("Region"),
            value: String::from("A"),
        }]
    }

    fn dots() -> Vec<(MarkId, PointKey)> {
        (0..3)
            .map(|i| (MarkId::from_raw(100 + i), PointKey(i)))
            .collect()
    }

    #[test]
    fn hover_grows_the_dot_and_leave_restores_it() {
        let mut controller = InteractionController::new();
        let id = MarkId::from_raw(42);

        let out = controller.pointer_enter(
            HoverTarget::Dot {
                id,
                radius: 4.0,
                items: items(),
            },
            Point::new(10.0, 10.0),
        );
        assert!(matches!(out.tooltip, Some(TooltipEvent::Show { .. })));
        assert_eq!(
            out.effects,
            [Effect::SetRadius { id, radius: HOVER_RADIUS }]
        );

        let out = controller.pointer_move(Point::new(11.0, 10.0));
        assert!(matches!(out.tooltip, Some(TooltipEvent::Move { .. })));

        let out = controller.pointer_leave();
        assert!(matches!(out.tooltip, Some(TooltipEvent::Hide)));
        assert_eq!(out.effects, [Effect::SetRadius { id, radius: 4.0 }]);
    }

    #[test]
    fn cell_hover_shows_a_tooltip_without_radius_effects() {
        let mut controller = InteractionController::new();
        let out =
            controller.pointer_enter(HoverTarget::Cell { items: items() }, Point::new(0.0, 0.0));
        assert!(matches!(out.tooltip, Some(TooltipEvent::Show { .. })));
        assert!(out.effects.is_empty());
    }

    #[test]
    fn move_without_hover_is_a_no_op() {
        let mut controller = InteractionController::new();
        let out = controller.pointer_move(Point::new(1.0, 1.0));
        assert!(out.tooltip.is_none());
        assert!(out.effects.is_empty());
    }

    #[test]
    fn dot_click_dims_the_rest_and_is_handled() {
        let mut controller = InteractionController::new();
        let dots = dots();

        let out = controller.click(Some(PointKey(1)), &dots);
        assert!(out.handled);
        let expected = [DIMMED_OPACITY, 1.0, DIMMED_OPACITY];
        for ((effect, (_, _)), want) in out.effects.iter().zip(&dots).zip(expected) {
            let Effect::SetOpacity { opacity, .. } = effect else {
                panic!("expected opacity effects");
            };
            assert!((opacity - want).abs() < 1e-12);
        }
    }

    #[test]
    fn double_toggle_returns_to_unselected() {
        let mut controller = InteractionController::new();
        let dots = dots();

        controller.click(Some(PointKey(1)), &dots);
        let out = controller.click(Some(PointKey(1)), &dots);
        assert!(controller.selection().is_empty());
        assert!(
            out.effects
                .iter()
                .all(|e| matches!(e, Effect::SetOpacity { opacity, .. } if *opacity == 1.0))
        );
    }

    #[test]
    fn background_click_clears_and_restores_full_opacity() {
        let mut controller = InteractionController::new();
        let dots = dots();

        controller.click(Some(PointKey(0)), &dots);
        let out = controller.click(None, &dots);
        assert!(!out.handled);
        assert!(controller.selection().is_empty());
        assert!(
            out.effects
                .iter()
                .all(|e| matches!(e, Effect::SetOpacity { opacity, .. } if *opacity == 1.0))
        );
    }
}
