// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained scene and its enter/update/exit diffing.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::mark::{Mark, MarkId, MarkPayload, Transition};

/// Errors surfaced by [`Scene::tick`].
///
/// These are reported *before* the scene is mutated, so a failed tick leaves
/// the previous frame's state intact and the caller can log and skip the
/// frame (the visual stays responsive for the next update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A mark carried NaN/infinite geometry, typically from a degenerate
    /// scale upstream.
    NonFiniteGeometry {
        /// The offending mark id.
        id: MarkId,
    },
    /// Two marks in one frame claimed the same identity.
    DuplicateMarkId {
        /// The duplicated mark id.
        id: MarkId,
    },
}

/// A single reconciliation step for one mark identity.
#[derive(Debug, Clone)]
pub enum MarkDiff {
    /// A new identity: insert at its final position and style, no animation.
    Enter {
        /// Mark identity.
        id: MarkId,
        /// Render order.
        z_index: i32,
        /// Payload to insert.
        new: Box<MarkPayload>,
    },
    /// An identity present in both frames: transition from `old` to `new`.
    ///
    /// If a previous transition for this identity is still in flight, this
    /// diff supersedes it; adapters retarget from wherever the element
    /// currently is.
    Update {
        /// Mark identity.
        id: MarkId,
        /// Previous render order.
        old_z_index: i32,
        /// New render order.
        new_z_index: i32,
        /// Previous frame's payload (the last committed target).
        old: Box<MarkPayload>,
        /// New target payload.
        new: Box<MarkPayload>,
        /// Transition to apply, if any; `None` means snap.
        transition: Option<Transition>,
    },
    /// An identity dropped this frame: remove it.
    Exit {
        /// Mark identity.
        id: MarkId,
        /// Render order it was last drawn at.
        z_index: i32,
        /// Payload it last showed.
        old: Box<MarkPayload>,
    },
}

impl MarkDiff {
    /// The identity this diff applies to.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }

    fn sort_key(&self) -> (i32, u64) {
        match self {
            Self::Enter { id, z_index, .. } | Self::Exit { id, z_index, .. } => (*z_index, id.0),
            Self::Update {
                id, new_z_index, ..
            } => (*new_z_index, id.0),
        }
    }
}

#[derive(Debug, Clone)]
struct Retained {
    z_index: i32,
    payload: MarkPayload,
}

/// A retained mark set diffed once per update cycle.
///
/// Each [`Scene::tick`] receives the *complete* mark list for the new frame
/// and partitions identities into enter (new), update (kept), and exit
/// (dropped): the three sets are disjoint and cover the union of the old and
/// new identity sets exactly. Diffs are emitted in `(z_index, id)` order so
/// adapters replay them deterministically.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Retained>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns whether the scene retains no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Reconciles the scene against a new frame's complete mark list.
    ///
    /// On error the scene is left unchanged.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Result<Vec<MarkDiff>, SceneError> {
        // Validate before mutating anything.
        let mut incoming: HashMap<MarkId, Mark> = HashMap::with_capacity(marks.len());
        for mark in marks {
            if !mark.payload.is_finite() {
                return Err(SceneError::NonFiniteGeometry { id: mark.id });
            }
            let id = mark.id;
            if incoming.insert(id, mark).is_some() {
                return Err(SceneError::DuplicateMarkId { id });
            }
        }

        let mut diffs = Vec::with_capacity(incoming.len() + self.marks.len());

        // Exits: previously retained identities absent from this frame.
        let exiting: Vec<MarkId> = self
            .marks
            .keys()
            .copied()
            .filter(|id| !incoming.contains_key(id))
            .collect();
        for id in exiting {
            if let Some(old) = self.marks.remove(&id) {
                diffs.push(MarkDiff::Exit {
                    id,
                    z_index: old.z_index,
                    old: Box::new(old.payload),
                });
            }
        }

        // Enters and updates.
        for (id, mark) in incoming {
            let new = mark.payload.clone();
            let retained = Retained {
                z_index: mark.z_index,
                payload: mark.payload,
            };
            match self.marks.insert(id, retained) {
                None => diffs.push(MarkDiff::Enter {
                    id,
                    z_index: mark.z_index,
                    new: Box::new(new),
                }),
                Some(previous) => diffs.push(MarkDiff::Update {
                    id,
                    old_z_index: previous.z_index,
                    new_z_index: mark.z_index,
                    old: Box::new(previous.payload),
                    new: Box::new(new),
                    transition: mark.transition,
                }),
            }
        }

        diffs.sort_by_key(MarkDiff::sort_key);
        Ok(diffs)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use hashbrown::HashSet;
    use kurbo::Point;
    use peniko::color::palette::css;

    use super::*;

    fn dot(id: u64, x: f64) -> Mark {
        Mark::builder(MarkId::from_raw(id))
            .z_index(10)
            .transition(Transition::ease(1500))
            .circle(Point::new(x, 0.0), 4.0)
            .fill(css::TEAL)
            .build()
    }

    #[test]
    fn first_tick_enters_everything() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![dot(1, 0.0), dot(2, 1.0)]).unwrap();
        assert_eq!(diffs.len(), 2);
        assert!(
            diffs
                .iter()
                .all(|d| matches!(d, MarkDiff::Enter { .. })),
            "all first-frame diffs should be enters"
        );
    }

    #[test]
    fn diff_sets_partition_the_identity_union() {
        let mut scene = Scene::new();
        scene.tick(vec![dot(1, 0.0), dot(2, 1.0), dot(3, 2.0)]).unwrap();

        let diffs = scene.tick(vec![dot(2, 5.0), dot(3, 6.0), dot(4, 7.0)]).unwrap();

        let mut enters = HashSet::new();
        let mut updates = HashSet::new();
        let mut exits = HashSet::new();
        for d in &diffs {
            match d {
                MarkDiff::Enter { id, .. } => enters.insert(id.0),
                MarkDiff::Update { id, .. } => updates.insert(id.0),
                MarkDiff::Exit { id, .. } => exits.insert(id.0),
            };
        }

        assert_eq!(enters, HashSet::from_iter([4]));
        assert_eq!(updates, HashSet::from_iter([2, 3]));
        assert_eq!(exits, HashSet::from_iter([1]));

        // Disjoint and covering: |E| + |U| + |X| == |P ∪ N|.
        assert_eq!(enters.len() + updates.len() + exits.len(), 4);
    }

    #[test]
    fn superseding_update_starts_from_last_committed_target() {
        let mut scene = Scene::new();
        scene.tick(vec![dot(1, 0.0)]).unwrap();
        scene.tick(vec![dot(1, 10.0)]).unwrap();

        // A third tick arrives "mid-transition": its `old` must be the
        // previous tick's target, not the original position. Last update
        // wins; nothing queues.
        let diffs = scene.tick(vec![dot(1, 20.0)]).unwrap();
        let MarkDiff::Update { old, new, .. } = &diffs[0] else {
            panic!("expected an update");
        };
        let MarkPayload::Circle(old) = old.as_ref() else {
            panic!("expected a circle");
        };
        let MarkPayload::Circle(new) = new.as_ref() else {
            panic!("expected a circle");
        };
        assert_eq!(old.center.x, 10.0);
        assert_eq!(new.center.x, 20.0);
    }

    #[test]
    fn empty_tick_exits_all_and_leaves_scene_empty() {
        let mut scene = Scene::new();
        scene.tick(vec![dot(1, 0.0), dot(2, 1.0)]).unwrap();
        let diffs = scene.tick(Vec::new()).unwrap();
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Exit { .. })));
        assert!(scene.is_empty());
    }

    #[test]
    fn non_finite_geometry_fails_without_mutating() {
        let mut scene = Scene::new();
        scene.tick(vec![dot(1, 0.0)]).unwrap();

        let bad = Mark::builder(MarkId::from_raw(9))
            .circle(Point::new(f64::NAN, 0.0), 4.0)
            .build();
        let err = scene.tick(vec![bad]).unwrap_err();
        assert_eq!(
            err,
            SceneError::NonFiniteGeometry {
                id: MarkId::from_raw(9)
            }
        );
        assert_eq!(scene.len(), 1, "failed tick must not mutate the scene");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut scene = Scene::new();
        let err = scene.tick(vec![dot(1, 0.0), dot(1, 5.0)]).unwrap_err();
        assert!(matches!(err, SceneError::DuplicateMarkId { .. }));
        assert!(scene.is_empty());
    }

    #[test]
    fn diffs_come_out_in_z_then_id_order() {
        let mut scene = Scene::new();
        let low = Mark::builder(MarkId::from_raw(5))
            .z_index(-10)
            .circle(Point::new(0.0, 0.0), 2.0)
            .build();
        let high = Mark::builder(MarkId::from_raw(1))
            .z_index(50)
            .circle(Point::new(0.0, 0.0), 2.0)
            .build();
        let diffs = scene.tick(vec![high, low]).unwrap();
        assert_eq!(diffs[0].id(), MarkId::from_raw(5));
        assert_eq!(diffs[1].id(), MarkId::from_raw(1));
    }
}
