// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronica_model::EntityId;
use kurbo::{ParamCurveNearest, Point};

use crate::{ItemId, Scene, SceneParams};

/// Accuracy for the nearest-point search on relation segments.
const NEAREST_ACCURACY: f64 = 1e-3;

/// What a pointer position resolved to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// An entity label or event marker.
    Item(ItemId),
    /// A relation segment.
    Relation {
        /// Source entity of the relation.
        from: EntityId,
        /// Target entity of the relation.
        to: EntityId,
    },
}

/// Resolves a raw pointer position against the scene.
///
/// Items are tested topmost-first (reverse placement order) with their
/// boxes grown by the hit slop, so overlapping labels resolve to whichever
/// is drawn on top. If no item matches, relation segments are tested by
/// distance within [`SceneParams::relation_tolerance`]. Returns `None` on
/// empty space.
#[must_use]
pub fn hit_test(scene: &Scene, pos: Point, params: &SceneParams) -> Option<HitTarget> {
    let slop = params.hit_slop;
    for item in scene.items.iter().rev() {
        if item.rect.inflate(slop, slop).contains(pos) {
            return Some(HitTarget::Item(item.id));
        }
    }

    let tolerance_sq = params.relation_tolerance * params.relation_tolerance;
    scene
        .relations
        .iter()
        .map(|relation| {
            let nearest = relation.line.nearest(pos, NEAREST_ACCURACY);
            (relation, nearest.distance_sq)
        })
        .filter(|(_, distance_sq)| *distance_sq <= tolerance_sq)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(relation, _)| HitTarget::Relation {
            from: relation.from,
            to: relation.to,
        })
}
