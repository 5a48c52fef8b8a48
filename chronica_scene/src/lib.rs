// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronica Scene: the placement pass shared by every rendering surface.
//!
//! One pure function, [`layout`], composes the engine: resolve the shared
//! year range, build the axis transform, plan gridlines, and run the label
//! placer per lane. The resulting [`Scene`] is plain geometry — rects,
//! lines, and text positions — that the live canvas, the combined
//! multi-lane view, the minimap content, the year picker, and static
//! export all consume. Keeping a single pipeline is deliberate: the
//! surfaces previously each carried a near-duplicate of this logic and
//! drifted apart (inconsistent tick rounding being the visible symptom).
//!
//! The scene also answers interaction queries ([`hit_test`]) and converts
//! a completed item drag into a [`PositionOverride`] for the host to
//! persist ([`Scene::position_override`]).
//!
//! Everything recomputes from current inputs on every pass. All stages are
//! pure, so a redraw triggered mid-gesture simply re-runs the pipeline
//! against a consistent [`ViewState`] snapshot; no incremental state is
//! needed for correctness.
//!
//! ## Example
//!
//! ```rust
//! use chronica_axis::ViewState;
//! use chronica_model::{Entity, EntityId, Lane, LaneId};
//! use chronica_scene::{SceneInput, SceneParams, estimate_label_size, layout};
//!
//! let lanes = [Lane {
//!     id: LaneId(1),
//!     name: "German idealism".into(),
//!     declared_start: Some(1700.0),
//!     declared_end: Some(1900.0),
//! }];
//! let entities = [Entity {
//!     id: EntityId(1),
//!     lane: LaneId(1),
//!     label: "Kant".into(),
//!     primary_year: Some(1724.0),
//!     secondary_year: Some(1804.0),
//!     override_year: None,
//! }];
//!
//! let input = SceneInput {
//!     lanes: &lanes,
//!     entities: &entities,
//!     events: &[],
//!     relations: &[],
//! };
//! let view = ViewState::new(800.0, 600.0);
//! let scene = layout(&input, &view, &SceneParams::default(), estimate_label_size);
//! assert_eq!(scene.items.len(), 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod draw;
mod hit;
mod pass;

pub use draw::DrawCmd;
pub use hit::{HitTarget, hit_test};
pub use pass::{
    ItemId, LaneLayout, PlacedItem, RelationLine, Scene, SceneInput, TickMark, export_layout,
    layout,
};

use chronica_axis::AxisParams;
use chronica_placer::PlacerParams;
use kurbo::Size;

/// Tuning for the placement pass, shared by all surfaces of one view.
///
/// All values are presentation defaults, not invariants (the axis sitting
/// at 60% of lane height is a look, not a law); what matters is that every
/// surface of a view uses the same values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneParams {
    /// Axis transform constants.
    pub axis: AxisParams,
    /// Label placement margins and limits.
    pub placer: PlacerParams,
    /// Minimum pixel spacing between labeled gridlines.
    pub min_major_spacing: f64,
    /// Vertical position of a lane's axis line, as a fraction of lane
    /// height from the lane top.
    pub axis_fraction: f64,
    /// Gap between the axis line and the nearest label row, in pixels.
    pub label_gap: f64,
    /// Hit-test slop added around item boxes, in pixels.
    pub hit_slop: f64,
    /// Maximum pointer distance for hitting a relation line, in pixels.
    pub relation_tolerance: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            axis: AxisParams::default(),
            placer: PlacerParams::default(),
            min_major_spacing: 80.0,
            axis_fraction: 0.6,
            label_gap: 6.0,
            hit_slop: 4.0,
            relation_tolerance: 6.0,
        }
    }
}

/// Estimates a label's pixel size from its character count.
///
/// A stand-in for hosts without font metrics (tests, headless export).
/// Hosts with a text stack should pass their own measure function to
/// [`layout`] instead.
#[must_use]
pub fn estimate_label_size(text: &str) -> Size {
    let chars = text.chars().count();
    Size::new(chars as f64 * 7.2 + 10.0, 16.0)
}
