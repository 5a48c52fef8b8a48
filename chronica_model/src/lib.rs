// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronica Model: input records for the timeline layout engine.
//!
//! These types describe the data a host application feeds into the layout
//! pipeline: lanes (parallel timelines), entities anchored to a year, marker
//! events, and directed relations between entities. The engine treats them
//! as immutable per layout pass; creation, editing, and persistence belong
//! to the host.
//!
//! The one value flowing the other way is [`PositionOverride`]: when a user
//! finishes dragging an entity, the engine hands the host a record of the
//! new position and resolved year to persist.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::string::String;

/// Identifier for a lane (one timeline's horizontal track).
///
/// This is a small, opaque handle. The engine never interprets the value;
/// hosts typically map it to a database key.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneId(pub u32);

/// Identifier for an entity placed on a lane.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Identifier for a marker event on a lane.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u32);

/// One timeline's horizontal track within a (possibly multi-timeline) view.
///
/// A single-lane view is the degenerate case of the multi-lane model.
/// Declared bounds are optional hints that widen the resolved year range;
/// they do not clip the lane's contents.
#[derive(Clone, Debug, PartialEq)]
pub struct Lane {
    /// Stable identifier.
    pub id: LaneId,
    /// Display name of the lane.
    pub name: String,
    /// Optional declared start year.
    pub declared_start: Option<f64>,
    /// Optional declared end year.
    pub declared_end: Option<f64>,
}

/// An entity positioned on a lane by a single anchor year.
///
/// Year fields are all optional; the anchor used for layout is resolved by
/// [`Entity::anchor_year`]. Entities without any resolvable year are
/// silently excluded from layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Stable identifier.
    pub id: EntityId,
    /// The lane this entity belongs to.
    pub lane: LaneId,
    /// Label text shown next to the entity marker.
    pub label: String,
    /// Primary date (for a person, typically the birth year).
    pub primary_year: Option<f64>,
    /// Secondary date (for a person, typically the death year).
    pub secondary_year: Option<f64>,
    /// Explicit per-entity override, e.g. from a persisted drag.
    pub override_year: Option<f64>,
}

impl Entity {
    /// Resolves the year used to position this entity.
    ///
    /// Priority: explicit override, then the secondary date, then the
    /// primary date. `None` means the entity has no position and is
    /// excluded from layout.
    #[must_use]
    pub fn anchor_year(&self) -> Option<f64> {
        self.override_year
            .or(self.secondary_year)
            .or(self.primary_year)
    }
}

/// Classification of a marker event, used for glyph selection by hosts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A published work.
    Publication,
    /// A meeting or correspondence between entities.
    Encounter,
    /// Surrounding historical context.
    Historical,
    /// Anything else.
    Other,
}

/// A discrete marker on a lane. Unlike entities, events always have a year.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Stable identifier.
    pub id: EventId,
    /// The lane this event belongs to.
    pub lane: LaneId,
    /// The year the event occurred.
    pub year: f64,
    /// Label text shown next to the marker.
    pub label: String,
    /// Marker classification.
    pub kind: EventKind,
}

/// A directed relation between two entities.
///
/// Relations are drawn only once both endpoints have resolved, placed
/// positions; otherwise they are silently skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct Relation {
    /// Source entity.
    pub from: EntityId,
    /// Target entity.
    pub to: EntityId,
    /// Optional label drawn along the connection.
    pub label: Option<String>,
}

/// Position emitted when a user completes a drag of an entity.
///
/// The engine computes the resolved `year` from the drop position; the host
/// is responsible for persisting it (typically as the entity's
/// [`Entity::override_year`] for the next layout pass).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionOverride {
    /// The dragged entity.
    pub entity: EntityId,
    /// Final pointer x in view pixels.
    pub x: f64,
    /// Final pointer y in view pixels.
    pub y: f64,
    /// Year corresponding to `x` under the view transform at drop time.
    pub year: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn entity(primary: Option<f64>, secondary: Option<f64>, overridden: Option<f64>) -> Entity {
        Entity {
            id: EntityId(1),
            lane: LaneId(1),
            label: "Kant".to_string(),
            primary_year: primary,
            secondary_year: secondary,
            override_year: overridden,
        }
    }

    #[test]
    fn anchor_prefers_override() {
        let e = entity(Some(1724.0), Some(1804.0), Some(1750.0));
        assert_eq!(e.anchor_year(), Some(1750.0));
    }

    #[test]
    fn anchor_prefers_secondary_over_primary() {
        let e = entity(Some(1724.0), Some(1804.0), None);
        assert_eq!(e.anchor_year(), Some(1804.0));
    }

    #[test]
    fn anchor_falls_back_to_primary() {
        let e = entity(Some(1724.0), None, None);
        assert_eq!(e.anchor_year(), Some(1724.0));
    }

    #[test]
    fn anchor_is_none_without_any_year() {
        let e = entity(None, None, None);
        assert_eq!(e.anchor_year(), None);
    }
}
