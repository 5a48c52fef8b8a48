// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronica Range: derives the shared year window of a timeline view.
//!
//! Every rendering surface (main view, combined view, export, minimap, year
//! picker) positions content against one `[start, end]` year range. This
//! crate resolves that range from the lanes in view and everything they
//! contain, so all surfaces agree on the coordinate domain.
//!
//! [`resolve_range`] is a pure function of its inputs and is meant to be
//! re-run on every layout pass; it is cheap and idempotent, and caching it
//! across passes risks stale geometry after a data change.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use chronica_model::{Entity, Event, Lane};

/// The year window used when no input supplies any bound at all.
pub const DEFAULT_RANGE: YearRange = YearRange {
    start: -500.0,
    end: 2000.0,
};

/// Padding applied beyond the extreme years, in years, before rounding.
///
/// The actual padding is the larger of this and 5% of the raw span.
pub const MIN_PADDING_YEARS: f64 = 50.0;

/// An inclusive year window with `start < end`.
///
/// Construction via [`resolve_range`] guarantees the invariant; the span is
/// therefore always safe to divide by.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct YearRange {
    /// First year of the window.
    pub start: f64,
    /// Last year of the window.
    pub end: f64,
}

impl YearRange {
    /// Returns the width of the window in years. Always positive.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if `year` lies inside the window.
    #[must_use]
    pub fn contains(&self, year: f64) -> bool {
        year >= self.start && year <= self.end
    }
}

/// Resolves the shared year window for a set of lanes and their contents.
///
/// Folds, in order: each lane's declared bounds, each entity's primary and
/// secondary years plus any explicit override (all contribute independently
/// so that combining lanes never narrows the window below what any one of
/// them needs), and each event's year. Non-finite years are ignored.
///
/// If nothing contributed a bound the result is exactly [`DEFAULT_RANGE`].
/// Otherwise the window is padded by `max(50, span * 0.05)` years on both
/// ends and rounded outward to the nearest decade, so gridlines keep landing
/// on round numbers as the zoom changes.
///
/// Adding an input never shrinks the resolved window.
#[must_use]
pub fn resolve_range(lanes: &[Lane], entities: &[Entity], events: &[Event]) -> YearRange {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    let mut fold = |year: Option<f64>| {
        if let Some(y) = year
            && y.is_finite()
        {
            min = min.min(y);
            max = max.max(y);
        }
    };

    for lane in lanes {
        fold(lane.declared_start);
        fold(lane.declared_end);
    }
    for entity in entities {
        fold(entity.primary_year);
        fold(entity.secondary_year);
        fold(entity.override_year);
    }
    for event in events {
        fold(Some(event.year));
    }

    if min > max {
        return DEFAULT_RANGE;
    }

    let pad = MIN_PADDING_YEARS.max((max - min) * 0.05);
    let start = ((min - pad) / 10.0).floor() * 10.0;
    let end = ((max + pad) / 10.0).ceil() * 10.0;

    // Unreachable with positive padding, but the invariant must hold.
    if start < end {
        YearRange { start, end }
    } else {
        DEFAULT_RANGE
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use chronica_model::{Entity, EntityId, Event, EventId, EventKind, Lane, LaneId};

    use super::{DEFAULT_RANGE, YearRange, resolve_range};

    fn lane(id: u32, start: Option<f64>, end: Option<f64>) -> Lane {
        Lane {
            id: LaneId(id),
            name: "lane".to_string(),
            declared_start: start,
            declared_end: end,
        }
    }

    fn entity(id: u32, lane: u32, year: f64) -> Entity {
        Entity {
            id: EntityId(id),
            lane: LaneId(lane),
            label: "e".to_string(),
            primary_year: Some(year),
            secondary_year: None,
            override_year: None,
        }
    }

    fn event(id: u32, lane: u32, year: f64) -> Event {
        Event {
            id: EventId(id),
            lane: LaneId(lane),
            year,
            label: "ev".to_string(),
            kind: EventKind::Historical,
        }
    }

    #[test]
    fn empty_inputs_fall_back_to_default() {
        assert_eq!(resolve_range(&[], &[], &[]), DEFAULT_RANGE);
    }

    #[test]
    fn boundless_lane_alone_falls_back_to_default() {
        let lanes = vec![lane(1, None, None)];
        assert_eq!(resolve_range(&lanes, &[], &[]), DEFAULT_RANGE);
    }

    #[test]
    fn start_is_always_before_end() {
        let lanes = vec![lane(1, Some(1800.0), Some(1800.0))];
        let range = resolve_range(&lanes, &[], &[]);
        assert!(range.start < range.end);
    }

    #[test]
    fn pads_and_rounds_to_decades() {
        let lanes = vec![lane(1, Some(1703.0), Some(1901.0))];
        let range = resolve_range(&lanes, &[], &[]);
        // Span 198, so padding is the 50-year floor.
        assert_eq!(range, YearRange {
            start: 1650.0,
            end: 1960.0,
        });
        assert_eq!(range.start % 10.0, 0.0);
        assert_eq!(range.end % 10.0, 0.0);
    }

    #[test]
    fn both_entity_dates_widen_the_range() {
        let mut e = entity(1, 1, 1724.0);
        e.secondary_year = Some(1804.0);
        // The anchor resolves to 1804, but 1724 still counts.
        let range = resolve_range(&[], &[e], &[]);
        assert!(range.start <= 1724.0 - 50.0);
        assert!(range.end >= 1804.0 + 50.0);
    }

    #[test]
    fn event_years_widen_the_range() {
        let range = resolve_range(&[], &[], &[event(1, 1, 1789.0)]);
        assert!(range.contains(1789.0));
        assert!(range.span() >= 100.0);
    }

    #[test]
    fn non_finite_years_are_ignored() {
        let mut e = entity(1, 1, f64::NAN);
        e.secondary_year = Some(f64::INFINITY);
        assert_eq!(resolve_range(&[], &[e], &[]), DEFAULT_RANGE);
    }

    #[test]
    fn adding_inputs_never_shrinks_the_range() {
        let lanes = vec![lane(1, Some(1700.0), Some(1900.0))];
        let mut entities: Vec<Entity> = Vec::new();
        let mut prev = resolve_range(&lanes, &entities, &[]);
        for (i, year) in [1724.0, 1650.0, 1950.0, 1804.0].iter().enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "small test index")]
            entities.push(entity(i as u32, 1, *year));
            let next = resolve_range(&lanes, &entities, &[]);
            assert!(next.start <= prev.start, "start moved inward");
            assert!(next.end >= prev.end, "end moved inward");
            prev = next;
        }
    }

    #[test]
    fn two_lane_scenario_covers_padded_window() {
        let lanes = vec![
            lane(1, Some(1700.0), Some(1900.0)),
            lane(2, Some(1850.0), Some(1950.0)),
        ];
        let entities = vec![
            entity(1, 1, 1724.0),
            entity(2, 1, 1770.0),
            entity(3, 1, 1804.0),
            entity(4, 1, 1831.0),
            entity(5, 2, 1900.0),
        ];
        let range = resolve_range(&lanes, &entities, &[]);
        assert!(range.start <= 1695.0 && range.end >= 1955.0);
        assert_eq!(range.start % 10.0, 0.0);
        assert_eq!(range.end % 10.0, 0.0);
    }
}
