// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronica Placer: greedy vertical collision avoidance for lane labels.
//!
//! Items on a timeline lane (entity labels and event markers) all want to
//! sit near the lane's axis line at an x fixed by their year. This crate
//! resolves the resulting vertical crowding: each candidate starts at its
//! preferred y and is displaced up/down in growing alternating steps until
//! it clears everything placed before it.
//!
//! Properties of the algorithm:
//! - Greedy and order-sensitive; [`LanePlacer::place_all`] processes
//!   candidates in ascending x so dense clusters resolve deterministically.
//! - Margins shrink as the view zooms in (`h = max(5, 15/scale)`,
//!   `v = max(4, 8/√scale)`), keeping the layout legible across the whole
//!   zoom range rather than at one tuning point.
//! - Bounded: after [`PlacerParams::max_attempts`] displacements the last
//!   position is accepted even if it still overlaps. Overlap is a degraded
//!   but valid outcome; the placer never loops or fails.
//! - The final y is clamped into the lane's vertical bounds.
//!
//! The placer is generic over the caller's source-id type, so entity and
//! event ids can share one obstacle set per lane.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use smallvec::SmallVec;

/// Tuning knobs for the placement pass.
///
/// Defaults match the margins every rendering surface shares; they are
/// configuration, not invariants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacerParams {
    /// Horizontal margin at scale 1, in pixels.
    pub h_margin_base: f64,
    /// Horizontal margin floor, in pixels.
    pub h_margin_min: f64,
    /// Vertical margin at scale 1, in pixels.
    pub v_margin_base: f64,
    /// Vertical margin floor, in pixels.
    pub v_margin_min: f64,
    /// Displacement attempts before accepting an overlapping position.
    pub max_attempts: u32,
}

impl Default for PlacerParams {
    fn default() -> Self {
        Self {
            h_margin_base: 15.0,
            h_margin_min: 5.0,
            v_margin_base: 8.0,
            v_margin_min: 4.0,
            max_attempts: 24,
        }
    }
}

/// An item awaiting placement. `x` and `preferred_y` address the item's
/// center; `width`/`height` are its natural (measured) size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<K> {
    /// Caller's identifier, carried through to [`Placed`].
    pub source: K,
    /// Horizontal center, fixed by the item's year.
    pub x: f64,
    /// Natural width of the item's bounding box.
    pub width: f64,
    /// Natural height of the item's bounding box.
    pub height: f64,
    /// Vertical center the item would occupy if the lane were empty.
    pub preferred_y: f64,
}

/// A placed item: final bounding box plus the caller's identifier.
///
/// Produced fresh on every layout pass; never persisted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placed<K> {
    /// Caller's identifier from the [`Candidate`].
    pub source: K,
    /// Final bounding box in surface pixels.
    pub rect: Rect,
}

/// Placement state for one lane: the margins in effect and the obstacle
/// set accumulated so far.
#[derive(Clone, Debug)]
pub struct LanePlacer<K> {
    h_margin: f64,
    v_margin: f64,
    top: f64,
    bottom: f64,
    max_attempts: u32,
    placed: SmallVec<[Placed<K>; 32]>,
}

impl<K: Copy> LanePlacer<K> {
    /// Creates a placer for a lane spanning `top..bottom` vertically, with
    /// margins derived from the current zoom `scale`.
    #[must_use]
    pub fn new(params: &PlacerParams, scale: f64, top: f64, bottom: f64) -> Self {
        let scale = scale.max(1e-6);
        Self {
            h_margin: params.h_margin_min.max(params.h_margin_base / scale),
            v_margin: params.v_margin_min.max(params.v_margin_base / scale.sqrt()),
            top: top.min(bottom),
            bottom: top.max(bottom),
            max_attempts: params.max_attempts,
            placed: SmallVec::new(),
        }
    }

    /// The horizontal margin in effect for this lane.
    #[must_use]
    pub fn h_margin(&self) -> f64 {
        self.h_margin
    }

    /// The vertical margin in effect for this lane.
    #[must_use]
    pub fn v_margin(&self) -> f64 {
        self.v_margin
    }

    /// Everything placed so far, in placement order.
    #[must_use]
    pub fn placed(&self) -> &[Placed<K>] {
        &self.placed
    }

    /// Consumes the placer, returning the placements in placement order.
    #[must_use]
    pub fn into_placed(self) -> Vec<Placed<K>> {
        self.placed.into_vec()
    }

    /// Places one candidate against the current obstacle set and records
    /// it as an obstacle for everything after it.
    ///
    /// The first candidate into an empty region keeps its preferred y
    /// exactly. Callers wanting the deterministic cluster behavior should
    /// prefer [`LanePlacer::place_all`], which sorts by x first.
    pub fn place(&mut self, candidate: Candidate<K>) -> Placed<K> {
        let step = candidate.height + self.v_margin;
        let mut y = candidate.preferred_y;
        let mut away = 0.0;

        for attempt in 1..=self.max_attempts {
            let Some(conflict) = self.first_conflict(&candidate, y) else {
                break;
            };
            if away == 0.0 {
                // Move away from whatever we hit first; alternation below
                // still visits both sides so clusters don't pile up on one.
                away = if candidate.preferred_y <= conflict.rect.center().y {
                    -1.0
                } else {
                    1.0
                };
            }
            let level = f64::from(attempt.div_ceil(2));
            let side = if attempt % 2 == 1 { away } else { -away };
            y = candidate.preferred_y + side * step * level;
        }
        // Attempt exhaustion falls through with the last y: bounded overlap
        // beats an unbounded search.

        y = self.clamp_to_lane(y, candidate.height);
        let placed = Placed {
            source: candidate.source,
            rect: Rect::new(
                candidate.x - candidate.width / 2.0,
                y - candidate.height / 2.0,
                candidate.x + candidate.width / 2.0,
                y + candidate.height / 2.0,
            ),
        };
        self.placed.push(placed);
        placed
    }

    /// Sorts candidates by ascending x and places each in turn.
    ///
    /// Ascending order makes dense clusters resolve the same way on every
    /// pass regardless of input order.
    pub fn place_all(&mut self, candidates: impl IntoIterator<Item = Candidate<K>>) {
        let mut sorted: Vec<Candidate<K>> = candidates.into_iter().collect();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        for candidate in sorted {
            self.place(candidate);
        }
    }

    fn first_conflict(&self, candidate: &Candidate<K>, y: f64) -> Option<&Placed<K>> {
        self.placed.iter().find(|other| {
            let center = other.rect.center();
            let h_overlap = (candidate.x - center.x).abs()
                < (candidate.width + other.rect.width()) / 2.0 + self.h_margin;
            let v_overlap =
                (y - center.y).abs() < (candidate.height + other.rect.height()) / 2.0 + self.v_margin;
            h_overlap && v_overlap
        })
    }

    fn clamp_to_lane(&self, y: f64, height: f64) -> f64 {
        let half = height / 2.0;
        let lo = self.top + half;
        let hi = self.bottom - half;
        if lo <= hi {
            y.clamp(lo, hi)
        } else {
            // Item taller than the lane: center it.
            (self.top + self.bottom) / 2.0
        }
    }
}
