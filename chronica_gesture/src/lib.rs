// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronica Gesture: turns raw pointer/wheel input into view operations.
//!
//! The layout engine itself is pure; this crate is the thin interaction
//! layer in front of it. It answers two questions:
//!
//! - *What does this wheel event mean?* [`classify_wheel`] applies the
//!   zoom/pan convention (plain scroll zooms, modified scroll pans, an
//!   inversion setting swaps them) and the trackpad-pinch heuristic.
//! - *Where is the current gesture?* [`Gesture`] is the per-surface state
//!   machine (`Idle → Panning → Idle`, `Idle → Zooming → Idle`), and
//!   [`ItemDrag`] tracks a drag of one item whose final position the host
//!   persists.
//!
//! Nothing here mutates view state; every method returns the delta or
//! action for the caller to apply, so a gesture abandoned mid-flight
//! (pointer leaves the surface) needs no rollback.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod track;
mod wheel;

pub use track::{DragEnd, DragTrack, ItemDrag};
pub use wheel::{WheelAction, WheelConfig, WheelEvent, classify_wheel};

use kurbo::{Point, Vec2};

/// Which gesture currently owns the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture in flight.
    #[default]
    Idle,
    /// A pointer-drag pan is in flight.
    Panning,
}

/// Pan/zoom gesture state for one timeline surface.
///
/// Pointer down/up edges move between `Idle` and `Panning`. Zooming is
/// transient: a wheel event arriving while idle yields its action and the
/// machine is back in `Idle` before the call returns, so no zoom state
/// ever persists between events.
#[derive(Copy, Clone, Debug, Default)]
pub struct Gesture {
    phase: GesturePhase,
    track: DragTrack,
}

impl Gesture {
    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Pointer-down edge: enters `Panning`.
    pub fn pointer_down(&mut self, pos: Point) {
        self.phase = GesturePhase::Panning;
        self.track.begin(pos);
    }

    /// Pointer-move: while panning, returns the pan delta to apply.
    pub fn pointer_move(&mut self, pos: Point) -> Option<Vec2> {
        match self.phase {
            GesturePhase::Panning => self.track.advance(pos),
            GesturePhase::Idle => None,
        }
    }

    /// Pointer-up edge: returns to `Idle`.
    pub fn pointer_up(&mut self) {
        self.phase = GesturePhase::Idle;
        self.track.finish();
    }

    /// Wheel event: classifies and returns the action when idle.
    ///
    /// While a pan is in flight wheel input is ignored; the surface admits
    /// one gesture at a time.
    pub fn wheel(&mut self, event: &WheelEvent, config: &WheelConfig) -> Option<WheelAction> {
        match self.phase {
            GesturePhase::Idle => Some(classify_wheel(event, config)),
            GesturePhase::Panning => None,
        }
    }
}
