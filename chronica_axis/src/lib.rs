// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronica Axis: the shared year axis of a timeline view.
//!
//! This crate provides the two halves of the horizontal coordinate system:
//! - [`ViewState`] + [`AxisScale`]: pan/zoom state and the reversible
//!   year ↔ pixel transform, including pointer-anchored zoom.
//! - [`TickPlan`]: selection of "nice" major/minor gridline intervals for
//!   the current zoom, and iteration over the resulting ticks.
//!
//! Every rendering surface (live canvas, combined multi-lane view, static
//! export, minimap, year picker) is expected to build its geometry through
//! these types with the same [`AxisParams`], so surfaces agree
//! pixel-for-pixel at scale 1.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronica_axis::{AxisParams, AxisScale, ViewState};
//! use chronica_range::YearRange;
//!
//! let params = AxisParams::default();
//! let mut view = ViewState::new(800.0, 600.0);
//! let range = YearRange { start: 1650.0, end: 1960.0 };
//!
//! // Zoom in around the pixel under the pointer.
//! view.zoom_about(400.0, 1.25, range, &params);
//!
//! let axis = AxisScale::new(range, &view, &params);
//! let x = axis.year_to_x(1789.0);
//! assert!((axis.x_to_year(x) - 1789.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod scale;
mod ticks;

pub use scale::{AxisParams, AxisScale, ViewState};
pub use ticks::{MAJOR_INTERVALS, MIN_MAJOR_SPACING_PX, Tick, TickPlan, Ticks};
