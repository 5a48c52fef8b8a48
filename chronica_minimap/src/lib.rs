// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronica Minimap: overview projection of the main timeline view.
//!
//! The minimap is a small fixed surface showing the whole year range with
//! a viewport rectangle marking the portion currently visible in the main
//! view. This crate computes that rectangle from the main view's
//! [`ViewState`] and maps overview clicks/drags back into main-view pan
//! offsets.
//!
//! Minimap *content* (lanes, entities) is not special-cased: hosts render
//! it by running the ordinary layout pipeline at the overview's pixel size
//! with a reset view state, the same way static export works.
//!
//! ## Example
//!
//! ```rust
//! use chronica_axis::{AxisParams, ViewState};
//! use chronica_minimap::{OverviewSurface, jump_offset, viewport_rect};
//!
//! let params = AxisParams::default();
//! let overview = OverviewSurface { width: 200.0, height: 40.0 };
//! let mut view = ViewState::new(800.0, 600.0);
//!
//! // At reset the viewport covers the whole overview.
//! let rect = viewport_rect(&view, &params, &overview);
//! assert_eq!(rect.width(), 200.0);
//!
//! // Clicking re-centers the main view on the clicked year.
//! view.offset_x = jump_offset(150.0, &view, &params, &overview);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use chronica_axis::{AxisParams, ViewState};
use kurbo::Rect;

/// Pixel dimensions of the overview surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverviewSurface {
    /// Overview width in pixels.
    pub width: f64,
    /// Overview height in pixels.
    pub height: f64,
}

/// Projects the main view's visible window into the overview.
///
/// The rectangle spans the overview's full height; its width is the
/// visible fraction of the scale-1 content width (clamped to the overview),
/// and its x position follows the main view's pan, clamped so the
/// rectangle never leaves the overview even when the main view is panned
/// past the content.
#[must_use]
pub fn viewport_rect(view: &ViewState, params: &AxisParams, overview: &OverviewSurface) -> Rect {
    let base = content_width(view, params);
    let width = overview
        .width
        .min(overview.width * view.pixel_width / (base * view.scale));
    let fraction = (-view.offset_x / view.scale) / base;
    let x = (fraction * overview.width).clamp(0.0, (overview.width - width).max(0.0));
    Rect::new(x, 0.0, x + width, overview.height)
}

/// Maps a click at overview pixel `x` to the main-view offset that centers
/// the clicked year in the main view.
#[must_use]
pub fn jump_offset(x: f64, view: &ViewState, params: &AxisParams, overview: &OverviewSurface) -> f64 {
    let fraction = if overview.width > 0.0 {
        (x / overview.width).clamp(0.0, 1.0)
    } else {
        0.0
    };
    -fraction * content_width(view, params) * view.scale + view.pixel_width / 2.0
}

fn content_width(view: &ViewState, params: &AxisParams) -> f64 {
    // Floor keeps the projection total for degenerate surfaces.
    (view.pixel_width * params.content_fraction).max(1e-9)
}

/// Drag-to-navigate session on the overview.
///
/// `Idle → Dragging → Idle`, edge-triggered by pointer down/up. While
/// dragging, every pointer move re-applies [`jump_offset`], so the main
/// view tracks the pointer continuously. Abandoning the drag (pointer
/// leaves the surface) needs no rollback; simply stop delivering events.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OverviewDrag {
    dragging: bool,
}

impl OverviewDrag {
    /// Pointer-down on the overview: starts the drag and returns the new
    /// main-view offset for the pressed position.
    pub fn press(
        &mut self,
        x: f64,
        view: &ViewState,
        params: &AxisParams,
        overview: &OverviewSurface,
    ) -> f64 {
        self.dragging = true;
        jump_offset(x, view, params, overview)
    }

    /// Pointer-move: returns a new offset while the drag is active.
    pub fn motion(
        &mut self,
        x: f64,
        view: &ViewState,
        params: &AxisParams,
        overview: &OverviewSurface,
    ) -> Option<f64> {
        self.dragging
            .then(|| jump_offset(x, view, params, overview))
    }

    /// Pointer-up: ends the drag. No state outlives the gesture.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use chronica_axis::{AxisParams, AxisScale, ViewState};
    use chronica_range::YearRange;

    use super::{OverviewDrag, OverviewSurface, jump_offset, viewport_rect};

    const OVERVIEW: OverviewSurface = OverviewSurface {
        width: 200.0,
        height: 40.0,
    };

    #[test]
    fn reset_view_fills_the_overview() {
        let view = ViewState::new(800.0, 600.0);
        let rect = viewport_rect(&view, &AxisParams::default(), &OVERVIEW);
        assert_eq!(rect.x0, 0.0);
        assert_eq!(rect.width(), OVERVIEW.width);
        assert_eq!(rect.height(), OVERVIEW.height);
    }

    #[test]
    fn zooming_in_shrinks_the_viewport() {
        let mut view = ViewState::new(800.0, 600.0);
        view.scale = 4.0;
        let rect = viewport_rect(&view, &AxisParams::default(), &OVERVIEW);
        assert!(rect.width() < OVERVIEW.width / 3.0);
    }

    #[test]
    fn panning_moves_the_viewport_and_stays_clamped() {
        let mut view = ViewState::new(800.0, 600.0);
        view.scale = 4.0;

        view.offset_x = -500.0;
        let mid = viewport_rect(&view, &AxisParams::default(), &OVERVIEW);
        assert!(mid.x0 > 0.0);

        // Panned far past the content on both sides.
        view.offset_x = 1e7;
        let left = viewport_rect(&view, &AxisParams::default(), &OVERVIEW);
        assert_eq!(left.x0, 0.0);
        view.offset_x = -1e7;
        let right = viewport_rect(&view, &AxisParams::default(), &OVERVIEW);
        assert!(right.x1 <= OVERVIEW.width + 1e-9);
    }

    #[test]
    fn click_centers_the_clicked_year() {
        let params = AxisParams::default();
        let range = YearRange {
            start: 1650.0,
            end: 1960.0,
        };
        let mut view = ViewState::new(800.0, 600.0);
        view.scale = 5.0;

        // Click at 70% across the overview.
        let click_x = 0.7 * OVERVIEW.width;
        view.offset_x = jump_offset(click_x, &view, &params, &OVERVIEW);

        let axis = AxisScale::new(range, &view, &params);
        let clicked_year = range.start + 0.7 * range.span();
        let x = axis.year_to_x(clicked_year);
        // Centered up to the fixed left padding.
        assert!((x - view.pixel_width / 2.0).abs() <= params.padding + 1e-9);
    }

    #[test]
    fn click_fraction_is_clamped_to_the_overview() {
        let params = AxisParams::default();
        let view = ViewState::new(800.0, 600.0);
        let beyond = jump_offset(1e4, &view, &params, &OVERVIEW);
        let edge = jump_offset(OVERVIEW.width, &view, &params, &OVERVIEW);
        assert_eq!(beyond, edge);
    }

    #[test]
    fn drag_session_follows_the_pointer() {
        let params = AxisParams::default();
        let view = ViewState::new(800.0, 600.0);
        let mut drag = OverviewDrag::default();

        assert!(drag.motion(50.0, &view, &params, &OVERVIEW).is_none());

        let first = drag.press(50.0, &view, &params, &OVERVIEW);
        assert!(drag.is_dragging());
        let moved = drag.motion(120.0, &view, &params, &OVERVIEW);
        assert!(moved.is_some());
        assert_ne!(moved, Some(first));

        drag.release();
        assert!(!drag.is_dragging());
        assert!(drag.motion(130.0, &view, &params, &OVERVIEW).is_none());
    }
}
