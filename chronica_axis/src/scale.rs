// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronica_range::YearRange;

/// Layout constants shared by every rendering surface.
///
/// These are presentation defaults, not invariants; hosts may tune them, but
/// all surfaces of one view must use the same values or exports will not
/// line up with the live view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisParams {
    /// Fraction of the surface width occupied by the year range at scale 1.
    pub content_fraction: f64,
    /// Left padding before the range start, in pixels.
    pub padding: f64,
    /// Lower zoom clamp. Must be positive.
    pub min_scale: f64,
    /// Upper zoom clamp.
    pub max_scale: f64,
}

impl Default for AxisParams {
    fn default() -> Self {
        Self {
            content_fraction: 0.9,
            padding: 50.0,
            min_scale: 0.1,
            max_scale: 50.0,
        }
    }
}

/// Pan/zoom state of one timeline view.
///
/// This is the only state the layout engine owns across renders. It is a
/// plain value deliberately passed into and returned from interaction
/// handlers rather than living inside any rendering component, so the
/// geometry stays testable without a surface.
///
/// `offset_x` is unbounded: content may legitimately be dragged fully out
/// of view and back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Zoom factor, kept within `[AxisParams::min_scale, AxisParams::max_scale]`.
    pub scale: f64,
    /// Horizontal pan offset in pixels.
    pub offset_x: f64,
    /// Width of the rendering surface in pixels.
    pub pixel_width: f64,
    /// Height of the rendering surface in pixels.
    pub pixel_height: f64,
}

impl ViewState {
    /// Creates a reset view state (`scale = 1`, no pan) for a surface size.
    #[must_use]
    pub fn new(pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            pixel_width,
            pixel_height,
        }
    }

    /// Resets zoom and pan without touching the surface size.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset_x = 0.0;
    }

    /// Pans the view horizontally by `dx` pixels. Unclamped.
    pub fn pan_by(&mut self, dx: f64) {
        self.offset_x += dx;
    }

    /// Updates the surface size after a resize.
    ///
    /// Any geometry derived from the old size is stale afterwards; callers
    /// must run a full layout pass.
    pub fn set_surface_size(&mut self, pixel_width: f64, pixel_height: f64) {
        self.pixel_width = pixel_width;
        self.pixel_height = pixel_height;
    }

    /// Zooms by a multiplicative `factor` around the pixel `anchor_x`.
    ///
    /// The year under the anchor before the zoom stays under it afterwards:
    /// the year is solved with the old transform, the new scale is clamped
    /// into the configured range, and the offset is re-solved to place that
    /// year back under the anchor. A non-positive factor is ignored.
    pub fn zoom_about(&mut self, anchor_x: f64, factor: f64, range: YearRange, params: &AxisParams) {
        if factor <= 0.0 {
            return;
        }
        let new_scale = (self.scale * factor).clamp(params.min_scale, params.max_scale);
        if new_scale == self.scale {
            return;
        }
        let anchor_year = AxisScale::new(range, self, params).x_to_year(anchor_x);
        self.scale = new_scale;
        let anchored = AxisScale::new(range, self, params);
        self.offset_x += anchor_x - anchored.year_to_x(anchor_year);
    }
}

/// The year ↔ pixel transform of one layout pass.
///
/// Built fresh from the current range, view state, and params; holds no
/// state of its own. `year_to_x` and `x_to_year` are exact inverses up to
/// floating-point tolerance, which hit testing and the minimap rely on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisScale {
    start_year: f64,
    pixels_per_year: f64,
    scale: f64,
    offset_x: f64,
    padding: f64,
}

impl AxisScale {
    /// Builds the transform for the given range, view state, and params.
    ///
    /// The range invariant (`span > 0`) makes the pixels-per-year ratio
    /// finite; it is additionally clamped away from zero so the inverse
    /// transform stays total even for a zero-width surface.
    #[must_use]
    pub fn new(range: YearRange, view: &ViewState, params: &AxisParams) -> Self {
        let content_width = view.pixel_width * params.content_fraction;
        // The floor keeps the inverse transform finite for degenerate
        // (zero-width) surfaces.
        let pixels_per_year = (content_width / range.span()).max(1e-9);
        Self {
            start_year: range.start,
            pixels_per_year,
            scale: view.scale.clamp(params.min_scale, params.max_scale),
            offset_x: view.offset_x,
            padding: params.padding,
        }
    }

    /// Converts a year into a surface x coordinate.
    #[must_use]
    pub fn year_to_x(&self, year: f64) -> f64 {
        self.padding + (year - self.start_year) * self.pixels_per_year * self.scale + self.offset_x
    }

    /// Converts a surface x coordinate back into a year.
    #[must_use]
    pub fn x_to_year(&self, x: f64) -> f64 {
        (x - self.padding - self.offset_x) / (self.pixels_per_year * self.scale) + self.start_year
    }

    /// Returns the pixels-per-year ratio at scale 1.
    #[must_use]
    pub fn pixels_per_year(&self) -> f64 {
        self.pixels_per_year
    }

    /// Returns the on-screen pixel density in pixels per year at the
    /// current zoom. This is the density the tick planner consumes.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.pixels_per_year * self.scale
    }
}

#[cfg(test)]
mod tests {
    use chronica_range::YearRange;

    use super::{AxisParams, AxisScale, ViewState};

    const RANGE: YearRange = YearRange {
        start: 1650.0,
        end: 1960.0,
    };

    fn axis(view: &ViewState) -> AxisScale {
        AxisScale::new(RANGE, view, &AxisParams::default())
    }

    #[test]
    fn year_pixel_roundtrip() {
        let mut view = ViewState::new(800.0, 600.0);
        view.scale = 2.5;
        view.offset_x = -123.0;
        let axis = axis(&view);

        for year in [1650.0, 1724.0, 1789.5, 1960.0] {
            let x = axis.year_to_x(year);
            assert!((axis.x_to_year(x) - year).abs() < 1e-9);
        }
        for x in [0.0, 50.0, 400.0, 800.0] {
            assert!((axis.year_to_x(axis.x_to_year(x)) - x).abs() < 1e-9);
        }
    }

    #[test]
    fn years_map_in_order() {
        let view = ViewState::new(800.0, 600.0);
        let axis = axis(&view);
        let a = axis.year_to_x(1724.0);
        let b = axis.year_to_x(1770.0);
        let c = axis.year_to_x(1804.0);
        assert!(a < b && b < c);
    }

    #[test]
    fn zoom_keeps_anchor_year_fixed() {
        let params = AxisParams::default();
        let mut view = ViewState::new(800.0, 600.0);
        let anchor = 312.0;

        let before = AxisScale::new(RANGE, &view, &params).x_to_year(anchor);
        view.zoom_about(anchor, 1.8, RANGE, &params);
        let after = AxisScale::new(RANGE, &view, &params).x_to_year(anchor);

        // Less than a pixel of drift, expressed in years.
        let year_per_px = 1.0 / AxisScale::new(RANGE, &view, &params).density();
        assert!((after - before).abs() < year_per_px);
    }

    #[test]
    fn zoom_clamps_scale() {
        let params = AxisParams::default();
        let mut view = ViewState::new(800.0, 600.0);
        view.zoom_about(0.0, 1e9, RANGE, &params);
        assert_eq!(view.scale, params.max_scale);
        view.zoom_about(0.0, 1e-12, RANGE, &params);
        assert_eq!(view.scale, params.min_scale);
    }

    #[test]
    fn zoom_then_reset_restores_identity() {
        let params = AxisParams::default();
        let mut view = ViewState::new(800.0, 600.0);
        for _ in 0..3 {
            view.zoom_about(250.0, 1.3, RANGE, &params);
        }
        view.reset();
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.offset_x, 0.0);
    }

    #[test]
    fn pan_is_unbounded_and_reversible() {
        let mut view = ViewState::new(800.0, 600.0);
        view.pan_by(1e6);
        view.pan_by(-1e6);
        assert_eq!(view.offset_x, 0.0);
    }

    #[test]
    fn zero_width_surface_stays_total() {
        let view = ViewState::new(0.0, 0.0);
        let axis = axis(&view);
        assert!(axis.year_to_x(1700.0).is_finite());
        assert!(axis.x_to_year(0.0).is_finite());
    }
}
