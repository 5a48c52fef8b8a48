// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use chronica_range::YearRange;

/// Candidate major intervals, in years, ascending.
///
/// This ladder is the UX contract of the axis: whatever the zoom level,
/// labeled gridlines land on one of these step sizes and therefore on
/// "nice" year values. The sub-year entries give quarter-year ticks at
/// high zoom.
pub const MAJOR_INTERVALS: [f64; 15] = [
    0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 25.0, 50.0, 100.0, 200.0, 250.0, 500.0, 1000.0, 2000.0,
];

/// Default minimum spacing between labeled (major) ticks, in pixels.
pub const MIN_MAJOR_SPACING_PX: f64 = 80.0;

/// Relative tolerance when testing whether a tick value is a major.
const MAJOR_EPSILON: f64 = 1e-6;

/// The major/minor gridline intervals chosen for one zoom level.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickPlan {
    /// Interval between labeled ticks, in years. Always a member of
    /// [`MAJOR_INTERVALS`].
    pub major: f64,
    /// Interval between all ticks, in years. Always `major / 4`.
    pub minor: f64,
}

impl TickPlan {
    /// Chooses tick intervals for an on-screen density.
    ///
    /// `density` is the current pixels-per-year at the active zoom (see
    /// [`crate::AxisScale::density`]); `min_major_spacing` is the smallest
    /// acceptable pixel gap between labeled ticks. The smallest candidate
    /// interval wide enough to honor that gap wins; if even the largest is
    /// too narrow (density near zero), the largest is used.
    #[must_use]
    pub fn choose(density: f64, min_major_spacing: f64) -> Self {
        let needed = if density > 0.0 {
            min_major_spacing / density
        } else {
            f64::INFINITY
        };
        let major = MAJOR_INTERVALS
            .iter()
            .copied()
            .find(|candidate| *candidate >= needed)
            .unwrap_or(MAJOR_INTERVALS[MAJOR_INTERVALS.len() - 1]);
        Self {
            major,
            minor: major / 4.0,
        }
    }

    /// Iterates the ticks covering `range`.
    ///
    /// Generation starts at the first minor-interval multiple at or before
    /// `range.start` and steps by the minor interval through `range.end`.
    #[must_use]
    pub fn ticks(&self, range: YearRange) -> Ticks {
        let first = (range.start / self.minor).floor() * self.minor;
        Ticks {
            plan: *self,
            first,
            end: range.end,
            index: 0,
        }
    }

    /// Returns `true` if `year` lies on a major interval boundary.
    ///
    /// Floating-point safe: the quarter-year minors accumulate rounding
    /// error, so exact modulo would misclassify ticks far from zero.
    #[must_use]
    pub fn is_major(&self, year: f64) -> bool {
        let nearest = (year / self.major).round() * self.major;
        (year - nearest).abs() < self.major * MAJOR_EPSILON
    }
}

/// One gridline on the year axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tick {
    /// Year value of the gridline.
    pub year: f64,
    /// `true` for labeled (major) ticks.
    pub major: bool,
}

/// Iterator over the ticks of a [`TickPlan`] across a year range.
///
/// Tick years are computed as `first + index * minor` rather than by
/// repeated addition, so long ranges do not drift.
#[derive(Clone, Debug)]
pub struct Ticks {
    plan: TickPlan,
    first: f64,
    end: f64,
    index: u64,
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        // Tick counts stay far below 2^53, so the index conversion is exact.
        let year = self.first + self.index as f64 * self.plan.minor;
        if year > self.end {
            return None;
        }
        self.index += 1;
        Some(Tick {
            year,
            major: self.plan.is_major(year),
        })
    }
}
