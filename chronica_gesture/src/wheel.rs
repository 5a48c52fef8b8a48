// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A raw wheel/scroll event as delivered by the host platform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelEvent {
    /// Horizontal scroll delta.
    pub delta_x: f64,
    /// Vertical scroll delta (positive = scroll down on most platforms).
    pub delta_y: f64,
    /// `true` when the platform's pan/zoom modifier key is held
    /// (ctrl/cmd by convention).
    pub modifier: bool,
    /// `true` when the platform flagged the event as a pinch gesture.
    pub pinch: bool,
}

/// Wheel interpretation settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelConfig {
    /// Swap the default mapping (plain scroll = zoom, modified = pan).
    pub invert_modifier: bool,
    /// Zoom response per unit of wheel delta.
    pub wheel_sensitivity: f64,
    /// Zoom response per unit of pinch delta. Pinches report much smaller
    /// deltas than wheel notches, so this is an order of magnitude larger.
    pub pinch_sensitivity: f64,
    /// Deltas below this magnitude (with the modifier held) are treated as
    /// pinches even without the platform flag.
    pub pinch_delta_max: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            invert_modifier: false,
            wheel_sensitivity: 0.0015,
            pinch_sensitivity: 0.01,
            pinch_delta_max: 10.0,
        }
    }
}

/// The view operation a wheel event maps to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WheelAction {
    /// Multiply the view scale by `factor`, anchored at the pointer.
    Zoom {
        /// Multiplicative zoom factor. Always positive; above 1 zooms in.
        factor: f64,
    },
    /// Pan the view horizontally by `dx` pixels.
    Pan {
        /// Pan delta to add to the view offset.
        dx: f64,
    },
}

/// Classifies a wheel event into a zoom or pan action.
///
/// Pinch detection runs first: a platform pinch flag, or the modifier held
/// with a small vertical delta, always zooms. Trackpad pinches arrive on
/// most platforms as modifier + fractional wheel deltas, so this magnitude
/// heuristic decides which operation a physical input triggers; changing
/// it changes user-visible behavior.
///
/// Otherwise the plain/modified convention applies, optionally inverted:
/// by default a plain scroll zooms and a modified scroll pans
/// horizontally. Zoom factors are exponential in the delta so successive
/// notches compose multiplicatively and always stay positive.
#[must_use]
pub fn classify_wheel(event: &WheelEvent, config: &WheelConfig) -> WheelAction {
    let is_pinch =
        event.pinch || (event.modifier && event.delta_y.abs() < config.pinch_delta_max);
    if is_pinch {
        return WheelAction::Zoom {
            factor: 2.0_f64.powf(-event.delta_y * config.pinch_sensitivity),
        };
    }

    let zooms = event.modifier == config.invert_modifier;
    if zooms {
        WheelAction::Zoom {
            factor: 2.0_f64.powf(-event.delta_y * config.wheel_sensitivity),
        }
    } else {
        // Prefer the horizontal delta when the device provides one.
        let delta = if event.delta_x != 0.0 {
            event.delta_x
        } else {
            event.delta_y
        };
        WheelAction::Pan { dx: -delta }
    }
}
