//! Pointer coordinate and scroll translation.
//!
//! Hosts report pointer positions in logical (unscaled) units; the terminal
//! core works in device pixels.

use tessera_common::types::CursorPos;

use crate::terminal::{MouseButton, ScrollMods};

/// Scale a logical pointer position by the device scale factor.
pub fn to_device_pixels(x: f64, y: f64, scale_factor: f64) -> CursorPos {
    let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
    CursorPos {
        x: (x * scale) as f32,
        y: (y * scale) as f32,
    }
}

/// Translate host scroll deltas into the core's convention, where positive
/// `dy` scrolls up (towards history).
///
/// Discrete wheel detents pass through as line counts; precision deltas are
/// pixels and are scaled to the device.
pub fn scroll_delta(dx: f64, dy: f64, precision: bool, scale_factor: f64) -> (f64, f64, ScrollMods) {
    let scale = if precision && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    };
    (-dx * scale, -dy * scale, ScrollMods { precision })
}

/// Map a host button number (1 = primary, 2 = middle, 3 = secondary).
pub fn button_from_host(button: u32) -> Option<MouseButton> {
    match button {
        1 => Some(MouseButton::Left),
        2 => Some(MouseButton::Middle),
        3 => Some(MouseButton::Right),
        8 => Some(MouseButton::Back),
        9 => Some(MouseButton::Forward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_pixels_scale() {
        let pos = to_device_pixels(10.0, 20.5, 2.0);
        assert_eq!(pos, CursorPos { x: 20.0, y: 41.0 });
    }

    #[test]
    fn zero_scale_factor_is_treated_as_one() {
        let pos = to_device_pixels(10.0, 20.0, 0.0);
        assert_eq!(pos, CursorPos { x: 10.0, y: 20.0 });
    }

    #[test]
    fn wheel_scroll_inverts_direction() {
        let (dx, dy, mods) = scroll_delta(0.0, 1.0, false, 2.0);
        assert_eq!(dx, 0.0);
        assert_eq!(dy, -1.0);
        assert!(!mods.precision);
    }

    #[test]
    fn precision_scroll_scales() {
        let (_, dy, mods) = scroll_delta(0.0, -3.0, true, 2.0);
        assert_eq!(dy, 6.0);
        assert!(mods.precision);
    }

    #[test]
    fn host_buttons() {
        assert_eq!(button_from_host(1), Some(MouseButton::Left));
        assert_eq!(button_from_host(3), Some(MouseButton::Right));
        assert_eq!(button_from_host(4), None);
    }
}
