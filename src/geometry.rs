//! Polar geometry for per-pixel shape tests
//!
//! Angles follow clock convention: 0 points straight up and positive values
//! run clockwise, so +90 degrees is three o'clock.

use std::f64::consts::{PI, TAU};

/// Offset of one canvas pixel from the composition center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Horizontal offset, positive to the right
    pub dx: f64,
    /// Vertical offset, positive downward (canvas rows grow down)
    pub dy: f64,
    /// Radial distance from the center
    pub rr: f64,
    /// Clockwise angle from straight up, in (-PI, PI]
    pub angle: f64,
}

impl Sample {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            rr: dx.hypot(dy),
            angle: clock_angle(dx, dy),
        }
    }

    /// Sample for canvas pixel `(x, y)` around center `(cx, cy)`
    #[inline]
    pub fn at(x: u32, y: u32, cx: f64, cy: f64) -> Self {
        Self::new(x as f64 - cx, y as f64 - cy)
    }

    /// Distance from a point offset `(ox, oy)` from the center
    #[inline]
    pub fn distance_to(&self, ox: f64, oy: f64) -> f64 {
        (self.dx - ox).hypot(self.dy - oy)
    }
}

/// Clockwise angle from straight up for an offset with y pointing down
#[inline]
pub fn clock_angle(dx: f64, dy: f64) -> f64 {
    let a = dx.atan2(-dy);
    if a < -PI {
        a + TAU
    } else {
        a
    }
}

/// Wrap an angle into [-PI, PI) using a floored modulo
#[inline]
pub fn wrap_angle(a: f64) -> f64 {
    (a + PI).rem_euclid(TAU) - PI
}

/// Smallest signed difference `a - b`
#[inline]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    wrap_angle(a - b)
}

/// Inclusive arc test for angles already in (-PI, PI]
#[inline]
pub fn in_arc(angle: f64, start: f64, end: f64) -> bool {
    start <= angle && angle <= end
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_clock_angle_cardinals() {
        assert!(clock_angle(0.0, -1.0).abs() < EPS); // up
        assert!((clock_angle(1.0, 0.0) - PI / 2.0).abs() < EPS); // right
        assert!((clock_angle(-1.0, 0.0) + PI / 2.0).abs() < EPS); // left
        assert!((clock_angle(0.0, 1.0) - PI).abs() < EPS); // down
    }

    #[test]
    fn test_sample_radius() {
        let s = Sample::new(3.0, -4.0);
        assert_eq!(s.rr, 5.0);
        assert!(s.angle > 0.0 && s.angle < PI / 2.0);
    }

    #[test]
    fn test_sample_at_uses_pixel_centers() {
        // A 4px canvas centers on 1.5, so the four middle pixels are equidistant
        let c = 1.5;
        let a = Sample::at(1, 1, c, c);
        let b = Sample::at(2, 2, c, c);
        assert_eq!(a.rr, b.rr);
    }

    #[test]
    fn test_angle_diff_wraps_across_six_oclock() {
        let a = 170f64.to_radians();
        let b = (-170f64).to_radians();
        assert!((angle_diff(a, b) - (-20f64).to_radians()).abs() < 1e-9);
        assert!((angle_diff(b, a) - 20f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_angle_range() {
        for i in -20..20 {
            let w = wrap_angle(i as f64 * 0.7);
            assert!(w >= -PI && w < PI, "wrap_angle out of range: {}", w);
        }
    }

    #[test]
    fn test_in_arc_inclusive() {
        let a0 = (-65f64).to_radians();
        let a1 = 65f64.to_radians();
        assert!(in_arc(a0, a0, a1));
        assert!(in_arc(a1, a0, a1));
        assert!(!in_arc(PI, a0, a1));
    }
}
