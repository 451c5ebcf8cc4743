use super::Layer;
use crate::color::Color;
use crate::geometry::{angle_diff, Sample};

/// Tapered clock hand
///
/// The hand is a wedge in polar space: its linear half-width shrinks
/// linearly from `width * taper_base` at the center toward
/// `width * (taper_base - taper_slope)` at the tip, and is converted to an
/// angular half-width at each radius.
pub struct Hand {
    /// Direction, radians clockwise from up
    angle: f64,
    inner: f64,
    length: f64,
    width: f64,
    taper_base: f64,
    taper_slope: f64,
    color: Color,
}

impl Hand {
    pub fn new(
        angle: f64,
        inner: f64,
        length: f64,
        width: f64,
        taper: (f64, f64),
        color: Color,
    ) -> Self {
        Self {
            angle,
            inner,
            length,
            width,
            taper_base: taper.0,
            taper_slope: taper.1,
            color,
        }
    }

    /// Linear half-width at radius `rr`
    #[inline]
    pub fn half_width(&self, rr: f64) -> f64 {
        let t = rr / self.length;
        self.width * (self.taper_base - self.taper_slope * t)
    }
}

impl Layer for Hand {
    fn paint(&self, sample: &Sample, _below: Color) -> Option<Color> {
        let rr = sample.rr;
        // The exact center has no direction
        if rr > self.length || rr <= 1e-6 || rr < self.inner {
            return None;
        }
        let da = angle_diff(sample.angle, self.angle);
        let max_da = self.half_width(rr) / rr;
        (da.abs() <= max_da).then_some(self.color)
    }

    fn name(&self) -> &str {
        "hand"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAND: Color = Color::rgb(232, 232, 236);

    fn hand() -> Hand {
        // Pointing at three o'clock, 100px long, 2px base half-width
        Hand::new(90f64.to_radians(), 10.0, 100.0, 2.0, (1.25, 0.9), HAND)
    }

    #[test]
    fn test_on_axis_is_painted() {
        let below = Color::rgb(0, 0, 0);
        assert_eq!(hand().paint(&Sample::new(50.0, 0.0), below), Some(HAND));
        assert_eq!(hand().paint(&Sample::new(100.0, 0.0), below), Some(HAND));
    }

    #[test]
    fn test_radial_limits() {
        let below = Color::rgb(0, 0, 0);
        assert_eq!(hand().paint(&Sample::new(5.0, 0.0), below), None);
        assert_eq!(hand().paint(&Sample::new(100.5, 0.0), below), None);
        assert_eq!(hand().paint(&Sample::new(0.0, 0.0), below), None);
    }

    #[test]
    fn test_taper() {
        let h = hand();
        assert!((h.half_width(0.0) - 2.5).abs() < 1e-12);
        assert!((h.half_width(100.0) - 0.7).abs() < 1e-12);
        let below = Color::rgb(0, 0, 0);
        // 2px off-axis fits near the hub but not near the tip
        assert_eq!(h.paint(&Sample::new(20.0, 2.0), below), Some(HAND));
        assert_eq!(h.paint(&Sample::new(90.0, 2.0), below), None);
    }

    #[test]
    fn test_opposite_direction_untouched() {
        assert_eq!(hand().paint(&Sample::new(-50.0, 0.0), HAND), None);
    }
}
