use super::Layer;
use crate::color::Color;
use crate::geometry::{in_arc, Sample};

/// Night disk with a daylight arc cut into it
pub struct Sky {
    radius: f64,
    /// Daylight arc, radians clockwise from up
    day_start: f64,
    day_end: f64,
    night: Color,
    day: Color,
}

impl Sky {
    pub fn new(radius: f64, day_start: f64, day_end: f64, night: Color, day: Color) -> Self {
        Self {
            radius,
            day_start,
            day_end,
            night,
            day,
        }
    }
}

impl Layer for Sky {
    fn paint(&self, sample: &Sample, _below: Color) -> Option<Color> {
        if sample.rr > self.radius {
            return None;
        }
        if in_arc(sample.angle, self.day_start, self.day_end) {
            Some(self.day)
        } else {
            Some(self.night)
        }
    }

    fn name(&self) -> &str {
        "sky"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NIGHT: Color = Color::rgb(7, 24, 88);
    const DAY: Color = Color::rgb(122, 190, 198);

    fn sky() -> Sky {
        Sky::new(10.0, (-65f64).to_radians(), 65f64.to_radians(), NIGHT, DAY)
    }

    #[test]
    fn test_day_above_night_below() {
        let below = Color::rgb(0, 0, 0);
        assert_eq!(sky().paint(&Sample::new(0.0, -5.0), below), Some(DAY));
        assert_eq!(sky().paint(&Sample::new(0.0, 5.0), below), Some(NIGHT));
    }

    #[test]
    fn test_arc_bounds() {
        let below = Color::rgb(0, 0, 0);
        // Three o'clock is 90 degrees, outside the +/-65 degree arc
        assert_eq!(sky().paint(&Sample::new(5.0, 0.0), below), Some(NIGHT));
        assert_eq!(sky().paint(&Sample::new(-5.0, 0.0), below), Some(NIGHT));
        // 60 degrees is inside
        let a = 60f64.to_radians();
        assert_eq!(sky().paint(&Sample::new(5.0 * a.sin(), -5.0 * a.cos()), below), Some(DAY));
    }

    #[test]
    fn test_outside_radius_untouched() {
        assert_eq!(sky().paint(&Sample::new(0.0, -11.0), NIGHT), None);
    }
}
