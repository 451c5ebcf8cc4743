use super::Layer;
use crate::color::Color;
use crate::geometry::Sample;

/// Moon phase glyph: a light disk with a shifted shadow disk over it
pub struct Moon {
    /// Moon center, offset below the composition center
    offset: f64,
    radius: f64,
    /// Shadow disk sits this far left of the moon center
    shift: f64,
    light: Color,
    shadow: Color,
}

impl Moon {
    pub fn new(offset: f64, radius: f64, shift: f64, light: Color, shadow: Color) -> Self {
        Self {
            offset,
            radius,
            shift,
            light,
            shadow,
        }
    }
}

impl Layer for Moon {
    fn paint(&self, sample: &Sample, _below: Color) -> Option<Color> {
        if sample.distance_to(0.0, self.offset) > self.radius {
            return None;
        }
        if sample.distance_to(-self.shift, self.offset) <= self.radius {
            Some(self.shadow)
        } else {
            Some(self.light)
        }
    }

    fn name(&self) -> &str {
        "moon"
    }
}
