use super::Layer;
use crate::color::Color;
use crate::geometry::Sample;

/// Filled disk around the composition center
///
/// Used for both ring fills and the hub: a ring is just a disk with a
/// smaller disk painted over it.
pub struct Disk {
    name: String,
    radius: f64,
    color: Color,
}

impl Disk {
    pub fn new(name: impl Into<String>, radius: f64, color: Color) -> Self {
        Self {
            name: name.into(),
            radius,
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Layer for Disk {
    fn paint(&self, sample: &Sample, _below: Color) -> Option<Color> {
        (sample.rr <= self.radius).then_some(self.color)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
