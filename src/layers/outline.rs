use super::Layer;
use crate::color::Color;
use crate::geometry::Sample;

/// Darkens thin bands around a set of radii
///
/// Blends whatever is underneath toward the outline color so ring edges
/// stay crisp once the canvas is downsampled to small icon sizes.
pub struct Outline {
    radii: Vec<f64>,
    band: f64,
    amount: f64,
    color: Color,
}

impl Outline {
    pub fn new(radii: Vec<f64>, band: f64, amount: f64, color: Color) -> Self {
        Self {
            radii,
            band,
            amount,
            color,
        }
    }
}

impl Layer for Outline {
    fn paint(&self, sample: &Sample, below: Color) -> Option<Color> {
        self.radii
            .iter()
            .any(|r| (sample.rr - r).abs() <= self.band)
            .then(|| below.mix(self.color, self.amount))
    }

    fn name(&self) -> &str {
        "outline"
    }
}
