use super::Layer;
use crate::color::Color;
use crate::geometry::Sample;

/// Solid color everywhere
pub struct Fill {
    name: String,
    color: Color,
}

impl Fill {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl Layer for Fill {
    fn paint(&self, _sample: &Sample, _below: Color) -> Option<Color> {
        Some(self.color)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
