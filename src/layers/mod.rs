//! Paint rules for the icon composition
//!
//! Each layer looks at one canvas sample plus the color produced by the
//! layers below it and either paints a new color or leaves it alone. The
//! rasterizer runs them in a fixed order, last write wins.

mod disk;
mod fill;
mod hand;
mod moon;
mod outline;
mod sky;

pub use disk::Disk;
pub use fill::Fill;
pub use hand::Hand;
pub use moon::Moon;
pub use outline::Outline;
pub use sky::Sky;

use crate::color::Color;
use crate::geometry::Sample;

/// One rule in the per-pixel cascade
///
/// All lengths a layer holds are in supersampled canvas pixels.
pub trait Layer {
    /// Color for this sample, or `None` to keep `below`
    fn paint(&self, sample: &Sample, below: Color) -> Option<Color>;

    /// Layer name for logging/debugging
    fn name(&self) -> &str;
}

/// Run `layers` bottom to top over one sample
pub fn composite(layers: &[Box<dyn Layer>], sample: &Sample, base: Color) -> Color {
    layers
        .iter()
        .fold(base, |c, layer| layer.paint(sample, c).unwrap_or(c))
}
