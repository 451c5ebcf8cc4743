//! Supersampled icon rasterizer
//!
//! The icon is drawn on a canvas `supersample` times larger than the target,
//! one analytic layer cascade per canvas pixel, then box-filtered down. The
//! box filter is the only anti-aliasing, apart from the ring outline band.

use crate::color::Color;
use crate::config::IconConfig;
use crate::display::PixelBuffer;
use crate::error::{rgba_len, IconError};
use crate::geometry::Sample;
use crate::layers::{composite, Disk, Fill, Hand, Layer, Moon, Outline, Sky};
use log::{debug, trace};

/// Shape radii resolved for one canvas size, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Canvas edge
    pub canvas: f64,
    /// Center coordinate (same on both axes)
    pub center: f64,
    pub ring_outer: f64,
    pub ring_inner: f64,
    pub disk: f64,
}

impl Layout {
    pub fn new(config: &IconConfig, canvas: u32) -> Self {
        let g = &config.geometry;
        let w = canvas as f64;
        let ring_outer = w * g.ring_outer;
        let ring_inner = ring_outer - w * g.ring_thickness;
        Self {
            canvas: w,
            center: (w - 1.0) / 2.0,
            ring_outer,
            ring_inner,
            disk: ring_inner - w * g.disk_gap,
        }
    }
}

/// The ordered layer stack for one canvas size
pub struct Composition {
    layout: Layout,
    background: Color,
    layers: Vec<Box<dyn Layer>>,
}

impl Composition {
    /// Build the watchface icon stack, bottom to top
    pub fn new(config: &IconConfig, canvas: u32) -> Self {
        let layout = Layout::new(config, canvas);
        let g = &config.geometry;
        let p = &config.palette;
        let w = layout.canvas;

        let layers: Vec<Box<dyn Layer>> = vec![
            Box::new(Fill::new("background", p.background)),
            Box::new(Disk::new("ring", layout.ring_outer, p.ring)),
            Box::new(Disk::new("ring_inner", layout.ring_inner, p.ring_inner)),
            Box::new(Sky::new(
                layout.disk,
                g.day_start.to_radians(),
                g.day_end.to_radians(),
                p.night,
                p.day,
            )),
            Box::new(Hand::new(
                g.hand_angle.to_radians(),
                w * g.hand_inner,
                layout.disk * g.hand_length,
                w * g.hand_width,
                (g.hand_taper_base, g.hand_taper_slope),
                p.hand,
            )),
            // Hub goes over the hand so it is never occluded
            Box::new(Disk::new("hub", w * g.hub_radius, p.hub)),
            Box::new(Moon::new(
                w * g.moon_offset,
                w * g.moon_radius,
                w * g.moon_radius * g.moon_shift,
                p.moon_light,
                p.moon_shadow,
            )),
            // Rings only; the sky, hand and moon edges are left to the box filter
            Box::new(Outline::new(
                vec![layout.ring_outer, layout.ring_inner],
                g.outline_band,
                g.outline_amount,
                p.outline,
            )),
        ];

        trace!(
            "composition layers: {}",
            layers.iter().map(|l| l.name()).collect::<Vec<_>>().join(" > ")
        );

        Self {
            layout,
            background: p.background,
            layers,
        }
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn layers(&self) -> &[Box<dyn Layer>] {
        &self.layers
    }

    /// Final color of canvas pixel `(x, y)`
    #[inline]
    pub fn shade(&self, x: u32, y: u32) -> Color {
        let c = self.layout.center;
        composite(&self.layers, &Sample::at(x, y, c, c), self.background)
    }

    /// Paint every pixel of `buffer`
    pub fn paint(&self, buffer: &mut PixelBuffer) {
        for y in 0..buffer.height() {
            let row = buffer.row_mut(y);
            for (x, px) in (0u32..).zip(row.chunks_exact_mut(4)) {
                px.copy_from_slice(&self.shade(x, y).to_array());
            }
        }
    }
}

/// Render the default icon at `size` x `size` pixels
pub fn render(size: u32, supersample: u32) -> Result<PixelBuffer, IconError> {
    render_with(&IconConfig::default(), size, supersample)
}

/// Render an icon with a custom palette/geometry
///
/// Deterministic: the same arguments always produce the same bytes.
pub fn render_with(
    config: &IconConfig,
    size: u32,
    supersample: u32,
) -> Result<PixelBuffer, IconError> {
    let invalid = IconError::InvalidSize { size, supersample };
    if size == 0 || supersample == 0 {
        return Err(invalid);
    }
    let canvas = match size.checked_mul(supersample) {
        Some(w) if rgba_len(w, w).is_some() => w,
        _ => return Err(invalid),
    };
    debug!(
        "rendering {}px icon on a {}px canvas ({}x supersample)",
        size, canvas, supersample
    );

    let composition = Composition::new(config, canvas);
    let mut hires = PixelBuffer::with_size(canvas, canvas)?;
    composition.paint(&mut hires);
    hires.downsample(supersample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;

    fn pixel(buf: &PixelBuffer, x: u32, y: u32) -> Color {
        buf.get_pixel(x, y).unwrap()
    }

    #[test]
    fn test_layout_default_radii() {
        let l = Layout::new(&IconConfig::default(), 320);
        assert_eq!(l.center, 159.5);
        assert!((l.ring_outer - 153.6).abs() < 1e-9);
        assert!((l.ring_inner - 131.2).abs() < 1e-9);
        assert!((l.disk - 124.8).abs() < 1e-9);
    }

    #[test]
    fn test_layer_order() {
        let comp = Composition::new(&IconConfig::default(), 64);
        let names: Vec<&str> = comp.layers().iter().map(|l| l.name()).collect();
        assert_eq!(
            names,
            ["background", "ring", "ring_inner", "sky", "hand", "hub", "moon", "outline"]
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render(24, 3).unwrap();
        let b = render(24, 3).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_render_dimensions() {
        let buf = render(16, 2).unwrap();
        assert_eq!((buf.width(), buf.height()), (16, 16));
        assert_eq!(buf.as_bytes().len(), 16 * 16 * 4);
    }

    #[test]
    fn test_render_single_pixel() {
        let buf = render(1, 1).unwrap();
        assert_eq!(buf.as_bytes().len(), 4);
    }

    #[test]
    fn test_render_rejects_zero() {
        assert!(matches!(render(0, 4), Err(IconError::InvalidSize { .. })));
        assert!(matches!(render(80, 0), Err(IconError::InvalidSize { .. })));
        assert!(matches!(
            render(u32::MAX, 2),
            Err(IconError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_store_icon_regions() {
        let p = Palette::default();
        let buf = render(80, 4).unwrap();

        // Corners are background
        assert_eq!(pixel(&buf, 0, 0), p.background);
        assert_eq!(pixel(&buf, 79, 79), p.background);
        // Hub at the center
        assert_eq!(pixel(&buf, 40, 40), p.hub);
        // Daylight straight up, night straight down
        assert_eq!(pixel(&buf, 40, 10), p.day);
        assert_eq!(pixel(&buf, 40, 70), p.night);
        // Outer ring at twelve o'clock, clear of both outline bands
        assert_eq!(pixel(&buf, 40, 2), p.ring);
        // Moon: shadowed on the left, lit limb on the right
        assert_eq!(pixel(&buf, 40, 54), p.moon_shadow);
        assert_eq!(pixel(&buf, 45, 54), p.moon_light);
    }

    #[test]
    fn test_hand_points_to_two_oclock() {
        let p = Palette::default();
        let comp = Composition::new(&IconConfig::default(), 320);
        let c = comp.layout().center;
        let a = 65f64.to_radians();
        // Halfway along the hand, on its axis
        let r = 60.0;
        let x = (c + r * a.sin()).round() as u32;
        let y = (c - r * a.cos()).round() as u32;
        assert_eq!(comp.shade(x, y), p.hand);
        // Mirrored to ten o'clock there is no hand, just daylight
        let xm = (c - r * a.sin()).round() as u32;
        assert_eq!(comp.shade(xm, y), p.day);
    }

    #[test]
    fn test_outline_only_on_ring_edges() {
        let p = Palette::default();
        let comp = Composition::new(&IconConfig::default(), 320);
        let l = *comp.layout();
        // Straight up from the center, a canvas row whose center lies
        // within the band around the outer ring edge
        let y = (l.center - l.ring_outer).round() as u32;
        let on_edge = comp.shade(160, y);
        assert_ne!(on_edge, p.ring);
        assert_ne!(on_edge, p.background);
        // The sky disk edge gets no outline
        let y_disk = (l.center - l.disk + 1.0).round() as u32;
        assert_eq!(comp.shade(160, y_disk), p.day);
    }

    #[test]
    fn test_custom_palette() {
        let mut config = IconConfig::default();
        config.palette.hub = Color::rgb(255, 0, 0);
        config.palette.background = Color::rgba(0, 0, 0, 0);
        let buf = render_with(&config, 40, 2).unwrap();
        assert_eq!(pixel(&buf, 20, 20), Color::rgb(255, 0, 0));
        assert_eq!(pixel(&buf, 0, 0), Color::rgba(0, 0, 0, 0));
    }
}
