//! Procedural store icons for the yes watchface
//!
//! [`render`] paints the icon on a supersampled canvas and box-filters it to
//! the requested size; [`encode`] turns the resulting RGBA bytes into a PNG.
//! Both are pure functions, so the caller owns all file I/O.

pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod geometry;
pub mod layers;
pub mod png;
pub mod raster;

pub use color::{lerp, mix, Color};
pub use config::{Geometry, IconConfig, Palette};
pub use display::{PixelBuffer, DEFAULT_SUPERSAMPLE, ICON_SIZES};
pub use error::IconError;
pub use png::{encode, encode_buffer};
pub use raster::{render, render_with, Composition, Layout};
