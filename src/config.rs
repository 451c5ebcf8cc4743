//! Icon configuration: palette and geometry
//!
//! Every length in [`Geometry`] is a fraction of the supersampled canvas edge
//! so the composition scales with the requested icon size. Angles are in
//! degrees, clockwise from straight up. The defaults reproduce the store
//! icons of the yes watchface exactly.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Colors used by the icon layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub ring: Color,
    pub ring_inner: Color,
    pub night: Color,
    pub day: Color,
    pub hand: Color,
    pub hub: Color,
    pub outline: Color,
    pub moon_light: Color,
    pub moon_shadow: Color,
}

impl Default for Palette {
    fn default() -> Self {
        // Roughly matches the watchface
        Self {
            background: Color::rgb(10, 10, 12),
            ring: Color::rgb(220, 220, 224),
            ring_inner: Color::rgb(70, 70, 74),
            night: Color::rgb(7, 24, 88),
            day: Color::rgb(122, 190, 198),
            hand: Color::rgb(232, 232, 236),
            hub: Color::rgb(210, 210, 214),
            outline: Color::rgb(25, 25, 28),
            moon_light: Color::rgb(240, 240, 244),
            moon_shadow: Color::rgb(14, 14, 16),
        }
    }
}

/// Shape proportions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Outer ring radius
    pub ring_outer: f64,
    pub ring_thickness: f64,
    /// Gap between the inner ring edge and the sky disk
    pub disk_gap: f64,
    /// Daylight arc bounds (degrees)
    pub day_start: f64,
    pub day_end: f64,
    /// Hand direction (degrees)
    pub hand_angle: f64,
    /// Hand reach as a fraction of the sky disk radius
    pub hand_length: f64,
    /// Hand starts this far from the center
    pub hand_inner: f64,
    pub hand_width: f64,
    /// Half-width multiplier is `taper_base - taper_slope * t` for t in [0, 1]
    pub hand_taper_base: f64,
    pub hand_taper_slope: f64,
    pub hub_radius: f64,
    /// Moon center sits this far below the composition center
    pub moon_offset: f64,
    pub moon_radius: f64,
    /// Shadow disk shift as a fraction of the moon radius
    pub moon_shift: f64,
    /// Outline half-width in canvas pixels (not scaled)
    pub outline_band: f64,
    pub outline_amount: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            ring_outer: 0.48,
            ring_thickness: 0.07,
            disk_gap: 0.02,
            day_start: -65.0,
            day_end: 65.0,
            // Pointing to ~2 o'clock
            hand_angle: 65.0,
            hand_length: 0.88,
            hand_inner: 0.03,
            hand_width: 0.012,
            hand_taper_base: 1.25,
            hand_taper_slope: 0.9,
            hub_radius: 0.04,
            moon_offset: 0.18,
            moon_radius: 0.09,
            moon_shift: 0.45,
            outline_band: 1.2,
            outline_amount: 0.35,
        }
    }
}

/// Complete description of one icon composition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub palette: Palette,
    pub geometry: Geometry,
}

impl IconConfig {
    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load config from a JSON file; missing fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
