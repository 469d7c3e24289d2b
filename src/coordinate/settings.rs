//! Map surface configuration
//!
//! The virtual canvas dimensions and the world bounding rectangle are fixed
//! for a given map image. They travel together as an explicit settings
//! struct handed to the transformer, so the conversion math stays testable
//! without any ambient global state.

use super::constants::{canvas, world};
use crate::map::errors::{MapError, MapResult};

/// Fixed configuration of the virtual canvas and world bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    /// Virtual canvas width in pixels
    pub width: f64,
    /// Virtual canvas height in pixels
    pub height: f64,
    /// Lower world bound on the X axis
    pub min_x: f64,
    /// Upper world bound on the X axis
    pub max_x: f64,
    /// Lower world bound on the Y axis
    pub min_y: f64,
    /// Upper world bound on the Y axis
    pub max_y: f64,
    /// Derived X range (max_x - min_x)
    pub range_x: f64,
    /// Derived Y range (max_y - min_y)
    pub range_y: f64,
}

impl MapSettings {
    /// Create settings from canvas dimensions and world bounds
    ///
    /// The axis ranges are derived here so every consumer sees the same
    /// values.
    pub fn new(width: f64, height: f64, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        MapSettings {
            width,
            height,
            min_x,
            max_x,
            min_y,
            max_y,
            range_x: max_x - min_x,
            range_y: max_y - min_y,
        }
    }

    /// Calculate the zoom level for the canvas size
    ///
    /// This is a pure function of the canvas constants, so every caller
    /// recomputing it must land on the same value. The transformer computes
    /// it once at construction and reuses it for both projection directions.
    pub fn zoom_level(&self) -> u32 {
        (self.width.max(self.height) / canvas::TILE_SIZE).log2().ceil() as u32
    }

    /// Parse settings overrides from a TOML string
    ///
    /// Starts from the defaults and applies whatever the `[canvas]` and
    /// `[world]` tables provide. Unknown keys are ignored, missing keys keep
    /// their defaults.
    pub fn from_toml_str(content: &str) -> MapResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => {
                return Err(MapError::GenericError(format!("Failed to parse TOML: {}", e)))
            }
        };

        let defaults = MapSettings::default();
        let mut width = defaults.width;
        let mut height = defaults.height;
        let mut min_x = defaults.min_x;
        let mut max_x = defaults.max_x;
        let mut min_y = defaults.min_y;
        let mut max_y = defaults.max_y;

        if let Some(table) = toml_value.get("canvas").and_then(|v| v.as_table()) {
            if let Some(value) = table.get("width").and_then(number_value) {
                width = value;
            }
            if let Some(value) = table.get("height").and_then(number_value) {
                height = value;
            }
        }

        if let Some(table) = toml_value.get("world").and_then(|v| v.as_table()) {
            if let Some(value) = table.get("min_x").and_then(number_value) {
                min_x = value;
            }
            if let Some(value) = table.get("max_x").and_then(number_value) {
                max_x = value;
            }
            if let Some(value) = table.get("min_y").and_then(number_value) {
                min_y = value;
            }
            if let Some(value) = table.get("max_y").and_then(number_value) {
                max_y = value;
            }
        }

        Ok(MapSettings::new(width, height, min_x, max_x, min_y, max_y))
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        MapSettings::new(
            canvas::WIDTH,
            canvas::HEIGHT,
            world::MIN_X,
            world::MAX_X,
            world::MIN_Y,
            world::MAX_Y,
        )
    }
}

/// Read a TOML value as a float, accepting integer literals
fn number_value(value: &toml::Value) -> Option<f64> {
    match value {
        toml::Value::Float(f) => Some(*f),
        toml::Value::Integer(i) => Some(*i as f64),
        _ => None,
    }
}
