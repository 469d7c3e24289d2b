//! Coordinate transformation functionality

use log::debug;

use super::kind::CoordKind;
use super::point::{PixelPoint, Point, RenderPoint};
use super::projection::{Projection, TileProjection};
use super::settings::MapSettings;

/// Transformer for converting between marker coordinate spaces
///
/// Holds the map settings and the render library's projection pair. Both
/// conversion directions run at the same fixed zoom level, computed once at
/// construction, so pixel-space math stays consistent between them.
pub struct CoordinateTransformer {
    settings: MapSettings,
    zoom: u32,
    projection: Box<dyn Projection>,
}

impl CoordinateTransformer {
    /// Create a transformer with the tile-pyramid projection
    pub fn new(settings: MapSettings) -> Self {
        Self::with_projection(settings, Box::new(TileProjection::new()))
    }

    /// Create a transformer with a custom projection
    pub fn with_projection(settings: MapSettings, projection: Box<dyn Projection>) -> Self {
        let zoom = settings.zoom_level();
        CoordinateTransformer {
            settings,
            zoom,
            projection,
        }
    }

    /// Get the settings this transformer was built with
    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    /// Zoom level used for both projection directions
    pub fn zoom_level(&self) -> u32 {
        self.zoom
    }

    /// Convert a point in any representation to render-surface coordinates
    ///
    /// The input is copied, never mutated. A point whose X is absent (zero
    /// counts as absent) yields no result and is silently dropped; callers
    /// must check for presence before placing a marker.
    pub fn to_render_coords(&self, coords: &Point) -> Option<RenderPoint> {
        let coords = *coords; // operate on a copy, the caller's point stays untouched

        if !coords.has_x() {
            return None;
        }

        match coords.kind.canonical() {
            CoordKind::Xy => Some(RenderPoint::new(coords.x, coords.y)),
            CoordKind::Normalised | CoordKind::PseudoNormalised => {
                Some(self.normalised_to_render(coords.x, coords.y))
            }
            CoordKind::Worldspace => {
                // get normalised value of x and y in range
                let nx = (coords.x - self.settings.min_x) / self.settings.range_x;
                let ny = ((coords.y - self.settings.max_y) / self.settings.range_y).abs(); // flip y around

                Some(self.normalised_to_render(nx, ny))
            }
        }
    }

    /// Convert a render-surface coordinate back to canonical worldspace
    ///
    /// Values are truncated to integers. Coordinates falling outside the
    /// canvas are not clamped; they extrapolate linearly past the world
    /// bounds.
    pub fn to_worldspace(&self, coords: &RenderPoint) -> Point {
        let pixel = self.projection.project(coords, self.zoom);

        // current map world pixel position values
        let nx = pixel.x / self.settings.width;
        let ny = 1.0 - (pixel.y / self.settings.height);

        // reproject pixel values to worldspace
        let x = (self.settings.min_x + self.settings.range_x * nx).trunc();
        let y = (self.settings.min_y + self.settings.range_y * ny).trunc();

        debug!(
            "Projected render ({}, {}) to worldspace ({}, {})",
            coords.lat, coords.lng, x, y
        );

        Point::worldspace(x, y)
    }

    /// Scale a normalised pair onto the canvas and unproject it
    fn normalised_to_render(&self, x: f64, y: f64) -> RenderPoint {
        let pixel = PixelPoint::new(x * self.settings.width, y * self.settings.height);
        self.projection.unproject(&pixel, self.zoom)
    }
}
