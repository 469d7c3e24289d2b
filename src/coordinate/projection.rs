//! Render-surface projection seam
//!
//! The render library places markers in a latitude/longitude-like space and
//! maps it onto canvas pixels through an affine transformation scaled by the
//! zoom level. The transformer only needs the project/unproject pair, so the
//! projection sits behind a trait and the tile-pyramid implementation used
//! for flat image maps ships as the default.

use super::point::{PixelPoint, RenderPoint};

/// Projection between render-surface coordinates and canvas pixels
pub trait Projection {
    /// Project a render-surface coordinate to canvas pixels at a zoom level
    fn project(&self, coords: &RenderPoint, zoom: u32) -> PixelPoint;

    /// Unproject a canvas pixel position back to render-surface coordinates
    fn unproject(&self, pixel: &PixelPoint, zoom: u32) -> RenderPoint;
}

/// Affine transformation coefficients for mapping (x, y) to (a*x + b, c*y + d)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Transformation {
    /// Create a new transformation with the given coefficients
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Transformation { a, b, c, d }
    }

    /// Transform a coordinate pair at the given scale
    pub fn transform(&self, x: f64, y: f64, scale: f64) -> (f64, f64) {
        (scale * (self.a * x + self.b), scale * (self.c * y + self.d))
    }

    /// Reverse transform a coordinate pair at the given scale
    pub fn untransform(&self, x: f64, y: f64, scale: f64) -> (f64, f64) {
        ((x / scale - self.b) / self.a, (y / scale - self.d) / self.c)
    }
}

/// Tile-pyramid projection for flat image maps
///
/// Longitude maps straight onto pixel columns and latitude is negated into
/// pixel rows, so render-surface "north" points up while pixel rows grow
/// downward. The scale doubles with every zoom step.
pub struct TileProjection {
    transformation: Transformation,
}

impl TileProjection {
    /// Create the flat-image projection
    pub fn new() -> Self {
        TileProjection {
            transformation: Transformation::new(1.0, 0.0, -1.0, 0.0),
        }
    }

    /// Pixel scale factor for a zoom level
    fn scale(zoom: u32) -> f64 {
        2f64.powi(zoom as i32)
    }
}

impl Default for TileProjection {
    fn default() -> Self {
        TileProjection::new()
    }
}

impl Projection for TileProjection {
    fn project(&self, coords: &RenderPoint, zoom: u32) -> PixelPoint {
        let scale = Self::scale(zoom);
        let (x, y) = self.transformation.transform(coords.lng, coords.lat, scale);
        PixelPoint::new(x, y)
    }

    fn unproject(&self, pixel: &PixelPoint, zoom: u32) -> RenderPoint {
        let scale = Self::scale(zoom);
        let (lng, lat) = self.transformation.untransform(pixel.x, pixel.y, scale);
        RenderPoint::new(lat, lng)
    }
}
