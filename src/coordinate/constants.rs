//! Map surface constants
//!
//! This module defines the fixed dimensions of the virtual canvas and the
//! world bounding rectangle, replacing magic numbers in the conversion code
//! with descriptive names.

/// Virtual canvas constants
pub mod canvas {
    /// Canvas width in pixels
    pub const WIDTH: f64 = 65536.0;

    /// Canvas height in pixels
    pub const HEIGHT: f64 = 65536.0;

    /// Tile edge length the render library slices the canvas into
    pub const TILE_SIZE: f64 = 256.0;
}

/// World bounding rectangle constants
pub mod world {
    /// Lower bound of the world rectangle on the X axis
    pub const MIN_X: f64 = -233600.0;

    /// Upper bound of the world rectangle on the X axis
    pub const MAX_X: f64 = 291000.0;

    /// Lower bound of the world rectangle on the Y axis
    pub const MIN_Y: f64 = -316000.0;

    /// Upper bound of the world rectangle on the Y axis, mapped to the top
    /// edge of the canvas (world Y runs opposite to pixel Y)
    pub const MAX_Y: f64 = 208900.0;
}
