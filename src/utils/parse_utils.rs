//! Parsing helpers for CLI input
//!
//! Utilities for turning the CLI's coordinate strings into typed points.

use crate::coordinate::{CoordKindFactory, Point, RenderPoint};
use crate::map::errors::{MapError, MapResult};

/// Parse an "x,y" coordinate pair
pub fn parse_coordinate_pair(coord_str: &str) -> MapResult<(f64, f64)> {
    let parts: Vec<&str> = coord_str.split(',').collect();
    if parts.len() != 2 {
        return Err(MapError::GenericError(
            "Coordinate must be in format 'x,y'".to_string()));
    }

    let x = parts[0].trim().parse::<f64>()
        .map_err(|_| MapError::GenericError("Invalid x coordinate".to_string()))?;
    let y = parts[1].trim().parse::<f64>()
        .map_err(|_| MapError::GenericError("Invalid y coordinate".to_string()))?;

    Ok((x, y))
}

/// Parse a coordinate pair tagged with a coordinate kind
pub fn parse_point(coord_str: &str, kind_str: &str) -> MapResult<Point> {
    let (x, y) = parse_coordinate_pair(coord_str)?;
    let kind = CoordKindFactory::from_string(kind_str)?;
    Ok(Point::new(x, y, kind))
}

/// Parse a render-surface coordinate pair
pub fn parse_render_point(coord_str: &str) -> MapResult<RenderPoint> {
    let (lat, lng) = parse_coordinate_pair(coord_str)?;
    Ok(RenderPoint::new(lat, lng))
}
