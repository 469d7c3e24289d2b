//! Interchange record definitions
//!
//! The paste-import dialog and the clipboard export exchange an ordered JSON
//! array of location records. Field names are camelCase on the wire.

use serde::Deserialize;

use crate::coordinate::Point;
use crate::map::Location;

/// A single location entry in an interchange document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Icon sprite id
    #[serde(default)]
    pub icon_id: Option<u32>,
    /// Worldspace coordinate pair
    #[serde(default)]
    pub coords: Option<CoordsRecord>,
    /// Optional description, absent from most entries
    #[serde(default)]
    pub description: Option<String>,
}

/// Coordinate pair carried by a record
///
/// A missing axis deserializes to zero, which the presence check below
/// treats the same as an absent field.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CoordsRecord {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl LocationRecord {
    /// Check if the record carries usable coordinates on both axes
    ///
    /// Zero counts as absent, so an entry sitting exactly on either axis is
    /// rejected along with entries missing the field entirely.
    pub fn has_coords(&self) -> bool {
        match self.coords {
            Some(coords) => coords.x != 0.0 && coords.y != 0.0,
            None => false,
        }
    }

    /// Convert the record into a location
    pub fn into_location(self) -> Location {
        let coords = self
            .coords
            .map(|c| Point::worldspace(c.x, c.y));

        Location::new(self.name, self.description, self.icon_id, coords)
    }
}
