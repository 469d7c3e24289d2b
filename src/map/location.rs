//! Location data model

use crate::coordinate::Point;

use super::icons::DEFAULT_ICON_ID;

/// Name given to locations created without one
pub const DEFAULT_LOCATION_NAME: &str = "Custom location";

/// A user-placed named location
///
/// Owned by a single on-map marker. Created when a user adds or imports a
/// point, mutated only through the owning marker's edit form, and alive for
/// the whole session since no removal operation exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Display name, also used as the marker tooltip label
    pub name: String,
    /// Optional free-text description shown in the popup
    pub description: Option<String>,
    /// Icon sprite id
    pub icon_id: u32,
    /// Canonical worldspace coordinates
    pub coords: Point,
}

impl Location {
    /// Create a location from optional source data
    ///
    /// Missing fields take their defaults. Coordinates are kept only when
    /// both axes are present and nonzero; otherwise the location sits at
    /// worldspace origin, which the conversion path refuses to place.
    /// An empty description and an icon id of zero both count as absent.
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        icon_id: Option<u32>,
        coords: Option<Point>,
    ) -> Self {
        let coords = match coords {
            Some(c) if c.has_coords() => c,
            _ => Point::worldspace(0.0, 0.0),
        };

        Location {
            name: name.unwrap_or_else(|| DEFAULT_LOCATION_NAME.to_string()),
            description: description.filter(|d| !d.is_empty()),
            icon_id: match icon_id {
                Some(id) if id != 0 => id,
                _ => DEFAULT_ICON_ID,
            },
            coords,
        }
    }

    /// Create a default-named location at the given coordinates
    pub fn from_coords(coords: Point) -> Self {
        Location::new(None, None, None, Some(coords))
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::new(None, None, None, None)
    }
}
