//! On-map marker structure

use crate::coordinate::RenderPoint;

use super::icons::MarkerIcon;
use super::location::Location;

// Tooltip styling as the render library expects it
const TOOLTIP_CLASS: &str = "location-label";
const TOOLTIP_DIRECTION: &str = "bottom";
const TOOLTIP_OFFSET: [i32; 2] = [0, 2];

/// Permanent label bound below a marker
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Label text, kept in sync with the location name
    pub label: String,
    /// CSS class applied to the label
    pub class_name: String,
    /// Placement relative to the marker
    pub direction: String,
    /// Whether the label is always visible
    pub permanent: bool,
    /// Pixel offset from the anchor
    pub offset: [i32; 2],
}

impl Tooltip {
    /// Create the standard marker tooltip for a label
    pub fn for_label(label: &str) -> Self {
        Tooltip {
            label: label.to_string(),
            class_name: TOOLTIP_CLASS.to_string(),
            direction: TOOLTIP_DIRECTION.to_string(),
            permanent: true,
            offset: TOOLTIP_OFFSET,
        }
    }
}

/// A marker placed on the render surface
///
/// Couples a location with its resolved render position, icon, and tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// The location this marker owns
    pub location: Location,
    /// Resolved render-surface position
    pub position: RenderPoint,
    /// Icon handed to the render library
    pub icon: MarkerIcon,
    /// Label bound below the icon
    pub tooltip: Tooltip,
}

impl Marker {
    /// Create a marker for a location at a resolved position
    pub fn new(location: Location, position: RenderPoint) -> Self {
        let icon = MarkerIcon::for_id(location.icon_id);
        let tooltip = Tooltip::for_label(&location.name);

        Marker {
            location,
            position,
            icon,
            tooltip,
        }
    }

    /// Get the location owned by this marker
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Rebind the tooltip after the location name changed
    pub fn rebind_tooltip(&mut self) {
        self.tooltip = Tooltip::for_label(&self.location.name);
    }
}
