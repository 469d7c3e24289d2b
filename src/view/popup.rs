//! Marker popup content
//!
//! View-layer structures built purely from the location data model, so the
//! popup can be rendered by any frontend without dragging rendering-surface
//! types into the core.

use crate::map::Location;

use super::form::EditForm;

/// Content attached to an opened marker popup
#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    /// Informational popup with name, description, and coordinates
    Info(PopupContent),
    /// Edit form for the marker's location
    Edit(EditForm),
}

/// Informational popup for a marker
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    /// Location name shown as the popup title
    pub title: String,
    /// Description body, empty when the location has none
    pub description: String,
    /// Coordinate info line
    pub info: String,
}

impl PopupContent {
    /// Build the popup content for a location
    pub fn for_location(location: &Location) -> Self {
        PopupContent {
            title: location.name.clone(),
            description: location.description.clone().unwrap_or_default(),
            info: format!(
                "Coords: X: {}, Y: {}",
                location.coords.x, location.coords.y
            ),
        }
    }

    /// Render the popup as plain text
    pub fn render_text(&self) -> String {
        let mut text = self.title.clone();

        if !self.description.is_empty() {
            text.push('\n');
            text.push_str(&self.description);
        }

        text.push('\n');
        text.push_str(&self.info);

        text
    }
}
