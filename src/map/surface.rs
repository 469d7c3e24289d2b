//! Marker map surface
//!
//! Headless counterpart of the render library's marker layer: owns the
//! session's markers, reacts to the click stream, and routes marker clicks
//! to the popup or the edit form. Everything here works purely on the data
//! model and the transformer's public operations.

use log::{debug, info};

use crate::coordinate::{CoordinateTransformer, MapSettings, Point};
use crate::interchange;
use crate::view::{EditForm, Popup, PopupContent};

use super::errors::{MapError, MapResult};
use super::events::ClickEvent;
use super::location::Location;
use super::marker::Marker;

/// The marker collection owned by the render surface
pub struct MarkerMap {
    transformer: CoordinateTransformer,
    markers: Vec<Marker>,
}

impl MarkerMap {
    /// Create an empty marker map for the given settings
    pub fn new(settings: MapSettings) -> Self {
        MarkerMap {
            transformer: CoordinateTransformer::new(settings),
            markers: Vec::new(),
        }
    }

    /// Get the transformer used to place markers
    pub fn transformer(&self) -> &CoordinateTransformer {
        &self.transformer
    }

    /// Get the markers currently on the map
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Get a marker by index
    pub fn marker(&self, index: usize) -> MapResult<&Marker> {
        self.markers.get(index).ok_or(MapError::MarkerNotFound(index))
    }

    /// Place a marker for a location
    ///
    /// The marker position is always resolved from the location's worldspace
    /// coordinates. Returns the new marker's index, or `None` when the
    /// location has no renderable position (absent or zero X), in which case
    /// nothing is placed.
    pub fn add_location(&mut self, location: Location) -> Option<usize> {
        let coords = Point::worldspace(location.coords.x, location.coords.y);

        let position = match self.transformer.to_render_coords(&coords) {
            Some(position) => position,
            None => {
                debug!(
                    "Location '{}' has no renderable position, marker dropped",
                    location.name
                );
                return None;
            }
        };

        self.markers.push(Marker::new(location, position));
        Some(self.markers.len() - 1)
    }

    /// React to a click on the map surface
    ///
    /// Ctrl+click converts the click position to worldspace and places a
    /// default-named marker there. Plain clicks on the surface do nothing.
    pub fn handle_click(&mut self, event: &ClickEvent) -> Option<usize> {
        if !event.ctrl {
            return None;
        }

        let coords = self.transformer.to_worldspace(&event.point);
        debug!("Placing marker at worldspace ({}, {})", coords.x, coords.y);

        self.add_location(Location::from_coords(coords))
    }

    /// React to a click on a marker
    ///
    /// Shift+click opens the edit form, a plain click the info popup.
    pub fn marker_clicked(&self, index: usize, shift: bool) -> MapResult<Popup> {
        let marker = self.marker(index)?;

        if shift {
            Ok(Popup::Edit(EditForm::for_location(&marker.location)))
        } else {
            Ok(Popup::Info(PopupContent::for_location(&marker.location)))
        }
    }

    /// Apply a submitted edit form to a marker's location
    ///
    /// Writes the form values back and rebinds the tooltip so the label
    /// follows the new name.
    pub fn apply_edit(&mut self, index: usize, form: &EditForm) -> MapResult<()> {
        let marker = self
            .markers
            .get_mut(index)
            .ok_or(MapError::MarkerNotFound(index))?;

        form.apply_to(&mut marker.location)?;
        marker.rebind_tooltip();

        Ok(())
    }

    /// Import markers from an interchange document
    ///
    /// The whole document is parsed before any marker is placed, so
    /// malformed JSON has no partial effects. Entries without usable
    /// coordinates are skipped. Returns the number of markers added.
    pub fn import_str(&mut self, text: &str) -> MapResult<usize> {
        if text.is_empty() {
            debug!("Empty import input, nothing to do");
            return Ok(0);
        }

        let locations = interchange::parse_locations(text)?;

        let mut added = 0;
        for location in locations {
            if self.add_location(location).is_some() {
                added += 1;
            }
        }

        info!("Imported {} marker(s)", added);
        Ok(added)
    }

    /// Export a single marker in the clipboard format
    pub fn export_location(&self, index: usize) -> MapResult<String> {
        let marker = self.marker(index)?;
        Ok(interchange::to_clipboard_json(&marker.location))
    }
}
