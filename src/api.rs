use std::fs;

use log::info;

use crate::coordinate::{CoordinateTransformer, MapSettings};
use crate::interchange;
use crate::map::errors::{MapError, MapResult};
use crate::map::{icon_name, Location, MarkerMap};
use crate::utils::logger::Logger;
use crate::utils::parse_utils;

/// Main interface to the MarkerKit library
pub struct MarkerKit {
    logger: Logger,
    settings: MapSettings,
}

impl MarkerKit {
    /// Create a new MarkerKit instance with the default map settings
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "markerkit.log"
    ///
    /// # Returns
    /// A MarkerKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> MapResult<Self> {
        Self::with_settings(log_file, MapSettings::default())
    }

    /// Create a new MarkerKit instance with explicit map settings
    pub fn with_settings(log_file: Option<&str>, settings: MapSettings) -> MapResult<Self> {
        let log_path = log_file.unwrap_or("markerkit.log");
        let logger = Logger::new(log_path)?;
        Ok(MarkerKit { logger, settings })
    }

    /// Import a locations document and return a placement summary
    ///
    /// # Arguments
    /// * `input_path` - Path to the locations JSON file
    ///
    /// # Returns
    /// String containing the placement summary or an error
    pub fn import(&self, input_path: &str) -> MapResult<String> {
        let text = fs::read_to_string(input_path)?;

        let mut map = MarkerMap::new(self.settings);
        let added = map.import_str(&text)?;

        // Format a summary of the placed markers
        let mut result = format!("Marker Placement Results:\n");
        result.push_str(&format!("  Markers placed: {}\n", added));
        result.push_str(&format!("  Zoom level: {}\n", map.transformer().zoom_level()));

        for (index, marker) in map.markers().iter().enumerate() {
            let location = marker.location();
            result.push_str(&format!("\nMarker #{} ({})\n", index, icon_name(location.icon_id)));
            result.push_str(&format!("  Name: {}\n", location.name));
            result.push_str(&format!(
                "  Worldspace: ({}, {})\n",
                location.coords.x, location.coords.y
            ));
            result.push_str(&format!(
                "  Render: ({:.4}, {:.4})\n",
                marker.position.lat, marker.position.lng
            ));
        }

        self.logger.log("Import summary generated")?;

        Ok(result)
    }

    /// Convert a coordinate string between spaces
    ///
    /// # Arguments
    /// * `coordinate` - Coordinate pair as "x,y"
    /// * `from` - Kind the pair is expressed in (e.g. "worldspace")
    /// * `to` - Conversion target, "render" or "worldspace"
    ///
    /// # Returns
    /// The converted coordinate formatted as a string, or an error
    pub fn convert(&self, coordinate: &str, from: &str, to: &str) -> MapResult<String> {
        let transformer = CoordinateTransformer::new(self.settings);

        match to {
            "render" => {
                let point = parse_utils::parse_point(coordinate, from)?;
                match transformer.to_render_coords(&point) {
                    Some(render) => Ok(format!("[{}, {}]", render.lat, render.lng)),
                    None => Err(MapError::MissingCoordinates),
                }
            }
            "worldspace" => {
                let render = parse_utils::parse_render_point(coordinate)?;
                let point = transformer.to_worldspace(&render);
                Ok(format!("({}, {})", point.x, point.y))
            }
            other => Err(MapError::GenericError(format!(
                "Unsupported conversion target: {}. Use 'render' or 'worldspace'",
                other
            ))),
        }
    }

    /// Export locations from a document in the clipboard format
    ///
    /// # Arguments
    /// * `input_path` - Path to the locations JSON file
    /// * `name` - Optional location name filter, all locations otherwise
    ///
    /// # Returns
    /// The clipboard-format JSON string, or an error
    pub fn export(&self, input_path: &str, name: Option<&str>) -> MapResult<String> {
        let text = fs::read_to_string(input_path)?;

        let mut map = MarkerMap::new(self.settings);
        map.import_str(&text)?;

        match name {
            Some(name) => {
                let index = map
                    .markers()
                    .iter()
                    .position(|marker| marker.location().name == name)
                    .ok_or_else(|| {
                        MapError::GenericError(format!("No marker named '{}'", name))
                    })?;

                info!("Exporting marker '{}'", name);
                map.export_location(index)
            }
            None => {
                let locations: Vec<Location> = map
                    .markers()
                    .iter()
                    .map(|marker| marker.location().clone())
                    .collect();

                info!("Exporting {} marker(s)", locations.len());
                Ok(interchange::to_clipboard_json_all(&locations))
            }
        }
    }
}
