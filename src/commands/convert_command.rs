//! Coordinate conversion command
//!
//! This module implements the command for one-shot conversion between the
//! marker coordinate spaces and the render surface.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::load_settings;
use crate::coordinate::CoordinateTransformer;
use crate::map::errors::{MapError, MapResult};
use crate::utils::logger::Logger;
use crate::utils::parse_utils;

/// Command for converting a coordinate between spaces
pub struct ConvertCommand<'a> {
    /// Coordinate pair as "x,y"
    coordinate: String,
    /// Kind the input pair is expressed in
    from_kind: String,
    /// Conversion target, "render" or "worldspace"
    target: String,
    /// Optional map settings override file
    map_config: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let coordinate = args.get_one::<String>("coordinate")
            .ok_or_else(|| MapError::GenericError(
                "Missing coordinate. Use --coordinate 'x,y'".to_string()))?
            .clone();

        let from_kind = args.get_one::<String>("from")
            .cloned()
            .unwrap_or_else(|| "worldspace".to_string());

        let target = args.get_one::<String>("to")
            .cloned()
            .unwrap_or_else(|| "render".to_string());

        let map_config = args.get_one::<String>("map-config").cloned();

        Ok(ConvertCommand {
            coordinate,
            from_kind,
            target,
            map_config,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let settings = load_settings(self.map_config.as_deref())?;
        let transformer = CoordinateTransformer::new(settings);

        match self.target.as_str() {
            "render" => {
                let point = parse_utils::parse_point(&self.coordinate, &self.from_kind)?;
                info!("Converting {} {} to render coordinates",
                      point.kind.description(), self.coordinate);

                match transformer.to_render_coords(&point) {
                    Some(render) => {
                        info!("Render coordinates: [{}, {}]", render.lat, render.lng);
                    }
                    None => return Err(MapError::MissingCoordinates),
                }
            }
            "worldspace" => {
                let render = parse_utils::parse_render_point(&self.coordinate)?;
                info!("Converting render coordinates {} to worldspace", self.coordinate);

                let point = transformer.to_worldspace(&render);
                info!("Worldspace coordinates: ({}, {})", point.x, point.y);
            }
            other => {
                return Err(MapError::GenericError(format!(
                    "Unsupported conversion target: {}. Use 'render' or 'worldspace'",
                    other)));
            }
        }

        self.logger.log("Conversion completed successfully")?;

        Ok(())
    }
}
