//! Clipboard-format export command
//!
//! This module implements the command for re-exporting locations from a
//! document in the clipboard interchange format.

use std::fs;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::load_settings;
use crate::interchange;
use crate::map::errors::{MapError, MapResult};
use crate::map::{Location, MarkerMap};
use crate::utils::logger::Logger;

/// Command for exporting locations in clipboard format
pub struct ExportCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Optional location name filter
    name_filter: Option<String>,
    /// Optional output file, stdout otherwise
    output_file: Option<String>,
    /// Optional map settings override file
    map_config: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExportCommand<'a> {
    /// Create a new export command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExportCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| MapError::GenericError("Missing input file".to_string()))?
            .clone();

        let name_filter = args.get_one::<String>("name").cloned();
        let output_file = args.get_one::<String>("output").cloned();
        let map_config = args.get_one::<String>("map-config").cloned();

        Ok(ExportCommand {
            input_file,
            name_filter,
            output_file,
            map_config,
            logger,
        })
    }
}

impl<'a> Command for ExportCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        info!("Exporting locations from {}", self.input_file);

        let settings = load_settings(self.map_config.as_deref())?;
        let mut map = MarkerMap::new(settings);

        let text = fs::read_to_string(&self.input_file)?;
        map.import_str(&text)?;

        let json = match &self.name_filter {
            Some(name) => {
                let index = map
                    .markers()
                    .iter()
                    .position(|marker| marker.location().name == *name)
                    .ok_or_else(|| {
                        MapError::GenericError(format!("No marker named '{}'", name))
                    })?;

                map.export_location(index)?
            }
            None => {
                let locations: Vec<Location> = map
                    .markers()
                    .iter()
                    .map(|marker| marker.location().clone())
                    .collect();

                interchange::to_clipboard_json_all(&locations)
            }
        };

        match &self.output_file {
            Some(path) => {
                fs::write(path, &json)?;
                info!("Export written to {}", path);
            }
            None => {
                println!("{}", json);
            }
        }

        self.logger.log("Export completed successfully")?;

        Ok(())
    }
}
