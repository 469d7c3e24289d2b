//! Location import command
//!
//! This module implements the default command: parse a locations JSON
//! document, place its markers, and print a placement summary.

use std::fs;

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::load_settings;
use crate::map::errors::{MapError, MapResult};
use crate::map::{icon_name, MarkerMap};
use crate::utils::logger::Logger;

/// Command for importing a locations document
pub struct ImportCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Optional map settings override file
    map_config: Option<String>,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ImportCommand<'a> {
    /// Create a new import command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ImportCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| MapError::GenericError("Missing input file".to_string()))?
            .clone();

        let map_config = args.get_one::<String>("map-config").cloned();
        let verbose = args.get_flag("verbose");

        Ok(ImportCommand {
            input_file,
            map_config,
            verbose,
            logger,
        })
    }
}

impl<'a> Command for ImportCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        info!("Importing locations from {}", self.input_file);

        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let settings = load_settings(self.map_config.as_deref())?;
        let mut map = MarkerMap::new(settings);

        let text = fs::read_to_string(&self.input_file)?;
        let added = map.import_str(&text)?;

        info!("Placed {} marker(s) at zoom level {}", added, map.transformer().zoom_level());

        let mut rows = Vec::with_capacity(map.markers().len());
        for (index, marker) in map.markers().iter().enumerate() {
            let location = marker.location();
            info!("  #{}: {} [{}]", index, location.name, icon_name(location.icon_id));
            info!("     Worldspace: ({}, {})", location.coords.x, location.coords.y);
            debug!("     Render: ({:.4}, {:.4})", marker.position.lat, marker.position.lng);

            if let Some(description) = &location.description {
                debug!("     Description: {}", description);
            }

            rows.push((
                index,
                location.name.clone(),
                icon_name(location.icon_id),
                format!("({}, {})", location.coords.x, location.coords.y),
            ));
        }

        self.logger.print_marker_list(rows)?;
        self.logger.log("Import completed successfully")?;

        Ok(())
    }
}
