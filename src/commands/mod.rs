//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod export_command;
pub mod import_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use export_command::ExportCommand;
pub use import_command::ImportCommand;

use std::fs;

use clap::ArgMatches;

use crate::coordinate::MapSettings;
use crate::map::errors::MapResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct MarkerkitCommandFactory;

impl MarkerkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        MarkerkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for MarkerkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> MapResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("convert") {
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        } else if args.get_flag("export") {
            Ok(Box::new(ExportCommand::new(args, logger)?))
        } else {
            // Default to the import command
            Ok(Box::new(ImportCommand::new(args, logger)?))
        }
    }
}

/// Load map settings, applying a TOML override file when given
pub(crate) fn load_settings(path: Option<&str>) -> MapResult<MapSettings> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            MapSettings::from_toml_str(&content)
        }
        None => Ok(MapSettings::default()),
    }
}
