use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use markerkit::utils::logger::Logger;
use markerkit::commands::{CommandFactory, MarkerkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("MarkerKit")
        .version("1.0")
        .author("Maurice Schilpp")
        .about("Convert marker coordinates and import/export location data")
        .arg(
            Arg::new("input")
                .help("Input locations JSON file")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("convert")
                .short('c')
                .long("convert")
                .help("Convert a single coordinate between spaces")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("coordinate")
                .long("coordinate")
                .help("Coordinate for conversion in 'x,y' format")
                .value_name("COORDINATE")
                .required(false),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Coordinate kind of the input pair (xy, normalised, pseudo-normalised, worldspace)")
                .value_name("KIND")
                .default_value("worldspace")
                .required(false),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Conversion target (render or worldspace)")
                .value_name("TARGET")
                .default_value("render")
                .required(false),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .help("Export locations in clipboard format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .help("Only export the location with this name")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for export, stdout otherwise")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("map-config")
                .long("map-config")
                .help("TOML file overriding canvas size and world bounds")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let log_file = "markerkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("markerkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = MarkerkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
