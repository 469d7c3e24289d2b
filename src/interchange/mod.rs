//! JSON interchange for marker data
//!
//! This module implements the paste-import and clipboard-export formats:
//! an ordered JSON array of `{name, iconId, coords: {x, y}, description?}`
//! entries with worldspace coordinates.

mod export;
mod format;
mod import;

#[cfg(test)]
mod tests;

pub use self::export::{to_clipboard_json, to_clipboard_json_all};
pub use self::format::{CoordsRecord, LocationRecord};
pub use self::import::parse_locations;
