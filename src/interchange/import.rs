//! Paste-import parsing

use log::{debug, error};

use crate::map::{Location, MapResult};

use super::format::LocationRecord;

/// Parse an interchange document into locations
///
/// The whole document is deserialized before any location is produced, so a
/// malformed document aborts with no partial effects. Entries without usable
/// coordinates on both axes are skipped silently.
pub fn parse_locations(text: &str) -> MapResult<Vec<Location>> {
    let records: Vec<LocationRecord> = match serde_json::from_str(text) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to parse interchange JSON: {}", e);
            return Err(e.into());
        }
    };

    debug!("Parsed {} interchange record(s)", records.len());

    let mut locations = Vec::with_capacity(records.len());
    for record in records {
        if !record.has_coords() {
            debug!("Skipping entry without usable coordinates");
            continue;
        }
        locations.push(record.into_location());
    }

    Ok(locations)
}
