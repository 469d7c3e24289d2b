//! Clipboard-export serialization

use serde_json::{json, Number, Value};

use crate::map::Location;

/// Serialize a single location in the clipboard format
///
/// The clipboard always carries an array, one element per location. The
/// description key is only present when the location has one.
pub fn to_clipboard_json(location: &Location) -> String {
    Value::Array(vec![location_entry(location)]).to_string()
}

/// Serialize a whole location collection in the clipboard format
pub fn to_clipboard_json_all(locations: &[Location]) -> String {
    Value::Array(locations.iter().map(location_entry).collect()).to_string()
}

/// Build the JSON object for one location
fn location_entry(location: &Location) -> Value {
    let mut entry = json!({
        "name": location.name,
        "iconId": location.icon_id,
        "coords": {
            "x": coord_number(location.coords.x),
            "y": coord_number(location.coords.y),
        },
    });

    if let Some(description) = &location.description {
        entry["description"] = Value::String(description.clone());
    }

    entry
}

/// Render a coordinate as a JSON number, keeping integral values integral
///
/// Worldspace coordinates are truncated integers, so they serialize without
/// a fractional part; imported non-integral values keep theirs.
fn coord_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.is_finite() {
        Value::Number((value as i64).into())
    } else {
        Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
    }
}
