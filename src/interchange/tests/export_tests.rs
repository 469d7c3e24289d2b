//! Tests for clipboard-export serialization

extern crate std;

use crate::coordinate::Point;
use crate::interchange::{parse_locations, to_clipboard_json, to_clipboard_json_all};
use crate::map::Location;

#[test]
fn test_export_is_a_one_element_array() {
    let location = Location::new(
        Some("A".to_string()),
        None,
        Some(1),
        Some(Point::worldspace(5.0, 5.0)),
    );

    let json = to_clipboard_json(&location);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    std::assert_eq!(parsed.as_array().unwrap().len(), 1);
    std::assert_eq!(parsed[0]["name"], "A");
    std::assert_eq!(parsed[0]["iconId"], 1);
}

#[test]
fn test_integral_coordinates_serialize_without_fraction() {
    let location = Location::from_coords(Point::worldspace(5.0, -12.0));
    let json = to_clipboard_json(&location);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    std::assert_eq!(parsed[0]["coords"]["x"].as_i64(), Some(5));
    std::assert_eq!(parsed[0]["coords"]["y"].as_i64(), Some(-12));

    // The serialized text itself carries plain integers
    std::assert!(json.contains("\"x\":5"));
    std::assert!(json.contains("\"y\":-12"));
}

#[test]
fn test_fractional_coordinates_keep_their_fraction() {
    let location = Location::from_coords(Point::worldspace(5.5, -2.25));
    let json = to_clipboard_json(&location);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    std::assert_eq!(parsed[0]["coords"]["x"].as_f64(), Some(5.5));
    std::assert_eq!(parsed[0]["coords"]["y"].as_f64(), Some(-2.25));
}

#[test]
fn test_description_key_only_present_when_set() {
    let without = Location::from_coords(Point::worldspace(5.0, 5.0));
    let json = to_clipboard_json(&without);
    std::assert!(!json.contains("description"));

    let with = Location::new(
        Some("A".to_string()),
        Some("a cave".to_string()),
        None,
        Some(Point::worldspace(5.0, 5.0)),
    );
    let json = to_clipboard_json(&with);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    std::assert_eq!(parsed[0]["description"], "a cave");
}

#[test]
fn test_export_reimports_to_the_same_location() {
    let original = Location::new(
        Some("Bunker".to_string()),
        Some("under the rocks".to_string()),
        Some(101),
        Some(Point::worldspace(-1200.0, 90000.0)),
    );

    let json = to_clipboard_json(&original);
    let reimported = parse_locations(&json).unwrap();

    std::assert_eq!(reimported.len(), 1);
    std::assert_eq!(reimported[0], original);
}

#[test]
fn test_collection_export_keeps_order() {
    let locations = vec![
        Location::new(Some("first".to_string()), None, None, Some(Point::worldspace(1.0, 1.0))),
        Location::new(Some("second".to_string()), None, None, Some(Point::worldspace(2.0, 2.0))),
    ];

    let json = to_clipboard_json_all(&locations);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    std::assert_eq!(parsed.as_array().unwrap().len(), 2);
    std::assert_eq!(parsed[0]["name"], "first");
    std::assert_eq!(parsed[1]["name"], "second");
}
