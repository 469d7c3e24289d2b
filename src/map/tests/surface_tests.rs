//! Tests for the marker map surface

extern crate std;

use crate::coordinate::{MapSettings, Point, RenderPoint};
use crate::map::events::ClickEvent;
use crate::map::location::Location;
use crate::map::surface::MarkerMap;
use crate::view::Popup;

fn map() -> MarkerMap {
    MarkerMap::new(MapSettings::default())
}

#[test]
fn test_ctrl_click_places_a_marker() {
    let mut map = map();
    let click = ClickEvent::new(RenderPoint::new(-101.0, 114.0), true, false);

    let index = map.handle_click(&click).unwrap();

    std::assert_eq!(map.markers().len(), 1);
    let marker = map.marker(index).unwrap();
    std::assert_eq!(marker.location().name, "Custom location");
    std::assert_eq!(marker.location().coords.x.fract(), 0.0);
    std::assert_eq!(marker.location().coords.y.fract(), 0.0);
}

#[test]
fn test_plain_click_does_nothing() {
    let mut map = map();
    let click = ClickEvent::new(RenderPoint::new(-101.0, 114.0), false, false);

    std::assert!(map.handle_click(&click).is_none());
    std::assert!(map.markers().is_empty());
}

#[test]
fn test_marker_click_routes_to_popup_or_form() {
    let mut map = map();
    let index = map
        .add_location(Location::from_coords(Point::worldspace(5.0, 5.0)))
        .unwrap();

    match map.marker_clicked(index, false).unwrap() {
        Popup::Info(content) => {
            std::assert_eq!(content.title, "Custom location");
            std::assert_eq!(content.info, "Coords: X: 5, Y: 5");
        }
        Popup::Edit(_) => std::panic!("plain click must open the info popup"),
    }

    match map.marker_clicked(index, true).unwrap() {
        Popup::Edit(form) => {
            std::assert_eq!(form.title.value, "Custom location");
            std::assert_eq!(form.icon.value, "96");
        }
        Popup::Info(_) => std::panic!("shift click must open the edit form"),
    }
}

#[test]
fn test_marker_click_out_of_range_is_an_error() {
    let map = map();
    std::assert!(map.marker_clicked(3, false).is_err());
}

#[test]
fn test_apply_edit_updates_location_and_tooltip() {
    let mut map = map();
    let index = map
        .add_location(Location::from_coords(Point::worldspace(5.0, 5.0)))
        .unwrap();

    let mut form = match map.marker_clicked(index, true).unwrap() {
        Popup::Edit(form) => form,
        Popup::Info(_) => std::panic!("expected the edit form"),
    };

    form.title.value = "Hidden bunker".to_string();
    form.icon.value = "101".to_string();
    form.description.value = "Under the rocks".to_string();

    map.apply_edit(index, &form).unwrap();

    let marker = map.marker(index).unwrap();
    std::assert_eq!(marker.location().name, "Hidden bunker");
    std::assert_eq!(marker.location().icon_id, 101);
    std::assert_eq!(
        marker.location().description.as_deref(),
        Some("Under the rocks")
    );
    std::assert_eq!(marker.tooltip.label, "Hidden bunker");
}

#[test]
fn test_apply_edit_rejects_bad_icon_values() {
    let mut map = map();
    let index = map
        .add_location(Location::from_coords(Point::worldspace(5.0, 5.0)))
        .unwrap();

    let mut form = match map.marker_clicked(index, true).unwrap() {
        Popup::Edit(form) => form,
        Popup::Info(_) => std::panic!("expected the edit form"),
    };

    form.icon.value = "boulder".to_string();
    std::assert!(map.apply_edit(index, &form).is_err());

    form.icon.value = "0".to_string();
    std::assert!(map.apply_edit(index, &form).is_err());

    // The location is untouched after the failed edits
    std::assert_eq!(map.marker(index).unwrap().location().icon_id, 96);
}

#[test]
fn test_locations_without_renderable_position_are_dropped() {
    let mut map = map();

    let dropped = map.add_location(Location::from_coords(Point::worldspace(0.0, 5.0)));
    std::assert!(dropped.is_none());
    std::assert!(map.markers().is_empty());
}

#[test]
fn test_import_counts_only_placed_markers() {
    let mut map = map();
    let text = r#"[
        {"name":"A","iconId":1,"coords":{"x":5,"y":5}},
        {"name":"B","coords":{"x":0,"y":5}},
        {"name":"C","iconId":12,"coords":{"x":-1200,"y":90000},"description":"cave"}
    ]"#;

    let added = map.import_str(text).unwrap();

    std::assert_eq!(added, 2);
    std::assert_eq!(map.markers().len(), 2);
    std::assert_eq!(map.marker(0).unwrap().location().name, "A");
    std::assert_eq!(map.marker(1).unwrap().location().name, "C");
}

#[test]
fn test_malformed_import_has_no_partial_effects() {
    let mut map = map();

    std::assert!(map.import_str("this is not json").is_err());
    std::assert!(map.markers().is_empty());
}

#[test]
fn test_empty_import_input_is_a_no_op() {
    let mut map = map();
    std::assert_eq!(map.import_str("").unwrap(), 0);
}

#[test]
fn test_export_single_marker() {
    let mut map = map();
    let text = r#"[{"name":"A","iconId":1,"coords":{"x":5,"y":5}}]"#;
    map.import_str(text).unwrap();

    let json = map.export_location(0).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    std::assert_eq!(parsed[0]["name"], "A");
    std::assert_eq!(parsed[0]["coords"]["x"].as_i64(), Some(5));
}
