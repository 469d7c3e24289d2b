//! Tests for the coordinate transformer

extern crate std;

use crate::coordinate::{
    CoordKind, CoordinateTransformer, MapSettings, PixelPoint, Point, Projection, RenderPoint,
};

fn transformer() -> CoordinateTransformer {
    CoordinateTransformer::new(MapSettings::default())
}

#[test]
fn test_zoom_level_is_eight_for_default_canvas() {
    let transformer = transformer();
    std::assert_eq!(transformer.zoom_level(), 8);

    // Recomputation from the settings must land on the same value
    std::assert_eq!(transformer.settings().zoom_level(), 8);
}

#[test]
fn test_xy_points_pass_through_unprojected() {
    let transformer = transformer();
    let point = Point::new(120.0, -45.0, CoordKind::Xy);

    let render = transformer.to_render_coords(&point).unwrap();
    std::assert_eq!(render, RenderPoint::new(120.0, -45.0));
}

#[test]
fn test_pseudo_normalised_matches_normalised() {
    let transformer = transformer();

    let normalised = Point::new(0.25, 0.75, CoordKind::Normalised);
    let pseudo = Point::new(0.25, 0.75, CoordKind::PseudoNormalised);

    std::assert_eq!(
        transformer.to_render_coords(&normalised),
        transformer.to_render_coords(&pseudo)
    );
}

#[test]
fn test_relabelling_does_not_mutate_the_input() {
    let transformer = transformer();
    let pseudo = Point::new(0.25, 0.75, CoordKind::PseudoNormalised);

    transformer.to_render_coords(&pseudo).unwrap();
    std::assert_eq!(pseudo.kind, CoordKind::PseudoNormalised);
}

#[test]
fn test_worldspace_round_trip_within_truncation_tolerance() {
    let transformer = transformer();
    let samples = [
        (5.0, 5.0),
        (-120000.0, 150000.0),
        (290000.0, -315000.0),
        (-233599.0, 208899.0),
        (1.0, -1.0),
    ];

    for (x, y) in samples {
        let render = transformer
            .to_render_coords(&Point::worldspace(x, y))
            .unwrap();
        let back = transformer.to_worldspace(&render);

        std::assert!(
            (back.x - x).abs() <= 1.0,
            "x drifted from {} to {}",
            x,
            back.x
        );
        std::assert!(
            (back.y - y).abs() <= 1.0,
            "y drifted from {} to {}",
            y,
            back.y
        );
        std::assert_eq!(back.kind, CoordKind::Worldspace);
    }
}

#[test]
fn test_worldspace_corners_normalise_to_canvas_corners() {
    let transformer = transformer();
    let settings = *transformer.settings();

    // {MIN_X, MAX_Y} sits at the canvas origin, so it unprojects to [0, 0]
    let origin = transformer
        .to_render_coords(&Point::worldspace(settings.min_x, settings.max_y))
        .unwrap();
    std::assert_eq!(origin, RenderPoint::new(0.0, 0.0));

    // {MAX_X, MIN_Y} sits at the far canvas corner; at zoom 8 the full
    // 65536 px canvas spans 256 render units on each axis
    let corner = transformer
        .to_render_coords(&Point::worldspace(settings.max_x, settings.min_y))
        .unwrap();
    std::assert_eq!(corner, RenderPoint::new(-256.0, 256.0));
}

#[test]
fn test_zero_x_points_are_dropped() {
    let transformer = transformer();

    std::assert!(transformer
        .to_render_coords(&Point::worldspace(0.0, 5.0))
        .is_none());
    std::assert!(transformer
        .to_render_coords(&Point::normalised(0.0, 0.5))
        .is_none());
    std::assert!(transformer
        .to_render_coords(&Point::new(0.0, 10.0, CoordKind::Xy))
        .is_none());

    // A zero Y alone does not trigger the drop
    std::assert!(transformer
        .to_render_coords(&Point::worldspace(5.0, 0.0))
        .is_some());
}

#[test]
fn test_out_of_canvas_render_points_extrapolate() {
    let transformer = transformer();
    let settings = *transformer.settings();

    // A render point left of and above the canvas lands outside the world
    // bounds; nothing clamps it
    let outside = transformer.to_worldspace(&RenderPoint::new(10.0, -10.0));
    std::assert!(outside.x < settings.min_x);
    std::assert!(outside.y > settings.max_y);
}

#[test]
fn test_to_worldspace_truncates_to_integers() {
    let transformer = transformer();

    let point = transformer.to_worldspace(&RenderPoint::new(-101.888, 114.012));
    std::assert_eq!(point.x.fract(), 0.0);
    std::assert_eq!(point.y.fract(), 0.0);
}

/// Projection that treats render coordinates as raw canvas pixels
struct CanvasProjection;

impl Projection for CanvasProjection {
    fn project(&self, coords: &RenderPoint, _zoom: u32) -> PixelPoint {
        PixelPoint::new(coords.lng, coords.lat)
    }

    fn unproject(&self, pixel: &PixelPoint, _zoom: u32) -> RenderPoint {
        RenderPoint::new(pixel.y, pixel.x)
    }
}

#[test]
fn test_custom_projection_is_honoured() {
    let transformer = CoordinateTransformer::with_projection(
        MapSettings::default(),
        Box::new(CanvasProjection),
    );

    let render = transformer
        .to_render_coords(&Point::normalised(0.5, 0.25))
        .unwrap();
    std::assert_eq!(render, RenderPoint::new(16384.0, 32768.0));
}
