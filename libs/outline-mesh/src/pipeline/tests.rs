//! # Pipeline Tests

use super::*;
use crate::path::PathCommand;
use approx::assert_relative_eq;

fn square(x: f64, y: f64, size: f64) -> Path {
    Path::rectangle(x, y, size, size)
}

fn min_x(facets: &[crate::solid::Facet]) -> f64 {
    facets
        .iter()
        .flat_map(|f| f.vertices.iter().map(|v| v.x))
        .fold(f64::INFINITY, f64::min)
}

fn max_x(facets: &[crate::solid::Facet]) -> f64 {
    facets
        .iter()
        .flat_map(|f| f.vertices.iter().map(|v| v.x))
        .fold(f64::NEG_INFINITY, f64::max)
}

#[test]
fn test_cursor_place() {
    let bounds = Bounds2D {
        min: DVec2::new(2.0, -3.0),
        max: DVec2::new(6.0, 1.0),
    };
    let (offset, next) = Cursor { x: 10.0 }.place(&bounds, 5.0);
    assert_eq!(offset, DVec2::new(8.0, 3.0));
    assert_relative_eq!(next.x, 19.0);
}

#[test]
fn test_cursor_empty_bounds_advance_by_gap() {
    let (offset, next) = Cursor::default().place(&Bounds2D::default(), 5.0);
    assert_eq!(offset, DVec2::ZERO);
    assert_eq!(next.x, 5.0);
}

#[test]
fn test_single_square() {
    let shapes = Shapes::new("font", vec![square(0.0, 0.0, 10.0)]);
    let (solid, report) = convert_with_report(&shapes, &ConvertOptions::default()).unwrap();
    assert_eq!(solid.name(), "font");
    assert_eq!(solid.facet_count(), 12);
    assert_eq!(report.shapes, 1);
    assert_eq!(report.polygons, 1);
    assert_eq!(report.facets, 12);
    assert!(!report.is_degraded());
}

#[test]
fn test_shapes_move_to_origin_and_line_up() {
    let shapes = Shapes::new(
        "font",
        vec![square(100.0, 50.0, 10.0), square(-20.0, -20.0, 4.0)],
    );
    let solid = convert(&shapes, 1.0).unwrap();
    let (first, second) = solid.facets().split_at(12);

    assert_relative_eq!(min_x(first), 0.0);
    assert_relative_eq!(max_x(first), 10.0);
    // 10 wide + 5 gap
    assert_relative_eq!(min_x(second), 15.0);
    assert_relative_eq!(max_x(second), 19.0);

    for facet in solid.facets() {
        for v in &facet.vertices {
            assert!(v.y >= -1e-9);
        }
    }
}

#[test]
fn test_empty_shape_advances_cursor() {
    let shapes = Shapes::new("font", vec![Path::new(), square(0.0, 0.0, 2.0)]);
    let solid = convert(&shapes, 1.0).unwrap();
    assert_eq!(solid.facet_count(), 12);
    assert_relative_eq!(min_x(solid.facets()), 5.0);
}

#[test]
fn test_empty_source() {
    let shapes = Shapes::new("font", Vec::new());
    let (solid, report) = convert_with_report(&shapes, &ConvertOptions::default()).unwrap();
    assert!(solid.is_empty());
    assert_eq!(report, ConversionReport::default());
}

#[test]
fn test_invalid_depth_rejected() {
    let shapes = Shapes::new("font", vec![square(0.0, 0.0, 1.0)]);
    for depth in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            convert(&shapes, depth),
            Err(MeshError::InvalidDepth { .. })
        ));
    }
}

#[test]
fn test_invalid_tolerance_rejected() {
    let shapes = Shapes::new("font", vec![square(0.0, 0.0, 1.0)]);
    let mut options = ConvertOptions::default();
    options.config.tolerance = 0.0;
    assert!(matches!(
        convert_with_report(&shapes, &options),
        Err(MeshError::Config(ConfigError::InvalidTolerance(_)))
    ));
}

#[test]
fn test_degenerate_polygon_reported() {
    let bowtie = Path::from_commands(vec![
        PathCommand::MoveTo(DVec2::new(0.0, 0.0)),
        PathCommand::LineTo(DVec2::new(10.0, 10.0)),
        PathCommand::LineTo(DVec2::new(10.0, 0.0)),
        PathCommand::LineTo(DVec2::new(0.0, 10.0)),
        PathCommand::Close,
    ]);
    let shapes = Shapes::new("font", vec![bowtie]);
    let (solid, report) = convert_with_report(&shapes, &ConvertOptions::default()).unwrap();
    assert!(report.is_degraded());
    assert_eq!(report.incomplete_polygons, 1);
    // One ear plus four edges
    assert_eq!(solid.facet_count(), 2 + 8);
}

#[test]
fn test_short_polygons_skipped() {
    let mut path = square(0.0, 0.0, 1.0);
    path.move_to(DVec2::new(5.0, 5.0)).line_to(DVec2::new(6.0, 5.0)).close();
    let shapes = Shapes::new("font", vec![path]);
    let (solid, report) = convert_with_report(&shapes, &ConvertOptions::default()).unwrap();
    assert_eq!(solid.facet_count(), 12);
    assert_eq!(report.polygons, 2);
    assert_eq!(report.skipped_polygons, 1);
}

#[test]
fn test_parallel_matches_serial() {
    let mut curvy = Path::new();
    curvy
        .move_to(DVec2::new(0.0, 0.0))
        .line_to(DVec2::new(20.0, 0.0))
        .quad_to(DVec2::new(30.0, 10.0), DVec2::new(20.0, 20.0))
        .cubic_to(
            DVec2::new(15.0, 25.0),
            DVec2::new(5.0, 25.0),
            DVec2::new(0.0, 20.0),
        )
        .close();
    let paths: Vec<Path> = (0..16)
        .map(|i| {
            if i % 2 == 0 {
                curvy.clone()
            } else {
                square(i as f64, 0.0, i as f64 + 1.0)
            }
        })
        .collect();
    let shapes = Shapes::new("font", paths);
    let options = ConvertOptions::default();

    let serial = convert_with_report(&shapes, &options).unwrap();
    let parallel = convert_parallel(&shapes, &options).unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn test_outward_option_reaches_walls() {
    let shapes = Shapes::new("font", vec![square(0.0, 0.0, 1.0)]);
    let options = ConvertOptions {
        side_normals: SideNormals::Outward,
        ..Default::default()
    };
    let (solid, _) = convert_with_report(&shapes, &options).unwrap();
    assert!(solid.facets()[4..].iter().all(|f| f.normal.length() > 0.5));
}

#[test]
fn test_convert_to_ascii() {
    let shapes = Shapes::new("font", vec![square(0.0, 0.0, 10.0)]);
    let bytes = convert_to_ascii(&shapes, 5.0).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("solid font\n"));
    assert!(text.ends_with("endsolid font\n"));
    assert_eq!(text.matches("facet normal").count(), 12);
}
