//! Tests for GridShape parsing and conversions.

use field_common::{AxisTag, GridShape, GridShapeParseError};

// ============================================================================
// from_csv tests
// ============================================================================

#[test]
fn test_parse_grid_shape() {
    let grid = GridShape::from_csv("12,12,79,3").unwrap();
    assert_eq!(grid, GridShape::new(12, 12, 79, 3));
}

#[test]
fn test_parse_grid_shape_with_spaces() {
    let grid = GridShape::from_csv(" 24, 24 ,72,  3").unwrap();
    assert_eq!(grid, GridShape::c24());
}

#[test]
fn test_parse_grid_shape_zero_halo() {
    let grid = GridShape::from_csv("4,5,6,0").unwrap();
    assert_eq!(grid.halo, 0);
}

#[test]
fn test_parse_grid_shape_wrong_count() {
    let err = GridShape::from_csv("12,12,79").unwrap_err();
    assert_eq!(err, GridShapeParseError::InvalidFormat("12,12,79".to_string()));
}

#[test]
fn test_parse_grid_shape_negative() {
    let err = GridShape::from_csv("12,-1,79,3").unwrap_err();
    assert_eq!(err, GridShapeParseError::InvalidNumber("-1".to_string()));
}

#[test]
fn test_parse_grid_shape_not_a_number() {
    assert!(matches!(
        GridShape::from_csv("a,b,c,d"),
        Err(GridShapeParseError::InvalidNumber(_))
    ));
}

// ============================================================================
// Conversion tests
// ============================================================================

#[test]
fn test_from_tuple() {
    let grid: GridShape = (12, 12, 79, 3).into();
    assert_eq!(grid, GridShape::c12());
    assert_eq!(grid.compute_points(), 12 * 12 * 79);
}

#[test]
fn test_serde_field_names() {
    let grid = GridShape::c12();
    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(json, r#"{"nx":12,"ny":12,"nz":79,"halo":3}"#);
}

#[test]
fn test_axis_tag_serde_names() {
    assert_eq!(serde_json::to_string(&AxisTag::XInterface).unwrap(), r#""x_interface""#);
    assert_eq!(
        serde_json::to_string(&AxisTag::extra("ntracers")).unwrap(),
        r#"{"extra":"ntracers"}"#
    );
}
