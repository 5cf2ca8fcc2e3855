//! Tests for parameter validation.

use super::*;

fn messages(params: &ParameterSet) -> Vec<String> {
    validate(params).iter().map(ToString::to_string).collect()
}

#[test]
fn test_defaults_are_valid() {
    assert!(validate(&ParameterSet::default()).is_empty());
}

#[test]
fn test_positivity_violations_follow_field_order() {
    let mut params = ParameterSet::default();
    for field in POSITIVE_FIELDS {
        params = params.with(field, 0.0);
    }
    let violations = validate(&params);
    let not_positive: Vec<Field> = violations
        .iter()
        .filter_map(|v| match v {
            Violation::NotPositive(field) => Some(*field),
            _ => None,
        })
        .collect();
    assert_eq!(not_positive, POSITIVE_FIELDS.to_vec());
    assert_eq!(violations[0].to_string(), "Wall thickness must be greater than 0");
}

#[test]
fn test_nan_is_not_positive() {
    let params = ParameterSet::default().with(Field::LayerHeight, f64::NAN);
    assert_eq!(
        validate(&params),
        vec![Violation::NotPositive(Field::LayerHeight)]
    );
}

#[test]
fn test_nan_fillet_is_rejected() {
    let params = ParameterSet::default().with(Field::EdgeFillet, f64::NAN);
    assert_eq!(validate(&params), vec![Violation::NegativeFillet]);
}

#[test]
fn test_negative_fillet() {
    let params = ParameterSet::default().with(Field::EdgeFillet, -0.5);
    assert_eq!(
        validate(&params),
        vec![Violation::NegativeFillet, Violation::FilletBelowNozzle]
    );
}

#[test]
fn test_zero_fillet_is_below_nozzle() {
    let params = ParameterSet::default().with(Field::EdgeFillet, 0.0);
    assert_eq!(validate(&params), vec![Violation::FilletBelowNozzle]);
}

#[test]
fn test_wall_too_large_for_each_axis() {
    let params = ParameterSet::default()
        .with(Field::BoxWidth, 2.0)
        .with(Field::BoxDepth, 30.0)
        .with(Field::BoxHeight, 1.0);
    assert_eq!(
        messages(&params),
        vec![
            "Wall thickness is too large for box width",
            "Wall thickness is too large for box height",
        ]
    );
}

#[test]
fn test_wall_exactly_half_width_is_rejected() {
    let params = ParameterSet::default().with(Field::BoxDepth, 2.0);
    assert_eq!(
        validate(&params),
        vec![Violation::WallTooLarge(Axis::Depth)]
    );
}

#[test]
fn test_wall_equal_to_nozzle_is_accepted() {
    let params = ParameterSet::default()
        .with(Field::WallThickness, 0.4)
        .with(Field::EdgeFillet, 0.4);
    assert!(validate(&params).is_empty());
}

#[test]
fn test_wall_a_hair_below_nozzle_is_rejected() {
    let params = ParameterSet::default()
        .with(Field::WallThickness, 0.4 - 1e-9)
        .with(Field::EdgeFillet, 0.4 - 1e-9);
    assert_eq!(
        validate(&params),
        vec![Violation::WallBelowNozzle, Violation::FilletBelowNozzle]
    );
}

#[test]
fn test_fillet_exceeds_wall() {
    let params = ParameterSet::default().with(Field::EdgeFillet, 2.0);
    assert_eq!(
        messages(&params),
        vec!["Edge fillet should not exceed wall thickness"]
    );
}

#[test]
fn test_exceeds_build_volume() {
    let params = ParameterSet::default()
        .with(Field::BuildVolumeHeight, 20.0)
        .with(Field::BoxWidth, 400.0);
    assert_eq!(
        messages(&params),
        vec![
            "Box width exceeds build volume width",
            "Box height exceeds build volume height",
        ]
    );
}

#[test]
fn test_violations_name_their_field() {
    assert_eq!(Violation::FilletExceedsWall.field(), Field::EdgeFillet);
    assert_eq!(
        Violation::WallTooLarge(Axis::Height).field(),
        Field::WallThickness
    );
    assert_eq!(
        Violation::ExceedsBuildVolume(Axis::Depth).field(),
        Field::BoxDepth
    );
    assert_eq!(
        Violation::NotPositive(Field::NozzleSize).field(),
        Field::NozzleSize
    );
}

#[test]
fn test_all_checks_run() {
    let params = ParameterSet {
        nozzle_size: 0.4,
        wall_thickness: 0.2,
        layer_height: 0.2,
        edge_fillet: 3.0,
        build_volume_width: 10.0,
        build_volume_depth: 10.0,
        build_volume_height: 10.0,
        box_width: 0.3,
        box_depth: 20.0,
        box_height: 20.0,
    };
    assert_eq!(
        validate(&params),
        vec![
            Violation::WallTooLarge(Axis::Width),
            Violation::WallBelowNozzle,
            Violation::FilletExceedsWall,
            Violation::ExceedsBuildVolume(Axis::Depth),
            Violation::ExceedsBuildVolume(Axis::Height),
        ]
    );
}
