//! Tests for the parameter set and dependent-field clamping.

use super::*;

#[test]
fn test_default_matches_one_inch_box() {
    let params = ParameterSet::default();
    assert_eq!(params.wall_thickness, 1.0);
    assert_eq!(params.layer_height, 0.2);
    assert_eq!(params.nozzle_size, 0.4);
    assert_eq!(params.box_extent(Axis::Width), 25.4);
    assert_eq!(params.box_extent(Axis::Height), 25.4);
    assert_eq!(params.build_volume_extent(Axis::Depth), 220.0);
}

#[test]
fn test_with_replaces_only_the_named_field() {
    let original = ParameterSet::default();
    for (i, field) in Field::ALL.into_iter().enumerate() {
        let value = 100.0 + i as f64;
        let edited = original.with(field, value);
        for other in Field::ALL {
            let expected = if other == field { value } else { original.get(other) };
            assert_eq!(edited.get(other), expected, "{other} after editing {field}");
        }
    }
}

#[test]
fn test_field_keys_round_trip() {
    for field in Field::ALL {
        assert_eq!(field.key().parse::<Field>(), Ok(field));
    }
    assert_eq!(
        "boxLength".parse::<Field>(),
        Err(UnknownField("boxLength".to_string()))
    );
}

#[test]
fn test_json_uses_camel_case_keys() {
    let json = serde_json::to_value(ParameterSet::default()).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 10);
    for field in Field::ALL {
        assert!(object.contains_key(field.key()), "missing {}", field.key());
    }
}

#[test]
fn test_json_missing_keys_take_defaults() {
    let params: ParameterSet = serde_json::from_str(r#"{"boxWidth": 50.0}"#).unwrap();
    assert_eq!(params.box_width, 50.0);
    assert_eq!(params.box_depth, ParameterSet::default().box_depth);
}

// =============================================================================
// RECLAMP
// =============================================================================

#[test]
fn test_reclamp_raises_fillet_to_nozzle() {
    let params = ParameterSet::default().with(Field::EdgeFillet, 0.1);
    assert_eq!(reclamp(&params).edge_fillet, 0.4);
}

#[test]
fn test_reclamp_lowers_fillet_to_wall() {
    let params = ParameterSet::default().with(Field::EdgeFillet, 2.0);
    assert_eq!(reclamp(&params).edge_fillet, 1.0);
}

#[test]
fn test_reclamp_keeps_fillet_in_range() {
    let params = ParameterSet::default().with(Field::EdgeFillet, 0.7);
    assert_eq!(reclamp(&params), params);
}

#[test]
fn test_reclamp_leaves_disabled_rounding_alone() {
    let params = ParameterSet::default().with(Field::EdgeFillet, 0.0);
    assert_eq!(reclamp(&params).edge_fillet, 0.0);
}

#[test]
fn test_reclamp_leaves_empty_interval_alone() {
    let params = ParameterSet::default()
        .with(Field::NozzleSize, 1.2)
        .with(Field::EdgeFillet, 2.0);
    assert_eq!(reclamp(&params), params);
}

#[test]
fn test_reclamp_is_pure() {
    let params = ParameterSet::default().with(Field::EdgeFillet, 5.0);
    let snapshot = params;
    let _ = reclamp(&params);
    assert_eq!(params, snapshot);
    assert_eq!(reclamp(&reclamp(&params)), reclamp(&params));
}
