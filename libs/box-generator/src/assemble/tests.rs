//! Tests for the geometry assembler's engine call sequence.

use super::*;
use crate::params::Field;
use crate::resolve::resolve;
use approx::assert_relative_eq;
use config::constants::DEFAULT_FILLET_SEGMENTS;
use std::cell::RefCell;

/// One recorded engine call. Solids are numbered in creation order.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Cuboid { size: DVec3, center: DVec3 },
    Subtract { base: usize, tool: usize },
    Expand { solid: usize, radius: f64, corners: CornerStyle, segments: u32 },
}

#[derive(Default)]
struct RecordingEngine {
    calls: RefCell<Vec<Call>>,
    fail_on: Option<CsgOperation>,
}

impl RecordingEngine {
    fn failing(operation: CsgOperation) -> Self {
        Self {
            fail_on: Some(operation),
            ..Self::default()
        }
    }

    fn record(&self, operation: CsgOperation, call: Call) -> Result<usize, String> {
        if self.fail_on == Some(operation) {
            return Err(format!("{operation} refused"));
        }
        let mut calls = self.calls.borrow_mut();
        calls.push(call);
        Ok(calls.len() - 1)
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl CsgEngine for RecordingEngine {
    type Solid = usize;
    type Error = String;

    fn cuboid(&self, size: DVec3, center: DVec3) -> Result<usize, String> {
        self.record(CsgOperation::Cuboid, Call::Cuboid { size, center })
    }

    fn subtract(&self, base: usize, tool: usize) -> Result<usize, String> {
        self.record(CsgOperation::Subtract, Call::Subtract { base, tool })
    }

    fn expand(
        &self,
        solid: usize,
        radius: f64,
        corners: CornerStyle,
        segments: u32,
    ) -> Result<usize, String> {
        self.record(
            CsgOperation::Expand,
            Call::Expand {
                solid,
                radius,
                corners,
                segments,
            },
        )
    }
}

fn run(
    engine: &RecordingEngine,
    params: &ParameterSet,
) -> Result<(usize, DimensionReport), GeometryError> {
    let resolved = resolve(params).unwrap();
    assemble(engine, params, &resolved, DEFAULT_FILLET_SEGMENTS)
}

#[test]
fn test_call_sequence_with_fillet() {
    let engine = RecordingEngine::default();
    let (solid, report) = run(&engine, &ParameterSet::default()).unwrap();
    let calls = engine.calls();
    assert_eq!(calls.len(), 4);

    let Call::Cuboid { size, center } = calls[0] else {
        panic!("expected outer cuboid, got {:?}", calls[0]);
    };
    assert_eq!(size, DVec3::new(25.4, 25.4, 25.4));
    assert_eq!(center, DVec3::new(0.0, 0.0, 12.7));

    let Call::Cuboid { size, center } = calls[1] else {
        panic!("expected cavity cuboid, got {:?}", calls[1]);
    };
    assert_relative_eq!(size.x, 23.4);
    assert_relative_eq!(size.y, 23.4);
    assert_relative_eq!(size.z, 24.4);
    assert_eq!(center.x, 0.0);
    assert_relative_eq!(center.z, 1.0 + 24.4 / 2.0);
    // Cavity top meets the outer top: the box is open.
    assert_relative_eq!(center.z + size.z / 2.0, 25.4, epsilon = 1e-12);

    assert_eq!(calls[2], Call::Subtract { base: 0, tool: 1 });
    assert_eq!(
        calls[3],
        Call::Expand {
            solid: 2,
            radius: 0.4,
            corners: CornerStyle::Round,
            segments: 16,
        }
    );

    assert_eq!(solid, 3);
    assert_eq!(report.layer_count, 127);
}

#[test]
fn test_zero_fillet_skips_expand() {
    let engine = RecordingEngine::default();
    let params = ParameterSet::default().with(Field::EdgeFillet, 0.0);
    let (solid, report) = run(&engine, &params).unwrap();

    let calls = engine.calls();
    assert_eq!(calls.len(), 3);
    assert!(!calls.iter().any(|c| matches!(c, Call::Expand { .. })));
    assert_eq!(solid, 2);
    assert_eq!(report.width, 25.4);
}

#[test]
fn test_outer_uses_quantized_height() {
    let engine = RecordingEngine::default();
    let params = ParameterSet::default().with(Field::BoxHeight, 25.3);
    run(&engine, &params).unwrap();

    let Call::Cuboid { size, center } = engine.calls()[0] else {
        panic!("expected outer cuboid");
    };
    assert_relative_eq!(size.z, 25.2, epsilon = 1e-9);
    assert_relative_eq!(center.z, 12.6, epsilon = 1e-9);
}

#[test]
fn test_custom_segments_reach_the_engine() {
    let engine = RecordingEngine::default();
    let params = ParameterSet::default();
    let resolved = resolve(&params).unwrap();
    assemble(&engine, &params, &resolved, 32).unwrap();
    assert!(matches!(
        engine.calls().last(),
        Some(Call::Expand { segments: 32, .. })
    ));
}

#[test]
fn test_engine_failures_name_the_step() {
    for operation in [CsgOperation::Cuboid, CsgOperation::Subtract, CsgOperation::Expand] {
        let engine = RecordingEngine::failing(operation);
        let err = run(&engine, &ParameterSet::default()).unwrap_err();
        assert_eq!(
            err,
            GeometryError::Engine {
                operation,
                message: format!("{operation} refused"),
            }
        );
    }
}
