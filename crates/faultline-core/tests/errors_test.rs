//! Tests for error codes and conversions.

use faultline_core::errors::{AnalysisError, ConfigError, FaultlineErrorCode, GraphError};

#[test]
fn test_error_codes() {
    assert_eq!(
        AnalysisError::node_not_found("PLC-9").error_code(),
        "NODE_NOT_FOUND"
    );
    assert_eq!(
        AnalysisError::invalid_parameter("max_hops", "must be at least 1").error_code(),
        "INVALID_PARAMETER"
    );
    assert_eq!(
        GraphError::Timeout { timeout_ms: 500 }.error_code(),
        "GRAPH_ACCESS_FAILURE"
    );
}

#[test]
fn test_graph_error_converts_and_keeps_code() {
    let err: AnalysisError = GraphError::Unavailable {
        message: "connection refused".into(),
    }
    .into();
    assert!(matches!(err, AnalysisError::GraphAccess(_)));
    assert_eq!(err.error_code(), "GRAPH_ACCESS_FAILURE");
}

#[test]
fn test_config_error_converts() {
    let err: AnalysisError = ConfigError::ValidationFailed {
        field: "drift.fields".into(),
        message: "must not be empty".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_wire_string_format() {
    let err = AnalysisError::node_not_found("Robot-Arm-101");
    assert_eq!(err.wire_string(), "[NODE_NOT_FOUND] Asset not found: Robot-Arm-101");
}

#[test]
fn test_invalid_config_maps_to_invalid_parameter() {
    let err = AnalysisError::invalid_config(ConfigError::ValidationFailed {
        field: "impact.edge_types".to_string(),
        message: "must not be empty".to_string(),
    });
    assert_eq!(
        err,
        AnalysisError::InvalidParameter {
            name: "impact.edge_types".to_string(),
            message: "must not be empty".to_string(),
        }
    );

    let parse = ConfigError::ParseError {
        path: "<string>".to_string(),
        message: "bad".to_string(),
    };
    assert_eq!(
        AnalysisError::invalid_config(parse.clone()),
        AnalysisError::Config(parse)
    );
}
