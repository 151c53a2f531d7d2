//! Tests for the Faultline configuration system.

use std::sync::Mutex;

use faultline_core::config::{
    CascadeScope, DriftDetectionConfig, FaultlineConfig, ImpactConfig, RedundancyRule,
    RootCauseConfig, SeverityTier,
};
use faultline_core::errors::ConfigError;
use faultline_core::models::{AssetStatus, EdgeType, Severity};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clear all FAULTLINE_ env vars to prevent cross-test contamination.
fn clear_faultline_env_vars() {
    for key in [
        "FAULTLINE_ROOT_CAUSE_MAX_HOPS",
        "FAULTLINE_IMPACT_MAX_HOPS",
        "FAULTLINE_IMPACT_SPOF_THRESHOLD",
        "FAULTLINE_DRIFT_COMPOUND_HIGH_THRESHOLD",
    ] {
        std::env::remove_var(key);
    }
}

fn validation_field(err: ConfigError) -> String {
    match err {
        ConfigError::ValidationFailed { field, .. } => field,
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn test_defaults_are_valid() {
    let config = FaultlineConfig::default();
    config.validate().unwrap();
    assert_eq!(config.root_cause.effective_max_hops(), 3);
    assert_eq!(config.impact.effective_max_hops(), 5);
    assert_eq!(config.impact.effective_spof_threshold(), 4);
    assert_eq!(config.drift.effective_compound_high_threshold(), 2);
    assert_eq!(config.drift.effective_unknown_sentinel(), "unknown");
    assert_eq!(config.drift.effective_fields().len(), 5);
    assert_eq!(config.drift.effective_actions().len(), 5);
}

#[test]
fn test_default_edge_types_exclude_ownership() {
    let config = FaultlineConfig::default();
    assert!(!config.root_cause.effective_edge_types().contains(&EdgeType::OwnedBy));
    assert!(!config.impact.effective_edge_types().contains(&EdgeType::OwnedBy));
    assert!(config.impact.effective_edge_types().contains(&EdgeType::Controls));
    assert!(!config.root_cause.effective_edge_types().contains(&EdgeType::Controls));
}

#[test]
fn test_default_severity_tiers_descend() {
    let tiers = FaultlineConfig::default().impact.effective_severity_tiers();
    assert_eq!(
        tiers.first(),
        Some(&SeverityTier {
            min_downstream: 11,
            severity: Severity::Critical
        })
    );
    assert_eq!(tiers.last().map(|t| t.min_downstream), Some(0));
}

#[test]
fn test_from_toml_partial_overrides() {
    let config = FaultlineConfig::from_toml(
        r#"
[root_cause]
max_hops = 4
failure_statuses = ["offline", "failed"]

[impact]
edge_types = ["POWERS"]

[[impact.severity_tiers]]
min_downstream = 2
severity = "high"

[[impact.severity_tiers]]
min_downstream = 0
severity = "low"

[drift]
compound_high_threshold = 3

[[drift.fields]]
name = "firmware"
severity = "medium"
"#,
    )
    .unwrap();

    assert_eq!(config.root_cause.effective_max_hops(), 4);
    let statuses = config.root_cause.effective_failure_statuses();
    assert_eq!(statuses.len(), 2);
    assert!(statuses.contains(&AssetStatus::Failed));
    // Untouched sections keep their defaults.
    assert_eq!(config.impact.effective_max_hops(), 5);
    assert_eq!(config.impact.effective_edge_types().len(), 1);
    assert_eq!(config.impact.effective_severity_tiers().len(), 2);
    assert_eq!(config.drift.effective_compound_high_threshold(), 3);
    assert_eq!(config.drift.effective_fields()[0].name, "firmware");
    // Actions were not overridden.
    assert_eq!(config.drift.effective_actions().len(), 5);
}

#[test]
fn test_from_toml_parse_error() {
    let err = FaultlineConfig::from_toml("[root_cause\nmax_hops = 1").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_max_hops_rejected() {
    let err = FaultlineConfig::from_toml("[root_cause]\nmax_hops = 0").unwrap_err();
    assert_eq!(validation_field(err), "root_cause.max_hops");

    let err = FaultlineConfig::from_toml("[impact]\nmax_hops = 0").unwrap_err();
    assert_eq!(validation_field(err), "impact.max_hops");
}

#[test]
fn test_empty_tables_rejected() {
    let err = FaultlineConfig::from_toml("[drift]\nfields = []").unwrap_err();
    assert_eq!(validation_field(err), "drift.fields");

    let err = FaultlineConfig::from_toml("[impact]\nseverity_tiers = []").unwrap_err();
    assert_eq!(validation_field(err), "impact.severity_tiers");

    let err = FaultlineConfig::from_toml("[root_cause]\nedge_types = []").unwrap_err();
    assert_eq!(validation_field(err), "root_cause.edge_types");
}

#[test]
fn test_duplicate_drift_field_rejected() {
    let err = FaultlineConfig::from_toml(
        r#"
[[drift.fields]]
name = "version"
severity = "high"

[[drift.fields]]
name = "version"
severity = "low"
"#,
    )
    .unwrap_err();
    assert_eq!(validation_field(err), "drift.fields");
}

#[test]
fn test_compound_threshold_below_two_rejected() {
    let err = FaultlineConfig::from_toml("[drift]\ncompound_high_threshold = 1").unwrap_err();
    assert_eq!(validation_field(err), "drift.compound_high_threshold");
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_faultline_env_vars();

    std::env::set_var("FAULTLINE_ROOT_CAUSE_MAX_HOPS", "7");
    std::env::set_var("FAULTLINE_IMPACT_MAX_HOPS", "not-a-number");

    let config = FaultlineConfig::default().with_env_overrides();
    assert_eq!(config.root_cause.effective_max_hops(), 7);
    // Unparseable values fall back to the existing setting.
    assert_eq!(config.impact.effective_max_hops(), 5);

    clear_faultline_env_vars();
}

#[test]
fn test_toml_round_trip_preserves_overrides() {
    let mut config = FaultlineConfig::default();
    config.root_cause.max_hops = Some(2);
    config.impact.spof_threshold = Some(9);

    let text = config.to_toml().unwrap();
    let parsed = FaultlineConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_sub_configs_validate_on_their_own() {
    let root_cause = RootCauseConfig {
        failure_statuses: Some(Default::default()),
        ..RootCauseConfig::default()
    };
    assert_eq!(
        validation_field(root_cause.validate().unwrap_err()),
        "root_cause.failure_statuses"
    );

    let impact = ImpactConfig {
        edge_types: Some(Default::default()),
        ..ImpactConfig::default()
    };
    assert_eq!(validation_field(impact.validate().unwrap_err()), "impact.edge_types");

    let drift = DriftDetectionConfig {
        compound_high_threshold: Some(0),
        ..DriftDetectionConfig::default()
    };
    assert_eq!(
        validation_field(drift.validate().unwrap_err()),
        "drift.compound_high_threshold"
    );
}

#[test]
fn test_redundancy_category_in_two_rules_rejected() {
    let impact = ImpactConfig {
        redundancy_rules: Some(vec![
            RedundancyRule::new(&["UPS"], "Add redundant power source"),
            RedundancyRule::new(&["UPS", "PDU"], "Split the load"),
        ]),
        ..ImpactConfig::default()
    };
    assert_eq!(
        validation_field(impact.validate().unwrap_err()),
        "impact.redundancy_rules"
    );
}

#[test]
fn test_builtin_cascade_scopes_are_valid() {
    assert!(CascadeScope::network().validate().is_ok());
    assert!(CascadeScope::power().validate().is_ok());

    let scope = CascadeScope {
        source_categories: Default::default(),
        ..CascadeScope::power()
    };
    assert_eq!(
        validation_field(scope.validate().unwrap_err()),
        "cascade_scope.source_categories"
    );
}
