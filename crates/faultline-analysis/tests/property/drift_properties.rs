//! Property tests for drift detection.

use std::collections::BTreeMap;

use faultline_analysis::drift::{
    aggregate_status, ActualState, DriftDetector, DriftStatus, FieldDrift, IntendedConfig,
};
use faultline_core::config::DriftDetectionConfig;
use faultline_core::models::Severity;
use proptest::prelude::*;

const FIELDS: [&str; 5] = ["status", "ipAddress", "version", "configChecksum", "securityZone"];

fn arb_values() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(
        prop::sample::select(FIELDS.to_vec()).prop_map(str::to_string),
        "[a-z0-9.]{1,8}",
        0..=5,
    )
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn drifts_of(severities: &[Severity]) -> Vec<FieldDrift> {
    severities
        .iter()
        .enumerate()
        .map(|(i, &severity)| FieldDrift {
            field: format!("f{i}"),
            intended: "a".to_string(),
            actual: Some("b".to_string()),
            severity,
        })
        .collect()
}

proptest! {
    #[test]
    fn identical_records_are_in_sync(values in arb_values()) {
        let detector = DriftDetector::new(&DriftDetectionConfig::default()).unwrap();
        let intended = IntendedConfig { asset_id: "X".into(), values: values.clone(), source: None };
        let actual = ActualState { asset_id: "X".into(), values };
        let record = detector.detect(&intended, &actual).unwrap();
        prop_assert_eq!(record.status, DriftStatus::InSync);
        prop_assert!(record.drifts.is_empty());
    }

    #[test]
    fn one_action_per_drift(intended in arb_values(), actual in arb_values()) {
        let detector = DriftDetector::new(&DriftDetectionConfig::default()).unwrap();
        let intended = IntendedConfig { asset_id: "X".into(), values: intended, source: None };
        let actual = ActualState { asset_id: "X".into(), values: actual };
        let record = detector.detect(&intended, &actual).unwrap();
        prop_assert_eq!(record.actions.len(), record.drifts.len());
        prop_assert_eq!(record.drifts.is_empty(), record.status == DriftStatus::InSync);
        for (drift, action) in record.drifts.iter().zip(&record.actions) {
            prop_assert_eq!(&drift.field, &action.field);
        }
    }

    #[test]
    fn any_critical_is_critical(mut severities in prop::collection::vec(arb_severity(), 0..6), at in 0usize..6) {
        let at = at.min(severities.len());
        severities.insert(at, Severity::Critical);
        prop_assert_eq!(aggregate_status(&drifts_of(&severities), 2), DriftStatus::Critical);
    }

    #[test]
    fn compounding_highs(highs in 2usize..6, mediums in 0usize..4) {
        let mut severities = vec![Severity::High; highs];
        severities.extend(std::iter::repeat(Severity::Medium).take(mediums));
        prop_assert_eq!(aggregate_status(&drifts_of(&severities), 2), DriftStatus::Critical);
    }
}
