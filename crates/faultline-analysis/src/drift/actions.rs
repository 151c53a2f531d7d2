//! Remediation action rendering from the field → action table.

use faultline_core::config::RemediationRule;

use super::types::{FieldDrift, RemediationAction};

/// Action id used for drifted fields with no rule.
pub const REVIEW_DRIFT_ACTION: &str = "review_drift";

const MISSING_VALUE: &str = "<missing>";

/// Fill `{asset}`, `{field}`, `{intended}` and `{actual}` in a template.
pub fn render_template(template: &str, asset_id: &str, drift: &FieldDrift) -> String {
    template
        .replace("{asset}", asset_id)
        .replace("{field}", &drift.field)
        .replace("{intended}", &drift.intended)
        .replace("{actual}", drift.actual.as_deref().unwrap_or(MISSING_VALUE))
}

/// Build the action a rule prescribes for `drift`.
pub fn render_action(
    rule: &RemediationRule,
    asset_id: &str,
    drift: &FieldDrift,
) -> RemediationAction {
    RemediationAction {
        action_id: rule.action_id.clone(),
        field: drift.field.clone(),
        title: rule.title.clone(),
        description: render_template(&rule.description, asset_id, drift),
        priority: rule.priority,
        automatable: rule.automatable,
    }
}

/// Manual review action for a field with no rule. Priority follows the drift.
pub fn fallback_action(asset_id: &str, drift: &FieldDrift) -> RemediationAction {
    RemediationAction {
        action_id: REVIEW_DRIFT_ACTION.to_string(),
        field: drift.field.clone(),
        title: format!("Review {} Drift", drift.field),
        description: render_template(
            "Field {field} of {asset} is {actual} but should be {intended}. Review and reconcile manually.",
            asset_id,
            drift,
        ),
        priority: drift.severity,
        automatable: false,
    }
}
