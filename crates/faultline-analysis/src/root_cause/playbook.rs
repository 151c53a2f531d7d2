//! Status-specific troubleshooting playbooks for isolated failures.
//! Steps use `{asset}` as a placeholder.

use faultline_core::models::AssetStatus;

/// What a status means and how to troubleshoot it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playbook {
    pub description: &'static str,
    pub steps: [&'static str; 5],
}

const UNREACHABLE: Playbook = Playbook {
    description: "network connectivity issue or device is powered off",
    steps: [
        "Verify network connectivity to {asset}",
        "Check that {asset} is powered on and responding to ping",
        "Inspect firewall rules and network ACLs that may block access",
        "Review switch and router logs for network path issues",
        "Check physical cabling and network port status",
    ],
};

const DEGRADED: Playbook = Playbook {
    description: "performance degradation or partial loss of function",
    steps: [
        "Monitor performance metrics and resource utilization on {asset}",
        "Check for high CPU, memory, or disk usage",
        "Review recent workload changes or traffic spikes",
        "Inspect application logs for errors or warnings",
        "Consider scaling resources or tuning configuration",
    ],
};

const WARNING: Playbook = Playbook {
    description: "early warning indicators detected",
    steps: [
        "Review warning messages and alerts raised by {asset}",
        "Check system health metrics such as temperature and disk space",
        "Investigate threshold violations or limits being approached",
        "Review predictive maintenance indicators",
        "Schedule preventive maintenance before the issue escalates",
    ],
};

const OFFLINE: Playbook = Playbook {
    description: "complete service unavailability",
    steps: [
        "Attempt to restart services on {asset}",
        "Check system logs for crash reports or errors",
        "Verify hardware status (power supply, disk, memory)",
        "Review recent changes or deployments",
        "Fail over to backup systems if available",
    ],
};

const ERROR: Playbook = Playbook {
    description: "active error condition",
    steps: [
        "Examine error logs and stack traces from {asset}",
        "Identify the specific error code or message",
        "Check for known issues in the current version",
        "Review recent configuration or code changes",
        "Apply patches or roll back to the last known good state",
    ],
};

const FAILED: Playbook = Playbook {
    description: "critical failure requiring immediate attention",
    steps: [
        "Investigate critical failure logs on {asset}",
        "Run hardware diagnostics for component failures",
        "Verify data integrity and backup status",
        "Engage vendor support for hardware or software faults",
        "Execute disaster recovery procedures if necessary",
    ],
};

const GENERIC: Playbook = Playbook {
    description: "unexpected state",
    steps: [
        "Examine the current status and logs of {asset}",
        "Check for configuration errors",
        "Review system health and diagnostics",
        "Investigate environmental factors",
        "Contact the asset owner or vendor for support",
    ],
};

/// Playbook for an asset in `status`. Healthy statuses get the generic one.
pub fn playbook_for(status: AssetStatus) -> &'static Playbook {
    match status {
        AssetStatus::Unreachable => &UNREACHABLE,
        AssetStatus::Degraded => &DEGRADED,
        AssetStatus::Warning => &WARNING,
        AssetStatus::Offline => &OFFLINE,
        AssetStatus::Error => &ERROR,
        AssetStatus::Failed => &FAILED,
        AssetStatus::Online | AssetStatus::Running => &GENERIC,
    }
}

impl Playbook {
    /// Numbered steps with the asset name filled in.
    pub fn render_steps(&self, asset: &str) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step.replace("{asset}", asset)))
            .collect()
    }
}
