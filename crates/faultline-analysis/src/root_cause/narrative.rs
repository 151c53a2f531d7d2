//! Deterministic narrative templates for root-cause results.

use std::collections::BTreeSet;

use faultline_core::models::{AssetSummary, EdgeType};

use super::playbook::playbook_for;
use super::types::{ChainLink, DetailedAnalysis, Evidence, RootCause, UpstreamFailure};

const NO_REASON: &str = "no recorded failure reason";

/// Sentence template per edge type. Uses `{source}` and `{target}`.
pub fn link_template(edge_type: EdgeType) -> &'static str {
    match edge_type {
        EdgeType::Powers => "{source} supplies power to {target}",
        EdgeType::ConnectsTo => "{target} reaches the network through {source}",
        EdgeType::FeedsData => "{source} feeds data to {target}",
        EdgeType::DependsOn => "{target} depends on {source}",
        EdgeType::Controls => "{source} controls {target}",
        EdgeType::OwnedBy => "{source} is owned by {target}",
    }
}

/// Render one link sentence.
pub fn render_link(edge_type: EdgeType, source: &str, target: &str) -> String {
    link_template(edge_type)
        .replace("{source}", source)
        .replace("{target}", target)
}

/// `B --POWERS--> X --FEEDS_DATA--> A`
pub fn render_chain(chain: &[ChainLink]) -> String {
    let mut out = String::new();
    for link in chain {
        out.push_str(&link.asset.id);
        if let Some(edge_type) = link.edge_to_next {
            out.push_str(&format!(" --{edge_type}--> "));
        }
    }
    out
}

fn reason(asset: &AssetSummary) -> &str {
    asset.failure_reason.as_deref().unwrap_or(NO_REASON)
}

fn chain_edge_types(causes: &[RootCause]) -> BTreeSet<EdgeType> {
    causes
        .iter()
        .flat_map(|cause| cause.chain.iter().filter_map(|link| link.edge_to_next))
        .collect()
}

fn join_edge_types(edge_types: &BTreeSet<EdgeType>) -> String {
    if edge_types.is_empty() {
        return "none".to_string();
    }
    edge_types
        .iter()
        .map(EdgeType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-paragraph explanation of an upstream root cause.
pub fn upstream_explanation(target: &AssetSummary, causes: &[RootCause]) -> String {
    let hops = causes.first().map(|c| c.hops).unwrap_or_default();
    let mut text = format!(
        "{} is {}. Nearest upstream failure{} at {} hop{}: ",
        target.id,
        target.status,
        if causes.len() > 1 { "s" } else { "" },
        hops,
        if hops == 1 { "" } else { "s" },
    );
    let parts: Vec<String> = causes
        .iter()
        .map(|cause| {
            format!(
                "{} ({}, {}) via {}",
                cause.asset.id,
                cause.asset.status,
                reason(&cause.asset),
                render_chain(&cause.chain)
            )
        })
        .collect();
    text.push_str(&parts.join("; "));
    text.push('.');
    text
}

/// One-paragraph explanation of an isolated failure.
pub fn isolated_explanation(target: &AssetSummary, max_hops: usize) -> String {
    format!(
        "{} is {} ({}). No failing upstream asset within {} hop{}; treating it as an isolated failure.",
        target.id,
        target.status,
        reason(target),
        max_hops,
        if max_hops == 1 { "" } else { "s" },
    )
}

/// Detailed walk-through for an upstream root cause.
pub fn upstream_analysis(
    target: &AssetSummary,
    causes: &[RootCause],
    others: &[UpstreamFailure],
    upstream_examined: usize,
) -> DetailedAnalysis {
    let edge_types = chain_edge_types(causes);
    let hops = causes.first().map(|c| c.hops).unwrap_or_default();
    let names: Vec<&str> = causes.iter().map(|c| c.asset.id.as_str()).collect();
    let names = names.join(", ");
    let chain_len = causes.first().map(|c| c.chain.len()).unwrap_or_default();

    let thought_process = vec![
        format!(
            "1. INITIAL OBSERVATION: Asset '{}' ({}) is {} and requires root cause investigation.",
            target.id, target.category, target.status
        ),
        format!(
            "2. DEPENDENCY ANALYSIS: Examined {upstream_examined} upstream asset(s) through dependency relationships."
        ),
        format!(
            "3. RELATIONSHIP MAPPING: Failure chain relationships: {}.",
            join_edge_types(&edge_types)
        ),
        format!("4. FAILURE PROPAGATION: Nearest failure found {hops} level(s) upstream."),
        format!("5. ROOT IDENTIFICATION: Found '{names}' as the originating failure point."),
    ];

    let mut evidence_examined: Vec<Evidence> = causes
        .iter()
        .map(|cause| Evidence {
            category: "Root Cause Status".to_string(),
            finding: format!("{} is {}", cause.asset.id, cause.asset.status),
            details: format!("Failure reason: {}", reason(&cause.asset)),
        })
        .collect();
    for cause in causes {
        let links: Vec<String> = cause
            .chain
            .windows(2)
            .filter_map(|pair| {
                pair[0]
                    .edge_to_next
                    .map(|edge_type| render_link(edge_type, &pair[0].asset.id, &pair[1].asset.id))
            })
            .collect();
        evidence_examined.push(Evidence {
            category: "Dependency Chain".to_string(),
            finding: render_chain(&cause.chain),
            details: links.join("; "),
        });
    }
    if !others.is_empty() {
        let ids: Vec<String> = others
            .iter()
            .map(|o| format!("{} ({} hops)", o.asset.id, o.hops))
            .collect();
        evidence_examined.push(Evidence {
            category: "Other Upstream Failures".to_string(),
            finding: format!("{} further failing asset(s) upstream", others.len()),
            details: ids.join(", "),
        });
    }

    let reasoning = vec![
        format!(
            "**Step 1: Dependency Mapping** - Followed incoming {} relationships from {}.",
            join_edge_types(&edge_types),
            target.id
        ),
        "**Step 2: Status Verification** - Filtered upstream assets to those in a failure state."
            .to_string(),
        format!(
            "**Step 3: Nearest Failure Selection** - {names} at {hops} hop(s) is the closest failing dependency."
        ),
        format!(
            "**Step 4: Causal Link Verification** - The chain has {chain_len} asset(s) from root cause to {}.",
            target.id
        ),
        if others.is_empty() {
            "**Step 5: Alternative Hypotheses** - No other failing upstream assets were found.".to_string()
        } else {
            format!(
                "**Step 5: Alternative Hypotheses** - {} farther failure(s) are reported as secondary.",
                others.len()
            )
        },
    ];

    let pattern = if hops > 1 { "cascading" } else { "direct" };
    let conclusion = format!(
        "ROOT CAUSE IDENTIFIED: {names} failed, propagating {hops} dependency level(s) to {}. This is a {pattern} failure pattern.",
        target.id
    );
    let mut recommendation = String::from("RECOMMENDED ACTIONS:\n");
    let mut step = 1;
    for cause in causes {
        recommendation.push_str(&format!(
            "{step}. Resolve {} ({})\n",
            cause.asset.id,
            reason(&cause.asset)
        ));
        step += 1;
    }
    recommendation.push_str(&format!(
        "{step}. Monitor the {chain_len} asset(s) in the dependency chain\n{}. Consider redundancy for {names}",
        step + 1
    ));

    DetailedAnalysis {
        thought_process,
        evidence_examined,
        reasoning,
        conclusion,
        recommendation,
    }
}

/// Detailed walk-through for an isolated failure.
pub fn isolated_analysis(
    target: &AssetSummary,
    max_hops: usize,
    edge_types: &BTreeSet<EdgeType>,
    truncated: bool,
) -> DetailedAnalysis {
    let playbook = playbook_for(target.status);
    let status_upper = target.status.as_str().to_uppercase();
    // A truncated search says nothing about assets past the hop bound.
    let (dependency_details, status_verification) = if truncated {
        (
            format!(
                "Upstream dependencies of {} within {max_hops} hop(s) are operational; \
                 assets beyond the hop bound were not examined",
                target.id
            ),
            format!(
                "**Step 3: Status Verification** - Every upstream asset within {max_hops} hop(s) \
                 is in a healthy state. The search stopped at the hop bound with more assets \
                 upstream, so a cause further away cannot be ruled out."
            ),
        )
    } else {
        (
            format!("All upstream dependencies of {} are operational", target.id),
            "**Step 3: Status Verification** - Every upstream asset is in a healthy state."
                .to_string(),
        )
    };

    DetailedAnalysis {
        thought_process: vec![
            format!(
                "1. INITIAL OBSERVATION: Asset '{}' ({}) is in '{status_upper}' state.",
                target.id, target.category
            ),
            format!("2. UPSTREAM ANALYSIS: Examined incoming dependency relationships up to {max_hops} levels deep."),
            "3. NO UPSTREAM FAILURES: No failing asset found in the dependency chain.".to_string(),
            "4. ISOLATED ISSUE: The issue is not caused by an upstream dependency.".to_string(),
            format!(
                "5. CONCLUSION: '{}' itself is the source of the issue: {}.",
                target.id, playbook.description
            ),
        ],
        evidence_examined: vec![
            Evidence {
                category: "Asset Status".to_string(),
                finding: format!("{} is in '{}' state", target.id, target.status),
                details: format!("Failure reason: {}", reason(target)),
            },
            Evidence {
                category: "Dependency Analysis".to_string(),
                finding: "No upstream failures detected".to_string(),
                details: dependency_details,
            },
            Evidence {
                category: "Asset Type Analysis".to_string(),
                finding: format!("Asset is a {}", target.category),
                details: format!(
                    "{} assets typically fail from hardware, configuration, or device-local causes",
                    target.category
                ),
            },
        ],
        reasoning: vec![
            format!(
                "**Step 1: Hypothesis Formation** - Checked whether the {} state of {} came from an upstream failure.",
                target.status, target.id
            ),
            format!(
                "**Step 2: Graph Traversal** - Traversed incoming {} relationships up to {max_hops} levels deep.",
                join_edge_types(edge_types)
            ),
            status_verification,
            format!(
                "**Step 4: Issue Classification** - Status '{}' indicates {}.",
                target.status, playbook.description
            ),
        ],
        conclusion: format!(
            "ROOT CAUSE IDENTIFIED: {} ({}) has an isolated {status_upper} condition with no upstream cause. The issue is: {}.",
            target.id,
            target.category,
            reason(target)
        ),
        recommendation: format!(
            "RECOMMENDED ACTIONS:\n{}",
            playbook.render_steps(&target.id).join("\n")
        ),
    }
}
