//! Storage-gap verification for upgradeable contract hierarchies.
//!
//! Contracts extending OpenZeppelin upgradeable bases are expected to
//! reserve unused storage (a variable whose name contains `__gap`) so
//! that future upgrades can add state without shifting the layout of
//! descendants. The check walks the inherited-by direction from every
//! upgradeable base: a contract that declares its own gap passes and
//! shields the branch below it; a contract that does not is flagged and
//! the obligation carries on to its inheritors, attributed to the
//! original upgradeable root. Interfaces declare no state and are exempt.
//!
//! ref: <https://docs.openzeppelin.com/upgrades-plugins/1.x/writing-upgradeable>

use crate::core::{
    AnalysisContext, Checker, Confidence, ContractRecord, Finding, FindingMetadata, Severity,
};
use crate::graph::{Classification, InheritanceGraph, NodeId, GAP_VARIABLE_MARKER};
use crate::impl_checker;
use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

/// Offending contract name mapped to the upgradeable-base names that
/// triggered the violation. A contract is flagged once per distinct
/// upgradeable ancestor reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GapReport {
    violations: BTreeMap<String, BTreeSet<String>>,
}

impl GapReport {
    /// Distinct from "no upgradeable contracts present"; callers wanting
    /// that distinction inspect the classification's upgradeable set.
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn violations(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.violations
    }

    pub fn responsible_bases(&self, contract: &str) -> Option<&BTreeSet<String>> {
        self.violations.get(contract)
    }
}

/// True iff the record declares a gap variable of its own. A gap visible
/// through inheritance does not satisfy a descendant's obligation.
pub fn has_self_declared_gap(record: &ContractRecord) -> bool {
    record
        .variables
        .iter()
        .any(|var| var.name.contains(GAP_VARIABLE_MARKER) && var.contract == record.name)
}

/// Walks `edge_in` from every upgradeable base and accumulates the
/// violation report.
///
/// The worklist carries (node, upgradeable root) pairs and is processed
/// by index, append-only; a pair-keyed seen set prevents re-enqueueing,
/// which bounds the list by nodes x upgradeable roots and makes
/// termination unconditional, inheritance cycles included.
pub fn check_gaps(graph: &InheritanceGraph, classification: &Classification) -> GapReport {
    let mut report = GapReport::default();

    let mut worklist: Vec<(NodeId, NodeId)> = classification
        .upgradeable
        .iter()
        .map(|&id| (id, id))
        .collect();
    let mut enqueued: HashSet<(NodeId, NodeId)> = worklist.iter().copied().collect();

    let mut i = 0;
    while i < worklist.len() {
        let (current, root) = worklist[i];
        i += 1;
        let root_name = graph.name_of(root);

        for &inheritor in &graph.node(current).edge_in {
            // Interfaces cannot declare state.
            if classification.is_interface(inheritor) {
                continue;
            }

            let node = graph.node(inheritor);
            if has_self_declared_gap(&node.record) {
                continue;
            }

            debug!(contract = %node.name(), base = %root_name, "missing storage gap");
            report
                .violations
                .entry(node.name().to_string())
                .or_default()
                .insert(root_name.to_string());

            // The flagged contract is itself a tainted ancestor: keep
            // walking downward from it, still on behalf of `root`.
            let entry = (inheritor, root);
            if enqueued.insert(entry) {
                worklist.push(entry);
            }
        }
    }

    report
}

pub struct StorageGapChecker;

impl StorageGapChecker {
    pub fn new() -> Self {
        Self
    }

    fn check_impl(&self, context: &AnalysisContext) -> Result<Vec<Finding>> {
        let report = check_gaps(context.graph(), context.classification());

        let mut findings = Vec::new();
        for (contract, bases) in report.violations() {
            let base_list = bases.iter().cloned().collect::<Vec<_>>().join(", ");

            let mut finding = Finding::new(
                self.id().to_string(),
                self.severity(),
                self.confidence(),
                format!("Missing storage gap in {}", contract),
                format!(
                    "{} inherits from upgradeable base(s) {} but declares no `__gap` \
                     storage reservation of its own",
                    contract, base_list
                ),
            )
            .with_contract(contract)
            .with_metadata(FindingMetadata {
                responsible_bases: bases.iter().cloned().collect(),
                recommendation: Some(
                    "Declare a `uint256[50] private __gap;` variable to reserve storage \
                     slots for future upgrades"
                        .to_string(),
                ),
                references: vec![
                    "https://docs.openzeppelin.com/upgrades-plugins/1.x/writing-upgradeable"
                        .to_string(),
                ],
            });

            if let Some(node) = context.graph().node_by_name(contract) {
                if !node.record.source_path.is_empty() {
                    finding = finding.with_source_path(node.record.source_path.clone());
                }
            }

            findings.push(finding);
        }

        Ok(findings)
    }
}

impl Default for StorageGapChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl_checker!(
    StorageGapChecker,
    id: "missing-storage-gap",
    name: "Missing Storage Gap",
    severity: Severity::Medium,
    confidence: Confidence::High,
    description: "Detects contracts in upgradeable hierarchies without a reserved `__gap` storage variable"
);
