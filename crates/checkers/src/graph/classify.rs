//! Node classification: upgradeable bases, interfaces, abstract contracts.

use crate::graph::{InheritanceGraph, NodeId};
use std::collections::BTreeSet;
use tracing::debug;

/// Name suffix marking contracts from the upgradeable variant of a base
/// library. The suffix alone is not enough; user contracts coincidentally
/// named `*Upgradeable` must not match.
pub const UPGRADEABLE_SUFFIX: &str = "Upgradeable";

/// Provenance-path fragment identifying the canonical
/// openzeppelin-contracts-upgradeable package.
pub const UPGRADEABLE_PACKAGE_PATH: &str = "openzeppelin/contracts-upgradeable";

/// Substring marking a reserved storage-gap variable.
pub const GAP_VARIABLE_MARKER: &str = "__gap";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub upgradeable: BTreeSet<NodeId>,
    pub interface: BTreeSet<NodeId>,
    pub abstract_contracts: BTreeSet<NodeId>,
}

impl Classification {
    pub fn is_upgradeable(&self, id: NodeId) -> bool {
        self.upgradeable.contains(&id)
    }

    pub fn is_interface(&self, id: NodeId) -> bool {
        self.interface.contains(&id)
    }

    pub fn is_abstract(&self, id: NodeId) -> bool {
        self.abstract_contracts.contains(&id)
    }
}

/// Derives the three classification sets in one pass over the graph.
/// Deterministic given the same graph; the sets are read-only afterwards.
pub fn classify(graph: &InheritanceGraph) -> Classification {
    let mut classification = Classification::default();

    for node in graph.nodes() {
        let record = &node.record;

        if record.name.ends_with(UPGRADEABLE_SUFFIX)
            && record.source_path.contains(UPGRADEABLE_PACKAGE_PATH)
        {
            classification.upgradeable.insert(node.id);
        }

        let unimplemented = record
            .functions
            .iter()
            .filter(|f| !f.is_implemented)
            .count();

        // Zero functions means neither interface nor abstract.
        if unimplemented > 0 {
            if unimplemented == record.functions.len() {
                classification.interface.insert(node.id);
            } else {
                classification.abstract_contracts.insert(node.id);
            }
        }
    }

    debug!(
        upgradeable = classification.upgradeable.len(),
        interface = classification.interface.len(),
        abstract_contracts = classification.abstract_contracts.len(),
        "classified inheritance graph"
    );

    classification
}
