use crate::core::ContractRecord;
use std::collections::BTreeSet;
use std::fmt;

pub type NodeId = usize;

/// Graph node representing a smart contract.
///
/// `edge_in` holds the ids of contracts that directly inherit from this
/// one; `edge_out` holds the ids of contracts this one directly inherits
/// from. The two sets are kept as ordered sets so that traversal order,
/// and therefore path output, is stable for a given construction order.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub record: ContractRecord,
    pub edge_in: BTreeSet<NodeId>,
    pub edge_out: BTreeSet<NodeId>,

    /// True for stub nodes created for referenced-but-unlisted bases.
    pub synthesized: bool,
}

impl Node {
    pub(crate) fn new(id: NodeId, record: ContractRecord, synthesized: bool) -> Self {
        Self {
            id,
            record,
            edge_in: BTreeSet::new(),
            edge_out: BTreeSet::new(),
            synthesized,
        }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node:{}(\"{}\")", self.id, self.record.name)
    }
}
