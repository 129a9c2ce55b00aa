//! Graph construction from resolver records.
//!
//! Construction is two-phase: accumulate every record first, then resolve
//! inheritance references in a single pass. Resolving against the complete
//! record set avoids mutating the name index while iterating it, and keeps
//! id assignment independent of reference order.

use crate::core::ContractRecord;
use crate::error::GraphError;
use crate::graph::{Node, NodeId};
use std::collections::HashMap;
use tracing::debug;

pub struct InheritanceGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl InheritanceGraph {
    /// Node lookup by id. Ids held by edge sets and classification sets
    /// are always in range for the graph that produced them.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&id| &self.nodes[id])
    }

    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn name_of(&self, id: NodeId) -> &str {
        self.nodes[id].name()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

#[derive(Default)]
pub struct GraphBuilder {
    records: Vec<ContractRecord>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(mut self, record: ContractRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn add_records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = ContractRecord>,
    {
        self.records.extend(records);
        self
    }

    pub fn build(self) -> Result<InheritanceGraph, GraphError> {
        for record in &self.records {
            record.validate()?;
        }

        let mut nodes: Vec<Node> = Vec::with_capacity(self.records.len());
        let mut index: HashMap<String, NodeId> = HashMap::new();

        for record in self.records {
            if index.contains_key(&record.name) {
                return Err(GraphError::DuplicateContract(record.name));
            }
            let id = nodes.len();
            index.insert(record.name.clone(), id);
            nodes.push(Node::new(id, record, false));
        }

        // Stubs are appended past this bound; they have no bases of their
        // own, so only the listed records need resolving.
        let listed = nodes.len();
        for child_id in 0..listed {
            let bases = nodes[child_id].record.bases.clone();
            for base in bases {
                let base_id = match index.get(&base) {
                    Some(&id) => id,
                    None => {
                        let id = nodes.len();
                        debug!(contract = %base, id, "synthesizing stub node for unlisted base");
                        index.insert(base.clone(), id);
                        nodes.push(Node::new(id, ContractRecord::stub(&base), true));
                        id
                    }
                };
                nodes[base_id].edge_in.insert(child_id);
                nodes[child_id].edge_out.insert(base_id);
            }
        }

        Ok(InheritanceGraph { nodes, index })
    }
}
