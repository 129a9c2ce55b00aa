//! Enumeration of inheritance chains between two contracts.
//!
//! Depth-first search along `edge_out` with an explicit frame stack
//! instead of native recursion, so deep hierarchies cannot overflow the
//! call stack. The mutable current path doubles as the cycle guard: a
//! neighbor already on the path abandons that branch, which keeps the
//! search finite even on graphs with inheritance cycles. Exponential in
//! the worst case, which is acceptable at the tens-of-nodes scale of
//! real contract hierarchies.

use crate::error::NotFoundError;
use crate::graph::{InheritanceGraph, NodeId};

/// A simple path from source to destination, both inclusive, where each
/// consecutive pair (u, v) satisfies "u inherits directly from v".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritancePath {
    ids: Vec<NodeId>,
}

impl InheritancePath {
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn names<'a>(&self, graph: &'a InheritanceGraph) -> Vec<&'a str> {
        self.ids.iter().map(|&id| graph.name_of(id)).collect()
    }

    /// Renders the chain as an indented arrow tree, one contract per line.
    pub fn render(&self, graph: &InheritanceGraph) -> String {
        let mut output = Vec::new();
        let mut indent = String::new();
        for &id in &self.ids {
            output.push(format!("{}\\--> {}", indent, graph.node(id)));
            indent.push_str("    ");
        }
        output.join("\n")
    }
}

struct Frame {
    neighbors: Vec<NodeId>,
    next: usize,
}

/// Pushes a node onto the current path and opens its frame. A frame for
/// the destination gets no neighbors: the path is recorded and the node
/// backtracked without further descent.
fn enter(
    graph: &InheritanceGraph,
    id: NodeId,
    destination: NodeId,
    path: &mut Vec<NodeId>,
    found: &mut Vec<Vec<NodeId>>,
) -> Frame {
    path.push(id);
    let neighbors = if id == destination {
        found.push(path.clone());
        Vec::new()
    } else {
        graph.node(id).edge_out.iter().copied().collect()
    };
    Frame { neighbors, next: 0 }
}

/// Enumerates every simple inheritance path from `source` to
/// `destination`. A missing name on either end is a reported condition,
/// not a crash: the error carries each name that failed to resolve.
pub fn find_paths(
    graph: &InheritanceGraph,
    source: &str,
    destination: &str,
) -> Result<Vec<InheritancePath>, NotFoundError> {
    let (source_id, destination_id) = match (graph.id_of(source), graph.id_of(destination)) {
        (Some(s), Some(d)) => (s, d),
        (s, d) => {
            let mut missing = Vec::new();
            if s.is_none() {
                missing.push(source.to_string());
            }
            if d.is_none() {
                missing.push(destination.to_string());
            }
            return Err(NotFoundError { missing });
        }
    };

    let mut found: Vec<Vec<NodeId>> = Vec::new();
    let mut path: Vec<NodeId> = Vec::new();
    let mut stack = vec![enter(graph, source_id, destination_id, &mut path, &mut found)];

    while let Some(frame) = stack.last_mut() {
        match frame.neighbors.get(frame.next).copied() {
            Some(next_id) => {
                frame.next += 1;
                // Cycle guard: a node already on the path ends the branch.
                if !path.contains(&next_id) {
                    let opened = enter(graph, next_id, destination_id, &mut path, &mut found);
                    stack.push(opened);
                }
            }
            None => {
                stack.pop();
                path.pop();
            }
        }
    }

    Ok(found
        .into_iter()
        .map(|ids| InheritancePath { ids })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ContractRecord;
    use crate::graph::GraphBuilder;

    fn record(name: &str, bases: &[&str]) -> ContractRecord {
        ContractRecord {
            name: name.to_string(),
            bases: bases.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    fn build(records: &[(&str, &[&str])]) -> InheritanceGraph {
        GraphBuilder::new()
            .add_records(records.iter().map(|&(name, bases)| record(name, bases)))
            .build()
            .unwrap()
    }

    #[test]
    fn linear_chain_yields_one_path() {
        let graph = build(&[("A", &[]), ("B", &["A"]), ("C", &["B"])]);

        let paths = find_paths(&graph, "C", "A").unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].names(&graph), vec!["C", "B", "A"]);
    }

    #[test]
    fn diamond_yields_both_paths() {
        let graph = build(&[
            ("A", &[]),
            ("B", &["A"]),
            ("C", &["A"]),
            ("D", &["B", "C"]),
        ]);

        let paths = find_paths(&graph, "D", "A").unwrap();
        assert_eq!(paths.len(), 2);
        for path in &paths {
            let names = path.names(&graph);
            assert_eq!(names.first(), Some(&"D"));
            assert_eq!(names.last(), Some(&"A"));
        }
    }

    #[test]
    fn source_equals_destination() {
        let graph = build(&[("A", &[])]);

        let paths = find_paths(&graph, "A", "A").unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].names(&graph), vec!["A"]);
    }

    #[test]
    fn missing_names_are_all_reported() {
        let graph = build(&[("A", &[])]);

        let err = find_paths(&graph, "Nope", "AlsoNope").unwrap_err();
        assert_eq!(
            err.missing,
            vec!["Nope".to_string(), "AlsoNope".to_string()]
        );

        let err = find_paths(&graph, "A", "Missing").unwrap_err();
        assert_eq!(err.missing, vec!["Missing".to_string()]);
    }

    #[test]
    fn cycle_terminates_with_finite_result() {
        // A inherits B inherits A: illegal Solidity, legal data. The
        // search must neither loop nor crash.
        let graph = build(&[("A", &["B"]), ("B", &["A"]), ("C", &["A"])]);

        let paths = find_paths(&graph, "C", "B").unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].names(&graph), vec!["C", "A", "B"]);

        let paths = find_paths(&graph, "A", "A").unwrap();
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn unreachable_destination_yields_empty() {
        let graph = build(&[("A", &[]), ("B", &[])]);

        let paths = find_paths(&graph, "A", "B").unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn paths_only_follow_inheritance_direction() {
        // Edges point child -> base; no path runs base -> child.
        let graph = build(&[("Base", &[]), ("Child", &["Base"])]);

        let paths = find_paths(&graph, "Base", "Child").unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn render_indents_each_step() {
        let graph = build(&[("A", &[]), ("B", &["A"])]);
        let paths = find_paths(&graph, "B", "A").unwrap();

        let rendered = paths[0].render(&graph);
        assert_eq!(rendered, "\\--> Node:1(\"B\")\n    \\--> Node:0(\"A\")");
    }
}
