//! Inheritance graph construction and queries
//!
//! The graph is built once from the flat record collection and treated as
//! immutable afterwards. Bases referenced in an inheritance list but never
//! enumerated by the resolver are synthesized as stub nodes during
//! construction, so every edge id resolves. Cycles are legal in the data
//! structure even though real inheritance graphs are acyclic; the
//! consuming algorithms carry their own cycle guards.

pub mod builder;
pub mod classify;
pub mod node;
pub mod paths;

pub use builder::{GraphBuilder, InheritanceGraph};
pub use classify::{
    classify, Classification, GAP_VARIABLE_MARKER, UPGRADEABLE_PACKAGE_PATH, UPGRADEABLE_SUFFIX,
};
pub use node::{Node, NodeId};
pub use paths::{find_paths, InheritancePath};
