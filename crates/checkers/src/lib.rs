//! Keisho Checkers - Inheritance Analysis for Solidity Contracts
//!
//! This crate builds a directed inheritance graph from resolver-supplied
//! contract records and runs checks over it: enumeration of inheritance
//! chains between two contracts, and verification that contracts extending
//! OpenZeppelin upgradeable bases reserve a `__gap` storage slot.

pub mod core;
pub mod error;
pub mod graph;
pub mod runner;

pub mod storage_gap;

pub use crate::core::{
    AnalysisContext, Checker, CheckerConfig, Confidence, ContractRecord, Finding, FindingMetadata,
    FunctionRecord, ProjectInfo, Severity, VariableRecord,
};

pub use crate::error::{GraphError, NotFoundError};

pub use crate::graph::{
    classify, find_paths, Classification, GraphBuilder, InheritanceGraph, InheritancePath, Node,
    NodeId,
};

pub use crate::runner::{CheckEngine, CheckReport, CheckerRegistry, CheckerRegistryBuilder};

pub use crate::storage_gap::{check_gaps, GapReport, StorageGapChecker};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
