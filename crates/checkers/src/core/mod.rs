//! Core abstractions and infrastructure for the checker framework
//!
//! Fundamental building blocks for Keisho's inheritance analysis. The
//! Checker trait defines the interface all checks implement, the context
//! layer hands checkers the built graph together with its classification
//! sets, and the record module defines the boundary shape contract
//! resolvers feed into the graph builder.

pub mod checker;
pub mod context;
pub mod record;
pub mod result;
pub mod severity;

pub use checker::Checker;
pub use context::{AnalysisContext, CheckerConfig, ProjectInfo};
pub use record::{ContractRecord, FunctionRecord, VariableRecord};
pub use result::{Finding, FindingMetadata};
pub use severity::{Confidence, Severity};
