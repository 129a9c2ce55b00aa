//! Checker execution and orchestration
//!
//! Handles running the registered checkers over a built analysis context,
//! aggregating their findings, and rendering unified reports. The engine
//! manages execution flow while the registry provides checker discovery;
//! new checkers can be added without modifying the execution
//! infrastructure.

pub mod engine;
pub mod registry;

pub use engine::{CheckEngine, CheckReport, CheckerInfo, SeverityCount};
pub use registry::{CheckerRegistry, CheckerRegistryBuilder};
