use thiserror::Error;

/// Fatal construction failures. A graph is either built whole or not at
/// all; a partially built graph would make the downstream checks silently
/// wrong rather than merely incomplete.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("duplicate contract record for '{0}'")]
    DuplicateContract(String),

    #[error("malformed contract record: {0}")]
    MalformedRecord(String),
}

/// Lookup failure for path enumeration. Reported to the caller with every
/// name that failed to resolve, so a typo can be told apart from a
/// contract genuinely absent from the project. Not fatal; enumeration
/// simply yields nothing.
#[derive(Debug, Error)]
#[error("can't find contract(s) in graph: {}", .missing.join(", "))]
pub struct NotFoundError {
    pub missing: Vec<String>,
}
