//! Contract records as delivered by an external resolver.
//!
//! The core performs no parsing of its own: a resolver (Slither, a build
//! artifact reader, hand-written fixtures) supplies one record per contract
//! and the graph builder takes it from there. All fields are required at
//! the serialization boundary; a record missing any of them is rejected
//! before any algorithm runs, since a partial graph produces silently
//! wrong results rather than merely incomplete ones.

use crate::error::GraphError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub name: String,

    /// Direct base contracts, in declaration order. May forward-reference
    /// contracts that appear later in the collection or not at all.
    pub bases: Vec<String>,

    pub functions: Vec<FunctionRecord>,

    pub variables: Vec<VariableRecord>,

    /// Provenance path of the defining source file, used only for the
    /// upgradeable-package classification rule.
    pub source_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    pub is_implemented: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: String,

    /// Name of the contract that declares this variable. Distinguishes
    /// self-declared variables from ones visible through inheritance.
    pub contract: String,
}

impl ContractRecord {
    /// Minimal record for a base that was referenced in an inheritance
    /// list but never enumerated by the resolver.
    pub fn stub(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if self.name.is_empty() {
            return Err(GraphError::MalformedRecord(
                "contract record with empty name".to_string(),
            ));
        }
        for var in &self.variables {
            if var.name.is_empty() || var.contract.is_empty() {
                return Err(GraphError::MalformedRecord(format!(
                    "variable record in '{}' missing name or owning contract",
                    self.name
                )));
            }
        }
        Ok(())
    }
}
