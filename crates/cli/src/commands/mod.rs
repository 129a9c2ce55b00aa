//! Command implementations for the keisho CLI
//!
//! Two commands cover the two analysis workflows: `inheritance` renders
//! every inheritance chain between a pair of contracts, and `check-gap`
//! runs the checker engine over the project and reports upgradeable
//! contracts missing their storage-gap reservation. Both consume contract
//! records in the resolver JSON format, loaded from a single file or
//! discovered across a directory.

pub mod check;
pub mod inheritance;

mod project;
pub use project::load_contract_records;
