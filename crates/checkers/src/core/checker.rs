//! Checker trait for pluggable contract-level checks.
//!
//! Checks are independent units implementing a common trait rather than
//! methods on one monolithic analyzer. Each checker reads the immutable
//! graph and classification sets from the context and produces a fresh
//! list of findings, so checkers have no shared mutable state and the
//! engine can fan them out across threads. New conventions can be checked
//! by adding a new implementation without touching existing ones.

use crate::core::{AnalysisContext, Confidence, Finding, Severity};
use anyhow::Result;

pub trait Checker: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description provided"
    }

    fn severity(&self) -> Severity;

    fn confidence(&self) -> Confidence;

    fn check(&self, context: &AnalysisContext) -> Result<Vec<Finding>>;

    fn enabled_by_default(&self) -> bool {
        true
    }
}

#[macro_export]
macro_rules! impl_checker {
    (
        $checker:ty,
        id: $id:expr,
        name: $name:expr,
        severity: $severity:expr,
        confidence: $confidence:expr
        $(, description: $description:expr)?
    ) => {
        impl Checker for $checker {
            fn id(&self) -> &'static str {
                $id
            }

            fn name(&self) -> &'static str {
                $name
            }

            fn severity(&self) -> Severity {
                $severity
            }

            fn confidence(&self) -> Confidence {
                $confidence
            }

            $(
                fn description(&self) -> &'static str {
                    $description
                }
            )?

            fn check(&self, context: &AnalysisContext) -> anyhow::Result<Vec<Finding>> {
                self.check_impl(context)
            }
        }
    };
}
