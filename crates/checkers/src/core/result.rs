use crate::core::{Confidence, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub checker_id: String,

    pub finding_type: String,

    pub severity: Severity,

    pub confidence: Confidence,

    pub confidence_score: f64,

    pub title: String,

    pub description: String,

    /// Contract the finding is about, where one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,

    /// Provenance path of the offending contract's source file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FindingMetadata>,
}

impl Finding {
    pub fn new(
        checker_id: String,
        severity: Severity,
        confidence: Confidence,
        title: String,
        description: String,
    ) -> Self {
        Self {
            checker_id: checker_id.clone(),
            finding_type: checker_id, // Default to checker_id
            severity,
            confidence,
            confidence_score: confidence.to_score(),
            title,
            description,
            contract: None,
            source_path: None,
            metadata: None,
        }
    }

    pub fn with_finding_type(mut self, finding_type: String) -> Self {
        self.finding_type = finding_type;
        self
    }

    pub fn with_contract(mut self, contract: &str) -> Self {
        self.contract = Some(contract.to_string());
        self
    }

    pub fn with_source_path(mut self, source_path: String) -> Self {
        self.source_path = Some(source_path);
        self
    }

    pub fn with_metadata(mut self, metadata: FindingMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn responsible_bases(&self) -> &[String] {
        self.metadata
            .as_ref()
            .map(|m| m.responsible_bases.as_slice())
            .unwrap_or_default()
    }

    pub fn priority_score(&self) -> u32 {
        let severity_score = match self.severity {
            Severity::Critical => 1000,
            Severity::High => 100,
            Severity::Medium => 10,
            Severity::Low => 1,
            Severity::Informational => 0,
        };

        let confidence_multiplier = match self.confidence {
            Confidence::High => 10,
            Confidence::Medium => 5,
            Confidence::Low => 1,
        };

        severity_score * confidence_multiplier
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindingMetadata {
    /// Upgradeable base names responsible for the finding.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub responsible_bases: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub references: Vec<String>,
}
