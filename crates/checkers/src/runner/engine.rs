use crate::core::{AnalysisContext, Checker, Finding};
use anyhow::Result;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

pub struct CheckEngine {
    checkers: Vec<Arc<dyn Checker>>,
}

impl CheckEngine {
    pub fn new() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    pub fn add_checker<C: Checker + 'static>(mut self, checker: C) -> Self {
        self.checkers.push(Arc::new(checker));
        self
    }

    pub fn with_checkers(mut self, checkers: Vec<Arc<dyn Checker>>) -> Self {
        self.checkers.extend(checkers);
        self
    }

    pub fn run(&self, context: &AnalysisContext) -> Result<CheckReport> {
        info!(checkers = self.checkers.len(), "running check engine");

        let mut findings: Vec<Finding> = if context.config().parallel_execution {
            self.checkers
                .par_iter()
                .filter_map(|checker| match checker.check(context) {
                    Ok(findings) => Some(findings),
                    Err(e) => {
                        warn!(checker = checker.id(), error = %e, "checker failed");
                        None
                    }
                })
                .flatten()
                .collect()
        } else {
            let mut all_findings = Vec::new();
            for checker in &self.checkers {
                match checker.check(context) {
                    Ok(findings) => all_findings.extend(findings),
                    Err(e) => warn!(checker = checker.id(), error = %e, "checker failed"),
                }
            }
            all_findings
        };

        if let Some(min_severity) = context.config().min_severity {
            findings.retain(|f| f.severity >= min_severity);
        }

        Ok(CheckReport::new(findings))
    }

    pub fn list_checkers(&self) -> Vec<CheckerInfo> {
        self.checkers
            .iter()
            .map(|c| CheckerInfo {
                id: c.id().to_string(),
                name: c.name().to_string(),
                description: c.description().to_string(),
                severity: c.severity(),
                confidence: c.confidence(),
            })
            .collect()
    }
}

impl Default for CheckEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct CheckerInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: crate::core::Severity,
    pub confidence: crate::core::Confidence,
}

#[derive(Debug)]
pub struct CheckReport {
    findings: Vec<Finding>,
}

impl CheckReport {
    pub fn new(mut findings: Vec<Finding>) -> Self {
        findings.sort_by(|a, b| {
            b.priority_score()
                .cmp(&a.priority_score())
                .then_with(|| a.contract.cmp(&b.contract))
        });
        Self { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn count_by_severity(&self) -> SeverityCount {
        let mut count = SeverityCount::default();
        for finding in &self.findings {
            match finding.severity {
                crate::core::Severity::Critical => count.critical += 1,
                crate::core::Severity::High => count.high += 1,
                crate::core::Severity::Medium => count.medium += 1,
                crate::core::Severity::Low => count.low += 1,
                crate::core::Severity::Informational => count.informational += 1,
            }
        }
        count
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.findings)?)
    }

    pub fn to_markdown(&self) -> String {
        let mut md = String::from("# Check Report\n\n");

        let count = self.count_by_severity();
        md.push_str("## Summary\n\n");
        md.push_str(&format!("- Critical: {}\n", count.critical));
        md.push_str(&format!("- High: {}\n", count.high));
        md.push_str(&format!("- Medium: {}\n", count.medium));
        md.push_str(&format!("- Low: {}\n", count.low));
        md.push_str(&format!("- Informational: {}\n\n", count.informational));

        if !self.findings.is_empty() {
            md.push_str("## Findings\n\n");

            for finding in &self.findings {
                md.push_str(&format!(
                    "### {} {}: {}\n\n",
                    finding.severity.emoji(),
                    finding.severity,
                    finding.title
                ));
                md.push_str(&format!("**Checker:** {}\n", finding.checker_id));
                md.push_str(&format!("**Confidence:** {}\n\n", finding.confidence));
                md.push_str(&format!("{}\n\n", finding.description));

                if let Some(ref path) = finding.source_path {
                    md.push_str(&format!("**Source:** {}\n\n", path));
                }

                let bases = finding.responsible_bases();
                if !bases.is_empty() {
                    md.push_str("**Upgradeable bases:**\n");
                    for base in bases {
                        md.push_str(&format!("- {}\n", base));
                    }
                    md.push('\n');
                }
            }
        }

        md
    }
}

#[derive(Debug, Default)]
pub struct SeverityCount {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub informational: usize,
}
