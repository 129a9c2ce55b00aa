use crate::core::Severity;
use crate::graph::{classify, Classification, InheritanceGraph};

#[derive(Debug, Clone, Default)]
pub struct ProjectInfo {
    pub name: String,
    pub path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub parallel_execution: bool,
    pub min_severity: Option<Severity>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            parallel_execution: true,
            min_severity: None, // Show all by default
        }
    }
}

/// Read-only view shared by every checker: the built graph, its
/// classification sets, and run configuration. Built once per project;
/// checkers never mutate it.
pub struct AnalysisContext {
    graph: InheritanceGraph,
    classification: Classification,
    project_info: ProjectInfo,
    config: CheckerConfig,
}

impl AnalysisContext {
    pub fn new(graph: InheritanceGraph) -> Self {
        Self::with_config(graph, CheckerConfig::default())
    }

    pub fn with_config(graph: InheritanceGraph, config: CheckerConfig) -> Self {
        let classification = classify(&graph);
        Self {
            graph,
            classification,
            project_info: ProjectInfo::default(),
            config,
        }
    }

    pub fn set_project_info(&mut self, info: ProjectInfo) {
        self.project_info = info;
    }

    pub fn graph(&self) -> &InheritanceGraph {
        &self.graph
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn project_info(&self) -> &ProjectInfo {
        &self.project_info
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }
}
