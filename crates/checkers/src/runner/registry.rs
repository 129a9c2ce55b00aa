use crate::core::Checker;
use crate::storage_gap::StorageGapChecker;
use std::collections::HashMap;
use std::sync::Arc;

pub struct CheckerRegistry {
    checkers: HashMap<String, Arc<dyn Checker>>,
}

impl CheckerRegistry {
    pub fn new() -> Self {
        Self {
            checkers: HashMap::new(),
        }
    }

    pub fn register<C: Checker + 'static>(&mut self, checker: C) {
        let id = checker.id().to_string();
        self.checkers.insert(id, Arc::new(checker));
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Checker>> {
        self.checkers.get(id).cloned()
    }

    pub fn all(&self) -> Vec<Arc<dyn Checker>> {
        self.checkers.values().cloned().collect()
    }

    pub fn enabled(&self) -> Vec<Arc<dyn Checker>> {
        self.checkers
            .values()
            .filter(|c| c.enabled_by_default())
            .cloned()
            .collect()
    }

    pub fn list_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.checkers.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CheckerRegistryBuilder {
    registry: CheckerRegistry,
}

impl CheckerRegistryBuilder {
    pub fn new() -> Self {
        Self {
            registry: CheckerRegistry::new(),
        }
    }

    pub fn with_checker<C: Checker + 'static>(mut self, checker: C) -> Self {
        self.registry.register(checker);
        self
    }

    pub fn with_defaults(mut self) -> Self {
        self.registry.register(StorageGapChecker::new());
        self
    }

    pub fn build(self) -> CheckerRegistry {
        self.registry
    }
}

impl Default for CheckerRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
