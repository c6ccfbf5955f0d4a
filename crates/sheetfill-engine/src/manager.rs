use crate::error::EngineError;
use crate::workflow::Workflow;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// A named collection of workflows.
///
/// Owned and passed explicitly by the caller whose lifetime should bound the
/// workflows; there is no process-wide instance. Names are unique within one
/// manager at any instant. Single-threaded use, no interior locking.
#[derive(Debug, Default)]
pub struct WorkflowManager {
    workflows: FxHashMap<String, Workflow>,
}

impl WorkflowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register an empty workflow under `name`.
    pub fn create_workflow(
        &mut self,
        name: impl Into<String>,
    ) -> Result<&mut Workflow, EngineError> {
        match self.workflows.entry(name.into()) {
            Entry::Occupied(e) => Err(EngineError::DuplicateWorkflow {
                name: e.key().clone(),
            }),
            Entry::Vacant(v) => {
                let workflow = Workflow::new(v.key().clone());
                Ok(v.insert(workflow))
            }
        }
    }

    /// Register an already-built workflow under its own name.
    pub fn insert(&mut self, workflow: Workflow) -> Result<&mut Workflow, EngineError> {
        match self.workflows.entry(workflow.name().to_string()) {
            Entry::Occupied(e) => Err(EngineError::DuplicateWorkflow {
                name: e.key().clone(),
            }),
            Entry::Vacant(v) => Ok(v.insert(workflow)),
        }
    }

    /// Discard the workflow registered under `name`, returning it.
    pub fn remove_workflow(&mut self, name: &str) -> Result<Workflow, EngineError> {
        self.workflows
            .remove(name)
            .ok_or_else(|| EngineError::WorkflowNotFound {
                name: name.to_string(),
            })
    }

    pub fn get(&self, name: &str) -> Option<&Workflow> {
        self.workflows.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Workflow> {
        self.workflows.get_mut(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.workflows.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}
