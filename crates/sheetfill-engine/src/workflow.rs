use crate::action::{Action, ActionReport};
use crate::error::EngineError;
use sheetfill_common::RowRange;
use sheetfill_store::TabularStore;

/// An ordered list of actions executed sequentially over one row range.
///
/// Insertion order is execution order. Adding an action performs no
/// store-dependent validation; that is deferred to execution, where each
/// action validates before touching any row.
#[derive(Debug, Clone)]
pub struct Workflow {
    name: String,
    actions: Vec<Action>,
}

impl Workflow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn add_action(&mut self, action: impl Into<Action>) {
        self.actions.push(action.into());
    }

    /// Run every action in order against the store, sharing one row range.
    ///
    /// After each action completes, success or failure, `progress` is invoked
    /// with the percentage of actions finished and the action's label; only
    /// then is the action's result inspected. The first failure
    /// short-circuits: remaining actions do not run, and the store keeps
    /// whatever earlier actions already wrote. An empty workflow is a no-op
    /// success.
    ///
    /// The callback runs synchronously on the caller's control flow; a panic
    /// inside it propagates and aborts the run.
    pub fn execute(
        &self,
        store: &mut dyn TabularStore,
        range: RowRange,
        progress: &mut dyn FnMut(f64, &str),
    ) -> Result<Vec<ActionReport>, EngineError> {
        let total = self.actions.len();
        let mut reports = Vec::with_capacity(total);

        for (i, action) in self.actions.iter().enumerate() {
            let label = action.label();
            tracing::debug!(
                workflow = %self.name,
                step = i + 1,
                total,
                action = %label,
                "running workflow step"
            );
            let result = action.execute(store, range);
            let percentage = (i + 1) as f64 / total as f64 * 100.0;
            progress(percentage, &label);
            reports.push(result?);
        }

        tracing::info!(workflow = %self.name, actions = total, "workflow completed");
        Ok(reports)
    }
}
