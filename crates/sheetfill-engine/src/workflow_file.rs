use crate::action::{Action, ActionKind, FillColumn};
use crate::error::EngineError;
use crate::workflow::Workflow;
use serde::{Deserialize, Serialize};

/// One action entry as it appears in a workflow file.
///
/// `kind` is the textual action-type identifier; it is resolved through
/// [`ActionKind`], so an unrecognised kind surfaces as
/// [`EngineError::UnknownAction`] rather than a serde error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionSpec {
    pub kind: String,
    pub target: String,
    #[serde(default)]
    pub sources: Vec<String>,
    pub template: String,
}

impl From<&Action> for ActionSpec {
    fn from(action: &Action) -> Self {
        match action {
            Action::FillColumn(fill) => ActionSpec {
                kind: ActionKind::FillColumn.as_str().to_string(),
                target: fill.target().to_string(),
                sources: fill.sources().to_vec(),
                template: fill.template().raw().to_string(),
            },
        }
    }
}

impl TryFrom<ActionSpec> for Action {
    type Error = EngineError;

    fn try_from(spec: ActionSpec) -> Result<Self, Self::Error> {
        match spec.kind.parse::<ActionKind>()? {
            ActionKind::FillColumn => Ok(Action::FillColumn(FillColumn::new(
                spec.target,
                spec.sources,
                &spec.template,
            )?)),
        }
    }
}

/// Persisted form of a workflow: a name plus its ordered action entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowSpec {
    pub name: String,
    pub actions: Vec<ActionSpec>,
}

impl WorkflowSpec {
    /// Validate every entry and build the runnable workflow.
    pub fn into_workflow(self) -> Result<Workflow, EngineError> {
        let mut workflow = Workflow::new(self.name);
        for spec in self.actions {
            workflow.add_action(Action::try_from(spec)?);
        }
        Ok(workflow)
    }
}

impl From<&Workflow> for WorkflowSpec {
    fn from(workflow: &Workflow) -> Self {
        WorkflowSpec {
            name: workflow.name().to_string(),
            actions: workflow.actions().iter().map(ActionSpec::from).collect(),
        }
    }
}
