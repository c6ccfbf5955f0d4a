use thiserror::Error;

/// Structured failures raised by action execution and workflow management.
///
/// Every variant carries enough context to produce the human-readable message
/// the calling layer presents; nothing is silently swallowed. Structural
/// validation errors (`InvalidColumn`, `InvalidFormat`) are raised before any
/// row is touched; only `RowSubstitution` can leave earlier rows of the same
/// action already written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// An action-type identifier from a textual boundary (workflow file,
    /// command line) that no known action matches.
    #[error("unknown action type '{name}'")]
    UnknownAction { name: String },

    #[error("source column '{column}' does not exist")]
    InvalidColumn { column: String },

    #[error("invalid format template: {reason}")]
    InvalidFormat { reason: String },

    /// Substitution failed mid-iteration. Rows before `row` are already
    /// written and are not rolled back.
    #[error("substitution failed at row {row}: no value for placeholder '{placeholder}'")]
    RowSubstitution { row: u32, placeholder: String },

    #[error("workflow '{name}' already exists")]
    DuplicateWorkflow { name: String },

    #[error("workflow '{name}' not found")]
    WorkflowNotFound { name: String },

    #[error("no data loaded in the tabular store")]
    StoreClosed,
}

impl EngineError {
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        EngineError::InvalidFormat {
            reason: reason.into(),
        }
    }
}
