pub mod action;
pub mod error;
pub mod manager;
pub mod template;
pub mod workflow;
#[cfg(feature = "serde")]
pub mod workflow_file;

pub use action::{Action, ActionKind, ActionReport, FillColumn};
pub use error::EngineError;
pub use manager::WorkflowManager;
pub use template::{Template, UnresolvedPlaceholder};
pub use workflow::Workflow;
#[cfg(feature = "serde")]
pub use workflow_file::{ActionSpec, WorkflowSpec};

// Re-export for convenience
pub use sheetfill_common::{CellValue, RowRange};
pub use sheetfill_store::TabularStore;
