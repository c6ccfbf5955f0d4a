use crate::error::EngineError;
use crate::template::Template;
use sheetfill_common::{CellValue, RowRange};
use sheetfill_store::TabularStore;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Textual identifiers for the known action types.
///
/// Dispatch itself is a closed enum ([`Action`]); this type only exists where
/// action types enter the system as strings (workflow files, command line),
/// which is where an unknown identifier can still occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    FillColumn,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::FillColumn => "fill-column",
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fill-column" => Ok(ActionKind::FillColumn),
            other => Err(EngineError::UnknownAction {
                name: other.to_string(),
            }),
        }
    }
}

/// Success summary of a single executed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub target: String,
    pub rows_filled: u32,
}

impl Display for ActionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "filled column '{}' ({} rows)",
            self.target, self.rows_filled
        )
    }
}

/// Fill a target column by rendering a template from source columns, row by
/// row over a range.
///
/// Construction validates everything that does not need the store: the
/// template must parse, the source list must be non-empty, and every
/// placeholder must name a declared source column. Column existence is
/// checked against the store at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillColumn {
    target: String,
    sources: Vec<String>,
    template: Template,
}

impl FillColumn {
    pub fn new(
        target: impl Into<String>,
        sources: Vec<String>,
        template: &str,
    ) -> Result<Self, EngineError> {
        if sources.is_empty() {
            return Err(EngineError::invalid_format(
                "at least one source column is required",
            ));
        }
        let template = Template::parse(template)?;
        template.validate_against(&sources)?;
        Ok(Self {
            target: target.into(),
            sources,
            template,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    fn execute(
        &self,
        store: &mut dyn TabularStore,
        range: RowRange,
    ) -> Result<ActionReport, EngineError> {
        if !store.is_open() {
            return Err(EngineError::StoreClosed);
        }

        // All structural validation happens before any row is written.
        for source in &self.sources {
            if !store.has_column(source) {
                return Err(EngineError::InvalidColumn {
                    column: source.clone(),
                });
            }
        }
        self.template.validate_against(&self.sources)?;

        let Some((start, end)) = range.resolve(store.row_count()) else {
            // Range resolves to no rows: success, zero rows affected.
            return Ok(ActionReport {
                target: self.target.clone(),
                rows_filled: 0,
            });
        };

        // Strictly sequential: a later row may observe what earlier rows
        // wrote, should an action ever use its target as a source.
        let mut rows_filled = 0u32;
        for row in start..=end {
            let rendered = self
                .template
                .render(|name| {
                    if self.sources.iter().any(|s| s == name) {
                        Some(store.cell(name, row).render())
                    } else {
                        None
                    }
                })
                .map_err(|e| EngineError::RowSubstitution {
                    row,
                    placeholder: e.name,
                })?;
            store.set_cell(&self.target, row, CellValue::Text(rendered));
            rows_filled += 1;
        }

        tracing::debug!(target_column = %self.target, rows_filled, "fill-column completed");
        Ok(ActionReport {
            target: self.target.clone(),
            rows_filled,
        })
    }

    fn label(&self) -> String {
        format!("fill column '{}'", self.target)
    }
}

/// A single configured action. Immutable once added to a workflow.
///
/// Action dispatch is a closed set of variants rather than a string-keyed
/// registry, so an unknown action type cannot reach execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FillColumn(FillColumn),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::FillColumn(_) => ActionKind::FillColumn,
        }
    }

    /// Short human-readable label used in progress reporting.
    pub fn label(&self) -> String {
        match self {
            Action::FillColumn(fill) => fill.label(),
        }
    }

    /// Run this action against the store over the given row range.
    ///
    /// Mutates the store in place only; persisting to disk is the caller's
    /// explicit, separate save.
    pub fn execute(
        &self,
        store: &mut dyn TabularStore,
        range: RowRange,
    ) -> Result<ActionReport, EngineError> {
        match self {
            Action::FillColumn(fill) => fill.execute(store, range),
        }
    }
}

impl From<FillColumn> for Action {
    fn from(fill: FillColumn) -> Self {
        Action::FillColumn(fill)
    }
}
