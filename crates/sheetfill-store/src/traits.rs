use crate::error::StoreError;
use sheetfill_common::CellValue;

/// Column-addressed access to loaded tabular data.
///
/// This is the engine's only external boundary: the fill executor reads
/// source cells and writes target cells through this trait, and persistence
/// is an explicit, separate `save` call made by whoever owns the store.
///
/// Semantics:
/// - Columns are identified by name and keep their insertion order.
/// - Row indices are zero-based. Reads outside the grid return
///   [`CellValue::Empty`]; they are not errors.
/// - Writes create the target column on demand, padded with `Empty`.
/// - The store is exclusively owned by the single active caller for the
///   duration of a run; no interior locking is provided.
pub trait TabularStore {
    /// Whether data is loaded and the store is ready for cell access.
    fn is_open(&self) -> bool;

    /// Column names in insertion order.
    fn column_names(&self) -> Vec<String>;

    fn has_column(&self, name: &str) -> bool {
        self.column_names().iter().any(|c| c == name)
    }

    fn row_count(&self) -> u32;

    /// Read a cell. Absent cells and unknown columns yield `Empty`.
    fn cell(&self, column: &str, row: u32) -> CellValue;

    /// Write a cell, creating the column if it does not exist yet and growing
    /// the row extent if the write lands past the current last row.
    fn set_cell(&mut self, column: &str, row: u32, value: CellValue);

    /// Persist to backing storage. Stores without a backing file may treat
    /// this as a no-op or report [`StoreError::NoBackingPath`].
    fn save(&mut self) -> Result<(), StoreError>;
}
