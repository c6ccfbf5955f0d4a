use crate::error::StoreError;
use crate::traits::TabularStore;
use rustc_hash::FxHashMap;
use sheetfill_common::CellValue;

/// In-memory tabular grid: insertion-ordered columns over dense cell vectors.
///
/// Every column vector is kept at the same length as the table's row extent;
/// absent values are stored as `Empty` rather than sparsely omitted.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    order: Vec<String>,
    columns: FxHashMap<String, Vec<CellValue>>,
    rows: u32,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, cells)` pairs. Shorter columns are padded
    /// with `Empty` to the longest column's length.
    pub fn from_columns<I, S, V>(cols: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: IntoIterator<Item = CellValue>,
    {
        let mut table = Self::new();
        for (name, cells) in cols {
            let name = name.into();
            let cells: Vec<CellValue> = cells.into_iter().collect();
            table.rows = table.rows.max(cells.len() as u32);
            table.order.push(name.clone());
            table.columns.insert(name, cells);
        }
        table.pad_columns();
        table
    }

    pub fn push_column<S: Into<String>>(&mut self, name: S, cells: Vec<CellValue>) {
        let name = name.into();
        self.rows = self.rows.max(cells.len() as u32);
        if !self.columns.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.columns.insert(name, cells);
        self.pad_columns();
    }

    /// Append one record in column order. Missing trailing fields are `Empty`;
    /// a record must not be wider than the column list (grow it first with
    /// [`MemoryTable::push_column`]).
    pub fn push_row(&mut self, record: Vec<CellValue>) {
        debug_assert!(record.len() <= self.order.len());
        for (i, name) in self.order.iter().enumerate() {
            let value = record.get(i).cloned().unwrap_or(CellValue::Empty);
            if let Some(col) = self.columns.get_mut(name) {
                col.push(value);
            }
        }
        self.rows += 1;
    }

    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(|c| c.as_slice())
    }

    fn pad_columns(&mut self) {
        let rows = self.rows as usize;
        for col in self.columns.values_mut() {
            if col.len() < rows {
                col.resize(rows, CellValue::Empty);
            }
        }
    }
}

impl TabularStore for MemoryTable {
    fn is_open(&self) -> bool {
        !self.order.is_empty()
    }

    fn column_names(&self) -> Vec<String> {
        self.order.clone()
    }

    fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    fn row_count(&self) -> u32 {
        self.rows
    }

    fn cell(&self, column: &str, row: u32) -> CellValue {
        self.columns
            .get(column)
            .and_then(|c| c.get(row as usize))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    fn set_cell(&mut self, column: &str, row: u32, value: CellValue) {
        if !self.columns.contains_key(column) {
            self.order.push(column.to_string());
            self.columns
                .insert(column.to_string(), vec![CellValue::Empty; self.rows as usize]);
        }
        if row >= self.rows {
            self.rows = row + 1;
            self.pad_columns();
        }
        if let Some(col) = self.columns.get_mut(column) {
            col[row as usize] = value;
        }
    }

    fn save(&mut self) -> Result<(), StoreError> {
        // Purely in-memory; nothing to persist.
        Ok(())
    }
}
